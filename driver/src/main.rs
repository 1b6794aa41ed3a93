use anyhow::Context;
use clap::Parser;
use log::info;
use mwpotdata::prelude::DEFAULT_DSINL;
use std::path::PathBuf;
use workflow::config;
use workflow::runner::{catalog_listing, Runner, Selection};

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Load the Milky Way potential survey tables")]
struct Args {
    /// Survey (or group of surveys) to read
    #[arg(long, value_enum, default_value_t = Selection::All)]
    survey: Selection,
    /// Load the reader settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "data")]
    data_root: PathBuf,
    /// Decay scale of the sine-longitude correlation kernel
    #[arg(long, default_value_t = DEFAULT_DSINL)]
    dsinl: f64,
    /// Skip longitude binning where the survey allows it
    #[arg(long, default_value_t = false)]
    no_bin: bool,
    /// Print the full records as JSON instead of summaries
    #[arg(long, default_value_t = false)]
    json: bool,
    /// List the catalogued surveys and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        for line in catalog_listing() {
            println!("{}", line);
        }
        return Ok(());
    }

    let reader_config = if let Some(path) = args.config {
        config::load(path)?
    } else {
        config::from_args(args.data_root, args.dsinl, !args.no_bin)
    };
    info!(
        "reading {:?} from {}",
        args.survey,
        reader_config.data_root.display()
    );

    let runner = Runner::new(reader_config);
    let results = runner.execute(args.survey)?;

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&results).context("serializing survey records")?;
        println!("{}", rendered);
    } else {
        for entry in &results {
            println!("{}", entry.summary());
        }
    }

    Ok(())
}
