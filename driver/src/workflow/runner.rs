use anyhow::Context;
use clap::ValueEnum;
use mwpotdata::prelude::{BovyRix13Data, ReaderConfig, TerminalVelocityData};
use mwpotdata::survey::catalog::{
    BOVY_RIX_13, CLEMENS_85, MCCLURE_GRIFFITHS_07, MCCLURE_GRIFFITHS_16, SURVEYS,
};
use mwpotdata::SurveyReader;
use serde::Serialize;

/// Survey selection accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Selection {
    BovyRix13,
    Clemens,
    McclureGriffiths07,
    McclureGriffiths16,
    McclureGriffiths,
    All,
}

/// Full payload of one survey read.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SurveyPayload {
    Kz(BovyRix13Data),
    TerminalVelocity(TerminalVelocityData),
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveyResultEntry {
    pub name: &'static str,
    pub payload: SurveyPayload,
}

impl SurveyResultEntry {
    pub fn summary(&self) -> String {
        match &self.payload {
            SurveyPayload::Kz(data) => format!("{}: {} Kz points", self.name, data.kzs.len()),
            SurveyPayload::TerminalVelocity(data) => {
                let empty = data.glon.iter().filter(|v| v.is_nan()).count();
                format!(
                    "{}: {} terminal velocities ({} empty bins), corr {}x{}",
                    self.name,
                    data.len(),
                    empty,
                    data.corr.nrows(),
                    data.corr.ncols()
                )
            }
        }
    }
}

/// One line per catalogued survey: name, relative path and longitude window.
pub fn catalog_listing() -> Vec<String> {
    SURVEYS
        .iter()
        .map(|spec| match spec.window {
            Some(window) => format!(
                "{}\t{}\t({}, {})",
                spec.name, spec.path, window.lo, window.hi
            ),
            None => format!("{}\t{}\t-", spec.name, spec.path),
        })
        .collect()
}

#[derive(Clone)]
pub struct Runner {
    reader: SurveyReader,
}

impl Runner {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            reader: SurveyReader::new(config),
        }
    }

    pub fn execute(&self, selection: Selection) -> anyhow::Result<Vec<SurveyResultEntry>> {
        let reader = &self.reader;
        let mut results = Vec::new();

        let wants = |target: Selection| selection == target || selection == Selection::All;

        if wants(Selection::BovyRix13) {
            let data = reader
                .read_bovy_rix13_kz_data()
                .context("reading Bovy & Rix 2013 Kz data")?;
            results.push(SurveyResultEntry {
                name: BOVY_RIX_13.name,
                payload: SurveyPayload::Kz(data),
            });
        }

        if wants(Selection::Clemens) {
            let data = reader
                .read_clemens()
                .context("reading Clemens 1985 terminal velocities")?;
            results.push(SurveyResultEntry {
                name: CLEMENS_85.name,
                payload: SurveyPayload::TerminalVelocity(data),
            });
        }

        if wants(Selection::McclureGriffiths) {
            let combined = reader
                .read_all_mcclure_griffiths()
                .context("reading McClure-Griffiths terminal velocities")?;
            results.push(SurveyResultEntry {
                name: MCCLURE_GRIFFITHS_07.name,
                payload: SurveyPayload::TerminalVelocity(combined.mg07),
            });
            results.push(SurveyResultEntry {
                name: MCCLURE_GRIFFITHS_16.name,
                payload: SurveyPayload::TerminalVelocity(combined.mg16),
            });
        } else {
            if selection == Selection::McclureGriffiths07 {
                let data = reader
                    .read_mcclure_griffiths07()
                    .context("reading McClure-Griffiths 2007 terminal velocities")?;
                results.push(SurveyResultEntry {
                    name: MCCLURE_GRIFFITHS_07.name,
                    payload: SurveyPayload::TerminalVelocity(data),
                });
            }
            if selection == Selection::McclureGriffiths16 {
                let data = reader
                    .read_mcclure_griffiths16()
                    .context("reading McClure-Griffiths 2016 terminal velocities")?;
                results.push(SurveyResultEntry {
                    name: MCCLURE_GRIFFITHS_16.name,
                    payload: SurveyPayload::TerminalVelocity(data),
                });
            }
        }

        Ok(results)
    }
}
