use ndarray::Array1;

use crate::prelude::{
    BovyRix13Data, McClureGriffithsData, ReaderConfig, SurveyError, SurveyResult,
    TerminalVelocityData,
};
use crate::processing::binning::{bin_longitudes, drop_nan_bins};
use crate::processing::correlation::inverse_corr;
use crate::processing::filter::filter_longitude;
use crate::survey::catalog::{
    ColumnMap, SurveySpec, BOVY_RIX_13, CLEMENS_85, MCCLURE_GRIFFITHS_07, MCCLURE_GRIFFITHS_16,
};
use crate::table::{read_table, select_column, DataRoot};
use crate::telemetry::log::LogManager;

/// Longitude bin width used by every terminal-velocity survey.
pub const BIN_WIDTH_DEG: f64 = 1.0;

/// Reads the catalogued surveys from a data root.
#[derive(Debug, Clone, Default)]
pub struct SurveyReader {
    config: ReaderConfig,
}

impl SurveyReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    fn data_root(&self) -> DataRoot {
        DataRoot::new(self.config.data_root.clone())
    }

    fn load_columns<const N: usize>(
        &self,
        spec: &SurveySpec,
        columns: [usize; N],
        logger: &LogManager,
    ) -> SurveyResult<[Array1<f64>; N]> {
        let path = self.data_root().resolve(spec.path);
        logger.detail(&format!("reading {}", path.display()));
        let table = read_table(&path, spec.delimiter, spec.comment)?;
        logger.detail(&format!("loaded {} rows x {} columns", table.nrows(), table.ncols()));

        let mut out: [Array1<f64>; N] = std::array::from_fn(|_| Array1::zeros(0));
        for (slot, &index) in out.iter_mut().zip(columns.iter()) {
            *slot = select_column(&table, index)?;
        }
        Ok(out)
    }

    /// Bovy & Rix (2013) Kz measurements; no filtering, binning or correlation.
    pub fn read_bovy_rix13_kz_data(&self) -> SurveyResult<BovyRix13Data> {
        let spec = &BOVY_RIX_13;
        let logger = LogManager::new(spec.name);
        let (surfr, kz, kzerr) = match spec.columns {
            ColumnMap::Kz { surfr, kz, kzerr } => (surfr, kz, kzerr),
            ColumnMap::TerminalVelocity { .. } => {
                return Err(SurveyError::InvalidInput(format!(
                    "{} is not a Kz survey",
                    spec.name
                )))
            }
        };

        let [surfrs, kzs, kzerrs] = self.load_columns(spec, [surfr, kz, kzerr], &logger)?;
        logger.record(&format!("read {} Kz measurements", surfrs.len()));
        Ok(BovyRix13Data {
            surfrs,
            kzs,
            kzerrs,
        })
    }

    /// Generic terminal-velocity pipeline: load, filter, bin, correlate.
    pub fn read_terminal_velocity(
        &self,
        spec: &SurveySpec,
        dsinl: f64,
        bin: bool,
    ) -> SurveyResult<TerminalVelocityData> {
        let logger = LogManager::new(spec.name);
        let (glon_col, vterm_col) = match spec.columns {
            ColumnMap::TerminalVelocity { glon, vterm } => (glon, vterm),
            ColumnMap::Kz { .. } => {
                return Err(SurveyError::InvalidInput(format!(
                    "{} is not a terminal velocity survey",
                    spec.name
                )))
            }
        };

        let [mut glon, mut vterm] = self.load_columns(spec, [glon_col, vterm_col], &logger)?;

        if let Some(window) = spec.window {
            (glon, vterm) = filter_longitude(&glon, &vterm, window);
            logger.detail(&format!(
                "{} rows inside ({}, {})",
                glon.len(),
                window.lo,
                window.hi
            ));
        }

        if spec.bins(bin) {
            (glon, vterm) = bin_longitudes(&glon, &vterm, BIN_WIDTH_DEG)?;
            if spec.drop_empty_bins {
                let total = glon.len();
                (glon, vterm) = drop_nan_bins(&glon, &vterm);
                logger.detail(&format!("dropped {} empty bins", total - glon.len()));
            }
        }

        let corr = inverse_corr(&glon, dsinl)?;
        logger.record(&format!(
            "read {} terminal velocities (dsinl {:.4}, binned {})",
            glon.len(),
            dsinl,
            spec.bins(bin)
        ));
        Ok(TerminalVelocityData { glon, vterm, corr })
    }

    /// Clemens (1985) table 2 with the configured `dsinl`.
    pub fn read_clemens(&self) -> SurveyResult<TerminalVelocityData> {
        // Clemens is always binned; CLEMENS_85 carries BinPolicy::Always.
        self.read_terminal_velocity(&CLEMENS_85, self.config.dsinl, true)
    }

    /// McClure-Griffiths & Dickey (2007) with the configured `dsinl` and `bin`.
    pub fn read_mcclure_griffiths07(&self) -> SurveyResult<TerminalVelocityData> {
        self.read_terminal_velocity(&MCCLURE_GRIFFITHS_07, self.config.dsinl, self.config.bin)
    }

    /// McClure-Griffiths & Dickey (2016) with the configured `dsinl` and `bin`.
    pub fn read_mcclure_griffiths16(&self) -> SurveyResult<TerminalVelocityData> {
        self.read_terminal_velocity(&MCCLURE_GRIFFITHS_16, self.config.dsinl, self.config.bin)
    }

    pub fn read_all_mcclure_griffiths(&self) -> SurveyResult<McClureGriffithsData> {
        Ok(McClureGriffithsData {
            mg07: self.read_mcclure_griffiths07()?,
            mg16: self.read_mcclure_griffiths16()?,
        })
    }
}

fn reader_with(dsinl: f64, bin: bool) -> SurveyReader {
    SurveyReader::new(ReaderConfig {
        dsinl,
        bin,
        ..Default::default()
    })
}

/// Bovy & Rix (2013) data under the default data root.
pub fn read_bovy_rix13_kz_data() -> SurveyResult<BovyRix13Data> {
    SurveyReader::default().read_bovy_rix13_kz_data()
}

pub fn read_clemens(dsinl: f64) -> SurveyResult<TerminalVelocityData> {
    reader_with(dsinl, true).read_clemens()
}

pub fn read_mcclure_griffiths07(dsinl: f64, bin: bool) -> SurveyResult<TerminalVelocityData> {
    reader_with(dsinl, bin).read_mcclure_griffiths07()
}

pub fn read_mcclure_griffiths16(dsinl: f64, bin: bool) -> SurveyResult<TerminalVelocityData> {
    reader_with(dsinl, bin).read_mcclure_griffiths16()
}

pub fn read_all_mcclure_griffiths(dsinl: f64, bin: bool) -> SurveyResult<McClureGriffithsData> {
    reader_with(dsinl, bin).read_all_mcclure_griffiths()
}
