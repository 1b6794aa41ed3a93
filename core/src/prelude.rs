use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default decay scale of the sine-longitude correlation kernel.
pub const DEFAULT_DSINL: f64 = 0.5 / 8.0;

/// Shared configuration for every survey reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Static data directory that survey paths are resolved against.
    pub data_root: PathBuf,
    pub dsinl: f64,
    pub bin: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("data"),
            dsinl: DEFAULT_DSINL,
            bin: true,
        }
    }
}

impl ReaderConfig {
    pub fn with_root<P: Into<PathBuf>>(data_root: P) -> Self {
        Self {
            data_root: data_root.into(),
            ..Default::default()
        }
    }
}

/// Vertical force measurements from Bovy & Rix (2013).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BovyRix13Data {
    pub surfrs: Array1<f64>,
    pub kzs: Array1<f64>,
    pub kzerrs: Array1<f64>,
}

/// Terminal velocities with the inverse of their correlation matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalVelocityData {
    pub glon: Array1<f64>,
    pub vterm: Array1<f64>,
    /// Inverse correlation matrix, `glon.len()` square.
    pub corr: Array2<f64>,
}

impl TerminalVelocityData {
    pub fn len(&self) -> usize {
        self.glon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glon.is_empty()
    }
}

/// Both McClure-Griffiths terminal velocity sets, kept apart by survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McClureGriffithsData {
    pub mg07: TerminalVelocityData,
    pub mg16: TerminalVelocityData,
}

impl McClureGriffithsData {
    /// Positional view in the order `(glon07, vterm07, corr07, glon16, vterm16, corr16)`.
    #[allow(clippy::type_complexity)]
    pub fn into_tuple(
        self,
    ) -> (
        Array1<f64>,
        Array1<f64>,
        Array2<f64>,
        Array1<f64>,
        Array1<f64>,
        Array2<f64>,
    ) {
        (
            self.mg07.glon,
            self.mg07.vterm,
            self.mg07.corr,
            self.mg16.glon,
            self.mg16.vterm,
            self.mg16.corr,
        )
    }
}

/// Common error type for every reader.
#[derive(thiserror::Error, Debug)]
pub enum SurveyError {
    #[error("data unavailable: {0}")]
    DataUnavailable(String),
    #[error("numerically singular: {0}")]
    NumericallySingular(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type SurveyResult<T> = Result<T, SurveyError>;
