//! Readers for the static survey tables used to fit Milky Way potentials.
//!
//! Each reader loads a fixed-format text table from the data root, restricts it
//! to the survey's longitude window, optionally bins it in longitude and pairs
//! the result with the inverse of a sine-longitude correlation matrix.

pub mod math;
pub mod prelude;
pub mod processing;
pub mod survey;
pub mod table;
pub mod telemetry;

pub use prelude::{
    BovyRix13Data, McClureGriffithsData, ReaderConfig, SurveyError, SurveyResult,
    TerminalVelocityData,
};
pub use survey::SurveyReader;
