//! Catalogue of the supported surveys and the reader that walks it.

pub mod catalog;
pub mod reader;

pub use catalog::{BinPolicy, ColumnMap, SurveySpec, SURVEYS};
pub use reader::{
    read_all_mcclure_griffiths, read_bovy_rix13_kz_data, read_clemens, read_mcclure_griffiths07,
    read_mcclure_griffiths16, SurveyReader,
};
