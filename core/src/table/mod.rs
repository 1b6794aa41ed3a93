//! Loading of the raw survey tables.
//!
//! ```text
//!  data_root / relative path
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  reader   │  delimited text → Array2<f64>
//!   └──────────┘
//!        │
//!        ▼
//!   select_column → Array1<f64>
//! ```

pub mod reader;

pub use reader::{read_table, select_column, DataRoot, Delimiter};
