//! Reference-data ingestion.
//!
//! All inputs are semicolon-delimited, headerless, UTF-8 files (a leading
//! BOM is tolerated, `#` starts a comment line).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use medsynth_ingest::{load_catalog, load_seasonality};
//!
//! let catalog = load_catalog(
//!     Path::new("data/medical_specialities.csv"),
//!     Path::new("data/medical_tests_and_prices.csv"),
//! )?;
//! let seasonality = load_seasonality(Path::new("data/seasonality.csv"))?;
//! ```

mod catalog;
mod error;
mod names;
mod reader;
mod seasonality;

// === Error Types ===
pub use error::{IngestError, Result};

// === Specialist Catalog ===
pub use catalog::{
    SpecialistRow, join_catalog, load_analyses, load_catalog, load_specialists, parse_analyses,
    parse_specialists,
};

// === Seasonality ===
pub use seasonality::{load_seasonality, parse_seasonality};

// === Name Tables ===
pub use names::{load_name_table, load_name_tables, parse_name_table};
