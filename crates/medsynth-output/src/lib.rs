//! Dataset CSV output.
//!
//! Files are UTF-8 with a byte-order mark, semicolon-delimited, CRLF
//! terminated, with quoting only where a field needs it.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{UTF8_BOM, write_dataset, write_dataset_csv};
