use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use medsynth_model::{VISIT_RECORD_HEADER, VisitRecord};
use tracing::info;

use crate::error::{OutputError, Result};

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes BOM, header row and one row per record to `sink`.
pub fn write_dataset<W: Write>(mut sink: W, records: &[VisitRecord]) -> Result<()> {
    sink.write_all(UTF8_BOM).map_err(csv::Error::from)?;
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(sink);
    writer.write_record(VISIT_RECORD_HEADER)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the dataset to `path`, creating parent directories and replacing
/// any existing file.
pub fn write_dataset_csv(path: &Path, records: &[VisitRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| OutputError::io(path, e))?;
    write_dataset(BufWriter::new(file), records)?;
    info!(path = %path.display(), rows = records.len(), "dataset written");
    Ok(())
}
