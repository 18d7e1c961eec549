use crate::errors::{AppError, AppResult};
use crate::models::Subvencion;
use std::fs::File;

/// Serialize the record set as pretty JSON, one object per record.
pub fn write_json(path: &str, records: &[&Subvencion]) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &records)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {e}")))?;
    Ok(())
}
