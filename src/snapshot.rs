//! JSON snapshot helpers
//!
//! The algorithms operate on in-memory records only; these helpers cover the
//! edge where a snapshot enters or leaves the process as JSON, for the demo
//! binary and for test fixtures.

use crate::error::Result;
use crate::models::person::PersonRecord;
use std::fs;
use std::path::Path;

/// Parse a snapshot from a JSON array of person records
pub fn parse_snapshot(json: &str) -> Result<Vec<PersonRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a snapshot from a JSON file
pub fn read_snapshot(path: &Path) -> Result<Vec<PersonRecord>> {
    let text = fs::read_to_string(path)?;
    let records = parse_snapshot(&text)?;
    log::info!("Loaded {} person record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Write a snapshot to a JSON file
pub fn write_snapshot(path: &Path, records: &[PersonRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    log::info!("Wrote {} person record(s) to {}", records.len(), path.display());
    Ok(())
}
