use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use roster_types::Record;
use tracing::debug;

use crate::error::StoreError;

/// Strict loader: any read or parse failure is surfaced to the caller.
pub fn load(path: &Path) -> Result<Vec<Record>, StoreError> {
    let bytes = std::fs::read(path).map_err(StoreError::Read)?;
    let records = serde_json::from_slice(&bytes).map_err(StoreError::InvalidStore)?;
    Ok(records)
}

/// Lenient loader: a store that is missing, unreadable, empty, or not a
/// record array reads as `None`. Callers decide what that means.
pub fn load_lenient(path: &Path) -> Option<Vec<Record>> {
    let bytes = std::fs::read(path).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Serializes the whole list and rewrites the file in place, truncating
/// whatever was there. Not atomic: a crash mid-write can leave a truncated
/// store behind.
pub fn save(records: &[Record], path: &Path) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec(records).map_err(StoreError::Marshal)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(StoreError::Open)?;
    file.write_all(&bytes).map_err(StoreError::Write)?;
    // File::drop swallows close errors; sync surfaces them.
    file.sync_all().map_err(StoreError::Close)?;

    debug!(path = %path.display(), records = records.len(), "rewrote store");
    Ok(())
}
