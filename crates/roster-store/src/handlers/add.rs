use std::io::Write;
use std::path::Path;

use roster_types::Record;
use tracing::debug;

use crate::error::StoreError;
use crate::store;

/// Appends a record unless its id is already taken. An unreadable or
/// malformed store reads as empty so the first add bootstraps the file.
pub fn handle_add(item: &str, path: &Path, writer: &mut impl Write) -> Result<(), StoreError> {
    let record: Record = serde_json::from_str(item).map_err(StoreError::InvalidRecord)?;

    let mut records = store::load_lenient(path).unwrap_or_default();
    if records.iter().any(|existing| existing.id == record.id) {
        write!(writer, "Item with id {} already exists", record.id)
            .map_err(StoreError::Write)?;
        return Ok(());
    }

    debug!(id = %record.id, "appending record");
    records.push(record);
    store::save(&records, path)
}
