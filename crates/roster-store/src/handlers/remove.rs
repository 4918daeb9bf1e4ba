use std::io::Write;
use std::path::Path;

use roster_types::Record;
use tracing::debug;

use crate::error::StoreError;
use crate::store;

/// Drops every record matching the id, preserving the order of the rest.
/// A store that cannot be read or parsed is a no-op success: there is
/// nothing to remove from it.
pub fn handle_remove(id: &str, path: &Path, writer: &mut impl Write) -> Result<(), StoreError> {
    let Some(records) = store::load_lenient(path) else {
        return Ok(());
    };

    let before = records.len();
    let remaining: Vec<Record> = records.into_iter().filter(|r| r.id != id).collect();

    if remaining.len() == before {
        write!(writer, "Item with id {} not found", id).map_err(StoreError::Write)?;
        return Ok(());
    }

    debug!(id, removed = before - remaining.len(), "removing records");
    store::save(&remaining, path)
}
