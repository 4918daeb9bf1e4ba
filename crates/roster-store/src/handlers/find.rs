use std::io::Write;
use std::path::Path;

use crate::error::StoreError;
use crate::store;

/// Writes every matching record as compact JSON, back to back with no
/// separator. Zero matches is still a success; only add and remove report
/// misses.
pub fn handle_find_by_id(id: &str, path: &Path, writer: &mut impl Write) -> Result<(), StoreError> {
    let records = store::load(path)?;

    for record in records.iter().filter(|r| r.id == id) {
        let bytes = serde_json::to_vec(record).map_err(StoreError::Marshal)?;
        writer.write_all(&bytes).map_err(StoreError::Write)?;
    }

    Ok(())
}
