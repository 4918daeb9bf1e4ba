use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::StoreError;

/// Streams the store file to the writer byte for byte.
pub fn handle_list(path: &Path, writer: &mut impl Write) -> Result<(), StoreError> {
    let bytes = std::fs::read(path).map_err(StoreError::Read)?;
    debug!(path = %path.display(), bytes = bytes.len(), "listing store");
    writer.write_all(&bytes).map_err(StoreError::Write)?;
    Ok(())
}
