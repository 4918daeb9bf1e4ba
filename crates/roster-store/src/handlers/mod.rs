use std::io::Write;
use std::path::Path;

use roster_types::{Operation, ParseOperationError, Request};
use tracing::debug;

use crate::error::StoreError;

mod add;
mod find;
mod list;
mod remove;

pub use add::handle_add;
pub use find::handle_find_by_id;
pub use list::handle_list;
pub use remove::handle_remove;

/// Routes a request to its operation handler. Flag presence is validated
/// here so no handler runs with a missing parameter.
pub fn perform(request: &Request, writer: &mut impl Write) -> Result<(), StoreError> {
    let operation = require(request.operation.as_deref(), "--operation")?;
    let file_name = require(request.file_name.as_deref(), "--fileName")?;

    let operation: Operation = operation
        .parse()
        .map_err(|err: ParseOperationError| StoreError::UnsupportedOperation { name: err.name })?;

    let path = Path::new(file_name);
    debug!(%operation, path = %path.display(), "dispatching operation");

    match operation {
        Operation::List => handle_list(path, writer),
        Operation::Add => {
            let item = require(request.item.as_deref(), "--item")?;
            handle_add(item, path, writer)
        }
        Operation::Remove => {
            let id = require(request.id.as_deref(), "--id")?;
            handle_remove(id, path, writer)
        }
        Operation::FindById => {
            let id = require(request.id.as_deref(), "--id")?;
            handle_find_by_id(id, path, writer)
        }
    }
}

fn require<'a>(value: Option<&'a str>, flag: &'static str) -> Result<&'a str, StoreError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(StoreError::MissingArgument { flag }),
    }
}
