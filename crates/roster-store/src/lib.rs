mod error;
mod handlers;
mod store;

pub use error::StoreError;
pub use handlers::{handle_add, handle_find_by_id, handle_list, handle_remove, perform};
pub use store::{load, load_lenient, save};
