use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{flag} flag has to be specified")]
    MissingArgument { flag: &'static str },
    #[error("Operation {name} not allowed!")]
    UnsupportedOperation { name: String },
    #[error("failed to read store file: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to parse record JSON: {0}")]
    InvalidRecord(#[source] serde_json::Error),
    #[error("failed to parse store file as a record list: {0}")]
    InvalidStore(#[source] serde_json::Error),
    #[error("failed to serialize records as JSON: {0}")]
    Marshal(#[source] serde_json::Error),
    #[error("failed to open store file for writing: {0}")]
    Open(#[source] std::io::Error),
    #[error("failed to write store file: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to close store file: {0}")]
    Close(#[source] std::io::Error),
}
