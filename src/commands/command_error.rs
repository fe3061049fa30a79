use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum CommandError {
    #[error("key or field not found")]
    NotFound,
    #[error("value is not an integer or out of range")]
    NotNumeric,
    #[error("list is empty")]
    EmptyQueue,
    #[error("timed out waiting for list element")]
    Timeout,
}
