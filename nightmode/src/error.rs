pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the environment the controller runs in. None of them are
/// recovered from, they are handed back to the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("document unavailable: {0}")]
    DocumentUnavailable(String),
    #[error("color scheme hint unavailable: {0}")]
    HintUnavailable(String),
}
