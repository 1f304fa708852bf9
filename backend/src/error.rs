pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid path prefix {0:?}, it may not contain route parameters or wildcards")]
    InvalidPrefix(String),
}
