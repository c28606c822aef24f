use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Codec failures (empty input, malformed Base64)
    #[error("Codec error: {0}")]
    Codec(#[from] crate::codec::CodecError),

    /// Site matcher failures (unparseable URL)
    #[error("Site error: {0}")]
    Site(#[from] crate::sites::SiteError),

    /// Sites file load/save
    #[error("Sites store error: {0}")]
    Store(#[from] crate::sites::store::StoreError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;
