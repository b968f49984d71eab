#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid store: {0}")]
    InvalidStore(String),

    #[error("Record is missing a url")]
    MissingUrl,

    #[error("Duplicate url {0}")]
    DuplicateUrl(String),

    #[error("Invalid query: {0}")]
    Query(String),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
