use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sorter `{name}` produced incorrect output")]
    Incorrect { name: String },

    #[error("no input sizes given")]
    EmptySizes,
}

pub type Result<T> = std::result::Result<T, Error>;
