use thiserror::Error;

/// qr2cad error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to fetch QR image: {0}")]
    Fetch(String),

    #[error("Failed to encode QR code: {0}")]
    Encode(String),

    #[error("Failed to decode QR image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Cannot sample module grid: {0}")]
    GridSample(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Fetch(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
