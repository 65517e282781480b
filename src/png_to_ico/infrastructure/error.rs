use thiserror::Error;
use crate::domain::error::DomainError;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Image processing failed: {0}")]
    ImageProcessingError(String),

    #[error("File storage error: {0}")]
    FileStorageError(String),

    #[error("{0}")]
    ImageLibError(#[from] image::ImageError), // image::ImageError をラップ

    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    ConfigError(#[from] toml::de::Error),

    // IconSpec の検証は設定読み込み時にも走る
    #[error("{0}")]
    DomainErrorWrapper(#[from] DomainError),
}
