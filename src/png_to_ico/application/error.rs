use thiserror::Error;
use crate::infrastructure::error::InfrastructureError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // デコード・エンコード・I/O のエラーはここに集まる
    #[error("{0}")]
    InfrastructureError(#[from] InfrastructureError),

    #[error("{source:#}")]
    AnyhowError {
        #[from]
        source: anyhow::Error,
    },
}
