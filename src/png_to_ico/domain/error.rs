use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    // ICO のエントリは 1..=256 px まで
    #[error("Invalid icon size: {0} (must be between 1 and 256)")]
    InvalidIconSize(u32),
}
