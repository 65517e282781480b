use super::error::InfrastructureError;
use crate::domain::file_storage_trait::FileStorage;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorage for LocalFileStorage {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_image(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError> {
        let data = fs::read(path).map_err(InfrastructureError::IoError)?;
        Ok(data)
    }

    fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(InfrastructureError::FileStorageError(format!(
                    "output directory {} does not exist",
                    parent.display()
                )));
            }
        }
        let mut file = BufWriter::new(File::create(path).map_err(InfrastructureError::IoError)?);
        file.write_all(data).map_err(InfrastructureError::IoError)?;
        file.flush().map_err(InfrastructureError::IoError)?;
        Ok(())
    }
}
