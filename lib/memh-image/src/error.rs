use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("couldn't read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("couldn't write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl ConvertError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConvertError::Read { path, .. } | ConvertError::Write { path, .. } => path,
        }
    }
}
