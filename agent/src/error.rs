use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request to the portal failed: {0}")]
    Http(#[from] reqwest::Error),

    /// No directory with the key file was found in any search root.
    #[error("No '{dir_name}' directory containing '{key_file}' found")]
    DirectoryNotFound { dir_name: String, key_file: String },

    #[error("License key file {0} is empty")]
    EmptyKey(PathBuf),
}

pub type Result<T> = std::result::Result<T, AgentError>;
