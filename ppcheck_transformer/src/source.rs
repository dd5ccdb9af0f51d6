use std::path::{Path, PathBuf};

use crate::TransformerError;

/// Input handed to a transformer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Fragment { name: String, text: String },
}

impl Source {
    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        Source::File(path.into())
    }
    pub fn fragment<S: Into<String>>(text: S) -> Self {
        Source::Fragment {
            name: "<fragment>".to_string(),
            text: text.into(),
        }
    }
    pub fn name(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Fragment { name, .. } => name.clone(),
        }
    }
    /// Directory quoted includes are resolved against first
    pub fn directory(&self) -> Option<&Path> {
        match self {
            Source::File(path) => path.parent(),
            Source::Fragment { .. } => None,
        }
    }
    pub fn read(&self) -> Result<String, TransformerError> {
        match self {
            Source::File(path) => std::fs::read_to_string(path).map_err(|source| TransformerError::Io { path: path.clone(), source }),
            Source::Fragment { text, .. } => Ok(text.clone()),
        }
    }
}
