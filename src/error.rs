use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures raised while turning a request into Nix text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Language \"{0}\" is not supported yet.")]
    UnsupportedLanguage(String),
    #[error("{language} version \"{version}\" is not supported")]
    InvalidVersion { language: String, version: String },
}

impl GenerateError {
    pub fn invalid_version(language: &str, version: &str) -> Self {
        GenerateError::InvalidVersion {
            language: language.to_owned(),
            version: version.to_owned(),
        }
    }
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    FileWriteFailure {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}
