use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::OutputError;

pub const SHELL_NIX: &str = "shell.nix";
pub const DOCKERFILE: &str = "Dockerfile";

/// A file the runner is about to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: Utf8PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(dir: &Utf8Path, name: &str, content: String) -> Self {
        Self {
            path: dir.join(name),
            content,
        }
    }
}

/// Overwrite `path` with `content`, creating its directory when needed.
pub fn write(path: &Utf8Path, content: &str) -> Result<(), OutputError> {
    let failure = |source| OutputError::FileWriteFailure {
        path: path.to_owned(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
        fs::create_dir_all(parent).map_err(failure)?;
    }
    fs::write(path, content).map_err(failure)
}
