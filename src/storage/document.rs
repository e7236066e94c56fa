//! Backing document
//!
//! Reads and rewrites the `{"animals": [...]}` file.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZooError};
use crate::model::Animal;

/// On-disk shape of the collection
///
/// Borrows the records when rendering, owns them when loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalDocument<'a> {
    pub animals: Cow<'a, [Animal]>,
}

/// Handle to the backing document on disk
#[derive(Debug, Clone)]
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the collection
    ///
    /// Returns `Ok(None)` if the file does not exist yet. A file that exists
    /// but does not parse is an error; it is never silently replaced.
    pub fn load(&self) -> Result<Option<Vec<Animal>>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let document: AnimalDocument<'static> = serde_json::from_slice(&raw).map_err(|e| {
            ZooError::Storage(format!(
                "cannot parse {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(Some(document.animals.into_owned()))
    }

    /// Overwrite the document with the full collection
    pub fn save(&self, animals: &[Animal]) -> Result<()> {
        let json = Self::render(animals)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Serialize the collection the way it is stored
    pub fn render(animals: &[Animal]) -> Result<String> {
        let document = AnimalDocument {
            animals: Cow::Borrowed(animals),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
