//! Store Module
//!
//! Owns the in-memory collection and its backing document.
//!
//! ## Responsibilities
//! - Load the collection once on startup
//! - Serve filtered lists and id lookups to concurrent readers
//! - Validate, assign ids, append and persist new animals
//! - Keep memory and disk consistent when a write fails

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{Result, ZooError};
use crate::model::{validate_animal, Animal, AnimalDraft};
use crate::query::{filter_by_query, find_by_id, AnimalQuery};
use crate::storage::DocumentFile;

/// The animal collection
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader
///
/// - **Reads** (list/get): take the read lock and clone results out
/// - **Writes** (create): hold the write lock across id assignment, append
///   and the document rewrite, so ids and the file always agree
pub struct AnimalStore {
    /// Where the collection is persisted
    document: DocumentFile,

    /// Records in insertion order
    animals: RwLock<Vec<Animal>>,
}

impl AnimalStore {
    /// Open the store at the configured document
    ///
    /// A missing document starts an empty collection; the file is created
    /// on the first write.
    pub fn open(config: &Config) -> Result<Self> {
        let document = DocumentFile::new(&config.data_file);

        let animals = match document.load()? {
            Some(animals) => {
                tracing::info!(
                    "Loaded {} animals from {}",
                    animals.len(),
                    document.path().display()
                );
                animals
            }
            None => {
                tracing::info!(
                    "No document at {}, starting empty",
                    document.path().display()
                );
                Vec::new()
            }
        };

        Ok(Self::with_animals(document, animals))
    }

    /// Build a store from an initial snapshot
    ///
    /// The snapshot is trusted and not validated.
    pub fn with_animals(document: DocumentFile, animals: Vec<Animal>) -> Self {
        Self {
            document,
            animals: RwLock::new(animals),
        }
    }

    /// Animals matching every filter in `query`
    pub fn list(&self, query: &AnimalQuery) -> Vec<Animal> {
        let animals = self.animals.read();
        filter_by_query(query, &animals)
    }

    /// The first animal with the given id
    pub fn get(&self, id: &str) -> Result<Animal> {
        let animals = self.animals.read();
        find_by_id(id, &animals)
            .cloned()
            .ok_or(ZooError::AnimalNotFound)
    }

    /// Validate a draft, assign its id and append it
    ///
    /// Steps:
    /// 1. Acquire write lock
    /// 2. Id = current length, as a decimal string
    /// 3. Validate and convert the draft
    /// 4. Append, then rewrite the whole document
    /// 5. On a failed rewrite, drop the appended record again
    pub fn create(&self, draft: AnimalDraft) -> Result<Animal> {
        let mut animals = self.animals.write();

        let id = animals.len().to_string();

        if !validate_animal(&draft) {
            tracing::warn!("Rejected animal draft (would have been id {})", id);
            return Err(ZooError::InvalidAnimal);
        }
        let animal = draft.into_animal(id)?;

        animals.push(animal.clone());

        if let Err(e) = self.document.save(&animals) {
            animals.pop();
            tracing::error!(
                "Failed to persist animal {} to {}: {}",
                animal.id,
                self.document.path().display(),
                e
            );
            return Err(e);
        }

        tracing::debug!("Created animal {} ({})", animal.id, animal.name);
        Ok(animal)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of animals in the collection
    pub fn len(&self) -> usize {
        self.animals.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.read().is_empty()
    }

    /// Copy of the whole collection
    pub fn snapshot(&self) -> Vec<Animal> {
        self.animals.read().clone()
    }

    /// Get the backing document path
    pub fn document_path(&self) -> &std::path::Path {
        self.document.path()
    }
}
