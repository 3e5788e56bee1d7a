//! Read-only access to the location records a search runs over.

use std::path::Path;
use std::sync::Arc;

use ohana_core::LocationRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus unavailable: {0}")]
    Unavailable(String),
}

/// Source of a consistent snapshot of every searchable location.
///
/// One snapshot is taken per search; the engine never mutates it.
pub trait Corpus: Send + Sync {
    /// # Errors
    ///
    /// Returns [`CorpusError`] when the backing store cannot be read.
    fn snapshot(&self) -> Result<Arc<[LocationRecord]>, CorpusError>;
}

/// A corpus held entirely in memory, sorted by location id.
#[derive(Debug, Clone)]
pub struct InMemoryCorpus {
    records: Arc<[LocationRecord]>,
}

impl InMemoryCorpus {
    #[must_use]
    pub fn new(mut records: Vec<LocationRecord>) -> Self {
        records.sort_by_key(|r| r.id);
        Self {
            records: records.into(),
        }
    }

    /// Load and validate a YAML corpus file.
    ///
    /// # Errors
    ///
    /// Returns [`ohana_core::ConfigError`] if the file cannot be read, parsed,
    /// or validated.
    pub fn from_file(path: &Path) -> Result<Self, ohana_core::ConfigError> {
        let file = ohana_core::load_corpus(path)?;
        Ok(Self::new(file.locations))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Corpus for InMemoryCorpus {
    fn snapshot(&self) -> Result<Arc<[LocationRecord]>, CorpusError> {
        Ok(Arc::clone(&self.records))
    }
}
