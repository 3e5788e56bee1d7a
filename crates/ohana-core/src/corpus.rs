use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::locations::LocationRecord;
use crate::ConfigError;

#[derive(Debug, Deserialize)]
pub struct CorpusFile {
    pub locations: Vec<LocationRecord>,
}

/// Load and validate a location corpus from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_corpus(path: &Path) -> Result<CorpusFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CorpusFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_corpus(&content)
}

/// Parse and validate a location corpus from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text cannot be parsed or fails validation.
pub fn parse_corpus(content: &str) -> Result<CorpusFile, ConfigError> {
    let corpus: CorpusFile = serde_yaml::from_str(content)?;
    validate_corpus(&corpus)?;
    Ok(corpus)
}

fn validate_corpus(corpus: &CorpusFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for location in &corpus.locations {
        if location.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "location {} must have a non-empty name",
                location.id
            )));
        }

        if location.organization.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "location '{}' has an organization with an empty name",
                location.name
            )));
        }

        if !seen_ids.insert(location.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate location id: {}",
                location.id
            )));
        }

        if let Some(coords) = location.coordinates {
            if !coords.is_valid() {
                return Err(ConfigError::Validation(format!(
                    "location '{}' has out-of-range coordinates ({}, {})",
                    location.name, coords.latitude, coords.longitude
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "corpus_test.rs"]
mod tests;
