//! Optional request-level acceptance rules applied after parameter parsing.

use crate::error::ValidationError;
use crate::query::SearchQuery;

/// Rejects searches that carry none of keyword, location, or language.
///
/// Disabled by default: the engine accepts any combination of filters,
/// including none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredFilterPolicy {
    enabled: bool,
}

impl RequiredFilterPolicy {
    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    #[must_use]
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredFilter`] when the policy is
    /// enabled and the query has no keyword, location, `lat_lng`, or language.
    pub fn check(&self, query: &SearchQuery) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }

        if query.keyword.is_some() || query.has_location() || query.language.is_some() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequiredFilter)
        }
    }
}
