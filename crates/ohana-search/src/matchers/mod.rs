//! Per-filter candidate matchers.
//!
//! Each matcher looks at one query parameter and, when that parameter is
//! present, returns the ids of every location it accepts. The combiner
//! intersects those sets; matchers never see each other's output.

mod category;
mod domain;
mod email;
mod keyword;
mod language;
mod org_name;

use std::collections::BTreeMap;

use ohana_core::{LocationId, LocationRecord};

use crate::query::SearchQuery;
use crate::settings::SearchSettings;

pub use category::CategoryMatcher;
pub use domain::{email_host, url_host, DomainMatcher};
pub use email::EmailMatcher;
pub use keyword::KeywordMatcher;
pub use language::LanguageMatcher;
pub use org_name::OrgNameMatcher;

/// Tag recorded on a candidate for every filter it satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKind {
    Keyword,
    Category,
    OrgName,
    Domain,
    Email,
    Language,
    Location,
}

impl FilterKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Category => "category",
            Self::OrgName => "org_name",
            Self::Domain => "domain",
            Self::Email => "email",
            Self::Language => "language",
            Self::Location => "location",
        }
    }
}

/// Per-location detail a matcher reports alongside the hit itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hit {
    /// The match came through a category name on a linked service.
    pub via_category: bool,
}

pub type MatchSet = BTreeMap<LocationId, Hit>;

pub trait Matcher: Send + Sync {
    fn kind(&self) -> FilterKind;

    /// `None` when the query does not use this filter; otherwise the
    /// (possibly empty) set of matching locations.
    fn matches(&self, query: &SearchQuery, corpus: &[LocationRecord]) -> Option<MatchSet>;
}

/// The standard matcher set, one per filter parameter.
#[must_use]
pub fn default_matchers(settings: &SearchSettings) -> Vec<Box<dyn Matcher>> {
    vec![
        Box::new(KeywordMatcher),
        Box::new(CategoryMatcher),
        Box::new(OrgNameMatcher),
        Box::new(DomainMatcher::new(settings.excluded_domains.clone())),
        Box::new(EmailMatcher),
        Box::new(LanguageMatcher),
    ]
}

/// Collect plain hits for every record accepted by `pred`.
pub(crate) fn collect_where<F>(corpus: &[LocationRecord], pred: F) -> MatchSet
where
    F: Fn(&LocationRecord) -> bool,
{
    corpus
        .iter()
        .filter(|r| pred(r))
        .map(|r| (r.id, Hit::default()))
        .collect()
}
