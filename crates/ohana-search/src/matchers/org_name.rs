use ohana_core::LocationRecord;

use super::{collect_where, FilterKind, MatchSet, Matcher};
use crate::query::SearchQuery;

/// Organization name search: `"Food+Pantry"` and `"food pantry"` both
/// require every term to appear in the organization name.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrgNameMatcher;

impl Matcher for OrgNameMatcher {
    fn kind(&self) -> FilterKind {
        FilterKind::OrgName
    }

    fn matches(&self, query: &SearchQuery, corpus: &[LocationRecord]) -> Option<MatchSet> {
        let raw = query.org_name.as_deref()?;
        let terms: Vec<String> = raw
            .split(|c: char| c == '+' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();
        if terms.is_empty() {
            return Some(MatchSet::new());
        }

        Some(collect_where(corpus, |r| {
            let name = r.organization.name.to_lowercase();
            terms.iter().all(|t| name.contains(t.as_str()))
        }))
    }
}
