use ohana_core::LocationRecord;

use super::{collect_where, FilterKind, MatchSet, Matcher};
use crate::query::SearchQuery;

/// Full e-mail address match against a location's public and admin
/// addresses. A bare domain never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailMatcher;

impl Matcher for EmailMatcher {
    fn kind(&self) -> FilterKind {
        FilterKind::Email
    }

    fn matches(&self, query: &SearchQuery, corpus: &[LocationRecord]) -> Option<MatchSet> {
        let wanted = query.email.as_deref()?;
        if !is_full_address(wanted) {
            return Some(MatchSet::new());
        }

        Some(collect_where(corpus, |r| {
            r.emails
                .iter()
                .chain(&r.admin_emails)
                .any(|e| e.trim().eq_ignore_ascii_case(wanted))
        }))
    }
}

fn is_full_address(raw: &str) -> bool {
    raw.split_once('@')
        .is_some_and(|(local, host)| !local.is_empty() && !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::fixtures::location;
    use crate::query::{validate, SearchParams};
    use crate::settings::SearchSettings;

    fn email(raw: &str) -> SearchQuery {
        validate(
            &SearchParams {
                email: Some(raw.to_string()),
                ..SearchParams::default()
            },
            &SearchSettings::default(),
        )
        .expect("valid params")
    }

    fn corpus() -> Vec<LocationRecord> {
        let mut a = location(1, "VRS Services", "Parent Agency");
        a.emails = vec!["info@smchsa.org".to_string()];
        a.admin_emails = vec!["moncef@smcgov.org".to_string()];
        vec![a, location(2, "Library", "City")]
    }

    fn ids(query: &SearchQuery) -> Vec<u64> {
        EmailMatcher
            .matches(query, &corpus())
            .unwrap()
            .into_keys()
            .collect()
    }

    #[test]
    fn matches_public_and_admin_addresses() {
        assert_eq!(ids(&email("info@smchsa.org")), vec![1]);
        assert_eq!(ids(&email("moncef@smcgov.org")), vec![1]);
        assert_eq!(ids(&email("INFO@smchsa.org")), vec![1]);
    }

    #[test]
    fn bare_domain_matches_nothing() {
        assert!(ids(&email("smchsa.org")).is_empty());
        assert!(ids(&email("@smchsa.org")).is_empty());
    }

    #[test]
    fn partial_address_matches_nothing() {
        assert!(ids(&email("info@smchsa")).is_empty());
    }
}
