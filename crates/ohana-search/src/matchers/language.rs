use ohana_core::LocationRecord;

use super::{collect_where, FilterKind, MatchSet, Matcher};
use crate::query::SearchQuery;

/// Language tag match on the location or any of its services.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageMatcher;

impl Matcher for LanguageMatcher {
    fn kind(&self) -> FilterKind {
        FilterKind::Language
    }

    fn matches(&self, query: &SearchQuery, corpus: &[LocationRecord]) -> Option<MatchSet> {
        let wanted = query.language.as_deref()?;
        Some(collect_where(corpus, |r| {
            r.all_languages()
                .any(|l| l.trim().eq_ignore_ascii_case(wanted))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::fixtures::{location, service};
    use crate::query::{validate, SearchParams};
    use crate::settings::SearchSettings;

    #[test]
    fn matches_location_or_service_languages() {
        let mut a = location(1, "Library", "City");
        a.languages = vec!["Arabic".to_string(), "English".to_string()];
        let mut b = location(2, "VRS Services", "Parent Agency");
        let mut svc = service(1, "Benefits", &[], &[]);
        svc.languages = vec!["Spanish".to_string()];
        b.services = vec![svc];

        let query = |lang: &str| {
            validate(
                &SearchParams {
                    language: Some(lang.to_string()),
                    ..SearchParams::default()
                },
                &SearchSettings::default(),
            )
            .expect("valid params")
        };
        let corpus = vec![a, b];

        let ids = |q: &SearchQuery| -> Vec<u64> {
            LanguageMatcher.matches(q, &corpus).unwrap().into_keys().collect()
        };
        assert_eq!(ids(&query("arabic")), vec![1]);
        assert_eq!(ids(&query("Spanish")), vec![2]);
        assert!(ids(&query("French")).is_empty());
    }
}
