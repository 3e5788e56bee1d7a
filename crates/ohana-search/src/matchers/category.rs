use ohana_core::LocationRecord;

use super::{FilterKind, Hit, MatchSet, Matcher};
use crate::query::SearchQuery;

/// Exact, case-sensitive category name match through linked services.
///
/// Unlike keyword search there is no case folding or plural handling:
/// `"jobs"` does not match a category named `"Jobs"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryMatcher;

impl Matcher for CategoryMatcher {
    fn kind(&self) -> FilterKind {
        FilterKind::Category
    }

    fn matches(&self, query: &SearchQuery, corpus: &[LocationRecord]) -> Option<MatchSet> {
        let wanted = query.category.as_deref()?;
        Some(
            corpus
                .iter()
                .filter(|r| r.category_names().contains(wanted))
                .map(|r| (r.id, Hit { via_category: true }))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::fixtures::{location, service};
    use crate::query::{validate, SearchParams};
    use crate::settings::SearchSettings;

    fn category(name: &str) -> SearchQuery {
        validate(
            &SearchParams {
                category: Some(name.to_string()),
                ..SearchParams::default()
            },
            &SearchSettings::default(),
        )
        .expect("valid params")
    }

    fn corpus() -> Vec<LocationRecord> {
        let mut a = location(1, "VRS Services", "Parent Agency");
        a.services = vec![service(1, "Training", &[], &["Jobs", "Education"])];
        let mut b = location(2, "Soup Kitchen", "Food Pantry");
        b.services = vec![service(2, "Meals", &[], &["Food"]), service(3, "Intake", &[], &["Jobs"])];
        let c = location(3, "Library", "City");
        vec![a, b, c]
    }

    #[test]
    fn exact_name_matches_across_services() {
        let set = CategoryMatcher.matches(&category("Jobs"), &corpus()).unwrap();
        assert_eq!(set.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert!(set.values().all(|h| h.via_category));
    }

    #[test]
    fn case_difference_matches_nothing() {
        let set = CategoryMatcher.matches(&category("jobs"), &corpus()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn plural_difference_matches_nothing() {
        let set = CategoryMatcher.matches(&category("Job"), &corpus()).unwrap();
        assert!(set.is_empty());
    }
}
