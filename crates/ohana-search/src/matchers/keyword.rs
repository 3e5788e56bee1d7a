use ohana_core::LocationRecord;

use super::{FilterKind, Hit, MatchSet, Matcher};
use crate::normalize::{split_words, variants};
use crate::query::SearchQuery;

/// Free-text keyword search.
///
/// Every word must hit somewhere (name, description, organization name,
/// service name or keywords, or a linked category name), but each word may
/// hit a different field. Matching is case-insensitive substring over the
/// word's singular and plural variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher;

impl Matcher for KeywordMatcher {
    fn kind(&self) -> FilterKind {
        FilterKind::Keyword
    }

    fn matches(&self, query: &SearchQuery, corpus: &[LocationRecord]) -> Option<MatchSet> {
        let keyword = query.keyword.as_deref()?;
        let words: Vec<_> = split_words(keyword).map(variants).collect();
        if words.is_empty() {
            return Some(MatchSet::new());
        }

        let mut out = MatchSet::new();
        for record in corpus {
            let text = searchable_text(record);
            let categories: Vec<String> = record
                .category_names()
                .into_iter()
                .map(str::to_lowercase)
                .collect();

            let mut via_category = false;
            let all_words_hit = words.iter().all(|forms| {
                let in_text = forms.iter().any(|f| text.iter().any(|t| t.contains(f.as_str())));
                let in_category = forms
                    .iter()
                    .any(|f| categories.iter().any(|c| c.contains(f.as_str())));
                via_category |= in_category;
                in_text || in_category
            });

            if all_words_hit {
                out.insert(record.id, Hit { via_category });
            }
        }

        Some(out)
    }
}

fn searchable_text(record: &LocationRecord) -> Vec<String> {
    let mut text = vec![
        record.name.to_lowercase(),
        record.organization.name.to_lowercase(),
    ];
    if let Some(description) = &record.description {
        text.push(description.to_lowercase());
    }
    for service in &record.services {
        text.push(service.name.to_lowercase());
        text.extend(service.keywords.iter().map(|k| k.to_lowercase()));
    }
    text
}
