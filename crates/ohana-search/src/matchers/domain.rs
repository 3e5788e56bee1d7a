use std::collections::BTreeSet;

use ohana_core::LocationRecord;
use url::Url;

use super::{collect_where, FilterKind, MatchSet, Matcher};
use crate::query::SearchQuery;

/// Matches a bare domain against hosts derived from a location's URLs and
/// e-mail addresses.
///
/// URL hosts lose a leading `www.`; the query does not, so
/// `www.example.org` never matches. Public mail-provider domains are
/// ignored on both sides.
#[derive(Debug, Clone, Default)]
pub struct DomainMatcher {
    excluded: BTreeSet<String>,
}

impl DomainMatcher {
    #[must_use]
    pub fn new(excluded: BTreeSet<String>) -> Self {
        Self { excluded }
    }

    fn is_excluded(&self, domain: &str) -> bool {
        self.excluded.contains(domain)
    }

    fn location_domains(&self, record: &LocationRecord) -> BTreeSet<String> {
        let from_urls = record.urls.iter().filter_map(|u| url_host(u));
        let from_emails = record
            .emails
            .iter()
            .chain(&record.admin_emails)
            .filter_map(|e| email_host(e));

        from_urls
            .chain(from_emails)
            .filter(|d| !self.is_excluded(d))
            .collect()
    }
}

impl Matcher for DomainMatcher {
    fn kind(&self) -> FilterKind {
        FilterKind::Domain
    }

    fn matches(&self, query: &SearchQuery, corpus: &[LocationRecord]) -> Option<MatchSet> {
        let raw = query.domain.as_deref()?;
        let wanted = query_domain(raw);

        if wanted.is_empty() || self.is_excluded(&wanted) {
            tracing::debug!(domain = %wanted, "domain is empty or a public mail provider");
            return Some(MatchSet::new());
        }

        Some(collect_where(corpus, |r| {
            self.location_domains(r).contains(&wanted)
        }))
    }
}

/// Lowercased query domain; an e-mail address is reduced to its host.
fn query_domain(raw: &str) -> String {
    let raw = raw.trim().to_ascii_lowercase();
    match raw.rsplit_once('@') {
        Some((_, host)) => host.to_string(),
        None => raw,
    }
}

/// Host of a URL with any leading `www.` removed. A missing scheme is
/// assumed to be `http`.
#[must_use]
pub fn url_host(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with("mailto:") {
        return None;
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    let parsed = Url::parse(&with_scheme).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// Host part of an e-mail address, lowercased.
#[must_use]
pub fn email_host(raw: &str) -> Option<String> {
    let (local, host) = raw.trim().rsplit_once('@')?;
    if local.is_empty() || host.is_empty() {
        return None;
    }
    Some(host.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::fixtures::location;
    use crate::query::{validate, SearchParams};
    use crate::settings::SearchSettings;

    fn domain(raw: &str) -> SearchQuery {
        validate(
            &SearchParams {
                domain: Some(raw.to_string()),
                ..SearchParams::default()
            },
            &SearchSettings::default(),
        )
        .expect("valid params")
    }

    fn matcher() -> DomainMatcher {
        DomainMatcher::new(SearchSettings::default().excluded_domains)
    }

    fn corpus() -> Vec<LocationRecord> {
        let mut a = location(1, "VRS Services", "Parent Agency");
        a.urls = vec!["http://www.smchsa.org/portal/site/planning".to_string()];
        a.emails = vec!["info@smchsa.org".to_string()];
        a.admin_emails = vec!["moncef@smcgov.org".to_string()];

        let mut b = location(2, "Farmers Market", "Markets");
        b.emails = vec!["market@gmail.com".to_string()];
        b.urls = vec!["https://www.gmail.com".to_string()];

        let mut c = location(3, "Library", "City");
        c.urls = vec!["burlingame.org/library".to_string()];

        vec![a, b, c]
    }

    fn ids(query: &SearchQuery) -> Vec<u64> {
        matcher()
            .matches(query, &corpus())
            .unwrap()
            .into_keys()
            .collect()
    }

    #[test]
    fn url_host_strips_scheme_www_and_path() {
        assert_eq!(
            url_host("http://www.smchsa.org/portal/site/planning").as_deref(),
            Some("smchsa.org")
        );
        assert_eq!(url_host("burlingame.org/library").as_deref(), Some("burlingame.org"));
        assert_eq!(url_host("HTTPS://Example.ORG:8080/x?y=1").as_deref(), Some("example.org"));
        assert_eq!(url_host("mailto:info@smchsa.org"), None);
        assert_eq!(url_host(""), None);
    }

    #[test]
    fn email_host_requires_local_part() {
        assert_eq!(email_host("Info@SMCHSA.org").as_deref(), Some("smchsa.org"));
        assert_eq!(email_host("@smchsa.org"), None);
        assert_eq!(email_host("smchsa.org"), None);
    }

    #[test]
    fn matches_url_and_email_hosts() {
        assert_eq!(ids(&domain("smchsa.org")), vec![1]);
        assert_eq!(ids(&domain("smcgov.org")), vec![1]);
        assert_eq!(ids(&domain("burlingame.org")), vec![3]);
    }

    #[test]
    fn www_prefixed_query_does_not_match() {
        assert!(ids(&domain("www.smchsa.org")).is_empty());
    }

    #[test]
    fn email_address_query_uses_host() {
        assert_eq!(ids(&domain("someone@smchsa.org")), vec![1]);
    }

    #[test]
    fn public_mail_providers_never_match() {
        assert!(ids(&domain("gmail.com")).is_empty());
        assert!(ids(&domain("info@sbcglobal.net")).is_empty());
    }

    #[test]
    fn partial_domain_does_not_match() {
        assert!(ids(&domain("smchsa")).is_empty());
    }
}
