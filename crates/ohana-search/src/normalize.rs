//! Singular/plural folding for keyword terms.
//!
//! A small rule table, not a stemmer: it only covers the regular English
//! suffixes (`-s`, `-es`, `-ies`) that directory keywords actually use.

use std::collections::BTreeSet;

/// Lowercased variants of `term`: the term itself plus its singular and
/// plural forms.
///
/// Matching is symmetric because both directions are produced from the
/// singular form: `"service"` and `"services"` yield the same set.
#[must_use]
pub fn variants(term: &str) -> BTreeSet<String> {
    let lower = term.trim().to_lowercase();
    let mut out = BTreeSet::new();
    if lower.is_empty() {
        return out;
    }

    let singular = singularize(&lower);
    let plural = pluralize(&singular);
    out.insert(lower);
    out.insert(plural);
    out.insert(singular);
    out
}

/// Split a keyword query into words on whitespace.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

#[must_use]
pub fn singularize(word: &str) -> String {
    if word.len() > 3 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }

    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }

    if word.len() > 2
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

#[must_use]
pub fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().is_some_and(is_consonant) {
            return format!("{stem}ies");
        }
    }

    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
        return format!("{word}es");
    }

    format!("{word}s")
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
