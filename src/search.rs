//! Keyword parsing and template matching.
//!
//! Filter text is split into whitespace-delimited, case-folded keywords.
//! A template matches when every keyword appears as a case-insensitive
//! substring of at least one searchable field (name, description, keywords).

use crate::catalog::Template;

/// Parse free-text filter input into a normalized keyword set.
///
/// Tokens are whitespace-delimited and case-folded. Blank input yields an
/// empty set, which matches every template.
pub fn parse_keywords(filter: &str) -> Vec<String> {
    filter
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect()
}

/// Check whether a template matches every keyword in the set.
///
/// Matching is conjunctive across keywords and disjunctive across fields.
pub fn matches(keywords: &[String], template: &Template) -> bool {
    keywords
        .iter()
        .all(|keyword| any_field_contains(keyword, template))
}

fn any_field_contains(keyword: &str, template: &Template) -> bool {
    template.name.to_lowercase().contains(keyword)
        || template.description.to_lowercase().contains(keyword)
        || template
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(keyword))
}
