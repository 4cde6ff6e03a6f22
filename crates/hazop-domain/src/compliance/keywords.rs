//! Keyword extraction over the narrative fields of analysis entries.
//!
//! Each field contributes its whole lowercased phrase plus every alphanumeric token longer than
//! three characters. Matching is substring based: a clause keyword hits when some extracted
//! keyword contains it.

use crate::model::AnalysisEntry;
use std::collections::BTreeSet;

const MIN_TOKEN_CHARS: usize = 4;

pub type KeywordSet = BTreeSet<String>;

pub fn extract_from_text(text: &str, out: &mut KeywordSet) {
    let phrase = text.trim().to_lowercase();
    if phrase.is_empty() {
        return;
    }
    for token in phrase.split(|c: char| !c.is_alphanumeric()) {
        if token.chars().count() >= MIN_TOKEN_CHARS {
            out.insert(token.to_string());
        }
    }
    out.insert(phrase);
}

pub fn extract_keywords(entry: &AnalysisEntry) -> KeywordSet {
    let mut out = KeywordSet::new();
    for text in narrative_fields(entry) {
        extract_from_text(text, &mut out);
    }
    out
}

pub fn extract_all(entries: &[AnalysisEntry]) -> KeywordSet {
    let mut out = KeywordSet::new();
    for entry in entries {
        for text in narrative_fields(entry) {
            extract_from_text(text, &mut out);
        }
    }
    out
}

pub fn matches_keyword(extracted: &KeywordSet, clause_keyword: &str) -> bool {
    let needle = clause_keyword.to_lowercase();
    extracted.iter().any(|k| k.contains(&needle))
}

pub fn matches_any(extracted: &KeywordSet, clause_keywords: &[&str]) -> bool {
    clause_keywords
        .iter()
        .any(|&k| matches_keyword(extracted, k))
}

fn narrative_fields(entry: &AnalysisEntry) -> impl Iterator<Item = &str> {
    [
        entry.guide_word.as_str(),
        entry.parameter.as_str(),
        entry.deviation.as_str(),
    ]
    .into_iter()
    .chain(entry.causes.iter().map(String::as_str))
    .chain(entry.consequences.iter().map(String::as_str))
    .chain(entry.safeguards.iter().map(String::as_str))
    .chain(entry.recommendations.iter().map(String::as_str))
    .chain(entry.notes.as_deref())
}
