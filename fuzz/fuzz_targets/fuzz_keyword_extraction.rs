//! Fuzz target for analysis-entry keyword extraction and clause keyword matching.
//!
//! Goal: tokenizing arbitrary (including non-ASCII) narrative text should **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_keyword_extraction
//! ```

#![no_main]

use arbitrary::Arbitrary;
use hazop_domain::AnalysisEntry;
use hazop_domain::compliance::keywords;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct KeywordInput {
    deviation: String,
    causes: Vec<String>,
    recommendations: Vec<String>,
    notes: Option<String>,
    clause_keywords: Vec<String>,
}

fuzz_target!(|input: KeywordInput| {
    // Keep inputs small to stay fast
    if input.causes.len() > 16 || input.recommendations.len() > 16 {
        return;
    }
    if input.clause_keywords.len() > 16 {
        return;
    }

    let entry = AnalysisEntry {
        id: "fuzz".to_string(),
        deviation: input.deviation,
        causes: input.causes,
        recommendations: input.recommendations,
        notes: input.notes,
        ..AnalysisEntry::default()
    };

    let extracted = keywords::extract_keywords(&entry);

    let clause_keywords: Vec<&str> = input.clause_keywords.iter().map(String::as_str).collect();
    let _ = keywords::matches_any(&extracted, &clause_keywords);
});
