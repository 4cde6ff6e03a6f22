use super::keywords::{KeywordSet, extract_keywords};
use crate::model::AnalysisEntry;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const MOC_KEYWORDS: &[&str] = &[
    "management of change",
    "moc",
    "change management",
    "change request",
];

/// Aggregate facts about an analysis, computed once and shared by every evaluator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisContext {
    pub total_entries: usize,
    pub distinct_nodes: usize,
    pub distinct_guide_words: usize,
    pub entries_with_causes_and_consequences: usize,
    pub entries_with_safeguards: usize,
    pub entries_with_recommendations: usize,
    pub entries_with_risk_ranking: usize,
    pub high_risk_entries: usize,
    pub high_risk_with_recommendations: usize,
    /// Mean share of deviation/causes/consequences/safeguards populated, in percent.
    pub documentation_completeness: f64,
    pub has_moc_reference: bool,
}

impl AnalysisContext {
    pub fn from_entries(entries: &[AnalysisEntry]) -> Self {
        let mut nodes = BTreeSet::new();
        let mut guide_words = BTreeSet::new();
        let mut ctx = Self {
            total_entries: entries.len(),
            ..Self::default()
        };
        let mut populated_fields = 0usize;

        for entry in entries {
            if !entry.node_id.trim().is_empty() {
                nodes.insert(entry.node_id.trim());
            }
            let guide_word = entry.guide_word.trim().to_lowercase();
            if !guide_word.is_empty() {
                guide_words.insert(guide_word);
            }

            if has_text(&entry.causes) && has_text(&entry.consequences) {
                ctx.entries_with_causes_and_consequences += 1;
            }
            if has_text(&entry.safeguards) {
                ctx.entries_with_safeguards += 1;
            }
            let has_recommendations = has_text(&entry.recommendations);
            if has_recommendations {
                ctx.entries_with_recommendations += 1;
            }
            if entry.risk_ranking.is_some() {
                ctx.entries_with_risk_ranking += 1;
            }
            if entry.is_high_risk() {
                ctx.high_risk_entries += 1;
                if has_recommendations {
                    ctx.high_risk_with_recommendations += 1;
                }
            }

            populated_fields += [
                !entry.deviation.trim().is_empty(),
                has_text(&entry.causes),
                has_text(&entry.consequences),
                has_text(&entry.safeguards),
            ]
            .into_iter()
            .filter(|&p| p)
            .count();

            if !ctx.has_moc_reference {
                ctx.has_moc_reference = entry.recommendations.iter().any(|r| {
                    let r = r.to_lowercase();
                    MOC_KEYWORDS.iter().any(|&k| r.contains(k))
                });
            }
        }

        ctx.distinct_nodes = nodes.len();
        ctx.distinct_guide_words = guide_words.len();
        if !entries.is_empty() {
            ctx.documentation_completeness =
                populated_fields as f64 * 100.0 / (entries.len() * 4) as f64;
        }
        ctx
    }

    /// Share of all entries satisfying `count`, in percent. 0 for an empty analysis.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total_entries == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.total_entries as f64
    }
}

/// Per-entry keyword sets, computed once per validation.
pub struct EntryKeywords<'a> {
    pub entry: &'a AnalysisEntry,
    pub keywords: KeywordSet,
}

pub fn index_entries(entries: &[AnalysisEntry]) -> Vec<EntryKeywords<'_>> {
    entries
        .iter()
        .map(|entry| EntryKeywords {
            entry,
            keywords: extract_keywords(entry),
        })
        .collect()
}

fn has_text(items: &[String]) -> bool {
    items.iter().any(|s| !s.trim().is_empty())
}
