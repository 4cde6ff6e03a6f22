use hazop_types::RelevanceArea;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardCategory {
    ProcessSafety,
    FunctionalSafety,
    RiskManagement,
    Environmental,
    IndustryGuidance,
}

impl StandardCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            StandardCategory::ProcessSafety => "process_safety",
            StandardCategory::FunctionalSafety => "functional_safety",
            StandardCategory::RiskManagement => "risk_management",
            StandardCategory::Environmental => "environmental",
            StandardCategory::IndustryGuidance => "industry_guidance",
        }
    }
}

impl fmt::Display for StandardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    UnitedStates,
    EuropeanUnion,
    UnitedKingdom,
    International,
}

impl Jurisdiction {
    pub fn as_str(self) -> &'static str {
        match self {
            Jurisdiction::UnitedStates => "united_states",
            Jurisdiction::EuropeanUnion => "european_union",
            Jurisdiction::UnitedKingdom => "united_kingdom",
            Jurisdiction::International => "international",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discrete requirement within a standard.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RegulatoryClause {
    pub id: &'static str,
    /// Section reference as printed in the source document.
    pub reference: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Lowercase match terms used by the compliance engine.
    pub keywords: &'static [&'static str],
    pub mandatory: bool,
    /// Always non-empty.
    pub hazops_relevance: &'static [RelevanceArea],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_clause_id: Option<&'static str>,
}

impl RegulatoryClause {
    pub fn is_relevant_to(&self, area: RelevanceArea) -> bool {
        self.hazops_relevance.contains(&area)
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RegulatoryStandard {
    pub id: &'static str,
    pub short_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub issuing_body: &'static str,
    pub year: u16,
    pub category: StandardCategory,
    pub jurisdiction: Jurisdiction,
    pub mandatory: bool,
    /// Ids of standards this one explicitly references.
    pub related_standards: &'static [&'static str],
    pub relevant_clauses: &'static [RegulatoryClause],
}

impl RegulatoryStandard {
    pub fn covers(&self, area: RelevanceArea) -> bool {
        self.relevant_clauses.iter().any(|c| c.is_relevant_to(area))
    }

    pub fn mandatory_clause_count(&self) -> usize {
        self.relevant_clauses.iter().filter(|c| c.mandatory).count()
    }
}

/// A clause together with the standard that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClauseRef {
    pub standard: &'static RegulatoryStandard,
    pub clause: &'static RegulatoryClause,
}

/// Conjunctive filter; `None` fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StandardFilter {
    pub category: Option<StandardCategory>,
    pub jurisdiction: Option<Jurisdiction>,
    pub mandatory: Option<bool>,
    pub relevance: Option<RelevanceArea>,
}

impl StandardFilter {
    pub fn matches(&self, standard: &RegulatoryStandard) -> bool {
        self.category.is_none_or(|c| standard.category == c)
            && self.jurisdiction.is_none_or(|j| standard.jurisdiction == j)
            && self.mandatory.is_none_or(|m| standard.mandatory == m)
            && self.relevance.is_none_or(|area| standard.covers(area))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Title,
    ShortName,
    Description,
    Keyword,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub standard_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_id: Option<&'static str>,
    pub field: MatchField,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegistryStatistics {
    pub total_standards: usize,
    pub total_clauses: usize,
    pub mandatory_standards: usize,
    pub mandatory_clauses: usize,
    pub by_category: BTreeMap<StandardCategory, usize>,
    pub by_jurisdiction: BTreeMap<Jurisdiction, usize>,
    pub clauses_by_relevance: BTreeMap<RelevanceArea, usize>,
}
