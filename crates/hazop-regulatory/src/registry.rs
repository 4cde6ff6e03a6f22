use crate::catalog;
use crate::model::{
    ClauseRef, Jurisdiction, MatchField, RegistryStatistics, RegulatoryClause,
    RegulatoryStandard, SearchHit, StandardCategory, StandardFilter,
};
use hazop_types::RelevanceArea;
use std::collections::{HashMap, VecDeque};
use std::sync::LazyLock;
use tracing::debug;

static GLOBAL: LazyLock<Registry> = LazyLock::new(|| {
    Registry::build(catalog::STANDARDS).expect("compiled-in regulatory catalog is consistent")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate standard id: {0}")]
    DuplicateStandard(&'static str),

    #[error("clause {clause_id} is declared by both {first} and {second}")]
    DuplicateClause {
        clause_id: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("standard {standard_id} references unknown related standard {related_id}")]
    UnknownRelatedStandard {
        standard_id: &'static str,
        related_id: &'static str,
    },

    #[error("clause {clause_id} names parent {parent_id}, which is not a clause of {standard_id}")]
    DanglingParent {
        standard_id: &'static str,
        clause_id: &'static str,
        parent_id: &'static str,
    },

    #[error("clause {0} is not tagged with any relevance area")]
    MissingRelevance(&'static str),
}

/// Immutable, indexed view over a catalog of standards.
#[derive(Debug)]
pub struct Registry {
    standards: &'static [RegulatoryStandard],
    standard_index: HashMap<&'static str, usize>,
    /// clause id -> (standard position, clause position)
    clause_index: HashMap<&'static str, (usize, usize)>,
}

impl Registry {
    /// The registry over the compiled-in catalog, indexed on first access.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Index a catalog, rejecting it if any clause belongs to more than one standard or any
    /// cross-reference dangles.
    pub fn build(standards: &'static [RegulatoryStandard]) -> Result<Self, RegistryError> {
        let mut standard_index = HashMap::with_capacity(standards.len());
        for (pos, standard) in standards.iter().enumerate() {
            if standard_index.insert(standard.id, pos).is_some() {
                return Err(RegistryError::DuplicateStandard(standard.id));
            }
        }

        let mut clause_index = HashMap::new();
        for (spos, standard) in standards.iter().enumerate() {
            for &related in standard.related_standards {
                if !standard_index.contains_key(related) {
                    return Err(RegistryError::UnknownRelatedStandard {
                        standard_id: standard.id,
                        related_id: related,
                    });
                }
            }

            for (cpos, clause) in standard.relevant_clauses.iter().enumerate() {
                if clause.hazops_relevance.is_empty() {
                    return Err(RegistryError::MissingRelevance(clause.id));
                }
                if let Some((prev, _)) = clause_index.insert(clause.id, (spos, cpos)) {
                    return Err(RegistryError::DuplicateClause {
                        clause_id: clause.id,
                        first: standards[prev].id,
                        second: standard.id,
                    });
                }
            }

            for clause in standard.relevant_clauses {
                let Some(parent_id) = clause.parent_clause_id else {
                    continue;
                };
                if !standard.relevant_clauses.iter().any(|c| c.id == parent_id) {
                    return Err(RegistryError::DanglingParent {
                        standard_id: standard.id,
                        clause_id: clause.id,
                        parent_id,
                    });
                }
            }
        }

        debug!(
            standards = standards.len(),
            clauses = clause_index.len(),
            "indexed regulatory catalog"
        );

        Ok(Self {
            standards,
            standard_index,
            clause_index,
        })
    }

    /// All standards in catalog order.
    pub fn standards(&self) -> &'static [RegulatoryStandard] {
        self.standards
    }

    pub fn standard(&self, id: &str) -> Option<&'static RegulatoryStandard> {
        self.standard_index.get(id).map(|&pos| self.at(pos))
    }

    pub fn clause(&self, id: &str) -> Option<ClauseRef> {
        self.clause_index.get(id).map(|&(spos, cpos)| {
            let standard = self.at(spos);
            ClauseRef {
                standard,
                clause: &standard.relevant_clauses[cpos],
            }
        })
    }

    /// The standard a clause belongs to.
    pub fn owner_of(&self, clause_id: &str) -> Option<&'static RegulatoryStandard> {
        self.clause(clause_id).map(|r| r.standard)
    }

    /// Clauses whose parent is `clause_id`, in catalog order.
    pub fn child_clauses(&self, clause_id: &str) -> Vec<&'static RegulatoryClause> {
        let Some(owner) = self.owner_of(clause_id) else {
            return Vec::new();
        };
        owner
            .relevant_clauses
            .iter()
            .filter(|c| c.parent_clause_id == Some(clause_id))
            .collect()
    }

    pub fn filter(&self, filter: &StandardFilter) -> Vec<&'static RegulatoryStandard> {
        let standards: &'static [RegulatoryStandard] = self.standards;
        standards.iter().filter(|s| filter.matches(s)).collect()
    }

    pub fn by_category(&self, category: StandardCategory) -> Vec<&'static RegulatoryStandard> {
        self.filter(&StandardFilter {
            category: Some(category),
            ..StandardFilter::default()
        })
    }

    pub fn by_jurisdiction(&self, jurisdiction: Jurisdiction) -> Vec<&'static RegulatoryStandard> {
        self.filter(&StandardFilter {
            jurisdiction: Some(jurisdiction),
            ..StandardFilter::default()
        })
    }

    pub fn mandatory_standards(&self) -> Vec<&'static RegulatoryStandard> {
        self.filter(&StandardFilter {
            mandatory: Some(true),
            ..StandardFilter::default()
        })
    }

    /// Every clause tagged with `area`, across all standards.
    pub fn clauses_for_area(&self, area: RelevanceArea) -> Vec<ClauseRef> {
        self.clause_refs().filter(|r| r.clause.is_relevant_to(area)).collect()
    }

    /// Case-insensitive substring search over titles, descriptions and clause keywords.
    ///
    /// At most one hit is reported per standard and per clause: the first field that matches.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let matches = |text: &str| text.to_lowercase().contains(&needle);

        let mut hits = Vec::new();
        for standard in self.standards {
            let field = if matches(standard.title) {
                Some(MatchField::Title)
            } else if matches(standard.short_name) {
                Some(MatchField::ShortName)
            } else if matches(standard.description) {
                Some(MatchField::Description)
            } else {
                None
            };
            if let Some(field) = field {
                hits.push(SearchHit {
                    standard_id: standard.id,
                    clause_id: None,
                    field,
                });
            }

            for clause in standard.relevant_clauses {
                let field = if matches(clause.title) {
                    Some(MatchField::Title)
                } else if matches(clause.description) {
                    Some(MatchField::Description)
                } else if clause.keywords.iter().any(|&k| matches(k)) {
                    Some(MatchField::Keyword)
                } else {
                    None
                };
                if let Some(field) = field {
                    hits.push(SearchHit {
                        standard_id: standard.id,
                        clause_id: Some(clause.id),
                        field,
                    });
                }
            }
        }
        hits
    }

    /// Standards reachable from `id` through declared links, followed in both directions.
    ///
    /// Breadth-first up to `depth` hops; the starting standard is never included. Within a hop,
    /// results are in catalog order.
    pub fn related_standards(&self, id: &str, depth: usize) -> Vec<&'static RegulatoryStandard> {
        let Some(&start) = self.standard_index.get(id) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.standards.len()];
        visited[start] = true;
        let mut queue = VecDeque::from([(start, 0usize)]);
        let mut out = Vec::new();

        while let Some((pos, hops)) = queue.pop_front() {
            if hops == depth {
                continue;
            }
            for next in self.neighbours(pos) {
                if visited[next] {
                    continue;
                }
                visited[next] = true;
                out.push(self.at(next));
                queue.push_back((next, hops + 1));
            }
        }
        out
    }

    pub fn statistics(&self) -> RegistryStatistics {
        let mut stats = RegistryStatistics {
            total_standards: self.standards.len(),
            ..RegistryStatistics::default()
        };

        for standard in self.standards {
            if standard.mandatory {
                stats.mandatory_standards += 1;
            }
            *stats.by_category.entry(standard.category).or_default() += 1;
            *stats.by_jurisdiction.entry(standard.jurisdiction).or_default() += 1;

            for clause in standard.relevant_clauses {
                stats.total_clauses += 1;
                if clause.mandatory {
                    stats.mandatory_clauses += 1;
                }
                for area in clause.hazops_relevance {
                    *stats.clauses_by_relevance.entry(*area).or_default() += 1;
                }
            }
        }
        stats
    }

    fn at(&self, pos: usize) -> &'static RegulatoryStandard {
        let standards: &'static [RegulatoryStandard] = self.standards;
        &standards[pos]
    }

    fn clause_refs(&self) -> impl Iterator<Item = ClauseRef> + '_ {
        let standards: &'static [RegulatoryStandard] = self.standards;
        standards.iter().flat_map(|standard| {
            standard
                .relevant_clauses
                .iter()
                .map(move |clause| ClauseRef { standard, clause })
        })
    }

    /// Declared links out of `pos` plus links pointing at it, in catalog order.
    fn neighbours(&self, pos: usize) -> Vec<usize> {
        let this = &self.standards[pos];
        let mut out: Vec<usize> = this
            .related_standards
            .iter()
            .filter_map(|id| self.standard_index.get(id).copied())
            .collect();
        for (other, standard) in self.standards.iter().enumerate() {
            if standard.related_standards.contains(&this.id) {
                out.push(other);
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }
}

#[cfg(test)]
mod tests;
