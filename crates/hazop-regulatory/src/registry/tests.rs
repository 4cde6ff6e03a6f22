use super::*;
use crate::model::{Jurisdiction, RegulatoryClause, RegulatoryStandard, StandardCategory};
use hazop_types::RelevanceArea;

const fn clause(id: &'static str, parent: Option<&'static str>) -> RegulatoryClause {
    RegulatoryClause {
        id,
        reference: "1",
        title: "clause",
        description: "clause",
        keywords: &["keyword"],
        mandatory: true,
        hazops_relevance: &[RelevanceArea::Documentation],
        parent_clause_id: parent,
    }
}

const fn standard(
    id: &'static str,
    related: &'static [&'static str],
    clauses: &'static [RegulatoryClause],
) -> RegulatoryStandard {
    RegulatoryStandard {
        id,
        short_name: id,
        title: "standard",
        description: "standard",
        issuing_body: "body",
        year: 2000,
        category: StandardCategory::ProcessSafety,
        jurisdiction: Jurisdiction::International,
        mandatory: true,
        related_standards: related,
        relevant_clauses: clauses,
    }
}

#[test]
fn global_catalog_indexes_every_clause_exactly_once() {
    let registry = Registry::global();
    let stats = registry.statistics();
    let declared: usize = registry
        .standards()
        .iter()
        .map(|s| s.relevant_clauses.len())
        .sum();

    assert_eq!(stats.total_standards, 11);
    assert_eq!(stats.total_clauses, declared);
    assert_eq!(registry.clause_index.len(), declared);

    for standard in registry.standards() {
        for clause in standard.relevant_clauses {
            let owner = registry.owner_of(clause.id).expect("indexed clause");
            assert_eq!(owner.id, standard.id, "clause {} owner", clause.id);
        }
    }
}

#[test]
fn every_relevance_area_is_covered_by_the_catalog() {
    let registry = Registry::global();
    for area in RelevanceArea::ALL {
        assert!(
            !registry.clauses_for_area(area).is_empty(),
            "no clause tagged {area}"
        );
    }
}

#[test]
fn build_rejects_clause_owned_by_two_standards() {
    static DUPLICATED: &[RegulatoryStandard] = &[
        standard("a", &[], &[clause("shared", None)]),
        standard("b", &[], &[clause("shared", None)]),
    ];

    let err = Registry::build(DUPLICATED).expect_err("duplicate clause");
    assert_eq!(
        err,
        RegistryError::DuplicateClause {
            clause_id: "shared",
            first: "a",
            second: "b",
        }
    );
}

#[test]
fn build_rejects_duplicate_standard_ids() {
    static DUPLICATED: &[RegulatoryStandard] =
        &[standard("a", &[], &[]), standard("a", &[], &[])];

    assert_eq!(
        Registry::build(DUPLICATED).expect_err("duplicate standard"),
        RegistryError::DuplicateStandard("a")
    );
}

#[test]
fn build_rejects_dangling_links() {
    static UNKNOWN_RELATED: &[RegulatoryStandard] = &[standard("a", &["missing"], &[])];
    assert!(matches!(
        Registry::build(UNKNOWN_RELATED),
        Err(RegistryError::UnknownRelatedStandard { related_id: "missing", .. })
    ));

    static FOREIGN_PARENT: &[RegulatoryStandard] = &[
        standard("a", &[], &[clause("a-1", None)]),
        standard("b", &[], &[clause("b-1", Some("a-1"))]),
    ];
    assert!(matches!(
        Registry::build(FOREIGN_PARENT),
        Err(RegistryError::DanglingParent { clause_id: "b-1", .. })
    ));
}

#[test]
fn lookup_by_id_for_standards_and_clauses() {
    let registry = Registry::global();

    let psm = registry.standard("osha-psm").expect("osha-psm");
    assert!(psm.mandatory);
    assert_eq!(psm.jurisdiction, Jurisdiction::UnitedStates);

    let moc = registry.clause("osha-psm-l").expect("clause");
    assert_eq!(moc.standard.id, "osha-psm");
    assert!(moc.clause.is_relevant_to(RelevanceArea::ManagementOfChange));

    assert!(registry.standard("nope").is_none());
    assert!(registry.clause("nope").is_none());
}

#[test]
fn child_clauses_follow_parent_links() {
    let registry = Registry::global();
    let children: Vec<_> = registry
        .child_clauses("osha-psm-e")
        .iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(children.len(), 8);
    assert_eq!(children[0], "osha-psm-e2");
    assert!(registry.child_clauses("osha-psm-e7").is_empty());
    assert!(registry.child_clauses("unknown").is_empty());
}

#[test]
fn filters_are_conjunctive() {
    let registry = Registry::global();

    let us_mandatory = registry.filter(&StandardFilter {
        jurisdiction: Some(Jurisdiction::UnitedStates),
        mandatory: Some(true),
        ..StandardFilter::default()
    });
    let ids: Vec<_> = us_mandatory.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["osha-psm", "epa-rmp"]);

    let functional = registry.by_category(StandardCategory::FunctionalSafety);
    assert!(functional.iter().all(|s| s.category == StandardCategory::FunctionalSafety));
    assert_eq!(functional.len(), 2);

    let lopa = registry.filter(&StandardFilter {
        relevance: Some(RelevanceArea::Lopa),
        ..StandardFilter::default()
    });
    assert!(lopa.iter().any(|s| s.id == "ccps-lopa"));
    assert!(lopa.iter().all(|s| s.covers(RelevanceArea::Lopa)));

    assert_eq!(
        registry.filter(&StandardFilter::default()).len(),
        registry.standards().len()
    );
}

#[test]
fn search_is_case_insensitive_substring() {
    let registry = Registry::global();

    let hits = registry.search("HAZOP STUDIES");
    assert!(
        hits.iter()
            .any(|h| h.standard_id == "iec-61882" && h.clause_id.is_none())
    );

    let keyword_hits = registry.search("moc");
    assert!(keyword_hits.iter().any(|h| {
        h.clause_id == Some("osha-psm-l") && h.field == MatchField::Keyword
    }));

    assert!(registry.search("   ").is_empty());
    assert!(registry.search("zzz-not-present").is_empty());
}

#[test]
fn related_standards_walks_links_in_both_directions() {
    let registry = Registry::global();

    let direct: Vec<_> = registry
        .related_standards("osha-psm", 1)
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(direct, vec!["epa-rmp", "ccps-lopa", "iec-61882"]);

    // seveso-iii declares only uk-comah; uk-comah links back and onward to iec-61511.
    let two_hops: Vec<_> = registry
        .related_standards("seveso-iii", 2)
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(two_hops, vec!["uk-comah", "iec-61511"]);

    assert!(registry.related_standards("osha-psm", 0).is_empty());
    assert!(registry.related_standards("unknown", 3).is_empty());
}

#[test]
fn statistics_break_down_by_category_and_area() {
    let stats = Registry::global().statistics();

    assert_eq!(stats.by_category.values().sum::<usize>(), stats.total_standards);
    assert_eq!(stats.by_jurisdiction.values().sum::<usize>(), stats.total_standards);
    assert!(stats.mandatory_clauses <= stats.total_clauses);
    assert_eq!(stats.mandatory_standards, 5);
    assert!(stats.clauses_by_relevance[&RelevanceArea::HazardIdentification] >= 5);

    let json = serde_json::to_value(&stats).expect("serialize stats");
    assert!(json["by_jurisdiction"]["united_states"].as_u64().is_some());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_title_fragment_finds_its_standard(
            index in 0usize..11,
            start in 0usize..20,
            len in 1usize..12,
            upper in any::<bool>(),
        ) {
            let registry = Registry::global();
            let standard = &registry.standards()[index];
            let title: Vec<char> = standard.title.chars().collect();
            let start = start.min(title.len() - 1);
            let end = (start + len).min(title.len());
            let mut fragment: String = title[start..end].iter().collect();
            prop_assume!(!fragment.trim().is_empty());
            if upper {
                fragment = fragment.to_uppercase();
            }

            let hits = registry.search(&fragment);
            prop_assert!(hits
                .iter()
                .any(|h| h.standard_id == standard.id && h.clause_id.is_none()));
        }
    }
}
