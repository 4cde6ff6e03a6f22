//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - RRF arithmetic and gap/SIL classification
//! - Threshold construction and banding
//! - IPL crediting rules
//! - Compliance roll-up and gap ordering

use crate::compliance::keywords::{KeywordSet, extract_from_text};
use crate::compliance::{ComplianceOptions, ComplianceStatus, generate_compliance_report};
use crate::ipl::{validate_ipl, validate_ipl_collection};
use crate::lopa::{
    GapStatus, MAX_PFD, MIN_PFD, calculate_rrf, combined_rrf, gap_status, required_sil,
};
use crate::model::{AnalysisEntry, Ipl, IplType, RiskRanking};
use crate::thresholds::{RiskLevel, RiskScale, ThresholdConfig, ThresholdPreset};
use hazop_regulatory::registry;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Log-uniform PFD over the creditable range.
fn arb_pfd() -> impl Strategy<Value = f64> {
    (-5.0f64..=0.0).prop_map(|exp| 10f64.powf(exp).clamp(MIN_PFD, MAX_PFD))
}

fn arb_ipl_type() -> impl Strategy<Value = IplType> {
    prop::sample::select(IplType::ALL.to_vec())
}

fn arb_ipl() -> impl Strategy<Value = Ipl> {
    (
        "[a-z]{1,8}",
        arb_ipl_type(),
        arb_pfd(),
        any::<bool>(),
        any::<bool>(),
        prop::option::of(0u8..6),
    )
        .prop_map(|(id, ipl_type, pfd, initiator, others, sil)| Ipl {
            name: format!("{id} layer"),
            id,
            ipl_type,
            description: String::new(),
            pfd,
            independent_of_initiator: initiator,
            independent_of_other_ipls: others,
            sil,
            human_intervention: None,
        })
}

fn arb_guide_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["No", "More", "Less", "Reverse", "Other Than", "As Well As"])
        .prop_map(str::to_string)
}

fn arb_text_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z ]{0,24}", 0..3)
}

fn arb_entry() -> impl Strategy<Value = AnalysisEntry> {
    let ranking_cfg = ThresholdConfig::preset(RiskScale::Ranking, ThresholdPreset::Default);
    (
        "[a-z0-9]{1,6}",
        0u8..4,
        arb_guide_word(),
        arb_text_list(),
        arb_text_list(),
        arb_text_list(),
        arb_text_list(),
        prop::option::of((1u8..=5, 1u8..=5, 1u8..=5)),
    )
        .prop_map(
            move |(id, node, guide_word, causes, consequences, safeguards, recs, factors)| {
                AnalysisEntry {
                    id,
                    node_id: format!("node-{node}"),
                    deviation: format!("{guide_word} flow"),
                    guide_word,
                    parameter: "Flow".to_string(),
                    causes,
                    consequences,
                    safeguards,
                    recommendations: recs,
                    risk_ranking: factors.map(|(s, l, d)| {
                        RiskRanking::new(s, l, d, &ranking_cfg).expect("factors are in range")
                    }),
                    notes: None,
                }
            },
        )
}

fn sil_rank(sil: Option<u8>) -> u8 {
    sil.unwrap_or(0)
}

// ============================================================================
// Property tests: LOPA arithmetic
// ============================================================================

proptest! {
    #[test]
    fn rrf_is_reciprocal_of_pfd(pfd in arb_pfd()) {
        prop_assert_eq!(calculate_rrf(pfd), Ok(1.0 / pfd));
    }

    #[test]
    fn rrf_rejects_pfd_outside_range(pfd in prop_oneof![1.0f64 + 1e-9..100.0, 0.0f64..9.9e-6]) {
        prop_assert!(calculate_rrf(pfd).is_err());
    }

    #[test]
    fn combined_rrf_is_reciprocal_of_product(p1 in arb_pfd(), p2 in arb_pfd()) {
        let combined = combined_rrf(&[p1, p2]).expect("valid pfds");
        let expected = 1.0 / (p1 * p2);
        prop_assert!((combined - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn required_sil_is_null_iff_adequate(ratio in 1e-6f64..10.0) {
        prop_assert_eq!(required_sil(ratio).is_none(), ratio >= 1.0);
        prop_assert_eq!(gap_status(ratio) == GapStatus::Adequate, ratio >= 1.0);
    }

    #[test]
    fn required_sil_grows_as_ratio_shrinks(a in 1e-6f64..2.0, b in 1e-6f64..2.0) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(sil_rank(required_sil(small)) >= sil_rank(required_sil(large)));
    }
}

// ============================================================================
// Property tests: thresholds
// ============================================================================

fn arb_boundaries() -> impl Strategy<Value = (i64, i64)> {
    (1i64..124).prop_flat_map(|lm| (Just(lm), lm + 1..125))
}

proptest! {
    #[test]
    fn created_configs_cover_the_scale_monotonically((lm, mh) in arb_boundaries()) {
        let cfg = ThresholdConfig::create(RiskScale::Ranking, lm, mh).expect("valid boundaries");
        prop_assert!(cfg.validate().valid);

        let mut previous = RiskLevel::Low;
        for score in 1..=125 {
            let level = cfg.determine_level(score).expect("score is on the scale");
            prop_assert!(level >= previous);
            previous = level;
        }
        prop_assert_eq!(cfg.determine_level(lm), Ok(RiskLevel::Low));
        prop_assert_eq!(cfg.determine_level(mh), Ok(RiskLevel::Medium));
        prop_assert_eq!(cfg.determine_level(mh + 1), Ok(RiskLevel::High));
    }
}

// ============================================================================
// Property tests: IPL crediting
// ============================================================================

proptest! {
    #[test]
    fn initiator_dependent_layers_are_never_creditable(mut ipl in arb_ipl()) {
        ipl.independent_of_initiator = false;
        let result = validate_ipl(&ipl);
        prop_assert!(!result.creditable);
        prop_assert!(result.rrf.is_none());
    }

    #[test]
    fn creditable_means_no_errors(ipl in arb_ipl()) {
        let result = validate_ipl(&ipl);
        prop_assert_eq!(result.creditable, result.errors.is_empty());
        prop_assert!(result.warnings.iter().all(|f| !f.is_error()));
    }

    #[test]
    fn collection_never_fails_hard_on_common_cause(ipls in prop::collection::vec(arb_ipl(), 0..8)) {
        let result = validate_ipl_collection(&ipls);
        prop_assert!(result.common_cause_warnings.iter().all(|f| !f.is_error()));
        prop_assert!(result.combined_rrf >= 1.0);
        prop_assert_eq!(
            result.creditable_count,
            result.results.iter().filter(|r| r.creditable).count()
        );
    }
}

// ============================================================================
// Property tests: compliance
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn non_compliant_clause_forces_non_compliant_standard(
        entries in prop::collection::vec(arb_entry(), 0..12),
        has_lopa in any::<bool>(),
    ) {
        let standards: Vec<_> = registry().standards().iter().collect();
        let options = ComplianceOptions { has_lopa, min_entries: 1 };
        let report = generate_compliance_report(&entries, &standards, &options);

        if entries.is_empty() {
            prop_assert_eq!(report.validation.overall_status, ComplianceStatus::NotAssessed);
        }
        for summary in &report.validation.standard_summaries {
            if summary.non_compliant > 0 {
                prop_assert_eq!(summary.status, ComplianceStatus::NonCompliant);
            }
            prop_assert!((0.0..=100.0).contains(&summary.compliance_percentage));
        }
        prop_assert!(report.validation.overall_percentage <= 100);
        prop_assert!(
            report.critical_gaps.windows(2).all(|w| w[0].severity <= w[1].severity)
        );
    }

    #[test]
    fn keyword_extraction_yields_lowercase_non_empty_keywords(text in "[A-Za-z0-9 ,.()-]{0,64}") {
        let mut out = KeywordSet::new();
        extract_from_text(&text, &mut out);
        for keyword in &out {
            prop_assert!(!keyword.is_empty());
            prop_assert_eq!(keyword, &keyword.to_lowercase());
        }
    }
}
