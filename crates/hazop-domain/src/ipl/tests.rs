use super::{ValidationStage, validate_ipl, validate_ipl_collection};
use crate::model::IplType;
use crate::test_support::{assert_close, full_requirements, ipl, operator, sif};
use hazop_types::ids;

#[test]
fn clean_layer_is_creditable_with_rrf() {
    let result = validate_ipl(&sif("sif-1", 0.005, 2));
    assert_eq!(result.stage, ValidationStage::FullyChecked);
    assert!(result.creditable);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert_close(result.rrf.expect("creditable"), 200.0);
}

#[test]
fn operator_with_nan_response_time_is_not_creditable() {
    let mut req = full_requirements();
    req.response_time_minutes = Some(f64::NAN);
    let result = validate_ipl(&operator("op-1", 0.1, Some(req)));
    assert_eq!(result.stage, ValidationStage::StructureRejected);
    assert!(!result.creditable);
    assert!(result.rrf.is_none());
    assert!(
        result
            .errors
            .iter()
            .any(|f| f.code == ids::CODE_RESPONSE_TIME_NOT_FINITE)
    );
}

#[test]
fn structure_failure_short_circuits_other_checks() {
    let mut layer = sif("", 5.0, 9);
    layer.independent_of_initiator = false;
    let result = validate_ipl(&layer);
    assert_eq!(result.stage, ValidationStage::StructureRejected);
    assert!(!result.creditable);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ids::CODE_MISSING_ID);
    assert!(result.warnings.is_empty());
    assert!(result.rrf.is_none());
}

#[test]
fn warnings_never_block_crediting() {
    let result = validate_ipl(&ipl("bpcs", IplType::Bpcs, 0.01));
    assert!(result.creditable);
    assert_eq!(result.warnings.len(), 3);
}

#[test]
fn initiator_dependence_blocks_crediting() {
    let mut layer = ipl("psv", IplType::ReliefValve, 0.01);
    layer.independent_of_initiator = false;
    let result = validate_ipl(&layer);
    assert!(!result.creditable);
    assert_eq!(result.errors[0].code, ids::CODE_NOT_INDEPENDENT_OF_INITIATOR);
}

#[test]
fn collection_flags_common_cause_patterns() {
    let mut shared = ipl("psv-2", IplType::ReliefValve, 0.01);
    shared.independent_of_other_ipls = false;
    let layers = vec![
        ipl("bpcs", IplType::Bpcs, 0.1),
        sif("sif", 0.005, 2),
        ipl("psv-1", IplType::ReliefValve, 0.01),
        shared,
        operator("op-1", 0.1, Some(full_requirements())),
        operator("op-2", 0.1, Some(full_requirements())),
    ];
    let result = validate_ipl_collection(&layers);

    let codes: Vec<&str> = result
        .common_cause_warnings
        .iter()
        .map(|f| f.code.as_str())
        .collect();
    assert_eq!(
        codes,
        [
            ids::CODE_DUPLICATE_IPL_TYPE,
            ids::CODE_MULTIPLE_HUMAN_INTERVENTION,
            ids::CODE_BPCS_WITH_SIF,
            ids::CODE_SHARED_DEPENDENCY
        ]
    );
    assert!(result.common_cause_warnings.iter().all(|f| !f.is_error()));
    assert_eq!(result.results.len(), 6);
    assert!(result.all_creditable());
}

#[test]
fn collection_flags_initiator_dependence_as_common_cause() {
    let mut dependent = ipl("dike", IplType::Dike, 0.01);
    dependent.independent_of_initiator = false;
    let result = validate_ipl_collection(&[ipl("psv", IplType::ReliefValve, 0.01), dependent]);

    assert_eq!(result.common_cause_warnings.len(), 1);
    let warning = &result.common_cause_warnings[0];
    assert_eq!(warning.code, ids::CODE_SHARED_DEPENDENCY);
    assert_eq!(warning.subject.as_deref(), Some("dike"));
    assert!(!warning.is_error());
    assert_eq!(warning.data["shared_with"][0], "initiating event");
    assert!(!result.results[1].creditable);
}

#[test]
fn combined_rrf_counts_creditable_layers_only() {
    let mut dependent = ipl("dike", IplType::Dike, 0.01);
    dependent.independent_of_initiator = false;
    let layers = vec![
        ipl("psv", IplType::ReliefValve, 0.01),
        dependent,
        ipl("bpcs", IplType::Bpcs, 0.1),
    ];
    let result = validate_ipl_collection(&layers);
    assert_eq!(result.creditable_count, 2);
    assert_close(result.combined_rrf, 1000.0);
    assert!(!result.all_creditable());
}

#[test]
fn combined_rrf_defaults_to_one_without_creditable_layers() {
    let mut dependent = ipl("dike", IplType::Dike, 0.01);
    dependent.independent_of_initiator = false;
    let result = validate_ipl_collection(&[dependent]);
    assert_eq!(result.creditable_count, 0);
    assert_eq!(result.combined_rrf, 1.0);

    assert_eq!(validate_ipl_collection(&[]).combined_rrf, 1.0);
}
