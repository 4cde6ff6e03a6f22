use super::checks::utils::finding;
use super::{IplValidation, validate_ipl};
use crate::model::{Ipl, IplType};
use hazop_types::{Finding, Severity, ids};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IplCollectionValidation {
    /// One entry per input layer, in input order.
    pub results: Vec<IplValidation>,
    /// Common-cause concerns across layers. Always warnings.
    pub common_cause_warnings: Vec<Finding>,
    pub creditable_count: usize,
    /// `1 / product(pfd)` over creditable layers only; 1 when none qualify.
    pub combined_rrf: f64,
}

impl IplCollectionValidation {
    pub fn all_creditable(&self) -> bool {
        self.results.iter().all(|r| r.creditable)
    }
}

pub fn validate_ipl_collection(ipls: &[Ipl]) -> IplCollectionValidation {
    let results: Vec<IplValidation> = ipls.iter().map(validate_ipl).collect();

    let mut common_cause_warnings = Vec::new();
    duplicate_types(ipls, &mut common_cause_warnings);
    multiple_human_intervention(ipls, &mut common_cause_warnings);
    bpcs_with_sif(ipls, &mut common_cause_warnings);
    shared_dependencies(ipls, &mut common_cause_warnings);

    let mut product = 1.0;
    let mut creditable_count = 0;
    for (ipl, result) in ipls.iter().zip(&results) {
        if result.creditable {
            product *= ipl.pfd;
            creditable_count += 1;
        }
    }
    let combined_rrf = 1.0 / product;

    debug!(
        ipls = ipls.len(),
        creditable = creditable_count,
        common_cause = common_cause_warnings.len(),
        combined_rrf,
        "validated IPL collection"
    );

    IplCollectionValidation {
        results,
        common_cause_warnings,
        creditable_count,
        combined_rrf,
    }
}

fn duplicate_types(ipls: &[Ipl], out: &mut Vec<Finding>) {
    let mut by_type: BTreeMap<IplType, Vec<&Ipl>> = BTreeMap::new();
    for ipl in ipls {
        by_type.entry(ipl.ipl_type).or_default().push(ipl);
    }
    for (ty, group) in by_type {
        // Stacked operator responses have their own finding.
        if group.len() < 2 || ty == IplType::HumanIntervention {
            continue;
        }
        let members: Vec<&str> = group.iter().map(|i| i.id.as_str()).collect();
        out.push(finding(
            Severity::Warning,
            ids::CHECK_IPL_COMMON_CAUSE,
            ids::CODE_DUPLICATE_IPL_TYPE,
            group[0],
            format!(
                "{} IPLs of type {ty} may share failure modes: {}",
                members.len(),
                members.join(", ")
            ),
            json!({ "type": ty, "ipls": members }),
        ));
    }
}

fn multiple_human_intervention(ipls: &[Ipl], out: &mut Vec<Finding>) {
    let humans: Vec<&Ipl> = ipls
        .iter()
        .filter(|i| i.ipl_type == IplType::HumanIntervention)
        .collect();
    if humans.len() < 2 {
        return;
    }
    let members: Vec<&str> = humans.iter().map(|i| i.id.as_str()).collect();
    out.push(finding(
        Severity::Warning,
        ids::CHECK_IPL_COMMON_CAUSE,
        ids::CODE_MULTIPLE_HUMAN_INTERVENTION,
        humans[0],
        format!(
            "{} operator responses are credited; the same crew rarely counts twice: {}",
            members.len(),
            members.join(", ")
        ),
        json!({ "ipls": members }),
    ));
}

fn bpcs_with_sif(ipls: &[Ipl], out: &mut Vec<Finding>) {
    let bpcs = ipls.iter().find(|i| i.ipl_type == IplType::Bpcs);
    let sif = ipls.iter().find(|i| i.ipl_type == IplType::Sif);
    let (Some(bpcs), Some(sif)) = (bpcs, sif) else {
        return;
    };
    out.push(finding(
        Severity::Warning,
        ids::CHECK_IPL_COMMON_CAUSE,
        ids::CODE_BPCS_WITH_SIF,
        bpcs,
        format!(
            "BPCS '{}' and SIF '{}' are both credited; verify they share no sensors or logic solver",
            bpcs.id, sif.id
        ),
        json!({ "bpcs": bpcs.id, "sif": sif.id }),
    ));
}

fn shared_dependencies(ipls: &[Ipl], out: &mut Vec<Finding>) {
    for ipl in ipls {
        let mut shared_with = Vec::new();
        if !ipl.independent_of_initiator {
            shared_with.push("initiating event");
        }
        if !ipl.independent_of_other_ipls {
            shared_with.push("other layers");
        }
        if shared_with.is_empty() {
            continue;
        }
        out.push(finding(
            Severity::Warning,
            ids::CHECK_IPL_COMMON_CAUSE,
            ids::CODE_SHARED_DEPENDENCY,
            ipl,
            format!(
                "IPL '{}' is not independent of the {}",
                ipl.id,
                shared_with.join(" or the ")
            ),
            json!({ "ipl": ipl.id, "shared_with": shared_with }),
        ));
    }
}
