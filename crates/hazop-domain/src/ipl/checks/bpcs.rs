use super::utils::finding;
use crate::model::{Ipl, IplType};
use hazop_types::{Finding, Severity, ids};
use serde_json::json;

const MIN_CREDITABLE_PFD: f64 = 0.1;

pub fn run(ipl: &Ipl, out: &mut Vec<Finding>) {
    if ipl.ipl_type != IplType::Bpcs {
        return;
    }

    if ipl.pfd < MIN_CREDITABLE_PFD {
        out.push(finding(
            Severity::Warning,
            ids::CHECK_IPL_BPCS,
            ids::CODE_BPCS_PFD_TOO_LOW,
            ipl,
            format!(
                "BPCS function '{}' claims PFD {}; BPCS credit is limited to {MIN_CREDITABLE_PFD}",
                ipl.id, ipl.pfd
            ),
            json!({ "pfd": ipl.pfd, "min": MIN_CREDITABLE_PFD }),
        ));
    }

    out.push(finding(
        Severity::Info,
        ids::CHECK_IPL_BPCS,
        ids::CODE_BPCS_INDEPENDENCE_REMINDER,
        ipl,
        format!(
            "confirm BPCS function '{}' does not share sensors, logic or final elements with the initiating cause",
            ipl.id
        ),
        json!({}),
    ));
}
