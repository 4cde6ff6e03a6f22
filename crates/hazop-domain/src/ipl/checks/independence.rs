use super::utils::finding;
use crate::model::Ipl;
use hazop_types::{Finding, Severity, ids};
use serde_json::json;

pub fn run(ipl: &Ipl, out: &mut Vec<Finding>) {
    if !ipl.independent_of_initiator {
        out.push(finding(
            Severity::Error,
            ids::CHECK_IPL_INDEPENDENCE,
            ids::CODE_NOT_INDEPENDENT_OF_INITIATOR,
            ipl,
            format!(
                "IPL '{}' is not independent of the initiating event and cannot be credited",
                ipl.id
            ),
            json!({ "independent_of_initiator": false }),
        ));
    }
    if !ipl.independent_of_other_ipls {
        out.push(finding(
            Severity::Warning,
            ids::CHECK_IPL_INDEPENDENCE,
            ids::CODE_NOT_INDEPENDENT_OF_OTHER_IPLS,
            ipl,
            format!("IPL '{}' shares components with other IPLs", ipl.id),
            json!({ "independent_of_other_ipls": false }),
        ));
    }
}
