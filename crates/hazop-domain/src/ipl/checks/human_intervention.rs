use super::utils::finding;
use crate::model::{Ipl, IplType};
use hazop_types::{Finding, Severity, ids};
use serde_json::json;

const MIN_CREDITABLE_PFD: f64 = 0.1;
const MIN_RESPONSE_TIME_MINUTES: f64 = 10.0;

pub fn run(ipl: &Ipl, out: &mut Vec<Finding>) {
    if ipl.ipl_type != IplType::HumanIntervention {
        return;
    }

    if ipl.pfd < MIN_CREDITABLE_PFD {
        out.push(finding(
            Severity::Warning,
            ids::CHECK_IPL_HUMAN_INTERVENTION,
            ids::CODE_HUMAN_PFD_TOO_LOW,
            ipl,
            format!(
                "operator response '{}' claims PFD {}; credit below {MIN_CREDITABLE_PFD} is rarely defensible",
                ipl.id, ipl.pfd
            ),
            json!({ "pfd": ipl.pfd, "min": MIN_CREDITABLE_PFD }),
        ));
    }

    let Some(req) = &ipl.human_intervention else {
        return;
    };

    if let Some(minutes) = req.response_time_minutes
        && minutes < MIN_RESPONSE_TIME_MINUTES
    {
        out.push(finding(
            Severity::Error,
            ids::CHECK_IPL_HUMAN_INTERVENTION,
            ids::CODE_HUMAN_RESPONSE_TIME_TOO_SHORT,
            ipl,
            format!(
                "operator response '{}' has {minutes} minutes to act; at least {MIN_RESPONSE_TIME_MINUTES} are needed",
                ipl.id
            ),
            json!({ "response_time_minutes": minutes, "min": MIN_RESPONSE_TIME_MINUTES }),
        ));
    }
    if !req.independent_alarm {
        out.push(finding(
            Severity::Error,
            ids::CHECK_IPL_HUMAN_INTERVENTION,
            ids::CODE_HUMAN_MISSING_INDEPENDENT_ALARM,
            ipl,
            format!("operator response '{}' has no independent alarm", ipl.id),
            json!({ "independent_alarm": false }),
        ));
    }
    if !req.written_procedure {
        out.push(finding(
            Severity::Warning,
            ids::CHECK_IPL_HUMAN_INTERVENTION,
            ids::CODE_HUMAN_MISSING_PROCEDURE,
            ipl,
            format!("operator response '{}' has no written procedure", ipl.id),
            json!({ "written_procedure": false }),
        ));
    }
    if !req.operator_trained {
        out.push(finding(
            Severity::Warning,
            ids::CHECK_IPL_HUMAN_INTERVENTION,
            ids::CODE_HUMAN_MISSING_TRAINING,
            ipl,
            format!("operators for '{}' are not trained on the response", ipl.id),
            json!({ "operator_trained": false }),
        ));
    }
}
