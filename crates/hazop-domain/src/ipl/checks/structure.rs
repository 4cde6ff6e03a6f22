use super::utils::finding;
use crate::model::Ipl;
use hazop_types::{Finding, Severity, ids};
use serde_json::json;

pub fn run(ipl: &Ipl, out: &mut Vec<Finding>) {
    if ipl.id.trim().is_empty() {
        out.push(finding(
            Severity::Error,
            ids::CHECK_IPL_STRUCTURE,
            ids::CODE_MISSING_ID,
            ipl,
            "IPL has no id".to_string(),
            json!({ "field": "id" }),
        ));
    }
    if ipl.name.trim().is_empty() {
        out.push(finding(
            Severity::Error,
            ids::CHECK_IPL_STRUCTURE,
            ids::CODE_MISSING_NAME,
            ipl,
            format!("IPL '{}' has no name", ipl.id),
            json!({ "field": "name" }),
        ));
    }
    if !ipl.pfd.is_finite() {
        out.push(finding(
            Severity::Error,
            ids::CHECK_IPL_STRUCTURE,
            ids::CODE_PFD_NOT_FINITE,
            ipl,
            format!("IPL '{}' PFD is not a finite number", ipl.id),
            json!({ "field": "pfd" }),
        ));
    }
    if let Some(minutes) = ipl
        .human_intervention
        .as_ref()
        .and_then(|req| req.response_time_minutes)
        && !minutes.is_finite()
    {
        out.push(finding(
            Severity::Error,
            ids::CHECK_IPL_STRUCTURE,
            ids::CODE_RESPONSE_TIME_NOT_FINITE,
            ipl,
            format!("IPL '{}' response time is not a finite number", ipl.id),
            json!({ "field": "human_intervention.response_time_minutes" }),
        ));
    }
}
