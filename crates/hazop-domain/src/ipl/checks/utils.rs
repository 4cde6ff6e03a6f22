use crate::model::Ipl;
use hazop_types::{Finding, Severity, lookup_explanation};
use serde_json::Value;

pub fn finding(
    severity: Severity,
    check_id: &str,
    code: &str,
    ipl: &Ipl,
    message: String,
    data: Value,
) -> Finding {
    Finding {
        severity,
        check_id: check_id.to_string(),
        code: code.to_string(),
        message,
        subject: subject(ipl),
        help: lookup_explanation(code).map(|e| e.remediation.to_string()),
        data,
    }
}

fn subject(ipl: &Ipl) -> Option<String> {
    let id = ipl.id.trim();
    (!id.is_empty()).then(|| id.to_string())
}

/// Factor by which `value` differs from `reference`, always >= 1.
pub fn ratio_off(value: f64, reference: f64) -> f64 {
    if value >= reference {
        value / reference
    } else {
        reference / value
    }
}
