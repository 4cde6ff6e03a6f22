use super::utils::{finding, ratio_off};
use crate::lopa::{MAX_PFD, MIN_PFD};
use crate::model::Ipl;
use hazop_types::{Finding, Severity, ids};
use serde_json::json;

/// Beyond this factor from the type's typical PFD a claim needs justification.
const TYPICAL_DEVIATION_FACTOR: f64 = 10.0;

pub fn run(ipl: &Ipl, out: &mut Vec<Finding>) {
    if !(MIN_PFD..=MAX_PFD).contains(&ipl.pfd) {
        out.push(finding(
            Severity::Error,
            ids::CHECK_IPL_PFD,
            ids::CODE_PFD_OUT_OF_RANGE,
            ipl,
            format!(
                "IPL '{}' PFD {} is outside [{MIN_PFD:e}, {MAX_PFD}]",
                ipl.id, ipl.pfd
            ),
            json!({ "pfd": ipl.pfd, "min": MIN_PFD, "max": MAX_PFD }),
        ));
        return;
    }

    let (lo, hi) = ipl.ipl_type.creditable_band();
    if !(lo..=hi).contains(&ipl.pfd) {
        out.push(finding(
            Severity::Warning,
            ids::CHECK_IPL_PFD,
            ids::CODE_PFD_OUTSIDE_TYPICAL_BAND,
            ipl,
            format!(
                "IPL '{}' PFD {} is outside the typical band [{lo:e}, {hi}] for {}",
                ipl.id, ipl.pfd, ipl.ipl_type
            ),
            json!({ "pfd": ipl.pfd, "type": ipl.ipl_type, "band": [lo, hi] }),
        ));
    }

    let typical = ipl.ipl_type.typical_pfd();
    let factor = ratio_off(ipl.pfd, typical);
    if factor > TYPICAL_DEVIATION_FACTOR {
        out.push(finding(
            Severity::Warning,
            ids::CHECK_IPL_PFD,
            ids::CODE_PFD_FAR_FROM_TYPICAL,
            ipl,
            format!(
                "IPL '{}' PFD {} is more than {TYPICAL_DEVIATION_FACTOR}x from the typical {typical} for {}",
                ipl.id, ipl.pfd, ipl.ipl_type
            ),
            json!({ "pfd": ipl.pfd, "typical": typical, "factor": factor }),
        ));
    }
}
