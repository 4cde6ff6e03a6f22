use super::utils::finding;
use crate::lopa::sil_pfd_band;
use crate::model::{Ipl, IplType};
use hazop_types::{Finding, Severity, ids};
use serde_json::json;

pub fn run(ipl: &Ipl, out: &mut Vec<Finding>) {
    if ipl.ipl_type != IplType::Sif {
        return;
    }

    let Some(sil) = ipl.sil else {
        out.push(finding(
            Severity::Error,
            ids::CHECK_IPL_SIF,
            ids::CODE_SIF_MISSING_SIL,
            ipl,
            format!("SIF '{}' does not declare a SIL", ipl.id),
            json!({}),
        ));
        return;
    };
    let Some((lo, hi)) = sil_pfd_band(sil) else {
        out.push(finding(
            Severity::Error,
            ids::CHECK_IPL_SIF,
            ids::CODE_SIF_INVALID_SIL,
            ipl,
            format!("SIF '{}' declares SIL {sil}; expected 1 to 4", ipl.id),
            json!({ "sil": sil }),
        ));
        return;
    };

    if ipl.pfd < lo {
        out.push(finding(
            Severity::Warning,
            ids::CHECK_IPL_SIF,
            ids::CODE_SIF_PFD_BELOW_SIL_BAND,
            ipl,
            format!(
                "SIF '{}' PFD {} is better than SIL {sil} requires; consider claiming a higher SIL",
                ipl.id, ipl.pfd
            ),
            json!({ "sil": sil, "pfd": ipl.pfd, "band": [lo, hi] }),
        ));
    } else if ipl.pfd > hi {
        out.push(finding(
            Severity::Error,
            ids::CHECK_IPL_SIF,
            ids::CODE_SIF_PFD_ABOVE_SIL_BAND,
            ipl,
            format!(
                "SIF '{}' PFD {} does not achieve SIL {sil} (max {hi})",
                ipl.id, ipl.pfd
            ),
            json!({ "sil": sil, "pfd": ipl.pfd, "band": [lo, hi] }),
        ));
    }

    if sil == 4 {
        out.push(finding(
            Severity::Warning,
            ids::CHECK_IPL_SIF,
            ids::CODE_SIF_SIL4_CLAIMED,
            ipl,
            format!("SIF '{}' claims SIL 4, which is rarely justified in the process sector", ipl.id),
            json!({ "sil": sil }),
        ));
    }
}
