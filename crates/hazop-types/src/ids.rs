//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks: per-IPL validation
pub const CHECK_IPL_STRUCTURE: &str = "ipl.structure";
pub const CHECK_IPL_PFD: &str = "ipl.pfd";
pub const CHECK_IPL_INDEPENDENCE: &str = "ipl.independence";
pub const CHECK_IPL_SIF: &str = "ipl.sif";
pub const CHECK_IPL_HUMAN_INTERVENTION: &str = "ipl.human_intervention";
pub const CHECK_IPL_BPCS: &str = "ipl.bpcs";

// Checks: collection-level validation
pub const CHECK_IPL_COMMON_CAUSE: &str = "ipl.common_cause";

// Codes: ipl.structure
pub const CODE_MISSING_ID: &str = "missing_id";
pub const CODE_MISSING_NAME: &str = "missing_name";
pub const CODE_PFD_NOT_FINITE: &str = "pfd_not_finite";
pub const CODE_RESPONSE_TIME_NOT_FINITE: &str = "response_time_not_finite";

// Codes: ipl.pfd
pub const CODE_PFD_OUT_OF_RANGE: &str = "pfd_out_of_range";
pub const CODE_PFD_OUTSIDE_TYPICAL_BAND: &str = "pfd_outside_typical_band";
pub const CODE_PFD_FAR_FROM_TYPICAL: &str = "pfd_far_from_typical";

// Codes: ipl.independence
pub const CODE_NOT_INDEPENDENT_OF_INITIATOR: &str = "not_independent_of_initiator";
pub const CODE_NOT_INDEPENDENT_OF_OTHER_IPLS: &str = "not_independent_of_other_ipls";

// Codes: ipl.sif
pub const CODE_SIF_MISSING_SIL: &str = "sif_missing_sil";
pub const CODE_SIF_INVALID_SIL: &str = "sif_invalid_sil";
pub const CODE_SIF_PFD_BELOW_SIL_BAND: &str = "sif_pfd_below_sil_band";
pub const CODE_SIF_PFD_ABOVE_SIL_BAND: &str = "sif_pfd_above_sil_band";
pub const CODE_SIF_SIL4_CLAIMED: &str = "sif_sil4_claimed";

// Codes: ipl.human_intervention
pub const CODE_HUMAN_PFD_TOO_LOW: &str = "human_pfd_too_low";
pub const CODE_HUMAN_RESPONSE_TIME_TOO_SHORT: &str = "human_response_time_too_short";
pub const CODE_HUMAN_MISSING_INDEPENDENT_ALARM: &str = "human_missing_independent_alarm";
pub const CODE_HUMAN_MISSING_PROCEDURE: &str = "human_missing_procedure";
pub const CODE_HUMAN_MISSING_TRAINING: &str = "human_missing_training";

// Codes: ipl.bpcs
pub const CODE_BPCS_PFD_TOO_LOW: &str = "bpcs_pfd_too_low";
pub const CODE_BPCS_INDEPENDENCE_REMINDER: &str = "bpcs_independence_reminder";

// Codes: ipl.common_cause
pub const CODE_DUPLICATE_IPL_TYPE: &str = "duplicate_ipl_type";
pub const CODE_MULTIPLE_HUMAN_INTERVENTION: &str = "multiple_human_intervention";
pub const CODE_BPCS_WITH_SIF: &str = "bpcs_with_sif";
pub const CODE_SHARED_DEPENDENCY: &str = "shared_dependency";
