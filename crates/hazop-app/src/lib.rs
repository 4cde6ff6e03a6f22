//! Use case orchestration for hazop-guard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain and
//! registry layers. It is intentionally thin and delegates heavy lifting to the appropriate
//! layers.
//!
//! Callers hand in text (config TOML, analysis entries and protection layers as JSON) and get
//! back report envelopes; reading and writing files is left to them.

#![forbid(unsafe_code)]

mod compliance;
mod config;
mod explain;
mod ipl;
mod lopa;
mod report;
mod screening;

pub use compliance::{ComplianceInput, ComplianceOutput, compliance_exit_code, run_compliance};
pub use explain::{
    ExplainOutput, format_clause, format_explanation, format_not_found, format_standard,
    run_explain,
};
pub use ipl::run_ipl_validation;
pub use lopa::{LopaOutput, run_lopa};
pub use report::{
    ComplianceReportV1, IplReportV1, LopaReportV1, ScreeningReportV1, TOOL_NAME,
    parse_report_json, serialize_report, write_report,
};
pub use screening::{
    ScreenedEntry, ScreeningInput, ScreeningOutput, ScreeningReport, run_screening,
};
