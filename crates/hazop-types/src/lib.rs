//! Stable DTOs and IDs used across the hazop-guard workspace.
//!
//! This crate is intentionally boring:
//! - relevance-area tags linking regulatory clauses to HazOps concerns
//! - stable string IDs for checks and finding codes
//! - the emitted report envelope
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;
pub mod relevance;

pub use explain::{Explanation, lookup_explanation};
pub use receipt::{
    Finding, ReportEnvelope, SCHEMA_COMPLIANCE_REPORT_V1, SCHEMA_IPL_REPORT_V1,
    SCHEMA_LOPA_REPORT_V1, SCHEMA_SCREENING_REPORT_V1, Severity, ToolMeta,
};
pub use relevance::RelevanceArea;
