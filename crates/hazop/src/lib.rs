//! Public facade over the hazop-guard evaluation engine.
//!
//! Re-exports the pure domain crate (thresholds, LOPA, IPL validation, compliance), the
//! regulatory registry and the shared DTOs so downstream crates need a single dependency.
//!
//! ```
//! use hazop::{LopaInput, GapStatus, perform_lopa_calculation};
//!
//! let result = perform_lopa_calculation(&LopaInput {
//!     initiating_event_frequency: 0.1,
//!     ipls: Vec::new(),
//!     target_frequency: 0.01,
//! })
//! .unwrap();
//! assert_eq!(result.gap_status, GapStatus::Inadequate);
//! ```

#![forbid(unsafe_code)]

pub use hazop_domain::*;

pub use hazop_regulatory::{
    ClauseRef, Jurisdiction, Registry, RegulatoryClause, RegulatoryStandard, StandardCategory,
    StandardFilter, registry,
};
pub use hazop_types::{Finding, RelevanceArea, ReportEnvelope, Severity};
