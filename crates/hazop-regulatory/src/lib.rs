//! Regulatory standards registry.
//!
//! The catalog is compiled into the binary and indexed once on first use. Nothing here is
//! mutated after construction, so the global registry is safe for any number of concurrent
//! readers. Refreshing means building a whole new [`Registry`] and swapping the reference.

#![forbid(unsafe_code)]

mod catalog;
pub mod model;
mod registry;

pub use model::{
    ClauseRef, Jurisdiction, MatchField, RegistryStatistics, RegulatoryClause,
    RegulatoryStandard, SearchHit, StandardCategory, StandardFilter,
};
pub use registry::{Registry, RegistryError};

/// The process-wide registry built from the compiled-in catalog.
pub fn registry() -> &'static Registry {
    Registry::global()
}
