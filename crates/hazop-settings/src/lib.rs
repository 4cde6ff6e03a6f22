//! Config parsing and profile resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{ComplianceSection, HazopConfigV1, LopaTriggerSection, ThresholdsSection};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `hazop.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<HazopConfigV1> {
    let cfg: HazopConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective configuration (profile + overrides + per-section settings).
pub fn resolve_config(cfg: HazopConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
