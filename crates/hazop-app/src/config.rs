use anyhow::Context;
use hazop_domain::AnalysisEntry;
use hazop_settings::{HazopConfigV1, Overrides, ResolvedConfig};

/// Parse and resolve `hazop.toml` text. Empty text means "profile defaults".
pub(crate) fn load_config(
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        HazopConfigV1::default()
    } else {
        hazop_settings::parse_config_toml(config_text).context("parse config")?
    };
    hazop_settings::resolve_config(cfg, overrides).context("resolve config")
}

pub(crate) fn parse_entries_json(entries_json: &str) -> anyhow::Result<Vec<AnalysisEntry>> {
    serde_json::from_str(entries_json).context("parse analysis entries")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let resolved = load_config("  \n", Overrides::default()).expect("load");
        assert_eq!(resolved.profile, "default");
    }

    #[test]
    fn broken_config_reports_parse_context() {
        let err = load_config("profile = [", Overrides::default()).expect_err("invalid toml");
        assert!(format!("{err:#}").starts_with("parse config"));
    }

    #[test]
    fn entries_must_be_a_json_array() {
        assert!(parse_entries_json("[]").expect("empty array").is_empty());
        let err = parse_entries_json(r#"{"id":"e-1"}"#).expect_err("object");
        assert!(format!("{err:#}").starts_with("parse analysis entries"));
    }
}
