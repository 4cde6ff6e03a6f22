//! Shared test utilities for the hazop-guard workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `hazop-types` would not suffice.

use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Environment variable read by [`init_tracing`].
pub const LOG_ENV: &str = "HAZOP_LOG";

const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Two concerns are handled separately:
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` only
///    when the *root* object looks like a report envelope (has all four keys:
///    `schema`, `tool`, `generated_at`, `data`). Nested payloads that happen
///    to carry a `tool` object are left alone.
///
/// 2. **Recursive**: `generated_at` is normalized at any depth because the
///    placeholder is fixed and cannot collide with real data.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("generated_at")
            && obj.contains_key("data");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String(VERSION_PLACEHOLDER.to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.contains_key("generated_at") {
                map.insert(
                    "generated_at".to_string(),
                    Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
                );
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

/// Install a test-friendly `tracing` subscriber filtered by `HAZOP_LOG`.
///
/// Safe to call from every test: only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_only_touches_envelope_tool_version() {
        let input = json!({
            "schema": "hazop.ipl.v1",
            "tool": { "name": "hazop-guard", "version": "0.1.0" },
            "generated_at": "2026-01-01T00:00:00Z",
            "data": {
                "results": [
                    { "data": { "tool": { "name": "sis-vendor", "version": "4.2" } } }
                ]
            }
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(result["tool"]["name"], "hazop-guard");
        assert_eq!(result["generated_at"], "__TIMESTAMP__");
        assert_eq!(
            result["data"]["results"][0]["data"]["tool"]["version"],
            "4.2"
        );
    }

    #[test]
    fn nested_generated_at_is_normalized() {
        let input = json!({
            "schema": "hazop.compliance.v1",
            "tool": { "name": "hazop-guard", "version": "0.1.0" },
            "generated_at": "2026-01-01T00:00:00Z",
            "data": {
                "previous": { "generated_at": "2025-12-31T23:59:59Z" }
            }
        });

        let result = normalize_nondeterministic(input);
        assert_eq!(result["data"]["previous"]["generated_at"], "__TIMESTAMP__");
    }

    #[test]
    fn root_without_envelope_keys_keeps_version() {
        let input = json!({
            "tool": { "name": "other", "version": "2.0.0" },
            "generated_at": "2026-01-01T00:00:00Z"
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "2.0.0");
        assert_eq!(result["generated_at"], "__TIMESTAMP__");
    }

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
