use anyhow::Context;
use hazop_domain::{ComplianceReport, IplCollectionValidation, LopaResult};
use hazop_types::{ReportEnvelope, ToolMeta};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use time::OffsetDateTime;

use crate::screening::ScreeningReport;

pub const TOOL_NAME: &str = "hazop-guard";

pub type LopaReportV1 = ReportEnvelope<LopaResult>;
pub type IplReportV1 = ReportEnvelope<IplCollectionValidation>;
pub type ComplianceReportV1 = ReportEnvelope<ComplianceReport>;
pub type ScreeningReportV1 = ReportEnvelope<ScreeningReport>;

pub(crate) fn envelope<T>(schema: &str, data: T) -> ReportEnvelope<T> {
    ReportEnvelope {
        schema: schema.to_string(),
        tool: ToolMeta {
            name: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: OffsetDateTime::now_utc(),
        data,
    }
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report<T: Serialize>(report: &ReportEnvelope<T>) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(report).context("serialize report")?;
    text.push('\n');
    Ok(text)
}

/// Parse a report previously written by [`serialize_report`], checking its schema id.
pub fn parse_report_json<T: DeserializeOwned>(
    text: &str,
    expected_schema: &str,
) -> anyhow::Result<ReportEnvelope<T>> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != expected_schema {
        anyhow::bail!("unexpected report schema: {schema:?} (expected {expected_schema})");
    }

    serde_json::from_value(value).with_context(|| format!("parse {expected_schema} report"))
}

/// Serialize `report` to `path`, creating parent directories as needed.
pub fn write_report<T: Serialize>(path: &Path, report: &ReportEnvelope<T>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create report directory {}", parent.display()))?;
    }
    let text = serialize_report(report)?;
    std::fs::write(path, text).with_context(|| format!("write report {}", path.display()))
}
