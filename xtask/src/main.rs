//! Developer tasks (schema generation, catalog checks, fixture conformance).
//!
//! Keeping this separate keeps the library crates free of filesystem and process concerns.

use anyhow::{Context, bail};
use hazop_app::{
    ComplianceInput, ScreeningInput, run_compliance, run_ipl_validation, run_lopa,
    run_screening, serialize_report,
};
use hazop_settings::Overrides;
use hazop_test_util::normalize_nondeterministic;
use schemars::schema_for;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return parent.to_path_buf();
    }
    manifest_dir
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(hazop_settings::HazopConfigV1)
}

fn generate_lopa_schema() -> schemars::Schema {
    schema_for!(hazop_app::LopaReportV1)
}

fn generate_ipl_schema() -> schemars::Schema {
    schema_for!(hazop_app::IplReportV1)
}

fn generate_compliance_schema() -> schemars::Schema {
    schema_for!(hazop_app::ComplianceReportV1)
}

fn generate_screening_schema() -> schemars::Schema {
    schema_for!(hazop_app::ScreeningReportV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "hazop.config.v1.json",
            generate: generate_config_schema,
        },
        SchemaSpec {
            filename: "hazop.lopa.v1.json",
            generate: generate_lopa_schema,
        },
        SchemaSpec {
            filename: "hazop.ipl.v1.json",
            generate: generate_ipl_schema,
        },
        SchemaSpec {
            filename: "hazop.compliance.v1.json",
            generate: generate_compliance_schema,
        },
        SchemaSpec {
            filename: "hazop.screening.v1.json",
            generate: generate_screening_schema,
        },
    ]
}

fn spec_for(filename: &str) -> anyhow::Result<SchemaSpec> {
    schema_specs()
        .into_iter()
        .find(|s| s.filename == filename)
        .with_context(|| format!("no schema spec named {filename}"))
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run every fixture study and validate the reports against their schemas");
    eprintln!("  explain-coverage  Validate all relevance areas and codes have explanations");
    eprintln!("  catalog-stats     Print regulatory catalog statistics");
}

/// Validate one serialized report against the schema generated for its type.
fn check_report<T: Serialize>(
    label: &str,
    schema_file: &str,
    report: &hazop_types::ReportEnvelope<T>,
    errors: &mut Vec<String>,
) -> anyhow::Result<()> {
    let text = serialize_report(report)?;
    let value: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("{label}: reparse report"))?;

    let schema = serde_json::to_value((spec_for(schema_file)?.generate)())
        .context("Failed to convert schema to JSON")?;
    let compiled = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile {schema_file}: {e}"))?;

    let before = errors.len();
    for err in compiled.iter_errors(&value) {
        errors.push(format!("{label}: schema validation: {err}"));
    }

    // Normalized output must still carry the envelope header.
    let normalized = normalize_nondeterministic(value);
    if normalized["generated_at"] != "__TIMESTAMP__" {
        errors.push(format!("{label}: envelope is missing generated_at"));
    }

    if errors.len() == before {
        println!("  ✓ {label} validates against {schema_file}");
    }
    Ok(())
}

fn read_if_exists(path: &Path) -> anyhow::Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Run each fixture study through the use cases and validate every report.
fn conform() -> anyhow::Result<()> {
    let dir = fixtures_dir();
    if !dir.exists() {
        bail!("tests/fixtures/ not found at {}", dir.display());
    }

    let mut studies: Vec<PathBuf> = fs::read_dir(&dir)
        .context("Failed to read tests/fixtures/")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    studies.sort();

    let mut errors = Vec::new();
    for study in &studies {
        let name = study
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        println!("{name}:");

        let config_text = read_if_exists(&study.join("hazop.toml"))?.unwrap_or_default();

        if let Some(entries_json) = read_if_exists(&study.join("entries.json"))? {
            let compliance = run_compliance(ComplianceInput {
                config_text: &config_text,
                entries_json: &entries_json,
                overrides: Overrides::default(),
            })
            .with_context(|| format!("{name}: compliance"))?;
            check_report(
                &format!("{name}/compliance"),
                "hazop.compliance.v1.json",
                &compliance.report,
                &mut errors,
            )?;

            let screening = run_screening(ScreeningInput {
                config_text: &config_text,
                entries_json: &entries_json,
                overrides: Overrides::default(),
            })
            .with_context(|| format!("{name}: screening"))?;
            check_report(
                &format!("{name}/screening"),
                "hazop.screening.v1.json",
                &screening.report,
                &mut errors,
            )?;
        }

        if let Some(case_json) = read_if_exists(&study.join("lopa.json"))? {
            let lopa = run_lopa(&case_json).with_context(|| format!("{name}: lopa"))?;
            check_report(
                &format!("{name}/lopa"),
                "hazop.lopa.v1.json",
                &lopa.report,
                &mut errors,
            )?;
        }

        if let Some(ipls_json) = read_if_exists(&study.join("ipls.json"))? {
            let ipl = run_ipl_validation(&ipls_json).with_context(|| format!("{name}: ipl"))?;
            check_report(
                &format!("{name}/ipl"),
                "hazop.ipl.v1.json",
                &ipl,
                &mut errors,
            )?;
        }
    }

    if studies.is_empty() {
        bail!("No fixture studies found in tests/fixtures/");
    }

    if errors.is_empty() {
        println!("\n✓ {} fixture studies conform", studies.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

/// Check that every relevance area and finding code resolves to a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    let areas = hazop_types::explain::all_relevance_areas();
    let codes = hazop_types::explain::all_codes();
    let mut errors = Vec::new();

    for id in areas.iter().chain(codes) {
        match hazop_types::explain::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("'{}' has empty title", id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("'{}' has empty description", id));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("'{}' has empty remediation", id));
                }
            }
            None => {
                errors.push(format!("'{}' has no explanation", id));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} relevance areas have explanations", areas.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn catalog_stats() -> anyhow::Result<()> {
    let stats = hazop_regulatory::registry().statistics();
    let text =
        serde_json::to_string_pretty(&stats).context("Failed to serialize catalog statistics")?;
    println!("{text}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "catalog-stats" => catalog_stats(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                let name = spec.filename.trim_end_matches(".json");
                println!("{}", name);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
