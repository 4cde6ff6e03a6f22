//! The `explain` use case: look up relevance areas, finding codes, standards and clauses.

use hazop_regulatory::{ClauseRef, RegulatoryStandard};
use hazop_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// A relevance area or finding code.
    Found(Explanation),
    /// A standard id from the regulatory catalog.
    Standard(&'static RegulatoryStandard),
    /// A clause id from the regulatory catalog.
    Clause(ClauseRef),
    /// Unknown identifier; includes available areas and codes.
    NotFound {
        identifier: String,
        available_areas: Vec<&'static str>,
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for an area, code, standard id or clause id, in that order.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    if let Some(exp) = explain::lookup_explanation(identifier) {
        return ExplainOutput::Found(exp);
    }
    let registry = hazop_regulatory::registry();
    if let Some(standard) = registry.standard(identifier) {
        return ExplainOutput::Standard(standard);
    }
    if let Some(clause) = registry.clause(identifier) {
        return ExplainOutput::Clause(clause);
    }
    ExplainOutput::NotFound {
        identifier: identifier.to_string(),
        available_areas: explain::all_relevance_areas(),
        available_codes: explain::all_codes(),
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    push_heading(&mut out, exp.title, '=');
    out.push_str(exp.description);
    out.push_str("\n\n");
    push_heading(&mut out, "Remediation", '-');
    out.push_str(exp.remediation);
    out.push('\n');

    out
}

pub fn format_standard(standard: &RegulatoryStandard) -> String {
    let mut out = String::new();

    push_heading(&mut out, standard.title, '=');
    out.push_str(&format!(
        "{} ({}, {})\n",
        standard.short_name, standard.issuing_body, standard.year
    ));
    out.push_str(&format!(
        "Category: {}  Jurisdiction: {}  Mandatory: {}\n\n",
        standard.category,
        standard.jurisdiction,
        yes_no(standard.mandatory)
    ));
    out.push_str(standard.description);
    out.push_str("\n\n");

    push_heading(&mut out, "Clauses", '-');
    for clause in standard.relevant_clauses {
        out.push_str(&format!(
            "  - {} [{}] {}{}\n",
            clause.id,
            clause.reference,
            clause.title,
            if clause.mandatory { "" } else { " (advisory)" }
        ));
    }
    if !standard.related_standards.is_empty() {
        out.push_str("\nRelated: ");
        out.push_str(&standard.related_standards.join(", "));
        out.push('\n');
    }

    out
}

pub fn format_clause(clause: &ClauseRef) -> String {
    let ClauseRef { standard, clause } = *clause;
    let mut out = String::new();

    push_heading(
        &mut out,
        &format!("{} {}: {}", standard.short_name, clause.reference, clause.title),
        '=',
    );
    out.push_str(clause.description);
    out.push_str("\n\n");
    out.push_str(&format!("Mandatory: {}\n", yes_no(clause.mandatory)));
    let areas: Vec<&str> = clause.hazops_relevance.iter().map(|a| a.as_str()).collect();
    out.push_str(&format!("Relevance: {}\n", areas.join(", ")));
    out.push_str(&format!("Keywords: {}\n", clause.keywords.join(", ")));
    if let Some(parent) = clause.parent_clause_id {
        out.push_str(&format!("Parent clause: {parent}\n"));
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    areas: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Unknown area, code, standard or clause: {}\n\n",
        identifier
    ));
    out.push_str("Available relevance areas:\n");
    for area in areas {
        out.push_str(&format!("  - {}\n", area));
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}

fn push_heading(out: &mut String, title: &str, underline: char) {
    out.push_str(title);
    out.push('\n');
    out.extend(std::iter::repeat_n(underline, title.chars().count()));
    out.push_str("\n\n");
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_area() {
        let output = run_explain("lopa");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_known_code() {
        let output = run_explain("sif_missing_sil");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_standard_and_clause() {
        let standard = unwrap_standard(run_explain("iec-61511"));
        assert_eq!(standard.id, "iec-61511");

        let clause_id = standard.relevant_clauses[0].id;
        let clause = unwrap_clause(run_explain(clause_id));
        assert_eq!(clause.standard.id, "iec-61511");
        assert_eq!(clause.clause.id, clause_id);
    }

    #[test]
    fn explain_unknown() {
        let output = run_explain("not_a_real_thing");
        let (identifier, available_areas, available_codes) = unwrap_not_found(output);
        assert_eq!(identifier, "not_a_real_thing");
        assert_eq!(available_areas.len(), 12);
        assert!(!available_codes.is_empty());
    }

    #[test]
    fn format_explanation_output() {
        let exp = unwrap_found(run_explain("safeguards"));
        let formatted = format_explanation(&exp);
        assert!(formatted.starts_with("Safeguards\n==========\n"));
        assert!(formatted.contains("Remediation\n-----------\n"));
    }

    #[test]
    fn format_standard_lists_clauses() {
        let standard = unwrap_standard(run_explain("uk-comah"));
        let formatted = format_standard(standard);
        assert!(formatted.contains("COMAH 2015"));
        assert!(formatted.contains("uk-comah-reg-8-sil"));
        assert!(formatted.contains("(advisory)"));
        assert!(formatted.contains("Related: seveso-iii, iec-61511"));
    }

    #[test]
    fn format_clause_shows_parent_and_relevance() {
        let clause = unwrap_clause(run_explain("uk-comah-reg-8-sil"));
        let formatted = format_clause(&clause);
        assert!(formatted.contains("Relevance: sil_determination, lopa"));
        assert!(formatted.contains("Parent clause: uk-comah-reg-8"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["lopa", "safeguards"], &["code.one"]);
        assert!(formatted.contains("Unknown area, code, standard or clause: missing"));
        assert!(formatted.contains("Available relevance areas:"));
        assert!(formatted.contains("  - lopa\n"));
        assert!(formatted.contains("  - safeguards\n"));
        assert!(formatted.contains("Available codes:"));
        assert!(formatted.contains("code.one"));
    }

    fn unwrap_found(output: ExplainOutput) -> Explanation {
        match output {
            ExplainOutput::Found(exp) => exp,
            _ => panic!("expected Found"),
        }
    }

    fn unwrap_standard(output: ExplainOutput) -> &'static RegulatoryStandard {
        match output {
            ExplainOutput::Standard(standard) => standard,
            _ => panic!("expected Standard"),
        }
    }

    fn unwrap_clause(output: ExplainOutput) -> ClauseRef {
        match output {
            ExplainOutput::Clause(clause) => clause,
            _ => panic!("expected Clause"),
        }
    }

    fn unwrap_not_found(
        output: ExplainOutput,
    ) -> (String, Vec<&'static str>, &'static [&'static str]) {
        match output {
            ExplainOutput::NotFound {
                identifier,
                available_areas,
                available_codes,
            } => (identifier, available_areas, available_codes),
            _ => panic!("expected NotFound"),
        }
    }

    #[test]
    #[should_panic(expected = "expected Found")]
    fn unwrap_found_panics_for_not_found() {
        let _ = unwrap_found(run_explain("not_a_real_thing"));
    }
}
