use crate::model::{Jurisdiction, RegulatoryClause, RegulatoryStandard, StandardCategory};
use hazop_types::RelevanceArea::*;

pub(crate) const OSHA_PSM: RegulatoryStandard = RegulatoryStandard {
    id: "osha-psm",
    short_name: "OSHA PSM",
    title: "Process Safety Management of Highly Hazardous Chemicals",
    description: "29 CFR 1910.119 requirements for preventing or minimising the consequences of \
catastrophic releases of toxic, reactive, flammable or explosive chemicals.",
    issuing_body: "Occupational Safety and Health Administration",
    year: 1992,
    category: StandardCategory::ProcessSafety,
    jurisdiction: Jurisdiction::UnitedStates,
    mandatory: true,
    related_standards: &["epa-rmp", "iec-61882", "ccps-lopa"],
    relevant_clauses: &[
        RegulatoryClause {
            id: "osha-psm-d",
            reference: "1910.119(d)",
            title: "Process safety information",
            description: "Compile information on the hazards of the chemicals, the technology \
and the equipment before conducting any process hazard analysis.",
            keywords: &["process safety information", "p&id", "relief", "design basis", "material"],
            mandatory: true,
            hazops_relevance: &[Documentation],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "osha-psm-e",
            reference: "1910.119(e)",
            title: "Process hazard analysis",
            description: "Perform an initial process hazard analysis appropriate to the \
complexity of the process to identify, evaluate and control hazards.",
            keywords: &["process hazard analysis", "hazard", "deviation", "pha"],
            mandatory: true,
            hazops_relevance: &[HazardIdentification, RiskAssessment],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "osha-psm-e2",
            reference: "1910.119(e)(2)",
            title: "Analysis methodology",
            description: "Use one or more recognised methodologies such as What-If, HAZOP, \
FMEA or fault tree analysis, appropriate to the process.",
            keywords: &["hazop", "guide word", "node", "methodology", "what-if"],
            mandatory: true,
            hazops_relevance: &[Methodology],
            parent_clause_id: Some("osha-psm-e"),
        },
        RegulatoryClause {
            id: "osha-psm-e3-i",
            reference: "1910.119(e)(3)(i)",
            title: "Hazards of the process",
            description: "The analysis shall address the hazards of the process.",
            keywords: &["hazard", "release", "fire", "explosion", "toxic", "overpressure"],
            mandatory: true,
            hazops_relevance: &[HazardIdentification],
            parent_clause_id: Some("osha-psm-e"),
        },
        RegulatoryClause {
            id: "osha-psm-e3-iii",
            reference: "1910.119(e)(3)(iii)",
            title: "Engineering and administrative controls",
            description: "The analysis shall address engineering and administrative controls \
applicable to the hazards and their interrelationships, such as detection methodologies.",
            keywords: &["safeguard", "alarm", "interlock", "relief", "procedure", "detection"],
            mandatory: true,
            hazops_relevance: &[Safeguards],
            parent_clause_id: Some("osha-psm-e"),
        },
        RegulatoryClause {
            id: "osha-psm-e3-iv",
            reference: "1910.119(e)(3)(iv)",
            title: "Consequences of control failure",
            description: "The analysis shall address consequences of failure of engineering \
and administrative controls.",
            keywords: &["consequence", "failure", "loss of containment", "injury"],
            mandatory: true,
            hazops_relevance: &[HazardIdentification, RiskAssessment],
            parent_clause_id: Some("osha-psm-e"),
        },
        RegulatoryClause {
            id: "osha-psm-e4",
            reference: "1910.119(e)(4)",
            title: "Team composition",
            description: "The analysis shall be performed by a team with expertise in \
engineering and process operations, including at least one employee with experience of the \
process and one knowledgeable in the methodology.",
            keywords: &["team", "facilitator", "scribe", "operator"],
            mandatory: true,
            hazops_relevance: &[TeamComposition],
            parent_clause_id: Some("osha-psm-e"),
        },
        RegulatoryClause {
            id: "osha-psm-e5",
            reference: "1910.119(e)(5)",
            title: "Resolution of findings",
            description: "Establish a system to promptly address the team's findings and \
recommendations, document actions taken and communicate them to affected employees.",
            keywords: &["recommendation", "action", "resolution", "finding"],
            mandatory: true,
            hazops_relevance: &[Recommendations, FollowUp],
            parent_clause_id: Some("osha-psm-e"),
        },
        RegulatoryClause {
            id: "osha-psm-e6",
            reference: "1910.119(e)(6)",
            title: "Revalidation",
            description: "Update and revalidate the process hazard analysis at least every \
five years.",
            keywords: &["revalidation", "update", "five years"],
            mandatory: true,
            hazops_relevance: &[FollowUp, Documentation],
            parent_clause_id: Some("osha-psm-e"),
        },
        RegulatoryClause {
            id: "osha-psm-e7",
            reference: "1910.119(e)(7)",
            title: "Record retention",
            description: "Retain process hazard analyses, updates and documented resolution of \
recommendations for the life of the process.",
            keywords: &["record", "retention", "documentation", "worksheet"],
            mandatory: true,
            hazops_relevance: &[Documentation],
            parent_clause_id: Some("osha-psm-e"),
        },
        RegulatoryClause {
            id: "osha-psm-l",
            reference: "1910.119(l)",
            title: "Management of change",
            description: "Establish written procedures to manage changes to process \
chemicals, technology, equipment, procedures and facilities.",
            keywords: &["management of change", "moc", "modification", "change"],
            mandatory: true,
            hazops_relevance: &[ManagementOfChange],
            parent_clause_id: None,
        },
    ],
};

pub(crate) const EPA_RMP: RegulatoryStandard = RegulatoryStandard {
    id: "epa-rmp",
    short_name: "EPA RMP",
    title: "Chemical Accident Prevention Provisions (Risk Management Program)",
    description: "40 CFR Part 68 requirements for stationary sources holding regulated \
substances above threshold quantities, including hazard review and prevention programs.",
    issuing_body: "Environmental Protection Agency",
    year: 1996,
    category: StandardCategory::Environmental,
    jurisdiction: Jurisdiction::UnitedStates,
    mandatory: true,
    related_standards: &["osha-psm"],
    relevant_clauses: &[
        RegulatoryClause {
            id: "epa-rmp-68-67",
            reference: "40 CFR 68.67",
            title: "Process hazard analysis",
            description: "Program 3 processes require a process hazard analysis that \
identifies, evaluates and controls the hazards involved in the process.",
            keywords: &["process hazard analysis", "hazard", "pha", "deviation"],
            mandatory: true,
            hazops_relevance: &[HazardIdentification],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "epa-rmp-68-67-b",
            reference: "40 CFR 68.67(b)",
            title: "Analysis methodology",
            description: "Use one or more of the listed methodologies, including hazard and \
operability study, appropriate to the complexity of the process.",
            keywords: &["hazop", "methodology", "guide word"],
            mandatory: true,
            hazops_relevance: &[Methodology],
            parent_clause_id: Some("epa-rmp-68-67"),
        },
        RegulatoryClause {
            id: "epa-rmp-68-67-c",
            reference: "40 CFR 68.67(c)",
            title: "Scope of the analysis",
            description: "Address hazards, previous incidents, controls, consequences of \
control failure, stationary source siting and human factors, with a qualitative evaluation \
of possible effects.",
            keywords: &["consequence", "human factors", "siting", "offsite", "release"],
            mandatory: true,
            hazops_relevance: &[HazardIdentification, RiskAssessment, Safeguards],
            parent_clause_id: Some("epa-rmp-68-67"),
        },
        RegulatoryClause {
            id: "epa-rmp-68-67-d",
            reference: "40 CFR 68.67(d)",
            title: "Team composition",
            description: "The analysis shall be performed by a team with expertise in \
engineering and process operations.",
            keywords: &["team", "expertise"],
            mandatory: true,
            hazops_relevance: &[TeamComposition],
            parent_clause_id: Some("epa-rmp-68-67"),
        },
        RegulatoryClause {
            id: "epa-rmp-68-67-e",
            reference: "40 CFR 68.67(e)",
            title: "Addressing team findings",
            description: "Establish a system to promptly address the team's findings and \
recommendations and complete actions on a written schedule.",
            keywords: &["recommendation", "schedule", "action"],
            mandatory: true,
            hazops_relevance: &[Recommendations, FollowUp],
            parent_clause_id: Some("epa-rmp-68-67"),
        },
        RegulatoryClause {
            id: "epa-rmp-68-75",
            reference: "40 CFR 68.75",
            title: "Management of change",
            description: "Written procedures to manage changes to process chemicals, \
technology, equipment and procedures.",
            keywords: &["management of change", "moc", "change"],
            mandatory: true,
            hazops_relevance: &[ManagementOfChange],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "epa-rmp-68-22",
            reference: "40 CFR 68.22",
            title: "Offsite consequence analysis parameters",
            description: "Worst-case and alternative release scenarios use prescribed \
endpoints, wind speed and atmospheric stability.",
            keywords: &["worst case", "release scenario", "toxic endpoint", "dispersion"],
            mandatory: false,
            hazops_relevance: &[RiskAssessment],
            parent_clause_id: None,
        },
    ],
};

pub(crate) const CCPS_LOPA: RegulatoryStandard = RegulatoryStandard {
    id: "ccps-lopa",
    short_name: "CCPS LOPA",
    title: "Layer of Protection Analysis: Simplified Process Risk Assessment",
    description: "CCPS guidance for semi-quantitative risk assessment of scenarios using \
initiating event frequencies and independent protection layers.",
    issuing_body: "Center for Chemical Process Safety",
    year: 2001,
    category: StandardCategory::IndustryGuidance,
    jurisdiction: Jurisdiction::UnitedStates,
    mandatory: false,
    related_standards: &["iec-61511", "osha-psm"],
    relevant_clauses: &[
        RegulatoryClause {
            id: "ccps-lopa-3",
            reference: "Chapter 3",
            title: "Scenario development",
            description: "Develop cause-consequence pairs from the hazard evaluation as LOPA \
scenarios.",
            keywords: &["scenario", "cause", "consequence", "initiating event"],
            mandatory: false,
            hazops_relevance: &[Lopa, HazardIdentification],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "ccps-lopa-5",
            reference: "Chapter 5",
            title: "Initiating event frequency",
            description: "Select initiating event frequencies from recognised data sources \
and document their basis.",
            keywords: &["initiating event", "frequency", "failure rate"],
            mandatory: false,
            hazops_relevance: &[Lopa],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "ccps-lopa-6",
            reference: "Chapter 6",
            title: "Independent protection layers",
            description: "Credit only safeguards that are effective, independent of the \
initiating event and other IPLs, and auditable.",
            keywords: &["ipl", "independent", "protection layer", "pfd", "safeguard"],
            mandatory: false,
            hazops_relevance: &[Lopa, Safeguards],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "ccps-lopa-7",
            reference: "Chapter 7",
            title: "Scenario frequency calculation",
            description: "Calculate mitigated event frequency and compare against risk \
tolerance criteria.",
            keywords: &["mitigated", "frequency", "tolerable", "risk criteria"],
            mandatory: false,
            hazops_relevance: &[Lopa, RiskAssessment],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "ccps-lopa-8",
            reference: "Chapter 8",
            title: "Using LOPA to make risk decisions",
            description: "Decide whether additional risk reduction is required and specify \
the integrity of any new instrumented function.",
            keywords: &["risk decision", "sil", "additional", "recommendation"],
            mandatory: false,
            hazops_relevance: &[SilDetermination, Recommendations],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "ccps-lopa-9",
            reference: "Chapter 9",
            title: "Documentation of LOPA",
            description: "Record scenarios, frequencies, credited IPLs and decisions so the \
analysis can be audited.",
            keywords: &["documentation", "record", "worksheet"],
            mandatory: false,
            hazops_relevance: &[Documentation, Lopa],
            parent_clause_id: None,
        },
    ],
};

pub(crate) const API_RP_14C: RegulatoryStandard = RegulatoryStandard {
    id: "api-rp-14c",
    short_name: "API RP 14C",
    title: "Analysis, Design, Installation and Testing of Safety Systems for Offshore \
Production Facilities",
    description: "Recommended practice for safety analysis of offshore process components \
using safety analysis tables and checklists.",
    issuing_body: "American Petroleum Institute",
    year: 2017,
    category: StandardCategory::IndustryGuidance,
    jurisdiction: Jurisdiction::UnitedStates,
    mandatory: false,
    related_standards: &["iso-17776"],
    relevant_clauses: &[
        RegulatoryClause {
            id: "api-rp-14c-5",
            reference: "Section 5",
            title: "Safety analysis of process components",
            description: "Identify undesirable events for each process component using \
safety analysis tables.",
            keywords: &["overpressure", "underpressure", "leak", "overflow", "undesirable event"],
            mandatory: false,
            hazops_relevance: &[HazardIdentification, Methodology],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "api-rp-14c-5-3",
            reference: "Section 5.3",
            title: "Primary and secondary protection",
            description: "Provide two levels of protection for each undesirable event, \
independent of each other.",
            keywords: &["psh", "psv", "relief", "shutdown", "secondary protection"],
            mandatory: false,
            hazops_relevance: &[Safeguards],
            parent_clause_id: Some("api-rp-14c-5"),
        },
        RegulatoryClause {
            id: "api-rp-14c-6",
            reference: "Section 6",
            title: "Testing of safety devices",
            description: "Define test intervals and procedures for safety devices.",
            keywords: &["testing", "proof test", "interval"],
            mandatory: false,
            hazops_relevance: &[FollowUp],
            parent_clause_id: None,
        },
    ],
};
