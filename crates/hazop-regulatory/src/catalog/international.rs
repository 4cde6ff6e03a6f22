use crate::model::{Jurisdiction, RegulatoryClause, RegulatoryStandard, StandardCategory};
use hazop_types::RelevanceArea::*;

pub(crate) const IEC_61511: RegulatoryStandard = RegulatoryStandard {
    id: "iec-61511",
    short_name: "IEC 61511",
    title: "Functional safety - Safety instrumented systems for the process industry sector",
    description: "Requirements for the specification, design, operation and modification of \
safety instrumented systems, including hazard and risk assessment and SIL allocation.",
    issuing_body: "International Electrotechnical Commission",
    year: 2016,
    category: StandardCategory::FunctionalSafety,
    jurisdiction: Jurisdiction::International,
    mandatory: true,
    related_standards: &["iec-61508", "ccps-lopa"],
    relevant_clauses: &[
        RegulatoryClause {
            id: "iec-61511-8-1",
            reference: "Clause 8.1",
            title: "Hazard and risk assessment objectives",
            description: "Determine the hazards and hazardous events of the process, the \
sequence of events leading to them and the associated process risks.",
            keywords: &["hazard", "hazardous event", "sequence of events", "process risk"],
            mandatory: true,
            hazops_relevance: &[HazardIdentification],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iec-61511-8-2-1",
            reference: "Clause 8.2.1",
            title: "Hazard and risk assessment requirements",
            description: "Carry out a hazard and risk assessment describing each event, its \
likelihood and consequence, and the risk reduction required.",
            keywords: &["likelihood", "consequence", "risk reduction", "severity"],
            mandatory: true,
            hazops_relevance: &[RiskAssessment, RiskRanking],
            parent_clause_id: Some("iec-61511-8-1"),
        },
        RegulatoryClause {
            id: "iec-61511-8-2-4",
            reference: "Clause 8.2.4",
            title: "Security risk assessment",
            description: "Carry out a security risk assessment of the SIS and its associated \
elements.",
            keywords: &["security", "cyber", "access"],
            mandatory: true,
            hazops_relevance: &[RiskAssessment],
            parent_clause_id: Some("iec-61511-8-1"),
        },
        RegulatoryClause {
            id: "iec-61511-9-2",
            reference: "Clause 9.2",
            title: "Allocation of safety functions and SIL determination",
            description: "Allocate safety functions to protection layers and determine the \
required safety integrity level for each safety instrumented function.",
            keywords: &["sil", "safety integrity level", "sif", "allocation"],
            mandatory: true,
            hazops_relevance: &[SilDetermination, Lopa],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iec-61511-9-3",
            reference: "Clause 9.3",
            title: "BPCS as a protection layer",
            description: "A basic process control system credited as a protection layer \
shall claim a risk reduction factor no greater than 10 and be independent of the initiating \
cause.",
            keywords: &["bpcs", "control loop", "protection layer", "independent"],
            mandatory: true,
            hazops_relevance: &[Lopa, Safeguards],
            parent_clause_id: Some("iec-61511-9-2"),
        },
        RegulatoryClause {
            id: "iec-61511-9-4",
            reference: "Clause 9.4",
            title: "Preventing common cause failure",
            description: "Assess independence, diversity and physical separation between \
protection layers and between protection layers and the initiating cause.",
            keywords: &["common cause", "diversity", "separation", "independent"],
            mandatory: true,
            hazops_relevance: &[Lopa, Safeguards],
            parent_clause_id: Some("iec-61511-9-2"),
        },
        RegulatoryClause {
            id: "iec-61511-17",
            reference: "Clause 17",
            title: "SIS modification",
            description: "Plan, review and approve modifications to any SIS prior to \
implementation, including a hazard and risk analysis of the change.",
            keywords: &["modification", "management of change", "moc", "change"],
            mandatory: true,
            hazops_relevance: &[ManagementOfChange],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iec-61511-19",
            reference: "Clause 19",
            title: "Information and documentation",
            description: "Keep documentation of the hazard and risk assessment accurate, up \
to date and auditable.",
            keywords: &["documentation", "record", "revision"],
            mandatory: true,
            hazops_relevance: &[Documentation],
            parent_clause_id: None,
        },
    ],
};

pub(crate) const IEC_61508: RegulatoryStandard = RegulatoryStandard {
    id: "iec-61508",
    short_name: "IEC 61508",
    title: "Functional safety of electrical/electronic/programmable electronic safety-related \
systems",
    description: "Generic functional safety standard covering the overall safety lifecycle of \
E/E/PE safety-related systems.",
    issuing_body: "International Electrotechnical Commission",
    year: 2010,
    category: StandardCategory::FunctionalSafety,
    jurisdiction: Jurisdiction::International,
    mandatory: false,
    related_standards: &["iec-61511"],
    relevant_clauses: &[
        RegulatoryClause {
            id: "iec-61508-1-7-4",
            reference: "Part 1, 7.4",
            title: "Hazard and risk analysis",
            description: "Determine the hazards and hazardous events of the equipment under \
control for all reasonably foreseeable circumstances.",
            keywords: &["hazard", "hazardous event", "foreseeable misuse"],
            mandatory: true,
            hazops_relevance: &[HazardIdentification, RiskAssessment],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iec-61508-1-7-5",
            reference: "Part 1, 7.5",
            title: "Overall safety requirements",
            description: "Develop the specification of the overall safety function and \
integrity requirements needed to achieve functional safety.",
            keywords: &["safety function", "safety requirement", "tolerable risk"],
            mandatory: true,
            hazops_relevance: &[RiskAssessment],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iec-61508-1-7-6",
            reference: "Part 1, 7.6",
            title: "Overall safety requirements allocation",
            description: "Allocate safety functions to safety-related systems and other risk \
reduction measures and assign a safety integrity level to each.",
            keywords: &["sil", "allocation", "risk reduction"],
            mandatory: true,
            hazops_relevance: &[SilDetermination],
            parent_clause_id: Some("iec-61508-1-7-5"),
        },
        RegulatoryClause {
            id: "iec-61508-5-annex-f",
            reference: "Part 5, Annex F",
            title: "Semi-quantitative method: layer of protection analysis",
            description: "Informative method for determining safety integrity levels using \
layer of protection analysis.",
            keywords: &["lopa", "layer of protection", "pfd"],
            mandatory: false,
            hazops_relevance: &[Lopa, SilDetermination],
            parent_clause_id: None,
        },
    ],
};

pub(crate) const IEC_61882: RegulatoryStandard = RegulatoryStandard {
    id: "iec-61882",
    short_name: "IEC 61882",
    title: "Hazard and operability studies (HAZOP studies) - Application guide",
    description: "Guidance on the principles and procedures of HAZOP studies, including team \
organisation, examination technique, recording and follow-up.",
    issuing_body: "International Electrotechnical Commission",
    year: 2016,
    category: StandardCategory::RiskManagement,
    jurisdiction: Jurisdiction::International,
    mandatory: false,
    related_standards: &["iso-31000", "osha-psm"],
    relevant_clauses: &[
        RegulatoryClause {
            id: "iec-61882-6-2",
            reference: "Clause 6.2",
            title: "Definition of scope and objectives",
            description: "Define the boundaries of the system, its interfaces and the \
objectives of the study.",
            keywords: &["scope", "boundary", "objective", "node"],
            mandatory: false,
            hazops_relevance: &[Methodology],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iec-61882-6-3",
            reference: "Clause 6.3",
            title: "Roles and responsibilities",
            description: "Assemble a study team with a leader, recorder and members with the \
required design and operational knowledge.",
            keywords: &["team", "leader", "recorder", "facilitator"],
            mandatory: false,
            hazops_relevance: &[TeamComposition],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iec-61882-6-5",
            reference: "Clause 6.5",
            title: "Examination",
            description: "Divide the system into parts, apply guide words to each element and \
parameter, and identify causes and consequences of each deviation.",
            keywords: &["guide word", "deviation", "parameter", "cause", "consequence"],
            mandatory: false,
            hazops_relevance: &[Methodology, HazardIdentification],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iec-61882-6-5-safeguards",
            reference: "Clause 6.5",
            title: "Identification of protection",
            description: "Identify existing protection, detection and indication mechanisms \
for each deviation.",
            keywords: &["protection", "safeguard", "indication", "alarm"],
            mandatory: false,
            hazops_relevance: &[Safeguards],
            parent_clause_id: Some("iec-61882-6-5"),
        },
        RegulatoryClause {
            id: "iec-61882-6-6",
            reference: "Clause 6.6",
            title: "Documentation",
            description: "Record the study in worksheets covering deviation, causes, \
consequences, safeguards and actions.",
            keywords: &["worksheet", "record", "documentation"],
            mandatory: false,
            hazops_relevance: &[Documentation],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iec-61882-6-7",
            reference: "Clause 6.7",
            title: "Follow-up and responsibilities",
            description: "Track actions arising from the study to completion and record their \
outcome.",
            keywords: &["action", "follow-up", "close out"],
            mandatory: false,
            hazops_relevance: &[FollowUp, Recommendations],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iec-61882-7",
            reference: "Clause 7",
            title: "Risk ranking of deviations",
            description: "Where required, rank identified hazards to prioritise actions.",
            keywords: &["ranking", "priority", "risk matrix", "severity", "likelihood"],
            mandatory: false,
            hazops_relevance: &[RiskRanking],
            parent_clause_id: None,
        },
    ],
};

pub(crate) const ISO_31000: RegulatoryStandard = RegulatoryStandard {
    id: "iso-31000",
    short_name: "ISO 31000",
    title: "Risk management - Guidelines",
    description: "Principles, framework and process for managing risk in any organisation.",
    issuing_body: "International Organization for Standardization",
    year: 2018,
    category: StandardCategory::RiskManagement,
    jurisdiction: Jurisdiction::International,
    mandatory: false,
    related_standards: &["iec-61882", "iso-17776"],
    relevant_clauses: &[
        RegulatoryClause {
            id: "iso-31000-6-4-2",
            reference: "Clause 6.4.2",
            title: "Risk identification",
            description: "Find, recognise and describe risks that might help or prevent the \
organisation achieving its objectives.",
            keywords: &["risk identification", "source", "event", "cause"],
            mandatory: false,
            hazops_relevance: &[HazardIdentification],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iso-31000-6-4-3",
            reference: "Clause 6.4.3",
            title: "Risk analysis",
            description: "Comprehend the nature of risk, including likelihood, consequences \
and the effectiveness of existing controls.",
            keywords: &["likelihood", "consequence", "control", "level of risk"],
            mandatory: false,
            hazops_relevance: &[RiskAssessment, Safeguards],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iso-31000-6-4-4",
            reference: "Clause 6.4.4",
            title: "Risk evaluation",
            description: "Compare the results of risk analysis with established risk criteria \
to decide where additional action is required.",
            keywords: &["risk criteria", "evaluation", "tolerable", "ranking"],
            mandatory: false,
            hazops_relevance: &[RiskRanking],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iso-31000-6-5",
            reference: "Clause 6.5",
            title: "Risk treatment",
            description: "Select and implement options for addressing risk and prepare \
treatment plans.",
            keywords: &["treatment", "mitigation", "recommendation", "action plan"],
            mandatory: false,
            hazops_relevance: &[Recommendations],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iso-31000-6-7",
            reference: "Clause 6.7",
            title: "Recording and reporting",
            description: "Document and report the risk management process and its outcomes.",
            keywords: &["recording", "reporting", "documentation"],
            mandatory: false,
            hazops_relevance: &[Documentation],
            parent_clause_id: None,
        },
    ],
};

pub(crate) const ISO_17776: RegulatoryStandard = RegulatoryStandard {
    id: "iso-17776",
    short_name: "ISO 17776",
    title: "Petroleum and natural gas industries - Offshore production installations - Major \
accident hazard management during the design of new installations",
    description: "Processes for identifying and assessing major accident hazards and \
selecting risk reduction measures for offshore installations.",
    issuing_body: "International Organization for Standardization",
    year: 2016,
    category: StandardCategory::ProcessSafety,
    jurisdiction: Jurisdiction::International,
    mandatory: false,
    related_standards: &["iso-31000", "api-rp-14c"],
    relevant_clauses: &[
        RegulatoryClause {
            id: "iso-17776-5-2",
            reference: "Clause 5.2",
            title: "Hazard identification",
            description: "Systematically identify major accident hazards using structured \
techniques such as HAZID and HAZOP.",
            keywords: &["hazid", "hazop", "major accident", "hazard"],
            mandatory: false,
            hazops_relevance: &[HazardIdentification, Methodology],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iso-17776-5-3",
            reference: "Clause 5.3",
            title: "Risk assessment",
            description: "Assess the risk of each major accident hazard against tolerability \
criteria.",
            keywords: &["tolerability", "risk assessment", "frequency", "consequence"],
            mandatory: false,
            hazops_relevance: &[RiskAssessment, RiskRanking],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "iso-17776-5-4",
            reference: "Clause 5.4",
            title: "Risk reduction measures",
            description: "Select prevention, control and mitigation measures and demonstrate \
that risk is reduced as low as reasonably practicable.",
            keywords: &["alarp", "mitigation", "prevention", "barrier", "safeguard"],
            mandatory: false,
            hazops_relevance: &[Safeguards, Recommendations],
            parent_clause_id: None,
        },
    ],
};
