use crate::model::{Jurisdiction, RegulatoryClause, RegulatoryStandard, StandardCategory};
use hazop_types::RelevanceArea::*;

pub(crate) const SEVESO_III: RegulatoryStandard = RegulatoryStandard {
    id: "seveso-iii",
    short_name: "Seveso III",
    title: "Directive 2012/18/EU on the control of major-accident hazards involving dangerous \
substances",
    description: "EU framework requiring operators of establishments holding dangerous \
substances to prevent major accidents and limit their consequences.",
    issuing_body: "European Parliament and Council",
    year: 2012,
    category: StandardCategory::ProcessSafety,
    jurisdiction: Jurisdiction::EuropeanUnion,
    mandatory: true,
    related_standards: &["uk-comah"],
    relevant_clauses: &[
        RegulatoryClause {
            id: "seveso-iii-art-8",
            reference: "Article 8",
            title: "Major-accident prevention policy",
            description: "Draw up a document setting out the major-accident prevention policy \
and ensure it is properly implemented.",
            keywords: &["prevention policy", "mapp", "major accident"],
            mandatory: true,
            hazops_relevance: &[Documentation],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "seveso-iii-art-10",
            reference: "Article 10",
            title: "Safety report",
            description: "Upper-tier establishments produce a safety report demonstrating that \
major-accident hazards have been identified and necessary measures taken.",
            keywords: &["safety report", "major accident", "hazard", "scenario"],
            mandatory: true,
            hazops_relevance: &[HazardIdentification, RiskAssessment],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "seveso-iii-annex-ii-4",
            reference: "Annex II, point 4",
            title: "Identification and accidental risks analysis",
            description: "Describe possible major-accident scenarios, their probability and \
conditions, and assess the extent and severity of consequences.",
            keywords: &["scenario", "probability", "severity", "consequence", "domino"],
            mandatory: true,
            hazops_relevance: &[HazardIdentification, RiskAssessment, RiskRanking],
            parent_clause_id: Some("seveso-iii-art-10"),
        },
        RegulatoryClause {
            id: "seveso-iii-annex-ii-5",
            reference: "Annex II, point 5",
            title: "Protective and intervention measures",
            description: "Describe equipment installed to limit the consequences of major \
accidents and the measures taken to prevent them.",
            keywords: &["protective", "mitigation", "safeguard", "alarm", "emergency"],
            mandatory: true,
            hazops_relevance: &[Safeguards],
            parent_clause_id: Some("seveso-iii-art-10"),
        },
        RegulatoryClause {
            id: "seveso-iii-annex-iii-b-ii",
            reference: "Annex III(b)(ii)",
            title: "Identification and evaluation of major hazards",
            description: "Adopt and implement procedures for systematically identifying major \
hazards and evaluating their likelihood and severity.",
            keywords: &["systematic", "hazard", "likelihood", "severity", "procedure"],
            mandatory: true,
            hazops_relevance: &[HazardIdentification, Methodology],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "seveso-iii-annex-iii-b-iv",
            reference: "Annex III(b)(iv)",
            title: "Management of change",
            description: "Adopt procedures for planning modifications to installations, \
processes or storage facilities.",
            keywords: &["management of change", "modification", "moc", "change"],
            mandatory: true,
            hazops_relevance: &[ManagementOfChange],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "seveso-iii-annex-iii-b-vi",
            reference: "Annex III(b)(vi)",
            title: "Monitoring performance",
            description: "Adopt procedures for ongoing assessment of compliance with the \
prevention policy and for taking corrective action.",
            keywords: &["monitoring", "corrective action", "audit"],
            mandatory: true,
            hazops_relevance: &[FollowUp],
            parent_clause_id: None,
        },
    ],
};

pub(crate) const UK_COMAH: RegulatoryStandard = RegulatoryStandard {
    id: "uk-comah",
    short_name: "COMAH 2015",
    title: "Control of Major Accident Hazards Regulations 2015",
    description: "UK implementation of the Seveso III Directive, requiring operators to take \
all measures necessary to prevent major accidents and limit their consequences.",
    issuing_body: "Health and Safety Executive",
    year: 2015,
    category: StandardCategory::ProcessSafety,
    jurisdiction: Jurisdiction::UnitedKingdom,
    mandatory: true,
    related_standards: &["seveso-iii", "iec-61511"],
    relevant_clauses: &[
        RegulatoryClause {
            id: "uk-comah-reg-5",
            reference: "Regulation 5",
            title: "General duty",
            description: "Take all measures necessary to prevent major accidents and to limit \
their consequences, reducing risk as low as reasonably practicable.",
            keywords: &["all measures necessary", "alarp", "prevent", "limit consequences"],
            mandatory: true,
            hazops_relevance: &[RiskAssessment, Safeguards],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "uk-comah-reg-8",
            reference: "Regulation 8",
            title: "Safety report",
            description: "Upper-tier operators prepare a safety report demonstrating that major \
accident hazards and risks have been identified and evaluated.",
            keywords: &["safety report", "major accident", "hazard", "evaluation"],
            mandatory: true,
            hazops_relevance: &[HazardIdentification, RiskAssessment, Documentation],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "uk-comah-reg-8-sil",
            reference: "Regulation 8, Schedule 3",
            title: "Demonstration of instrumented protection integrity",
            description: "Where the demonstration relies on instrumented protection, the \
safety integrity of each function is justified against the risk reduction it provides.",
            keywords: &["sil", "integrity", "instrumented", "risk reduction", "lopa"],
            mandatory: true,
            hazops_relevance: &[SilDetermination, Lopa],
            parent_clause_id: Some("uk-comah-reg-8"),
        },
        RegulatoryClause {
            id: "uk-comah-sch-2-d",
            reference: "Schedule 2, para 4(d)",
            title: "Management of change",
            description: "Safety management system includes procedures for planning \
modifications to installations, processes and storage facilities.",
            keywords: &["management of change", "modification", "moc"],
            mandatory: true,
            hazops_relevance: &[ManagementOfChange],
            parent_clause_id: None,
        },
        RegulatoryClause {
            id: "uk-comah-sch-2-a",
            reference: "Schedule 2, para 4(a)",
            title: "Organisation and personnel",
            description: "Define roles, responsibilities and training of personnel involved in \
the management of major hazards.",
            keywords: &["personnel", "training", "competence", "team"],
            mandatory: false,
            hazops_relevance: &[TeamComposition],
            parent_clause_id: None,
        },
    ],
};
