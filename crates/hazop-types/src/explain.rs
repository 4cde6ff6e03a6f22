//! Explain registry for relevance areas and finding codes.
//!
//! Maps relevance-area tags and IPL finding codes to human-readable explanations with
//! remediation guidance. Compliance gaps pull their remediation text from here.

use crate::RelevanceArea;
use crate::ids;

/// Explanation entry for a relevance area or finding code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    /// Short description of the area/code.
    pub title: &'static str,
    /// What is assessed and why it matters.
    pub description: &'static str,
    /// How to close the gap.
    pub remediation: &'static str,
}

/// Look up an explanation by relevance-area tag or finding code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    if let Ok(area) = identifier.parse::<RelevanceArea>() {
        return Some(explain_area(area));
    }

    match identifier {
        ids::CODE_MISSING_ID
        | ids::CODE_MISSING_NAME
        | ids::CODE_PFD_NOT_FINITE
        | ids::CODE_RESPONSE_TIME_NOT_FINITE => Some(explain_structure()),
        ids::CODE_PFD_OUT_OF_RANGE => Some(explain_pfd_out_of_range()),
        ids::CODE_PFD_OUTSIDE_TYPICAL_BAND | ids::CODE_PFD_FAR_FROM_TYPICAL => {
            Some(explain_pfd_typical())
        }
        ids::CODE_NOT_INDEPENDENT_OF_INITIATOR => Some(explain_initiator_independence()),
        ids::CODE_NOT_INDEPENDENT_OF_OTHER_IPLS | ids::CODE_SHARED_DEPENDENCY => {
            Some(explain_ipl_independence())
        }
        ids::CODE_SIF_MISSING_SIL
        | ids::CODE_SIF_INVALID_SIL
        | ids::CODE_SIF_PFD_BELOW_SIL_BAND
        | ids::CODE_SIF_PFD_ABOVE_SIL_BAND => Some(explain_sif_sil()),
        ids::CODE_SIF_SIL4_CLAIMED => Some(explain_sil4()),
        ids::CODE_HUMAN_PFD_TOO_LOW
        | ids::CODE_HUMAN_RESPONSE_TIME_TOO_SHORT
        | ids::CODE_HUMAN_MISSING_INDEPENDENT_ALARM
        | ids::CODE_HUMAN_MISSING_PROCEDURE
        | ids::CODE_HUMAN_MISSING_TRAINING
        | ids::CODE_MULTIPLE_HUMAN_INTERVENTION => Some(explain_human_intervention()),
        ids::CODE_BPCS_PFD_TOO_LOW
        | ids::CODE_BPCS_INDEPENDENCE_REMINDER
        | ids::CODE_BPCS_WITH_SIF => Some(explain_bpcs()),
        ids::CODE_DUPLICATE_IPL_TYPE => Some(explain_duplicate_type()),
        _ => None,
    }
}

/// Remediation text for a compliance gap in the given relevance area.
pub fn remediation_for(area: RelevanceArea) -> &'static str {
    explain_area(area).remediation
}

/// List all relevance-area tags.
pub fn all_relevance_areas() -> Vec<&'static str> {
    RelevanceArea::ALL.iter().map(|a| a.as_str()).collect()
}

/// List all finding codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MISSING_ID,
        ids::CODE_MISSING_NAME,
        ids::CODE_PFD_NOT_FINITE,
        ids::CODE_RESPONSE_TIME_NOT_FINITE,
        ids::CODE_PFD_OUT_OF_RANGE,
        ids::CODE_PFD_OUTSIDE_TYPICAL_BAND,
        ids::CODE_PFD_FAR_FROM_TYPICAL,
        ids::CODE_NOT_INDEPENDENT_OF_INITIATOR,
        ids::CODE_NOT_INDEPENDENT_OF_OTHER_IPLS,
        ids::CODE_SIF_MISSING_SIL,
        ids::CODE_SIF_INVALID_SIL,
        ids::CODE_SIF_PFD_BELOW_SIL_BAND,
        ids::CODE_SIF_PFD_ABOVE_SIL_BAND,
        ids::CODE_SIF_SIL4_CLAIMED,
        ids::CODE_HUMAN_PFD_TOO_LOW,
        ids::CODE_HUMAN_RESPONSE_TIME_TOO_SHORT,
        ids::CODE_HUMAN_MISSING_INDEPENDENT_ALARM,
        ids::CODE_HUMAN_MISSING_PROCEDURE,
        ids::CODE_HUMAN_MISSING_TRAINING,
        ids::CODE_BPCS_PFD_TOO_LOW,
        ids::CODE_BPCS_INDEPENDENCE_REMINDER,
        ids::CODE_DUPLICATE_IPL_TYPE,
        ids::CODE_MULTIPLE_HUMAN_INTERVENTION,
        ids::CODE_BPCS_WITH_SIF,
        ids::CODE_SHARED_DEPENDENCY,
    ]
}

// --- Relevance-area explanations ---

fn explain_area(area: RelevanceArea) -> Explanation {
    match area {
        RelevanceArea::HazardIdentification => Explanation {
            title: "Hazard Identification",
            description: "\
Every deviation recorded in the study should identify at least one cause and one consequence.
Entries without both describe a deviation that has not actually been analysed.",
            remediation: "\
Revisit deviations that lack causes or consequences. Record every credible initiating cause and
the worst credible consequence assuming all safeguards fail.",
        },
        RelevanceArea::RiskAssessment => Explanation {
            title: "Risk Assessment",
            description: "\
Scenarios need a recorded severity, likelihood and detectability ranking so that risk can be
compared against tolerability criteria.",
            remediation: "\
Rank every scenario with severity, likelihood and detectability. Use the project risk matrix
consistently and record the resulting risk level.",
        },
        RelevanceArea::RiskRanking => Explanation {
            title: "Risk Ranking",
            description: "\
Risk ranking must be applied consistently across all analysed deviations using the agreed
scoring scale and thresholds.",
            remediation: "\
Apply the agreed risk ranking scale to every scenario and document the thresholds used to
separate low, medium and high risk.",
        },
        RelevanceArea::SilDetermination => Explanation {
            title: "SIL Determination",
            description: "\
High-risk scenarios that rely on instrumented protection need a documented safety integrity
level target derived from a recognised method.",
            remediation: "\
Perform SIL determination (for example with LOPA) for every high-risk scenario and record the
required SIL for each safety instrumented function.",
        },
        RelevanceArea::Lopa => Explanation {
            title: "Layers of Protection Analysis",
            description: "\
High-risk scenarios should be quantified with LOPA to show that credited independent
protection layers reduce the event frequency to the tolerable target.",
            remediation: "\
Carry out LOPA for every high-risk scenario. Credit only independent protection layers and
close any gap between actual and required risk reduction.",
        },
        RelevanceArea::Safeguards => Explanation {
            title: "Safeguards",
            description: "\
Existing safeguards must be recorded for analysed scenarios so that their adequacy can be
judged against the consequence.",
            remediation: "\
Record existing engineering and administrative safeguards for each scenario, noting which are
independent of the initiating cause.",
        },
        RelevanceArea::Documentation => Explanation {
            title: "Documentation",
            description: "\
Study records should capture causes, consequences, safeguards and recommendations so the
analysis can be audited and revalidated.",
            remediation: "\
Complete the narrative fields of each worksheet row. Blank fields should be replaced with an
explicit statement such as \"none identified\".",
        },
        RelevanceArea::Methodology => Explanation {
            title: "Methodology",
            description: "\
A structured HazOps study applies several guide words across more than one node of the
process.",
            remediation: "\
Divide the process into nodes and apply the full guide word set (for example NO, MORE, LESS,
REVERSE, OTHER THAN) to each relevant parameter.",
        },
        RelevanceArea::ManagementOfChange => Explanation {
            title: "Management of Change",
            description: "\
Recommendations that modify the process, equipment or procedures should be routed through the
site management of change procedure.",
            remediation: "\
Reference the management of change (MOC) procedure in recommendations that alter the process
and track each change request to closure.",
        },
        RelevanceArea::FollowUp => Explanation {
            title: "Follow-up",
            description: "\
Recommendations need an owner, a due date and a documented resolution.",
            remediation: "\
Assign each recommendation to an owner with a target date and record how and when it was
resolved.",
        },
        RelevanceArea::TeamComposition => Explanation {
            title: "Team Composition",
            description: "\
The study team must include engineering, operations and process-specific expertise, with a
facilitator experienced in the methodology.",
            remediation: "\
Record team members and their disciplines. Include at least one member with experience of the
specific process and one knowledgeable in the methodology.",
        },
        RelevanceArea::Recommendations => Explanation {
            title: "Recommendations",
            description: "\
Every high-risk scenario should produce at least one recommendation to reduce risk or confirm
the adequacy of existing protection.",
            remediation: "\
Add recommendations for each high-risk scenario describing the additional safeguard, study or
verification required.",
        },
    }
}

// --- Code-level explanations ---

fn explain_structure() -> Explanation {
    Explanation {
        title: "Malformed Protection Layer",
        description: "\
The protection layer record is missing an identifier or name, or carries a PFD or operator
response time that is not a finite number. No further checks run until the record is well formed.",
        remediation: "Supply a non-blank id and name, a numeric PFD between 1e-5 and 1, and a numeric \
response time for operator responses.",
    }
}

fn explain_pfd_out_of_range() -> Explanation {
    Explanation {
        title: "PFD Out of Range",
        description: "\
A probability of failure on demand must lie between 1e-5 and 1. Values outside this range
cannot be credited.",
        remediation: "Correct the PFD. Claims below 1e-5 require exceptional justification.",
    }
}

fn explain_pfd_typical() -> Explanation {
    Explanation {
        title: "PFD Outside Typical Values",
        description: "\
The claimed PFD differs from typical industry values for this type of protection layer.",
        remediation: "\
Document the basis for the claimed PFD, such as site failure data or a reliability study.",
    }
}

fn explain_initiator_independence() -> Explanation {
    Explanation {
        title: "Not Independent of Initiator",
        description: "\
A layer that shares components with the initiating event fails together with it and provides
no risk reduction.",
        remediation: "\
Remove the credit or re-engineer the layer so it shares no sensors, logic or final elements
with the initiating cause.",
    }
}

fn explain_ipl_independence() -> Explanation {
    Explanation {
        title: "Shared Dependency Between Layers",
        description: "\
Layers that depend on each other are subject to common-cause failure, which erodes the
combined risk reduction.",
        remediation: "\
Verify that the layers do not share sensors, power, utilities or personnel, or credit only one.",
    }
}

fn explain_sif_sil() -> Explanation {
    Explanation {
        title: "SIF Integrity Level",
        description: "\
A safety instrumented function must declare a SIL between 1 and 4, and its PFD must fall within
the band of that SIL.",
        remediation: "\
Declare the SIL and confirm the PFD with a SIL verification calculation.",
    }
}

fn explain_sil4() -> Explanation {
    Explanation {
        title: "SIL 4 Claimed",
        description: "\
SIL 4 functions are rare in the process industry and difficult to achieve and sustain.",
        remediation: "\
Consider inherently safer design or additional non-instrumented layers before relying on SIL 4.",
    }
}

fn explain_human_intervention() -> Explanation {
    Explanation {
        title: "Human Intervention",
        description: "\
Operator response can be credited only with an independent alarm, sufficient time to respond, a
written procedure and trained operators. PFD below 0.1 is rarely justified.",
        remediation: "\
Provide an independent alarm, ensure at least 10 minutes response time, and document the
procedure and training.",
    }
}

fn explain_bpcs() -> Explanation {
    Explanation {
        title: "Basic Process Control System",
        description: "\
A BPCS loop can be credited at most once and only when it is independent of the initiating
event. A PFD below 0.1 cannot be claimed for a BPCS function.",
        remediation: "\
Confirm the BPCS function does not share sensors or logic with the initiating loop or with any
SIF credited in the same scenario.",
    }
}

fn explain_duplicate_type() -> Explanation {
    Explanation {
        title: "Duplicate Layer Type",
        description: "\
Several layers of the same type are often exposed to the same failure mechanisms.",
        remediation: "Demonstrate diversity between same-type layers or credit only one of them.",
    }
}
