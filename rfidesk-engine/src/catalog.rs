use once_cell::sync::Lazy;
use shared_types::{Analysis, Category, ScenarioSummary, Urgency};

/// A canned RFI scenario with the keywords that select it and the
/// pre-authored response letter.
///
/// The response text always contains the literal `rfi_number` and
/// `project_name` the letter was authored with, so callers can substitute
/// their own values by substring replacement.
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub project_name: &'static str,
    pub rfi_number: &'static str,
    pub trade_name: &'static str,
    pub urgency: Urgency,
    pub keywords: &'static [&'static str],
    pub analysis: Analysis,
    pub response: &'static str,
    pub document_references: &'static [&'static str],
}

/// The full catalog in declaration order. Built once, never mutated.
pub fn scenarios() -> &'static [Scenario] {
    &CATALOG
}

/// Catalog projection served to the frontend dashboard.
pub fn scenario_summaries() -> Vec<ScenarioSummary> {
    scenarios()
        .iter()
        .map(|scenario| ScenarioSummary {
            id: scenario.id.to_string(),
            title: scenario.title.to_string(),
            description: scenario.description.to_string(),
            trade_name: scenario.trade_name.to_string(),
            urgency: scenario.urgency,
            keywords: scenario.keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
}

fn analysis(
    category: Category,
    urgency: Urgency,
    affected_trades: &[&str],
    response_strategy: &str,
) -> Analysis {
    Analysis {
        category,
        urgency,
        affected_trades: affected_trades.iter().map(|t| t.to_string()).collect(),
        response_strategy: response_strategy.to_string(),
    }
}

static CATALOG: Lazy<Vec<Scenario>> = Lazy::new(|| {
    vec![
        Scenario {
            id: "electrical-outlets",
            title: "Electrical Outlet Heights",
            description: "Clarification on outlet mounting heights in conference rooms",
            project_name: "Sunset Office Complex",
            rfi_number: "RFI-001",
            trade_name: "Electrical",
            urgency: Urgency::Medium,
            keywords: &["outlet", "electrical", "height", "conference", "room"],
            analysis: analysis(
                Category::Clarification,
                Urgency::Medium,
                &["Electrical", "Architectural"],
                "Provide direct answer with drawing references and ADA compliance requirements",
            ),
            response: "\
RE: RFI-001 - Electrical Outlet Heights

Thank you for your inquiry regarding electrical outlet mounting heights in the conference rooms.

Per architectural drawings A-201 and electrical specifications Section 26 05 19, standard electrical outlets in conference rooms shall be mounted at 18\" AFF (Above Finished Floor) unless otherwise noted.

For ADA compliance areas, outlets shall be mounted no lower than 15\" AFF and no higher than 48\" AFF as per Section 26 05 00.

Please coordinate with the architectural team for any special requirements in executive conference rooms, which may require outlets at table height (30\" AFF).

Please proceed with installation per these specifications. If you encounter any conflicts with furniture plans, please submit a follow-up RFI with specific room numbers.

Best regards,
Project Management Team",
            document_references: &[
                "A-201 - Floor Plans",
                "Section 26 05 19 - Electrical Outlets",
                "Section 26 05 00 - ADA Compliance",
            ],
        },
        Scenario {
            id: "door-hardware-conflict",
            title: "Door Hardware Specification Conflict",
            description: "Conflict between architectural drawings and security specifications",
            project_name: "Metro Hospital",
            rfi_number: "RFI-045",
            trade_name: "General Contractor",
            urgency: Urgency::High,
            keywords: &["door", "hardware", "conflict", "security", "keypad", "lever"],
            analysis: analysis(
                Category::Conflict,
                Urgency::High,
                &["Architectural", "Security", "Hardware"],
                "Resolve specification conflict with clear priority and coordination requirements",
            ),
            response: "\
RE: RFI-045 - Door Hardware Specification Conflict

Thank you for bringing this specification conflict to our attention.

After reviewing both the architectural drawings (A-301) and the security specifications (Section 08 71 00), please implement the following:

RESOLUTION: Install keypad locks as specified in Section 08 71 00 - Security Requirements. The lever handles shown on architectural drawings are superseded by security requirements for this project.

AFFECTED LOCATIONS: All main entry doors and security zones as identified in the security plan (S-001).

COORDINATION REQUIRED: Please coordinate with the security contractor (Johnson Controls) for programming requirements and master key schedules.

The architectural drawings will be updated in the next revision to reflect these security requirements.

Please proceed with keypad lock installation per security specifications.

Best regards,
Project Management Team",
            document_references: &[
                "A-301 - Door Schedules",
                "Section 08 71 00 - Security Requirements",
                "S-001 - Security Plan",
            ],
        },
        Scenario {
            id: "hvac-routing",
            title: "HVAC Ductwork Routing Conflict",
            description: "Ductwork conflicts with structural beam locations",
            project_name: "Downtown Retail Center",
            rfi_number: "RFI-023",
            trade_name: "HVAC",
            urgency: Urgency::Critical,
            keywords: &["hvac", "ductwork", "beam", "structural", "conflict", "routing"],
            analysis: analysis(
                Category::Conflict,
                Urgency::Critical,
                &["HVAC", "Structural", "Architectural"],
                "Coordinate immediate resolution meeting and provide alternative routing solution",
            ),
            response: "\
RE: RFI-023 - HVAC Ductwork Routing Conflict

Thank you for identifying this critical conflict between the HVAC ductwork and structural beam locations.

IMMEDIATE ACTION REQUIRED: Stop work in affected areas until resolution is complete.

COORDINATION MEETING: A coordination meeting is scheduled for tomorrow at 10:00 AM with:
- Structural Engineer (Smith & Associates)
- HVAC Designer (Climate Solutions)
- Project Manager
- General Contractor

ALTERNATIVE ROUTING: Preliminary review suggests routing ductwork through the corridor ceiling space with minor modifications to diffuser locations. This will be confirmed during coordination meeting.

AFFECTED AREAS: Level 2 retail spaces, Zones A-C as shown on HVAC plan H-201.

NEXT STEPS:
1. Attend coordination meeting
2. Review alternative routing solution
3. Await revised drawings within 48 hours
4. Resume work with approved modifications

Please contact me immediately if you have questions or if this delay affects critical path activities.

Best regards,
Project Management Team",
            document_references: &[
                "H-201 - HVAC Plans",
                "S-101 - Structural Plans",
                "Coordination Meeting Minutes",
            ],
        },
        Scenario {
            id: "concrete-mix-design",
            title: "Concrete Mix Design Specification",
            description: "Discrepancy between specifications and structural drawings",
            project_name: "University Science Building",
            rfi_number: "RFI-088",
            trade_name: "Concrete",
            urgency: Urgency::High,
            keywords: &["concrete", "mix", "design", "4000", "3500", "psi", "structural"],
            analysis: analysis(
                Category::Conflict,
                Urgency::High,
                &["Concrete", "Structural"],
                "Provide authoritative answer based on structural engineering requirements",
            ),
            response: "\
RE: RFI-088 - Concrete Mix Design Specification Discrepancy

Thank you for bringing this specification discrepancy to our attention.

RESOLUTION: Use 4000 PSI concrete mix as specified in Section 03 30 00 - Cast-in-Place Concrete.

ENGINEERING REVIEW: The structural engineer (Peterson Engineering) has confirmed that 4000 PSI is required for all structural elements per the structural calculations dated March 15, 2024.

CLARIFICATION: The 3500 PSI reference on drawing S-201 is an error from an early design revision. This will be corrected in the next drawing revision.

AFFECTED ELEMENTS: All foundations, columns, beams, and slabs as detailed in the structural drawings.

MIX DESIGN: Please submit your proposed 4000 PSI mix design to the structural engineer for approval before proceeding with any concrete placement.

DOCUMENTATION: Update your concrete placement records to reflect the correct 4000 PSI specification.

Please proceed with confidence using the 4000 PSI mix design. Contact the structural engineer directly at (555) 123-4567 for any technical questions.

Best regards,
Project Management Team",
            document_references: &[
                "Section 03 30 00 - Cast-in-Place Concrete",
                "S-201 - Structural Plans",
                "Structural Calculations 03/15/2024",
            ],
        },
        Scenario {
            id: "waterproofing-details",
            title: "Foundation Waterproofing Detail",
            description: "Unclear waterproofing detail at utility penetrations",
            project_name: "Riverside Apartments",
            rfi_number: "RFI-012",
            trade_name: "Waterproofing",
            urgency: Urgency::Medium,
            keywords: &["waterproof", "foundation", "utility", "penetration", "detail"],
            analysis: analysis(
                Category::MissingInfo,
                Urgency::Medium,
                &["Waterproofing", "Utilities", "Concrete"],
                "Reference detail drawings and provide step-by-step installation requirements",
            ),
            response: "\
RE: RFI-012 - Foundation Waterproofing Detail at Utility Penetrations

Thank you for your request for clarification on the foundation waterproofing detail at utility penetrations.

REFERENCE DETAIL: Use Detail 7/A-501 - Utility Penetration Waterproofing, which shows the complete assembly.

INSTALLATION SEQUENCE:
1. Install utility sleeves with waterstop collars before concrete placement
2. Apply primary waterproofing membrane around sleeve opening
3. Install mechanical seal with hydraulic cement
4. Apply secondary membrane layer overlapping primary by minimum 6\"
5. Install protective board over waterproofing system

MATERIALS:
- Waterstop: Greenstreak WS-240 or approved equal
- Hydraulic cement: Thoroseal or approved equal
- Membrane: Same as specified for main foundation waterproofing

TESTING: All penetration seals must be tested per Section 07 11 00 before backfilling.

COORDINATION: Schedule waterproofing inspection 24 hours before backfill operations begin.

Please reference the specifications in Section 07 11 00 for complete material and testing requirements. Contact the waterproofing consultant (AquaShield, Inc.) at (555) 987-6543 for any technical questions.

Best regards,
Project Management Team",
            document_references: &[
                "Detail 7/A-501 - Utility Penetrations",
                "Section 07 11 00 - Waterproofing",
                "AquaShield Technical Manual",
            ],
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_scenarios_in_declaration_order() {
        let all = scenarios();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id, "electrical-outlets");
        assert_eq!(all[4].id, "waterproofing-details");
    }

    #[test]
    fn every_response_contains_its_authored_rfi_number() {
        for scenario in scenarios() {
            assert!(
                scenario.response.contains(scenario.rfi_number),
                "scenario {} response is missing its RFI number",
                scenario.id
            );
        }
    }

    #[test]
    fn every_scenario_carries_three_document_references() {
        for scenario in scenarios() {
            assert_eq!(
                scenario.document_references.len(),
                3,
                "scenario {} should reference exactly three documents",
                scenario.id
            );
        }
    }

    #[test]
    fn summaries_mirror_the_catalog() {
        let summaries = scenario_summaries();
        assert_eq!(summaries.len(), scenarios().len());
        assert_eq!(summaries[0].id, "electrical-outlets");
        assert!(summaries[0].keywords.contains(&"outlet".to_string()));
    }
}
