use shared_types::{Analysis, Category, Urgency};

/// Synthesized analysis and response letter for an RFI with no catalog match.
pub struct GeneratedResponse {
    pub analysis: Analysis,
    pub response: String,
    pub document_references: Vec<String>,
}

const RESPONSE_STRATEGY: &str =
    "Provide direct answer with drawing references and coordination requirements";

/// Keyword-based response synthesis, used when the scenario catalog is
/// bypassed or produces no match.
///
/// Detection is ordered and the first branch wins: electrical topics, then
/// door hardware, then a generic acknowledgment. Every branch reports Medium
/// urgency and the same response strategy; only the category, letter and
/// references vary.
pub fn generate_demo_response(
    text: &str,
    trade: &str,
    project: &str,
    rfi_number: &str,
) -> GeneratedResponse {
    let lower_text = text.to_lowercase();
    let lower_trade = trade.to_lowercase();

    let category: Category;
    let response: String;
    let document_references: Vec<&str>;
    let mut affected_trades = vec![trade.to_string()];

    if lower_text.contains("outlet")
        || lower_text.contains("electrical")
        || lower_trade.contains("electrical")
    {
        category = Category::Clarification;
        response = format!(
            "\
RE: {rfi_number} - Electrical Outlet Heights

Thank you for your inquiry regarding electrical outlet mounting heights in the conference rooms.

Per architectural drawings A-201 and electrical specifications Section 26 05 19, standard electrical outlets in conference rooms shall be mounted at 18\" AFF (Above Finished Floor) unless otherwise noted.

For ADA compliance areas, outlets shall be mounted no lower than 15\" AFF and no higher than 48\" AFF as per Section 26 05 00.

Please coordinate with the architectural team for any special requirements in executive conference rooms, which may require outlets at table height (30\" AFF).

Please proceed with installation per these specifications. If you encounter any conflicts with furniture plans, please submit a follow-up RFI with specific room numbers.

Best regards,
Project Management Team"
        );
        document_references = vec![
            "A-201 - Floor Plans",
            "Section 26 05 19 - Electrical Outlets",
            "Section 26 05 00 - ADA Compliance",
        ];
    } else if lower_text.contains("door") || lower_text.contains("hardware") {
        category = Category::Conflict;
        response = format!(
            "\
RE: {rfi_number} - Door Hardware Specification Conflict

Thank you for bringing this specification conflict to our attention.

After reviewing both the architectural drawings (A-301) and the security specifications (Section 08 71 00), please implement the following:

RESOLUTION: Install keypad locks as specified in Section 08 71 00 - Security Requirements. The lever handles shown on architectural drawings are superseded by security requirements for this project.

AFFECTED LOCATIONS: All main entry doors and security zones as identified in the security plan (S-001).

COORDINATION REQUIRED: Please coordinate with the security contractor (Johnson Controls) for programming requirements and master key schedules.

The architectural drawings will be updated in the next revision to reflect these security requirements.

Please proceed with keypad lock installation per security specifications.

Best regards,
Project Management Team"
        );
        document_references = vec![
            "A-301 - Door Schedules",
            "Section 08 71 00 - Security Requirements",
            "S-001 - Security Plan",
        ];
        affected_trades.push("Security".to_string());
        affected_trades.push("Architectural".to_string());
    } else {
        category = Category::Clarification;
        let category_label = category.to_string().to_lowercase();
        response = format!(
            "\
RE: {rfi_number} - Project Clarification Request

Thank you for your RFI submission regarding the {project} project.

We have reviewed your inquiry and are coordinating with the design team to provide a comprehensive response. Based on the information provided, this appears to be a {category_label} that affects the {trade} trade.

We will provide detailed specifications and clarifications within 48 hours of this response. Please continue with other work that is not affected by this inquiry.

If this is time-sensitive for your schedule, please contact the project manager directly at the number provided in your contract documents.

Best regards,
Project Management Team"
        );
        document_references = vec!["Project Specifications", "Contract Documents"];
    }

    GeneratedResponse {
        analysis: Analysis {
            category,
            urgency: Urgency::Medium,
            affected_trades,
            response_strategy: RESPONSE_STRATEGY.to_string(),
        },
        response,
        document_references: document_references
            .into_iter()
            .map(|r| r.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electrical_text_yields_clarification_with_drawing_references() {
        let generated = generate_demo_response(
            "where are the electrical outlets mounted",
            "Electrical",
            "Harbor Tower",
            "RFI-200",
        );
        assert_eq!(generated.analysis.category, Category::Clarification);
        assert_eq!(generated.analysis.urgency, Urgency::Medium);
        assert_eq!(generated.document_references.len(), 3);
        assert!(generated.document_references[0].contains("A-201"));
        assert_eq!(generated.analysis.affected_trades, vec!["Electrical"]);
        assert!(generated.response.contains("RFI-200"));
    }

    #[test]
    fn electrical_trade_alone_triggers_the_electrical_branch() {
        let generated =
            generate_demo_response("no obvious topic", "Electrical", "Harbor Tower", "RFI-201");
        assert_eq!(generated.analysis.category, Category::Clarification);
        assert!(generated.response.contains("Electrical Outlet Heights"));
    }

    #[test]
    fn door_hardware_text_yields_conflict_with_security_trades() {
        let generated = generate_demo_response(
            "door hardware mismatch at the entries",
            "Carpentry",
            "Harbor Tower",
            "RFI-202",
        );
        assert_eq!(generated.analysis.category, Category::Conflict);
        assert!(generated
            .analysis
            .affected_trades
            .contains(&"Security".to_string()));
        assert!(generated
            .analysis
            .affected_trades
            .contains(&"Architectural".to_string()));
        assert_eq!(generated.document_references.len(), 3);
        assert!(generated.response.contains("RFI-202"));
    }

    #[test]
    fn anything_else_gets_the_generic_acknowledgment() {
        let generated = generate_demo_response(
            "crane access on the north side",
            "Sitework",
            "Harbor Tower",
            "RFI-203",
        );
        assert_eq!(generated.analysis.category, Category::Clarification);
        assert_eq!(
            generated.document_references,
            vec!["Project Specifications", "Contract Documents"]
        );
        assert_eq!(generated.analysis.affected_trades, vec!["Sitework"]);
        assert!(generated.response.contains("Harbor Tower"));
        assert!(generated.response.contains("RFI-203"));
        assert!(generated.response.contains("clarification"));
    }
}
