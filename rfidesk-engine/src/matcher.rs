use crate::catalog::{scenarios, Scenario};

/// Trade name that marks a scenario as matching any trade. Scenarios carrying
/// it are only selectable through their keywords.
const GENERAL_CONTRACTOR: &str = "General Contractor";

/// Selects the catalog scenario that best matches the cleaned RFI text and
/// the submitting trade.
///
/// A scenario qualifies when any of its keywords occurs in the lower-cased
/// text, or when its trade name and the given trade contain each other (in
/// either direction) and it is not the "General Contractor" sentinel. The
/// first qualifying scenario in declaration order wins.
///
/// When nothing qualifies this falls back to the first catalog entry rather
/// than returning `None`, so with the current catalog the result is always
/// `Some`.
pub fn find_matching_scenario(text: &str, trade: &str) -> Option<&'static Scenario> {
    let lower_text = text.to_lowercase();
    let lower_trade = trade.to_lowercase();

    for scenario in scenarios() {
        let keyword_match = scenario
            .keywords
            .iter()
            .any(|keyword| lower_text.contains(&keyword.to_lowercase()));

        let scenario_trade = scenario.trade_name.to_lowercase();
        let trade_match = scenario_trade.contains(&lower_trade)
            || lower_trade.contains(&scenario_trade)
            || scenario.trade_name == GENERAL_CONTRACTOR;

        if keyword_match || (trade_match && scenario.trade_name != GENERAL_CONTRACTOR) {
            return Some(scenario);
        }
    }

    scenarios().first()
}
