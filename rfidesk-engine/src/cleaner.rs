use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());
static PAGE_MARKER_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\s*$").unwrap());
static CONFIDENTIAL_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mi)^.*confidential.*$").unwrap());
static PROPRIETARY_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mi)^.*proprietary.*$").unwrap());
static UNICODE_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\u{00A0}\u{2000}-\u{200B}\u{2028}-\u{2029}\u{202F}\u{205F}\u{3000}]").unwrap());
static LINE_BREAK_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\n\s*").unwrap());
static EXCESS_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalizes raw PDF text for matching. Whitespace runs collapse to single
/// spaces, standalone page markers and confidentiality boilerplate are
/// stripped, and exotic Unicode spaces become ordinary ones. Total over any
/// input and idempotent.
///
/// Lines containing "confidential" or "proprietary" are removed entirely,
/// not just the word.
pub fn clean_rfi_text(text: &str) -> String {
    let text = WHITESPACE_RUNS.replace_all(text, " ");
    let text = NEWLINE_RUNS.replace_all(&text, "\n");
    let text = text.trim();
    let text = PAGE_MARKER_LINES.replace_all(text, "");
    let text = CONFIDENTIAL_LINES.replace_all(&text, "");
    let text = PROPRIETARY_LINES.replace_all(&text, "");
    let text = text.replace('\u{000C}', "");
    let text = UNICODE_SPACES.replace_all(&text, " ");
    let text = LINE_BREAK_WHITESPACE.replace_all(&text, "\n");
    let text = EXCESS_BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(
            clean_rfi_text("outlet   heights\n\n  in \t conference rooms"),
            "outlet heights in conference rooms"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_rfi_text(""), "");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "Page 1\n\n12\n\nThe ductwork  conflicts\twith beam B-4.\u{00A0}See plan.",
            "  leading and trailing   ",
            "multi\n\n\n\nline\n\ninput",
            "",
        ];
        for sample in samples {
            let once = clean_rfi_text(sample);
            assert_eq!(clean_rfi_text(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn strips_confidentiality_boilerplate() {
        assert_eq!(clean_rfi_text("these figures are CONFIDENTIAL"), "");
        assert_eq!(clean_rfi_text("Proprietary and privileged"), "");
    }

    #[test]
    fn drops_standalone_page_markers() {
        assert_eq!(clean_rfi_text("42"), "");
        assert_eq!(clean_rfi_text("  7  "), "");
    }

    #[test]
    fn normalizes_unicode_spaces_and_form_feeds() {
        assert_eq!(clean_rfi_text("door\u{2003}hardware"), "door hardware");
        assert_eq!(clean_rfi_text("door\u{000C}hardware"), "door hardware");
        assert_eq!(clean_rfi_text("door\u{200B}hardware"), "door hardware");
    }
}
