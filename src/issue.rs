use std::sync::LazyLock;

use regex::Regex;

/// Tracker issue ids look like `PROJECT-123`: letters, a hyphen, digits.
static ISSUE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z]+-\d+").expect("issue id pattern is valid"));

/// Find the first issue id embedded in a pull-request title.
///
/// Matching is case-insensitive but the match is returned verbatim, in the
/// case the title used. A title without an id is a normal outcome, not an
/// error.
pub fn extract_issue_id(title: &str) -> Option<&str> {
    ISSUE_ID_PATTERN.find(title.trim()).map(|m| m.as_str())
}

/// Browse link for an issue on the tracker.
pub fn issue_link(tracker_url: &str, issue_id: &str) -> String {
    format!("{tracker_url}/issue/{issue_id}")
}

/// Foreground/background pair for a workflow state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusColor {
    pub bg: String,
    pub fg: String,
}

/// One workflow-state snapshot for an issue, as the tracker reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueStatus {
    /// The state's value id on the tracker, if it reported one.
    pub id: Option<String>,
    /// Display text, e.g. "Open" or "Fixed".
    pub value: String,
    pub color: StatusColor,
}

impl IssueStatus {
    /// Sentinel used for titles whose issue is unknown or unresolved.
    pub fn unknown() -> Self {
        Self {
            id: None,
            value: "Unknown".to_string(),
            color: StatusColor {
                bg: "#444".to_string(),
                fg: "#FFF".to_string(),
            },
        }
    }
}
