//! Wire shapes of the YouTrack `/rest/issue` response and their projection
//! into domain types.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::issue::{IssueStatus, StatusColor};

#[derive(Debug, Deserialize)]
pub struct IssueList {
    #[serde(default)]
    pub issue: Vec<Issue>,
}

#[derive(Debug, Deserialize)]
pub struct Issue {
    pub id: String,
    #[serde(default)]
    pub field: Vec<Field>,
}

#[derive(Debug, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default, rename = "valueId")]
    pub value_id: Vec<String>,
    #[serde(default)]
    pub value: Vec<String>,
    pub color: Option<Color>,
}

#[derive(Debug, Deserialize)]
pub struct Color {
    pub bg: String,
    pub fg: String,
}

/// Project one wire issue into its `State` status.
///
/// The tracker contract promises a `State` field when queried with
/// `with=State`; its absence is reported as a malformed response so the
/// caller can decide how loudly to fail. Missing value/color entries fall
/// back to the Unknown sentinel's fields rather than erroring.
pub fn map_status(issue: &Issue) -> Result<IssueStatus> {
    let state = issue
        .field
        .iter()
        .find(|field| field.name == "State")
        .ok_or_else(|| {
            Error::MalformedResponse(format!("issue {} has no State field", issue.id))
        })?;

    let fallback = IssueStatus::unknown();

    Ok(IssueStatus {
        id: state.value_id.first().cloned(),
        value: state.value.first().cloned().unwrap_or(fallback.value),
        color: state
            .color
            .as_ref()
            .map(|color| StatusColor {
                bg: color.bg.clone(),
                fg: color.fg.clone(),
            })
            .unwrap_or(fallback.color),
    })
}
