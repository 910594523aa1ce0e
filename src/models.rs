//! Frontend Models
//!
//! Wire types for the state endpoints, plus the document structure rendered
//! by the components.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/state`: one checkbox toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRequest {
    pub md_id: String,
    pub check_id: String,
    pub state: bool,
}

/// Response of `GET /api/states?md_id=...`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatesResponse {
    /// Ids of the checked boxes in this group; absent means none saved yet
    #[serde(default)]
    pub checked: Vec<String>,
}

/// A checklist document: one page, one exported Markdown file
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistDocument {
    pub title: String,
    pub export_file_name: String,
    pub sections: Vec<Section>,
}

/// One `.section` container, one `##` block in the export
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Grouping key shared by every checkbox in this section
    pub md_id: String,
    pub title: String,
    pub blocks: Vec<Block>,
}

/// Content blocks inside a section, in render order
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// h3 subsection heading
    SubHeading(String),
    Paragraph(String),
    /// pre > code, kept verbatim
    Code(String),
    List(Vec<ListEntry>),
}

/// One list item; entries with a check_id render a checkbox + label
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub check_id: Option<String>,
    pub text: String,
}

impl ListEntry {
    pub fn task(check_id: &str, text: &str) -> Self {
        Self {
            check_id: Some(check_id.to_string()),
            text: text.to_string(),
        }
    }

    pub fn plain(text: &str) -> Self {
        Self {
            check_id: None,
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_request_wire_shape() {
        let req = StateRequest {
            md_id: "api-auth".to_string(),
            check_id: "auth-token-ttl".to_string(),
            state: true,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"md_id":"api-auth","check_id":"auth-token-ttl","state":true}"#
        );
    }

    #[test]
    fn test_states_response_missing_checked_defaults_empty() {
        let resp: StatesResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.checked.is_empty());
    }

    #[test]
    fn test_states_response_with_ids() {
        let resp: StatesResponse = serde_json::from_str(r#"{"checked":["a","b"]}"#).unwrap();
        assert_eq!(resp.checked, vec!["a".to_string(), "b".to_string()]);
    }
}
