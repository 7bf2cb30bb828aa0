//! Wire model for the Contents API.
//!
//! The server returns one JSON shape for both files and directories; the
//! `content` field is a string (or notebook object) for files and an array
//! of entries for directories. All shape juggling happens here so the rest
//! of the system works with `RemoteEntry` and `FileContent` only.

use serde::Deserialize;

/// One file or directory as listed by the Contents API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    pub name: String,
    pub path: String,
    pub is_directory: bool,
}

/// File content as returned by the server.
///
/// Plain files come back as a string; notebooks (and anything else the
/// server structures) come back as a JSON document. Resolved once at the
/// deserialization boundary so downstream code never inspects raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    Text(String),
    Structured(serde_json::Value),
}

impl FileContent {
    /// Classify a raw `content` value from the server.
    pub fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Self::Text(text),
            other => Self::Structured(other),
        }
    }

    /// Render as editable text: strings verbatim, structured documents
    /// pretty-printed with 2-space indentation.
    pub fn to_text(&self) -> serde_json::Result<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Structured(doc) => serde_json::to_string_pretty(doc),
        }
    }
}

/// Raw `GET api/contents/<path>` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct ContentsResponse {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
}

/// One element of a directory listing's `content` array.
#[derive(Debug, Deserialize)]
pub(crate) struct WireEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<WireEntry> for RemoteEntry {
    fn from(entry: WireEntry) -> Self {
        Self {
            is_directory: entry.kind == "directory",
            name: entry.name,
            path: entry.path,
        }
    }
}
