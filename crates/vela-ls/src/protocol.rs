use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// LSP wire records, limited to what code actions need. Coordinates are
// 0-based line/character pairs referring to the snapshot at request time.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: Range,
    #[serde(rename = "newText")]
    pub new_text: String,
}

/// `{ changes: { <document-uri>: [TextEdit, ...] } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceEdit {
    pub changes: BTreeMap<String, Vec<TextEdit>>,
}

impl WorkspaceEdit {
    pub fn single_document(uri: &str, edits: Vec<TextEdit>) -> Self {
        let mut changes = BTreeMap::new();
        changes.insert(uri.to_string(), edits);
        Self { changes }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAction {
    pub title: String,
    pub edit: WorkspaceEdit,
}
