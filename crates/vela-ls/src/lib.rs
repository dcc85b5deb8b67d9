//! Language-server surface of AUTO expansion: converts the core's byte-range
//! edits into LSP text edits and packages them as code actions.

mod protocol;

pub use protocol::{CodeAction, Position, Range, TextEdit, WorkspaceEdit};

use vela_expand::SpanEdit;
use vela_index::{ModuleIndex, SourceUnit};
use vela_source::LineIndex;

/// Title of the whole-file action.
pub const EXPAND_ALL_TITLE: &str = "Expand all AUTOs in file";
/// Title of the range-scoped action.
pub const EXPAND_RANGE_TITLE: &str = "Expand all AUTOs in selected range";

/// Expansion edits for every AUTO directive in `unit`, ready to apply.
///
/// Edits are sorted by descending end position (line first, then column) so
/// applying them in list order keeps the remaining ranges valid. The list
/// is empty when there is nothing to expand; errors never surface here.
pub fn generate_expand_edits(index: &ModuleIndex, unit: &SourceUnit) -> Vec<TextEdit> {
    to_text_edits(unit, vela_expand::expand_unit(index, unit))
}

/// Code actions for `unit`: "expand all" plus, when the selection covers at
/// least one directive, "expand in selected range".
///
/// The range is interpreted by start line of each directive marker; its
/// coordinates refer to the pre-edit buffer, so the ranged action is a
/// one-shot (re-running it against the edited buffer needs a new request).
pub fn generate_code_actions(
    index: &ModuleIndex,
    unit: &SourceUnit,
    uri: &str,
    range: Range,
) -> Vec<CodeAction> {
    let all = generate_expand_edits(index, unit);
    if all.is_empty() {
        return Vec::new();
    }

    let mut actions = vec![CodeAction {
        title: EXPAND_ALL_TITLE.to_string(),
        edit: WorkspaceEdit::single_document(uri, all),
    }];

    let ranged = vela_expand::expand_unit_in_lines(index, unit, range.start.line, range.end.line);
    if !ranged.is_empty() {
        actions.push(CodeAction {
            title: EXPAND_RANGE_TITLE.to_string(),
            edit: WorkspaceEdit::single_document(uri, to_text_edits(unit, ranged)),
        });
    }

    actions
}

fn to_text_edits(unit: &SourceUnit, edits: Vec<SpanEdit>) -> Vec<TextEdit> {
    let line_index = LineIndex::new(&unit.text);
    let position = |offset| {
        let lc = line_index.line_col(offset);
        Position {
            line: lc.line,
            character: lc.col,
        }
    };
    let mut out: Vec<TextEdit> = edits
        .into_iter()
        .map(|edit| TextEdit {
            range: Range {
                start: position(edit.range.start()),
                end: position(edit.range.end()),
            },
            new_text: edit.new_text,
        })
        .collect();
    // Descending by end position so sequential application stays valid.
    out.sort_by(|a, b| b.range.end.cmp(&a.range.end));
    out
}
