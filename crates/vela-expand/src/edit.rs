use vela_source::TextRange;

/// A replacement of a byte range of the request buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanEdit {
    pub range: TextRange,
    pub new_text: String,
}

/// Collects per-directive edits and enforces the planner invariants.
///
/// Directive spans are disjoint by construction (each lives inside its own
/// parenthesis group); an overlap means a locator bug. Debug builds assert,
/// release builds drop the whole batch so the host never applies a
/// conflicting edit list.
#[derive(Debug, Default)]
pub(crate) struct EditPlan {
    edits: Vec<SpanEdit>,
}

impl EditPlan {
    pub fn push(&mut self, edit: SpanEdit) {
        self.edits.push(edit);
    }

    /// Verify disjointness and return the edits in buffer order.
    pub fn finish(mut self) -> Vec<SpanEdit> {
        self.edits.sort_by_key(|e| e.range.start());
        let overlapping = self
            .edits
            .windows(2)
            .any(|pair| pair[0].range.end() > pair[1].range.start());
        if overlapping {
            debug_assert!(false, "expansion produced overlapping edits");
            log::warn!("expansion produced overlapping edits; dropping all");
            return Vec::new();
        }
        self.edits
    }
}

/// Apply edits to `text`.
///
/// Edits are applied back-to-front so byte offsets of the remaining edits
/// stay valid; this matches how the host applies the returned list.
pub fn apply_edits(text: &str, edits: &[SpanEdit]) -> String {
    let mut sorted: Vec<&SpanEdit> = edits.iter().collect();
    sorted.sort_by_key(|e| std::cmp::Reverse(e.range.start()));
    let mut out = text.to_string();
    for edit in sorted {
        out.replace_range(std::ops::Range::<usize>::from(edit.range), &edit.new_text);
    }
    out
}
