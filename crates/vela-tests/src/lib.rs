//! Test workspace for end-to-end expansion tests.
//!
//! Holds the edited buffer plus companion project files, runs the
//! code-action pipeline, and applies the returned LSP edits the way a
//! client would: in list order, last edit first.

use vela_index::{ModuleIndex, SourceUnit};
use vela_ls::TextEdit;
use vela_source::{FileId, LineCol, LineIndex};

/// URI used for the edited buffer in code-action tests.
pub const TEST_URI: &str = "file:///vela/<tested-file>";

pub struct TestWorkspace {
    units: Vec<SourceUnit>,
}

impl TestWorkspace {
    /// A workspace with only the edited buffer.
    pub fn new(buffer: &str) -> Self {
        Self::with_project(buffer, &[])
    }

    /// A workspace with the edited buffer plus project files. The buffer is
    /// always file 0; project files follow in the given order.
    pub fn with_project(buffer: &str, project_files: &[&str]) -> Self {
        let mut units = vec![SourceUnit::parse(FileId(0), buffer)];
        for (i, text) in project_files.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let file = FileId(i as u32 + 1);
            units.push(SourceUnit::parse(file, *text));
        }
        Self { units }
    }

    pub fn buffer(&self) -> &SourceUnit {
        &self.units[0]
    }

    pub fn index(&self) -> ModuleIndex {
        ModuleIndex::build(&self.units)
    }

    /// Expansion edits for the buffer, in application order.
    pub fn expand_edits(&self) -> Vec<TextEdit> {
        vela_ls::generate_expand_edits(&self.index(), self.buffer())
    }

    /// The buffer with every AUTO directive expanded.
    pub fn expand(&self) -> String {
        apply_text_edits(&self.buffer().text, &self.expand_edits())
    }
}

/// Apply LSP text edits in list order.
///
/// The pipeline returns edits sorted from the last buffer position to the
/// first, so each application leaves the remaining coordinates valid.
pub fn apply_text_edits(text: &str, edits: &[TextEdit]) -> String {
    let mut out = text.to_string();
    for edit in edits {
        let index = LineIndex::new(&out);
        let start = index
            .offset(LineCol {
                line: edit.range.start.line,
                col: edit.range.start.character,
            })
            .expect("edit start must be inside the buffer");
        let end = index
            .offset(LineCol {
                line: edit.range.end.line,
                col: edit.range.end.character,
            })
            .expect("edit end must be inside the buffer");
        out.replace_range(u32::from(start) as usize..u32::from(end) as usize, &edit.new_text);
    }
    out
}

/// Expand `before` against `project_files`, compare with `golden`, then
/// re-run on the golden text to check the second pass is a no-op.
pub fn assert_expands_with_project(project_files: &[&str], before: &str, golden: &str) {
    let ws = TestWorkspace::with_project(before, project_files);
    let after = ws.expand();
    assert_eq!(after, golden, "first expansion must match the golden text");

    let ws = TestWorkspace::with_project(golden, project_files);
    assert_eq!(
        ws.expand(),
        golden,
        "expansion must be idempotent on already expanded text"
    );
}

/// Single-file variant of [`assert_expands_with_project`].
pub fn assert_expands(before: &str, golden: &str) {
    assert_expands_with_project(&[], before, golden);
}
