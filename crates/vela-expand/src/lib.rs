//! AUTO directive expansion for Verilog buffers.
//!
//! Finds `/*AUTOARG*/` and `/*AUTOINST*/` markers in a parsed source unit
//! and computes the text edits that materialize them, honoring
//! `AUTO_TEMPLATE` overrides from the enclosing module. Edits are
//! non-overlapping and idempotent: re-running expansion over an already
//! expanded buffer regenerates byte-identical fill-ins.

mod edit;
mod expand;
mod locate;
mod module_view;
mod port;
mod template;

pub use edit::{SpanEdit, apply_edits};
pub use port::{BUCKET_ORDER, DeclStyle, Port, PortList};

use vela_index::{ModuleIndex, SourceUnit};

use edit::EditPlan;
use locate::Directive;

/// Compute expansion edits for every AUTO directive in `unit`.
///
/// `index` resolves AUTOINST targets across the whole project; `unit` is
/// the buffer being edited. The returned edits are disjoint and ordered by
/// buffer position. Failures (unresolved modules, malformed templates,
/// markers outside a valid context) skip the directive, never the request.
pub fn expand_unit(index: &ModuleIndex, unit: &SourceUnit) -> Vec<SpanEdit> {
    expand_filtered(index, unit, None)
}

/// Like [`expand_unit`], restricted to directives whose marker starts on a
/// line in `start_line..=end_line` (0-based, inclusive).
pub fn expand_unit_in_lines(
    index: &ModuleIndex,
    unit: &SourceUnit,
    start_line: u32,
    end_line: u32,
) -> Vec<SpanEdit> {
    expand_filtered(index, unit, Some((start_line, end_line)))
}

fn expand_filtered(
    index: &ModuleIndex,
    unit: &SourceUnit,
    lines: Option<(u32, u32)>,
) -> Vec<SpanEdit> {
    let located = locate::locate(unit);
    let renderer = expand::Renderer::new(&unit.text);
    let mut plan = EditPlan::default();

    for directive in &located.directives {
        if let Some((start_line, end_line)) = lines {
            let line = renderer.line_of(directive.marker().start());
            if line < start_line || line > end_line {
                continue;
            }
        }
        let edit = match directive {
            Directive::Arg(d) => expand::render_autoarg(&renderer, d),
            Directive::Inst(d) => {
                expand::render_autoinst(&renderer, index, &located.scopes, d)
            }
        };
        if let Some(edit) = edit {
            plan.push(edit);
        }
    }

    plan.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_source::FileId;

    fn expand_text(src: &str) -> String {
        let unit = SourceUnit::parse(FileId(0), src);
        let index = ModuleIndex::build(std::slice::from_ref(&unit));
        let edits = expand_unit(&index, &unit);
        apply_edits(src, &edits)
    }

    #[test]
    fn autoarg_groups_by_direction() {
        let out = expand_text(
            "module t1(/*AUTOARG*/);\n  input logic clk;\n  input logic rst;\n  output logic o;\nendmodule\n",
        );
        assert_eq!(
            out,
            "module t1(/*AUTOARG*/\n  // Inputs\n  clk, rst,\n  // Outputs\n  o\n  );\n  input logic clk;\n  input logic rst;\n  output logic o;\nendmodule\n",
        );
    }

    #[test]
    fn autoinst_connects_by_name() {
        let out = expand_text(
            "module bar(input i1, output o1);\n  input i2;\nendmodule\n\nmodule foo;\n  bar b(/*AUTOINST*/);\nendmodule\n",
        );
        assert_eq!(
            out,
            "module bar(input i1, output o1);\n  input i2;\nendmodule\n\nmodule foo;\n  bar b(/*AUTOINST*/\n    // Inputs\n    .i1(i1),\n    .i2(i2),\n    // Outputs\n    .o1(o1));\nendmodule\n",
        );
    }

    #[test]
    fn expansion_is_idempotent() {
        let src = "module t(/*AUTOARG*/);\n  input clk;\n  output o;\nendmodule\n";
        let once = expand_text(src);
        let twice = expand_text(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn autoinst_inside_generate_region_expands() {
        let out = expand_text(
            "module leaf(input a, output b);\nendmodule\nmodule top;\n  generate\n    leaf u0(/*AUTOINST*/);\n  endgenerate\nendmodule\n",
        );
        assert_eq!(
            out,
            "module leaf(input a, output b);\nendmodule\nmodule top;\n  generate\n    leaf u0(/*AUTOINST*/\n      // Inputs\n      .a(a),\n      // Outputs\n      .b(b));\n  endgenerate\nendmodule\n",
        );
    }

    #[test]
    fn marker_outside_context_is_ignored() {
        let src = "module t();\n  /*AUTOARG*/\n  input clk;\nendmodule\n";
        assert_eq!(expand_text(src), src);
    }

    #[test]
    fn line_filter_limits_directives() {
        let src = "module a(/*AUTOARG*/);\n  input x;\nendmodule\nmodule b(/*AUTOARG*/);\n  input y;\nendmodule\n";
        let unit = SourceUnit::parse(FileId(0), src);
        let index = ModuleIndex::build(std::slice::from_ref(&unit));
        let edits = expand_unit_in_lines(&index, &unit, 0, 2);
        assert_eq!(edits.len(), 1);
        let out = apply_edits(src, &edits);
        assert!(out.contains("module a(/*AUTOARG*/\n  // Inputs\n  x\n  );"));
        assert!(out.contains("module b(/*AUTOARG*/);"));
    }

    #[test]
    fn crlf_buffers_emit_crlf() {
        let src = "module t(/*AUTOARG*/);\r\n  input clk;\r\n  output o;\r\nendmodule\r\n";
        let out = expand_text(src);
        assert_eq!(
            out,
            "module t(/*AUTOARG*/\r\n  // Inputs\r\n  clk,\r\n  // Outputs\r\n  o\r\n  );\r\n  input clk;\r\n  output o;\r\nendmodule\r\n",
        );
    }
}
