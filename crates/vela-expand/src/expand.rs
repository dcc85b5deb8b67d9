use vela_ast::PortDirection;
use vela_index::ModuleIndex;
use vela_source::{LineEnding, LineIndex, TextSize};

use crate::edit::SpanEdit;
use crate::locate::{AutoArg, AutoInst, Scope};
use crate::module_view;
use crate::template::TemplateRecord;

/// Per-request rendering context: buffer text, its line index, and the
/// line-ending convention to emit.
pub(crate) struct Renderer<'a> {
    text: &'a str,
    line_index: LineIndex,
    eol: &'static str,
}

impl<'a> Renderer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            line_index: LineIndex::new(text),
            eol: LineEnding::dominant(text).as_str(),
        }
    }

    pub fn line_of(&self, offset: TextSize) -> u32 {
        self.line_index.line_col(offset).line
    }

    // Leading whitespace of the line containing `offset`, plus one level of
    // content indentation.
    fn content_indent(&self, offset: TextSize) -> String {
        let range = self.line_index.line_range(offset);
        let line = &self.text[std::ops::Range::<usize>::from(range)];
        let mut indent: String = line
            .chars()
            .take_while(|&c| c == ' ' || c == '\t')
            .collect();
        indent.push_str("  ");
        indent
    }
}

fn bucket_comment(direction: PortDirection) -> &'static str {
    match direction {
        PortDirection::Input => "// Inputs",
        PortDirection::Inout => "// Inouts",
        PortDirection::Output => "// Outputs",
    }
}

/// Render the AUTOARG fill for a bound directive.
///
/// The fragment replaces everything between the marker and the closing `)`
/// and ends with a newline plus indentation, which leaves the `)` alone on
/// its own indented line. With nothing left to emit there is no edit.
pub(crate) fn render_autoarg(renderer: &Renderer<'_>, directive: &AutoArg) -> Option<SpanEdit> {
    let mut ports = module_view::body_ports(&directive.module);
    let predeclared =
        module_view::header_names_before(&directive.module, directive.marker.start());
    ports.retain(|p| !predeclared.iter().any(|name| *name == p.name));
    if ports.is_empty() {
        return None;
    }

    let indent = renderer.content_indent(directive.anchor);
    let eol = renderer.eol;
    let buckets = ports.buckets();
    let mut out = String::new();
    for (i, (direction, bucket)) in buckets.iter().enumerate() {
        out.push_str(eol);
        out.push_str(&indent);
        out.push_str(bucket_comment(*direction));
        out.push_str(eol);
        out.push_str(&indent);
        let mut first = true;
        for port in bucket {
            if !first {
                out.push_str(", ");
            }
            first = false;
            out.push_str(&port.name);
        }
        if i + 1 < buckets.len() {
            out.push(',');
        }
    }
    out.push_str(eol);
    out.push_str(&indent);

    Some(SpanEdit {
        range: directive.span,
        new_text: out,
    })
}

/// Render the AUTOINST fill for a bound directive.
///
/// Unresolved modules produce no edit; ambiguous names use the first
/// declaration the index encountered. Pre-connected ports are dropped and
/// the effective template override (lexically latest matching record in the
/// enclosing module) supplies connection expressions.
pub(crate) fn render_autoinst(
    renderer: &Renderer<'_>,
    index: &ModuleIndex,
    scopes: &[Scope],
    directive: &AutoInst,
) -> Option<SpanEdit> {
    let Some(entry) = index.lookup_module(&directive.module_name) else {
        log::debug!(
            "AUTOINST target `{}` is not declared in the project; skipping",
            directive.module_name
        );
        return None;
    };

    let mut ports = module_view::module_ports(&entry.decl);
    ports.retain(|p| !directive.connected.iter().any(|name| *name == p.name));
    if ports.is_empty() {
        return None;
    }

    let template = effective_template(scopes, directive);
    let indent = renderer.content_indent(directive.anchor);
    let eol = renderer.eol;
    let buckets = ports.buckets();
    let total: usize = buckets.iter().map(|(_, b)| b.len()).sum();
    let mut emitted = 0usize;
    let mut out = String::new();
    for (direction, bucket) in &buckets {
        out.push_str(eol);
        out.push_str(&indent);
        out.push_str(bucket_comment(*direction));
        for port in bucket {
            let expr = template
                .and_then(|t| t.override_for(&port.name))
                .unwrap_or(port.name.as_str());
            out.push_str(eol);
            out.push_str(&indent);
            out.push('.');
            out.push_str(&port.name);
            out.push('(');
            out.push_str(expr);
            out.push(')');
            emitted += 1;
            if emitted < total {
                out.push(',');
            }
        }
    }

    Some(SpanEdit {
        range: directive.span,
        new_text: out,
    })
}

// The lexically latest record in the enclosing scope whose pattern names
// the instantiated module. No merging across records.
fn effective_template<'s>(
    scopes: &'s [Scope],
    directive: &AutoInst,
) -> Option<&'s TemplateRecord> {
    let scope = &scopes[directive.scope?.0 as usize];
    scope
        .templates
        .iter()
        .rev()
        .find(|t| t.pattern == directive.module_name)
}
