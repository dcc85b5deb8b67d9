use smol_str::SmolStr;
use vela_ast::{AstNode, InstancePortList, ModuleDecl, ModuleInstantiation, PortList};
use vela_index::SourceUnit;
use vela_lexer::SyntaxKind;
use vela_parser::{SyntaxNode, SyntaxToken};
use vela_source::{TextRange, TextSize};

use crate::template::{self, TemplateRecord};

pub(crate) const AUTOARG_MARKER: &str = "/*AUTOARG*/";
pub(crate) const AUTOINST_MARKER: &str = "/*AUTOINST*/";
const TEMPLATE_MARKER: &str = "AUTO_TEMPLATE";

/// Index into [`DirectiveIndex::scopes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScopeId(pub u32);

/// A module body acting as the lexical scope for templates.
#[derive(Debug)]
pub(crate) struct Scope {
    pub decl: ModuleDecl,
    /// Templates in source order; the last matching one wins.
    pub templates: Vec<TemplateRecord>,
}

/// An `/*AUTOARG*/` bound to its module header.
#[derive(Debug)]
pub(crate) struct AutoArg {
    pub module: ModuleDecl,
    /// Range of the marker comment itself.
    pub marker: TextRange,
    /// Owned region: end of marker up to (excluding) the closing `)`.
    pub span: TextRange,
    /// Offset of the `module` keyword; its line sets the fill indentation.
    pub anchor: TextSize,
}

/// An `/*AUTOINST*/` bound to an instantiation's connection list.
#[derive(Debug)]
pub(crate) struct AutoInst {
    pub module_name: SmolStr,
    #[allow(dead_code)]
    pub instance_name: SmolStr,
    pub scope: Option<ScopeId>,
    /// Ports already connected by name before the marker.
    pub connected: Vec<SmolStr>,
    pub marker: TextRange,
    pub span: TextRange,
    pub anchor: TextSize,
}

#[derive(Debug)]
pub(crate) enum Directive {
    Arg(AutoArg),
    Inst(AutoInst),
}

impl Directive {
    pub fn marker(&self) -> TextRange {
        match self {
            Directive::Arg(d) => d.marker,
            Directive::Inst(d) => d.marker,
        }
    }
}

/// All directives of a source unit, in source order, plus the scope table
/// their templates live in.
#[derive(Debug, Default)]
pub(crate) struct DirectiveIndex {
    pub scopes: Vec<Scope>,
    pub directives: Vec<Directive>,
}

/// Walk the parse tree once, binding every AUTO comment to its syntactic
/// context. Markers outside a valid context are silently dropped.
pub(crate) fn locate(unit: &SourceUnit) -> DirectiveIndex {
    let mut index = DirectiveIndex::default();
    let root = unit.parse.syntax();

    for element in root.descendants_with_tokens() {
        let Some(token) = element.into_token() else {
            continue;
        };
        if token.kind() != SyntaxKind::BlockComment {
            continue;
        }
        let text = token.text();
        if text == AUTOARG_MARKER {
            bind_autoarg(&token, &mut index);
        } else if text == AUTOINST_MARKER {
            bind_autoinst(&token, &mut index);
        } else if text.contains(TEMPLATE_MARKER) {
            bind_template(&token, &mut index);
        }
    }

    index
}

fn bind_autoarg(token: &SyntaxToken, index: &mut DirectiveIndex) {
    let marker = token.text_range();
    let Some(list_node) = enclosing_list(token, SyntaxKind::PortList, marker.start()) else {
        return;
    };
    let Some(list) = PortList::cast(list_node.clone()) else {
        return;
    };
    let Some(module) = list_node.parent().and_then(ModuleDecl::cast) else {
        return;
    };
    let Some(closing) = list.closing_paren() else {
        return;
    };
    if closing.text_range().start() < marker.end() {
        return;
    }
    let Some(anchor) = keyword_offset(module.syntax(), SyntaxKind::ModuleKw) else {
        return;
    };
    index.directives.push(Directive::Arg(AutoArg {
        module,
        marker,
        span: TextRange::new(marker.end(), closing.text_range().start()),
        anchor,
    }));
}

fn bind_autoinst(token: &SyntaxToken, index: &mut DirectiveIndex) {
    let marker = token.text_range();
    let Some(list_node) = enclosing_list(token, SyntaxKind::InstancePortList, marker.start())
    else {
        return;
    };
    let Some(list) = InstancePortList::cast(list_node.clone()) else {
        return;
    };
    let Some(inst) = list_node
        .ancestors()
        .find_map(ModuleInstantiation::cast)
    else {
        return;
    };
    let Some(module_name) = inst.module_name() else {
        return;
    };
    let Some(closing) = list.closing_paren() else {
        return;
    };
    if closing.text_range().start() < marker.end() {
        return;
    }

    // Which of the statement's instances owns this connection list?
    let instance_name = inst
        .instances()
        .find(|(_, pl)| {
            pl.as_ref()
                .is_some_and(|pl| pl.syntax() == list.syntax())
        })
        .map(|(name, _)| SmolStr::new(name.text()))
        .unwrap_or_default();

    // Named connections written before the marker are preserved verbatim;
    // anything after it belongs to a previously generated fill-in.
    let connected: Vec<SmolStr> = list
        .ports()
        .filter(|p| p.syntax().text_range().end() <= marker.start())
        .filter_map(|p| p.port_name())
        .map(|name| SmolStr::new(name.text()))
        .collect();

    let scope = inst
        .syntax()
        .ancestors()
        .find_map(ModuleDecl::cast)
        .map(|decl| scope_for(index, decl));

    index.directives.push(Directive::Inst(AutoInst {
        module_name: SmolStr::new(module_name.text()),
        instance_name,
        scope,
        connected,
        marker,
        span: TextRange::new(marker.end(), closing.text_range().start()),
        anchor: module_name.text_range().start(),
    }));
}

fn bind_template(token: &SyntaxToken, index: &mut DirectiveIndex) {
    let Some(decl) = token.parent_ancestors().find_map(ModuleDecl::cast) else {
        // Templates outside any module have no scope to attach to.
        return;
    };
    let Some(records) = template::parse_comment(token.text()) else {
        log::debug!(
            "ignoring malformed AUTO_TEMPLATE comment at {:?}",
            token.text_range()
        );
        return;
    };
    let id = scope_for(index, decl);
    index.scopes[id.0 as usize].templates.extend(records);
}

fn scope_for(index: &mut DirectiveIndex, decl: ModuleDecl) -> ScopeId {
    if let Some(pos) = index
        .scopes
        .iter()
        .position(|s| s.decl.syntax() == decl.syntax())
    {
        #[allow(clippy::cast_possible_truncation)]
        return ScopeId(pos as u32);
    }
    index.scopes.push(Scope {
        decl,
        templates: Vec::new(),
    });
    #[allow(clippy::cast_possible_truncation)]
    ScopeId(index.scopes.len() as u32 - 1)
}

// Walk upward from the marker to the list node that owns it. The walk
// refuses to cross expression or dimension boundaries: a marker inside a
// connection's actual expression is not a directive position.
fn enclosing_list(
    token: &SyntaxToken,
    target: SyntaxKind,
    marker_start: TextSize,
) -> Option<SyntaxNode> {
    let mut node = token.parent()?;
    loop {
        let kind = node.kind();
        if kind == target {
            return Some(node);
        }
        match kind {
            SyntaxKind::Expression
            | SyntaxKind::TypeSpec
            | SyntaxKind::PackedDimension
            | SyntaxKind::UnpackedDimension
            | SyntaxKind::ParamOverrideList
            | SyntaxKind::ParamPortList
            | SyntaxKind::SourceFile => return None,
            SyntaxKind::InstancePort => {
                // Valid only while still in front of the connection's `(`.
                if let Some(lp) = keyword_offset(&node, SyntaxKind::LParen)
                    && lp < marker_start
                {
                    return None;
                }
            }
            _ => {}
        }
        node = node.parent()?;
    }
}

// Offset of the first direct child token of the given kind.
fn keyword_offset(node: &SyntaxNode, kind: SyntaxKind) -> Option<TextSize> {
    node.children_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .find(|t| t.kind() == kind)
        .map(|t| t.text_range().start())
}
