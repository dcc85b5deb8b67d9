use smol_str::SmolStr;
use vela_ast::{AstNode, ModuleDecl, PortDirection};
use vela_source::TextSize;

use crate::port::{DeclStyle, Port, PortList};

// Thin view over a resolved module declaration: turns CST ports into the
// ordered, deduplicated port model the expansion engine consumes.

/// Full port surface of a module: ANSI header ports in header order, then
/// body-declared ports. Used by AUTOINST.
///
/// An ANSI header port without its own direction keyword inherits the
/// direction of the closest preceding declared one (`input i1, i2`). Header
/// names with no direction at all are non-ANSI; their direction comes from
/// the body declaration, which also wins on conflicting re-declarations.
pub(crate) fn module_ports(decl: &ModuleDecl) -> PortList {
    let mut ports = PortList::default();

    if let Some(list) = decl.port_list() {
        let mut last_dir: Option<PortDirection> = None;
        for port in list.ports() {
            if let Some(dir) = port.direction() {
                last_dir = Some(dir);
            }
            let Some(name) = port.name() else {
                continue;
            };
            if let Some(direction) = last_dir {
                ports.push(Port {
                    name: SmolStr::new(name.text()),
                    direction,
                    style: DeclStyle::AnsiHeader,
                    first_seen: name.text_range().start(),
                });
            }
        }
    }

    for port in body_port_iter(decl) {
        ports.push(port);
    }
    ports
}

/// Only the non-ANSI body-declared ports, in body order. Used by AUTOARG.
pub(crate) fn body_ports(decl: &ModuleDecl) -> PortList {
    let mut ports = PortList::default();
    for port in body_port_iter(decl) {
        ports.push(port);
    }
    ports
}

fn body_port_iter(decl: &ModuleDecl) -> impl Iterator<Item = Port> {
    decl.body().into_iter().flat_map(|body| {
        body.port_decls().flat_map(|pd| {
            let direction = pd.direction();
            pd.declarators()
                .filter_map(move |d| {
                    let name = d.name()?;
                    let direction = direction?;
                    Some(Port {
                        name: SmolStr::new(name.text()),
                        direction,
                        style: DeclStyle::NonAnsiBody,
                        first_seen: name.text_range().start(),
                    })
                })
                .collect::<Vec<_>>()
        })
    })
}

/// Names listed in the header parenthesis before `before` (byte offset).
///
/// These are the pre-declared ports an AUTOARG fill must not repeat;
/// anything at or after the marker is a previously generated fill-in.
pub(crate) fn header_names_before(decl: &ModuleDecl, before: TextSize) -> Vec<SmolStr> {
    let Some(list) = decl.port_list() else {
        return Vec::new();
    };
    list.ports()
        .filter_map(|p| p.name())
        .filter(|name| name.text_range().start() < before)
        .map(|name| SmolStr::new(name.text()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_ast::SourceFile;

    fn first_module(src: &str) -> ModuleDecl {
        let tokens = vela_lexer::lex(src);
        let parse = vela_parser::parse(&tokens, src);
        SourceFile::cast(parse.syntax())
            .and_then(|f| f.modules().next())
            .expect("source should contain a module")
    }

    fn names(list: &PortList) -> Vec<String> {
        list.iter().map(|p| p.name.as_str().to_owned()).collect()
    }

    #[test]
    fn ansi_header_then_body() {
        let m = first_module(
            "module bar(input i1, output o1);\n  input i2;\n  inout io;\n  output o2;\nendmodule\n",
        );
        let ports = module_ports(&m);
        assert_eq!(names(&ports), ["i1", "o1", "i2", "io", "o2"]);
        assert_eq!(
            ports.iter().map(|p| p.direction).collect::<Vec<_>>(),
            [
                PortDirection::Input,
                PortDirection::Output,
                PortDirection::Input,
                PortDirection::Inout,
                PortDirection::Output,
            ]
        );
    }

    #[test]
    fn header_direction_inherits_to_following_names() {
        let m = first_module("module m(input a, b, output c);\nendmodule\n");
        let ports = module_ports(&m);
        assert_eq!(names(&ports), ["a", "b", "c"]);
        let b = ports.iter().find(|p| p.name == "b").unwrap();
        assert_eq!(b.direction, PortDirection::Input);
    }

    #[test]
    fn headerless_module_uses_body_ports() {
        let m = first_module("module qux;\n  input i1;\n  inout io;\n  output o2;\nendmodule\n");
        let ports = module_ports(&m);
        assert_eq!(names(&ports), ["i1", "io", "o2"]);
    }

    #[test]
    fn body_redeclaration_overrides_inherited_direction() {
        // `o1` has no own direction in the header; the body declares it.
        let m = first_module("module m(input i1, o1);\n  output logic o1;\nendmodule\n");
        let ports = module_ports(&m);
        let o1 = ports.iter().find(|p| p.name == "o1").unwrap();
        assert_eq!(o1.direction, PortDirection::Output);
        assert_eq!(o1.style, DeclStyle::AnsiHeader);
    }

    #[test]
    fn body_ports_ignore_header() {
        let m = first_module(
            "module t(input i1);\n  input logic clk;\n  input rst;\n  output reg o;\nendmodule\n",
        );
        let ports = body_ports(&m);
        assert_eq!(names(&ports), ["clk", "rst", "o"]);
    }

    #[test]
    fn multi_declarator_body_decl() {
        let m = first_module("module t;\n  input clk, rst;\n  output o;\nendmodule\n");
        let ports = body_ports(&m);
        assert_eq!(names(&ports), ["clk", "rst", "o"]);
    }

    #[test]
    fn function_port_decls_are_not_module_ports() {
        // `input trigger;` belongs to the function, not the module; the
        // parser keeps function bodies opaque so it never surfaces here.
        let m = first_module(
            "module t;\n  input clk;\n  output o;\n\n  function automatic f;\n    input trigger;\n    f = trigger;\n  endfunction\nendmodule\n",
        );
        let ports = body_ports(&m);
        assert_eq!(names(&ports), ["clk", "o"]);
    }

    #[test]
    fn genvar_is_not_a_port() {
        let m = first_module(
            "module t;\n  input clk;\n  genvar i;\n  output o;\nendmodule\n",
        );
        let ports = body_ports(&m);
        assert_eq!(names(&ports), ["clk", "o"]);
    }

    #[test]
    fn header_names_split_at_offset() {
        let src = "module t(input i1, i2, o1);\nendmodule\n";
        let m = first_module(src);
        let cut = src.find("o1").unwrap() as u32;
        let before = header_names_before(&m, TextSize::new(cut));
        assert_eq!(before, ["i1", "i2"]);
    }
}
