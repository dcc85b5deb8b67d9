use vela_lexer::SyntaxKind;

use crate::parser::Parser;

use super::declarations::{self, type_spec};
use super::{eat_name, expressions};

// Parse parameter port list: `#( param_decl { , param_decl } )`
pub(crate) fn param_port_list(p: &mut Parser) {
    let m = p.start();
    p.bump(); // #
    p.expect(SyntaxKind::LParen);
    if !p.at(SyntaxKind::RParen) {
        param_port_decl(p);
        while p.eat(SyntaxKind::Comma) {
            if p.at(SyntaxKind::RParen) {
                break;
            }
            param_port_decl(p);
        }
    }
    p.expect(SyntaxKind::RParen);
    m.complete(p, SyntaxKind::ParamPortList);
}

// Single parameter declaration inside `#(...)`.
fn param_port_decl(p: &mut Parser) {
    let m = p.start();
    // Optional `parameter` or `localparam` keyword
    if p.at(SyntaxKind::ParameterKw) || p.at(SyntaxKind::LocalparamKw) {
        p.bump();
    }
    if declarations::at_type_start(p) && p.nth(1) != SyntaxKind::Assign {
        type_spec(p);
    }
    declarations::declarator(p);
    m.complete(p, SyntaxKind::ParamDecl);
}

// Parse the header port list: `( port { , port } )`.
//
// A previously expanded AUTOARG region leaves a trailing comma before the
// closing paren, so the list tolerates `,)` instead of treating it as a
// missing port.
pub(crate) fn port_decl_list(p: &mut Parser) {
    let m = p.start();
    p.bump(); // (
    if !p.at(SyntaxKind::RParen) {
        port_decl(p);
        while p.eat(SyntaxKind::Comma) {
            if p.at(SyntaxKind::RParen) {
                break;
            }
            port_decl(p);
        }
    }
    p.expect(SyntaxKind::RParen);
    m.complete(p, SyntaxKind::PortList);
}

// Single header port: ANSI declaration or a bare non-ANSI port name.
fn port_decl(p: &mut Parser) {
    let m = p.start();
    // Direction: input / output / inout / ref
    if is_direction(p.current()) {
        p.bump();
    }
    // Optional net type or var keyword
    if declarations::is_net_type(p.current()) || p.at(SyntaxKind::VarKw) {
        p.bump();
    }
    // Optional data type. A lone identifier is the port name, not a type;
    // `mytype x` and `logic [3:0] x` both carry a type.
    if declarations::at_type_start(p) {
        let is_bare_name = p.at(SyntaxKind::Ident)
            && p.nth(1) != SyntaxKind::Ident
            && p.nth(1) != SyntaxKind::EscapedIdent;
        if !is_bare_name {
            type_spec(p);
        }
    }
    // Port name
    eat_name(p);
    // Unpacked dimensions
    while p.at(SyntaxKind::LBracket) {
        declarations::unpacked_dimension(p);
    }
    // Default value
    if p.eat(SyntaxKind::Assign) {
        expressions::expr(p);
    }
    m.complete(p, SyntaxKind::Port);
}

pub(crate) fn is_direction(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::InputKw | SyntaxKind::OutputKw | SyntaxKind::InoutKw | SyntaxKind::RefKw
    )
}
