use vela_lexer::SyntaxKind;

use crate::parser::Parser;

use super::{expect_name, expressions};

pub(crate) fn is_net_type(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::WireKw
            | SyntaxKind::TriKw
            | SyntaxKind::Tri0Kw
            | SyntaxKind::Tri1Kw
            | SyntaxKind::TriregKw
            | SyntaxKind::WandKw
            | SyntaxKind::WorKw
            | SyntaxKind::UwireKw
            | SyntaxKind::Supply0Kw
            | SyntaxKind::Supply1Kw
    )
}

pub(crate) fn is_data_type(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::RegKw
            | SyntaxKind::LogicKw
            | SyntaxKind::BitKw
            | SyntaxKind::ByteKw
            | SyntaxKind::IntKw
            | SyntaxKind::IntegerKw
            | SyntaxKind::ShortintKw
            | SyntaxKind::LongintKw
            | SyntaxKind::TimeKw
            | SyntaxKind::RealKw
    )
}

// Whether the current token can begin a type specification.
pub(crate) fn at_type_start(p: &Parser) -> bool {
    let k = p.current();
    is_data_type(k)
        || is_net_type(k)
        || matches!(
            k,
            SyntaxKind::SignedKw
                | SyntaxKind::UnsignedKw
                | SyntaxKind::LBracket
                | SyntaxKind::Ident
        )
}

// Type specification: `[net/data type | user type] [signed|unsigned] { [..] }`.
//
// A leading `[` covers implicit-type declarations like `input [3:0] d`.
pub(crate) fn type_spec(p: &mut Parser) {
    let m = p.start();
    let k = p.current();
    if is_data_type(k) || is_net_type(k) || k == SyntaxKind::Ident {
        p.bump();
    }
    if p.at(SyntaxKind::SignedKw) || p.at(SyntaxKind::UnsignedKw) {
        p.bump();
    }
    while p.at(SyntaxKind::LBracket) {
        packed_dimension(p);
    }
    m.complete(p, SyntaxKind::TypeSpec);
}

pub(crate) fn packed_dimension(p: &mut Parser) {
    dimension(p, SyntaxKind::PackedDimension);
}

pub(crate) fn unpacked_dimension(p: &mut Parser) {
    dimension(p, SyntaxKind::UnpackedDimension);
}

fn dimension(p: &mut Parser, kind: SyntaxKind) {
    let m = p.start();
    p.bump(); // [
    if !p.at(SyntaxKind::RBracket) {
        expressions::expr(p);
        if p.eat(SyntaxKind::Colon) {
            expressions::expr(p);
        }
    }
    p.expect(SyntaxKind::RBracket);
    m.complete(p, kind);
}

// Declarator: `name { [..] } [= expr]`
pub(crate) fn declarator(p: &mut Parser) {
    let m = p.start();
    expect_name(p);
    while p.at(SyntaxKind::LBracket) {
        unpacked_dimension(p);
    }
    if p.eat(SyntaxKind::Assign) {
        expressions::expr(p);
    }
    m.complete(p, SyntaxKind::Declarator);
}

fn declarator_list(p: &mut Parser) {
    declarator(p);
    while p.eat(SyntaxKind::Comma) {
        declarator(p);
    }
}

// Non-ANSI port direction declaration in a module body:
// `direction [net/var] [type] name { , name } ;`
pub(crate) fn port_decl(p: &mut Parser) {
    let m = p.start();
    p.bump(); // input / output / inout / ref
    if is_net_type(p.current()) || p.at(SyntaxKind::VarKw) {
        p.bump();
    }
    if at_type_start(p) {
        // A lone identifier is the first port name, not a type.
        let is_bare_name = p.at(SyntaxKind::Ident)
            && p.nth(1) != SyntaxKind::Ident
            && p.nth(1) != SyntaxKind::EscapedIdent;
        if !is_bare_name {
            type_spec(p);
        }
    }
    declarator_list(p);
    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::PortDecl);
}

// `net_type [signed] { [..] } declarator { , declarator } ;`
pub(crate) fn net_decl(p: &mut Parser) {
    let m = p.start();
    p.bump(); // net type keyword
    if p.at(SyntaxKind::SignedKw) {
        p.bump();
    }
    while p.at(SyntaxKind::LBracket) {
        packed_dimension(p);
    }
    declarator_list(p);
    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::NetDecl);
}

// `data_type declarator { , declarator } ;`
pub(crate) fn var_decl(p: &mut Parser) {
    let m = p.start();
    type_spec(p);
    declarator_list(p);
    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::VarDecl);
}

// `genvar name { , name } ;`
pub(crate) fn genvar_decl(p: &mut Parser) {
    let m = p.start();
    p.bump(); // genvar
    declarator_list(p);
    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::VarDecl);
}

// `parameter|localparam [type] declarator { , declarator } ;`
pub(crate) fn param_decl(p: &mut Parser) {
    let m = p.start();
    p.bump(); // parameter / localparam
    if at_type_start(p) && p.nth(1) != SyntaxKind::Assign {
        type_spec(p);
    }
    declarator_list(p);
    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::ParamDecl);
}
