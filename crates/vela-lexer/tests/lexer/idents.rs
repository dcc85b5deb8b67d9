use vela_lexer::SyntaxKind;

use super::common::{kinds, single};

#[test]
fn keywords_classify() {
    assert_eq!(single("module").0, SyntaxKind::ModuleKw);
    assert_eq!(single("endmodule").0, SyntaxKind::EndmoduleKw);
    assert_eq!(single("input").0, SyntaxKind::InputKw);
    assert_eq!(single("inout").0, SyntaxKind::InoutKw);
    assert_eq!(single("output").0, SyntaxKind::OutputKw);
    assert_eq!(single("localparam").0, SyntaxKind::LocalparamKw);
    assert_eq!(single("always_comb").0, SyntaxKind::AlwaysCombKw);
}

#[test]
fn non_keywords_stay_idents() {
    assert_eq!(single("module_x").0, SyntaxKind::Ident);
    assert_eq!(single("inputs").0, SyntaxKind::Ident);
    assert_eq!(single("AUTOARG").0, SyntaxKind::Ident);
}

#[test]
fn escaped_ident_runs_to_whitespace() {
    let (kind, text) = single("\\bus[0] ");
    assert_eq!(kind, SyntaxKind::EscapedIdent);
    assert_eq!(text, "\\bus[0]");
}

#[test]
fn system_ident() {
    assert_eq!(single("$display").0, SyntaxKind::SystemIdent);
}

#[test]
fn compiler_directive() {
    assert_eq!(single("`timescale").0, SyntaxKind::Directive);
}

#[test]
fn instantiation_shape() {
    assert_eq!(
        kinds("bar b(.i1(io));"),
        [
            SyntaxKind::Ident,
            SyntaxKind::Whitespace,
            SyntaxKind::Ident,
            SyntaxKind::LParen,
            SyntaxKind::Dot,
            SyntaxKind::Ident,
            SyntaxKind::LParen,
            SyntaxKind::Ident,
            SyntaxKind::RParen,
            SyntaxKind::RParen,
            SyntaxKind::Semicolon,
        ]
    );
}

#[test]
fn dot_star_is_one_token() {
    assert_eq!(single(".*").0, SyntaxKind::DotStar);
}
