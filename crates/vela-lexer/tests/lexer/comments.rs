use vela_lexer::SyntaxKind;

use super::common::{lex_kinds, single};

#[test]
fn block_comment_is_one_token() {
    let (kind, text) = single("/*AUTOARG*/");
    assert_eq!(kind, SyntaxKind::BlockComment);
    assert_eq!(text, "/*AUTOARG*/");
}

#[test]
fn block_comment_spans_lines() {
    let src = "/* bar AUTO_TEMPLATE (\n  .i1(in_a)\n); */";
    let (kind, text) = single(src);
    assert_eq!(kind, SyntaxKind::BlockComment);
    assert_eq!(text, src);
}

#[test]
fn unterminated_block_comment_runs_to_eof() {
    let (kind, text) = single("/* dangling");
    assert_eq!(kind, SyntaxKind::BlockComment);
    assert_eq!(text, "/* dangling");
}

#[test]
fn line_comment_stops_at_newline() {
    let toks = lex_kinds("// Inputs\nclk");
    assert_eq!(toks[0], (SyntaxKind::LineComment, "// Inputs"));
    assert_eq!(toks[2], (SyntaxKind::Ident, "clk"));
}

#[test]
fn directive_comment_inside_port_list() {
    let toks = lex_kinds("(/*AUTOARG*/);");
    let kinds: Vec<_> = toks.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        [
            SyntaxKind::LParen,
            SyntaxKind::BlockComment,
            SyntaxKind::RParen,
            SyntaxKind::Semicolon,
        ]
    );
}
