use vela_lexer::{SyntaxKind, lex};

// Token lengths must cover the input exactly, byte for byte, so the parser
// can rebuild the original text from the token stream.
fn assert_lossless(src: &str) {
    let tokens = lex(src);
    let total: u32 = tokens.iter().map(|t| u32::from(t.len)).sum();
    assert_eq!(total as usize, src.len(), "token lengths must cover input");
    assert_eq!(tokens.last().map(|t| t.kind), Some(SyntaxKind::Eof));
}

#[test]
fn lossless_module() {
    assert_lossless("module t1(/*AUTOARG*/);\n  input logic clk;\nendmodule\n");
}

#[test]
fn lossless_instantiation() {
    assert_lossless("module foo;\n  bar b(.i1(io), /*AUTOINST*/);\nendmodule\n");
}

#[test]
fn lossless_on_junk() {
    assert_lossless("\x01\x02 `` '' \\\n \"unterminated");
}

#[test]
fn lossless_template_comment() {
    assert_lossless("/* bar AUTO_TEMPLATE \".*\" (\n  .i1(in_a),\n  .o2(out_b)); */");
}
