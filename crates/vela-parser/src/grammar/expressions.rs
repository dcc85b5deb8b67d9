use vela_lexer::SyntaxKind;

use crate::parser::Parser;

// Coarse expression consumer.
//
// Directive expansion never evaluates expressions; it only needs their
// extents (for connection text capture) and balanced delimiters. Tokens are
// swallowed until a depth-0 stop token, tracking `()`/`[]`/`{}` nesting.
pub(crate) fn expr(p: &mut Parser) {
    let m = p.start();
    let mut depth = 0u32;
    let mut consumed = false;
    loop {
        let k = p.current();
        if k == SyntaxKind::Eof {
            break;
        }
        if depth == 0 && is_expr_stop(k) {
            break;
        }
        match k {
            SyntaxKind::LParen | SyntaxKind::LBracket | SyntaxKind::LBrace => depth += 1,
            SyntaxKind::RParen | SyntaxKind::RBracket | SyntaxKind::RBrace => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            _ => {}
        }
        p.bump();
        consumed = true;
    }
    if !consumed {
        p.error("expected expression");
    }
    m.complete(p, SyntaxKind::Expression);
}

fn is_expr_stop(k: SyntaxKind) -> bool {
    matches!(
        k,
        SyntaxKind::Comma
            | SyntaxKind::Semicolon
            | SyntaxKind::Assign
            | SyntaxKind::BeginKw
            | SyntaxKind::EndKw
            | SyntaxKind::EndcaseKw
            | SyntaxKind::EndmoduleKw
    )
}
