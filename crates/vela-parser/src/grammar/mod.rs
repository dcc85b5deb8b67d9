mod declarations;
mod expressions;
mod items;
mod ports;
mod statements;

use vela_lexer::SyntaxKind;

use crate::parser::Parser;

pub(crate) fn source_file(p: &mut Parser) {
    let m = p.start();
    while !p.at_end() {
        if p.at(SyntaxKind::ModuleKw) {
            items::module_decl(p);
        } else if p.at(SyntaxKind::Directive) {
            items::compiler_directive(p);
        } else {
            p.error_bump("expected module declaration");
        }
    }
    // Trailing trivia must be inside the root node for a valid rowan tree.
    p.eat_remaining_trivia();
    m.complete(p, SyntaxKind::SourceFile);
}

// Eat an identifier-like name token (plain or escaped).
pub(crate) fn eat_name(p: &mut Parser) -> bool {
    if p.at(SyntaxKind::Ident) || p.at(SyntaxKind::EscapedIdent) {
        p.bump();
        true
    } else {
        false
    }
}

pub(crate) fn expect_name(p: &mut Parser) {
    if !eat_name(p) {
        p.error("expected identifier");
    }
}

// Consume a balanced `( ... )` group, tolerating nested parens.
pub(crate) fn consume_balanced_parens(p: &mut Parser) {
    debug_assert!(p.at(SyntaxKind::LParen));
    let mut depth = 0u32;
    while !p.at_end() {
        match p.current() {
            SyntaxKind::LParen => depth += 1,
            SyntaxKind::RParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    p.bump();
                    return;
                }
            }
            SyntaxKind::EndmoduleKw => return,
            _ => {}
        }
        p.bump();
    }
}
