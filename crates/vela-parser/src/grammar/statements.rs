use vela_lexer::SyntaxKind;

use crate::parser::Parser;

use super::consume_balanced_parens;

// Coarse statement parsing.
//
// Module items inside procedural blocks are irrelevant to directive
// expansion, so statements only need to keep block structure balanced and
// make progress on malformed input.
pub(crate) fn stmt(p: &mut Parser) {
    let m = p.start();
    stmt_inner(p);
    m.complete(p, SyntaxKind::Stmt);
}

fn stmt_inner(p: &mut Parser) {
    match p.current() {
        SyntaxKind::BeginKw => block(p),
        SyntaxKind::At => {
            p.bump();
            if p.at(SyntaxKind::LParen) {
                consume_balanced_parens(p);
            } else if !p.at_end() {
                p.bump(); // @* or @event
            }
            stmt(p);
        }
        SyntaxKind::Hash => {
            p.bump();
            if !p.at_end() && !p.at(SyntaxKind::Semicolon) {
                p.bump(); // delay value
            }
            stmt(p);
        }
        SyntaxKind::IfKw => {
            p.bump();
            if p.at(SyntaxKind::LParen) {
                consume_balanced_parens(p);
            }
            stmt(p);
            if p.eat(SyntaxKind::ElseKw) {
                stmt(p);
            }
        }
        SyntaxKind::ForKw | SyntaxKind::WhileKw | SyntaxKind::RepeatKw => {
            p.bump();
            if p.at(SyntaxKind::LParen) {
                consume_balanced_parens(p);
            }
            stmt(p);
        }
        SyntaxKind::ForeverKw => {
            p.bump();
            stmt(p);
        }
        SyntaxKind::CaseKw | SyntaxKind::CasexKw | SyntaxKind::CasezKw => case_stmt(p),
        SyntaxKind::Semicolon => {
            p.bump(); // null statement
        }
        SyntaxKind::EndKw | SyntaxKind::EndmoduleKw | SyntaxKind::EndcaseKw | SyntaxKind::Eof => {
            p.error("expected statement");
        }
        _ => simple_stmt(p),
    }
}

// `begin [: label] { stmt } end [: label]`
fn block(p: &mut Parser) {
    p.bump(); // begin
    eat_label(p);
    while !p.at(SyntaxKind::EndKw) && !p.at(SyntaxKind::EndmoduleKw) && !p.at_end() {
        stmt(p);
    }
    p.expect(SyntaxKind::EndKw);
    eat_label(p);
}

fn eat_label(p: &mut Parser) {
    if p.at(SyntaxKind::Colon) && p.nth(1) == SyntaxKind::Ident {
        p.bump();
        p.bump();
    }
}

// Consume a case statement as a flat token run up to the matching
// `endcase`, tracking nested case keywords.
fn case_stmt(p: &mut Parser) {
    p.bump(); // case / casex / casez
    if p.at(SyntaxKind::LParen) {
        consume_balanced_parens(p);
    }
    let mut depth = 0u32;
    while !p.at_end() {
        match p.current() {
            SyntaxKind::CaseKw | SyntaxKind::CasexKw | SyntaxKind::CasezKw => depth += 1,
            SyntaxKind::EndcaseKw => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            SyntaxKind::EndmoduleKw => break,
            _ => {}
        }
        p.bump();
    }
    p.expect(SyntaxKind::EndcaseKw);
}

// Anything else: consume balanced tokens up to the terminating `;`.
fn simple_stmt(p: &mut Parser) {
    let mut depth = 0u32;
    let mut consumed = false;
    while !p.at_end() {
        match p.current() {
            SyntaxKind::Semicolon if depth == 0 => break,
            SyntaxKind::LParen | SyntaxKind::LBracket | SyntaxKind::LBrace => depth += 1,
            SyntaxKind::RParen | SyntaxKind::RBracket | SyntaxKind::RBrace => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            SyntaxKind::EndKw | SyntaxKind::EndmoduleKw | SyntaxKind::EndcaseKw
                if depth == 0 =>
            {
                break;
            }
            _ => {}
        }
        p.bump();
        consumed = true;
    }
    if !consumed {
        p.error("expected statement");
    }
    p.eat(SyntaxKind::Semicolon);
}
