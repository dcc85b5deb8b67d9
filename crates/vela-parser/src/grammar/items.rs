use vela_lexer::SyntaxKind;

use crate::parser::Parser;

use super::declarations;
use super::expressions;
use super::ports;
use super::statements;
use super::{consume_balanced_parens, eat_name, expect_name};

// Parse a module declaration:
// `module [lifetime] name [#(params)] [(ports)] ; { item } endmodule [: name]`
pub(crate) fn module_decl(p: &mut Parser) {
    let m = p.start();
    p.bump(); // module

    // Optional lifetime: automatic | static
    if p.at(SyntaxKind::AutomaticKw) || p.at(SyntaxKind::StaticKw) {
        p.bump();
    }

    // Module name
    expect_name(p);

    // Optional parameter port list #(...)
    if p.at(SyntaxKind::Hash) && p.nth(1) == SyntaxKind::LParen {
        ports::param_port_list(p);
    }

    // Optional port list (...)
    if p.at(SyntaxKind::LParen) {
        ports::port_decl_list(p);
    }

    p.expect(SyntaxKind::Semicolon);

    // Module body: items until endmodule
    let body = p.start();
    while !p.at(SyntaxKind::EndmoduleKw) && !p.at_end() {
        if !module_item(p) {
            break;
        }
    }
    body.complete(p, SyntaxKind::ModuleBody);

    if !p.eat(SyntaxKind::EndmoduleKw) {
        p.error("expected `endmodule`");
    }

    // Optional `: name`
    if p.eat(SyntaxKind::Colon) {
        eat_name(p);
    }

    m.complete(p, SyntaxKind::ModuleDecl);
}

// Parse one module item. Returns false if no progress was made.
fn module_item(p: &mut Parser) -> bool {
    match p.current() {
        SyntaxKind::InputKw | SyntaxKind::OutputKw | SyntaxKind::InoutKw | SyntaxKind::RefKw => {
            declarations::port_decl(p);
            true
        }
        k if declarations::is_net_type(k) => {
            declarations::net_decl(p);
            true
        }
        k if declarations::is_data_type(k) => {
            declarations::var_decl(p);
            true
        }
        SyntaxKind::VarKw => {
            declarations::var_decl(p);
            true
        }
        SyntaxKind::ParameterKw | SyntaxKind::LocalparamKw => {
            declarations::param_decl(p);
            true
        }
        SyntaxKind::GenvarKw => {
            declarations::genvar_decl(p);
            true
        }
        SyntaxKind::AssignKw => {
            continuous_assign(p);
            true
        }
        SyntaxKind::AlwaysKw
        | SyntaxKind::AlwaysCombKw
        | SyntaxKind::AlwaysFfKw
        | SyntaxKind::AlwaysLatchKw => {
            always_block(p);
            true
        }
        SyntaxKind::InitialKw => {
            initial_block(p);
            true
        }
        SyntaxKind::GenerateKw => {
            generate_region(p);
            true
        }
        SyntaxKind::FunctionKw => {
            callable_decl(p, SyntaxKind::EndfunctionKw, SyntaxKind::FunctionDecl);
            true
        }
        SyntaxKind::TaskKw => {
            callable_decl(p, SyntaxKind::EndtaskKw, SyntaxKind::TaskDecl);
            true
        }
        SyntaxKind::Directive => {
            compiler_directive(p);
            true
        }
        SyntaxKind::Ident => {
            // Ambiguous: `name # (` and `name name (` start an instantiation,
            // `name name ;` declares a variable of a user-defined type.
            if p.nth(1) == SyntaxKind::Hash {
                module_instantiation(p);
            } else if p.nth(1) == SyntaxKind::Ident || p.nth(1) == SyntaxKind::EscapedIdent {
                if p.nth(2) == SyntaxKind::LParen {
                    module_instantiation(p);
                } else {
                    declarations::var_decl(p);
                }
            } else {
                p.error_bump("unexpected token in module body");
            }
            true
        }
        _ => {
            p.error_bump("unexpected token in module body");
            !p.at_end()
        }
    }
}

// `assign lhs = rhs { , lhs = rhs } ;`
fn continuous_assign(p: &mut Parser) {
    let m = p.start();
    p.bump(); // assign
    expressions::expr(p);
    p.expect(SyntaxKind::Assign);
    expressions::expr(p);
    while p.eat(SyntaxKind::Comma) {
        expressions::expr(p);
        p.expect(SyntaxKind::Assign);
        expressions::expr(p);
    }
    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::ContinuousAssign);
}

// `always_keyword statement`
fn always_block(p: &mut Parser) {
    let m = p.start();
    p.bump(); // always / always_comb / always_ff / always_latch
    statements::stmt(p);
    m.complete(p, SyntaxKind::AlwaysBlock);
}

// `initial statement`
fn initial_block(p: &mut Parser) {
    let m = p.start();
    p.bump(); // initial
    statements::stmt(p);
    m.complete(p, SyntaxKind::InitialBlock);
}

// `generate { item } endgenerate`
fn generate_region(p: &mut Parser) {
    let m = p.start();
    p.bump(); // generate
    while !p.at(SyntaxKind::EndgenerateKw)
        && !p.at(SyntaxKind::EndmoduleKw)
        && !p.at_end()
    {
        if !module_item(p) {
            break;
        }
    }
    if !p.eat(SyntaxKind::EndgenerateKw) {
        p.error("expected `endgenerate`");
    }
    m.complete(p, SyntaxKind::GenerateRegion);
}

// Functions and tasks are opaque to expansion: consume a flat token run up
// to the matching end keyword.
fn callable_decl(p: &mut Parser, end: SyntaxKind, node: SyntaxKind) {
    let m = p.start();
    p.bump(); // function / task
    while !p.at(end) && !p.at(SyntaxKind::EndmoduleKw) && !p.at_end() {
        p.bump();
    }
    if !p.eat(end) {
        p.error("unterminated function or task");
    }
    m.complete(p, node);
}

// A compiler directive token (`timescale, `define, ...). The preprocessor
// is out of scope; the token is kept in the tree and otherwise ignored.
pub(crate) fn compiler_directive(p: &mut Parser) {
    let m = p.start();
    p.bump(); // ` directive
    m.complete(p, SyntaxKind::CompilerDirective);
}

// Module instantiation: `mod_name [#(params)] inst_name (ports) { , inst_name (ports) } ;`
fn module_instantiation(p: &mut Parser) {
    let m = p.start();
    p.bump(); // module name (Ident)

    // Optional parameter overrides #(...)
    if p.at(SyntaxKind::Hash) && p.nth(1) == SyntaxKind::LParen {
        param_override_list(p);
    }

    // Instance name
    expect_name(p);

    // Port connections (...)
    if p.at(SyntaxKind::LParen) {
        instance_port_list(p);
    }

    // Additional instances: `, name (...)`
    while p.eat(SyntaxKind::Comma) {
        expect_name(p);
        if p.at(SyntaxKind::LParen) {
            instance_port_list(p);
        }
    }

    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::ModuleInstantiation);
}

// Parameter overrides are opaque: swallow the balanced `( ... )` group.
fn param_override_list(p: &mut Parser) {
    let m = p.start();
    p.bump(); // #
    if p.at(SyntaxKind::LParen) {
        consume_balanced_parens(p);
    }
    m.complete(p, SyntaxKind::ParamOverrideList);
}

// Connection list. Tolerates a trailing comma before `)` because sources
// written for AUTO expansion leave one in front of the directive comment.
fn instance_port_list(p: &mut Parser) {
    let m = p.start();
    p.bump(); // (
    if !p.at(SyntaxKind::RParen) {
        instance_port(p);
        while p.eat(SyntaxKind::Comma) {
            if p.at(SyntaxKind::RParen) {
                break;
            }
            instance_port(p);
        }
    }
    p.expect(SyntaxKind::RParen);
    m.complete(p, SyntaxKind::InstancePortList);
}

fn instance_port(p: &mut Parser) {
    let m = p.start();
    if p.at(SyntaxKind::Dot) {
        // Named: .port_name(expr) or the .name shorthand
        p.bump(); // .
        expect_name(p);
        if p.at(SyntaxKind::LParen) {
            p.bump(); // (
            if !p.at(SyntaxKind::RParen) {
                expressions::expr(p);
            }
            p.expect(SyntaxKind::RParen);
        }
    } else if p.at(SyntaxKind::DotStar) {
        // Wildcard: .*
        p.bump();
    } else {
        // Positional
        expressions::expr(p);
    }
    m.complete(p, SyntaxKind::InstancePort);
}
