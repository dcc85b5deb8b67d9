use vela_lexer::SyntaxKind;
use vela_parser::{SyntaxNode, SyntaxToken};

use crate::node::{ast_node, AstNode};
use crate::support::{self, AstChildren};

const NAME_KINDS: [SyntaxKind; 2] = [SyntaxKind::Ident, SyntaxKind::EscapedIdent];

const DIRECTION_KINDS: [SyntaxKind; 4] = [
    SyntaxKind::InputKw,
    SyntaxKind::OutputKw,
    SyntaxKind::InoutKw,
    SyntaxKind::RefKw,
];

ast_node!(SourceFile, SyntaxKind::SourceFile);
ast_node!(ModuleDecl, SyntaxKind::ModuleDecl);
ast_node!(ModuleBody, SyntaxKind::ModuleBody);
ast_node!(PortList, SyntaxKind::PortList);
ast_node!(Port, SyntaxKind::Port);
ast_node!(PortDecl, SyntaxKind::PortDecl);
ast_node!(Declarator, SyntaxKind::Declarator);
ast_node!(ModuleInstantiation, SyntaxKind::ModuleInstantiation);
ast_node!(InstancePortList, SyntaxKind::InstancePortList);
ast_node!(InstancePort, SyntaxKind::InstancePort);

impl SourceFile {
    pub fn modules(&self) -> AstChildren<ModuleDecl> {
        support::children(&self.syntax)
    }
}

impl ModuleDecl {
    /// The module name token.
    pub fn name(&self) -> Option<SyntaxToken> {
        support::token_in(&self.syntax, &NAME_KINDS)
    }

    /// The header port list `( ... )` if the module declares one.
    pub fn port_list(&self) -> Option<PortList> {
        support::child(&self.syntax)
    }

    pub fn body(&self) -> Option<ModuleBody> {
        support::child(&self.syntax)
    }
}

impl ModuleBody {
    /// Non-ANSI port direction declarations in source order.
    pub fn port_decls(&self) -> AstChildren<PortDecl> {
        support::children(&self.syntax)
    }
}

impl PortList {
    pub fn ports(&self) -> AstChildren<Port> {
        support::children(&self.syntax)
    }

    /// The closing `)` of the list; absent when the source is malformed.
    pub fn closing_paren(&self) -> Option<SyntaxToken> {
        support::last_token(&self.syntax, SyntaxKind::RParen)
    }
}

impl Port {
    /// The port name token. Type identifiers live inside the `TypeSpec`
    /// child node, so the first direct name token is always the port name.
    pub fn name(&self) -> Option<SyntaxToken> {
        support::token_in(&self.syntax, &NAME_KINDS)
    }

    pub fn direction_token(&self) -> Option<SyntaxToken> {
        support::token_in(&self.syntax, &DIRECTION_KINDS)
    }
}

impl PortDecl {
    pub fn direction_token(&self) -> Option<SyntaxToken> {
        support::token_in(&self.syntax, &DIRECTION_KINDS)
    }

    /// Declared names in source order.
    pub fn declarators(&self) -> AstChildren<Declarator> {
        support::children(&self.syntax)
    }
}

impl Declarator {
    pub fn name(&self) -> Option<SyntaxToken> {
        support::token_in(&self.syntax, &NAME_KINDS)
    }
}

impl ModuleInstantiation {
    /// The instantiated module's name (the first identifier token).
    pub fn module_name(&self) -> Option<SyntaxToken> {
        support::token_in(&self.syntax, &NAME_KINDS)
    }

    /// Iterate over all instance entries in this statement.
    ///
    /// A single instantiation statement can declare multiple instances:
    /// `adder u1(.a(x)), u2(.a(y));`. Each entry yields the instance name
    /// token and its port list, if any.
    pub fn instances(&self) -> impl Iterator<Item = (SyntaxToken, Option<InstancePortList>)> + '_ {
        InstanceIter {
            children: self.syntax.children_with_tokens(),
            past_module_name: false,
        }
    }
}

struct InstanceIter<I> {
    children: I,
    past_module_name: bool,
}

impl<I: Iterator<Item = rowan::NodeOrToken<SyntaxNode, SyntaxToken>>> Iterator for InstanceIter<I> {
    type Item = (SyntaxToken, Option<InstancePortList>);

    fn next(&mut self) -> Option<Self::Item> {
        let mut name_token: Option<SyntaxToken> = None;
        for el in self.children.by_ref() {
            match el {
                rowan::NodeOrToken::Token(tok) => {
                    if matches!(tok.kind(), SyntaxKind::Ident | SyntaxKind::EscapedIdent) {
                        if self.past_module_name {
                            name_token = Some(tok);
                        } else {
                            // First ident is the module type name -- skip it
                            self.past_module_name = true;
                        }
                    }
                }
                rowan::NodeOrToken::Node(node) => {
                    if node.kind() == SyntaxKind::InstancePortList
                        && let Some(name) = name_token.take()
                    {
                        let port_list = InstancePortList::cast(node);
                        return Some((name, port_list));
                    }
                }
            }
        }
        // Instance without port list
        if let Some(name) = name_token {
            return Some((name, None));
        }
        None
    }
}

impl InstancePortList {
    pub fn ports(&self) -> AstChildren<InstancePort> {
        support::children(&self.syntax)
    }

    /// The closing `)` of the connection list.
    pub fn closing_paren(&self) -> Option<SyntaxToken> {
        support::last_token(&self.syntax, SyntaxKind::RParen)
    }
}

impl InstancePort {
    /// The port name token for named connections (`.foo(expr)`).
    ///
    /// Returns `None` for positional connections and for the `.*` wildcard
    /// (lexed as a single `DotStar` token, not `Dot` + `Star`), so callers
    /// treating `Some` as "connects this specific port" skip both.
    pub fn port_name(&self) -> Option<SyntaxToken> {
        let mut saw_dot = false;
        for el in self.syntax.children_with_tokens() {
            if let rowan::NodeOrToken::Token(tok) = el {
                if tok.kind() == SyntaxKind::Dot {
                    saw_dot = true;
                } else if saw_dot
                    && matches!(tok.kind(), SyntaxKind::Ident | SyntaxKind::EscapedIdent)
                {
                    return Some(tok);
                } else if tok.kind() == SyntaxKind::DotStar {
                    return None;
                }
            }
        }
        None
    }
}
