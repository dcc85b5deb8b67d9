mod event;
mod grammar;
mod parser;

use rowan::{GreenNode, GreenNodeBuilder, Language};
use vela_lexer::Token;
use vela_source::TextRange;

pub use vela_lexer::SyntaxKind;

use event::Event;

/// The Verilog language tag for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VerilogLanguage {}

impl Language for VerilogLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
        assert!(
            raw.0 <= SyntaxKind::ErrorNode as u16,
            "invalid SyntaxKind value: {}",
            raw.0
        );
        // SAFETY: SyntaxKind is repr(u16) with contiguous variants.
        unsafe { std::mem::transmute(raw.0) }
    }

    fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind as u16)
    }
}

pub type SyntaxNode = rowan::SyntaxNode<VerilogLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<VerilogLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<VerilogLanguage>;

/// A recoverable parse error with the range of the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub range: TextRange,
    pub message: String,
}

/// Result of parsing a source file.
///
/// Errors never abort the parse; the green tree always covers the full
/// input text, trivia included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<ParseError>,
}

impl Parse {
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }
}

/// Parse a list of tokens into a green tree rooted at `SourceFile`.
pub fn parse(tokens: &[Token], src: &str) -> Parse {
    let mut p = parser::Parser::new(tokens);
    grammar::source_file(&mut p);
    let (events, errors) = p.finish();
    Parse {
        green: build_tree(&events, tokens, src),
        errors,
    }
}

// Replay parser events into a rowan green tree. Each `Token` event covers
// the leading trivia plus the significant token the parser consumed.
fn build_tree(events: &[Event], tokens: &[Token], src: &str) -> GreenNode {
    let mut builder = GreenNodeBuilder::new();
    let mut tok_idx = 0usize;
    let mut cursor = 0usize;

    for event in events {
        match event {
            Event::Start { kind } => {
                builder.start_node(VerilogLanguage::kind_to_raw(*kind));
            }
            Event::Finish => builder.finish_node(),
            Event::Token { n_raw_tokens } => {
                for _ in 0..*n_raw_tokens {
                    let tok = tokens[tok_idx];
                    let len: usize = tok.len.into();
                    builder.token(
                        VerilogLanguage::kind_to_raw(tok.kind),
                        &src[cursor..cursor + len],
                    );
                    cursor += len;
                    tok_idx += 1;
                }
            }
        }
    }

    builder.finish()
}
