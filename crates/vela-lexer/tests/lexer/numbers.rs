use vela_lexer::SyntaxKind;

use super::common::{kinds, single};

#[test]
fn int_literal() {
    assert_eq!(single("42").0, SyntaxKind::IntLiteral);
    assert_eq!(single("1_000").0, SyntaxKind::IntLiteral);
}

#[test]
fn real_literal() {
    assert_eq!(single("3.14").0, SyntaxKind::RealLiteral);
    assert_eq!(single("1e9").0, SyntaxKind::RealLiteral);
    assert_eq!(single("2.5E-3").0, SyntaxKind::RealLiteral);
}

#[test]
fn based_literal() {
    assert_eq!(single("'b1010").0, SyntaxKind::BasedLiteral);
    assert_eq!(single("'hDEAD_beef").0, SyntaxKind::BasedLiteral);
    assert_eq!(single("'sd15").0, SyntaxKind::BasedLiteral);
}

#[test]
fn unbased_unsized() {
    assert_eq!(single("'0").0, SyntaxKind::UnbasedUnsizedLiteral);
    assert_eq!(single("'z").0, SyntaxKind::UnbasedUnsizedLiteral);
}

#[test]
fn sized_literal_splits_width_and_value() {
    assert_eq!(
        kinds("8'hFF"),
        [SyntaxKind::IntLiteral, SyntaxKind::BasedLiteral]
    );
}
