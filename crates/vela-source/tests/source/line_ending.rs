use vela_source::LineEnding;

#[test]
fn lf_only() {
    assert_eq!(LineEnding::dominant("a\nb\nc\n"), LineEnding::Lf);
}

#[test]
fn crlf_only() {
    assert_eq!(LineEnding::dominant("a\r\nb\r\n"), LineEnding::CrLf);
}

#[test]
fn mixed_majority_wins() {
    assert_eq!(LineEnding::dominant("a\nb\nc\r\n"), LineEnding::Lf);
    assert_eq!(LineEnding::dominant("a\r\nb\r\nc\n"), LineEnding::CrLf);
}

#[test]
fn no_newline_defaults_to_lf() {
    assert_eq!(LineEnding::dominant("module m; endmodule"), LineEnding::Lf);
    assert_eq!(LineEnding::dominant(""), LineEnding::Lf);
}
