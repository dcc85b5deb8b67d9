use vela_source::{LineCol, LineIndex, TextSize};

#[test]
fn empty_text_has_one_line() {
    let idx = LineIndex::new("");
    assert_eq!(idx.line_count(), 1);
    let lc = idx.line_col(TextSize::new(0));
    assert_eq!(lc, LineCol { line: 0, col: 0 });
}

#[test]
fn offsets_map_to_lines() {
    let idx = LineIndex::new("module m;\nendmodule\n");
    assert_eq!(idx.line_col(TextSize::new(0)), LineCol { line: 0, col: 0 });
    assert_eq!(idx.line_col(TextSize::new(9)), LineCol { line: 0, col: 9 });
    assert_eq!(idx.line_col(TextSize::new(10)), LineCol { line: 1, col: 0 });
    assert_eq!(idx.line_col(TextSize::new(19)), LineCol { line: 1, col: 9 });
}

#[test]
fn offsets_clamp_at_eof() {
    let idx = LineIndex::new("ab");
    assert_eq!(idx.line_col(TextSize::new(99)), LineCol { line: 0, col: 2 });
}

#[test]
fn line_col_roundtrip() {
    let text = "input clk;\ninput rst;\noutput o;\n";
    let idx = LineIndex::new(text);
    for off in 0..=text.len() as u32 {
        let lc = idx.line_col(TextSize::new(off));
        assert_eq!(idx.offset(lc), Some(TextSize::new(off)));
    }
}

#[test]
fn offset_rejects_out_of_range() {
    let idx = LineIndex::new("ab\ncd\n");
    assert_eq!(idx.offset(LineCol { line: 5, col: 0 }), None);
    assert_eq!(idx.offset(LineCol { line: 0, col: 9 }), None);
}

#[test]
fn line_range_covers_newline() {
    let text = "module m;\nendmodule";
    let idx = LineIndex::new(text);
    let r = idx.line_range(TextSize::new(3));
    assert_eq!(&text[std::ops::Range::<usize>::from(r)], "module m;\n");
    let r = idx.line_range(TextSize::new(12));
    assert_eq!(&text[std::ops::Range::<usize>::from(r)], "endmodule");
}

#[test]
fn crlf_counts_cr_as_column_byte() {
    let idx = LineIndex::new("ab\r\ncd\r\n");
    assert_eq!(idx.line_col(TextSize::new(2)), LineCol { line: 0, col: 2 });
    assert_eq!(idx.line_col(TextSize::new(4)), LineCol { line: 1, col: 0 });
}
