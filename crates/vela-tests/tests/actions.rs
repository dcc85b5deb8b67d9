use vela_ls::{Position, Range};
use vela_tests::{TEST_URI, TestWorkspace, apply_text_edits};

fn line_range(start: u32, end: u32) -> Range {
    Range {
        start: Position {
            line: start,
            character: 0,
        },
        end: Position {
            line: end,
            character: 0,
        },
    }
}

#[test]
fn range_action_expands_only_selected_lines() {
    let before = r#"
module foo(/*AUTOARG*/);
  input logic clk;
  input logic rst;
  output logic out_a;
  output logic out_b;

  /* qux AUTO_TEMPLATE
     bar AUTO_TEMPLATE ".*" (
       .o1(out_a),
       .o2(out_b)
     ); */
  bar b(/*AUTOINST*/);
endmodule

module bar(/*AUTOARG*/);
  input clk;
  input rst;
  output o1;
  output o2;
endmodule
"#;
    let golden = r#"
module foo(/*AUTOARG*/
  // Inputs
  clk, rst,
  // Outputs
  out_a, out_b
  );
  input logic clk;
  input logic rst;
  output logic out_a;
  output logic out_b;

  /* qux AUTO_TEMPLATE
     bar AUTO_TEMPLATE ".*" (
       .o1(out_a),
       .o2(out_b)
     ); */
  bar b(/*AUTOINST*/
    // Inputs
    .clk(clk),
    .rst(rst),
    // Outputs
    .o1(out_a),
    .o2(out_b));
endmodule

module bar(/*AUTOARG*/);
  input clk;
  input rst;
  output o1;
  output o2;
endmodule
"#;

    let ws = TestWorkspace::new(before);
    let actions =
        vela_ls::generate_code_actions(&ws.index(), ws.buffer(), TEST_URI, line_range(0, 12));
    let ranged = actions
        .iter()
        .find(|a| a.title == vela_ls::EXPAND_RANGE_TITLE)
        .expect("range action should be offered");
    let edits = &ranged.edit.changes[TEST_URI];
    // Only the directives starting on lines 0..=12; bar's AUTOARG (line 15)
    // stays untouched. The range refers to the pre-edit buffer, so this
    // action is a one-shot and is not re-applied for idempotence.
    assert_eq!(apply_text_edits(before, edits), golden);
}

#[test]
fn full_file_action_covers_everything() {
    let before = "module a(/*AUTOARG*/);\n  input x;\nendmodule\nmodule b(/*AUTOARG*/);\n  input y;\nendmodule\n";
    let ws = TestWorkspace::new(before);
    let actions =
        vela_ls::generate_code_actions(&ws.index(), ws.buffer(), TEST_URI, line_range(0, 0));
    let all = actions
        .iter()
        .find(|a| a.title == vela_ls::EXPAND_ALL_TITLE)
        .expect("full-file action should be offered");
    let applied = apply_text_edits(before, &all.edit.changes[TEST_URI]);
    assert_eq!(applied, ws.expand());
    assert!(applied.contains("module b(/*AUTOARG*/\n  // Inputs\n  y\n  );"));
}

#[test]
fn range_with_no_directives_offers_only_full_file_action() {
    let before = "module a(/*AUTOARG*/);\n  input x;\nendmodule\n";
    let ws = TestWorkspace::new(before);
    // Lines past the only directive.
    let actions =
        vela_ls::generate_code_actions(&ws.index(), ws.buffer(), TEST_URI, line_range(1, 2));
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].title, vela_ls::EXPAND_ALL_TITLE);
}
