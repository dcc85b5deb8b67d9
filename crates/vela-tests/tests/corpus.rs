use std::path::{Path, PathBuf};

use vela_tests::TestWorkspace;

// Each corpus case is a `<name>.v` input with a `<name>.expanded.v` golden
// next to it. The golden must also be a fixed point of expansion.
#[test]
fn corpus_roundtrip() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata");
    let mut inputs: Vec<PathBuf> = walkdir::WalkDir::new(&base)
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension().and_then(|e| e.to_str()) == Some("v")
                && !path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(".expanded.v"))
        })
        .collect();
    inputs.sort();
    assert!(!inputs.is_empty(), "no corpus inputs under {}", base.display());

    for input in inputs {
        let golden_path = input.with_extension("expanded.v");
        let source = std::fs::read_to_string(&input)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", input.display()));
        let golden = std::fs::read_to_string(&golden_path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", golden_path.display()));

        let expanded = TestWorkspace::new(&source).expand();
        assert_eq!(
            expanded,
            golden,
            "expansion of {} must match its golden file",
            input.display()
        );

        let again = TestWorkspace::new(&golden).expand();
        assert_eq!(
            again,
            golden,
            "golden {} must be a fixed point of expansion",
            golden_path.display()
        );
    }
}
