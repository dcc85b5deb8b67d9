use std::process::ExitCode;

use vela_index::{ModuleIndex, SourceUnit};
use vela_source::FileId;

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        usage();
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "dump-tree" => dump_tree(&args[2..]),
        "expand" => expand(&args[2..]),
        "edits" => edits(&args[2..]),
        other => {
            eprintln!("Unknown command: {other}");
            usage();
            ExitCode::FAILURE
        }
    }
}

fn usage() {
    eprintln!("Usage: vela <command> [args...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  dump-tree <file>             Print the syntax tree of a Verilog file");
    eprintln!("  expand <file> [project]...   Print <file> with all AUTOs expanded");
    eprintln!("  edits <file> [project]...    Print the expansion edits as LSP JSON");
}

// Read the edited buffer plus any project files into parsed units.
// The first file is the buffer edits are computed for.
fn load_units(paths: &[String]) -> Result<Vec<SourceUnit>, ExitCode> {
    let mut units = Vec::with_capacity(paths.len());
    for (idx, path) in paths.iter().enumerate() {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error reading {path}: {e}");
                return Err(ExitCode::FAILURE);
            }
        };
        #[allow(clippy::cast_possible_truncation)]
        let unit = SourceUnit::parse(FileId(idx as u32), text);
        units.push(unit);
    }
    Ok(units)
}

fn dump_tree(args: &[String]) -> ExitCode {
    let Some(path) = args.first() else {
        eprintln!("Usage: vela dump-tree <file>");
        return ExitCode::FAILURE;
    };

    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let tokens = vela_lexer::lex(&source);
    let parse = vela_parser::parse(&tokens, &source);

    for err in &parse.errors {
        eprintln!("{err:?}");
    }
    print!("{:#?}", parse.syntax());

    ExitCode::SUCCESS
}

fn expand(args: &[String]) -> ExitCode {
    if args.is_empty() {
        eprintln!("Usage: vela expand <file> [project-file]...");
        return ExitCode::FAILURE;
    }
    let units = match load_units(args) {
        Ok(units) => units,
        Err(code) => return code,
    };
    let index = ModuleIndex::build(&units);
    let unit = &units[0];
    let edits = vela_expand::expand_unit(&index, unit);
    print!("{}", vela_expand::apply_edits(&unit.text, &edits));
    ExitCode::SUCCESS
}

fn edits(args: &[String]) -> ExitCode {
    if args.is_empty() {
        eprintln!("Usage: vela edits <file> [project-file]...");
        return ExitCode::FAILURE;
    }
    let units = match load_units(args) {
        Ok(units) => units,
        Err(code) => return code,
    };
    let index = ModuleIndex::build(&units);
    let text_edits = vela_ls::generate_expand_edits(&index, &units[0]);
    match serde_json::to_string_pretty(&text_edits) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing edits: {e}");
            ExitCode::FAILURE
        }
    }
}
