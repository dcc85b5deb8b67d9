use crate::SyntaxKind;

/// Classify an identifier string as a keyword or plain `Ident`.
///
/// Only the keywords the grammar consumes are classified; the rest of the
/// IEEE 1800 reserved set stays `Ident`, which is harmless for directive
/// expansion because unknown body items are skipped coarsely anyway.
///
/// Uses a length prefilter to skip irrelevant match arms.
pub(crate) fn classify_keyword(word: &str) -> SyntaxKind {
    match word.len() {
        2 => classify_2(word),
        3 => classify_3(word),
        4 => classify_4(word),
        5 => classify_5(word),
        6 => classify_6(word),
        7 => classify_7(word),
        8 => classify_8(word),
        9 => classify_9(word),
        10.. => classify_long(word),
        _ => SyntaxKind::Ident,
    }
}

fn classify_2(w: &str) -> SyntaxKind {
    match w {
        "if" => SyntaxKind::IfKw,
        "or" => SyntaxKind::OrKw,
        _ => SyntaxKind::Ident,
    }
}

fn classify_3(w: &str) -> SyntaxKind {
    match w {
        "bit" => SyntaxKind::BitKw,
        "end" => SyntaxKind::EndKw,
        "for" => SyntaxKind::ForKw,
        "int" => SyntaxKind::IntKw,
        "ref" => SyntaxKind::RefKw,
        "reg" => SyntaxKind::RegKw,
        "tri" => SyntaxKind::TriKw,
        "var" => SyntaxKind::VarKw,
        "wor" => SyntaxKind::WorKw,
        _ => SyntaxKind::Ident,
    }
}

fn classify_4(w: &str) -> SyntaxKind {
    match w {
        "byte" => SyntaxKind::ByteKw,
        "case" => SyntaxKind::CaseKw,
        "else" => SyntaxKind::ElseKw,
        "real" => SyntaxKind::RealKw,
        "task" => SyntaxKind::TaskKw,
        "time" => SyntaxKind::TimeKw,
        "tri0" => SyntaxKind::Tri0Kw,
        "tri1" => SyntaxKind::Tri1Kw,
        "wand" => SyntaxKind::WandKw,
        "wire" => SyntaxKind::WireKw,
        _ => SyntaxKind::Ident,
    }
}

fn classify_5(w: &str) -> SyntaxKind {
    match w {
        "begin" => SyntaxKind::BeginKw,
        "casex" => SyntaxKind::CasexKw,
        "casez" => SyntaxKind::CasezKw,
        "inout" => SyntaxKind::InoutKw,
        "input" => SyntaxKind::InputKw,
        "logic" => SyntaxKind::LogicKw,
        "uwire" => SyntaxKind::UwireKw,
        "while" => SyntaxKind::WhileKw,
        _ => SyntaxKind::Ident,
    }
}

fn classify_6(w: &str) -> SyntaxKind {
    match w {
        "always" => SyntaxKind::AlwaysKw,
        "assign" => SyntaxKind::AssignKw,
        "genvar" => SyntaxKind::GenvarKw,
        "module" => SyntaxKind::ModuleKw,
        "output" => SyntaxKind::OutputKw,
        "repeat" => SyntaxKind::RepeatKw,
        "signed" => SyntaxKind::SignedKw,
        "static" => SyntaxKind::StaticKw,
        "trireg" => SyntaxKind::TriregKw,
        _ => SyntaxKind::Ident,
    }
}

fn classify_7(w: &str) -> SyntaxKind {
    match w {
        "default" => SyntaxKind::DefaultKw,
        "endcase" => SyntaxKind::EndcaseKw,
        "endtask" => SyntaxKind::EndtaskKw,
        "forever" => SyntaxKind::ForeverKw,
        "initial" => SyntaxKind::InitialKw,
        "integer" => SyntaxKind::IntegerKw,
        "longint" => SyntaxKind::LongintKw,
        "negedge" => SyntaxKind::NegedgeKw,
        "posedge" => SyntaxKind::PosedgeKw,
        "supply0" => SyntaxKind::Supply0Kw,
        "supply1" => SyntaxKind::Supply1Kw,
        _ => SyntaxKind::Ident,
    }
}

fn classify_8(w: &str) -> SyntaxKind {
    match w {
        "function" => SyntaxKind::FunctionKw,
        "generate" => SyntaxKind::GenerateKw,
        "shortint" => SyntaxKind::ShortintKw,
        "unsigned" => SyntaxKind::UnsignedKw,
        _ => SyntaxKind::Ident,
    }
}

fn classify_9(w: &str) -> SyntaxKind {
    match w {
        "always_ff" => SyntaxKind::AlwaysFfKw,
        "automatic" => SyntaxKind::AutomaticKw,
        "endmodule" => SyntaxKind::EndmoduleKw,
        "parameter" => SyntaxKind::ParameterKw,
        _ => SyntaxKind::Ident,
    }
}

fn classify_long(w: &str) -> SyntaxKind {
    match w {
        "always_comb" => SyntaxKind::AlwaysCombKw,
        "always_latch" => SyntaxKind::AlwaysLatchKw,
        "endfunction" => SyntaxKind::EndfunctionKw,
        "endgenerate" => SyntaxKind::EndgenerateKw,
        "localparam" => SyntaxKind::LocalparamKw,
        _ => SyntaxKind::Ident,
    }
}
