use smol_str::SmolStr;
use vela_ast::{AstNode, ModuleDecl, SourceFile};
use vela_parser::Parse;
use vela_source::FileId;

/// A parsed snapshot of one source file.
///
/// Everything downstream (index, expansion) reads through this; nothing is
/// cached across requests, so re-parsing on every request keeps all views
/// consistent with the buffer by construction.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub file: FileId,
    pub text: String,
    pub parse: Parse,
}

impl SourceUnit {
    /// Lex and parse `text` into a snapshot for `file`.
    pub fn parse(file: FileId, text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = vela_lexer::lex(&text);
        let parse = vela_parser::parse(&tokens, &text);
        Self { file, text, parse }
    }

    pub fn source_file(&self) -> Option<SourceFile> {
        SourceFile::cast(self.parse.syntax())
    }
}

/// One module declaration known to the project.
#[derive(Debug, Clone)]
pub struct ModuleEntry {
    pub name: SmolStr,
    pub file: FileId,
    pub decl: ModuleDecl,
}

/// Project-wide index of module declarations by name.
///
/// Built per expansion request from the current parses and discarded with
/// them. Entries keep encounter order (file order, then source order), so
/// duplicate names resolve deterministically to the first declaration.
#[derive(Debug, Default)]
pub struct ModuleIndex {
    entries: Vec<ModuleEntry>,
    // Indices into `entries` sorted by (name, encounter order).
    by_name: Box<[u32]>,
}

impl ModuleIndex {
    pub fn build(units: &[SourceUnit]) -> Self {
        let mut entries = Vec::new();
        for unit in units {
            let Some(file) = unit.source_file() else {
                continue;
            };
            for decl in file.modules() {
                let Some(name) = decl.name() else {
                    log::debug!("skipping unnamed module in {:?}", unit.file);
                    continue;
                };
                entries.push(ModuleEntry {
                    name: SmolStr::new(name.text()),
                    file: unit.file,
                    decl,
                });
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        let mut by_name: Vec<u32> = (0..entries.len() as u32).collect();
        by_name.sort_by(|&a, &b| {
            entries[a as usize]
                .name
                .cmp(&entries[b as usize].name)
                .then(a.cmp(&b))
        });

        Self {
            entries,
            by_name: by_name.into_boxed_slice(),
        }
    }

    /// Look up a module by name. Returns the first declaration encountered
    /// when the name is ambiguous.
    pub fn lookup_module(&self, name: &str) -> Option<&ModuleEntry> {
        let i = self
            .by_name
            .partition_point(|&ix| self.entries[ix as usize].name.as_str() < name);
        let ix = *self.by_name.get(i)?;
        let entry = &self.entries[ix as usize];
        (entry.name == name).then_some(entry)
    }

    /// All module declarations in encounter order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
