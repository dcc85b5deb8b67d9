/// Token and node kinds for the Verilog syntax tree.
///
/// Tokens come first, node kinds follow [`NODE_START`]. The discriminants
/// are contiguous `u16` values so rowan can round-trip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Trivia
    Whitespace,
    LineComment,
    BlockComment,

    // Literals
    IntLiteral,
    RealLiteral,
    BasedLiteral,
    UnbasedUnsizedLiteral,
    StringLiteral,

    // Identifiers
    Ident,
    EscapedIdent,
    SystemIdent,
    Directive,

    // Punctuation and operators
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Dot,
    DotStar,
    Colon,
    ColonColon,
    Hash,
    At,
    Question,
    Assign,
    Plus,
    Minus,
    MinusGt,
    Star,
    StarStar,
    Slash,
    Percent,
    Amp,
    AmpAmp,
    Pipe,
    PipePipe,
    Caret,
    Tilde,
    Bang,
    BangEq,
    EqEq,
    Lt,
    LtEq,
    LtLt,
    Gt,
    GtEq,
    GtGt,
    TickBrace,
    Dollar,

    // Keywords
    ModuleKw,
    EndmoduleKw,
    InputKw,
    OutputKw,
    InoutKw,
    RefKw,
    WireKw,
    TriKw,
    Tri0Kw,
    Tri1Kw,
    TriregKw,
    WandKw,
    WorKw,
    UwireKw,
    Supply0Kw,
    Supply1Kw,
    RegKw,
    LogicKw,
    VarKw,
    BitKw,
    ByteKw,
    IntKw,
    IntegerKw,
    ShortintKw,
    LongintKw,
    TimeKw,
    RealKw,
    SignedKw,
    UnsignedKw,
    ParameterKw,
    LocalparamKw,
    AssignKw,
    AlwaysKw,
    AlwaysCombKw,
    AlwaysFfKw,
    AlwaysLatchKw,
    InitialKw,
    BeginKw,
    EndKw,
    IfKw,
    ElseKw,
    ForKw,
    WhileKw,
    RepeatKw,
    ForeverKw,
    CaseKw,
    CasexKw,
    CasezKw,
    EndcaseKw,
    DefaultKw,
    PosedgeKw,
    NegedgeKw,
    OrKw,
    GenvarKw,
    GenerateKw,
    EndgenerateKw,
    FunctionKw,
    EndfunctionKw,
    TaskKw,
    EndtaskKw,
    AutomaticKw,
    StaticKw,

    Error,
    Eof,

    // Nodes
    SourceFile,
    ModuleDecl,
    ModuleBody,
    PortList,
    Port,
    ParamPortList,
    ParamDecl,
    Declarator,
    TypeSpec,
    PackedDimension,
    UnpackedDimension,
    PortDecl,
    NetDecl,
    VarDecl,
    ContinuousAssign,
    AlwaysBlock,
    InitialBlock,
    GenerateRegion,
    FunctionDecl,
    TaskDecl,
    CompilerDirective,
    ModuleInstantiation,
    ParamOverrideList,
    InstancePortList,
    InstancePort,
    Expression,
    Stmt,
    ErrorNode,
}

/// First node kind; everything below is a token kind.
pub const NODE_START: SyntaxKind = SyntaxKind::SourceFile;

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace | SyntaxKind::LineComment | SyntaxKind::BlockComment
        )
    }
}
