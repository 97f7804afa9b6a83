use thiserror::Error;

/// A declaration line that could not be imported.
///
/// The whole import is aborted at the first such line, so this always points
/// at the single place the user has to fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}: `{text}`")]
pub struct ImportError {
    /// 1-indexed physical line number.
    pub line: usize,
    /// The line exactly as written, comment included.
    pub text: String,
    pub kind: ImportErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportErrorKind {
    #[error("expected `name: type`")]
    MissingColon,

    #[error("invalid field name `{0}`")]
    InvalidName(String),

    #[error("missing type after `:`")]
    EmptyType,

    #[error("unsupported type `{0}`")]
    UnknownType(String),

    #[error("union `{0}` mixes string literals with other types")]
    MixedUnion(String),

    #[error("unterminated string literal")]
    UnterminatedLiteral,
}
