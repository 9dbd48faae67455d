use thiserror::Error;

pub type SemanticResult<T> = Result<T, SemanticError>;

/// Errors raised while populating the symbol table.
///
/// Resolution itself never raises these: a reference that does not resolve
/// contributes nothing to lookup instead of failing the surrounding walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    #[error("symbol `{qualified_name}` is already defined")]
    DuplicateSymbol { qualified_name: String },

    #[error("`{qualified_name}` is not a {expected}")]
    WrongEntityKind {
        qualified_name: String,
        expected: &'static str,
    },

    #[error("unknown entity id {index}")]
    UnknownEntity { index: usize },
}
