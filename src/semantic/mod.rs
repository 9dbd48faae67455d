//! # Semantic Analysis
//!
//! This module decides what import declarations contribute to name lookup:
//! classification of a declaration into its four shapes, the symbol-table
//! collaborator resolution runs against, and the resolution driver itself.

pub mod import;
pub mod resolver;
pub mod symbol_table;
pub mod types;

pub use import::ImportDeclaration;
pub use resolver::{ImportKind, Resolver, ScopeRequest, SubProcessor};
pub use symbol_table::{Entity, EntityId, MemberKind, SymbolTable};
pub use types::{DeclarationKind, DeclarationKinds, SemanticError, SemanticResult};

pub type QualifiedName = smol_str::SmolStr;
pub type SimpleName = smol_str::SmolStr;
