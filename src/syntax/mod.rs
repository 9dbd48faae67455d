//! Syntax layer for import declarations.
//!
//! An import declaration's textual pieces arrive one of two ways:
//! - from a precomputed index entry ([`ImportStub`]) when the containing
//!   file has already been indexed, or
//! - by lexing the statement text on demand ([`parse_import_text`]) when no
//!   stub is available.
//!
//! The [`SourceFile`] model carries the two facts the resolver needs about
//! the file an import lives in: its package name and a structure version
//! counter that invalidates per-declaration caches.

mod lexer;
mod parse;
mod source_file;
mod stub;

pub use lexer::ImportToken;
pub use parse::{ImportParts, parse_import_text};
pub use source_file::SourceFile;
pub use stub::ImportStub;

#[cfg(test)]
mod tests;
