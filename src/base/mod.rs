//! Foundation types for the Jasper front end.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - Identifier validation for JVM-style names
//!
//! This module has NO dependencies on other jasper modules.

mod ident;

pub use ident::is_identifier;
pub use text_size::{TextRange, TextSize};

// Re-export text-size for convenience
pub use text_size;
