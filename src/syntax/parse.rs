use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::lexer::ImportToken;

/// The raw pieces of one import statement, recovered from its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportParts {
    /// Dotted reference, `*` and alias excluded (`a.b.C`, `a.b` for `a.b.*`).
    pub reference_text: SmolStr,
    /// Span of the dotted reference within the statement text.
    pub reference_range: TextRange,
    pub alias_name: Option<SmolStr>,
    pub is_static: bool,
    pub is_on_demand: bool,
}

/// Lex and shape `text` as a single import statement.
///
/// Returns `None` for anything malformed. A half-typed import must not break
/// resolution for the rest of the file, so callers degrade `None` to a
/// declaration that contributes nothing rather than an error.
pub fn parse_import_text(text: &str) -> Option<ImportParts> {
    let mut tokens = Vec::new();
    for (token, span) in ImportToken::lexer(text).spanned() {
        tokens.push((token.ok()?, span));
    }

    let mut pos = 0;
    let mut bump = |expected: ImportToken| -> bool {
        if tokens.get(pos).is_some_and(|(t, _)| *t == expected) {
            pos += 1;
            true
        } else {
            false
        }
    };

    if !bump(ImportToken::KwImport) {
        return None;
    }
    let is_static = bump(ImportToken::KwStatic);

    // Dotted reference: Ident (`.` Ident)* with an optional trailing `.*`.
    let (first, first_span) = match tokens.get(pos) {
        Some((ImportToken::Ident, span)) => (&text[span.clone()], span.clone()),
        _ => return None,
    };
    pos += 1;

    let mut reference = String::from(first);
    let reference_start = first_span.start;
    let mut reference_end = first_span.end;
    let mut is_on_demand = false;

    while tokens.get(pos).is_some_and(|(t, _)| *t == ImportToken::Dot) {
        pos += 1;
        match tokens.get(pos) {
            Some((ImportToken::Ident, span)) => {
                reference.push('.');
                reference.push_str(&text[span.clone()]);
                reference_end = span.end;
                pos += 1;
            }
            Some((ImportToken::Star, _)) => {
                is_on_demand = true;
                pos += 1;
                break;
            }
            _ => return None,
        }
    }

    let mut alias_name = None;
    if tokens.get(pos).is_some_and(|(t, _)| *t == ImportToken::KwAs) {
        // the grammar has no aliased on-demand form
        if is_on_demand {
            return None;
        }
        pos += 1;
        match tokens.get(pos) {
            Some((ImportToken::Ident, span)) => {
                alias_name = Some(SmolStr::new(&text[span.clone()]));
                pos += 1;
            }
            _ => return None,
        }
    }

    if tokens.get(pos).is_some_and(|(t, _)| *t == ImportToken::Semi) {
        pos += 1;
    }
    if pos != tokens.len() {
        return None;
    }

    Some(ImportParts {
        reference_text: SmolStr::from(reference),
        reference_range: TextRange::new(
            TextSize::from(reference_start as u32),
            TextSize::from(reference_end as u32),
        ),
        alias_name,
        is_static,
        is_on_demand,
    })
}
