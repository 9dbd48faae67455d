use smol_str::SmolStr;
use text_size::TextSize;

use crate::semantic::import::ImportDeclaration;
use crate::semantic::symbol_table::{Entity, EntityId};
use crate::semantic::types::{DeclarationKind, DeclarationKinds};

/// How an entity reached the requesting visitor.
///
/// Entities delivered through an import carry the declaration they arrived
/// by, so downstream diagnostics (unused import, duplicate import) can tell
/// imported bindings apart from locally declared ones.
#[derive(Clone, Copy)]
pub struct BindingContext<'a> {
    pub via_import: Option<&'a ImportDeclaration>,
}

/// Callback receiving each candidate declaration during a lookup walk.
/// Returning `false` stops the walk; the stop is cooperative cancellation,
/// not an error.
pub type DeclarationVisitor<'a> = dyn FnMut(EntityId, &Entity, &BindingContext<'_>) -> bool + 'a;

/// One target of a fanned-out lookup.
///
/// A single logical request may resolve several targets at once (a variable
/// and a method, say); each target carries its own optional name hint and
/// its own visitor.
pub struct SubProcessor<'a> {
    pub name_hint: Option<SmolStr>,
    pub visitor: Box<DeclarationVisitor<'a>>,
}

impl<'a> SubProcessor<'a> {
    pub fn new(
        visitor: impl FnMut(EntityId, &Entity, &BindingContext<'_>) -> bool + 'a,
    ) -> Self {
        Self {
            name_hint: None,
            visitor: Box::new(visitor),
        }
    }

    pub fn named(
        name_hint: impl Into<SmolStr>,
        visitor: impl FnMut(EntityId, &Entity, &BindingContext<'_>) -> bool + 'a,
    ) -> Self {
        Self {
            name_hint: Some(name_hint.into()),
            visitor: Box::new(visitor),
        }
    }
}

/// The syntactic child visited just before this declaration during a
/// same-scope walk. Import statements are the only case the resolver cares
/// about: one static import must not see names a sibling import introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitedChild {
    ImportStatement,
    Other,
}

/// One scope-lookup request against one import declaration.
pub struct ScopeRequest<'a> {
    /// Declaration kinds the caller wants; `None` accepts everything.
    pub kinds: Option<DeclarationKinds>,
    /// Request-level required name; sub-processors may carry narrower hints.
    pub name: Option<SmolStr>,
    /// Byte offset of the use site issuing the lookup, within the import
    /// statement's own text when the lookup originates there.
    pub origin: Option<TextSize>,
    /// Child visited before this declaration in the same scope.
    pub last_visited_child: Option<VisitedChild>,
    /// Fan-out targets, visited in order.
    pub processors: Vec<SubProcessor<'a>>,
}

impl<'a> ScopeRequest<'a> {
    pub fn new(processors: Vec<SubProcessor<'a>>) -> Self {
        Self {
            kinds: None,
            name: None,
            origin: None,
            last_visited_child: None,
            processors,
        }
    }

    pub fn with_kinds(mut self, kinds: impl Into<DeclarationKinds>) -> Self {
        self.kinds = Some(kinds.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether class declarations are acceptable to this request.
    pub fn wants_classes(&self) -> bool {
        match self.kinds {
            None => true,
            Some(kinds) => kinds.contains(DeclarationKind::Class),
        }
    }

    /// Whether `kind` is acceptable to this request.
    pub fn wants(&self, kind: DeclarationKind) -> bool {
        match self.kinds {
            None => true,
            Some(kinds) => kinds.contains(kind),
        }
    }
}
