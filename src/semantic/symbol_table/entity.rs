use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::semantic::types::DeclarationKind;

/// Unique identifier for an entity in the arena.
/// Uses u32 for compact storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

impl EntityId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The kind of a class member declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Method,
    Field,
    EnumConst,
}

impl MemberKind {
    pub fn declaration_kind(self) -> DeclarationKind {
        match self {
            MemberKind::Method => DeclarationKind::Method,
            MemberKind::Field => DeclarationKind::Field,
            MemberKind::EnumConst => DeclarationKind::EnumConst,
        }
    }
}

/// A named element known to the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Package {
        name: SmolStr,
        qualified_name: SmolStr,
        /// Top-level classes by simple name, in registration order.
        declarations: IndexMap<SmolStr, EntityId>,
    },
    Class {
        name: SmolStr,
        qualified_name: SmolStr,
        /// Qualified name of the containing package; empty for the default
        /// package.
        package_name: SmolStr,
        /// Member declarations in declaration order. Names may repeat
        /// (method overloads).
        members: Vec<EntityId>,
    },
    Member {
        name: SmolStr,
        qualified_name: SmolStr,
        kind: MemberKind,
        is_static: bool,
        owner: EntityId,
    },
}

impl Entity {
    /// Returns the simple name of this entity
    pub fn name(&self) -> &str {
        match self {
            Entity::Package { name, .. }
            | Entity::Class { name, .. }
            | Entity::Member { name, .. } => name,
        }
    }

    /// Returns the qualified name of this entity
    pub fn qualified_name(&self) -> &str {
        match self {
            Entity::Package { qualified_name, .. }
            | Entity::Class { qualified_name, .. }
            | Entity::Member { qualified_name, .. } => qualified_name,
        }
    }

    pub fn declaration_kind(&self) -> DeclarationKind {
        match self {
            Entity::Package { .. } => DeclarationKind::Package,
            Entity::Class { .. } => DeclarationKind::Class,
            Entity::Member { kind, .. } => kind.declaration_kind(),
        }
    }

    /// Returns true for static members; classes and packages are not
    /// member declarations and answer false.
    pub fn is_static_member(&self) -> bool {
        matches!(self, Entity::Member { is_static: true, .. })
    }
}
