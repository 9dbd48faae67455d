use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::trace;

use crate::semantic::types::{SemanticError, SemanticResult};

use super::entity::{Entity, EntityId, MemberKind};

/// Narrows a member enumeration before the visitor sees anything.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub static_only: bool,
    pub name: Option<SmolStr>,
}

impl MemberFilter {
    /// Static members with exactly this simple name.
    pub fn static_named(name: impl Into<SmolStr>) -> Self {
        Self {
            static_only: true,
            name: Some(name.into()),
        }
    }

    fn accepts(&self, entity: &Entity) -> bool {
        if self.static_only && !entity.is_static_member() {
            return false;
        }
        match &self.name {
            Some(name) => entity.name() == name,
            None => true,
        }
    }
}

/// Arena-backed symbol table: single source of truth for every entity,
/// with an index for O(1) qualified-name lookups.
#[derive(Debug, Default)]
pub struct SymbolTable {
    arena: Vec<Entity>,
    entities_by_qname: FxHashMap<SmolStr, EntityId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.arena.get(id.index())
    }

    pub fn entity_count(&self) -> usize {
        self.arena.len()
    }

    // ============================================================
    // Population
    // ============================================================

    /// Register a package under its qualified name.
    pub fn add_package(&mut self, qualified_name: impl Into<SmolStr>) -> SemanticResult<EntityId> {
        let qualified_name = qualified_name.into();
        self.check_free(&qualified_name)?;

        let name = SmolStr::new(last_segment(&qualified_name));
        let id = self.push(Entity::Package {
            name,
            qualified_name: qualified_name.clone(),
            declarations: IndexMap::new(),
        });
        self.entities_by_qname.insert(qualified_name, id);
        Ok(id)
    }

    /// Register a class under its qualified name. When the containing
    /// package is already registered, the class joins its declaration list.
    pub fn add_class(&mut self, qualified_name: impl Into<SmolStr>) -> SemanticResult<EntityId> {
        let qualified_name = qualified_name.into();
        self.check_free(&qualified_name)?;

        let name = SmolStr::new(last_segment(&qualified_name));
        let package_name = SmolStr::new(qualifier_of(&qualified_name));
        let id = self.push(Entity::Class {
            name: name.clone(),
            qualified_name: qualified_name.clone(),
            package_name: package_name.clone(),
            members: Vec::new(),
        });
        self.entities_by_qname.insert(qualified_name, id);

        if let Some(package_id) = self.resolve_package(&package_name) {
            if let Some(Entity::Package { declarations, .. }) = self.arena.get_mut(package_id.index())
            {
                declarations.insert(name, id);
            }
        }
        Ok(id)
    }

    /// Register a member declaration on `class`. Overloads are legal, so
    /// member names are not required to be unique within a class.
    pub fn add_member(
        &mut self,
        class: EntityId,
        name: impl Into<SmolStr>,
        kind: MemberKind,
        is_static: bool,
    ) -> SemanticResult<EntityId> {
        let name = name.into();
        let class_qname = match self.entity(class) {
            Some(Entity::Class { qualified_name, .. }) => qualified_name.clone(),
            Some(other) => {
                return Err(SemanticError::WrongEntityKind {
                    qualified_name: other.qualified_name().to_string(),
                    expected: "class",
                });
            }
            None => {
                return Err(SemanticError::UnknownEntity {
                    index: class.index(),
                });
            }
        };

        let qualified_name = SmolStr::from(format!("{class_qname}.{name}"));
        let id = self.push(Entity::Member {
            name,
            qualified_name,
            kind,
            is_static,
            owner: class,
        });
        if let Some(Entity::Class { members, .. }) = self.arena.get_mut(class.index()) {
            members.push(id);
        }
        Ok(id)
    }

    fn check_free(&self, qualified_name: &str) -> SemanticResult<()> {
        if self.entities_by_qname.contains_key(qualified_name) {
            return Err(SemanticError::DuplicateSymbol {
                qualified_name: qualified_name.to_string(),
            });
        }
        Ok(())
    }

    fn push(&mut self, entity: Entity) -> EntityId {
        let id = EntityId::new(self.arena.len());
        self.arena.push(entity);
        id
    }

    // ============================================================
    // Lookups
    // ============================================================

    /// Resolve a qualified name to a class entity.
    pub fn resolve_class(&self, qualified_name: &str) -> Option<EntityId> {
        let id = *self.entities_by_qname.get(qualified_name)?;
        matches!(self.entity(id), Some(Entity::Class { .. })).then_some(id)
    }

    /// Resolve a qualified name to a package entity.
    pub fn resolve_package(&self, qualified_name: &str) -> Option<EntityId> {
        let id = *self.entities_by_qname.get(qualified_name)?;
        matches!(self.entity(id), Some(Entity::Package { .. })).then_some(id)
    }

    // ============================================================
    // Enumeration
    // ============================================================

    /// Feed `class`'s member declarations through `visitor` in declaration
    /// order, narrowed by `filter`. The visitor's `false` stops the walk and
    /// is propagated verbatim.
    pub fn process_members(
        &self,
        class: EntityId,
        filter: &MemberFilter,
        visitor: &mut dyn FnMut(EntityId, &Entity) -> bool,
    ) -> bool {
        let Some(Entity::Class { members, .. }) = self.entity(class) else {
            return true;
        };
        trace!(
            "[PROCESS_MEMBERS] class={:?} members={} filter={:?}",
            class,
            members.len(),
            filter
        );
        for &member_id in members {
            let Some(member) = self.entity(member_id) else {
                continue;
            };
            if !filter.accepts(member) {
                continue;
            }
            if !visitor(member_id, member) {
                return false;
            }
        }
        true
    }

    /// Feed `package`'s top-level classes through `visitor` in registration
    /// order. A name narrows the walk to the one matching declaration.
    pub fn process_package_declarations(
        &self,
        package: EntityId,
        name: Option<&str>,
        visitor: &mut dyn FnMut(EntityId, &Entity) -> bool,
    ) -> bool {
        let Some(Entity::Package { declarations, .. }) = self.entity(package) else {
            return true;
        };
        if let Some(name) = name {
            let Some(&id) = declarations.get(name) else {
                return true;
            };
            return match self.entity(id) {
                Some(entity) => visitor(id, entity),
                None => true,
            };
        }
        for &id in declarations.values() {
            let Some(entity) = self.entity(id) else {
                continue;
            };
            if !visitor(id, entity) {
                return false;
            }
        }
        true
    }
}

/// Last dot-separated segment of a qualified name.
fn last_segment(qualified_name: &str) -> &str {
    match qualified_name.rfind('.') {
        Some(pos) => &qualified_name[pos + 1..],
        None => qualified_name,
    }
}

/// Everything before the last dot; empty when the name has no qualifier.
fn qualifier_of(qualified_name: &str) -> &str {
    match qualified_name.rfind('.') {
        Some(pos) => &qualified_name[..pos],
        None => "",
    }
}
