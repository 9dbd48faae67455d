use smol_str::SmolStr;
use tracing::trace;

use crate::semantic::import::ImportDeclaration;
use crate::semantic::symbol_table::{Entity, EntityId, MemberFilter, SymbolTable};
use crate::semantic::types::DeclarationKinds;

use super::classifier::{ImportKind, classify};
use super::processor::{BindingContext, ScopeRequest, SubProcessor, VisitedChild};
use super::synonyms::paired_synonyms;

/// Import-resolution driver.
///
/// All resolution logic lives here, keeping [`SymbolTable`] a pure data
/// structure. A resolver is cheap to construct and holds no state of its
/// own, so repeated lookups against an unmodified table and declaration
/// produce identical visitor sequences.
pub struct Resolver<'a> {
    symbol_table: &'a SymbolTable,
}

impl<'a> Resolver<'a> {
    pub fn new(symbol_table: &'a SymbolTable) -> Self {
        Self { symbol_table }
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        self.symbol_table
    }

    // ============================================================
    // Entry point
    // ============================================================

    /// Feed the declarations `decl` contributes into the request's
    /// processors.
    ///
    /// `false` means some visitor stopped the surrounding lookup walk and
    /// the caller should stop processing further declarations too. A
    /// reference that does not resolve contributes nothing and answers
    /// `true`.
    pub fn process_import_declarations(
        &self,
        decl: &ImportDeclaration,
        request: &mut ScopeRequest<'_>,
    ) -> bool {
        if !should_process(request) {
            return true;
        }
        if is_ancestor(decl, request) {
            return true;
        }
        // a static import must not see names a sibling import introduced
        if decl.is_static() && request.last_visited_child == Some(VisitedChild::ImportStatement) {
            return true;
        }

        let Some(kind) = classify(decl) else {
            return true;
        };
        trace!(
            "[PROCESS_IMPORT] kind={:?} reference={:?}",
            kind,
            decl.reference_text()
        );

        match kind {
            ImportKind::ClassSingle { imported_name } => {
                self.process_single_class_import(decl, &imported_name, request)
            }
            ImportKind::StaticSingle {
                imported_name,
                member_name,
                qualifier_name,
            } => self.process_single_static_import(
                decl,
                &imported_name,
                &member_name,
                &qualifier_name,
                request,
            ),
            ImportKind::ClassOnDemand => self.process_on_demand_class_import(decl, request),
            ImportKind::StaticOnDemand => self.process_on_demand_static_import(decl, request),
        }
    }

    /// The class this import is about: the referenced class for plain and
    /// on-demand imports, the qualifier class for single static imports.
    /// Read-only introspection for diagnostics (unused import, duplicate
    /// import).
    pub fn resolve_target_class(&self, decl: &ImportDeclaration) -> Option<EntityId> {
        let reference = decl.reference_text()?;
        if !decl.is_static() || decl.is_on_demand() {
            self.symbol_table.resolve_class(reference)
        } else {
            let qualifier = decl.qualifier_name()?;
            self.resolve_qualifier(decl, &qualifier)
        }
    }

    // ============================================================
    // Single imports
    // ============================================================

    fn process_single_class_import(
        &self,
        decl: &ImportDeclaration,
        imported_name: &str,
        request: &mut ScopeRequest<'_>,
    ) -> bool {
        if let Some(name) = &request.name {
            if name != imported_name {
                return true;
            }
        }
        if !request.wants_classes() {
            return true;
        }

        let Some(reference) = decl.reference_text() else {
            return true;
        };
        let Some(class_id) = self.symbol_table.resolve_class(reference) else {
            // unresolved import contributes nothing
            return true;
        };
        let Some(class) = self.symbol_table.entity(class_id) else {
            return true;
        };

        // same-package imports are ignored by the compiler; an alias makes
        // the import meaningful again
        if !decl.is_aliased_import() && is_from_same_package(decl, class) {
            return true;
        }

        let context = BindingContext {
            via_import: Some(decl),
        };
        for sub in request.processors.iter_mut() {
            if !(sub.visitor)(class_id, class, &context) {
                return false;
            }
        }
        true
    }

    fn process_single_static_import(
        &self,
        decl: &ImportDeclaration,
        imported_name: &str,
        member_name: &str,
        qualifier_name: &str,
        request: &mut ScopeRequest<'_>,
    ) -> bool {
        let Some(class_id) = self.resolve_qualifier(decl, qualifier_name) else {
            return true;
        };

        let context = BindingContext {
            via_import: Some(decl),
        };
        let names_mapping = paired_synonyms(imported_name, member_name);

        for sub in request.processors.iter_mut() {
            let SubProcessor { name_hint, visitor } = sub;
            let hint = name_hint.as_ref().or(request.name.as_ref());
            for (requested, actual) in &names_mapping {
                if hint.is_some_and(|h| h != requested) {
                    continue;
                }
                let filter = MemberFilter::static_named(actual.clone());
                let keep_going =
                    self.symbol_table
                        .process_members(class_id, &filter, &mut |id, entity| {
                            visitor(id, entity, &context)
                        });
                if !keep_going {
                    return false;
                }
            }
        }
        true
    }

    /// Resolve the class portion of a static import's reference, memoized
    /// on the declaration and keyed on the containing file's structure
    /// version. Racing recomputation is harmless: the result is a pure
    /// function of (declaration, version).
    fn resolve_qualifier(
        &self,
        decl: &ImportDeclaration,
        qualifier_name: &str,
    ) -> Option<EntityId> {
        let version = decl.containing_file().structure_version();
        if let Some(cached) = decl.cached_qualifier(version) {
            return cached;
        }
        let target = self.symbol_table.resolve_class(qualifier_name);
        decl.store_qualifier(version, target);
        target
    }

    // ============================================================
    // On-demand imports
    // ============================================================

    fn process_on_demand_class_import(
        &self,
        decl: &ImportDeclaration,
        request: &mut ScopeRequest<'_>,
    ) -> bool {
        if !request.wants_classes() {
            return true;
        }
        let Some(reference) = decl.reference_text() else {
            return true;
        };
        let Some(package_id) = self.symbol_table.resolve_package(reference) else {
            return true;
        };
        let Some(package) = self.symbol_table.entity(package_id) else {
            return true;
        };
        // a wildcard import of the file's own package adds nothing
        if package.qualified_name() == decl.containing_file().package_name() {
            return true;
        }

        let context = BindingContext {
            via_import: Some(decl),
        };
        for sub in request.processors.iter_mut() {
            let SubProcessor { name_hint, visitor } = sub;
            let hint = name_hint.as_ref().or(request.name.as_ref());
            let keep_going = self.symbol_table.process_package_declarations(
                package_id,
                hint.map(SmolStr::as_str),
                &mut |id, entity| visitor(id, entity, &context),
            );
            if !keep_going {
                return false;
            }
        }
        true
    }

    fn process_on_demand_static_import(
        &self,
        decl: &ImportDeclaration,
        request: &mut ScopeRequest<'_>,
    ) -> bool {
        let Some(reference) = decl.reference_text() else {
            return true;
        };
        let Some(class_id) = self.symbol_table.resolve_class(reference) else {
            return true;
        };

        let context = BindingContext {
            via_import: Some(decl),
        };
        let kinds = request.kinds;
        for sub in request.processors.iter_mut() {
            let SubProcessor { name_hint, visitor } = sub;
            let filter = MemberFilter {
                static_only: true,
                name: name_hint.clone().or_else(|| request.name.clone()),
            };
            let keep_going =
                self.symbol_table
                    .process_members(class_id, &filter, &mut |id, entity| {
                        if !kinds.is_none_or(|k| k.contains(entity.declaration_kind())) {
                            return true;
                        }
                        visitor(id, entity, &context)
                    });
            if !keep_going {
                return false;
            }
        }
        true
    }
}

// ============================================================
// Entry gates
// ============================================================

/// Cheap pre-filter: could this import ever satisfy the request's kind
/// hint? Not the final authority; the member enumerations do exact kind
/// matching.
fn should_process(request: &ScopeRequest<'_>) -> bool {
    match request.kinds {
        None => true,
        Some(kinds) => kinds.intersects(DeclarationKinds::IMPORTABLE),
    }
}

/// An import must not resolve against itself: lookups originating inside
/// this declaration's own reference are rejected up front.
fn is_ancestor(decl: &ImportDeclaration, request: &ScopeRequest<'_>) -> bool {
    match (decl.reference_range(), request.origin) {
        (Some(range), Some(origin)) => range.contains(origin),
        _ => false,
    }
}

/// The compiler ignores a non-aliased import of a class from the file's own
/// package. The comparison is textual against `package.SimpleName`, so
/// nested classes never match, and files in the default package are never
/// suppressed.
fn is_from_same_package(decl: &ImportDeclaration, class: &Entity) -> bool {
    let package_name = decl.containing_file().package_name();
    if package_name.is_empty() {
        return false;
    }
    let assumed = format!("{package_name}.{}", class.name());
    assumed == class.qualified_name()
}
