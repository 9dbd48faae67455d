use std::sync::Arc;

use parking_lot::Mutex;
use smol_str::SmolStr;
use text_size::TextRange;

use crate::base::is_identifier;
use crate::syntax::{ImportStub, SourceFile, parse_import_text};

use super::symbol_table::EntityId;

/// An `import` declaration.
///
/// Immutable between structural edits of its containing file: the syntax
/// layer rebuilds declarations whenever the file changes, either from a
/// precomputed [`ImportStub`] or by lexing the statement text. A
/// declaration with no usable reference is legal and contributes nothing
/// to lookup.
#[derive(Debug)]
pub struct ImportDeclaration {
    file: Arc<SourceFile>,
    reference_text: Option<SmolStr>,
    /// Span of the reference within the statement; only the on-demand
    /// parse path records one, stubs carry no positions.
    reference_range: Option<TextRange>,
    alias_name: Option<SmolStr>,
    is_static: bool,
    is_on_demand: bool,
    qualifier_memo: Mutex<Option<QualifierMemo>>,
}

/// Memoized result of resolving the qualifier portion of a static import,
/// valid for one structure version of the containing file.
#[derive(Debug, Clone, Copy)]
struct QualifierMemo {
    structure_version: u64,
    target: Option<EntityId>,
}

impl ImportDeclaration {
    /// Build from a precomputed index entry (the fast path).
    pub fn from_stub(file: Arc<SourceFile>, stub: &ImportStub) -> Self {
        let reference_text = stub
            .reference_text
            .clone()
            .filter(|text| !text.is_empty());
        // an alias only makes sense for single imports, and only when it
        // lexes as an identifier
        let alias_name = (!stub.is_on_demand)
            .then(|| stub.alias_name.clone())
            .flatten()
            .filter(|alias| is_identifier(alias));
        Self {
            file,
            reference_text,
            reference_range: None,
            alias_name,
            is_static: stub.is_static,
            is_on_demand: stub.is_on_demand,
            qualifier_memo: Mutex::new(None),
        }
    }

    /// Build by lexing the statement text (the fallback when no stub is
    /// available). Malformed text yields a declaration without a reference,
    /// never an error.
    pub fn parse(file: Arc<SourceFile>, text: &str) -> Self {
        match parse_import_text(text) {
            Some(parts) => Self {
                file,
                reference_text: Some(parts.reference_text),
                reference_range: Some(parts.reference_range),
                alias_name: parts.alias_name,
                is_static: parts.is_static,
                is_on_demand: parts.is_on_demand,
                qualifier_memo: Mutex::new(None),
            },
            None => Self {
                file,
                reference_text: None,
                reference_range: None,
                alias_name: None,
                is_static: false,
                is_on_demand: false,
                qualifier_memo: Mutex::new(None),
            },
        }
    }

    // ============================================================
    // Introspection
    // ============================================================

    pub fn containing_file(&self) -> &SourceFile {
        &self.file
    }

    /// Dotted reference text, star and alias excluded.
    pub fn reference_text(&self) -> Option<&str> {
        self.reference_text.as_deref()
    }

    /// Span of the reference within the statement text, when known.
    pub fn reference_range(&self) -> Option<TextRange> {
        self.reference_range
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias_name.as_deref()
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_on_demand(&self) -> bool {
        self.is_on_demand
    }

    pub fn is_aliased_import(&self) -> bool {
        self.alias_name.is_some()
    }

    /// The name this import binds at the use site: the alias when present,
    /// the reference's last segment otherwise. On-demand imports bind no
    /// single name.
    pub fn imported_name(&self) -> Option<SmolStr> {
        if self.is_on_demand {
            return None;
        }
        if let Some(alias) = &self.alias_name {
            return Some(alias.clone());
        }
        self.reference_text
            .as_deref()
            .map(|reference| SmolStr::new(last_segment(reference)))
    }

    /// Last segment of the reference; for a single static import this is
    /// the referenced member's own name (the alias does not change it).
    pub fn member_reference_name(&self) -> Option<SmolStr> {
        self.reference_text
            .as_deref()
            .map(|reference| SmolStr::new(last_segment(reference)))
    }

    /// The class portion of a static import's reference: everything before
    /// the member segment. `None` when the reference has no qualifier.
    pub fn qualifier_name(&self) -> Option<SmolStr> {
        let reference = self.reference_text.as_deref()?;
        let pos = reference.rfind('.')?;
        Some(SmolStr::new(&reference[..pos]))
    }

    // ============================================================
    // Qualifier memo
    // ============================================================

    /// Cached qualifier target for the given structure version, if the memo
    /// is still valid. `Some(None)` means "resolved to nothing" is cached.
    pub(crate) fn cached_qualifier(&self, structure_version: u64) -> Option<Option<EntityId>> {
        let memo = *self.qualifier_memo.lock();
        memo.filter(|m| m.structure_version == structure_version)
            .map(|m| m.target)
    }

    pub(crate) fn store_qualifier(&self, structure_version: u64, target: Option<EntityId>) {
        *self.qualifier_memo.lock() = Some(QualifierMemo {
            structure_version,
            target,
        });
    }
}

fn last_segment(reference: &str) -> &str {
    match reference.rfind('.') {
        Some(pos) => &reference[pos + 1..],
        None => reference,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::syntax::{ImportStub, SourceFile};

    use super::ImportDeclaration;

    fn file() -> Arc<SourceFile> {
        Arc::new(SourceFile::new("com.example"))
    }

    #[test]
    fn imported_name_prefers_the_alias() {
        let plain =
            ImportDeclaration::from_stub(file(), &ImportStub::new("java.util.List"));
        assert_eq!(plain.imported_name().as_deref(), Some("List"));
        assert!(!plain.is_aliased_import());

        let aliased = ImportDeclaration::from_stub(
            file(),
            &ImportStub::new("java.util.List").with_alias("Seq"),
        );
        assert_eq!(aliased.imported_name().as_deref(), Some("Seq"));
        assert!(aliased.is_aliased_import());
    }

    #[test]
    fn on_demand_import_binds_no_single_name() {
        let decl = ImportDeclaration::from_stub(file(), &ImportStub::new("java.util").on_demand());
        assert_eq!(decl.imported_name(), None);
    }

    #[test]
    fn stub_alias_on_on_demand_import_is_dropped() {
        let stub = ImportStub::new("java.util").on_demand().with_alias("U");
        let decl = ImportDeclaration::from_stub(file(), &stub);
        assert_eq!(decl.alias_name(), None);
    }

    #[test]
    fn stub_alias_that_is_not_an_identifier_is_dropped() {
        let stub = ImportStub::new("pkg.Foo").with_alias("not an ident");
        let decl = ImportDeclaration::from_stub(file(), &stub);
        assert_eq!(decl.alias_name(), None);
        assert_eq!(decl.imported_name().as_deref(), Some("Foo"));
    }

    #[test]
    fn static_member_and_qualifier_split() {
        let decl = ImportDeclaration::from_stub(
            file(),
            &ImportStub::new("pkg.Foo.bar").static_import().with_alias("baz"),
        );
        assert_eq!(decl.imported_name().as_deref(), Some("baz"));
        assert_eq!(decl.member_reference_name().as_deref(), Some("bar"));
        assert_eq!(decl.qualifier_name().as_deref(), Some("pkg.Foo"));
    }

    #[test]
    fn unqualified_static_reference_has_no_qualifier() {
        let decl = ImportDeclaration::from_stub(file(), &ImportStub::new("max").static_import());
        assert_eq!(decl.qualifier_name(), None);
    }

    #[test]
    fn parse_fallback_records_the_reference_span() {
        let decl = ImportDeclaration::parse(file(), "import static pkg.Foo.bar as baz");
        assert!(decl.is_static());
        assert_eq!(decl.reference_text(), Some("pkg.Foo.bar"));
        assert!(decl.reference_range().is_some());
        assert_eq!(decl.alias_name(), Some("baz"));
    }

    #[test]
    fn malformed_text_degrades_to_an_empty_declaration() {
        let decl = ImportDeclaration::parse(file(), "import a..b");
        assert_eq!(decl.reference_text(), None);
        assert_eq!(decl.imported_name(), None);
    }
}
