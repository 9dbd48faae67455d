use smol_str::SmolStr;

use crate::semantic::import::ImportDeclaration;

/// The four shapes an import declaration can take, carrying only the
/// fields that shape needs. Produced once per lookup by [`classify`]; the
/// driver matches on it exhaustively instead of re-testing flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportKind {
    /// `import pkg.Foo` / `import pkg.Foo as Bar`
    ClassSingle { imported_name: SmolStr },
    /// `import pkg.*`
    ClassOnDemand,
    /// `import static pkg.Foo.bar` / `import static pkg.Foo.bar as baz`
    StaticSingle {
        /// Name the use site asks for: alias, or the member name itself.
        imported_name: SmolStr,
        /// The referenced member's own name (last reference segment).
        member_name: SmolStr,
        /// The class portion of the reference.
        qualifier_name: SmolStr,
    },
    /// `import static pkg.Foo.*`
    StaticOnDemand,
}

/// Derive the shape of `decl`.
///
/// `None` means the declaration has nothing usable to contribute: no
/// reference at all, or a static single import without a qualifier. The
/// caller treats that as vacuous success, not as an error.
pub fn classify(decl: &ImportDeclaration) -> Option<ImportKind> {
    decl.reference_text()?;

    if decl.is_on_demand() {
        return Some(if decl.is_static() {
            ImportKind::StaticOnDemand
        } else {
            ImportKind::ClassOnDemand
        });
    }

    let imported_name = decl.imported_name()?;
    if decl.is_static() {
        Some(ImportKind::StaticSingle {
            imported_name,
            member_name: decl.member_reference_name()?,
            qualifier_name: decl.qualifier_name()?,
        })
    } else {
        Some(ImportKind::ClassSingle { imported_name })
    }
}
