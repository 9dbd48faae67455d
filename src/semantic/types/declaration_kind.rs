/// The kind of declaration a lookup request is interested in.
///
/// `Variable` and `Package` exist for other lookup clients; an import never
/// contributes them, which is what makes the importable-kind pre-filter in
/// the resolver meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Method,
    Field,
    EnumConst,
    Variable,
    Package,
}

/// A small set of [`DeclarationKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeclarationKinds(u8);

impl DeclarationKinds {
    pub const EMPTY: Self = Self(0);

    /// Every kind an import can contribute to lookup.
    pub const IMPORTABLE: Self = Self::of(&[
        DeclarationKind::Class,
        DeclarationKind::Method,
        DeclarationKind::Field,
        DeclarationKind::EnumConst,
    ]);

    pub const fn single(kind: DeclarationKind) -> Self {
        Self(1 << kind as u8)
    }

    pub const fn of(kinds: &[DeclarationKind]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1 << kinds[i] as u8;
            i += 1;
        }
        Self(bits)
    }

    pub const fn contains(self, kind: DeclarationKind) -> bool {
        self.0 & (1 << kind as u8) != 0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<DeclarationKind> for DeclarationKinds {
    fn from(kind: DeclarationKind) -> Self {
        Self::single(kind)
    }
}
