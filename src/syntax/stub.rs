use smol_str::SmolStr;

/// Precomputed index entry for an import statement.
///
/// The fast path: when the containing file has been indexed, declarations
/// are built from stubs without touching the statement text again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportStub {
    /// Dotted reference text, `*` excluded. `None` for unparsable imports.
    pub reference_text: Option<SmolStr>,
    pub alias_name: Option<SmolStr>,
    pub is_static: bool,
    pub is_on_demand: bool,
}

impl ImportStub {
    pub fn new(reference_text: impl Into<SmolStr>) -> Self {
        Self {
            reference_text: Some(reference_text.into()),
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<SmolStr>) -> Self {
        self.alias_name = Some(alias.into());
        self
    }

    pub fn static_import(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn on_demand(mut self) -> Self {
        self.is_on_demand = true;
        self
    }
}
