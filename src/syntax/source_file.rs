use std::sync::atomic::{AtomicU64, Ordering};

use smol_str::SmolStr;

/// The containing file of an import declaration.
///
/// Only the two facts the resolver needs are modeled: the file's declared
/// package name, and a monotonic structure version advanced on every
/// structural edit. Declarations key their qualifier cache on the version,
/// so bumping it invalidates every memo owned by this file's declarations.
#[derive(Debug, Default)]
pub struct SourceFile {
    package_name: SmolStr,
    structure_version: AtomicU64,
}

impl SourceFile {
    /// A file in the given package. The empty string is the default package.
    pub fn new(package_name: impl Into<SmolStr>) -> Self {
        Self {
            package_name: package_name.into(),
            structure_version: AtomicU64::new(0),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn structure_version(&self) -> u64 {
        self.structure_version.load(Ordering::Acquire)
    }

    /// Advance the structure version. Called whenever the file's syntactic
    /// structure changes; redundant recomputation downstream is harmless.
    pub fn bump_structure_version(&self) {
        self.structure_version.fetch_add(1, Ordering::Release);
    }
}
