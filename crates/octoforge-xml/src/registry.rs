//! The name → kind mapping the decoder dispatches on.

use std::collections::BTreeMap;

use octoforge_model::{Kind, RecordKind, ScalarKind};

/// A registry of the kinds the decoder knows how to build.
///
/// The registry is an explicit value threaded through the decoder's entry
/// points rather than shared mutable state. Endpoints that need to suppress
/// a binding for one call decode against a [`KindRegistry::without`] copy;
/// the caller's registry is never touched, so the known-kind set is
/// restored unconditionally by construction, on success and failure alike.
///
/// Not thread-safe by design; the client's call pattern is single-threaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindRegistry {
    kinds: BTreeMap<String, Kind>,
}

impl KindRegistry {
    /// A registry seeded with the scalar kinds, `array`, and every record
    /// kind.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self {
            kinds: BTreeMap::new(),
        };
        for scalar in ScalarKind::ALL {
            registry.register(scalar.wire_name(), Kind::Scalar(scalar));
        }
        registry.register("array", Kind::Array);
        for record in RecordKind::ALL {
            registry.register(record.wire_name(), Kind::Record(record));
        }
        registry
    }

    /// Bind a kind to a name. Later registrations silently replace earlier
    /// ones.
    pub fn register(&mut self, name: impl Into<String>, kind: Kind) {
        self.kinds.insert(name.into(), kind);
    }

    /// Remove a binding, returning the kind it held.
    pub fn unregister(&mut self, name: &str) -> Option<Kind> {
        self.kinds.remove(name)
    }

    /// Look up a kind by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Kind> {
        self.kinds.get(name).copied()
    }

    /// Whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// The sorted names of all registered kinds, for diagnostics.
    #[must_use]
    pub fn known_kinds(&self) -> Vec<String> {
        self.kinds.keys().cloned().collect()
    }

    /// A copy of this registry with one binding shadowed out.
    #[must_use]
    pub fn without(&self, name: &str) -> Self {
        let mut shadowed = self.clone();
        shadowed.unregister(name);
        shadowed
    }
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
