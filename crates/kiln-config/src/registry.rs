//! Manager registry
//!
//! An append-only list of `(kind, applicable variants, bundle)`
//! registrations. Resolution scans the list in registration order and the
//! last matching registration wins, so a generic all-variant default and
//! later variant-specific specializations coexist under one kind. The rule
//! is strictly order-based, not most-specific-wins: an all-variant
//! registration added after a specific one overrides it.

use crate::bundle::PropertyBundle;
use crate::error::{ConfigError, ConfigResult};
use std::collections::BTreeSet;

/// One registry entry
#[derive(Debug, Clone)]
pub struct ManagerRegistration {
    /// Manager kind this bundle configures
    pub kind: String,
    /// Variants the registration applies to; `None` means all variants
    pub variants: Option<BTreeSet<String>>,
    /// The bundle resolved for matching lookups
    pub bundle: PropertyBundle,
}

impl ManagerRegistration {
    /// Whether this registration matches the given variant
    pub fn applies_to(&self, variant: &str) -> bool {
        match &self.variants {
            Some(set) => set.contains(variant),
            None => true,
        }
    }
}

/// Ordered list of manager registrations
#[derive(Debug, Clone, Default)]
pub struct ManagerRegistry {
    registrations: Vec<ManagerRegistration>,
}

impl ManagerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundle that applies to every variant
    pub fn register_all(&mut self, kind: impl Into<String>, bundle: PropertyBundle) {
        self.registrations.push(ManagerRegistration {
            kind: kind.into(),
            variants: None,
            bundle,
        });
    }

    /// Register a bundle for an explicit set of variants
    pub fn register_for(
        &mut self,
        kind: impl Into<String>,
        variants: &[&str],
        bundle: PropertyBundle,
    ) {
        self.registrations.push(ManagerRegistration {
            kind: kind.into(),
            variants: Some(variants.iter().map(|v| v.to_string()).collect()),
            bundle,
        });
    }

    /// Resolve the effective bundle for `(kind, variant)`
    ///
    /// Scans in registration order; the last matching registration wins.
    /// Zero matches is a hard error: there is no implicit default bundle.
    pub fn resolve(&self, kind: &str, variant: &str) -> ConfigResult<&PropertyBundle> {
        self.registrations
            .iter()
            .filter(|r| r.kind == kind && r.applies_to(variant))
            .last()
            .map(|r| &r.bundle)
            .ok_or_else(|| ConfigError::manager_not_found(kind, variant))
    }

    /// All registrations, in registration order
    pub fn registrations(&self) -> &[ManagerRegistration] {
        &self.registrations
    }

    /// Number of registrations
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bundle(name: &str) -> PropertyBundle {
        PropertyBundle::new("builder", name)
    }

    #[test]
    fn specific_registration_overrides_earlier_all() {
        let mut registry = ManagerRegistry::new();
        registry.register_all("builder", bundle("generic"));
        registry.register_for("builder", &["Release_x64"], bundle("release"));

        assert_eq!(registry.resolve("builder", "Release_x64").unwrap().name(), "release");
        assert_eq!(registry.resolve("builder", "Debug_x64").unwrap().name(), "generic");
    }

    #[test]
    fn later_all_registration_overrides_earlier_specific() {
        let mut registry = ManagerRegistry::new();
        registry.register_for("builder", &["Release_x64"], bundle("release"));
        registry.register_all("builder", bundle("generic"));

        // Last match in registration order wins, not most-specific.
        assert_eq!(registry.resolve("builder", "Release_x64").unwrap().name(), "generic");
    }

    #[test]
    fn kinds_resolve_independently() {
        let mut registry = ManagerRegistry::new();
        registry.register_all("builder", bundle("generic"));
        registry.register_all("cleaner", PropertyBundle::new("cleaner", "cleaner_main"));

        assert_eq!(registry.resolve("cleaner", "Debug_x64").unwrap().name(), "cleaner_main");
        assert_eq!(registry.resolve("builder", "Debug_x64").unwrap().name(), "generic");
    }

    #[test]
    fn unmatched_kind_is_an_error() {
        let registry = ManagerRegistry::new();
        let err = registry.resolve("builder", "Debug_x64").unwrap_err();
        assert!(matches!(err, ConfigError::ManagerNotFound { .. }));
    }

    #[test]
    fn unmatched_variant_is_an_error() {
        let mut registry = ManagerRegistry::new();
        registry.register_for("builder", &["Release_x64"], bundle("release"));
        let err = registry.resolve("builder", "Debug_x64").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ManagerNotFound { kind, variant }
                if kind == "builder" && variant == "Debug_x64"
        ));
    }
}
