//! Property bundles
//!
//! A bundle is an immutable named settings map for one manager-kind
//! instance. Derivation copies a base bundle's fields into a new bundle and
//! applies overrides; the base is never touched, so several derived bundles
//! can share one base without observing each other's additions.

use serde_json::Value;
use std::collections::BTreeMap;

/// Immutable settings map for one manager-kind instance
///
/// Field values are [`serde_json::Value`], so a field may be a scalar or a
/// nested map. Fields are only set at construction time via [`with`] chains;
/// once a bundle is handed out it is a persistent value.
///
/// [`with`]: PropertyBundle::with
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyBundle {
    kind: String,
    name: String,
    fields: BTreeMap<String, Value>,
}

impl PropertyBundle {
    /// Create an empty bundle for the given manager kind
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set a field, consuming and returning the bundle
    ///
    /// A field set twice keeps the later value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Derive a new bundle from this one
    ///
    /// The derived bundle starts with a copy of this bundle's kind and
    /// fields under a new name; `with` calls on the result add or override
    /// fields without affecting this bundle.
    pub fn derive(&self, name: impl Into<String>) -> Self {
        Self {
            kind: self.kind.clone(),
            name: name.into(),
            fields: self.fields.clone(),
        }
    }

    /// Manager kind this bundle configures
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Bundle name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up a string field
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Look up a boolean field
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// All fields
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn base() -> PropertyBundle {
        PropertyBundle::new("builder", "builder_common")
            .with("auto_clean", true)
            .with("builder_version", "23.0")
    }

    #[test]
    fn override_wins_over_inherited_field() {
        let derived = base().derive("builder_release").with("auto_clean", false);
        assert_eq!(derived.get_bool("auto_clean"), Some(false));
        assert_eq!(derived.get_str("builder_version"), Some("23.0"));
        assert_eq!(derived.name(), "builder_release");
        assert_eq!(derived.kind(), "builder");
    }

    #[test]
    fn derivation_does_not_mutate_base() {
        let common = base();
        let _release = common.derive("builder_release").with("optimize", true);
        assert_eq!(common.get("optimize"), None);
        assert_eq!(common.get_bool("auto_clean"), Some(true));
        assert_eq!(common.name(), "builder_common");
    }

    #[test]
    fn sibling_derivations_are_independent() {
        let common = base();
        let release = common.derive("builder_release").with("optimize", true);
        let debug = common.derive("builder_debug").with("debug_info", 2);
        assert_eq!(release.get("debug_info"), None);
        assert_eq!(debug.get("optimize"), None);
    }

    #[test]
    fn fields_may_be_nested_maps() {
        let bundle = PropertyBundle::new("cleaner", "cleaner_units")
            .with("paths", json!({ "$project:output$": ["*.dcu"] }));
        let paths = bundle.get("paths").unwrap();
        assert_eq!(paths["$project:output$"][0], "*.dcu");
    }
}
