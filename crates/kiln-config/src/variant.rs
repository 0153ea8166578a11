//! Build variants and the variant catalog
//!
//! A variant names one combination of build configuration and target
//! platform (e.g. `Release_x64` = Release + Win64). Both axes are maps so a
//! variant can carry extra axis values beyond the two standard node keys.

use crate::error::{ConfigError, ConfigResult};
use std::collections::BTreeMap;

/// Standard axis key for the build configuration node
pub const NODE_CONFIG: &str = "config";

/// Standard axis key for the target platform node
pub const NODE_PLATFORM: &str = "platform";

/// A named build variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Variant name, unique within a catalog
    pub name: String,
    /// Configuration axis values
    pub configurations: BTreeMap<String, String>,
    /// Platform axis values
    pub platforms: BTreeMap<String, String>,
}

impl Variant {
    /// Create a variant with one value per axis under the standard node keys
    pub fn new(
        name: impl Into<String>,
        configuration: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        let mut configurations = BTreeMap::new();
        configurations.insert(NODE_CONFIG.to_string(), configuration.into());
        let mut platforms = BTreeMap::new();
        platforms.insert(NODE_PLATFORM.to_string(), platform.into());
        Self {
            name: name.into(),
            configurations,
            platforms,
        }
    }

    /// Configuration value under the standard node key
    pub fn configuration(&self) -> Option<&str> {
        self.configurations.get(NODE_CONFIG).map(String::as_str)
    }

    /// Platform value under the standard node key
    pub fn platform(&self) -> Option<&str> {
        self.platforms.get(NODE_PLATFORM).map(String::as_str)
    }
}

/// Fixed table of named build variants
#[derive(Debug, Clone, Default)]
pub struct VariantCatalog {
    variants: Vec<Variant>,
}

impl VariantCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variant
    ///
    /// Rejects duplicate names and variants missing either axis.
    pub fn add(&mut self, variant: Variant) -> ConfigResult<()> {
        if self.variants.iter().any(|v| v.name == variant.name) {
            return Err(ConfigError::DuplicateVariant(variant.name));
        }
        if variant.configurations.is_empty() {
            return Err(ConfigError::IncompleteVariant {
                name: variant.name,
                axis: "configuration",
            });
        }
        if variant.platforms.is_empty() {
            return Err(ConfigError::IncompleteVariant {
                name: variant.name,
                axis: "platform",
            });
        }
        self.variants.push(variant);
        Ok(())
    }

    /// Look up a variant by name
    ///
    /// An unknown name is a hard error: operations must fail fast rather
    /// than silently default.
    pub fn get(&self, name: &str) -> ConfigResult<&Variant> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| ConfigError::VariantNotFound(name.to_string()))
    }

    /// Iterate over variant names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.name.as_str())
    }

    /// Number of variants
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Map a variant name to its configuration: the text before the first `_`,
/// `"Debug"` if it matches case-insensitively, `"Release"` otherwise
pub fn configuration_of(variant_name: &str) -> &'static str {
    let config = variant_name
        .split('_')
        .next()
        .unwrap_or(variant_name);
    if config.eq_ignore_ascii_case("debug") {
        "Debug"
    } else {
        "Release"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> VariantCatalog {
        let mut catalog = VariantCatalog::new();
        catalog.add(Variant::new("Debug_x64", "Debug", "Win64")).unwrap();
        catalog
            .add(Variant::new("Release_x64", "Release", "Win64"))
            .unwrap();
        catalog
    }

    #[test]
    fn lookup_returns_variant() {
        let catalog = catalog();
        let variant = catalog.get("Release_x64").unwrap();
        assert_eq!(variant.configuration(), Some("Release"));
        assert_eq!(variant.platform(), Some("Win64"));
    }

    #[test]
    fn unknown_variant_is_an_error() {
        let catalog = catalog();
        let err = catalog.get("Release_arm").unwrap_err();
        assert!(matches!(err, ConfigError::VariantNotFound(name) if name == "Release_arm"));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut catalog = catalog();
        let err = catalog
            .add(Variant::new("Debug_x64", "Debug", "Win32"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateVariant(_)));
    }

    #[test]
    fn missing_axis_is_rejected() {
        let mut catalog = VariantCatalog::new();
        let mut variant = Variant::new("Debug_x64", "Debug", "Win64");
        variant.platforms.clear();
        let err = catalog.add(variant).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::IncompleteVariant { axis: "platform", .. }
        ));
    }

    #[test]
    fn configuration_of_variant_name() {
        assert_eq!(configuration_of("Debug_x64"), "Debug");
        assert_eq!(configuration_of("debug_x32"), "Debug");
        assert_eq!(configuration_of("Release_x64"), "Release");
        assert_eq!(configuration_of("Custom_x64"), "Release");
    }
}
