//! Kiln configuration core
//!
//! Provides the configuration model for kiln builds:
//! - Manifest merging (kiln.json + override files) into one project set
//! - The variant catalog (named configuration × platform combinations)
//! - Immutable property bundles with derive-then-override construction
//! - The manager registry resolving effective bundles per (kind, variant)
//!
//! # Resolution semantics
//!
//! Manager registrations are kept in registration order and resolution is
//! "last matching registration wins". Registering a generic bundle for all
//! variants and then a specialized bundle for a subset gives the subset the
//! specialized bundle and everything else the generic one.
//!
//! # Example
//!
//! ```
//! use kiln_config::{ManagerRegistry, PropertyBundle};
//!
//! let common = PropertyBundle::new("builder", "builder_common").with("auto_clean", true);
//! let release = common.derive("builder_release").with("optimize", true);
//!
//! let mut registry = ManagerRegistry::new();
//! registry.register_all("builder", common);
//! registry.register_for("builder", &["Release_x64", "Release_x32"], release);
//!
//! let bundle = registry.resolve("builder", "Release_x64").unwrap();
//! assert_eq!(bundle.name(), "builder_release");
//! ```

pub mod bundle;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod variant;

// Re-export main types
pub use bundle::PropertyBundle;
pub use error::{ConfigError, ConfigResult};
pub use manifest::{merge_manifests, Manifest, ProjectSet};
pub use registry::{ManagerRegistration, ManagerRegistry};
pub use variant::{configuration_of, Variant, VariantCatalog, NODE_CONFIG, NODE_PLATFORM};
