//! Manager kinds and collaborator seams
//!
//! Manager kinds are opaque string identifiers; the constants below cover
//! the default build space, and new kinds register like existing ones. The
//! traits are the boundary to the external build services: each receives the
//! bundle the registry resolved for its kind plus the variant and project
//! set, and the core never looks inside what they do with them.

use crate::error::BuildResult;
use kiln_config::{ProjectSet, PropertyBundle};

/// Manager kind identifiers used by the default build space
pub mod kind {
    pub const BUILDER: &str = "builder";
    pub const PACKAGE_MANAGER: &str = "package_manager";
    pub const VERSION_MANAGER: &str = "version_manager";
    pub const HASH_GENERATOR: &str = "hash_generator";
    pub const RESTORER: &str = "restorer";
    pub const CLEANER: &str = "cleaner";
    pub const CLEANER_UNITS: &str = "cleaner_units";
    pub const PROJECT_CACHE: &str = "project_cache";
}

/// Compiles the project set for one variant
pub trait Compiler {
    fn compile(
        &self,
        bundle: &PropertyBundle,
        projects: &ProjectSet,
        variant: &str,
        force: bool,
    ) -> BuildResult<()>;
}

/// Restores package dependencies for one variant
pub trait Restorer {
    fn restore(
        &self,
        bundle: &PropertyBundle,
        projects: &ProjectSet,
        variant: &str,
    ) -> BuildResult<()>;
}

/// Deletes build results for one variant
pub trait Cleaner {
    fn clean(
        &self,
        bundle: &PropertyBundle,
        projects: &ProjectSet,
        variant: &str,
    ) -> BuildResult<()>;
}

/// Creates and publishes packages for one variant
pub trait Deployer {
    fn deploy(
        &self,
        bundle: &PropertyBundle,
        projects: &ProjectSet,
        variant: &str,
        only_packages: bool,
    ) -> BuildResult<()>;
}

/// The external build services one pipeline run drives
pub struct Collaborators {
    pub compiler: Box<dyn Compiler>,
    pub restorer: Box<dyn Restorer>,
    pub cleaner: Box<dyn Cleaner>,
    pub deployer: Box<dyn Deployer>,
}
