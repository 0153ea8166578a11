//! Kiln build orchestration
//!
//! Sequences named build operations over an immutable configuration
//! snapshot:
//! - Run parameters captured once per invocation and threaded through
//!   every operation
//! - Branch-conditioned version rules and package-storage endpoint
//!   selection
//! - Collaborator trait seams for the external compiler, restorer, cleaner
//!   and package services
//! - The default build space (variant catalog + manager registrations)
//! - The operation pipeline with explicit dependency ordering
//!
//! The configuration core lives in `kiln-config`; this crate wires it to a
//! concrete build space and drives it.

pub mod branch;
pub mod error;
pub mod managers;
pub mod params;
pub mod pipeline;
pub mod settings;

// Re-export main types
pub use branch::{
    select_storage_endpoint, BranchProvider, BranchRules, EndpointNames, EnvReader, FixedBranch,
    PackageAction, ProcessEnv, StorageEndpoint,
};
pub use error::{BuildError, BuildResult};
pub use managers::{kind, Cleaner, Collaborators, Compiler, Deployer, Restorer};
pub use params::{parse_flag, RunParams};
pub use pipeline::{Operation, Pipeline};
pub use settings::{Settings, LOCAL_MANIFEST_FILE, MANIFEST_FILE, RELEASE_VARIANTS};
