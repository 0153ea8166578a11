//! Branch-conditioned rules
//!
//! Derives version-rule branch names and package-storage endpoint selection
//! from the current branch. Matching is a case-insensitive suffix check so
//! namespaced branches like `origin/master` are recognized as master while
//! unrelated branches fall back to the canonical literals.

use std::collections::HashMap;
use std::env;

/// Branch names the version manager should treat as canonical
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRules {
    /// Branch recognized as develop
    pub develop_name: String,
    /// Branch recognized as master
    pub master_name: String,
    /// Branch recognized as release
    pub release_name: String,
}

impl BranchRules {
    /// Derive rules from the current branch
    ///
    /// For each canonical name, the rule carries the actual branch string
    /// when the branch ends with that name (case-insensitive, prefix
    /// preserved) and the canonical literal otherwise.
    pub fn derive(branch: &str) -> Self {
        Self {
            develop_name: matched_or_canonical(branch, "develop"),
            master_name: matched_or_canonical(branch, "master"),
            release_name: matched_or_canonical(branch, "release"),
        }
    }
}

fn matched_or_canonical(branch: &str, canonical: &str) -> String {
    if ends_with_ignore_case(branch, canonical) {
        branch.to_string()
    } else {
        canonical.to_string()
    }
}

fn ends_with_ignore_case(value: &str, suffix: &str) -> bool {
    value.to_lowercase().ends_with(&suffix.to_lowercase())
}

/// Action a package operation performs against storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageAction {
    /// Push a package to the feed
    Publish,
    /// Pull a previously pushed package back
    Reclaim,
    /// Remove a package from the feed
    Delete,
}

/// Selected storage endpoint
///
/// Values come from named environment variables; `None` means the variable
/// is not set in the current environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEndpoint {
    /// Repository URL
    pub url: Option<String>,
    /// Credential for the feed
    pub api_key: Option<String>,
}

/// Names of the environment variables the endpoint selector reads
///
/// The names are deployment configuration; only the selection between them
/// is core logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointNames {
    /// Variable holding the master repository URL
    pub master_repo: String,
    /// Variable holding the development repository URL
    pub dev_repo: String,
    /// Variable holding the feed credential
    pub api_key: String,
}

impl Default for EndpointNames {
    fn default() -> Self {
        Self {
            master_repo: "KILN_MASTER_REPO".to_string(),
            dev_repo: "KILN_DEV_REPO".to_string(),
            api_key: "KILN_API_KEY".to_string(),
        }
    }
}

/// Source-control branch provider
pub trait BranchProvider {
    /// Branch the build runs from
    fn current_branch(&self) -> String;
}

/// Branch provider backed by a value supplied at startup (CI parameter)
#[derive(Debug, Clone)]
pub struct FixedBranch(String);

impl FixedBranch {
    pub fn new(branch: impl Into<String>) -> Self {
        Self(branch.into())
    }
}

impl BranchProvider for FixedBranch {
    fn current_branch(&self) -> String {
        self.0.clone()
    }
}

/// Process environment access
pub trait EnvReader {
    /// Read a variable; `None` when absent
    fn var(&self, name: &str) -> Option<String>;
}

/// Environment reader backed by the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvReader for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl EnvReader for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Select the storage endpoint for a package action
///
/// The master endpoint applies when the branch suffix-matches `master`
/// (case-insensitive) and the action is neither reclaim nor delete;
/// everything else goes to the development endpoint. The credential variable
/// is shared across both endpoints.
pub fn select_storage_endpoint(
    action: PackageAction,
    branch: &str,
    names: &EndpointNames,
    env: &dyn EnvReader,
) -> StorageEndpoint {
    let is_master = ends_with_ignore_case(branch, "master")
        && !matches!(action, PackageAction::Reclaim | PackageAction::Delete);
    let url_var = if is_master {
        &names.master_repo
    } else {
        &names.dev_repo
    };
    StorageEndpoint {
        url: env.var(url_var),
        api_key: env.var(&names.api_key),
    }
}
