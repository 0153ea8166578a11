//! Default build space
//!
//! Builds the variant catalog, the manager registry and the project set for
//! one invocation. Everything here is constructed once at startup and
//! treated as an immutable snapshot afterwards; operations only read it.

use crate::branch::BranchRules;
use crate::error::BuildResult;
use crate::managers::kind;
use kiln_config::{
    merge_manifests, ManagerRegistry, ProjectSet, PropertyBundle, Variant, VariantCatalog,
};
use serde_json::{json, Value};
use std::path::Path;
use tracing::info;

/// Primary manifest file name
pub const MANIFEST_FILE: &str = "kiln.json";

/// Optional local override manifest, merged after the primary one
pub const LOCAL_MANIFEST_FILE: &str = "kiln.local.json";

/// Variants compiled by the deploy pipeline
pub const RELEASE_VARIANTS: [&str; 2] = ["Release_x32", "Release_x64"];

/// Immutable configuration snapshot for one invocation
#[derive(Debug)]
pub struct Settings {
    /// Named build variants
    pub catalog: VariantCatalog,
    /// Manager registrations, resolved per (kind, variant)
    pub registry: ManagerRegistry,
    /// Merged buildable project set
    pub projects: ProjectSet,
}

impl Settings {
    /// Load the build space rooted at `root`
    ///
    /// Merges `kiln.json` and `kiln.local.json` from the root directory and
    /// registers the default variants and manager bundles. The branch feeds
    /// the version-manager rules.
    pub fn load(root: &Path, branch: &str) -> BuildResult<Self> {
        let files = [root.join(MANIFEST_FILE), root.join(LOCAL_MANIFEST_FILE)];
        let projects = merge_manifests(&files)?;
        let catalog = default_catalog()?;
        let registry = default_registry(branch);
        info!(
            projects = projects.len(),
            variants = catalog.len(),
            registrations = registry.len(),
            "build space configured"
        );
        Ok(Self {
            catalog,
            registry,
            projects,
        })
    }

    /// Resolve the effective bundle for `(kind, variant)`
    ///
    /// Fails fast on an unknown variant before consulting the registry.
    pub fn resolve(&self, kind: &str, variant: &str) -> BuildResult<&PropertyBundle> {
        self.catalog.get(variant)?;
        Ok(self.registry.resolve(kind, variant)?)
    }
}

fn default_catalog() -> BuildResult<VariantCatalog> {
    let mut catalog = VariantCatalog::new();
    for (name, configuration, platform) in [
        ("Debug_x64", "Debug", "Win64"),
        ("Release_x64", "Release", "Win64"),
        ("Debug_x32", "Debug", "Win32"),
        ("Release_x32", "Release", "Win32"),
    ] {
        catalog.add(Variant::new(name, configuration, platform))?;
    }
    Ok(catalog)
}

fn default_registry(branch: &str) -> ManagerRegistry {
    let mut registry = ManagerRegistry::new();

    let builder_common = PropertyBundle::new(kind::BUILDER, "builder_common")
        .with("builder_version", "23.0")
        .with(
            "msbuild_path",
            "C:/Windows/Microsoft.NET/Framework/v4.0.30319/MSBuild.exe",
        )
        .with(
            "env_bds_path",
            "C:/Program files (x86)/embarcadero/studio/23.0",
        )
        .with(
            "rsvars_path",
            "C:/Program files (x86)/embarcadero/studio/23.0/bin/rsvars.bat",
        )
        .with("auto_clean", true)
        .with("build_params", build_params(json!({})));

    let builder_release = builder_common.derive("builder_release").with(
        "build_params",
        build_params(json!({
            "/p:DCC_Optimize": "true",
            "/p:DCC_GenerateStackFrames": "true",
            "/p:DCC_DebugInformation": "0",
            "/p:DCC_DebugDCUs": "false",
            "/p:DCC_LocalDebugSymbols": "false",
            "/p:DCC_SymbolReferenceInfo": "0",
            "/p:DCC_IntegerOverflowCheck": "false",
            "/p:DCC_RangeChecking": "false",
        })),
    );

    let builder_debug = builder_common.derive("builder_debug").with(
        "build_params",
        build_params(json!({
            "/p:DCC_Optimize": "false",
            "/p:DCC_GenerateStackFrames": "true",
            "/p:DCC_DebugInformation": "2",
            "/p:DCC_DebugDCUs": "true",
            "/p:DCC_LocalDebugSymbols": "true",
            "/p:DCC_SymbolReferenceInfo": "2",
            "/p:DCC_IntegerOverflowCheck": "true",
            "/p:DCC_RangeChecking": "true",
        })),
    );

    let rules = BranchRules::derive(branch);
    let version_manager = PropertyBundle::new(kind::VERSION_MANAGER, "version_manager_common")
        .with("depth_search", 2)
        .with("pull_request_branch_prefix", "c-")
        .with("develop_branch_name", rules.develop_name)
        .with("master_branch_name", rules.master_name)
        .with("release_branch_name", rules.release_name);

    let package_manager = PropertyBundle::new(kind::PACKAGE_MANAGER, "package_manager_master")
        .with("master_repo_var", "KILN_MASTER_REPO")
        .with("dev_repo_var", "KILN_DEV_REPO")
        .with("api_key_var", "KILN_API_KEY");

    let hash_generator = PropertyBundle::new(kind::HASH_GENERATOR, "hash_generator_main")
        .with("hash_algorithm", "sha256");

    let restorer =
        PropertyBundle::new(kind::RESTORER, "restorer_main").with("deps", json!({}));

    let cleaner = PropertyBundle::new(kind::CLEANER, "cleaner_default_main")
        .with("all_build_results", true);

    let cleaner_units = PropertyBundle::new(kind::CLEANER_UNITS, "cleaner_units_main")
        .with("all_build_results", true)
        .with("paths", json!({ "$project:output_dcu$": ["*.dcu"] }));

    let project_cache = PropertyBundle::new(kind::PROJECT_CACHE, "project_cache_main")
        .with("temp_dir", "./hash")
        .with("version_manager", "version_manager_common")
        .with("package_manager", "package_manager_master");

    registry.register_for(kind::BUILDER, &["Release_x64", "Release_x32"], builder_release);
    registry.register_for(kind::BUILDER, &["Debug_x64", "Debug_x32"], builder_debug);
    registry.register_all(kind::PACKAGE_MANAGER, package_manager);
    registry.register_all(kind::VERSION_MANAGER, version_manager);
    registry.register_all(kind::HASH_GENERATOR, hash_generator);
    registry.register_all(kind::RESTORER, restorer);
    registry.register_all(kind::CLEANER, cleaner);
    registry.register_all(kind::CLEANER_UNITS, cleaner_units);
    registry.register_all(kind::PROJECT_CACHE, project_cache);

    registry
}

/// Shared msbuild parameters plus per-configuration overrides
fn build_params(overrides: Value) -> Value {
    let mut params = json!({
        "-verbosity": "normal",
        "-consoleloggerparameters": "ErrorsOnly",
        "-nologo": "true",
        "/t:build": "true",
        "/p:DCC_Hints": "false",
        "/p:DCC_MapFile": "3",
        "/p:DCC_AssertionsAtRuntime": "true",
        "/p:DCC_IOChecking": "true",
        "/p:DCC_WriteableConstants": "true",
    });
    if let (Value::Object(base), Value::Object(extra)) = (&mut params, overrides) {
        base.extend(extra);
    }
    params
}
