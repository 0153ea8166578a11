//! Operation pipeline
//!
//! Named operations with explicit dependency ordering. `set-build-info` runs
//! before everything else; `deploy` additionally requires the all-release
//! compile. Dependencies execute before dependents, each operation at most
//! once, and a failing operation aborts the run before its dependents start.

use crate::error::BuildResult;
use crate::managers::{kind, Collaborators};
use crate::params::RunParams;
use crate::settings::{Settings, RELEASE_VARIANTS};
use std::fmt;
use tracing::{debug, info};

/// A named build operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Capture run parameters and validate the requested variant
    SetBuildInfo,
    /// Restore package dependencies
    Restore,
    /// Compile the selected variant
    Compile,
    /// Delete build results for the selected variant
    Clean,
    /// Compile every project in both Release variants
    CompileAllRelease,
    /// Create packages from the Release builds
    Deploy,
}

impl Operation {
    /// Operation name as used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetBuildInfo => "set-build-info",
            Self::Restore => "restore",
            Self::Compile => "compile",
            Self::Clean => "clean",
            Self::CompileAllRelease => "compile-all-release",
            Self::Deploy => "deploy",
        }
    }

    /// Operations that must complete before this one
    pub fn depends_on(&self) -> &'static [Operation] {
        match self {
            Self::SetBuildInfo => &[],
            Self::Restore | Self::Compile | Self::Clean | Self::CompileAllRelease => {
                &[Self::SetBuildInfo]
            }
            Self::Deploy => &[Self::SetBuildInfo, Self::CompileAllRelease],
        }
    }

    /// Full execution order for this operation
    ///
    /// Depth-first over dependencies; every operation appears once, before
    /// anything that depends on it.
    pub fn execution_order(self) -> Vec<Operation> {
        fn visit(op: Operation, order: &mut Vec<Operation>) {
            if order.contains(&op) {
                return;
            }
            for &dep in op.depends_on() {
                visit(dep, order);
            }
            order.push(op);
        }
        let mut order = Vec::new();
        visit(self, &mut order);
        order
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sequences operations against one immutable build space
pub struct Pipeline<'a> {
    settings: &'a Settings,
    collaborators: &'a Collaborators,
    params: RunParams,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline over a configured build space
    pub fn new(
        settings: &'a Settings,
        collaborators: &'a Collaborators,
        params: RunParams,
    ) -> Self {
        Self {
            settings,
            collaborators,
            params,
        }
    }

    /// Run an operation and everything it depends on
    pub fn run(&self, target: Operation) -> BuildResult<()> {
        for op in target.execution_order() {
            debug!(operation = op.name(), "starting");
            self.execute(op)?;
        }
        Ok(())
    }

    fn execute(&self, op: Operation) -> BuildResult<()> {
        match op {
            Operation::SetBuildInfo => self.set_build_info(),
            Operation::Restore => {
                let bundle = self
                    .settings
                    .resolve(kind::RESTORER, &self.params.variant)?;
                self.collaborators
                    .restorer
                    .restore(bundle, &self.settings.projects, &self.params.variant)
            }
            Operation::Compile => self.compile(&self.params.variant),
            Operation::Clean => {
                let bundle = self.settings.resolve(kind::CLEANER, &self.params.variant)?;
                self.collaborators
                    .cleaner
                    .clean(bundle, &self.settings.projects, &self.params.variant)
            }
            Operation::CompileAllRelease => {
                for variant in RELEASE_VARIANTS {
                    self.compile(variant)?;
                }
                Ok(())
            }
            Operation::Deploy => {
                let bundle = self
                    .settings
                    .resolve(kind::PACKAGE_MANAGER, &self.params.variant)?;
                // Packages are only created locally; publishing is a separate
                // pipeline stage on the CI side.
                self.collaborators.deployer.deploy(
                    bundle,
                    &self.settings.projects,
                    &self.params.variant,
                    true,
                )
            }
        }
    }

    fn set_build_info(&self) -> BuildResult<()> {
        self.settings.catalog.get(&self.params.variant)?;
        info!(
            variant = %self.params.variant,
            force_build = self.params.force_build,
            branch = %self.params.branch,
            "build parameters set"
        );
        Ok(())
    }

    fn compile(&self, variant: &str) -> BuildResult<()> {
        let bundle = self.settings.resolve(kind::BUILDER, variant)?;
        self.collaborators.compiler.compile(
            bundle,
            &self.settings.projects,
            variant,
            self.params.force_build,
        )
    }
}
