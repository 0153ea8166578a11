//! Logging stand-ins for the external build services
//!
//! The real compiler, restorer, cleaner and package manager live outside
//! this repository. These implementations log the bundle each operation
//! resolved and succeed, which is enough to drive and verify the
//! orchestration itself.

use kiln_build::{BuildResult, Cleaner, Collaborators, Compiler, Deployer, Restorer};
use kiln_config::{ProjectSet, PropertyBundle};
use tracing::info;

struct EchoCompiler;

impl Compiler for EchoCompiler {
    fn compile(
        &self,
        bundle: &PropertyBundle,
        projects: &ProjectSet,
        variant: &str,
        force: bool,
    ) -> BuildResult<()> {
        info!(
            bundle = bundle.name(),
            variant,
            projects = projects.len(),
            force,
            "compile"
        );
        Ok(())
    }
}

struct EchoRestorer;

impl Restorer for EchoRestorer {
    fn restore(
        &self,
        bundle: &PropertyBundle,
        projects: &ProjectSet,
        variant: &str,
    ) -> BuildResult<()> {
        info!(bundle = bundle.name(), variant, projects = projects.len(), "restore");
        Ok(())
    }
}

struct EchoCleaner;

impl Cleaner for EchoCleaner {
    fn clean(
        &self,
        bundle: &PropertyBundle,
        projects: &ProjectSet,
        variant: &str,
    ) -> BuildResult<()> {
        info!(bundle = bundle.name(), variant, projects = projects.len(), "clean");
        Ok(())
    }
}

struct EchoDeployer;

impl Deployer for EchoDeployer {
    fn deploy(
        &self,
        bundle: &PropertyBundle,
        projects: &ProjectSet,
        variant: &str,
        only_packages: bool,
    ) -> BuildResult<()> {
        info!(
            bundle = bundle.name(),
            variant,
            projects = projects.len(),
            only_packages,
            "deploy"
        );
        Ok(())
    }
}

/// Collaborator set used by the binary
pub fn collaborators() -> Collaborators {
    Collaborators {
        compiler: Box::new(EchoCompiler),
        restorer: Box::new(EchoRestorer),
        cleaner: Box::new(EchoCleaner),
        deployer: Box::new(EchoDeployer),
    }
}
