use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kiln_build::{BranchProvider, FixedBranch, Operation, Pipeline, RunParams, Settings};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

mod echo;

/// Kiln build orchestrator.
///
/// Merges the project manifests in the build-space root, resolves the
/// manager bundles for the requested variant and runs the named operation
/// with its dependencies.
///
/// EXAMPLES:
///     kiln compile                          Compile the default variant
///     kiln compile --variant Release_x64    Compile a specific variant
///     kiln deploy --branch origin/master    Package both Release builds
///     kiln clean --log-level debug          Clean with debug logging
///
/// ENVIRONMENT VARIABLES:
///     BRANCH_NAME    Current source-control branch (CI sets this)
#[derive(Parser)]
#[command(name = "kiln")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Build variant to operate on
    #[arg(long, global = true, default_value = "Debug_x64")]
    variant: String,

    /// Logging level (debug, verbose, head or info)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Force build of projects ("true" or "false")
    #[arg(long, global = true, default_value = "false")]
    force_build: String,

    /// Current source-control branch
    #[arg(long, global = true, env = "BRANCH_NAME", default_value = "master")]
    branch: String,

    /// Build-space root containing kiln.json
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set build constants for the run
    SetBuildInfo,
    /// Restore package dependencies
    Restore,
    /// Compile the project set for the selected variant
    Compile,
    /// Delete build results for the selected variant
    Clean,
    /// Compile every project in both Release variants
    CompileAllRelease,
    /// Create packages from the Release builds
    Deploy,
}

impl Commands {
    fn operation(&self) -> Operation {
        match self {
            Self::SetBuildInfo => Operation::SetBuildInfo,
            Self::Restore => Operation::Restore,
            Self::Compile => Operation::Compile,
            Self::Clean => Operation::Clean,
            Self::CompileAllRelease => Operation::CompileAllRelease,
            Self::Deploy => Operation::Deploy,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let branch = FixedBranch::new(cli.branch).current_branch();
    let settings = Settings::load(&cli.root, &branch)
        .with_context(|| format!("Failed to load build space from {}", cli.root.display()))?;
    let params = RunParams::new(cli.variant, &cli.force_build, branch);
    let collaborators = echo::collaborators();

    let operation = cli.command.operation();
    Pipeline::new(&settings, &collaborators, params)
        .run(operation)
        .with_context(|| format!("Operation '{operation}' failed"))?;
    Ok(())
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(level_filter(level))
        .with_target(false)
        .init();
}

fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "debug" => LevelFilter::DEBUG,
        "verbose" => LevelFilter::TRACE,
        "head" => LevelFilter::WARN,
        _ => LevelFilter::INFO,
    }
}
