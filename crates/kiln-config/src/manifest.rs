//! Manifest loading and merging
//!
//! A manifest is a JSON file listing project references:
//!
//! ```json
//! {
//!     // optional comment
//!     "projects": ["relative/path/to/project.dproj"]
//! }
//! ```
//!
//! Paths are relative to the manifest's own directory, so override manifests
//! in other directories compose without path rewriting. Merging several
//! manifests yields one deduplicated set of canonical absolute paths.

use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Parsed manifest file
///
/// Unknown keys are tolerated so manifests can carry settings for other
/// tools without breaking project merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Project references, relative to the manifest's directory
    #[serde(default)]
    pub projects: Vec<String>,
}

impl Manifest {
    /// Load a manifest file, tolerating `//` and `/* */` comments
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::manifest_read(path, e))?;
        serde_json::from_str(&strip_comments(&raw))
            .map_err(|e| ConfigError::manifest_parse(path, e))
    }
}

/// Deduplicated set of canonical absolute project paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSet {
    paths: BTreeSet<PathBuf>,
}

impl ProjectSet {
    /// Number of projects in the set
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether the set contains the given canonical path
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Iterate over the canonical paths
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }

    fn insert(&mut self, path: PathBuf) -> bool {
        self.paths.insert(path)
    }
}

/// Merge an ordered sequence of manifest files into one [`ProjectSet`]
///
/// A missing manifest file is skipped silently (optional override files are
/// not errors); a manifest that exists but fails to parse is fatal. Project
/// entries resolve relative to the directory of the manifest that declares
/// them; entries whose file does not exist are skipped. Duplicate canonical
/// paths across manifests collapse to one entry.
pub fn merge_manifests(files: &[PathBuf]) -> ConfigResult<ProjectSet> {
    let mut set = ProjectSet::default();
    for file in files {
        if !file.exists() {
            debug!(manifest = %file.display(), "manifest not present, skipping");
            continue;
        }
        let manifest = Manifest::from_file(file)?;
        let base = file.parent().map(Path::to_path_buf).unwrap_or_default();
        for entry in &manifest.projects {
            let candidate = base.join(entry);
            match dunce::canonicalize(&candidate) {
                Ok(path) => {
                    set.insert(path);
                }
                Err(_) => {
                    trace!(project = %candidate.display(), "project not present, skipping");
                }
            }
        }
    }
    Ok(set)
}

/// Blank out `//` and `/* */` comments outside string literals
///
/// Newlines inside block comments are preserved so parse-error line numbers
/// still point at the original file.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if next == '\n' {
                            out.push('\n');
                        }
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }
    out
}
