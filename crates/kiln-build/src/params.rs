//! Run parameters
//!
//! The variant, force-build flag and branch name for one invocation,
//! captured once and threaded through every operation. Kept as an explicit
//! value rather than process-wide state so concurrent variant builds can
//! each hold their own copy.

/// Parameters for one build invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParams {
    /// Variant name operations act on
    pub variant: String,
    /// Rebuild projects even when cached results exist
    pub force_build: bool,
    /// Source-control branch the build runs from
    pub branch: String,
}

impl RunParams {
    /// Create run parameters, decoding the string-encoded force flag
    pub fn new(
        variant: impl Into<String>,
        force_build: &str,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            variant: variant.into(),
            force_build: parse_flag(force_build),
            branch: branch.into(),
        }
    }
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            variant: "Debug_x64".to_string(),
            force_build: false,
            branch: "master".to_string(),
        }
    }
}

/// Decode a string-encoded boolean parameter
pub fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("true"));
        assert!(parse_flag("True"));
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn defaults() {
        let params = RunParams::default();
        assert_eq!(params.variant, "Debug_x64");
        assert!(!params.force_build);
        assert_eq!(params.branch, "master");
    }
}
