//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "revcheck",
    version,
    about = "Validate a generated PR review document before submission",
    long_about = "Revcheck — checks a review document (body, event, line comments) against the changed-file list and the files on disk, then writes a JSON report.\n\nWith no flags it reads /tmp/review.json and /tmp/files.json and writes /tmp/validation-errors.json.\n\nConfiguration precedence: CLI > revcheck.toml > defaults.",
    after_help = "Examples:\n  revcheck\n  revcheck --review out/review.json --files out/files.json --output human\n  REVCHECK_LOG=debug revcheck --report reports/errors.json"
)]
/// Top-level CLI options. Every flag is optional.
pub struct Cli {
    #[arg(long, help = "Repository root used to resolve comment paths (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Path to the review document (default: /tmp/review.json)")]
    pub review: Option<String>,
    #[arg(long, help = "Path to the changed-file list (default: /tmp/files.json)")]
    pub files: Option<String>,
    #[arg(long, help = "Path the report is written to (default: /tmp/validation-errors.json)")]
    pub report: Option<String>,
    #[arg(long, value_parser = ["json", "human"], help = "Output mode: json|human (default: json)")]
    pub output: Option<String>,
    /// Log filter for diagnostics on stderr (tracing-subscriber EnvFilter syntax)
    #[arg(long, env = "REVCHECK_LOG", default_value = "warn", hide_env = true)]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_parses_with_defaults() {
        let cli = Cli::try_parse_from(["revcheck"]).unwrap();
        assert!(cli.review.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_rejects_unknown_output_mode() {
        assert!(Cli::try_parse_from(["revcheck", "--output", "xml"]).is_err());
        let cli = Cli::try_parse_from(["revcheck", "--output", "human", "--review", "r.json"]).unwrap();
        assert_eq!(cli.output.as_deref(), Some("human"));
        assert_eq!(cli.review.as_deref(), Some("r.json"));
    }
}
