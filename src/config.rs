//! Configuration discovery and effective settings resolution.
//!
//! Revcheck reads `revcheck.toml|yaml|yml` from the repository root and
//! merges it with CLI flags to produce an `Effective` config. The
//! repository root is `--repo-root` or the current directory; there is no
//! upward search.
//! Defaults:
//! - `review`: `/tmp/review.json`
//! - `files`: `/tmp/files.json`
//! - `report`: `/tmp/validation-errors.json`
//! - `output`: `json`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_REVIEW: &str = "/tmp/review.json";
pub const DEFAULT_FILES: &str = "/tmp/files.json";
pub const DEFAULT_REPORT: &str = "/tmp/validation-errors.json";
pub const DEFAULT_OUTPUT: &str = "json";

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `revcheck.toml|yaml`.
pub struct RevcheckConfig {
    pub review: Option<String>,
    pub files: Option<String>,
    pub report: Option<String>,
    pub output: Option<String>, // json|human
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub review: PathBuf,
    pub files: PathBuf,
    pub report: PathBuf,
    pub output: String,
}

/// Load `RevcheckConfig` from `revcheck.toml` or `revcheck.yaml|yml` if present.
///
/// A file that exists but cannot be read or parsed is skipped with a warning.
pub fn load_config(root: &Path) -> Option<RevcheckConfig> {
    let toml_path = root.join("revcheck.toml");
    if toml_path.exists() {
        let s = match fs::read_to_string(&toml_path) {
            Ok(s) => s,
            Err(e) => {
                warn!("Ignoring {}: {}", toml_path.display(), e);
                return None;
            }
        };
        return match toml::from_str::<RevcheckConfig>(&s) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!("Ignoring {}: {}", toml_path.display(), e);
                None
            }
        };
    }
    for yml in ["revcheck.yaml", "revcheck.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = match fs::read_to_string(&p) {
                Ok(s) => s,
                Err(e) => {
                    warn!("Ignoring {}: {}", p.display(), e);
                    return None;
                }
            };
            return match serde_yaml::from_str::<RevcheckConfig>(&s) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    warn!("Ignoring {}: {}", p.display(), e);
                    None
                }
            };
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// Relative input/report paths resolve against the repository root.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_review: Option<&str>,
    cli_files: Option<&str>,
    cli_report: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let repo_root = PathBuf::from(cli_repo_root.unwrap_or("."));
    let cfg = load_config(&repo_root).unwrap_or_default();

    let pick = |cli: Option<&str>, file: Option<String>, default: &str| -> PathBuf {
        let raw = cli
            .map(|s| s.to_string())
            .or(file)
            .unwrap_or_else(|| default.to_string());
        repo_root.join(raw)
    };

    let review = pick(cli_review, cfg.review, DEFAULT_REVIEW);
    let files = pick(cli_files, cfg.files, DEFAULT_FILES);
    let report = pick(cli_report, cfg.report, DEFAULT_REPORT);
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    Effective {
        repo_root,
        review,
        files,
        report,
        output,
    }
}
