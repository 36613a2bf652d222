//! Validation engine for review documents.
//!
//! Runs the fixed check sequence and returns a `ValidationReport` holding
//! every error found, in discovery order:
//! - presence of the review document and the changed-file list
//! - changed-file list load
//! - review document read and JSON parse (stops here on failure)
//! - top-level fields, then each comment entry with its line cross-check

use crate::checks::{self, CommentContext};
use crate::config::Effective;
use crate::inputs;
use crate::models::files::ChangedFiles;
use crate::models::ValidationReport;
use std::path::PathBuf;
use tracing::debug;

/// Locations of both input documents and the repository root used to
/// resolve comment paths.
#[derive(Debug, Clone)]
pub struct Validator {
    review_file: PathBuf,
    files_file: PathBuf,
    repo_root: PathBuf,
}

impl Validator {
    pub fn new(
        review_file: impl Into<PathBuf>,
        files_file: impl Into<PathBuf>,
        repo_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            review_file: review_file.into(),
            files_file: files_file.into(),
            repo_root: repo_root.into(),
        }
    }

    pub fn from_effective(eff: &Effective) -> Self {
        Self::new(&eff.review, &eff.files, &eff.repo_root)
    }

    /// Run all checks. Malformed input becomes report errors, never a panic.
    pub fn validate(&self) -> ValidationReport {
        let mut errors = inputs::check_presence(&self.review_file, &self.files_file);

        let changed = match inputs::load_changed_files(&self.files_file) {
            Ok(set) => set,
            Err(e) => {
                debug!("Changed-file list unusable: {}", e.message);
                errors.push(e);
                ChangedFiles::default()
            }
        };

        let doc = match inputs::load_review(&self.review_file) {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                debug!("Review document absent; nothing further to check");
                return ValidationReport::from_errors(errors);
            }
            Err(e) => {
                debug!("Review document unusable: {}", e.message);
                errors.push(e);
                return ValidationReport::from_errors(errors);
            }
        };

        let (top, comments) = checks::check_top_level(&doc);
        errors.extend(top);

        if let Some(items) = comments {
            debug!("Checking {} comments", items.len());
            let ctx = CommentContext {
                changed: &changed,
                repo_root: &self.repo_root,
            };
            for (idx, comment) in items.iter().enumerate() {
                errors.extend(checks::check_comment(idx, comment, &ctx));
            }
        }

        debug!("Validation finished with {} errors", errors.len());
        ValidationReport::from_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn test_validate_stops_after_syntax_error() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        std::fs::write(root.join("review.json"), "{not json").unwrap();
        std::fs::write(root.join("files.json"), "[]").unwrap();
        let report =
            Validator::new(root.join("review.json"), root.join("files.json"), root).validate();
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ErrorKind::Syntax);
    }

    #[test]
    fn test_validate_missing_files_list_still_checks_review() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        std::fs::write(
            root.join("review.json"),
            r#"{"body": "b", "event": "COMMENT", "comments": [{"path": "a.py", "line": 1, "body": "x"}]}"#,
        )
        .unwrap();
        let report =
            Validator::new(root.join("review.json"), root.join("files.json"), root).validate();
        let kinds: Vec<_> = report.errors.iter().map(|e| (e.path.as_str(), e.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("files.json", ErrorKind::FileNotFound),
                (".comments[0].path", ErrorKind::InvalidFile),
            ]
        );
    }
}
