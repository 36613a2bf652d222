//! Input loading: presence of both documents, the changed-file list, and
//! the raw review document.
//!
//! Loaders never fail the run. Each problem comes back as a
//! `ValidationError` for the engine to collect.

use crate::models::files::{ChangedFileEntry, ChangedFiles};
use crate::models::{ErrorKind, ValidationError};
use serde_json::Value as Json;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Locator used for errors about the changed-file list: its file name.
pub fn files_locator(files_file: &Path) -> String {
    files_file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| files_file.to_string_lossy().to_string())
}

/// Report each missing input document. Never stops the run.
pub fn check_presence(review_file: &Path, files_file: &Path) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if !review_file.exists() {
        errors.push(ValidationError::new(
            "",
            ErrorKind::FileNotFound,
            format!("Review file not found at {}", review_file.display()),
            format!(
                "Ensure the PR reviewer agent has created {}",
                review_file.display()
            ),
        ));
    }
    if !files_file.exists() {
        errors.push(ValidationError::new(
            files_locator(files_file),
            ErrorKind::FileNotFound,
            format!("Files JSON not found at {}", files_file.display()),
            format!(
                "Ensure the GitHub workflow has created {}",
                files_file.display()
            ),
        ));
    }
    errors
}

/// Load the changed-file list into a membership set.
///
/// An absent list yields an empty set without error (presence is reported
/// separately). Any structural failure yields a single `invalid_format`
/// error; the caller then continues with an empty set.
pub fn load_changed_files(files_file: &Path) -> Result<ChangedFiles, ValidationError> {
    if !files_file.exists() {
        return Ok(ChangedFiles::default());
    }
    let invalid = |cause: String| {
        ValidationError::new(
            files_locator(files_file),
            ErrorKind::InvalidFormat,
            format!("Invalid {} format: {}", files_locator(files_file), cause),
            format!(
                "Ensure {} is valid JSON with 'filename' fields",
                files_file.display()
            ),
        )
    };
    let bytes = fs::read(files_file).map_err(|e| invalid(e.to_string()))?;
    let entries: Vec<ChangedFileEntry> =
        serde_json::from_slice(&bytes).map_err(|e| invalid(e.to_string()))?;
    let set: ChangedFiles = entries.into_iter().map(|e| e.filename).collect();
    debug!("Loaded {} changed files from {}", set.len(), files_file.display());
    Ok(set)
}

/// Read and parse the review document.
///
/// `Ok(None)` when the document is absent. Read failures and JSON syntax
/// failures are returned as errors; nothing further can be checked then.
pub fn load_review(review_file: &Path) -> Result<Option<Json>, ValidationError> {
    if !review_file.exists() {
        return Ok(None);
    }
    let bytes = fs::read(review_file).map_err(|e| {
        ValidationError::new(
            "",
            ErrorKind::FileReadError,
            format!(
                "Could not read review file '{}': {}",
                review_file.display(),
                e
            ),
            "Ensure the file exists and is readable",
        )
    })?;
    let doc = serde_json::from_slice(&bytes).map_err(|e| {
        ValidationError::new(
            "",
            ErrorKind::Syntax,
            format!("Invalid JSON syntax: {}", e),
            format!("Fix JSON syntax errors in {}", review_file.display()),
        )
    })?;
    Ok(Some(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_presence_reports_each_missing_document() {
        let tmp = tempdir().unwrap();
        let review = tmp.path().join("review.json");
        let files = tmp.path().join("files.json");
        let errs = check_presence(&review, &files);
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].path, "");
        assert!(errs[0].recommendation.contains("reviewer agent"));
        assert_eq!(errs[1].path, "files.json");
        assert!(errs[1].recommendation.contains("workflow"));
        assert!(errs.iter().all(|e| e.kind == ErrorKind::FileNotFound));

        std::fs::write(&review, "{}").unwrap();
        std::fs::write(&files, "[]").unwrap();
        assert!(check_presence(&review, &files).is_empty());
    }

    #[test]
    fn test_load_changed_files_ok_ignores_extra_fields() {
        let tmp = tempdir().unwrap();
        let files = tmp.path().join("files.json");
        std::fs::write(
            &files,
            r#"[{"filename": "a.py", "status": "modified"}, {"filename": "src/b.rs"}]"#,
        )
        .unwrap();
        let set = load_changed_files(&files).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a.py"));
        assert!(set.contains("src/b.rs"));
    }

    #[test]
    fn test_load_changed_files_absent_is_empty_without_error() {
        let tmp = tempdir().unwrap();
        let set = load_changed_files(&tmp.path().join("files.json")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_changed_files_structural_failures() {
        let tmp = tempdir().unwrap();
        let files = tmp.path().join("files.json");
        for bad in [
            "not json",
            r#"{"filename": "a.py"}"#,
            r#"["a.py"]"#,
            r#"[{"filename": "a.py"}, {"name": "b.py"}]"#,
            r#"[{"filename": 5}]"#,
        ] {
            std::fs::write(&files, bad).unwrap();
            let err = load_changed_files(&files).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidFormat, "input: {}", bad);
            assert_eq!(err.path, "files.json");
            assert!(err.message.starts_with("Invalid files.json format: "));
        }
    }

    #[test]
    fn test_load_review_syntax_error_embeds_parser_message() {
        let tmp = tempdir().unwrap();
        let review = tmp.path().join("review.json");
        std::fs::write(&review, "{\"body\": ").unwrap();
        let err = load_review(&review).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.path, "");
        assert!(err.message.starts_with("Invalid JSON syntax: "));
        assert!(err.message.contains("line 1"));
    }

    #[test]
    fn test_load_review_absent_and_present() {
        let tmp = tempdir().unwrap();
        let review = tmp.path().join("review.json");
        assert!(load_review(&review).unwrap().is_none());
        std::fs::write(&review, r#"{"body": "ok"}"#).unwrap();
        let doc = load_review(&review).unwrap().unwrap();
        assert_eq!(doc["body"], "ok");
    }

    #[test]
    fn test_load_review_directory_is_read_error() {
        let tmp = tempdir().unwrap();
        let review = tmp.path().join("review.json");
        std::fs::create_dir(&review).unwrap();
        let err = load_review(&review).unwrap_err();
        assert_eq!(err.kind, ErrorKind::FileReadError);
    }
}
