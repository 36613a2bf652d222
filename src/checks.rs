//! Field, type, and value checks over a parsed review document.
//!
//! Each check returns the errors it found and never short-circuits its
//! siblings. The only dependency between checks is the line cross-check,
//! which runs only for a comment whose `path` is a changed file and whose
//! `line` is a positive number.

use crate::models::field::{self, kind_name, Field};
use crate::models::files::ChangedFiles;
use crate::models::{ErrorKind, ValidationError};
use serde_json::{Number, Value as Json};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

/// External state the per-comment checks cross-reference.
pub struct CommentContext<'a> {
    pub changed: &'a ChangedFiles,
    pub repo_root: &'a Path,
}

/// Check `body`, `comments`, and `event` on the document root.
///
/// Returns the errors plus the comment entries to iterate, which is `None`
/// when `comments` is absent or not an array.
pub fn check_top_level(doc: &Json) -> (Vec<ValidationError>, Option<&[Json]>) {
    let mut errors = Vec::new();

    match field::text(doc, "body") {
        Field::Absent => errors.push(ValidationError::new(
            ".body",
            ErrorKind::MissingField,
            "Missing or empty 'body' field",
            "Add a summary comment to the body field",
        )),
        Field::WrongKind(v) => errors.push(ValidationError::new(
            ".body",
            ErrorKind::InvalidType,
            format!("'body' field must be a string, got {}", kind_name(v)),
            "Convert body to string",
        )),
        Field::Present(_) => {}
    }

    let comments = match field::array(doc, "comments") {
        Field::Absent => {
            errors.push(ValidationError::new(
                ".comments",
                ErrorKind::MissingField,
                "Missing 'comments' field",
                "Add a comments array (empty array if no line comments)",
            ));
            None
        }
        Field::WrongKind(v) => {
            errors.push(ValidationError::new(
                ".comments",
                ErrorKind::InvalidType,
                format!("'comments' field must be an array, got {}", kind_name(v)),
                "Convert comments to array",
            ));
            None
        }
        Field::Present(items) => Some(items),
    };

    match field::text(doc, "event") {
        Field::Absent => errors.push(ValidationError::new(
            ".event",
            ErrorKind::MissingField,
            "Missing or empty 'event' field",
            "Set event to \"COMMENT\" or other valid GitHub review event",
        )),
        Field::WrongKind(v) => errors.push(ValidationError::new(
            ".event",
            ErrorKind::InvalidType,
            format!("'event' field must be a string, got {}", kind_name(v)),
            "Convert event to string",
        )),
        Field::Present(_) => {}
    }

    (errors, comments)
}

/// Check one entry of `comments`. Every error carries `.comments[idx]`.
///
/// A non-object entry reads as having all fields absent.
pub fn check_comment(idx: usize, comment: &Json, ctx: &CommentContext<'_>) -> Vec<ValidationError> {
    let prefix = format!(".comments[{}]", idx);
    let mut errors = Vec::new();
    let line = field::number(comment, "line");

    match field::text(comment, "path") {
        Field::Absent => errors.push(ValidationError::new(
            format!("{}.path", prefix),
            ErrorKind::MissingField,
            "Comment missing 'path' field",
            "Add the file path to the comment",
        )),
        Field::WrongKind(v) => errors.push(ValidationError::new(
            format!("{}.path", prefix),
            ErrorKind::InvalidType,
            format!("Comment 'path' must be a string, got {}", kind_name(v)),
            "Convert path to string",
        )),
        Field::Present(path) if !ctx.changed.contains(path) => {
            errors.push(ValidationError::new(
                format!("{}.path", prefix),
                ErrorKind::InvalidFile,
                format!("File '{}' not found in PR changed files", path),
                "Verify the file path is correct and exists in the PR",
            ))
        }
        Field::Present(path) => {
            // Bad or missing lines are reported by the line check below.
            if let Field::Present(n) = line {
                trace!("Cross-checking {} line {} in {}", prefix, n, path);
                errors.extend(check_line_bounds(&prefix, path, n, ctx.repo_root));
            }
        }
    }

    match line {
        Field::Absent => errors.push(ValidationError::new(
            format!("{}.line", prefix),
            ErrorKind::MissingField,
            "Comment missing 'line' field",
            "Add the line number to the comment",
        )),
        Field::WrongKind(v) => errors.push(ValidationError::new(
            format!("{}.line", prefix),
            ErrorKind::InvalidType,
            format!("Comment 'line' must be a number, got {}", kind_name(v)),
            "Convert line to number",
        )),
        Field::Present(n) if positive_line(n).is_none() => {
            errors.push(ValidationError::new(
                format!("{}.line", prefix),
                ErrorKind::InvalidValue,
                format!("Line number must be positive, got {}", n),
                "Set line number to a positive integer",
            ))
        }
        Field::Present(_) => {}
    }

    match field::text(comment, "body") {
        Field::Absent => errors.push(ValidationError::new(
            format!("{}.body", prefix),
            ErrorKind::MissingField,
            "Comment missing or empty 'body' field",
            "Add the comment content",
        )),
        Field::WrongKind(v) => errors.push(ValidationError::new(
            format!("{}.body", prefix),
            ErrorKind::InvalidType,
            format!("Comment 'body' must be a string, got {}", kind_name(v)),
            "Convert body to string",
        )),
        Field::Present(_) => {}
    }

    errors
}

/// Numeric value of `line` when it is at least 1.
fn positive_line(n: &Number) -> Option<f64> {
    n.as_f64().filter(|v| *v >= 1.0)
}

/// Cross-check `line` against the current length of `file_path` under
/// `repo_root`. A line that is not a positive number is left to the
/// field check and yields nothing here.
pub fn check_line_bounds(
    prefix: &str,
    file_path: &str,
    line: &Number,
    repo_root: &Path,
) -> Option<ValidationError> {
    let value = positive_line(line)?;
    let full_path = repo_root.join(file_path);
    if !full_path.exists() {
        return Some(ValidationError::new(
            format!("{}.line", prefix),
            ErrorKind::FileNotFound,
            format!("File '{}' does not exist in the repository", file_path),
            "Verify the file path is correct",
        ));
    }
    match count_lines(&full_path) {
        Ok(count) if value > count as f64 => Some(ValidationError::new(
            format!("{}.line", prefix),
            ErrorKind::InvalidLine,
            format!(
                "Line {} does not exist in file {} (file has {} lines)",
                line, file_path, count
            ),
            format!(
                "Adjust line number to be within file bounds (1-{})",
                count
            ),
        )),
        Ok(_) => None,
        Err(e) => Some(ValidationError::new(
            format!("{}.line", prefix),
            ErrorKind::FileReadError,
            format!("Could not read file '{}': {}", file_path, e),
            "Ensure the file exists and is readable",
        )),
    }
}

/// Count lines by reading the file to its end.
///
/// `\n`, `\r\n`, and a lone `\r` each end a line. A trailing terminator
/// does not start a new line; an empty file has none. Content that is not
/// UTF-8 is an `InvalidData` error.
pub fn count_lines(path: &Path) -> io::Result<usize> {
    let mut content = String::new();
    File::open(path)?.read_to_string(&mut content)?;
    let mut count = 0usize;
    let mut prev_cr = false;
    for b in content.bytes() {
        match b {
            b'\r' => count += 1,
            b'\n' if !prev_cr => count += 1,
            _ => {}
        }
        prev_cr = b == b'\r';
    }
    if !content.is_empty() && !content.ends_with('\n') && !content.ends_with('\r') {
        count += 1;
    }
    Ok(count)
}
