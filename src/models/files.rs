//! Changed-file set: repository-relative paths modified by the pull request.

use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Deserialize)]
/// One entry of the changed-file list. Other fields are ignored.
pub struct ChangedFileEntry {
    pub filename: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Exact-match membership set; no normalization or fuzzy matching.
pub struct ChangedFiles {
    paths: BTreeSet<String>,
}

impl ChangedFiles {
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FromIterator<String> for ChangedFiles {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_exact() {
        let set: ChangedFiles = ["src/a.py".to_string()].into_iter().collect();
        assert!(set.contains("src/a.py"));
        assert!(!set.contains("./src/a.py"));
        assert!(!set.contains("a.py"));
        assert_eq!(set.len(), 1);
        assert!(ChangedFiles::default().is_empty());
    }
}
