//! Source documents: one speech per year.

use crate::{CorpusError, CorpusResult, ParseError};
use std::fs;
use std::path::{Path, PathBuf};

/// Raw text of one speech with its identifier and year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub id: String,
    pub year: i32,
    pub text: String,
}

impl SourceDocument {
    pub fn new(id: impl Into<String>, year: i32, text: impl Into<String>) -> Self {
        SourceDocument {
            id: id.into(),
            year,
            text: text.into(),
        }
    }

    /// Loads a document whose file stem is its year, e.g. `1965.md`.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let year = year_from_path(path).ok_or_else(|| ParseError::InvalidDocumentName {
            name: name.clone(),
        })?;
        let text = fs::read_to_string(path).map_err(|e| ParseError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(SourceDocument { id: name, year, text })
    }
}

/// Year named by a file stem, if the stem is a plain integer.
pub fn year_from_path(path: &Path) -> Option<i32> {
    path.file_stem()?.to_str()?.parse().ok()
}

/// Markdown files directly inside `dir`, sorted by file name.
pub fn discover_documents(dir: &Path) -> CorpusResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| CorpusError::io(dir, e))? {
        let entry = entry.map_err(|e| CorpusError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |e| e == "md") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_from_stem() {
        assert_eq!(year_from_path(Path::new("speeches/1965.md")), Some(1965));
        assert_eq!(year_from_path(Path::new("speeches/notes.md")), None);
    }

    #[test]
    fn discovers_sorted_markdown_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["1971.md", "1965.md", "readme.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let found: Vec<_> = discover_documents(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(found, vec!["1965.md", "1971.md"]);
    }

    #[test]
    fn non_numeric_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.md");
        fs::write(&path, "text").unwrap();
        assert_eq!(
            SourceDocument::from_path(&path),
            Err(ParseError::InvalidDocumentName {
                name: "draft.md".to_string()
            })
        );
    }
}
