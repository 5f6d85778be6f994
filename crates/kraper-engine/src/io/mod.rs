use crate::models::Paper;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid paper file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a paper saved as JSON
pub fn read_paper(path: &Path) -> Result<Paper, IoError> {
    let content = read_text(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a paper as pretty-printed JSON
pub fn write_paper(path: &Path, paper: &Paper) -> Result<(), IoError> {
    let content = serde_json::to_string_pretty(paper)?;
    write_text(path, &content)
}

/// Read an edited LaTeX source file
pub fn read_source(path: &Path) -> Result<String, IoError> {
    read_text(path)
}

/// Write a LaTeX source file
pub fn write_source(path: &Path, source: &str) -> Result<(), IoError> {
    write_text(path, source)
}

fn read_text(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

fn write_text(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_papers_dir, sample_paper};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_and_read_paper() {
        let papers_dir = create_test_papers_dir();
        let path = papers_dir.path().join("paper.json");
        let paper = sample_paper();

        write_paper(&path, &paper).unwrap();
        let loaded = read_paper(&path).unwrap();

        assert_eq!(loaded, paper);
    }

    #[test]
    fn test_section_order_survives_file() {
        let papers_dir = create_test_papers_dir();
        let path = create_test_file(
            &papers_dir,
            "paper.json",
            r#"{"title":"T","sections":{"Zeta":"z","Conclusion":"c","Alpha":"a"}}"#,
        );

        let paper = read_paper(&path).unwrap();

        let names: Vec<_> = paper.sections.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["Zeta", "Conclusion", "Alpha"]);
    }

    #[test]
    fn test_read_paper_not_found() {
        let papers_dir = create_test_papers_dir();
        let result = read_paper(&papers_dir.path().join("missing.json"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_paper_invalid_json() {
        let papers_dir = create_test_papers_dir();
        let path = create_test_file(&papers_dir, "broken.json", "{ not json");

        let result = read_paper(&path);

        assert!(matches!(result, Err(IoError::Json(_))));
        assert!(result.unwrap_err().to_string().contains("Invalid paper file"));
    }

    #[test]
    fn test_write_source_creates_parent_directories() {
        let papers_dir = create_test_papers_dir();
        let path = papers_dir.path().join("build/tex/paper.tex");

        write_source(&path, "\\section{A}\nB").unwrap();

        assert_eq!(read_source(&path).unwrap(), "\\section{A}\nB");
        assert!(papers_dir.path().join("build/tex").is_dir());
    }

    #[test]
    fn test_write_source_overwrites_existing() {
        let papers_dir = create_test_papers_dir();
        let path = create_test_file(&papers_dir, "paper.tex", "old");

        write_source(&path, "new").unwrap();

        assert_eq!(read_source(&path).unwrap(), "new");
    }
}
