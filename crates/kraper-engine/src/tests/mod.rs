use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::models::{Author, Paper, SectionCollection};

/// Create a temporary directory for paper files
pub fn create_test_papers_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(papers_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = papers_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A small generated paper with one author and three sections
pub fn sample_paper() -> Paper {
    Paper::new(
        "Sparse Graph Sketches",
        vec![Author::new("Ada Lovelace", "ada@example.org", "Computer Science", "Analytical University")],
        SectionCollection::from_iter([
            ("Abstract", "We sketch sparse graphs."),
            ("Introduction", "Graphs are everywhere."),
            ("Conclusion", "Sketches work."),
        ]),
    )
}
