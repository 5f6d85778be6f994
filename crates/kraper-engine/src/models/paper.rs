use serde::{Deserialize, Serialize};

use super::{Author, SectionCollection};

/// Title used when the research topic was left blank
pub const UNTITLED_PAPER: &str = "Untitled Paper";

/// Everything needed to render a paper: metadata plus generated sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paper {
    pub title: String,
    pub authors: Vec<Author>,
    pub sections: SectionCollection,
}

impl Paper {
    pub fn new(title: impl Into<String>, authors: Vec<Author>, sections: SectionCollection) -> Self {
        Self {
            title: title.into(),
            authors,
            sections,
        }
    }

    /// The title to print, falling back to [`UNTITLED_PAPER`]
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED_PAPER
        } else {
            &self.title
        }
    }
}
