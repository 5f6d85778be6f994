use serde::Serialize;

use crate::latex::strip_emphasis;
use crate::models::{DISPLAY_ORDER, Paper};

/// Target renderer for an export plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" | "word" => Ok(ExportFormat::Docx),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSection {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// Renderer-neutral description of an exported paper.
///
/// PDF and Word renderers consume this directly; they never see LaTeX.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPlan {
    pub format: ExportFormat,
    pub title: String,
    pub byline: String,
    pub sections: Vec<ExportSection>,
}

impl ExportPlan {
    /// Build the plan for `paper`.
    ///
    /// Only sections named in [`DISPLAY_ORDER`] are exported, in that order,
    /// skipping empty ones. Bodies are split into paragraphs on blank lines
    /// with `*` and `_` stripped.
    pub fn build(paper: &Paper, format: ExportFormat) -> Self {
        let sections = DISPLAY_ORDER
            .iter()
            .filter_map(|name| {
                let body = paper.sections.get(name)?;
                let paragraphs = paragraphs(body);
                if paragraphs.is_empty() {
                    return None;
                }
                let heading = match format {
                    ExportFormat::Pdf => name.to_uppercase(),
                    ExportFormat::Docx => name.to_string(),
                };
                Some(ExportSection {
                    heading,
                    paragraphs,
                })
            })
            .collect();

        Self {
            format,
            title: paper.display_title().to_string(),
            byline: byline(paper, format),
            sections,
        }
    }
}

fn paragraphs(body: &str) -> Vec<String> {
    body.split("\n\n")
        .map(|p| strip_emphasis(p).trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn byline(paper: &Paper, format: ExportFormat) -> String {
    paper
        .authors
        .iter()
        .map(|author| match format {
            ExportFormat::Pdf => format!("{} ({})", author.name, author.institution),
            ExportFormat::Docx => author.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
