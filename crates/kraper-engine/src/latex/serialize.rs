use std::fmt::Write as _;

use crate::models::{Author, Paper, same_section};

use super::clean::{clean_markdown, escape_latex};

const PREAMBLE: &str = r"\documentclass[conference]{IEEEtran}
\usepackage{cite}
\usepackage{amsmath,amssymb,amsfonts}
\usepackage{algorithmic}
\usepackage{graphicx}
\usepackage{textcomp}
\usepackage{xcolor}

\begin{document}

";

/// Closing marker appended after the last section
pub const END_DOCUMENT: &str = r"\end{document}";

/// Render a paper as an IEEEtran LaTeX document.
///
/// Returns an empty string when the paper has no sections. Sections are
/// emitted in display order, then any non-canonical sections in the order
/// they were added. Abstract and Keywords use their IEEEtran environments;
/// every other section, References included, becomes a `\section`.
pub fn serialize(paper: &Paper) -> String {
    if paper.sections.is_empty() {
        return String::new();
    }

    let mut latex = String::from(PREAMBLE);

    // Writing into a String cannot fail
    let _ = write!(
        latex,
        "\\title{{{}}}\n\n\\author{{\n{}\n}}\n\n\\maketitle\n\n",
        escape_latex(paper.display_title()),
        author_block(&paper.authors)
    );

    for (name, body) in paper.sections.ordered() {
        let content = clean_markdown(body);
        if same_section(name, "Abstract") {
            let _ = write!(latex, "\\begin{{abstract}}\n{content}\n\\end{{abstract}}\n\n");
        } else if same_section(name, "Keywords") {
            let _ = write!(
                latex,
                "\\begin{{IEEEkeywords}}\n{content}\n\\end{{IEEEkeywords}}\n\n"
            );
        } else {
            let _ = write!(latex, "\\section{{{name}}}\n{content}\n\n");
        }
    }

    latex.push_str(END_DOCUMENT);
    latex
}

fn author_block(authors: &[Author]) -> String {
    authors
        .iter()
        .map(|author| {
            format!(
                "\\IEEEauthorblockN{{{}}}\n\\IEEEauthorblockA{{\\textit{{{}}} \\\\\n\\textit{{{}}} \\\\\n{}}}",
                escape_latex(&author.name),
                escape_latex(&author.department),
                escape_latex(&author.institution),
                escape_latex(&author.email),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\\and\n")
}
