use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::models::SectionCollection;

/// What a recompile changed in the section collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecompileReport {
    /// Existing keys whose bodies were overwritten, in capture order
    pub updated: Vec<String>,
    /// Titles that matched no existing key and were added
    pub inserted: Vec<String>,
}

impl RecompileReport {
    /// Number of `\section` blocks that were captured
    pub fn captured(&self) -> usize {
        self.updated.len() + self.inserted.len()
    }
}

/// A `\section{...}` marker captured from edited source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedSection<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// Re-derive sections from an edited LaTeX document.
///
/// Merges into `previous`; see [`recompile_with_report`].
pub fn recompile(source: &str, previous: &SectionCollection) -> SectionCollection {
    recompile_with_report(source, previous).0
}

/// Re-derive sections from an edited LaTeX document and report the changes.
///
/// Each captured `\section{title}` body replaces the previous section whose
/// name matches `title` ignoring case and surrounding whitespace, or is added
/// under the trimmed title. Sections that are not captured (Abstract and
/// Keywords are written as environments, not `\section`s) keep their
/// previous value.
///
/// This is a best-effort scan, not a LaTeX parser: a literal `\section`
/// inside a body ends that body.
pub fn recompile_with_report(
    source: &str,
    previous: &SectionCollection,
) -> (SectionCollection, RecompileReport) {
    let mut sections = previous.clone();
    let mut report = RecompileReport::default();

    for CapturedSection { title, body } in scan_sections(source) {
        if sections.upsert(title, body) {
            let key = sections.find_key(title).unwrap_or(title);
            report.updated.push(key.to_string());
        } else {
            report.inserted.push(title.to_string());
        }
    }

    log::debug!(
        "recompiled {} sections ({} updated, {} inserted)",
        report.captured(),
        report.updated.len(),
        report.inserted.len()
    );

    (sections, report)
}

/// Find every `\section{title}` marker and the trimmed text that follows it.
///
/// A body ends at the next `\section`, at `\end{document}`, or at the end of
/// the input. The next marker search starts where the body ended.
pub fn scan_sections(source: &str) -> Vec<CapturedSection<'_>> {
    let marker = marker_regex();
    let terminator = terminator_regex();

    let mut captured = Vec::new();
    let mut pos = 0;

    while let Some(caps) = marker.captures_at(source, pos) {
        let (Some(whole), Some(title)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let body_start = whole.end();
        let body_end = terminator
            .find_at(source, body_start)
            .map_or(source.len(), |m| m.start());

        captured.push(CapturedSection {
            title: title.as_str().trim(),
            body: source[body_start..body_end].trim(),
        });
        pos = body_end;
    }

    captured
}

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"(?i)\\section\s*\{(.*?)\}").expect("Invalid marker regex"))
}

fn terminator_regex() -> &'static Regex {
    static TERMINATOR: OnceLock<Regex> = OnceLock::new();
    TERMINATOR.get_or_init(|| {
        Regex::new(r"(?i)\\section|\\end\{document\}").expect("Invalid terminator regex")
    })
}
