//! # LaTeX document transform
//!
//! Two pure functions convert between the structured section collection and
//! the editable IEEEtran source:
//!
//! - **`serialize`**: `Paper` to a complete LaTeX document, sections in
//!   display order with light Markdown cleanup
//! - **`recompile`**: edited LaTeX back to sections, merged into the previous
//!   collection by tolerant `\section{...}` title matching
//!
//! The round trip is exact for bodies without Markdown emphasis, headings,
//! backticks or underscores, for every section except Abstract and Keywords
//! (which are written as environments and never recaptured). Markdown-bearing
//! bodies come back in their cleaned LaTeX form.

pub mod clean;
pub mod recompile;
pub mod serialize;

pub use clean::{clean_markdown, escape_latex, strip_emphasis};
pub use recompile::{CapturedSection, RecompileReport, recompile, recompile_with_report, scan_sections};
pub use serialize::{END_DOCUMENT, serialize};
