pub mod editing;
pub mod export;
pub mod io;
pub mod latex;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{EditorSession, SyncAction, SyncState, View};
pub use export::{ExportFormat, ExportPlan, ExportSection};
pub use io::*;
pub use latex::{RecompileReport, recompile, recompile_with_report, serialize};
pub use models::*;
