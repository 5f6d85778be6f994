use crate::latex::{RecompileReport, recompile_with_report, serialize};
use crate::models::{Author, Paper, SectionCollection};

/// Whether the next section change should re-derive the displayed source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    /// Section changes re-derive the displayed source
    #[default]
    Idle,
    /// The next section change came from a recompile and must not
    /// overwrite the source the user just edited
    Suppressing,
}

/// Reaction to a section change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Rederive,
    Skip,
}

impl SyncState {
    /// Arm the one-shot suppression before committing recompiled sections.
    pub fn begin_recompile(&mut self) {
        *self = SyncState::Suppressing;
    }

    /// Consume one section change notification.
    ///
    /// `Suppressing` absorbs exactly one notification and returns to `Idle`.
    pub fn on_sections_changed(&mut self) -> SyncAction {
        match *self {
            SyncState::Suppressing => {
                *self = SyncState::Idle;
                SyncAction::Skip
            }
            SyncState::Idle => SyncAction::Rederive,
        }
    }
}

/// Which representation the user is looking at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Preview,
    Source,
}

/// Coordinates the structured sections and the editable LaTeX source.
///
/// Every commit of new sections notifies the session. A fresh generation
/// re-derives the source from the sections; a recompile keeps the source the
/// user typed, since it is what the sections were just derived from.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    paper: Paper,
    source: String,
    state: SyncState,
    view: View,
}

impl EditorSession {
    pub fn new(title: impl Into<String>, authors: Vec<Author>) -> Self {
        Self::from_paper(Paper::new(title, authors, SectionCollection::new()))
    }

    /// Open a session over an existing paper, deriving its source.
    pub fn from_paper(paper: Paper) -> Self {
        let source = serialize(&paper);
        Self {
            paper,
            source,
            state: SyncState::Idle,
            view: View::Preview,
        }
    }

    pub fn paper(&self) -> &Paper {
        &self.paper
    }

    pub fn sections(&self) -> &SectionCollection {
        &self.paper.sections
    }

    /// The LaTeX source currently shown in the editor
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Metadata edits do not touch the displayed source until the next
    /// section change or [`EditorSession::reset_source`].
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.paper.title = title.into();
    }

    pub fn set_authors(&mut self, authors: Vec<Author>) {
        self.paper.authors = authors;
    }

    /// Commit sections produced by a generation run.
    pub fn set_sections(&mut self, sections: SectionCollection) {
        self.commit(sections);
    }

    /// Replace the displayed source with the user's edited text.
    pub fn edit_source(&mut self, text: impl Into<String>) {
        self.source = text.into();
    }

    /// Re-derive sections from the displayed source and commit them without
    /// regenerating the source.
    pub fn recompile(&mut self) -> RecompileReport {
        let (sections, report) = recompile_with_report(&self.source, &self.paper.sections);
        self.state.begin_recompile();
        self.commit(sections);
        report
    }

    /// Discard edits and regenerate the source from the current sections.
    pub fn reset_source(&mut self) {
        self.source = serialize(&self.paper);
    }

    /// True when the displayed source differs from what the current
    /// sections would serialize to.
    pub fn has_unsynced_edits(&self) -> bool {
        self.source != serialize(&self.paper)
    }

    fn commit(&mut self, sections: SectionCollection) {
        self.paper.sections = sections;
        self.on_sections_changed();
    }

    fn on_sections_changed(&mut self) {
        match self.state.on_sections_changed() {
            SyncAction::Rederive => {
                log::debug!("sections changed, re-deriving source");
                self.source = serialize(&self.paper);
            }
            SyncAction::Skip => {
                log::debug!("sections changed by recompile, keeping edited source");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn generated() -> SectionCollection {
        SectionCollection::from_iter([("Abstract", "X"), ("Introduction", "A")])
    }

    #[test]
    fn test_state_machine_starts_idle_and_rederives() {
        let mut state = SyncState::default();

        assert_eq!(state, SyncState::Idle);
        assert_eq!(state.on_sections_changed(), SyncAction::Rederive);
        assert_eq!(state, SyncState::Idle);
    }

    #[test]
    fn test_suppression_is_one_shot() {
        let mut state = SyncState::Idle;
        state.begin_recompile();

        assert_eq!(state.on_sections_changed(), SyncAction::Skip);
        assert_eq!(state, SyncState::Idle);
        assert_eq!(state.on_sections_changed(), SyncAction::Rederive);
    }

    #[test]
    fn test_repeated_begin_still_skips_once() {
        let mut state = SyncState::Idle;
        state.begin_recompile();
        state.begin_recompile();

        assert_eq!(state.on_sections_changed(), SyncAction::Skip);
        assert_eq!(state.on_sections_changed(), SyncAction::Rederive);
    }

    #[test]
    fn test_generation_rederives_source() {
        let mut session = EditorSession::new("T", vec![]);
        assert_eq!(session.source(), "");

        session.set_sections(generated());

        assert_eq!(session.source(), serialize(session.paper()));
        assert!(session.source().contains("\\section{Introduction}\nA"));
        assert!(!session.has_unsynced_edits());
    }

    #[test]
    fn test_recompile_keeps_edited_source() {
        let mut session = EditorSession::new("T", vec![]);
        session.set_sections(generated());

        let edited = session
            .source()
            .replace("\\section{Introduction}\nA", "\\section{Introduction}\nB\n\n% my note");
        session.edit_source(edited.clone());
        assert!(session.has_unsynced_edits());

        let report = session.recompile();

        assert_eq!(report.updated, vec!["Introduction".to_string()]);
        assert_eq!(session.source(), edited);
        assert_eq!(session.sections().get("Introduction"), Some("B\n\n% my note"));
        assert_eq!(session.sections().get("Abstract"), Some("X"));
        assert_eq!(session.state(), SyncState::Idle);
    }

    #[test]
    fn test_generation_after_recompile_rederives() {
        let mut session = EditorSession::new("T", vec![]);
        session.set_sections(generated());
        session.edit_source("\\section{Introduction}\nB");
        session.recompile();

        session.set_sections(SectionCollection::from_iter([("Conclusion", "C")]));

        assert!(session.source().contains("\\section{Conclusion}\nC"));
        assert!(!session.source().contains("\\section{Introduction}"));
    }

    #[test]
    fn test_metadata_changes_wait_for_next_derivation() {
        let mut session = EditorSession::from_paper(Paper::new("Old", vec![], generated()));
        assert!(session.source().contains("\\title{Old}"));

        session.set_title("New");
        assert!(session.source().contains("\\title{Old}"));
        assert!(session.has_unsynced_edits());

        session.reset_source();
        assert!(session.source().contains("\\title{New}"));
    }

    #[test]
    fn test_view_switching() {
        let mut session = EditorSession::default();
        assert_eq!(session.view(), View::Preview);

        session.set_view(View::Source);
        assert_eq!(session.view(), View::Source);
    }
}
