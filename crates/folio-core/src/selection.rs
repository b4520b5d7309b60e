//! The project currently shown in the detail modal.

use std::sync::Arc;

use crate::project::ProjectRecord;

/// Which project is being detailed, if any.
///
/// The modal is open exactly when a project is selected, so an open modal
/// without a selection cannot be represented.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<Arc<ProjectRecord>>,
}

impl SelectionState {
    /// Selected project.
    #[must_use]
    pub fn selected_project(&self) -> Option<&Arc<ProjectRecord>> {
        self.selected.as_ref()
    }

    /// Whether the detail modal is open.
    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Select a project, replacing any current selection.
    pub fn select(&mut self, project: Arc<ProjectRecord>) {
        self.selected = Some(project);
    }

    /// Clear the selection. Idempotent.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Role;

    fn project(id: &str) -> Arc<ProjectRecord> {
        Arc::new(ProjectRecord {
            id: id.parse().unwrap_or_else(|err| panic!("must parse id: {err}")),
            date: String::new(),
            name: id.to_uppercase(),
            role: Role::One("Dev".into()),
            description: String::new(),
            long_description: None,
            technologies: Vec::new(),
            badges: None,
            images: None,
            features: None,
            challenges: None,
            live_demo: None,
            show_live_demo: false,
            github: None,
            show_github: false,
        })
    }

    #[test]
    fn starts_closed() {
        let state = SelectionState::default();
        assert!(state.selected_project().is_none());
        assert!(!state.is_modal_open());
    }

    #[test]
    fn select_replaces_without_stacking() {
        let mut state = SelectionState::default();
        state.select(project("a"));
        state.select(project("b"));
        assert!(state.is_modal_open());
        assert_eq!(
            state.selected_project().map(|p| p.id.to_string()).as_deref(),
            Some("b")
        );
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = SelectionState::default();
        state.select(project("a"));
        state.clear();
        state.clear();
        assert!(!state.is_modal_open());
        assert!(state.selected_project().is_none());
    }
}
