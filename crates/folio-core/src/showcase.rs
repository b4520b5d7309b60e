//! List view controller tying the catalog to selection, modal and scroll lock.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::classifier::{TagChip, TagClassifier};
use crate::error::CatalogError;
use crate::modal::{CloseTrigger, ProjectModal, ScrollLock};
use crate::palette::{Tone, badge_tone};
use crate::project::ProjectRecord;
use crate::selection::SelectionState;

/// Badge label with its resolved tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeView<'a> {
    /// Label as authored.
    pub label: &'a str,
    /// Display tone.
    pub tone: Tone,
}

/// One list entry, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRow<'a> {
    /// Project identifier.
    pub id: &'a str,
    /// Display date.
    pub date: &'a str,
    /// Project name.
    pub name: &'a str,
    /// Role labels.
    pub roles: &'a [String],
    /// Short description.
    pub description: &'a str,
    /// Classified technology tags in source order.
    pub chips: Vec<TagChip<'a>>,
    /// Toned badges in source order.
    pub badges: Vec<BadgeView<'a>>,
}

impl<'a> ProjectRow<'a> {
    /// Build the row for `project`.
    #[must_use]
    pub fn new(project: &'a ProjectRecord, classifier: &TagClassifier) -> Self {
        Self {
            id: project.id.as_str(),
            date: &project.date,
            name: &project.name,
            roles: project.role.labels(),
            description: &project.description,
            chips: classifier.chips(&project.technologies),
            badges: project
                .badge_labels()
                .iter()
                .map(|label| BadgeView {
                    label,
                    tone: badge_tone(label),
                })
                .collect(),
        }
    }
}

/// Project list with its detail modal.
///
/// The modal is open exactly when a project is selected. The scroll lock is
/// held for as long as the modal is open, including until the showcase is
/// dropped.
pub struct Showcase<L: ScrollLock> {
    catalog: Catalog,
    classifier: TagClassifier,
    cursor: usize,
    selection: SelectionState,
    modal: ProjectModal,
    lock: L,
}

impl<L: ScrollLock> Showcase<L> {
    /// Showcase over `catalog`, using `debounce` for every carousel.
    #[must_use]
    pub fn new(catalog: Catalog, lock: L, debounce: Duration) -> Self {
        Self {
            catalog,
            classifier: TagClassifier::builtin(),
            cursor: 0,
            selection: SelectionState::default(),
            modal: ProjectModal::new(debounce),
            lock,
        }
    }

    /// Replace the tag classifier.
    #[must_use]
    pub const fn with_classifier(mut self, classifier: TagClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Underlying catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Classifier used for rows.
    #[must_use]
    pub const fn classifier(&self) -> &TagClassifier {
        &self.classifier
    }

    /// List cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Detail modal.
    #[must_use]
    pub const fn modal(&self) -> &ProjectModal {
        &self.modal
    }

    /// Scroll lock.
    #[must_use]
    pub const fn lock(&self) -> &L {
        &self.lock
    }

    /// Record under the cursor.
    #[must_use]
    pub fn cursor_project(&self) -> Option<&Arc<ProjectRecord>> {
        self.catalog.get(self.cursor)
    }

    /// Row view models in catalog order.
    #[must_use]
    pub fn rows(&self) -> Vec<ProjectRow<'_>> {
        self.catalog
            .iter()
            .map(|project| ProjectRow::new(project, &self.classifier))
            .collect()
    }

    /// Move the cursor down. Suppressed while the scroll lock is held.
    pub fn cursor_down(&mut self) -> bool {
        if self.lock.is_locked() || self.cursor + 1 >= self.catalog.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move the cursor up. Suppressed while the scroll lock is held.
    pub fn cursor_up(&mut self) -> bool {
        if self.lock.is_locked() || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor to `index` when it is in range and scrolling is free.
    pub fn set_cursor(&mut self, index: usize) -> bool {
        if self.lock.is_locked() || index >= self.catalog.len() {
            return false;
        }
        self.cursor = index;
        true
    }

    /// Open the modal on the record at `index`. Returns `false` for an
    /// out-of-range index.
    pub fn view(&mut self, index: usize) -> bool {
        let Some(project) = self.catalog.get(index).cloned() else {
            debug!(index, "view requested for missing row");
            return false;
        };
        self.cursor = index;
        self.selection.select(Arc::clone(&project));
        self.modal.open(project, &mut self.lock);
        true
    }

    /// Open the modal on the record under the cursor.
    pub fn view_cursor(&mut self) -> bool {
        self.view(self.cursor)
    }

    /// Open the modal on the record with identifier `id`.
    pub fn view_id(&mut self, id: &str) -> Result<(), CatalogError> {
        let project = self.catalog.require(id)?;
        let index = self
            .catalog
            .position(&project.id)
            .ok_or_else(|| CatalogError::UnknownProject(id.to_owned()))?;
        self.view(index);
        Ok(())
    }

    /// Close the modal and clear the selection. Returns `false` when already closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        self.selection.clear();
        self.modal.close(trigger, &mut self.lock)
    }

    /// Next image in the open modal.
    pub fn next_image(&mut self, now: Instant) -> bool {
        self.modal.next_image(now)
    }

    /// Previous image in the open modal.
    pub fn previous_image(&mut self, now: Instant) -> bool {
        self.modal.previous_image(now)
    }

    /// Jump to an image in the open modal.
    pub fn go_to_image(&mut self, index: usize, now: Instant) -> bool {
        self.modal.go_to_image(index, now)
    }

    /// Advance time; completes a due carousel transition.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.modal.tick(now)
    }
}

impl<L: ScrollLock> Drop for Showcase<L> {
    fn drop(&mut self) {
        if self.modal.close(CloseTrigger::Explicit, &mut self.lock) {
            debug!("showcase dropped with open modal");
        }
    }
}
