//! Project detail modal: open/closed lifecycle plus the per-project carousel.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::carousel::Carousel;
use crate::project::ProjectRecord;

/// Scoped suppression of background scrolling while the modal is open.
///
/// The modal calls [`ScrollLock::acquire`] on its Closed → Open transition and
/// [`ScrollLock::release`] on Open → Closed, never anywhere else.
pub trait ScrollLock {
    /// Suppress background scrolling.
    fn acquire(&mut self);
    /// Restore background scrolling.
    fn release(&mut self);
    /// Whether background scrolling is currently suppressed.
    fn is_locked(&self) -> bool;
}

/// In-process scroll lock backed by a flag.
#[derive(Debug, Clone, Default)]
pub struct ScrollLatch {
    locked: bool,
}

impl ScrollLock for ScrollLatch {
    fn acquire(&mut self) {
        self.locked = true;
    }

    fn release(&mut self) {
        self.locked = false;
    }

    fn is_locked(&self) -> bool {
        self.locked
    }
}

/// User gesture that closed the modal. All triggers behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// Close button or close key.
    Explicit,
    /// Click outside the modal.
    Backdrop,
    /// Escape key.
    Escape,
}

#[derive(Debug, Clone)]
enum ModalState {
    Closed,
    Open {
        project: Arc<ProjectRecord>,
        carousel: Carousel,
    },
}

/// Detail modal state machine.
#[derive(Debug, Clone)]
pub struct ProjectModal {
    state: ModalState,
    debounce: Duration,
}

impl ProjectModal {
    /// Closed modal whose carousels use the given debounce window.
    #[must_use]
    pub const fn new(debounce: Duration) -> Self {
        Self {
            state: ModalState::Closed,
            debounce,
        }
    }

    /// Whether the modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Project shown in the modal.
    #[must_use]
    pub const fn project(&self) -> Option<&Arc<ProjectRecord>> {
        match &self.state {
            ModalState::Open { project, .. } => Some(project),
            ModalState::Closed => None,
        }
    }

    /// Carousel of the open modal.
    #[must_use]
    pub const fn carousel(&self) -> Option<&Carousel> {
        match &self.state {
            ModalState::Open { carousel, .. } => Some(carousel),
            ModalState::Closed => None,
        }
    }

    /// Image reference of the visible slide.
    #[must_use]
    pub fn current_image(&self) -> Option<String> {
        let ModalState::Open { project, carousel } = &self.state else {
            return None;
        };
        project.display_images().get(carousel.current_index()).cloned()
    }

    /// Show `project`, resetting the carousel to the first slide.
    ///
    /// The scroll lock is acquired only when the modal was closed; replacing
    /// the project of an open modal keeps the existing lock.
    pub fn open<L: ScrollLock + ?Sized>(&mut self, project: Arc<ProjectRecord>, lock: &mut L) {
        if !self.is_open() {
            lock.acquire();
            debug!(project = %project.id, "modal opened, scroll locked");
        } else {
            debug!(project = %project.id, "modal project replaced");
        }
        let carousel = Carousel::new(project.slide_count(), self.debounce);
        self.state = ModalState::Open { project, carousel };
    }

    /// Close the modal. Returns `false` when it was already closed.
    pub fn close<L: ScrollLock + ?Sized>(&mut self, trigger: CloseTrigger, lock: &mut L) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = ModalState::Closed;
        lock.release();
        debug!(?trigger, "modal closed, scroll released");
        true
    }

    /// Forward a "next image" request to the carousel.
    pub fn next_image(&mut self, now: Instant) -> bool {
        self.carousel_mut().is_some_and(|carousel| carousel.next(now))
    }

    /// Forward a "previous image" request to the carousel.
    pub fn previous_image(&mut self, now: Instant) -> bool {
        self.carousel_mut()
            .is_some_and(|carousel| carousel.previous(now))
    }

    /// Forward a jump request to the carousel.
    pub fn go_to_image(&mut self, index: usize, now: Instant) -> bool {
        self.carousel_mut()
            .is_some_and(|carousel| carousel.go_to(index, now))
    }

    /// Complete a due carousel transition.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.carousel_mut().is_some_and(|carousel| carousel.settle(now))
    }

    const fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        match &mut self.state {
            ModalState::Open { carousel, .. } => Some(carousel),
            ModalState::Closed => None,
        }
    }
}
