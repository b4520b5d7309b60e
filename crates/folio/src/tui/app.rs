use std::time::Instant;

use anyhow::Result;
use folio_app::{LayoutConfig, PortfolioService, Profile, ProjectDetail};
use folio_core::{ProjectRow, ScrollLatch, Showcase};

/// Data and state machines behind the TUI.
pub(super) struct App {
    pub(super) showcase: Showcase<ScrollLatch>,
    pub(super) profile: Profile,
    pub(super) layout: LayoutConfig,
}

impl App {
    pub(super) fn new(service: &PortfolioService) -> Result<Self> {
        let showcase = service.showcase(ScrollLatch::default());
        let profile = service.profile()?;
        Ok(Self::from_parts(showcase, profile, service.config().layout))
    }

    pub(super) const fn from_parts(
        showcase: Showcase<ScrollLatch>,
        profile: Profile,
        layout: LayoutConfig,
    ) -> Self {
        Self {
            showcase,
            profile,
            layout,
        }
    }

    pub(super) fn rows(&self) -> Vec<ProjectRow<'_>> {
        self.showcase.rows()
    }

    /// Detail view model of the project shown in the modal.
    pub(super) fn modal_detail(&self) -> Option<ProjectDetail<'_>> {
        self.showcase
            .modal()
            .project()
            .map(|project| ProjectDetail::new(project, self.showcase.classifier()))
    }

    pub(super) fn is_modal_open(&self) -> bool {
        self.showcase.modal().is_open()
    }

    pub(super) fn slide_count(&self) -> usize {
        self.showcase.modal().carousel().map_or(0, |c| c.len())
    }

    pub(super) fn tick(&mut self, now: Instant) -> bool {
        self.showcase.tick(now)
    }
}
