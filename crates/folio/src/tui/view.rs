use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};

use super::app::App;
use super::clipboard::{ClipboardSink, default_clipboard};
use super::constants::UI_MESSAGE_TTL_SECS;
use crate::config::{KeyBindingsConfig, ViewType};

#[derive(Debug, Clone, Copy, Default)]
pub(super) struct ProfileViewerState {
    pub(super) scroll_offset: u16,
}

/// Which surface receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DetailFocus {
    /// Browsing the project list.
    None,
    /// Project detail modal.
    ProjectModal,
    /// Profile viewer popup.
    ProfileViewer,
}

impl DetailFocus {
    pub(super) const fn view_type(self) -> ViewType {
        match self {
            Self::None => ViewType::ProjectList,
            Self::ProjectModal => ViewType::ProjectModal,
            Self::ProfileViewer => ViewType::ProfileViewer,
        }
    }
}

pub(super) struct Ui {
    pub(super) app: App,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    /// Vertical scroll of the modal's detail text.
    pub(super) modal_scroll: u16,
    pub(super) profile_viewer: Option<ProfileViewerState>,
    pub(super) clipboard: Box<dyn ClipboardSink>,
    /// Keybindings configuration.
    pub(super) keybindings: KeyBindingsConfig,
}

impl Ui {
    pub(super) const MAIN_MIN_HEIGHT: u16 = 5;
    pub(super) const INSTRUCTIONS_HEIGHT: u16 = 3;
    pub(super) const STATUS_MESSAGE_MIN_HEIGHT: u16 = 3;
    pub(super) const STATUS_FOOTER_MIN_HEIGHT: u16 =
        Self::INSTRUCTIONS_HEIGHT + Self::STATUS_MESSAGE_MIN_HEIGHT;

    pub(super) fn new(app: App, keybindings: KeyBindingsConfig) -> Self {
        let clipboard = default_clipboard();
        Self::with_clipboard(app, keybindings, clipboard)
    }

    pub(super) fn with_clipboard(
        app: App,
        keybindings: KeyBindingsConfig,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            app,
            message: None,
            should_quit: false,
            modal_scroll: 0,
            profile_viewer: None,
            clipboard,
            keybindings,
        }
    }

    /// The profile viewer sits above the modal; the modal above the list.
    pub(super) fn detail_focus(&self) -> DetailFocus {
        if self.profile_viewer.is_some() {
            DetailFocus::ProfileViewer
        } else if self.app.is_modal_open() {
            DetailFocus::ProjectModal
        } else {
            DetailFocus::None
        }
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let size = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(Self::MAIN_MIN_HEIGHT),
                Constraint::Length(Self::STATUS_FOOTER_MIN_HEIGHT),
            ])
            .split(size);

        self.draw_project_list(f, chunks[0]);
        self.draw_status(f, chunks[1]);

        if self.app.is_modal_open() {
            self.draw_project_modal(f);
        }
        if self.profile_viewer.is_some() {
            self.draw_profile_viewer(f);
        }
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    pub(super) fn tick(&mut self) {
        self.app.tick(Instant::now());
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
