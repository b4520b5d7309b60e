use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::{CloseTrigger, LinkState};

use super::super::constants::FAST_SCROLL_LINES;
use super::super::view::{DetailFocus, ProfileViewerState, Ui};
use crate::config::{Action, ViewType};

impl Ui {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.detail_focus() {
            DetailFocus::None => self.handle_project_list_key(key),
            DetailFocus::ProjectModal => self.handle_project_modal_key(key),
            DetailFocus::ProfileViewer => self.handle_profile_viewer_key(key),
        }
    }

    fn handle_project_list_key(&mut self, key: KeyEvent) {
        if self
            .keybindings
            .matches(ViewType::ProjectList, Action::Quit, &key)
        {
            self.should_quit = true;
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectList, Action::Down, &key)
        {
            self.app.showcase.cursor_down();
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectList, Action::Up, &key)
        {
            self.app.showcase.cursor_up();
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectList, Action::OpenDetail, &key)
        {
            self.open_project_modal();
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectList, Action::CopyProjectId, &key)
        {
            self.copy_cursor_project_id();
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectList, Action::OpenProfile, &key)
        {
            self.open_profile_viewer();
        }
    }

    fn handle_project_modal_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.close_project_modal(CloseTrigger::Escape);
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectModal, Action::Close, &key)
        {
            self.close_project_modal(CloseTrigger::Explicit);
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectModal, Action::NextImage, &key)
        {
            if self.app.slide_count() > 1 {
                self.app.showcase.next_image(Instant::now());
            }
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectModal, Action::PreviousImage, &key)
        {
            if self.app.slide_count() > 1 {
                self.app.showcase.previous_image(Instant::now());
            }
            return;
        }

        if let Some(index) = slide_shortcut(&key) {
            if self.app.slide_count() > 1 {
                self.app.showcase.go_to_image(index, Instant::now());
            }
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectModal, Action::ScrollDown, &key)
        {
            self.modal_scroll_down(1);
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectModal, Action::ScrollUp, &key)
        {
            self.modal_scroll_up(1);
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectModal, Action::CopyLiveDemo, &key)
        {
            self.copy_modal_link(Action::CopyLiveDemo);
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProjectModal, Action::CopyGithub, &key)
        {
            self.copy_modal_link(Action::CopyGithub);
        }
    }

    fn handle_profile_viewer_key(&mut self, key: KeyEvent) {
        if self
            .keybindings
            .matches(ViewType::ProfileViewer, Action::Close, &key)
        {
            self.close_profile_viewer();
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProfileViewer, Action::ScrollDown, &key)
        {
            self.profile_viewer_scroll_down(1);
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProfileViewer, Action::ScrollUp, &key)
        {
            self.profile_viewer_scroll_up(1);
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProfileViewer, Action::ScrollDownFast, &key)
        {
            self.profile_viewer_scroll_down(FAST_SCROLL_LINES);
            return;
        }

        if self
            .keybindings
            .matches(ViewType::ProfileViewer, Action::ScrollUpFast, &key)
        {
            self.profile_viewer_scroll_up(FAST_SCROLL_LINES);
        }
    }

    pub(in crate::tui) fn open_project_modal(&mut self) {
        if self.app.showcase.view_cursor() {
            self.modal_scroll = 0;
        } else {
            self.error("No project to show");
        }
    }

    pub(in crate::tui) fn close_project_modal(&mut self, trigger: CloseTrigger) {
        if self.app.showcase.close(trigger) {
            self.modal_scroll = 0;
        }
    }

    pub(in crate::tui) fn copy_cursor_project_id(&mut self) {
        let Some(project) = self.app.showcase.cursor_project() else {
            self.error("No project selected to copy");
            return;
        };

        let id = project.id.to_string();
        if let Err(err) = self.clipboard.set_text(&id) {
            self.error(format!("Failed to copy project ID: {err}"));
        } else {
            self.info(format!("Copied project ID: {id}"));
        }
    }

    fn copy_modal_link(&mut self, action: Action) {
        let Some(project) = self.app.showcase.modal().project() else {
            return;
        };
        let (label, link) = if action == Action::CopyLiveDemo {
            ("Live demo", project.live_demo_link())
        } else {
            ("Source", project.github_link())
        };
        let url = match link {
            LinkState::Active(url) => url.to_owned(),
            LinkState::Unavailable => {
                self.error(format!("{label} link is unavailable"));
                return;
            }
        };

        if let Err(err) = self.clipboard.set_text(&url) {
            self.error(format!("Failed to copy {label} link: {err}"));
        } else {
            self.info(format!("Copied {label} link: {url}"));
        }
    }

    pub(in crate::tui) const fn modal_scroll_down(&mut self, lines: u16) {
        self.modal_scroll = self.modal_scroll.saturating_add(lines);
    }

    pub(in crate::tui) const fn modal_scroll_up(&mut self, lines: u16) {
        self.modal_scroll = self.modal_scroll.saturating_sub(lines);
    }

    pub(in crate::tui) const fn open_profile_viewer(&mut self) {
        self.profile_viewer = Some(ProfileViewerState { scroll_offset: 0 });
    }

    pub(in crate::tui) const fn close_profile_viewer(&mut self) {
        self.profile_viewer = None;
    }

    pub(in crate::tui) const fn profile_viewer_scroll_down(&mut self, lines: u16) {
        if let Some(viewer) = &mut self.profile_viewer {
            viewer.scroll_offset = viewer.scroll_offset.saturating_add(lines);
        }
    }

    pub(in crate::tui) const fn profile_viewer_scroll_up(&mut self, lines: u16) {
        if let Some(viewer) = &mut self.profile_viewer {
            viewer.scroll_offset = viewer.scroll_offset.saturating_sub(lines);
        }
    }
}

/// Digits 1-9 jump straight to a slide.
fn slide_shortcut(key: &KeyEvent) -> Option<usize> {
    if key.modifiers != KeyModifiers::NONE {
        return None;
    }
    let KeyCode::Char(ch) = key.code else {
        return None;
    };
    match ch.to_digit(10)? {
        0 => None,
        digit => usize::try_from(digit - 1).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn slide_shortcut_maps_digits_to_indices() {
        assert_eq!(slide_shortcut(&press(KeyCode::Char('1'))), Some(0));
        assert_eq!(slide_shortcut(&press(KeyCode::Char('9'))), Some(8));
        assert_eq!(slide_shortcut(&press(KeyCode::Char('0'))), None);
        assert_eq!(slide_shortcut(&press(KeyCode::Char('x'))), None);
        let ctrl = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::CONTROL);
        assert_eq!(slide_shortcut(&ctrl), None);
    }
}
