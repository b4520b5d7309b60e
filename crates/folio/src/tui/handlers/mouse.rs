use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_core::CloseTrigger;
use ratatui::layout::{Position, Rect};

use super::super::view::{DetailFocus, Ui};
use super::super::widgets::{modal_area, profile_viewer_area};

impl Ui {
    /// Handle a mouse event; `area` is the full terminal area.
    pub(in crate::tui) fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        let position = Position::new(mouse.column, mouse.row);
        match (mouse.kind, self.detail_focus()) {
            (MouseEventKind::Down(MouseButton::Left), DetailFocus::ProjectModal) => {
                if !modal_area(area).contains(position) {
                    self.close_project_modal(CloseTrigger::Backdrop);
                }
            }
            (MouseEventKind::Down(MouseButton::Left), DetailFocus::ProfileViewer) => {
                if !profile_viewer_area(area).contains(position) {
                    self.close_profile_viewer();
                }
            }
            (MouseEventKind::ScrollDown, DetailFocus::ProjectModal) => self.modal_scroll_down(1),
            (MouseEventKind::ScrollUp, DetailFocus::ProjectModal) => self.modal_scroll_up(1),
            (MouseEventKind::ScrollDown, DetailFocus::ProfileViewer) => {
                self.profile_viewer_scroll_down(1);
            }
            (MouseEventKind::ScrollUp, DetailFocus::ProfileViewer) => {
                self.profile_viewer_scroll_up(1);
            }
            (MouseEventKind::ScrollDown, DetailFocus::None) => {
                self.app.showcase.cursor_down();
            }
            (MouseEventKind::ScrollUp, DetailFocus::None) => {
                self.app.showcase.cursor_up();
            }
            _ => {}
        }
    }
}
