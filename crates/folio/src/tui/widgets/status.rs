use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::super::view::{Message, Ui};

impl Ui {
    pub(in crate::tui) fn draw_status(&self, f: &mut Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(Self::status_layout_constraints())
            .split(area);

        let instructions = Paragraph::new(self.instructions())
            .block(Block::default().title("Keys").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(instructions, rows[0]);

        let message = Paragraph::new(self.status_text())
            .block(Block::default().title("Status").borders(Borders::ALL))
            .style(self.status_style());
        f.render_widget(message, rows[1]);
    }

    pub(in crate::tui) const fn status_layout_constraints() -> [Constraint; 2] {
        [
            Constraint::Length(Self::INSTRUCTIONS_HEIGHT),
            Constraint::Min(Self::STATUS_MESSAGE_MIN_HEIGHT),
        ]
    }

    pub(in crate::tui) fn instructions(&self) -> String {
        self.keybindings
            .generate_help_text(self.detail_focus().view_type())
    }

    fn status_text(&self) -> Cow<'_, str> {
        self.message.as_ref().map_or_else(
            || {
                let total = self.app.showcase.catalog().len();
                Cow::Owned(format!(
                    "{} of {total} projects",
                    (self.app.showcase.cursor() + 1).min(total)
                ))
            },
            |msg| Cow::Borrowed(msg.text.as_str()),
        )
    }

    fn status_style(&self) -> Style {
        self.message.as_ref().map_or_else(Style::default, Message::style)
    }
}
