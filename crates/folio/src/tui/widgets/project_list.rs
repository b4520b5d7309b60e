use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use folio_core::{ProjectRow, ScrollLock};

use super::super::constants::PROJECT_LIST_HIGHLIGHT_SYMBOL;
use super::super::view::Ui;
use super::util::{tone_color, truncate_with_ellipsis};

impl Ui {
    pub(in crate::tui) fn draw_project_list(&self, f: &mut Frame<'_>, area: Rect) {
        let rows = self.app.rows();
        // Borders plus the highlight symbol.
        let text_width = usize::from(area.width.saturating_sub(4));
        let wide = self.app.layout.is_wide(area.width);

        let items = if rows.is_empty() {
            vec![ListItem::new(Line::from("No projects found"))]
        } else {
            rows.iter()
                .map(|row| {
                    if wide {
                        wide_item(row, text_width)
                    } else {
                        narrow_item(row, text_width)
                    }
                })
                .collect()
        };

        let mut block = Block::default()
            .title(format!("Projects ({})", rows.len()))
            .borders(Borders::ALL);
        if self.app.showcase.lock().is_locked() {
            block = block.border_style(Style::default().fg(Color::DarkGray));
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(PROJECT_LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default();
        if !rows.is_empty() {
            state.select(Some(self.app.showcase.cursor()));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}

fn title_line<'a>(row: &ProjectRow<'a>, width: usize) -> Line<'a> {
    let mut spans = vec![
        Span::styled(
            truncate_with_ellipsis(row.name, width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", row.date), Style::default().fg(Color::DarkGray)),
    ];
    for badge in &row.badges {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[{}]", badge.label),
            Style::default().fg(tone_color(badge.tone)),
        ));
    }
    Line::from(spans)
}

fn chip_line<'a>(row: &ProjectRow<'a>) -> Line<'a> {
    if row.chips.is_empty() {
        return Line::from(Span::styled(
            "no technologies listed",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let mut spans = Vec::with_capacity(row.chips.len() * 2);
    for (index, chip) in row.chips.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            chip.tag,
            Style::default().fg(tone_color(chip.category.tone())),
        ));
    }
    Line::from(spans)
}

/// Three-line entry: title with badges, roles with summary, technology chips.
fn wide_item<'a>(row: &ProjectRow<'a>, width: usize) -> ListItem<'a> {
    let roles = row.roles.join(" / ");
    let summary = format!("{roles} | {}", row.description);
    let summary = Span::styled(
        truncate_with_ellipsis(&summary, width).into_owned(),
        Style::default().fg(Color::Gray),
    );
    ListItem::new(vec![
        title_line(row, width),
        Line::from(summary),
        chip_line(row),
        Line::from(""),
    ])
}

/// Two-line entry for narrow terminals: name and technology chips only.
fn narrow_item<'a>(row: &ProjectRow<'a>, width: usize) -> ListItem<'a> {
    ListItem::new(vec![
        Line::from(Span::styled(
            truncate_with_ellipsis(row.name, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chip_line(row),
    ])
}
