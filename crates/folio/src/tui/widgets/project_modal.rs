use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use folio_app::ProjectDetail;
use folio_core::{Carousel, LinkKind, LinkState};

use super::super::constants::{
    MODAL_HEIGHT_PERCENT, MODAL_MIN_HEIGHT, MODAL_MIN_WIDTH, MODAL_WIDTH_PERCENT, SLIDE_DOT_ACTIVE,
    SLIDE_DOT_INACTIVE, SLIDE_HEIGHT,
};
use super::super::view::Ui;
use super::util::{centered_popup, tone_color, truncate_with_ellipsis};

/// Screen area of the project modal; clicks outside it close the modal.
pub(in crate::tui) fn modal_area(area: Rect) -> Rect {
    centered_popup(
        area,
        MODAL_WIDTH_PERCENT,
        MODAL_HEIGHT_PERCENT,
        MODAL_MIN_WIDTH,
        MODAL_MIN_HEIGHT,
    )
}

impl Ui {
    pub(in crate::tui) fn draw_project_modal(&self, f: &mut Frame<'_>) {
        let (Some(detail), Some(carousel)) = (
            self.app.modal_detail(),
            self.app.showcase.modal().carousel(),
        ) else {
            return;
        };
        let popup_area = modal_area(f.area());

        let block = Block::default()
            .title(format!("{} ({})", detail.row.name, detail.row.id))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        f.render_widget(Clear, popup_area);
        f.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(SLIDE_HEIGHT), Constraint::Min(1)])
            .split(inner);

        draw_slide(f, chunks[0], &detail, carousel);

        let paragraph = Paragraph::new(detail_lines(&detail))
            .wrap(Wrap { trim: false })
            .scroll((self.modal_scroll, 0));
        f.render_widget(paragraph, chunks[1]);
    }
}

fn draw_slide(f: &mut Frame<'_>, area: Rect, detail: &ProjectDetail<'_>, carousel: &Carousel) {
    let index = carousel.current_index();
    let total = carousel.len();
    let image = detail.images.get(index).map_or("", String::as_str);
    // Two border columns.
    let width = usize::from(area.width.saturating_sub(2));

    let style = if carousel.is_animating() {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    let dots = (0..total)
        .map(|slot| {
            if slot == index {
                SLIDE_DOT_ACTIVE
            } else {
                SLIDE_DOT_INACTIVE
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let path = if total > 1 {
        format!("◀  {image}  ▶")
    } else {
        image.to_owned()
    };

    let lines = vec![
        Line::from(""),
        Line::from(truncate_with_ellipsis(&path, width).into_owned()),
        Line::from(Span::styled(dots, Style::default().fg(Color::Cyan))),
    ];
    let slide = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .title(format!("Image {}/{total}", index + 1))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(slide, area);
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn link_line(kind: LinkKind, link: LinkState<'_>) -> Line<'_> {
    match link {
        LinkState::Active(url) => Line::from(vec![
            Span::styled(
                format!("[{}] ", kind.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(url, Style::default().fg(Color::Green)),
        ]),
        LinkState::Unavailable => Line::from(Span::styled(
            format!("[{}]", kind.unavailable_label()),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )),
    }
}

pub(in crate::tui) fn detail_lines<'a>(detail: &ProjectDetail<'a>) -> Vec<Line<'a>> {
    let row = &detail.row;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(Color::DarkGray)),
            Span::raw(row.date),
        ]),
        Line::from(vec![
            Span::styled("Role: ", Style::default().fg(Color::DarkGray)),
            Span::raw(row.roles.join(", ")),
        ]),
    ];

    if !row.badges.is_empty() {
        let mut spans = Vec::with_capacity(row.badges.len() * 2);
        for badge in &row.badges {
            spans.push(Span::styled(
                format!("[{}]", badge.label),
                Style::default().fg(tone_color(badge.tone)),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.extend(detail.detail_text.lines().map(Line::from));

    if !detail.tally.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Technologies"));
        for (category, count) in &detail.tally {
            let color = tone_color(category.tone());
            let tags = row
                .chips
                .iter()
                .filter(|chip| chip.category == *category)
                .map(|chip| chip.tag)
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ({count}): ", category.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(tags, Style::default().fg(color)),
            ]));
        }
    }

    for (title, items) in [
        ("Key Features", detail.features),
        ("My Contributions", detail.contributions),
    ] {
        if items.is_empty() {
            continue;
        }
        lines.push(Line::from(""));
        lines.push(heading(title));
        lines.extend(items.iter().map(|item| Line::from(format!("  • {item}"))));
    }

    lines.push(Line::from(""));
    lines.push(link_line(LinkKind::LiveDemo, detail.live_demo));
    lines.push(link_line(LinkKind::Code, detail.github));
    lines
}
