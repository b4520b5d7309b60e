use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use folio_app::{CertificateKind, Profile};

use super::super::constants::{
    PROFILE_VIEWER_HEIGHT_PERCENT, PROFILE_VIEWER_MIN_HEIGHT, PROFILE_VIEWER_MIN_WIDTH,
    PROFILE_VIEWER_WIDTH_PERCENT,
};
use super::super::view::Ui;
use super::util::centered_popup;

pub(in crate::tui) fn profile_viewer_area(area: Rect) -> Rect {
    centered_popup(
        area,
        PROFILE_VIEWER_WIDTH_PERCENT,
        PROFILE_VIEWER_HEIGHT_PERCENT,
        PROFILE_VIEWER_MIN_WIDTH,
        PROFILE_VIEWER_MIN_HEIGHT,
    )
}

impl Ui {
    pub(in crate::tui) fn draw_profile_viewer(&self, f: &mut Frame<'_>) {
        let Some(viewer) = &self.profile_viewer else {
            return;
        };
        let popup_area = profile_viewer_area(f.area());

        let block = Block::default()
            .title(format!("Profile: {}", self.app.profile.personal.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        f.render_widget(Clear, popup_area);
        f.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let paragraph = Paragraph::new(profile_lines(&self.app.profile))
            .wrap(Wrap { trim: false })
            .scroll((viewer.scroll_offset, 0));
        f.render_widget(paragraph, inner);
    }
}

fn section(title: &str) -> [Line<'_>; 2] {
    [
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

fn dim(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

pub(in crate::tui) fn profile_lines(profile: &Profile) -> Vec<Line<'_>> {
    let personal = &profile.personal;
    let mut lines = vec![
        Line::from(Span::styled(
            personal.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(personal.role.as_str()),
    ];
    if !personal.roles.is_empty() {
        lines.push(dim(personal.roles.join(" / ")));
    }

    lines.extend(section("Contact"));
    lines.push(Line::from(format!("Email: {}", personal.email)));
    for (label, value) in [
        ("Phone", personal.phone.as_deref()),
        ("Location", personal.location.as_deref()),
        ("Website", personal.website.as_deref()),
        ("Resume", personal.resume_url.as_deref()),
    ] {
        if let Some(value) = value {
            lines.push(Line::from(format!("{label}: {value}")));
        }
    }
    for (network, url) in &personal.social.0 {
        lines.push(Line::from(format!("{network}: {url}")));
    }

    let stats = personal.stats;
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "{}+ years | {}+ projects | {}+ certificates",
        stats.years_experience, stats.projects_completed, stats.certificates_earned
    )));

    let groups = personal.skills_by_category.groups();
    if !groups.is_empty() {
        lines.extend(section("Skills"));
        for (heading, skills) in groups {
            lines.push(Line::from(format!("{heading}: {}", skills.join(", "))));
        }
    }

    if !personal.experience.is_empty() {
        lines.extend(section("Experience"));
        for entry in &personal.experience {
            lines.push(Line::from(format!("{} - {}", entry.role, entry.company)));
            lines.push(dim(format!("  {}", entry.duration)));
            lines.push(Line::from(format!("  {}", entry.description)));
        }
    }

    if !personal.education.is_empty() {
        lines.extend(section("Education"));
        for entry in &personal.education {
            lines.push(Line::from(format!("{} - {}", entry.degree, entry.institution)));
            lines.push(dim(format!("  {}", entry.year)));
            if let Some(description) = &entry.description {
                lines.push(Line::from(format!("  {description}")));
            }
        }
    }

    if !profile.academics.is_empty() {
        lines.extend(section("Academics"));
        for record in &profile.academics {
            lines.push(Line::from(format!("{} ({})", record.institution, record.period)));
            for detail in record
                .details
                .iter()
                .chain(&record.positions)
                .chain(&record.achievements)
            {
                lines.push(Line::from(format!("  • {detail}")));
            }
        }
    }

    for kind in CertificateKind::ALL {
        let entries: Vec<_> = profile.certificates_of(kind).collect();
        if entries.is_empty() {
            continue;
        }
        lines.extend(section(kind.heading()));
        for (provider, title) in entries {
            lines.push(Line::from(vec![
                Span::raw(format!("  • {title} ")),
                Span::styled(format!("({provider})"), Style::default().fg(Color::DarkGray)),
            ]));
        }
    }

    if !profile.esports.is_empty() {
        lines.extend(section("Esports"));
        for record in &profile.esports {
            lines.push(Line::from(format!(
                "{} - {} ({})",
                record.organization, record.role, record.period
            )));
            if let Some(summary) = record.summary() {
                lines.push(dim(format!("  {summary}")));
            }
        }
    }

    lines
}
