use std::fmt::Write as _;

use anyhow::Result;
use folio_app::{CertificateKind, PortfolioService, Profile, ProjectDetail};
use folio_core::{LinkKind, LinkState, ProjectRow, TagChip};

use crate::Command;

/// Dispatch a non-interactive command.
pub fn run(command: Command, service: &PortfolioService) -> Result<()> {
    let output = render(command, service)?;
    print!("{output}");
    Ok(())
}

fn render(command: Command, service: &PortfolioService) -> Result<String> {
    match command {
        Command::Ls { json } => {
            let rows = service.rows();
            if json {
                Ok(format!("{}\n", serde_json::to_string_pretty(&rows)?))
            } else if rows.is_empty() {
                Ok("No projects found\n".to_owned())
            } else {
                Ok(render_project_table(&rows))
            }
        }
        Command::Show { project, json } => {
            let detail = service.detail(&project)?;
            if json {
                Ok(format!("{}\n", serde_json::to_string_pretty(&detail)?))
            } else {
                Ok(render_project_detail(&detail))
            }
        }
        Command::Classify { tags } => Ok(render_classification(&service.classify(&tags))),
        Command::Profile => Ok(render_profile(&service.profile()?)),
        Command::Tui | Command::InitConfig { .. } => {
            unreachable!("interactive commands are routed before dispatch")
        }
    }
}

fn render_project_table(rows: &[ProjectRow<'_>]) -> String {
    let mut out = String::new();
    out.push_str("ID | Date | Name | Technologies | Badges\n");
    out.push_str("-- | ---- | ---- | ------------ | ------\n");
    for row in rows {
        let tags = row
            .chips
            .iter()
            .map(|chip| format!("{} ({})", chip.tag, chip.category.label()))
            .collect::<Vec<_>>()
            .join(", ");
        let badges = row
            .badges
            .iter()
            .map(|badge| badge.label)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "{} | {} | {} | {} | {}",
            row.id,
            row.date,
            row.name,
            if tags.is_empty() { "-" } else { &tags },
            if badges.is_empty() { "-" } else { &badges },
        );
    }
    out
}

fn render_project_detail(detail: &ProjectDetail<'_>) -> String {
    let row = &detail.row;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", row.name, row.id);
    let _ = writeln!(out, "Date:  {}", row.date);
    let _ = writeln!(out, "Role:  {}", row.roles.join(", "));
    if !row.badges.is_empty() {
        let badges = row
            .badges
            .iter()
            .map(|badge| format!("{} [{}]", badge.label, badge.tone.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Badges: {badges}");
    }
    out.push('\n');
    let _ = writeln!(out, "{}", detail.detail_text);

    if !row.chips.is_empty() {
        out.push_str("\nTechnologies:\n");
        for (category, count) in &detail.tally {
            let tags = row
                .chips
                .iter()
                .filter(|chip| chip.category == *category)
                .map(|chip| chip.tag)
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  {} ({count}): {tags}", category.label());
        }
    }
    push_list(&mut out, "Key Features", detail.features);
    push_list(&mut out, "My Contributions", detail.contributions);

    let _ = writeln!(out, "\nImages ({}):", detail.images.len());
    for (index, image) in detail.images.iter().enumerate() {
        let _ = writeln!(out, "  {}. {image}", index + 1);
    }

    out.push('\n');
    for (kind, link) in [
        (LinkKind::LiveDemo, detail.live_demo),
        (LinkKind::Code, detail.github),
    ] {
        let _ = writeln!(out, "{}: {}", kind.label(), describe_link(kind, link));
    }
    out
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{heading}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

const fn describe_link(kind: LinkKind, link: LinkState<'_>) -> &str {
    match link {
        LinkState::Active(url) => url,
        LinkState::Unavailable => kind.unavailable_label(),
    }
}

fn render_classification(chips: &[TagChip<'_>]) -> String {
    let width = chips
        .iter()
        .map(|chip| chip.tag.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for chip in chips {
        let _ = writeln!(out, "{:<width$}  {}", chip.tag, chip.category.label());
    }
    out
}

fn render_profile(profile: &Profile) -> String {
    let personal = &profile.personal;
    let mut out = String::new();
    let _ = writeln!(out, "{} | {}", personal.name, personal.role);
    if !personal.roles.is_empty() {
        let _ = writeln!(out, "{}", personal.roles.join(" / "));
    }
    let _ = writeln!(out, "Email: {}", personal.email);
    for (label, value) in [
        ("Phone", personal.phone.as_deref()),
        ("Location", personal.location.as_deref()),
        ("Website", personal.website.as_deref()),
        ("Resume", personal.resume_url.as_deref()),
    ] {
        if let Some(value) = value {
            let _ = writeln!(out, "{label}: {value}");
        }
    }
    for (network, url) in &personal.social.0 {
        let _ = writeln!(out, "{network}: {url}");
    }
    let stats = personal.stats;
    let _ = writeln!(
        out,
        "\n{}+ years | {}+ projects | {}+ certificates",
        stats.years_experience, stats.projects_completed, stats.certificates_earned
    );

    let groups = personal.skills_by_category.groups();
    if !groups.is_empty() {
        out.push_str("\nSkills:\n");
        for (heading, skills) in groups {
            let _ = writeln!(out, "  {heading}: {}", skills.join(", "));
        }
    }

    if !profile.academics.is_empty() {
        out.push_str("\nAcademics:\n");
        for record in &profile.academics {
            let _ = writeln!(out, "  {} ({})", record.institution, record.period);
            for line in record
                .details
                .iter()
                .chain(&record.positions)
                .chain(&record.achievements)
            {
                let _ = writeln!(out, "    - {line}");
            }
        }
    }

    for kind in CertificateKind::ALL {
        let entries: Vec<_> = profile.certificates_of(kind).collect();
        if entries.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{}:", kind.heading());
        for (provider, title) in entries {
            let _ = writeln!(out, "  - {title} ({provider})");
        }
    }

    if !profile.esports.is_empty() {
        out.push_str("\nEsports:\n");
        for record in &profile.esports {
            let _ = writeln!(
                out,
                "  {} - {} ({})",
                record.organization, record.role, record.period
            );
            if let Some(summary) = record.summary() {
                let _ = writeln!(out, "    {summary}");
            }
        }
    }
    out
}
