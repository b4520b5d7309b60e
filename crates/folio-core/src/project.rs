//! Project records as authored in the catalog.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::id::ProjectId;

/// Slides substituted when a record declares no images.
pub const PLACEHOLDER_IMAGES: [&str; 3] = [
    "https://via.placeholder.com/600x400/1e293b/64748b?text=Project+Screenshot+1",
    "https://via.placeholder.com/600x400/0f172a/475569?text=Project+Screenshot+2",
    "https://via.placeholder.com/600x400/334155/94a3b8?text=Project+Screenshot+3",
];

/// Role held on a project: one label or an ordered list of labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Role {
    /// Single role label.
    One(String),
    /// Ordered role labels.
    Many(Vec<String>),
}

impl Role {
    /// Role labels in authored order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        match self {
            Self::One(label) => std::slice::from_ref(label),
            Self::Many(labels) => labels,
        }
    }
}

/// Immutable project record, authored at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique identifier within the catalog.
    pub id: ProjectId,
    /// Display date, never parsed.
    pub date: String,
    /// Project name.
    pub name: String,
    /// Role(s) held on the project.
    pub role: Role,
    /// One-paragraph summary shown in the list.
    pub description: String,
    /// Longer text shown in the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Technology tags in display order.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Free-form labels such as "Freelance" or "Deployed".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,
    /// Relative image paths for the carousel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Key features list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    /// Contributions list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<String>>,
    /// Live demo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_demo: Option<String>,
    /// Whether the live demo link may be shown.
    #[serde(default)]
    pub show_live_demo: bool,
    /// Source repository URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Whether the source link may be shown.
    #[serde(default)]
    pub show_github: bool,
}

/// Display state of an outbound link button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "url", rename_all = "snake_case")]
pub enum LinkState<'a> {
    /// Link is shown and can be followed.
    Active(&'a str),
    /// Placeholder shown in a disabled style.
    Unavailable,
}

impl LinkState<'_> {
    /// Whether the link can be followed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Which outbound link button a [`LinkState`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Hosted demo.
    LiveDemo,
    /// Source repository.
    Code,
}

impl LinkKind {
    /// Caption of the active button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LiveDemo => "Live Demo",
            Self::Code => "View Code",
        }
    }

    /// Caption of the disabled placeholder.
    #[must_use]
    pub const fn unavailable_label(self) -> &'static str {
        match self {
            Self::LiveDemo => "Demo Unavailable",
            Self::Code => "Code Private",
        }
    }
}

fn gated_link(show: bool, url: Option<&str>) -> LinkState<'_> {
    match url {
        Some(url) if show => LinkState::Active(url),
        _ => LinkState::Unavailable,
    }
}

impl ProjectRecord {
    /// Images for the carousel; the placeholder sequence when none are declared.
    #[must_use]
    pub fn display_images(&self) -> Cow<'_, [String]> {
        match self.images.as_deref() {
            Some(images) if !images.is_empty() => Cow::Borrowed(images),
            _ => Cow::Owned(PLACEHOLDER_IMAGES.iter().map(|s| (*s).to_owned()).collect()),
        }
    }

    /// Number of carousel slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.images
            .as_deref()
            .filter(|images| !images.is_empty())
            .map_or(PLACEHOLDER_IMAGES.len(), <[String]>::len)
    }

    /// Body text for the detail view.
    #[must_use]
    pub fn detail_text(&self) -> &str {
        self.long_description
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(&self.description)
    }

    /// Live demo button state.
    #[must_use]
    pub fn live_demo_link(&self) -> LinkState<'_> {
        gated_link(self.show_live_demo, self.live_demo.as_deref())
    }

    /// Source code button state.
    #[must_use]
    pub fn github_link(&self) -> LinkState<'_> {
        gated_link(self.show_github, self.github.as_deref())
    }

    /// Badge labels, empty when none are declared.
    #[must_use]
    pub fn badge_labels(&self) -> &[String] {
        self.badges.as_deref().unwrap_or_default()
    }
}
