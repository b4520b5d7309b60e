//! Biography and credentials bundled alongside the project catalog.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const BUNDLED_PROFILE: &str = include_str!("../data/profile.toml");

/// Everything shown by the profile views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Personal details.
    pub personal: PersonalInfo,
    /// Schools attended, newest first.
    #[serde(default)]
    pub academics: Vec<AcademicRecord>,
    /// Certificates grouped by issuing provider.
    #[serde(default)]
    pub certificates: Vec<CertificateProvider>,
    /// Esports roles, newest first.
    #[serde(default)]
    pub esports: Vec<EsportsRecord>,
}

impl Profile {
    /// Profile compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_PROFILE).context("failed to parse bundled profile")
    }

    /// Parse profile TOML.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Certificates of one kind, flattened across providers.
    pub fn certificates_of(&self, kind: CertificateKind) -> impl Iterator<Item = (&str, &str)> {
        self.certificates
            .iter()
            .filter(move |provider| provider.kind == kind)
            .flat_map(|provider| {
                provider
                    .certificates
                    .iter()
                    .map(|title| (provider.provider.as_str(), title.as_str()))
            })
    }

    /// Total number of certificates of every kind.
    pub fn certificate_count(&self) -> usize {
        self.certificates
            .iter()
            .map(|provider| provider.certificates.len())
            .sum()
    }
}

/// Contact details and career summary shown at the top of the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Display name.
    pub name: String,
    /// Headline role.
    pub role: String,
    /// Alternate role titles.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Downloadable resume.
    #[serde(default)]
    pub resume_url: Option<String>,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// City or region.
    #[serde(default)]
    pub location: Option<String>,
    /// Personal website.
    #[serde(default)]
    pub website: Option<String>,
    /// Flat skill list.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Social profile links.
    #[serde(default)]
    pub social: SocialLinks,
    /// Headline counters.
    #[serde(default)]
    pub stats: Stats,
    /// Skills grouped by area.
    #[serde(default)]
    pub skills_by_category: SkillsByCategory,
    /// Work history, most recent first.
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    /// Degrees and courses.
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

/// Social profile URLs keyed by network name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinks(pub BTreeMap<String, String>);

/// Headline counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Years of professional experience.
    pub years_experience: u32,
    /// Shipped projects.
    pub projects_completed: u32,
    /// Certificates earned.
    pub certificates_earned: u32,
}

/// Skills grouped for the profile's skills section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsByCategory {
    /// Server-side languages and runtimes.
    #[serde(default)]
    pub backend: Vec<String>,
    /// Client-side technologies.
    #[serde(default)]
    pub frontend: Vec<String>,
    /// Database engines.
    #[serde(default)]
    pub database: Vec<String>,
    /// Application frameworks.
    #[serde(default)]
    pub framework: Vec<String>,
    /// Tooling and deployment.
    #[serde(default)]
    pub devops: Vec<String>,
}

impl SkillsByCategory {
    /// `(heading, skills)` pairs in display order, skipping empty groups.
    #[must_use]
    pub fn groups(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Backend", self.backend.as_slice()),
            ("Frontend", self.frontend.as_slice()),
            ("Database", self.database.as_slice()),
            ("Frameworks", self.framework.as_slice()),
            ("DevOps", self.devops.as_slice()),
        ]
        .into_iter()
        .filter(|(_, skills)| !skills.is_empty())
        .collect()
    }
}

/// One position held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Employer.
    pub company: String,
    /// Job title.
    pub role: String,
    /// Free-form tenure, e.g. "2022 - Present".
    pub duration: String,
    /// What the role involved.
    pub description: String,
}

/// One degree or course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// School or provider.
    pub institution: String,
    /// Degree or course name.
    pub degree: String,
    /// Free-form completion year.
    pub year: String,
    /// Optional note shown under the entry.
    #[serde(default)]
    pub description: Option<String>,
}

/// One school with grades, offices held and awards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicRecord {
    /// School name.
    pub institution: String,
    /// Years attended.
    pub period: String,
    /// Grades and honors.
    #[serde(default)]
    pub details: Vec<String>,
    /// Offices held.
    #[serde(default)]
    pub positions: Vec<String>,
    /// Awards.
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Kind of credential a provider issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateKind {
    /// Formal certification.
    Certification,
    /// In-person seminar.
    Seminar,
    /// Online webinar.
    Webinar,
}

impl CertificateKind {
    /// Every kind in display order.
    pub const ALL: [Self; 3] = [Self::Certification, Self::Seminar, Self::Webinar];

    /// Heading used when listing certificates of this kind.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Certification => "Certifications",
            Self::Seminar => "Seminars",
            Self::Webinar => "Webinars",
        }
    }
}

/// Certificates issued by one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateProvider {
    /// Issuing organization.
    pub provider: String,
    /// Credential kind.
    #[serde(rename = "type")]
    pub kind: CertificateKind,
    /// Certificate titles.
    pub certificates: Vec<String>,
}

/// One competitive gaming stint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsportsRecord {
    /// Team or league.
    pub organization: String,
    /// Position on the team.
    pub role: String,
    /// Years active.
    pub period: String,
    /// Highlights; the first entry doubles as the summary line.
    #[serde(default)]
    pub description: Vec<String>,
}

impl EsportsRecord {
    /// First highlight, used as a one-line summary.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.description.first().map(String::as_str)
    }
}
