//! Application layer for folio.
//!
//! Loads the bundled (or configured) project catalog and profile, reads the
//! per-directory configuration and exposes a service shared by the CLI and TUI.

pub mod config;
pub mod data;
pub mod profile;
pub mod service;

// Re-exports for convenience
pub use config::{CarouselConfig, CatalogConfig, FolioConfig, LayoutConfig};
pub use data::{BUNDLED_CATALOG, DataError, bundled_catalog, load_catalog, parse_catalog};
pub use profile::{
    AcademicRecord, CertificateKind, CertificateProvider, EducationEntry, EsportsRecord,
    ExperienceEntry, PersonalInfo, Profile, SkillsByCategory, SocialLinks, Stats,
};
pub use service::{PortfolioService, ProjectDetail};
