use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_core::{
    Catalog, Category, LinkState, ProjectRecord, ProjectRow, ScrollLock, Showcase, TagChip,
    TagClassifier,
};
use serde::Serialize;

use crate::config::FolioConfig;
use crate::data::{bundled_catalog, load_catalog};
use crate::profile::Profile;

/// Everything the detail view shows for one project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail<'a> {
    /// List row data (name, date, chips, badges).
    #[serde(flatten)]
    pub row: ProjectRow<'a>,
    /// Long description, or the summary when absent.
    pub detail_text: &'a str,
    /// Carousel slides with placeholders substituted.
    pub images: Vec<String>,
    /// Key features.
    pub features: &'a [String],
    /// Contributions.
    pub contributions: &'a [String],
    /// Tag counts per category.
    pub tally: Vec<(Category, usize)>,
    /// Live demo button.
    pub live_demo: LinkState<'a>,
    /// Source code button.
    pub github: LinkState<'a>,
}

impl<'a> ProjectDetail<'a> {
    /// Build the detail view model for `project`.
    pub fn new(project: &'a ProjectRecord, classifier: &TagClassifier) -> Self {
        Self {
            row: ProjectRow::new(project, classifier),
            detail_text: project.detail_text(),
            images: project.display_images().into_owned(),
            features: project.features.as_deref().unwrap_or_default(),
            contributions: project.challenges.as_deref().unwrap_or_default(),
            tally: classifier.tally(&project.technologies),
            live_demo: project.live_demo_link(),
            github: project.github_link(),
        }
    }
}

/// Service façade shared by the CLI commands and the TUI.
pub struct PortfolioService {
    base_dir: PathBuf,
    config: FolioConfig,
    catalog: Catalog,
    classifier: TagClassifier,
}

impl PortfolioService {
    /// Load configuration and catalog for `base_dir`.
    ///
    /// # Errors
    /// Returns an error if the configuration or the catalog cannot be loaded.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let config = FolioConfig::from_dir(&base_dir)?;
        let catalog = match config.catalog_path(&base_dir) {
            Some(path) => load_catalog(&path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?,
            None => bundled_catalog().context("failed to load bundled catalog")?,
        };
        Ok(Self::new(base_dir, config, catalog))
    }

    /// Service over an already loaded catalog.
    pub const fn new(base_dir: PathBuf, config: FolioConfig, catalog: Catalog) -> Self {
        Self {
            base_dir,
            config,
            catalog,
            classifier: TagClassifier::builtin(),
        }
    }

    /// Directory the configuration was read from.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub const fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn classifier(&self) -> &TagClassifier {
        &self.classifier
    }

    /// List rows in catalog order.
    pub fn rows(&self) -> Vec<ProjectRow<'_>> {
        self.catalog
            .iter()
            .map(|project| ProjectRow::new(project, &self.classifier))
            .collect()
    }

    /// Detail view for the project with identifier `id`.
    ///
    /// # Errors
    /// Returns an error when the identifier is blank or unknown.
    pub fn detail(&self, id: &str) -> Result<ProjectDetail<'_>> {
        let project = self.catalog.require(id)?;
        Ok(ProjectDetail::new(project, &self.classifier))
    }

    /// Classify free-standing tags.
    pub fn classify<'a>(&self, tags: &'a [String]) -> Vec<TagChip<'a>> {
        self.classifier.chips(tags)
    }

    /// Bundled profile and credentials.
    ///
    /// # Errors
    /// Returns an error if the bundled profile is malformed.
    pub fn profile(&self) -> Result<Profile> {
        Profile::bundled()
    }

    /// Interactive showcase over this catalog, guarded by `lock`.
    pub fn showcase<L: ScrollLock>(&self, lock: L) -> Showcase<L> {
        Showcase::new(self.catalog.clone(), lock, self.config.carousel.transition())
            .with_classifier(self.classifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{CloseTrigger, ScrollLatch};
    use tempfile::tempdir;

    fn service() -> PortfolioService {
        let dir = tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
        PortfolioService::open(dir.path()).unwrap_or_else(|err| panic!("service: {err:#}"))
    }

    #[test]
    fn detail_substitutes_placeholders_and_falls_back_to_summary() {
        let catalog = crate::data::parse_catalog(
            "[[projects]]\nid = \"bare\"\ndate = \"2024\"\nname = \"Bare\"\nrole = \"Dev\"\ndescription = \"summary\"\nimages = []",
        )
        .unwrap_or_else(|err| panic!("fixture catalog: {err}"));
        let service = PortfolioService::new(PathBuf::from("."), FolioConfig::default(), catalog);
        let detail = service
            .detail("bare")
            .unwrap_or_else(|err| panic!("detail: {err:#}"));
        assert_eq!(detail.images.len(), folio_core::project::PLACEHOLDER_IMAGES.len());
        assert_eq!(detail.detail_text, "summary");
        assert!(detail.features.is_empty());
        assert_eq!(detail.github, LinkState::Unavailable);
    }

    #[test]
    fn detail_rejects_unknown_ids() {
        let service = service();
        let Err(err) = service.detail("nope") else {
            panic!("unknown project should error");
        };
        assert!(err.to_string().contains("Project not found: nope"));
    }

    #[test]
    fn classify_keeps_input_order() {
        let service = service();
        let tags = vec!["Docker".to_owned(), "Vue".to_owned(), "Haskell".to_owned()];
        let categories: Vec<_> = service.classify(&tags).iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            [Category::DevOps, Category::Frontend, Category::Other]
        );
    }

    #[test]
    fn showcase_uses_configured_transition() {
        let service = service();
        let mut showcase = service.showcase(ScrollLatch::default());
        assert!(showcase.view(0));
        assert_eq!(
            showcase.modal().carousel().map(|c| c.debounce()),
            Some(service.config().carousel.transition())
        );
        assert!(showcase.close(CloseTrigger::Explicit));
    }
}
