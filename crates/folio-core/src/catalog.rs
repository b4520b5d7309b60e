//! Ordered, id-indexed collection of project records.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::CatalogError;
use crate::id::ProjectId;
use crate::project::ProjectRecord;

/// Ordered, immutable collection of project records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Arc<ProjectRecord>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.to_string()));
            }
        }
        Ok(Self {
            projects: projects.into_iter().map(Arc::new).collect(),
        })
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Records in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ProjectRecord>> + '_ {
        self.projects.iter()
    }

    /// Record at a list position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<ProjectRecord>> {
        self.projects.get(index)
    }

    /// Position of the record with the given identifier.
    #[must_use]
    pub fn position(&self, id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|project| &project.id == id)
    }

    /// Record with the given identifier.
    #[must_use]
    pub fn find(&self, id: &ProjectId) -> Option<&Arc<ProjectRecord>> {
        self.position(id).and_then(|index| self.projects.get(index))
    }

    /// Record with the given identifier, or [`CatalogError::UnknownProject`].
    pub fn require(&self, id: &str) -> Result<&Arc<ProjectRecord>, CatalogError> {
        let parsed: ProjectId = id.parse()?;
        self.find(&parsed)
            .ok_or_else(|| CatalogError::UnknownProject(parsed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Role;

    fn project(id: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.parse().unwrap_or_else(|err| panic!("must parse id: {err}")),
            date: "2025".into(),
            name: format!("Project {id}"),
            role: Role::One("Developer".into()),
            description: "desc".into(),
            long_description: None,
            technologies: vec!["Rust".into()],
            badges: None,
            images: None,
            features: None,
            challenges: None,
            live_demo: None,
            show_live_demo: false,
            github: None,
            show_github: false,
        }
    }

    #[test]
    fn keeps_authored_order() {
        let catalog = Catalog::new(vec![project("b"), project("a"), project("c")])
            .unwrap_or_else(|err| panic!("catalog must build: {err}"));
        let ids: Vec<_> = catalog.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![project("a"), project("b"), project("a")])
            .err()
            .unwrap_or_else(|| panic!("duplicates must be rejected"));
        assert_eq!(err, CatalogError::DuplicateId("a".into()));
    }

    #[test]
    fn require_reports_unknown_projects() {
        let catalog =
            Catalog::new(vec![project("a")]).unwrap_or_else(|err| panic!("catalog must build: {err}"));
        assert!(catalog.require("a").is_ok());
        assert_eq!(
            catalog.require("missing").err(),
            Some(CatalogError::UnknownProject("missing".into()))
        );
        assert!(matches!(
            catalog.require(" "),
            Err(CatalogError::InvalidProjectId(_))
        ));
    }
}
