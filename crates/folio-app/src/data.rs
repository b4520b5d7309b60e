//! Catalog sources: the bundled `projects.toml` or an external file.

use std::{fs, path::Path};

use folio_core::{Catalog, CatalogError, ProjectRecord};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Catalog compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../data/projects.toml");

/// Errors raised while turning catalog text into a [`Catalog`].
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be read.
    #[error("failed to read catalog {path}")]
    Read {
        /// Offending path.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The TOML did not match the record shape.
    #[error("failed to parse catalog")]
    Parse(#[from] toml::de::Error),
    /// The records violate a catalog invariant.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// Parse catalog TOML (`[[projects]]` tables) into a validated catalog.
pub fn parse_catalog(contents: &str) -> Result<Catalog, DataError> {
    let file: CatalogFile = toml::from_str(contents)?;
    Ok(Catalog::new(file.projects)?)
}

/// Catalog bundled with the binary.
pub fn bundled_catalog() -> Result<Catalog, DataError> {
    let catalog = parse_catalog(BUNDLED_CATALOG)?;
    info!(projects = catalog.len(), "loaded bundled catalog");
    Ok(catalog)
}

/// Catalog read from `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog, DataError> {
    let contents = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = parse_catalog(&contents)?;
    info!(projects = catalog.len(), path = %path.display(), "loaded catalog");
    Ok(catalog)
}
