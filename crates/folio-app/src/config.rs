use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

const CONFIG_DIR: &str = ".folio";
const CONFIG_FILE: &str = "config.toml";

/// Upper bound accepted for `carousel.transition_ms`.
pub const MAX_TRANSITION_MS: u64 = 2_000;

/// Per-directory configuration loaded from `.folio/config.toml`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl FolioConfig {
    /// Load configuration from `dir`, falling back to defaults when the file is absent.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let config_path = Self::path_in(dir.as_ref());
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Location of the configuration file for `dir`.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// External catalog path resolved against `dir`, if one is configured.
    pub fn catalog_path(&self, dir: &Path) -> Option<PathBuf> {
        self.catalog.path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                dir.join(path)
            }
        })
    }

    fn validate(&self) -> Result<()> {
        self.carousel.validate()?;
        self.layout.validate()
    }
}

/// Carousel timing block.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CarouselConfig {
    #[serde(default = "CarouselConfig::default_transition_ms")]
    pub transition_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: Self::default_transition_ms(),
        }
    }
}

impl CarouselConfig {
    const fn default_transition_ms() -> u64 {
        150
    }

    /// Debounce window applied to every carousel.
    pub const fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.transition_ms > MAX_TRANSITION_MS {
            bail!(
                "carousel.transition_ms must be at most {MAX_TRANSITION_MS} (got {})",
                self.transition_ms
            );
        }
        Ok(())
    }
}

/// Layout breakpoint block.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    #[serde(default = "LayoutConfig::default_wide_min_width")]
    pub wide_min_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wide_min_width: Self::default_wide_min_width(),
        }
    }
}

impl LayoutConfig {
    const fn default_wide_min_width() -> u16 {
        100
    }

    /// Whether a terminal `width` columns wide gets the wide layout.
    pub const fn is_wide(&self, width: u16) -> bool {
        width >= self.wide_min_width
    }

    fn validate(&self) -> Result<()> {
        if self.wide_min_width == 0 {
            bail!("layout.wide_min_width must be greater than zero");
        }
        Ok(())
    }
}

/// Catalog source block.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// External catalog replacing the bundled one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_config(dir: &Path, body: &str) -> Result<()> {
        let cfg_dir = dir.join(CONFIG_DIR);
        fs::create_dir_all(&cfg_dir)?;
        let mut file = fs::File::create(cfg_dir.join(CONFIG_FILE))?;
        writeln!(file, "{body}")?;
        Ok(())
    }

    #[test]
    fn missing_config_returns_defaults() -> Result<()> {
        let dir = tempdir()?;
        let cfg = FolioConfig::from_dir(dir.path())?;
        assert_eq!(cfg.carousel.transition(), Duration::from_millis(150));
        assert_eq!(cfg.layout.wide_min_width, 100);
        assert!(cfg.catalog_path(dir.path()).is_none());
        Ok(())
    }

    #[test]
    fn load_config_with_all_sections() -> Result<()> {
        let dir = tempdir()?;
        write_config(
            dir.path(),
            "[carousel]\ntransition_ms = 300\n\n[layout]\nwide_min_width = 80\n\n[catalog]\npath = \"work/projects.toml\"",
        )?;

        let cfg = FolioConfig::from_dir(dir.path())?;
        assert_eq!(cfg.carousel.transition_ms, 300);
        assert!(cfg.layout.is_wide(80));
        assert!(!cfg.layout.is_wide(79));
        assert_eq!(
            cfg.catalog_path(dir.path()),
            Some(dir.path().join("work/projects.toml"))
        );
        Ok(())
    }

    #[test]
    fn partial_sections_keep_defaults() -> Result<()> {
        let dir = tempdir()?;
        write_config(dir.path(), "[layout]\nwide_min_width = 120")?;
        let cfg = FolioConfig::from_dir(dir.path())?;
        assert_eq!(cfg.carousel, CarouselConfig::default());
        assert_eq!(cfg.layout.wide_min_width, 120);
        Ok(())
    }

    #[test]
    fn slow_transition_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        write_config(dir.path(), "[carousel]\ntransition_ms = 5000")?;
        let Err(err) = FolioConfig::from_dir(dir.path()) else {
            panic!("oversized transition should error");
        };
        assert!(err.to_string().contains("carousel.transition_ms"));
        Ok(())
    }

    #[test]
    fn zero_breakpoint_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        write_config(dir.path(), "[layout]\nwide_min_width = 0")?;
        let Err(err) = FolioConfig::from_dir(dir.path()) else {
            panic!("zero breakpoint should error");
        };
        assert!(err.to_string().contains("wide_min_width"));
        Ok(())
    }

    #[test]
    fn unknown_keys_fail_to_parse() -> Result<()> {
        let dir = tempdir()?;
        write_config(dir.path(), "[carousel]\nspeed = 3")?;
        let Err(err) = FolioConfig::from_dir(dir.path()) else {
            panic!("unknown key should error");
        };
        assert!(err.to_string().contains("failed to parse"));
        Ok(())
    }

    #[test]
    fn absolute_catalog_path_is_kept() {
        let cfg = FolioConfig {
            catalog: CatalogConfig {
                path: Some(PathBuf::from("/srv/projects.toml")),
            },
            ..FolioConfig::default()
        };
        assert_eq!(
            cfg.catalog_path(Path::new("/home/me")),
            Some(PathBuf::from("/srv/projects.toml"))
        );
    }
}
