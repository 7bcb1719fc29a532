//! Site configuration. A project's settings live in a `folio.yaml` file which
//! is looked up from a directory and its ancestors.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The name of the project file.
pub const PROJECT_FILE: &str = "folio.yaml";

/// Site-wide settings consumed by the renderer.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// The prefix applied to every site-relative link, e.g. `/blog` for a site
    /// hosted under a sub-path. May be empty.
    #[serde(alias = "baseurl")]
    pub base_path: String,

    /// The site-relative path of the category index. Category links point at
    /// `{category_path}#{category_slug}`.
    pub category_path: String,

    /// The site-relative path of the tag index. Tag links point at
    /// `{tag_path}#{tag_slug}`.
    pub tag_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_path: String::new(),
            category_path: String::from("/categories/"),
            tag_path: String::from("/tags/"),
        }
    }
}

impl SiteConfig {
    /// Returns the path of the [`PROJECT_FILE`] in `dir` or in its nearest
    /// ancestor that has one.
    pub fn find_project_file(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .map(|ancestor| ancestor.join(PROJECT_FILE))
            .find(|path| path.exists())
    }

    /// Loads the configuration from the [`PROJECT_FILE`] in `dir` or in the
    /// nearest ancestor directory that has one. Falls back to
    /// [`SiteConfig::default`] when no ancestor has a project file; a project
    /// file that exists but can't be loaded is an error.
    pub fn from_directory(dir: &Path) -> Result<SiteConfig> {
        match SiteConfig::find_project_file(dir) {
            Some(path) => SiteConfig::from_project_file(&path),
            None => {
                tracing::info!(
                    dir = %dir.display(),
                    "no `{}` found; using the default configuration",
                    PROJECT_FILE
                );
                Ok(SiteConfig::default())
            }
        }
    }

    /// Loads the configuration from a specific project file.
    pub fn from_project_file(path: &Path) -> Result<SiteConfig> {
        let file = File::open(path)
            .with_context(|| format!("Opening project file `{}`", path.display()))?;
        let config: SiteConfig = serde_yaml::from_reader(file)
            .with_context(|| format!("Loading configuration `{}`", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            base_path = %config.base_path,
            "loaded site configuration"
        );
        Ok(config)
    }
}
