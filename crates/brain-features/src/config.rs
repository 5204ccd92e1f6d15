//! Configuration for feature surfaces.
//!
//! Loads config from:
//! 1. Global: ~/.config/brain/features.toml
//! 2. Per-project: .brain/features.toml (overrides global)
//!
//! Example features.toml:
//! ```toml
//! [tags]
//! disabled = ["disable_gen_UI", "disable_android_asr"]
//! catalog = ["disable_gen_UI", "disable_android_asr"]
//!
//! [naming]
//! verb = "has"
//! strip_prefix = "disable_"
//! ```
//!
//! Unset fields inherit from the lower layer, then from built-in defaults.

use crate::error::ConfigError;
use crate::surface::{AccessorNaming, SurfaceOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Tag lists.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TagsConfig {
    /// Disabled tags for the subject.
    pub disabled: Option<Vec<String>>,
    /// Catalog to synthesize accessors for (default catalog when unset).
    pub catalog: Option<Vec<String>>,
}

/// Accessor naming overrides.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NamingConfig {
    pub verb: Option<String>,
    /// Prefix stripped before naming. An empty string disables stripping.
    pub strip_prefix: Option<String>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FeaturesConfig {
    pub tags: TagsConfig,
    pub naming: NamingConfig,
}

impl FeaturesConfig {
    /// Load configuration for a project.
    ///
    /// Reads the global config, then layers `.brain/features.toml` under
    /// `root` on top. Missing files are skipped silently; unreadable or
    /// invalid ones are skipped with a warning.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            config = config.merge(Self::load_lenient(&global_path));
        }

        let project_path = Self::project_config_path(root);
        config.merge(Self::load_lenient(&project_path))
    }

    /// Load a single config file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Path of the per-project config under `root`.
    pub fn project_config_path(root: &Path) -> PathBuf {
        root.join(".brain").join("features.toml")
    }

    /// Get the global config path.
    pub fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("brain").join("features.toml"))
    }

    fn load_lenient(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_file(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded feature config");
                config
            }
            Err(e) => {
                tracing::warn!("skipping feature config: {e}");
                Self::default()
            }
        }
    }

    /// Merge another config into this one. Fields set in `other` win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            tags: TagsConfig {
                disabled: other.tags.disabled.or(self.tags.disabled),
                catalog: other.tags.catalog.or(self.tags.catalog),
            },
            naming: NamingConfig {
                verb: other.naming.verb.or(self.naming.verb),
                strip_prefix: other.naming.strip_prefix.or(self.naming.strip_prefix),
            },
        }
    }

    /// Accessor naming with defaults filled in.
    pub fn accessor_naming(&self) -> AccessorNaming {
        let defaults = AccessorNaming::default();
        AccessorNaming {
            verb: self.naming.verb.clone().unwrap_or(defaults.verb),
            strip_prefix: match &self.naming.strip_prefix {
                Some(p) if p.is_empty() => None,
                Some(p) => Some(p.clone()),
                None => defaults.strip_prefix,
            },
        }
    }

    /// Options for [`crate::create_registry`].
    pub fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            disabled_tags: self.tags.disabled.clone().unwrap_or_default(),
            catalog: self.tags.catalog.clone(),
            naming: self.accessor_naming(),
        }
    }
}
