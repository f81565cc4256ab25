//! Generator settings
//!
//! The generator works against a fixed project layout (see [`crate::defaults`]).
//! Every location in that layout can be overridden by an optional
//! `autoloader.yaml` at the project root:
//!
//! ```yaml
//! source_dir: app
//! manifest_module: Registry.js
//! import_root: /app
//! ```
//!
//! Fields that are left out keep their default. Unknown fields are rejected so
//! that a misspelled key does not silently fall back to the default.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::{Error, Result};

/// Project layout used by one generator instance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Source tree, relative to the project root
    pub source_dir: PathBuf,
    /// Fragment directory, relative to the source root
    pub config_dir: PathBuf,
    pub config_fragment: String,
    pub stage_fragment: String,
    pub routing_fragment: String,
    /// Generated configuration module, relative to the fragment directory
    pub config_module: String,
    /// Generated manifest module, relative to the source root
    pub manifest_module: String,
    /// Extension of scanned source files, without the leading dot
    pub source_extension: String,
    /// Prefix of import specifiers in the manifest
    pub import_root: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(defaults::SOURCE_DIR),
            config_dir: PathBuf::from(defaults::CONFIG_DIR),
            config_fragment: defaults::CONFIG_FRAGMENT.to_string(),
            stage_fragment: defaults::STAGE_FRAGMENT.to_string(),
            routing_fragment: defaults::ROUTING_FRAGMENT.to_string(),
            config_module: defaults::CONFIG_MODULE.to_string(),
            manifest_module: defaults::MANIFEST_MODULE.to_string(),
            source_extension: defaults::SOURCE_EXTENSION.to_string(),
            import_root: defaults::IMPORT_ROOT.to_string(),
        }
    }
}

impl GeneratorSettings {
    /// Parse settings from YAML. An empty document yields the defaults.
    pub fn parse(yaml_content: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml_content)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value).map_err(|e| Error::Settings {
            message: e.to_string(),
        })
    }

    /// Read and parse a settings file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::Settings {
            message: format!("Failed to read '{}': {}", path.display(), e),
        })?;
        Self::parse(&content)
    }

    /// Resolve the settings for a project.
    ///
    /// An explicitly given file must exist. Without one, `autoloader.yaml` in
    /// the project root is used when present and the defaults otherwise.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let candidate = project_root.join(defaults::SETTINGS_FILE);
                if candidate.is_file() {
                    Self::from_file(candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn source_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.source_dir)
    }

    pub fn config_dir(&self, source_root: &Path) -> PathBuf {
        source_root.join(&self.config_dir)
    }

    pub fn config_module_path(&self, source_root: &Path) -> PathBuf {
        self.config_dir(source_root).join(&self.config_module)
    }

    pub fn manifest_module_path(&self, source_root: &Path) -> PathBuf {
        source_root.join(&self.manifest_module)
    }
}
