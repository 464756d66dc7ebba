use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::adapters::snapshots::file_snapshot_store::FileSnapshotStore;
use crate::core::errors::{ReportError, Result};

/// Name of the config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "commit-report.toml";

/// Top-level configuration, read from a TOML file.
///
/// Every section is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub repository: RepositorySection,
    pub renderer: RendererSection,
    pub debug: DebugSection,
    pub server: ServerSection,
}

impl AppConfig {
    /// Load the configuration from an explicit file.
    ///
    /// Relative stylesheet and snapshot paths are resolved against the
    /// directory the file lives in.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ReportError::InvalidConfig {
                detail: format!("config file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or(Path::new("."));
        Self::from_toml(&content, base_dir).map_err(|e| match e {
            ReportError::InvalidConfig { detail } => ReportError::InvalidConfig {
                detail: format!("{}: {detail}", path.display()),
            },
            other => other,
        })
    }

    /// Parse TOML content, resolving relative paths against `base_dir`.
    pub fn from_toml(content: &str, base_dir: &Path) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| ReportError::InvalidConfig {
            detail: format!("failed to parse config: {e}"),
        })?;
        config.resolve_paths(base_dir);
        config.validate()?;
        Ok(config)
    }

    /// Find and load the active configuration.
    ///
    /// Order: `explicit` path, `./commit-report.toml`, the per-user config
    /// file, then built-in defaults. An explicit path must exist.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        for candidate in default_locations() {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "using config file");
                return Self::load(&candidate);
            }
        }
        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    fn resolve_paths(&mut self, base_dir: &Path) {
        if let Some(stylesheet) = self.renderer.stylesheet.as_mut() {
            if stylesheet.is_relative() {
                *stylesheet = base_dir.join(&*stylesheet);
            }
        }
        if self.debug.snapshot_path.is_relative() {
            self.debug.snapshot_path = base_dir.join(&self.debug.snapshot_path);
        }
    }

    fn validate(&self) -> Result<()> {
        if self.repository.url.trim().is_empty() {
            return Err(ReportError::InvalidConfig {
                detail: "[repository] url must not be empty".into(),
            });
        }
        if self.server.bind.trim().is_empty() {
            return Err(ReportError::InvalidConfig {
                detail: "[server] bind must not be empty".into(),
            });
        }
        Ok(())
    }
}

/// Config files checked when no `--config` is given, in order.
pub fn default_locations() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("commit-report").join("config.toml"));
    }
    paths
}

/// The `[repository]` section: where and as whom the log is queried.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositorySection {
    pub url: String,
    pub username: String,
    pub password: String,
    pub svn_path: PathBuf,
}

impl Default for RepositorySection {
    fn default() -> Self {
        Self {
            url: "http://svn.arrisi.com/dev".into(),
            username: "dailybuild".into(),
            password: "dailybuild".into(),
            svn_path: PathBuf::from("svn"),
        }
    }
}

/// Which renderer turns the raw log into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererBackend {
    #[default]
    Native,
    Xslt,
}

/// The `[renderer]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererSection {
    pub backend: RendererBackend,
    pub xsltproc_path: PathBuf,
    /// Custom stylesheet; the built-in one is used when unset.
    pub stylesheet: Option<PathBuf>,
    pub title: String,
    /// Only report commits whose message contains this text.
    pub message_filter: Option<String>,
}

impl Default for RendererSection {
    fn default() -> Self {
        Self {
            backend: RendererBackend::Native,
            xsltproc_path: PathBuf::from("xsltproc"),
            stylesheet: None,
            title: "Commit report".into(),
            message_filter: None,
        }
    }
}

/// The `[debug]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebugSection {
    pub snapshot_path: PathBuf,
}

impl Default for DebugSection {
    fn default() -> Self {
        Self {
            snapshot_path: FileSnapshotStore::default_path(),
        }
    }
}

/// The `[server]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".into(),
        }
    }
}
