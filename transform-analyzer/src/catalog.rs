//! Read-only access to a profile data directory.
//!
//! Layout:
//!
//! ```text
//! <root>/environments/<name>.json
//! <root>/communications/<name>.json
//! ```
//!
//! The dropdown settings document stored next to the environments is not a
//! profile and is never listed.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use comm_profile_core::{
    parse_communication_file, parse_environment_file, CommunicationProfile, EnvironmentProfile,
    ParseError,
};
use thiserror::Error;
use tracing::debug;

const SETTINGS_DOCUMENT: &str = "settingsDropdownElements";

/// Profile folders of a data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Communications,
    Environments,
}

impl CatalogKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            CatalogKind::Communications => "communications",
            CatalogKind::Environments => "environments",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Errors returned while reading a data directory.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to load profile {path}: {source}")]
    Parse { path: String, source: ParseError },
    #[error("{kind} profile '{name}' not found at {path}")]
    NotFound {
        kind: CatalogKind,
        name: String,
        path: String,
    },
    #[error("environment '{environment}' references unknown communication '{communication}'")]
    MissingReference {
        environment: String,
        communication: String,
    },
    #[error("invalid profile name '{name}'")]
    InvalidName { name: String },
}

/// A data directory holding environment and communication profiles.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let root = root.into();
        let meta = fs::metadata(&root).map_err(|source| CatalogError::Io {
            path: root.display().to_string(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(CatalogError::Io {
                path: root.display().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
            });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn environment(&self, name: &str) -> Result<EnvironmentProfile, CatalogError> {
        let path = self.profile_path(CatalogKind::Environments, name)?;
        parse_environment_file(&path)
            .map_err(|source| load_error(CatalogKind::Environments, name, &path, source))
    }

    pub fn communication(&self, name: &str) -> Result<CommunicationProfile, CatalogError> {
        let path = self.profile_path(CatalogKind::Communications, name)?;
        parse_communication_file(&path)
            .map_err(|source| load_error(CatalogKind::Communications, name, &path, source))
    }

    /// Resolve every communication an environment supports, in its listed order.
    pub fn supported_communications(
        &self,
        environment: &EnvironmentProfile,
    ) -> Result<Vec<CommunicationProfile>, CatalogError> {
        environment
            .supported_names()
            .map(|name| match self.communication(name) {
                Err(CatalogError::NotFound { .. }) => Err(CatalogError::MissingReference {
                    environment: environment.name.clone(),
                    communication: name.to_string(),
                }),
                other => other,
            })
            .collect()
    }

    /// Profile names of one folder, sorted.
    pub fn list(&self, kind: CatalogKind) -> Result<Vec<String>, CatalogError> {
        let dir = self.root.join(kind.dir_name());
        let entries = fs::read_dir(&dir).map_err(|source| CatalogError::Io {
            path: dir.display().to_string(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| CatalogError::Io {
                path: dir.display().to_string(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if stem == SETTINGS_DOCUMENT {
                continue;
            }
            names.push(stem.to_string());
        }
        names.sort();
        debug!(kind = %kind, count = names.len(), "listed profiles");
        Ok(names)
    }

    fn profile_path(&self, kind: CatalogKind, name: &str) -> Result<PathBuf, CatalogError> {
        if !is_plain_name(name) {
            return Err(CatalogError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(self.root.join(kind.dir_name()).join(format!("{name}.json")))
    }
}

/// Names are file stems; separators and parent references are refused so a
/// name cannot escape the data directory.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != SETTINGS_DOCUMENT
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}

fn load_error(kind: CatalogKind, name: &str, path: &Path, source: ParseError) -> CatalogError {
    match source {
        ParseError::Io(err) if err.kind() == std::io::ErrorKind::NotFound => {
            CatalogError::NotFound {
                kind,
                name: name.to_string(),
                path: path.display().to_string(),
            }
        }
        source => CatalogError::Parse {
            path: path.display().to_string(),
            source,
        },
    }
}
