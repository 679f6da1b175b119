//! Run configuration: filter mode, extension sets and folder exclusions.
//!
//! A [`RenderConfig`] is resolved once per run from command line overrides
//! layered over [`Defaults`], and is never mutated afterwards.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::ConfigError;

/// Folders left out of every tree unless the caller says otherwise.
const DEFAULT_EXCLUDED_FOLDERS: &[&str] = &[".git"];

/// How file extensions filter the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
pub enum FilterMode {
    /// Show every file
    #[default]
    #[value(skip)]
    #[serde(rename = "none")]
    None,
    /// Only show files whose extension is listed
    #[value(name = "include")]
    #[serde(rename = "include")]
    IncludeOnly,
    /// Show every file except those whose extension is listed
    #[value(name = "exclude")]
    #[serde(rename = "exclude")]
    ExcludeOnly,
}

/// Immutable filter settings consumed by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: FilterMode,
    pub include_extensions: BTreeSet<String>,
    pub exclude_extensions: BTreeSet<String>,
    pub excluded_folders: BTreeSet<String>,
}

impl RenderConfig {
    /// Include-only configuration over the given extensions.
    pub fn include_only<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            mode: FilterMode::IncludeOnly,
            include_extensions: normalize_extensions(extensions),
            ..Default::default()
        }
    }

    /// Exclude-only configuration over the given extensions.
    pub fn exclude_only<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            mode: FilterMode::ExcludeOnly,
            exclude_extensions: normalize_extensions(extensions),
            ..Default::default()
        }
    }

    pub fn with_excluded_folders<I, S>(mut self, folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_folders = normalize_names(folders);
        self
    }

    /// Whether a directory with this name is dropped from the tree.
    pub fn is_excluded_folder(&self, name: &str) -> bool {
        self.excluded_folders.contains(&name.to_lowercase())
    }

    /// Whether a file with this (lowercased) extension is shown.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        match self.mode {
            FilterMode::None => true,
            FilterMode::IncludeOnly => self.include_extensions.contains(extension),
            FilterMode::ExcludeOnly => !self.exclude_extensions.contains(extension),
        }
    }
}

/// Lowercase extensions and give each a leading dot.
pub fn normalize_extensions<I, S>(extensions: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|e| e.as_ref().trim().to_lowercase())
        .filter(|e| !e.is_empty() && e != ".")
        .map(|e| if e.starts_with('.') { e } else { format!(".{e}") })
        .collect()
}

fn normalize_names<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_lowercase())
        .filter(|n| !n.is_empty())
        .collect()
}

/// Fallback values used when a flag is not given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub path: Option<PathBuf>,
    pub mode: Option<FilterMode>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub exclude_folders: Option<Vec<String>>,
}

impl Defaults {
    /// Defaults compiled into the binary.
    ///
    /// The root path comes from `TREEMARK_DEFAULT_PATH` at build time.
    pub fn builtin() -> Self {
        Self {
            path: option_env!("TREEMARK_DEFAULT_PATH").map(PathBuf::from),
            mode: None,
            include: None,
            exclude: None,
            exclude_folders: Some(
                DEFAULT_EXCLUDED_FOLDERS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        }
    }

    /// Load a TOML defaults file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Layer `other` over `self`; keys set in `other` win.
    pub fn merge(self, other: Defaults) -> Self {
        Self {
            path: other.path.or(self.path),
            mode: other.mode.or(self.mode),
            include: other.include.or(self.include),
            exclude: other.exclude.or(self.exclude),
            exclude_folders: other.exclude_folders.or(self.exclude_folders),
        }
    }

    /// Mode implied by the defaults when none is given explicitly.
    fn inferred_mode(&self) -> FilterMode {
        if let Some(mode) = self.mode {
            return mode;
        }
        if self.include.as_ref().is_some_and(|v| !v.is_empty()) {
            FilterMode::IncludeOnly
        } else if self.exclude.as_ref().is_some_and(|v| !v.is_empty()) {
            FilterMode::ExcludeOnly
        } else {
            FilterMode::None
        }
    }
}

/// Values supplied on the command line. `None` or empty means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub path: Option<PathBuf>,
    pub mode: Option<FilterMode>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub exclude_folders: Option<Vec<String>>,
}

/// Fully resolved input for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub root: PathBuf,
    pub config: RenderConfig,
}

/// Treat an empty list the same as a missing one.
fn given(list: Option<Vec<String>>) -> Option<Vec<String>> {
    list.filter(|v| !v.is_empty())
}

/// Resolve overrides against defaults into a root path and a [`RenderConfig`].
pub fn resolve(overrides: Overrides, defaults: Defaults) -> Result<Resolved, ConfigError> {
    let root = overrides
        .path
        .or_else(|| defaults.path.clone())
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ConfigError::NoPath)?;

    let mode = overrides.mode.unwrap_or_else(|| defaults.inferred_mode());

    let mut config = RenderConfig {
        mode,
        ..Default::default()
    };
    match mode {
        FilterMode::IncludeOnly => {
            let list = given(overrides.include)
                .or_else(|| given(defaults.include))
                .unwrap_or_default();
            config.include_extensions = normalize_extensions(list);
        }
        FilterMode::ExcludeOnly => {
            let list = given(overrides.exclude)
                .or_else(|| given(defaults.exclude))
                .unwrap_or_default();
            config.exclude_extensions = normalize_extensions(list);
        }
        FilterMode::None => {}
    }

    let folders = given(overrides.exclude_folders)
        .or(defaults.exclude_folders)
        .unwrap_or_default();
    config.excluded_folders = normalize_names(folders);

    log::debug!("resolved root {} with {:?}", root.display(), config);

    Ok(Resolved { root, config })
}
