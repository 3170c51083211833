use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use crate::paths::{self, DEFAULT_PREFIX};

pub const PREFIX_VAR: &str = "MESON_INSTALL_PREFIX";
pub const STAGED_VAR: &str = "DESTDIR";
pub const SEARCH_PATH_VAR: &str = "PATH";

/// Install context handed to the hook by the build system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookEnv {
    prefix: PathBuf,
    staged: bool,
    search_path: Option<OsString>,
}

impl HookEnv {
    pub fn new(prefix: impl Into<PathBuf>, staged: bool, search_path: Option<OsString>) -> Self {
        Self { prefix: prefix.into(), staged, search_path }
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var_os(key))
    }

    /// Builds the context from an arbitrary variable lookup.
    ///
    /// A set but empty prefix is kept as-is. Only the presence of the
    /// staged-install marker matters, never its value.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let prefix = lookup(PREFIX_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFIX));
        let staged = lookup(STAGED_VAR).is_some();
        let search_path = lookup(SEARCH_PATH_VAR);

        Self { prefix, staged, search_path }
    }

    pub fn with_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn data_dir(&self) -> PathBuf {
        paths::data_dir(&self.prefix)
    }

    pub fn is_staged(&self) -> bool {
        self.staged
    }

    /// Raw `PATH` value used to discover maintenance commands.
    pub fn search_path(&self) -> Option<&OsStr> {
        self.search_path.as_deref()
    }
}
