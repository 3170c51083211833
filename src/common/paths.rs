use std::path::{Path, PathBuf};

/// Prefix used when the build system does not export one.
pub const DEFAULT_PREFIX: &str = "/usr/local";

pub fn data_dir(prefix: &Path) -> PathBuf {
    prefix.join("share")
}

/// Icon theme refreshed by the icon cache step, relative to the data dir.
pub const ICON_THEME_SUBDIR: &str = "icons/hicolor";

/// Launcher directory indexed by the desktop database step.
pub const APPLICATIONS_SUBDIR: &str = "applications";
