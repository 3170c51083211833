use std::ffi::OsString;
use std::path::{Path, PathBuf};
use crate::paths;

/// One cache refresh: a command, its fixed flags and the directory it works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceStep {
    description: String,
    command: String,
    flags: Vec<String>,
    target: PathBuf,
}

impl MaintenanceStep {
    pub fn new(
        description: impl Into<String>,
        command: impl Into<String>,
        flags: Vec<String>,
        target: impl Into<PathBuf>,
    ) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
            flags,
            target: target.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn target_dir(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.target)
    }

    /// Flags followed by the target directory.
    pub fn args(&self, data_dir: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.flags.iter().map(OsString::from).collect();
        args.push(self.target_dir(data_dir).into_os_string());
        args
    }
}

pub const ICON_CACHE_TOOL: &str = "gtk-update-icon-cache";
pub const DESKTOP_DATABASE_TOOL: &str = "update-desktop-database";

/// Quiet, ignore a missing theme index, force a rebuild.
pub fn icon_cache() -> MaintenanceStep {
    MaintenanceStep::new(
        "Updating icon cache...",
        ICON_CACHE_TOOL,
        vec!["-qtf".to_string()],
        paths::ICON_THEME_SUBDIR,
    )
}

pub fn desktop_database() -> MaintenanceStep {
    MaintenanceStep::new(
        "Updating desktop database...",
        DESKTOP_DATABASE_TOOL,
        vec!["-q".to_string()],
        paths::APPLICATIONS_SUBDIR,
    )
}

/// Icon cache first, then the desktop database.
pub fn builtin() -> Vec<MaintenanceStep> {
    vec![icon_cache(), desktop_database()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_icons_then_desktop() {
        let commands: Vec<_> = builtin().iter().map(|s| s.command().to_string()).collect();
        assert_eq!(commands, [ICON_CACHE_TOOL, DESKTOP_DATABASE_TOOL]);
    }

    #[test]
    fn icon_cache_args() {
        let share = Path::new("/usr/local/share");
        let step = icon_cache();
        assert_eq!(step.target_dir(share), share.join(paths::ICON_THEME_SUBDIR));
        assert_eq!(
            step.args(share),
            vec![
                OsString::from("-qtf"),
                OsString::from("/usr/local/share/icons/hicolor"),
            ]
        );
    }

    #[test]
    fn desktop_database_args() {
        let share = Path::new("/opt/app/share");
        let step = desktop_database();
        assert_eq!(step.target_dir(share), share.join(paths::APPLICATIONS_SUBDIR));
        assert_eq!(
            step.args(share),
            vec![OsString::from("-q"), OsString::from("/opt/app/share/applications")]
        );
    }
}
