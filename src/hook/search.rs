use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Search list used when `PATH` is not set at all.
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin";

/// Looks `name` up on a `PATH`-style search list.
///
/// Names that already contain a directory part are checked in place and the
/// search list is ignored. Empty entries in the list stand for the current
/// directory. Without a list, [`DEFAULT_SEARCH_PATH`] is searched.
pub fn find_program(name: &str, path_var: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    candidates(name, path_var).find(|path| is_executable(path))
}

fn candidates<'a>(
    name: &'a str,
    path_var: Option<&'a OsStr>,
) -> impl Iterator<Item = PathBuf> + 'a {
    let path_var = path_var.unwrap_or_else(|| OsStr::new(DEFAULT_SEARCH_PATH));
    std::env::split_paths(path_var).map(move |dir| {
        if dir.as_os_str().is_empty() {
            PathBuf::from(".").join(name)
        } else {
            dir.join(name)
        }
    })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};

    match std::fs::metadata(path) {
        Ok(meta) => {
            meta.is_file()
                && permits_exec(meta.permissions().mode(), meta.uid(), effective_uid())
        }
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Owner of `/proc/self`, which the kernel sets to the effective uid.
#[cfg(unix)]
fn effective_uid() -> Option<u32> {
    use std::os::unix::fs::MetadataExt;

    std::fs::metadata("/proc/self").ok().map(|meta| meta.uid())
}

/// Execute check against the file mode.
///
/// Root may run anything with an execute bit. The owner needs the owner bit.
/// Everyone else passes on the group or other bit, since supplementary groups
/// are not known here. An unknown uid falls back to any execute bit.
#[cfg(unix)]
fn permits_exec(mode: u32, file_uid: u32, euid: Option<u32>) -> bool {
    match euid {
        Some(0) | None => mode & 0o111 != 0,
        Some(uid) if uid == file_uid => mode & 0o100 != 0,
        Some(_) => mode & 0o011 != 0,
    }
}
