use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Runs an external maintenance command to completion.
pub trait CommandRunner {
    fn run(&mut self, program: &Path, args: &[OsString]) -> io::Result<ExitStatus>;
}

/// Spawns real child processes with all standard streams detached.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &Path, args: &[OsString]) -> io::Result<ExitStatus> {
        tracing::debug!("Spawning {} {:?}", program.display(), args);
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn reports_child_exit_status() {
        let mut runner = SystemRunner;
        let ok = runner.run(Path::new("/bin/sh"), &["-c".into(), "exit 0".into()]).unwrap();
        assert!(ok.success());

        let failed = runner.run(Path::new("/bin/sh"), &["-c".into(), "echo noise; exit 3".into()]).unwrap();
        assert_eq!(failed.code(), Some(3));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let mut runner = SystemRunner;
        assert!(runner.run(Path::new("/nonexistent/tool"), &[]).is_err());
    }
}
