pub mod runner;
pub mod search;
pub mod steps;

pub use runner::{CommandRunner, SystemRunner};
pub use search::find_program;
pub use steps::MaintenanceStep;

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitStatus;

use crate::env::HookEnv;
use crate::error::Result;

/// What happened to a single maintenance step.
#[derive(Debug)]
pub enum StepOutcome {
    Skipped { command: String },
    Ran { program: PathBuf, status: ExitStatus },
    Failed { program: PathBuf, error: std::io::Error },
    DryRun { program: PathBuf, args: Vec<OsString> },
}

impl StepOutcome {
    pub fn invoked(&self) -> bool {
        matches!(self, StepOutcome::Ran { .. } | StepOutcome::Failed { .. })
    }
}

#[derive(Debug)]
pub struct HookReport {
    pub data_dir: PathBuf,
    pub staged: bool,
    pub outcomes: Vec<StepOutcome>,
}

/// Post-install hook refreshing host desktop caches.
pub struct InstallHook {
    env: HookEnv,
    steps: Vec<MaintenanceStep>,
    dry_run: bool,
}

impl InstallHook {
    pub fn new(env: HookEnv) -> Self {
        Self {
            env,
            steps: steps::builtin(),
            dry_run: false,
        }
    }

    pub fn with_steps(mut self, steps: Vec<MaintenanceStep>) -> Self {
        self.steps = steps;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs every step in order. Notices go to `out`.
    ///
    /// Failures of the maintenance commands never surface as errors; only a
    /// failed write to `out` does.
    pub fn run<R, W>(&self, runner: &mut R, out: &mut W) -> Result<HookReport>
    where
        R: CommandRunner,
        W: Write,
    {
        let data_dir = self.env.data_dir();
        tracing::debug!(
            "Install prefix {}, data dir {}",
            self.env.prefix().display(),
            data_dir.display()
        );

        let mut report = HookReport {
            data_dir,
            staged: self.env.is_staged(),
            outcomes: Vec::new(),
        };

        if report.staged {
            tracing::debug!("Staged install detected, skipping desktop cache refresh");
            return Ok(report);
        }

        for step in &self.steps {
            writeln!(out, "{}", step.description())?;
            let outcome = self.run_if_available(step, &report.data_dir, runner, out)?;
            report.outcomes.push(outcome);
        }

        Ok(report)
    }

    fn run_if_available<R, W>(
        &self,
        step: &MaintenanceStep,
        data_dir: &std::path::Path,
        runner: &mut R,
        out: &mut W,
    ) -> Result<StepOutcome>
    where
        R: CommandRunner,
        W: Write,
    {
        let Some(program) = find_program(step.command(), self.env.search_path()) else {
            writeln!(out, "Skipping {}: command not found", step.command())?;
            return Ok(StepOutcome::Skipped {
                command: step.command().to_string(),
            });
        };

        let args = step.args(data_dir);

        if self.dry_run {
            let rendered: Vec<_> = args.iter().map(|a| a.to_string_lossy()).collect();
            writeln!(out, "Would run: {} {}", program.display(), rendered.join(" "))?;
            return Ok(StepOutcome::DryRun { program, args });
        }

        match runner.run(&program, &args) {
            Ok(status) => {
                if !status.success() {
                    tracing::debug!("{} exited with {}", program.display(), status);
                }
                Ok(StepOutcome::Ran { program, status })
            }
            Err(error) => {
                tracing::warn!("Failed to start {}: {}", program.display(), error);
                Ok(StepOutcome::Failed { program, error })
            }
        }
    }
}
