use desktop_cache_hook::{
    config::Config,
    env::HookEnv,
    InstallHook,
    SystemRunner,
};

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "desktop-cache-hook")]
#[command(about = "Refresh the icon cache and desktop database after meson install")]
struct Cli {
    /// Install prefix (overrides MESON_INSTALL_PREFIX)
    #[arg(long)]
    prefix: Option<PathBuf>,

    /// Print the commands that would run without running them
    #[arg(long)]
    dry_run: bool,

    /// TOML file with [[steps]] replacing the built-in refresh steps
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut env = HookEnv::from_env();
    if let Some(prefix) = cli.prefix {
        env = env.with_prefix(prefix);
    }

    let mut hook = InstallHook::new(env).dry_run(cli.dry_run);
    if let Some(path) = &cli.config {
        let config = Config::load_from_path(path)
            .with_context(|| format!("Failed to load step config {}", path.display()))?;
        hook = hook.with_steps(config.into_steps());
    }

    let stdout = std::io::stdout();
    let report = hook.run(&mut SystemRunner, &mut stdout.lock())?;
    tracing::debug!(
        "Finished with {} step(s) for {}",
        report.outcomes.len(),
        report.data_dir.display()
    );

    Ok(())
}

fn setup_logging(verbose: bool) {
    let ansi = std::io::stderr().is_terminal();
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .init();
    }
}
