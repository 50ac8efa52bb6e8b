use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use nirakshak::config::Config;
use nirakshak::logging::init_tracing;
use nirakshak::portal::Language;
use nirakshak::shutdown::{watch_signals, ShutdownHandle};
use nirakshak::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "nirakshak", version, about = "Citizen grievance portal in the terminal")]
struct Args {
    /// Config file (default: ~/.config/nirakshak/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Display language, overrides the config file
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("could not load {}", config_path.display()))?;
    if let Some(file) = args.log_file {
        config.logging.file = Some(file);
    }
    init_tracing(&config.logging).context("could not open log file")?;

    let language = args.language.unwrap_or(config.defaults.language);

    let async_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("nirakshak-timer")
        .enable_all()
        .build()
        .context("could not start async runtime")?;

    let shutdown = ShutdownHandle::new();
    async_runtime.spawn(watch_signals(shutdown.clone()));

    let result = {
        let _context = async_runtime.enter();
        runtime::run(&config, language, shutdown)
    };
    async_runtime.shutdown_timeout(Duration::from_millis(100));
    result.context("terminal error")
}
