use anyhow::Context;
use clap::Parser;

use counter_app::cli::Cli;
use counter_app::config::Config;
use counter_app::headless::{self, HeadlessOptions};
use counter_app::logging::{init_tracing, LogSink};
use counter_app::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let sink = if cli.headless {
        LogSink::Stderr
    } else {
        LogSink::FileOnly
    };
    init_tracing(&config.logging, cli.log_level.as_deref(), sink)?;

    if cli.headless {
        let options = HeadlessOptions {
            format: cli.format,
            all_frames: cli.frames,
        };
        let mut stdout = std::io::stdout().lock();
        headless::run(&cli.actions, options, &mut stdout)?;
        return Ok(());
    }

    runtime::run(&config).context("terminal UI failed")
}
