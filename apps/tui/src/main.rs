mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::App;
use apple_a_day::config::init_app_config;
use apple_a_day::logging::{self, LogTarget};
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    let headless = args.wants_headless() || !is_terminal();

    let log_target = if headless {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.log_file.clone())
    };
    logging::init(config.debug, &log_target);
    if config.source_defaulted {
        tracing::info!("no content service configured, using sample apples");
    }

    let source = config.source.clone().into_source()?;
    tracing::info!(
        source = %source.describe(),
        month = %config.calendar_month,
        today = %config.today,
        headless,
        "starting"
    );

    if headless {
        return event::run_headless(source, config.today, args.json).await;
    }

    let mut app = App::new(&config, source.describe());
    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app, source).await;

    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
