mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use heatmap::config::log_filter;
use heatmap::{data, export, ChartConfig, SourceConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    init_logging();

    let SourceConfig { source } = SourceConfig::from_env();
    let config = ChartConfig::default();
    let dataset = data::load(&source, config.hue_range).await?;

    if let Some(path) = &args.output {
        export::write_page(path, &dataset, &config).await?;
    }
    if let Some(path) = &args.svg {
        export::write_svg(path, &dataset, &config).await?;
    }
    if args.export_only() {
        return Ok(());
    }

    // Check if we're running in a terminal
    if args.headless || args.json || !is_terminal() {
        return event::run_headless(&dataset, &source, args.json);
    }

    let mut app = App::new(dataset, config, source.to_string());

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup(true, true);

    result
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_filter()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
