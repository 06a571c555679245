use anyhow::Context;
use clap::Parser;
use test_events::cli::Cli;
use test_events::config::validate_config;
use test_events::logging::{self, DiagnosticSink};
use test_events::{actions, assets, event_names, App, Config};
use winit::event_loop::EventLoop;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, source) =
        Config::load_with_source(cli.config.as_deref()).context("Failed to load config")?;
    cli.apply_to(&mut config);
    validate_config(&config)?;

    logging::init_logging(&config.log_level);
    log::info!("test-events starting...");
    log::info!("{}", source);

    event_names::verify_tables()?;

    let fonts = match &config.font_path {
        Some(path) => Some(assets::load_fonts(path)?),
        None => None,
    };

    let mut sink = DiagnosticSink::stdout();
    if let Some(path) = &config.capture_path {
        sink = sink.with_capture(path)?;
    }

    for (key, description) in actions::HELP {
        log::info!("  {:<6} {}", key, description);
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(config, fonts, sink);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.take_error() {
        return Err(err.into());
    }
    log::info!("test-events finished");
    Ok(())
}
