mod app;
mod cli;

use prism_common::PrismError;
use prism_config::PrismConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_DIRECTIVE: &str = "prism=info";

fn main() {
    let args = cli::parse();
    if let Err(e) = run(args) {
        eprintln!("prism: {e}");
        std::process::exit(1);
    }
}

fn run(args: cli::Args) -> Result<(), PrismError> {
    // Logging comes up before the config load so the loader's first-run
    // messages (template written, fallback warnings) are not dropped. The
    // filter is reloadable: without a CLI override, the config file's
    // level is applied once it is known.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(
            args.log_level.as_deref().unwrap_or(DEFAULT_DIRECTIVE),
        ))
        .with_filter_reloading();
    let reload_handle = builder.reload_handle();
    builder.init();

    tracing::info!("Prism v{} starting...", env!("CARGO_PKG_VERSION"));

    // An explicit --config override must load; the default path falls back
    // to built-in defaults so a broken file never blocks startup.
    let config = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {path}");
            let config = prism_config::loader::load_from_path(std::path::Path::new(path))?;
            prism_config::validation::validate(&config)?;
            config
        }
        None => prism_config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            PrismConfig::default()
        }),
    };

    if args.log_level.is_none() {
        let directive = log_directive(&config.logging.level);
        if let Err(e) = reload_handle.reload(build_filter(&directive)) {
            tracing::warn!("Failed to apply log level {directive:?}: {e}");
        }
    }

    // Create event loop and run
    let event_loop =
        EventLoop::new().map_err(|e| PrismError::Shell(format!("event loop: {e}")))?;
    let mut app = app::PrismApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| PrismError::Shell(format!("event loop: {e}")))?;
    tracing::info!("Shutdown complete");
    Ok(())
}

/// Filter directive for the `prism` crates at the given level.
fn log_directive(level: &str) -> String {
    format!("prism={level}")
}

/// Env filter from `RUST_LOG` plus one directive; a malformed directive
/// falls back to the default instead of erroring.
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().unwrap()),
    )
}
