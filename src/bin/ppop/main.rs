//! Entry point for the ppop binary.

mod args;
mod tracing_setup;

use anyhow::Result;

fn main() -> Result<()> {
    // Load config (config.toml)
    let config = profile_popup::AppConfig::load_default().unwrap_or_else(|err| {
        eprintln!("Warning: failed to load config.toml: {err}");
        eprintln!("Using default configuration");
        profile_popup::AppConfig::default()
    });

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    tracing_setup::init(&config.logging);

    log::info!("Starting ppop");

    // Create tokio runtime for the HTTP client
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    // Parse command-line arguments and launch the application
    let startup_action = args::parse_args();
    profile_popup::launch(config, startup_action)
}
