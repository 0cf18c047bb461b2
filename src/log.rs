use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Initializes console logging for CI output.
pub fn init() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);

    // Use RUST_LOG if set, otherwise default to INFO
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .inspect_err(|e| {
            eprintln!("Failed to initialize logging: {}", e);
        })?;

    Ok(())
}
