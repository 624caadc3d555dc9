use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the process-wide tracing subscriber.
///
/// Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
/// wins when set; otherwise the level is `warn`, or `debug` with `--verbose`.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "warn" };

    let fmt_layer = fmt::layer()
        .with_target(verbose)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
