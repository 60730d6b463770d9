use tracing::Level;

/// Logs go to stderr, stdout carries the resolved types.
pub fn default_logging(verbose: bool) -> eyre::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
