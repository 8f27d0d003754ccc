use tracing_subscriber::EnvFilter;

/// Route all logs to stderr so stdout only ever carries results.
pub fn init(verbose: u8, silent: bool) -> anyhow::Result<()> {
    let crate_level = if silent {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    // Keep reqwest/hyper quiet unless the user explicitly asks for them via RUST_LOG.
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(format!(
            "crtsh_core={crate_level},crtsh={crate_level},reqwest=warn,hyper=warn"
        ))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
