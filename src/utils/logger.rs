use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directive when neither `RUST_LOG` nor the settings file name one.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "phytoscout=debug,info"
    } else {
        "phytoscout=info"
    }
}

/// A `log_level` from the settings file takes precedence over the built-in
/// default. `RUST_LOG` still wins over both.
pub fn init_cli_logger(verbose: bool, configured: Option<&str>) {
    let directive = configured.unwrap_or_else(|| default_directive(verbose));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    // try_init so a second call (tests, embedding) is a no-op
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

/// JSON lines on stderr, for piping a render pass into log collectors.
pub fn init_json_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("phytoscout=info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init();
}
