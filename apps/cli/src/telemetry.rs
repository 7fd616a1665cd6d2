use anyhow::Result;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
///
/// Events go to stderr so they never interleave with console replies.
pub fn init_tracing(default_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = SubscriberBuilder::default()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
}
