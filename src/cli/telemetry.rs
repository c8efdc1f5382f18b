use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Initialize the tracing subscriber.
///
/// The default level comes from the `-v` count; `RUST_LOG` always wins when
/// set so operators can raise verbosity per target.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(level: Option<tracing::Level>) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false);

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.unwrap_or(tracing::Level::ERROR).into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
