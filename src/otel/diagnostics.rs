use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static VERBOSE: Once = Once::new();

/// Turn on verbose diagnostic logging to the console for debug sessions.
///
/// Installs a `trace`-level console subscriber at most once per process;
/// if the host already installed a global subscriber this is a no-op.
pub(crate) fn enable_verbose_logging() {
    VERBOSE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_verbose_logging_is_idempotent() {
        enable_verbose_logging();
        enable_verbose_logging();
    }
}
