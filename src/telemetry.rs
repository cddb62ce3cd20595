//! Opt-in tracing setup for hosts and the bundled trace tool.
//!
//! The engine only emits `tracing` events. Hosts with their own subscriber
//! never need this module.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "carousel_rs=info";

/// Installs a compact stderr subscriber filtered by [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback filter.
/// `RUST_LOG` still takes precedence.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_installed_without_the_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing("carousel_rs=debug"));
    }
}
