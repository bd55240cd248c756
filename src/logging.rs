//! Subscriber setup for the binary. The library itself only emits events.
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

const TARGET: &str = "crypto_inventory_core";

/// Declaration order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, 2) => Self::Debug,
            (false, _) => Self::Trace,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Directive used when `RUST_LOG` is not set.
    pub fn directive(self) -> String {
        format!("{TARGET}={}", self.level())
    }

    fn shows_source(self) -> bool {
        self >= Self::Debug
    }
}

/// Installs the global subscriber. Events go to stderr so stdout stays
/// reserved for the inventory document; quiet mode discards them.
pub fn init(verbosity: Verbosity) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(verbosity.shows_source())
        .with_line_number(verbosity.shows_source())
        .compact();

    let installed = match verbosity {
        Verbosity::Quiet => builder.with_writer(std::io::sink).try_init(),
        Verbosity::Normal => builder.with_writer(std::io::stderr).without_time().try_init(),
        _ => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_verbosity() {
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(2, false), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(7, false), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(3, true), Verbosity::Quiet);
    }

    #[test]
    fn test_directive_targets_library() {
        assert_eq!(Verbosity::Normal.directive(), "crypto_inventory_core=WARN");
        assert_eq!(Verbosity::Debug.directive(), "crypto_inventory_core=DEBUG");
    }

    #[test]
    fn test_source_locations_from_debug() {
        assert!(!Verbosity::Verbose.shows_source());
        assert!(Verbosity::Debug.shows_source());
        assert!(Verbosity::Quiet < Verbosity::Trace);
    }
}
