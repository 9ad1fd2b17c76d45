//! Utilities: logging setup (verbosity flags -> tracing filter).
//!
//! Key items:
//!   init_logging / derive_level
//!
//! Logs are written to stderr so that command output on stdout stays clean
//! (the shell and `run` print handler output there verbatim).

/// Logging helpers.
pub mod logging {
    use tracing_subscriber::EnvFilter;

    #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
    pub enum LogLevel {
        Error = 0,
        Info = 1,
        Debug = 2,
        Trace = 3,
    }

    impl LogLevel {
        pub fn as_str(&self) -> &'static str {
            match self {
                LogLevel::Error => "error",
                LogLevel::Info => "info",
                LogLevel::Debug => "debug",
                LogLevel::Trace => "trace",
            }
        }

        /// Default filter directive for this level, scoped to our own crate
        /// so that reqwest/hyper stay quiet unless `RUST_LOG` asks for them.
        pub fn directive(&self) -> String {
            match self {
                LogLevel::Error => "error".to_string(),
                other => format!("warn,webterm={}", other.as_str()),
            }
        }
    }

    /// Install the global tracing subscriber. `RUST_LOG` wins over the CLI level.
    pub fn init_logging(level: LogLevel) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

        // A second init (e.g. from tests) is not an error worth surfacing.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(level >= LogLevel::Debug)
            .compact()
            .try_init();
    }

    pub fn derive_level(verbose: u8, quiet: bool) -> LogLevel {
        if quiet {
            return LogLevel::Error;
        }
        match verbose {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

pub use logging::{derive_level, init_logging};
