// Log subscriber setup and the process-wide verbosity switch

use std::sync::atomic::{AtomicU8, Ordering};

use tracing::Level;

static VERBOSITY: AtomicU8 = AtomicU8::new(VerbosityLevel::Normal as u8);

/// How chatty status lines on stderr are
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Errors only
    Quiet = 0,
    Normal = 1,
    Verbose = 2,
}

impl VerbosityLevel {
    pub fn current() -> Self {
        match VERBOSITY.load(Ordering::Relaxed) {
            0 => Self::Quiet,
            1 => Self::Normal,
            _ => Self::Verbose,
        }
    }

    pub fn set(level: Self) {
        VERBOSITY.store(level as u8, Ordering::Relaxed);
    }

    /// True when the active level is at least `self`
    pub fn should_output(self) -> bool {
        self <= Self::current()
    }
}

/// Parse a level name such as `warn` or `DEBUG`
pub fn parse_level(name: &str) -> Option<Level> {
    match name.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Pick the log level: `--quiet` wins, then `--verbose`, then `--log-level`,
/// then the configured level
pub fn resolve_level(verbose: bool, quiet: bool, explicit: Option<&str>, configured: &str) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        explicit
            .and_then(parse_level)
            .or_else(|| parse_level(configured))
            .unwrap_or(Level::INFO)
    }
}

/// Initialize logging based on CLI flags
///
/// Log lines go to stderr; stdout carries the generated document.
pub fn init_logging(verbose: bool, quiet: bool, level: Level) {
    let verbosity = if quiet {
        VerbosityLevel::Quiet
    } else if verbose {
        VerbosityLevel::Verbose
    } else {
        VerbosityLevel::Normal
    };
    VerbosityLevel::set(verbosity);

    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
