// aoc2020 warmup days: three small stdin filters sharing the line plumbing

pub mod error;
pub mod io;
pub mod password;
pub mod slope;
pub mod sum;

pub use error::{Error, OutOfRange, ParseError};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the stderr diagnostics subscriber, filtered by `RUST_LOG` and defaulting to `warn`.
///
/// Standard output only ever carries the answers, so raising the level is safe:
///
/// ```bash
/// RUST_LOG=aoc2020_warmup=trace cargo run --bin day03 < input
/// ```
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init so that tests or a second call do not panic on an already set global
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

/// Prints the error with its source chain to stderr, the way the binaries report a failed run.
pub fn report(bin: &str, e: &Error) {
    use std::error::Error as _;

    tracing::error!(bin, error = %e, "run failed");

    eprintln!("{}: error: {}", bin, e);
    let mut source = e.source();
    while let Some(inner) = source {
        eprintln!("  caused by: {}", inner);
        source = inner.source();
    }
}
