//! Command-line interface for the init helper.
//!
//! The environment variable documented in [`crate::config`] remains the
//! primary configuration surface; the flags here exist for operators who
//! prefer explicit arguments and for exercising the idle cadence in tests.

use clap::Parser;

/// Runtime options for the container init helper.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// Explicit target UID for `postgres`; takes precedence over
    /// `POSTGRES_UIDNUMBER` when set.
    #[arg(long)]
    pub uidnumber: Option<i64>,

    /// Idle loop sleep increment in seconds.
    #[arg(long, default_value_t = 3600)]
    pub tick_secs: u64,
}
