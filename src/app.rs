//! Orchestration of the init flow.
//!
//! Sequencing is fixed: privilege check, optional UID remap, idle park.
//! Failures on the remap path are reported and deliberately non-fatal; a
//! container must never be kept from starting by a UID mismatch, so every
//! path converges on the park.

#![expect(
    clippy::print_stdout,
    reason = "console diagnostics are the tool's operator contract"
)]

use std::time::Duration;

use anyhow::Result;
use nix::unistd::geteuid;

use crate::cli::Cli;
use crate::passwd::SystemUserDatabase;
use crate::{config, idle, remap};

/// Execute the init flow once, then park until interrupted.
///
/// # Errors
///
/// Infallible today; the `anyhow` boundary matches the binary's signature
/// so future fallible setup can propagate.
pub async fn run(cli: Cli) -> Result<()> {
    if !geteuid().is_root() {
        println!("WARNING: not running as root; a UID change will likely fail.");
    }

    match config::resolve_target_uid(cli.uidnumber) {
        Some(uid) => {
            if !remap::remap_postgres_uid(&SystemUserDatabase, uid) {
                println!("WARNING: UID change was not successful; continuing to idle loop anyway.");
            }
        }
        None => {
            println!("INFO: no valid UID supplied; skipping UID change.");
        }
    }

    idle::park(Duration::from_secs(cli.tick_secs)).await;
    Ok(())
}
