//! Keeps the process alive after setup has finished.
//!
//! The park is a wait on the interrupt signal interleaved with bounded
//! sleep ticks rather than one unbounded sleep, so the task keeps cycling
//! through the signal branch and an orchestrator-level stop request is
//! honoured promptly.

#![expect(
    clippy::print_stdout,
    reason = "console diagnostics are the tool's operator contract"
)]
#![expect(
    clippy::print_stderr,
    reason = "intentional error output for diagnostics"
)]
#![expect(
    clippy::integer_division_remainder_used,
    reason = "tokio::select! macro usage"
)]

use std::future::Future;
use std::time::Duration;

use tokio::time;
use tracing::warn;

/// Park the current task until an interrupt arrives.
///
/// Never returns on its own: the loop alternates between `tick`-bounded
/// sleeps and the interrupt future. Once Ctrl-C (or, on unix, SIGTERM) is
/// delivered it prints a closing message and returns, after which the
/// process exits with status 0.
pub async fn park(tick: Duration) {
    println!("INFO: entering idle loop (interrupt to exit).");
    park_until(shutdown_signal(), tick).await;
    println!("INFO: interrupt received; exiting.");
}

async fn park_until(shutdown: impl Future<Output = ()>, tick: Duration) {
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            () = &mut shutdown => return,
            () = time::sleep(tick) => {}
        }
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    res = tokio::signal::ctrl_c() => {
                        if let Err(err) = res {
                            eprintln!("failed to listen for Ctrl-C: {err}");
                        }
                    },
                    _ = term.recv() => {},
                }
            }
            Err(err) => {
                warn!("failed to install SIGTERM handler: {err}");
                wait_for_ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        wait_for_ctrl_c().await;
    }
}

async fn wait_for_ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        eprintln!("failed to listen for Ctrl-C: {err}");
    }
}
