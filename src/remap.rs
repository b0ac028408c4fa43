//! UID remap for the `postgres` account.
//!
//! Every destructive action is preceded by a read-only check, so the
//! privileged command is only issued when a change is both possible and
//! safe. Conflicting or already-satisfied states short-circuit before any
//! mutation is attempted.

#![expect(
    clippy::print_stdout,
    reason = "console diagnostics are the tool's operator contract"
)]

use thiserror::Error;

use crate::passwd::{PasswdError, UserDatabase};

/// Account whose UID this helper manages.
pub const POSTGRES_USER: &str = "postgres";

/// Why a remap attempt could not change anything.
#[derive(Debug, Error)]
pub enum RemapError {
    /// The managed account is not present in the user database.
    #[error("user `postgres` does not exist on this system")]
    MissingAccount,
    /// The desired UID already belongs to a different account.
    #[error("UID {uid} is already used by user `{owner}`")]
    UidTaken {
        /// The requested UID.
        uid: u32,
        /// Login name of the account currently holding it.
        owner: String,
    },
    /// The user database interface reported a failure.
    #[error(transparent)]
    Passwd(#[from] PasswdError),
}

/// What a successful remap attempt actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemapOutcome {
    /// The UID was changed by the privileged command.
    Changed,
    /// The account already had the desired UID; nothing was issued.
    AlreadySet,
}

/// Try to make `target_uid` the UID of `postgres`.
///
/// Reports every decision point on the console and folds all failures into
/// `false`; the caller never has to handle an error. A `false` return is
/// advisory only, matching the tool's best-effort, never-block-startup
/// policy.
#[must_use]
pub fn remap_postgres_uid(db: &impl UserDatabase, target_uid: u32) -> bool {
    match try_remap(db, target_uid) {
        Ok(RemapOutcome::Changed) => {
            println!("SUCCESS: UID of `{POSTGRES_USER}` changed to {target_uid}.");
            true
        }
        Ok(RemapOutcome::AlreadySet) => {
            println!(
                "INFO: UID {target_uid} is already the UID of `{POSTGRES_USER}`; nothing to do."
            );
            true
        }
        Err(err) => {
            report_failure(&err);
            false
        }
    }
}

/// Run the lookup/verify/mutate sequence against the user database.
///
/// # Errors
///
/// Returns a [`RemapError`] for a missing account, a UID conflict, or any
/// failure reported by the underlying interface.
pub fn try_remap(db: &impl UserDatabase, target_uid: u32) -> Result<RemapOutcome, RemapError> {
    if db.account_by_name(POSTGRES_USER)?.is_none() {
        return Err(RemapError::MissingAccount);
    }

    if let Some(owner) = db.account_by_uid(target_uid)? {
        if owner.name == POSTGRES_USER {
            return Ok(RemapOutcome::AlreadySet);
        }
        return Err(RemapError::UidTaken {
            uid: target_uid,
            owner: owner.name,
        });
    }

    println!("INFO: running command: usermod -u {target_uid} {POSTGRES_USER}");
    db.change_uid(POSTGRES_USER, target_uid)?;
    Ok(RemapOutcome::Changed)
}

fn report_failure(err: &RemapError) {
    match err {
        RemapError::Passwd(PasswdError::PermissionDenied { .. }) => {
            println!("ERROR: permission denied; run this helper as root to change UIDs.");
        }
        RemapError::Passwd(failure @ PasswdError::CommandFailed { .. }) => {
            println!("ERROR: failed to change UID: {failure}.");
        }
        other => {
            println!("ERROR: {other}.");
        }
    }
}
