//! Narrow interface over the operating system's user database.
//!
//! Lookups go through the libc passwd wrappers exposed by `nix`; the only
//! mutation is delegated to the system `usermod` binary. The trait exists so
//! tests can substitute an in-memory implementation and never run a
//! privileged operation.

use std::io;
use std::process::{Command, ExitStatus};

use nix::unistd::{self, Uid};
use thiserror::Error;
use tracing::debug;

/// Minimal view of one user database entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Login name.
    pub name: String,
    /// Numeric user id.
    pub uid: u32,
}

impl From<unistd::User> for Account {
    fn from(user: unistd::User) -> Self {
        Self {
            name: user.name,
            uid: user.uid.as_raw(),
        }
    }
}

/// Errors surfaced by the user database interface.
#[derive(Debug, Error)]
pub enum PasswdError {
    /// Reading the user database itself failed (distinct from "no entry").
    #[error("user database lookup failed: {0}")]
    Lookup(#[source] nix::Error),
    /// The caller may not execute the user-modification command.
    #[error("permission denied running `{command}`")]
    PermissionDenied {
        /// Rendered command line.
        command: String,
    },
    /// The user-modification command could not be spawned at all.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// Rendered command line.
        command: String,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },
    /// The command ran and reported failure.
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        /// Rendered command line.
        command: String,
        /// Exit status of the command.
        status: ExitStatus,
        /// Captured standard error output.
        stderr: String,
    },
}

/// Read and mutate access to the system's account records.
///
/// The surface is intentionally tiny: two read-only lookups and one
/// mutation request. The real implementation is [`SystemUserDatabase`].
pub trait UserDatabase {
    /// Look up an account by login name.
    ///
    /// # Errors
    ///
    /// Returns [`PasswdError::Lookup`] when the database cannot be read.
    fn account_by_name(&self, name: &str) -> Result<Option<Account>, PasswdError>;

    /// Look up an account by numeric UID.
    ///
    /// # Errors
    ///
    /// Returns [`PasswdError::Lookup`] when the database cannot be read.
    fn account_by_uid(&self, uid: u32) -> Result<Option<Account>, PasswdError>;

    /// Ask the system to change `name`'s UID to `uid`.
    ///
    /// # Errors
    ///
    /// Returns a [`PasswdError`] describing why the change was not applied.
    fn change_uid(&self, name: &str, uid: u32) -> Result<(), PasswdError>;
}

/// [`UserDatabase`] backed by the real OS user database and `usermod`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemUserDatabase;

impl UserDatabase for SystemUserDatabase {
    fn account_by_name(&self, name: &str) -> Result<Option<Account>, PasswdError> {
        let user = unistd::User::from_name(name).map_err(PasswdError::Lookup)?;
        Ok(user.map(Account::from))
    }

    fn account_by_uid(&self, uid: u32) -> Result<Option<Account>, PasswdError> {
        let user = unistd::User::from_uid(Uid::from_raw(uid)).map_err(PasswdError::Lookup)?;
        Ok(user.map(Account::from))
    }

    fn change_uid(&self, name: &str, uid: u32) -> Result<(), PasswdError> {
        let uid_arg = uid.to_string();
        let rendered = format!("usermod -u {uid_arg} {name}");
        debug!(command = %rendered, "invoking user-modification command");

        let output = Command::new("usermod")
            .args(["-u", &uid_arg, name])
            .output()
            .map_err(|source| match source.kind() {
                io::ErrorKind::PermissionDenied => PasswdError::PermissionDenied {
                    command: rendered.clone(),
                },
                _ => PasswdError::Spawn {
                    command: rendered.clone(),
                    source,
                },
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(PasswdError::CommandFailed {
                command: rendered,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            })
        }
    }
}
