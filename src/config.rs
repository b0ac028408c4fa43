//! Environment-driven configuration for the UID remap.
//!
//! Exactly one value is read: [`UID_ENV_VAR`]. Every invalid form degrades
//! to "no UID change requested" with a console diagnostic rather than an
//! error, so a bad value can never keep the container from starting.

#![expect(
    clippy::print_stdout,
    reason = "console diagnostics are the tool's operator contract"
)]

use std::env;
use std::ops::RangeInclusive;

/// Environment variable naming the desired UID for `postgres`.
pub const UID_ENV_VAR: &str = "POSTGRES_UIDNUMBER";

/// Inclusive range of UIDs the helper will accept.
pub const UID_RANGE: RangeInclusive<i64> = 50..=1000;

/// Resolve the target UID from the CLI override or the environment.
///
/// An explicit `--uidnumber` takes precedence and the environment is not
/// consulted at all; the override is still subject to the same range rule
/// and degrades to `None` when it falls outside it.
#[must_use]
pub fn resolve_target_uid(override_uid: Option<i64>) -> Option<u32> {
    if let Some(uid) = override_uid {
        return check_range(uid, "--uidnumber");
    }
    read_env_uid()
}

/// Read and validate [`UID_ENV_VAR`], returning the UID if usable.
///
/// Validation is ordered: unset, empty after trimming, non-integer, and
/// out-of-range values each emit one diagnostic line and yield `None`.
#[must_use]
pub fn read_env_uid() -> Option<u32> {
    match env::var(UID_ENV_VAR) {
        Ok(value) => parse_env_value(Some(&value)),
        Err(env::VarError::NotPresent) => parse_env_value(None),
        Err(env::VarError::NotUnicode(_)) => {
            println!("ERROR: {UID_ENV_VAR} is set but is not valid UTF-8.");
            None
        }
    }
}

fn parse_env_value(raw: Option<&str>) -> Option<u32> {
    let Some(raw) = raw else {
        println!(
            "INFO: environment variable {UID_ENV_VAR} is not set; \
             no UID change will be performed."
        );
        return None;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        println!("WARNING: {UID_ENV_VAR} is set but empty; ignoring.");
        return None;
    }

    let Ok(uid) = trimmed.parse::<i64>() else {
        println!("ERROR: {UID_ENV_VAR}='{trimmed}' is not a valid integer.");
        return None;
    };

    check_range(uid, UID_ENV_VAR)
}

fn check_range(uid: i64, source: &str) -> Option<u32> {
    if !UID_RANGE.contains(&uid) {
        println!(
            "ERROR: UID {uid} from {source} is out of the allowed range ({}-{}).",
            UID_RANGE.start(),
            UID_RANGE.end()
        );
        return None;
    }
    // In-range values always fit in a u32.
    u32::try_from(uid).ok()
}
