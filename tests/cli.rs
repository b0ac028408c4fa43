//! Command-line parsing surface.

use clap::Parser;
use postgres_uid_init::cli::Cli;
use rstest::rstest;

#[expect(clippy::panic_in_result_fn, reason = "test assertions")]
#[rstest]
fn parses_overrides() -> Result<(), clap::Error> {
    let cli = Cli::try_parse_from(["postgres-uid-init", "--uidnumber", "999", "--tick-secs", "5"])?;
    assert_eq!(cli.uidnumber, Some(999));
    assert_eq!(cli.tick_secs, 5);
    Ok(())
}

#[expect(clippy::panic_in_result_fn, reason = "test assertions")]
#[rstest]
fn defaults_apply() -> Result<(), clap::Error> {
    let cli = Cli::try_parse_from(["postgres-uid-init"])?;
    assert_eq!(cli.uidnumber, None);
    assert_eq!(cli.tick_secs, 3600);
    Ok(())
}

#[rstest]
fn rejects_non_integer_override() {
    assert!(Cli::try_parse_from(["postgres-uid-init", "--uidnumber", "abc"]).is_err());
}
