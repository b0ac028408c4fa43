//! Environment-variable handling for the configuration reader.

use postgres_uid_init::config::{UID_ENV_VAR, read_env_uid, resolve_target_uid};
use rstest::rstest;

#[rstest]
fn unset_variable_is_absent() {
    temp_env::with_var_unset(UID_ENV_VAR, || {
        assert_eq!(read_env_uid(), None);
    });
}

#[rstest]
#[case::valid("999", Some(999))]
#[case::below_range("40", None)]
#[case::non_integer("not-a-number", None)]
#[case::empty("", None)]
#[case::whitespace("  ", None)]
fn set_variable_is_validated(#[case] value: &str, #[case] expected: Option<u32>) {
    temp_env::with_var(UID_ENV_VAR, Some(value), || {
        assert_eq!(read_env_uid(), expected);
    });
}

#[rstest]
fn cli_override_takes_precedence_over_env() {
    temp_env::with_var(UID_ENV_VAR, Some("200"), || {
        assert_eq!(resolve_target_uid(Some(999)), Some(999));
    });
}

#[rstest]
fn out_of_range_override_does_not_fall_back_to_env() {
    temp_env::with_var(UID_ENV_VAR, Some("200"), || {
        assert_eq!(resolve_target_uid(Some(40)), None);
    });
}

#[rstest]
fn absent_override_defers_to_env() {
    temp_env::with_var(UID_ENV_VAR, Some("200"), || {
        assert_eq!(resolve_target_uid(None), Some(200));
    });
}
