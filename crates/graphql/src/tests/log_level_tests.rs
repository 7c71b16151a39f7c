use crate::log_level_from_env;
use crate::DEFAULT_LOG_LEVEL;

#[test]
fn unset_or_blank_log_level_uses_the_default() {
    assert_eq!(log_level_from_env(None), Ok(DEFAULT_LOG_LEVEL));
    assert_eq!(log_level_from_env(Some("  ")), Ok(DEFAULT_LOG_LEVEL));
}

#[test]
fn log_level_names_parse_in_any_case() {
    assert_eq!(log_level_from_env(Some("trace")), Ok(tracing::Level::TRACE));
    assert_eq!(log_level_from_env(Some(" DEBUG ")), Ok(tracing::Level::DEBUG));
    assert_eq!(log_level_from_env(Some("Warn")), Ok(tracing::Level::WARN));
    assert_eq!(log_level_from_env(Some("error")), Ok(tracing::Level::ERROR));
}

/// Only the level names themselves are accepted.
#[test]
fn unknown_log_level_is_reported() {
    let err = log_level_from_env(Some("verbose")).unwrap_err();

    assert_eq!(
        err,
        "Invalid `LOG_LEVEL` environment variable value: `verbose`",
    );
}
