use anyhow::Error;
use swissmon::error::{
    BattleRejection,
    as_rejection,
};

/// [`assert`]s that the result is an [`Error`] with the given message.
#[track_caller]
pub fn assert_error_message<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("expected error \"{message}\", got Ok"),
        Err(err) => pretty_assertions::assert_eq!(err.to_string(), message),
    }
}

/// [`assert`]s that the result is an [`Error`] that contains the given message anywhere in its
/// chain.
#[track_caller]
pub fn assert_error_message_contains<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("expected error containing \"{message}\", got Ok"),
        Err(err) => {
            let full = format!("{err:#}");
            assert!(full.contains(message), "{full} does not contain {message}")
        }
    }
}

/// [`assert`]s that the result is the given [`BattleRejection`].
#[track_caller]
pub fn assert_rejection<T>(result: Result<T, Error>, want: BattleRejection) {
    match result {
        Ok(_) => panic!("expected rejection \"{want}\", got Ok"),
        Err(err) => pretty_assertions::assert_eq!(as_rejection(&err), Some(&want), "{err:#}"),
    }
}
