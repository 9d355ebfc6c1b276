//! Helpers for collapsing a `Result` into a plain value.
//!
//! These are conveniences for scripts and tests where an error is either
//! irrelevant or unrecoverable. Library code in this crate never calls them.

use std::fmt::Display;

/// Return the success value, or `T::default()` if `result` is an error.
///
/// # Examples
///
/// ```
/// use pathname::{ignore_err, Pathname};
///
/// let text = ignore_err(Pathname::new("/definitely/not/here").read());
/// assert_eq!(text, "");
/// ```
pub fn ignore_err<T: Default, E>(result: Result<T, E>) -> T {
    result.unwrap_or_default()
}

/// Return the success value, or abort the current thread with the error.
///
/// # Panics
///
/// Panics with the error's display text if `result` is an error.
///
/// # Examples
///
/// ```should_panic
/// use pathname::{die_on_err, Pathname};
///
/// let text = die_on_err(Pathname::new("/definitely/not/here").read());
/// ```
#[track_caller]
pub fn die_on_err<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}
