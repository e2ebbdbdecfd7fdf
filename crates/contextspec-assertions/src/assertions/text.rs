//! String prefix and suffix assertions. Substring containment lives with the
//! other containment checks.

use crate::config::render;
use crate::error::{AssertionError, AssertionResult};
use crate::failure::verify;

/// Asserts that `actual` begins with `prefix`.
///
/// # Arguments
///
/// * `actual` - The string under test
/// * `prefix` - The expected prefix; the empty string always matches
///
/// # Returns
///
/// * `Ok(())` - If `actual` starts with `prefix`
/// * `Err(AssertionError::MissingPrefix)` - Otherwise
pub fn assert_starts_with(actual: &str, prefix: &str) -> AssertionResult {
    if actual.starts_with(prefix) {
        return Ok(());
    }

    Err(AssertionError::MissingPrefix {
        prefix: render(prefix),
        actual: render(actual),
    })
}

/// Asserts that `actual` ends with `suffix`.
///
/// # Returns
///
/// * `Ok(())` - If `actual` ends with `suffix`
/// * `Err(AssertionError::MissingSuffix)` - Otherwise
pub fn assert_ends_with(actual: &str, suffix: &str) -> AssertionResult {
    if actual.ends_with(suffix) {
        return Ok(());
    }

    Err(AssertionError::MissingSuffix {
        suffix: render(suffix),
        actual: render(actual),
    })
}

pub trait ShouldStartWith {
    fn should_start_with(&self, prefix: &str);
    fn should_end_with(&self, suffix: &str);
}

impl ShouldStartWith for str {
    #[track_caller]
    fn should_start_with(&self, prefix: &str) {
        verify(assert_starts_with(self, prefix));
    }

    #[track_caller]
    fn should_end_with(&self, suffix: &str) {
        verify(assert_ends_with(self, suffix));
    }
}
