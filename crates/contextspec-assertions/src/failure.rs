//! The failure primitive every fluent helper forwards to.
//!
//! The Rust test harness treats a panic in the test thread as a failed test,
//! so a failed assertion is logged and then turned into a panic carrying the
//! rendered [`AssertionError`] message.

use std::panic::Location;

use crate::error::{AssertionError, AssertionResult};

/// Passes silently on `Ok`, fails the current test on `Err`.
#[track_caller]
pub fn verify(outcome: AssertionResult) {
    if let Err(error) = outcome {
        fail(error);
    }
}

/// Fails the current test with the given error.
#[track_caller]
pub fn fail(error: AssertionError) -> ! {
    let location = Location::caller();
    tracing::error!(target: "contextspec", %location, %error, "assertion failed");
    panic!("{error}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn test_verify_passes_on_ok() {
        verify(Ok(()));
    }

    #[test]
    #[should_panic(expected = "Assertion failed: expected 1, got 2")]
    fn test_verify_panics_with_message() {
        verify(Err(AssertionError::NotEqual {
            expected: "1".to_string(),
            actual: "2".to_string(),
        }));
    }

    #[test]
    fn test_fail_payload_is_the_rendered_message() {
        let payload = panic::catch_unwind(|| fail(AssertionError::Same("x".to_string())))
            .expect_err("fail must panic");
        let message = payload.downcast_ref::<String>().expect("String payload");
        assert_eq!(message, "Assertion failed: expected a different instance than x");
    }
}
