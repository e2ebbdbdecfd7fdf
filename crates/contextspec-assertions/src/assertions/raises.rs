//! Expectations on actions that should raise: returned errors and panics.
//!
//! A returned error matches the expected type when the error itself, any
//! `anyhow` context attached to it, or any error in its `source()` chain has
//! that type.

use std::any::{type_name, Any};
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{AssertionError, AssertionResult};
use crate::failure::verify;
use crate::types::{RuntimeType, TypeToken};

/// An action that reports failure through its return value.
pub trait Attempt {
    fn attempt(self) -> Result<(), anyhow::Error>;
}

impl<F, T, X> Attempt for F
where
    F: FnOnce() -> Result<T, X>,
    X: Into<anyhow::Error>,
{
    fn attempt(self) -> Result<(), anyhow::Error> {
        self().map(|_| ()).map_err(Into::into)
    }
}

/// Asserts that `action` returns an error of type `E`.
///
/// # Returns
///
/// * `Ok(())` - If an error was returned and `E` is part of it
/// * `Err(AssertionError::NothingRaised)` - If the action succeeded
/// * `Err(AssertionError::WrongErrorType)` - If the error has no `E` in it
pub fn assert_fails_with<E>(action: impl Attempt) -> AssertionResult
where
    E: StdError + Send + Sync + 'static,
{
    let expected = type_name::<E>();
    let raised = match action.attempt() {
        Ok(()) => {
            return Err(AssertionError::NothingRaised {
                expected: expected.to_string(),
            })
        }
        Err(raised) => raised,
    };

    tracing::debug!(target: "contextspec", error = ?raised, expected, "action raised an error");

    if raised.downcast_ref::<E>().is_some() || raised.chain().any(|cause| cause.is::<E>()) {
        return Ok(());
    }

    Err(AssertionError::WrongErrorType {
        expected: expected.to_string(),
        actual: format!("{:#}", raised),
    })
}

/// Asserts that `action` returns any error at all.
///
/// # Returns
///
/// * `Ok(())` - If the action returned `Err`
/// * `Err(AssertionError::NothingRaised)` - If it returned `Ok`
pub fn assert_fails(action: impl Attempt) -> AssertionResult {
    match action.attempt() {
        Ok(()) => Err(AssertionError::NothingRaised {
            expected: "an error".to_string(),
        }),
        Err(raised) => {
            tracing::debug!(target: "contextspec", error = ?raised, "action raised an error");
            Ok(())
        }
    }
}

/// Asserts that `action` panics with a payload of exactly the `expected` type.
///
/// # Arguments
///
/// * `expected` - Token of the payload type: `&'static str` for `panic!` with a
///   literal message, `String` for a formatted one, or whatever was handed to
///   `std::panic::panic_any`
/// * `action` - The code that should panic
///
/// # Returns
///
/// * `Ok(())` - If the action panicked with an `expected` payload
/// * `Err(AssertionError::NothingRaised)` - If it returned normally
/// * `Err(AssertionError::WrongErrorType)` - If the payload has another type
pub fn assert_panics_with_type(expected: TypeToken, action: impl FnOnce()) -> AssertionResult {
    let payload = match panic::catch_unwind(AssertUnwindSafe(action)) {
        Ok(()) => {
            return Err(AssertionError::NothingRaised {
                expected: format!("a panic carrying {}", expected),
            })
        }
        Err(payload) => payload,
    };

    let description = describe_payload(&*payload);
    tracing::debug!(target: "contextspec", payload = %description, "action panicked");

    if payload.runtime_type() == expected {
        return Ok(());
    }

    Err(AssertionError::WrongErrorType {
        expected: format!("a panic carrying {}", expected),
        actual: description,
    })
}

pub fn assert_panics_with<P: Any>(action: impl FnOnce()) -> AssertionResult {
    assert_panics_with_type(TypeToken::of::<P>(), action)
}

fn describe_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("a panic with message {:?}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("a panic with message {:?}", message)
    } else {
        "a panic with a non-string payload".to_string()
    }
}

/// Panics unless `action` returns an error with an `E` in it. See
/// [`assert_fails_with`].
#[track_caller]
pub fn should_fail_with<E>(action: impl Attempt)
where
    E: StdError + Send + Sync + 'static,
{
    verify(assert_fails_with::<E>(action));
}

#[track_caller]
pub fn should_fail(action: impl Attempt) {
    verify(assert_fails(action));
}

#[track_caller]
pub fn should_panic_with<P: Any>(action: impl FnOnce()) {
    verify(assert_panics_with::<P>(action));
}

impl TypeToken {
    /// Asserts that `action` panics with a payload of this type.
    #[track_caller]
    pub fn should_be_thrown_by(self, action: impl FnOnce()) {
        verify(assert_panics_with_type(self, action));
    }
}
