//! Type membership assertions.
//!
//! Rust has no subtyping between concrete types, so "instance of" and
//! "assignable from" both reduce to type identity. Statically typed values
//! are checked against their own type; `dyn Any` trait objects against the
//! concrete type behind them.
//!
//! A `Box<dyn Any>` is itself a `'static` value, so calling these helpers on
//! the box checks the box type. Dereference first (`(*boxed)` or
//! `boxed.as_ref()`) to check the boxed value.

use std::any::Any;

use crate::error::{AssertionError, AssertionResult};
use crate::failure::verify;
use crate::types::{RuntimeType, TypeToken};

/// Asserts that a value of type `actual` is an instance of `expected`.
///
/// # Arguments
///
/// * `actual` - The static or runtime type of the value under test
/// * `expected` - The type it should have
///
/// # Returns
///
/// * `Ok(())` - If the types are identical
/// * `Err(AssertionError::NotInstanceOf)` - Otherwise, naming both types
pub fn assert_instance_of(actual: TypeToken, expected: TypeToken) -> AssertionResult {
    if actual == expected {
        return Ok(());
    }

    Err(AssertionError::NotInstanceOf {
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

/// Asserts that `actual` is not the `unexpected` type.
pub fn assert_not_instance_of(actual: TypeToken, unexpected: TypeToken) -> AssertionResult {
    if actual != unexpected {
        return Ok(());
    }

    Err(AssertionError::InstanceOf(unexpected.to_string()))
}

/// Asserts that a value of type `expected` could be stored where `actual` is.
///
/// Without subtyping between concrete types this holds only for identical
/// types.
///
/// # Returns
///
/// * `Ok(())` - If the types are identical
/// * `Err(AssertionError::NotAssignableFrom)` - Otherwise
pub fn assert_assignable_from(actual: TypeToken, expected: TypeToken) -> AssertionResult {
    if actual == expected {
        return Ok(());
    }

    Err(AssertionError::NotAssignableFrom {
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

pub fn assert_not_assignable_from(actual: TypeToken, unexpected: TypeToken) -> AssertionResult {
    if actual != unexpected {
        return Ok(());
    }

    Err(AssertionError::AssignableFrom(unexpected.to_string()))
}

/// Fluent type membership checks.
///
/// Every `'static` value is checked against its static type. The `dyn Any`
/// trait objects are checked against the concrete type behind them. The generic
/// forms (`should_be_instance_of::<T>()`) are shorthand for the token forms.
pub trait ShouldBeInstanceOf {
    /// The type the assertions compare against.
    fn type_token(&self) -> TypeToken;

    #[track_caller]
    fn should_be_instance_of_type(&self, expected: TypeToken) {
        verify(assert_instance_of(self.type_token(), expected));
    }

    #[track_caller]
    fn should_not_be_instance_of_type(&self, unexpected: TypeToken) {
        verify(assert_not_instance_of(self.type_token(), unexpected));
    }

    #[track_caller]
    fn should_be_assignable_from_type(&self, expected: TypeToken) {
        verify(assert_assignable_from(self.type_token(), expected));
    }

    #[track_caller]
    fn should_not_be_assignable_from_type(&self, unexpected: TypeToken) {
        verify(assert_not_assignable_from(self.type_token(), unexpected));
    }

    #[track_caller]
    fn should_be_instance_of<T: Any + ?Sized>(&self) {
        self.should_be_instance_of_type(TypeToken::of::<T>());
    }

    #[track_caller]
    fn should_not_be_instance_of<T: Any + ?Sized>(&self) {
        self.should_not_be_instance_of_type(TypeToken::of::<T>());
    }

    #[track_caller]
    fn should_be_assignable_from<T: Any + ?Sized>(&self) {
        self.should_be_assignable_from_type(TypeToken::of::<T>());
    }

    #[track_caller]
    fn should_not_be_assignable_from<T: Any + ?Sized>(&self) {
        self.should_not_be_assignable_from_type(TypeToken::of::<T>());
    }
}

impl<T: Any> ShouldBeInstanceOf for T {
    fn type_token(&self) -> TypeToken {
        TypeToken::of::<T>()
    }
}

impl ShouldBeInstanceOf for dyn Any {
    fn type_token(&self) -> TypeToken {
        self.runtime_type()
    }
}

impl ShouldBeInstanceOf for dyn Any + Send {
    fn type_token(&self) -> TypeToken {
        self.runtime_type()
    }
}

impl ShouldBeInstanceOf for dyn Any + Send + Sync {
    fn type_token(&self) -> TypeToken {
        self.runtime_type()
    }
}
