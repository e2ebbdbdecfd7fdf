//! Boolean, NaN and null assertions.

use std::fmt::Debug;

use crate::config::render;
use crate::error::{AssertionError, AssertionResult};
use crate::failure::verify;

/// Asserts that `condition` holds.
///
/// # Returns
///
/// * `Ok(())` - If `condition` is `true`
/// * `Err(AssertionError::Condition)` - Otherwise
pub fn assert_true(condition: bool) -> AssertionResult {
    assert_condition(condition, true)
}

pub fn assert_false(condition: bool) -> AssertionResult {
    assert_condition(condition, false)
}

fn assert_condition(actual: bool, expected: bool) -> AssertionResult {
    if actual == expected {
        return Ok(());
    }

    Err(AssertionError::Condition { expected, actual })
}

pub trait ShouldBeTrue {
    fn should_be_true(&self);
    fn should_be_false(&self);
}

impl ShouldBeTrue for bool {
    #[track_caller]
    fn should_be_true(&self) {
        verify(assert_true(*self));
    }

    #[track_caller]
    fn should_be_false(&self) {
        verify(assert_false(*self));
    }
}

/// Floating point types that can hold NaN.
pub trait Float: Copy + Debug {
    fn is_nan_value(self) -> bool;
}

impl Float for f32 {
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }
}

impl Float for f64 {
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }
}

/// Asserts that `value` is NaN.
///
/// # Arguments
///
/// * `value` - An `f32` or `f64`
///
/// # Returns
///
/// * `Ok(())` - If `value` is NaN
/// * `Err(AssertionError::NotNaN)` - Otherwise, with the value rendered
pub fn assert_nan<F: Float>(value: F) -> AssertionResult {
    if value.is_nan_value() {
        return Ok(());
    }

    Err(AssertionError::NotNaN(render(&value)))
}

pub trait ShouldBeNaN {
    fn should_be_nan(&self);
}

impl<F: Float> ShouldBeNaN for F {
    #[track_caller]
    fn should_be_nan(&self) {
        verify(assert_nan(*self));
    }
}

/// Values with a null state: `None` for options, the null address for raw
/// pointers.
pub trait Nullable {
    fn is_null_value(&self) -> bool;
    fn describe(&self) -> String;
}

impl<T: Debug> Nullable for Option<T> {
    fn is_null_value(&self) -> bool {
        self.is_none()
    }

    fn describe(&self) -> String {
        render(self)
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null_value(&self) -> bool {
        self.is_null()
    }

    fn describe(&self) -> String {
        format!("{:p}", *self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null_value(&self) -> bool {
        self.is_null()
    }

    fn describe(&self) -> String {
        format!("{:p}", *self)
    }
}

/// Asserts that `value` is null.
///
/// # Arguments
///
/// * `value` - An `Option` or a raw pointer
///
/// # Returns
///
/// * `Ok(())` - If `value` is `None` or a null pointer
/// * `Err(AssertionError::NotNull)` - Otherwise. `Some("")` is not null
pub fn assert_null<N: Nullable + ?Sized>(value: &N) -> AssertionResult {
    if value.is_null_value() {
        return Ok(());
    }

    Err(AssertionError::NotNull(value.describe()))
}

/// Asserts that `value` is not null.
pub fn assert_not_null<N: Nullable + ?Sized>(value: &N) -> AssertionResult {
    if !value.is_null_value() {
        return Ok(());
    }

    Err(AssertionError::Null(value.describe()))
}

/// Fluent null checks for options and raw pointers.
pub trait ShouldBeNull {
    fn should_be_null(&self);
    fn should_not_be_null(&self);
}

impl<N: Nullable + ?Sized> ShouldBeNull for N {
    #[track_caller]
    fn should_be_null(&self) {
        verify(assert_null(self));
    }

    #[track_caller]
    fn should_not_be_null(&self) {
        verify(assert_not_null(self));
    }
}
