//! Equality and identity assertions.

use std::fmt::Debug;

use crate::config::render;
use crate::error::{AssertionError, AssertionResult};
use crate::failure::verify;

/// Asserts that `actual == expected`.
///
/// # Arguments
///
/// * `actual` - The value under test
/// * `expected` - The value it should equal, possibly of another type with a
///   `PartialEq` bridge (`String` against `&str`, for example)
///
/// # Returns
///
/// * `Ok(())` - If the values are equal
/// * `Err(AssertionError::NotEqual)` - Otherwise, with both values rendered
pub fn assert_equal<T, U>(actual: &T, expected: &U) -> AssertionResult
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    if actual == expected {
        return Ok(());
    }

    Err(AssertionError::NotEqual {
        expected: render(expected),
        actual: render(actual),
    })
}

/// Asserts that `actual != unexpected`.
///
/// # Returns
///
/// * `Ok(())` - If the values differ
/// * `Err(AssertionError::Equal)` - If they are equal
pub fn assert_not_equal<T, U>(actual: &T, unexpected: &U) -> AssertionResult
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    if actual != unexpected {
        return Ok(());
    }

    Err(AssertionError::Equal {
        unexpected: render(unexpected),
    })
}

/// Asserts that both references point at the same instance.
///
/// Equal values living at different addresses fail. For slices and `str` the
/// length is compared along with the address.
///
/// # Arguments
///
/// * `actual` - Reference under test
/// * `expected` - Reference to the instance `actual` should be
///
/// # Returns
///
/// * `Ok(())` - If both references are the same pointer
/// * `Err(AssertionError::NotSame)` - Otherwise
pub fn assert_same<T: Debug + ?Sized>(actual: &T, expected: &T) -> AssertionResult {
    if std::ptr::eq(actual, expected) {
        return Ok(());
    }

    Err(AssertionError::NotSame {
        expected: render(expected),
        actual: render(actual),
    })
}

/// Asserts that the references point at different instances.
pub fn assert_not_same<T: Debug + ?Sized>(actual: &T, unexpected: &T) -> AssertionResult {
    if !std::ptr::eq(actual, unexpected) {
        return Ok(());
    }

    Err(AssertionError::Same(render(actual)))
}

/// Fluent equality and identity checks, available on every `Debug` value.
///
/// Each method panics with the [`AssertionError`] message when its check fails.
///
/// [`AssertionError`]: crate::AssertionError
pub trait ShouldEqual: Debug {
    fn should_equal<U>(&self, expected: &U)
    where
        Self: PartialEq<U>,
        U: Debug + ?Sized;

    fn should_not_equal<U>(&self, unexpected: &U)
    where
        Self: PartialEq<U>,
        U: Debug + ?Sized;

    fn should_be_the_same_as(&self, expected: &Self);

    fn should_not_be_the_same_as(&self, unexpected: &Self);
}

impl<T: Debug + ?Sized> ShouldEqual for T {
    #[track_caller]
    fn should_equal<U>(&self, expected: &U)
    where
        Self: PartialEq<U>,
        U: Debug + ?Sized,
    {
        verify(assert_equal(self, expected));
    }

    #[track_caller]
    fn should_not_equal<U>(&self, unexpected: &U)
    where
        Self: PartialEq<U>,
        U: Debug + ?Sized,
    {
        verify(assert_not_equal(self, unexpected));
    }

    #[track_caller]
    fn should_be_the_same_as(&self, expected: &Self) {
        verify(assert_same(self, expected));
    }

    #[track_caller]
    fn should_not_be_the_same_as(&self, unexpected: &Self) {
        verify(assert_not_same(self, unexpected));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_assert_equal() {
        assert!(assert_equal(&3_u8, &3_u8).is_ok());
        assert!(assert_equal("abc", "abc").is_ok());
        assert!(assert_equal(&vec![1, 2], &vec![1, 2]).is_ok());

        let err = assert_equal(&1_i32, &2_i32).unwrap_err();
        assert_eq!(
            err,
            AssertionError::NotEqual {
                expected: "2".to_string(),
                actual: "1".to_string()
            }
        );
    }

    #[test]
    fn test_assert_equal_across_types() {
        let owned = String::from("abc");
        assert!(assert_equal(&owned, "abc").is_ok());
        assert!(assert_equal(&owned, &"abd").is_err());
    }

    #[test]
    fn test_assert_equal_is_order_sensitive_for_sequences() {
        assert!(assert_equal(&[1, 2, 3], &[3, 2, 1]).is_err());
    }

    #[test]
    fn test_assert_not_equal() {
        assert!(assert_not_equal(&1_i32, &2_i32).is_ok());
        assert_matches!(
            assert_not_equal(&"a", &"a"),
            Err(AssertionError::Equal { unexpected }) if unexpected == "\"a\""
        );
    }

    #[test]
    fn test_assert_same_uses_identity() {
        let first = String::from("same");
        let second = String::from("same");

        assert!(assert_same(&first, &first).is_ok());
        assert_matches!(assert_same(&first, &second), Err(AssertionError::NotSame { .. }));
        assert!(assert_not_same(&first, &second).is_ok());
        assert_matches!(assert_not_same(&first, &first), Err(AssertionError::Same(_)));
    }

    #[test]
    fn test_fluent_equality() {
        let answer: u64 = 42;
        answer.should_equal(&42);
        answer.should_not_equal(&7);
        answer.should_be_the_same_as(&answer);
        "text".to_string().should_equal("text");
    }

    #[test]
    #[should_panic(expected = "Assertion failed: expected \"b\", got \"a\"")]
    fn test_fluent_equality_failure() {
        "a".should_equal("b");
    }

    #[test]
    #[should_panic(expected = "expected a different instance than 5")]
    fn test_fluent_not_same_failure() {
        let five = 5_i32;
        five.should_not_be_the_same_as(&five);
    }
}
