//! Ordering assertions for `PartialOrd` values.

use std::cmp::Ordering;
use std::fmt::{self, Debug};

use crate::config::render;
use crate::error::{AssertionError, AssertionResult};
use crate::failure::verify;

/// The comparison an ordering assertion expects between actual and bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
}

impl Relation {
    /// Whether the observed ordering satisfies the relation.
    ///
    /// Incomparable values (`None`) never do.
    pub fn holds(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (_, None) => false,
            (Relation::GreaterThan, Some(o)) => o == Ordering::Greater,
            (Relation::GreaterThanOrEqualTo, Some(o)) => o != Ordering::Less,
            (Relation::LessThan, Some(o)) => o == Ordering::Less,
            (Relation::LessThanOrEqualTo, Some(o)) => o != Ordering::Greater,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::GreaterThan => write!(f, "greater than"),
            Relation::GreaterThanOrEqualTo => write!(f, "greater than or equal to"),
            Relation::LessThan => write!(f, "less than"),
            Relation::LessThanOrEqualTo => write!(f, "less than or equal to"),
        }
    }
}

/// Asserts that `actual` stands in `relation` to `bound`.
///
/// # Arguments
///
/// * `actual` - The value under test
/// * `relation` - The expected ordering of `actual` against `bound`
/// * `bound` - The value to compare against
///
/// # Returns
///
/// * `Ok(())` - If `partial_cmp` yields an ordering the relation accepts
/// * `Err(AssertionError::Ordering)` - Otherwise, including when the values are
///   incomparable
pub fn assert_ordered<T>(actual: &T, relation: Relation, bound: &T) -> AssertionResult
where
    T: PartialOrd + Debug + ?Sized,
{
    if relation.holds(actual.partial_cmp(bound)) {
        return Ok(());
    }

    Err(AssertionError::Ordering {
        actual: render(actual),
        relation,
        bound: render(bound),
    })
}

/// Asserts that `actual > bound`.
pub fn assert_greater_than<T: PartialOrd + Debug + ?Sized>(actual: &T, bound: &T) -> AssertionResult {
    assert_ordered(actual, Relation::GreaterThan, bound)
}

/// Asserts that `actual >= bound`.
pub fn assert_greater_than_or_equal_to<T: PartialOrd + Debug + ?Sized>(
    actual: &T,
    bound: &T,
) -> AssertionResult {
    assert_ordered(actual, Relation::GreaterThanOrEqualTo, bound)
}

/// Asserts that `actual < bound`.
pub fn assert_less_than<T: PartialOrd + Debug + ?Sized>(actual: &T, bound: &T) -> AssertionResult {
    assert_ordered(actual, Relation::LessThan, bound)
}

pub fn assert_less_than_or_equal_to<T: PartialOrd + Debug + ?Sized>(
    actual: &T,
    bound: &T,
) -> AssertionResult {
    assert_ordered(actual, Relation::LessThanOrEqualTo, bound)
}

/// Fluent ordering checks for every `PartialOrd` value. NaN fails all four.
pub trait ShouldBeOrdered {
    fn should_be_greater_than(&self, bound: &Self);
    fn should_be_greater_than_or_equal_to(&self, bound: &Self);
    fn should_be_less_than(&self, bound: &Self);
    fn should_be_less_than_or_equal_to(&self, bound: &Self);
}

impl<T: PartialOrd + Debug + ?Sized> ShouldBeOrdered for T {
    #[track_caller]
    fn should_be_greater_than(&self, bound: &Self) {
        verify(assert_greater_than(self, bound));
    }

    #[track_caller]
    fn should_be_greater_than_or_equal_to(&self, bound: &Self) {
        verify(assert_greater_than_or_equal_to(self, bound));
    }

    #[track_caller]
    fn should_be_less_than(&self, bound: &Self) {
        verify(assert_less_than(self, bound));
    }

    #[track_caller]
    fn should_be_less_than_or_equal_to(&self, bound: &Self) {
        verify(assert_less_than_or_equal_to(self, bound));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_relation_holds() {
        assert!(Relation::GreaterThan.holds(Some(Ordering::Greater)));
        assert!(!Relation::GreaterThan.holds(Some(Ordering::Equal)));
        assert!(Relation::GreaterThanOrEqualTo.holds(Some(Ordering::Equal)));
        assert!(Relation::LessThanOrEqualTo.holds(Some(Ordering::Less)));
        assert!(!Relation::LessThan.holds(Some(Ordering::Greater)));
        assert!(!Relation::LessThanOrEqualTo.holds(None));
    }

    #[test]
    fn test_less_than_is_asymmetric() {
        assert!(assert_less_than(&1_i32, &2).is_ok());
        assert_matches!(
            assert_less_than(&2_i32, &1),
            Err(AssertionError::Ordering { relation: Relation::LessThan, .. })
        );
        assert!(assert_less_than(&2_i32, &2).is_err());
        assert!(assert_less_than_or_equal_to(&2_i32, &2).is_ok());
    }

    #[test]
    fn test_greater_than() {
        assert!(assert_greater_than("b", "a").is_ok());
        assert!(assert_greater_than_or_equal_to(&1.5_f64, &1.5).is_ok());
        let err = assert_greater_than(&1_u8, &9).unwrap_err();
        assert_eq!(err.to_string(), "Assertion failed: expected 1 to be greater than 9");
    }

    #[test]
    fn test_nan_is_never_ordered() {
        assert!(assert_greater_than_or_equal_to(&f64::NAN, &0.0).is_err());
        assert!(assert_less_than_or_equal_to(&f64::NAN, &f64::NAN).is_err());
    }

    #[test]
    fn test_fluent_ordering() {
        let low: u32 = 3;
        low.should_be_less_than(&4);
        low.should_be_less_than_or_equal_to(&3);
        low.should_be_greater_than(&2);
        low.should_be_greater_than_or_equal_to(&3);
        "apple".should_be_less_than("banana");
    }

    #[test]
    #[should_panic(expected = "Assertion failed: expected 5 to be less than 4")]
    fn test_fluent_ordering_failure() {
        5_i64.should_be_less_than(&4);
    }
}
