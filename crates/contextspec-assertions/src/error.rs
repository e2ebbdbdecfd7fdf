use thiserror::Error;

use crate::assertions::Relation;

/// The failure raised by every assertion helper.
///
/// Each variant carries the rendered expected and actual values so the
/// message reads on its own in the test harness output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionError {
    /// Values differ
    #[error("Assertion failed: expected {expected}, got {actual}")]
    NotEqual { expected: String, actual: String },

    /// Values are equal
    #[error("Assertion failed: expected a value other than {unexpected}")]
    Equal { unexpected: String },

    /// References point at different instances
    #[error("Assertion failed: expected the same instance as {expected}, got a different instance {actual}")]
    NotSame { expected: String, actual: String },

    /// References point at the same instance
    #[error("Assertion failed: expected a different instance than {0}")]
    Same(String),

    /// Container has elements
    #[error("Assertion failed: expected an empty value, got {count} element(s): {actual}")]
    NotEmpty { count: usize, actual: String },

    /// Container has no elements
    #[error("Assertion failed: expected a non-empty value, got {0}")]
    Empty(String),

    /// Element or substring not present
    #[error("Assertion failed: expected {collection} to contain {expected}")]
    Missing { expected: String, collection: String },

    /// Element or substring present
    #[error("Assertion failed: expected {collection} not to contain {unexpected}")]
    Unexpected { unexpected: String, collection: String },

    /// No element satisfies the predicate
    #[error("Assertion failed: expected {collection} to contain an element matching the predicate")]
    NoMatch { collection: String },

    /// Some element satisfies the predicate
    #[error("Assertion failed: expected no element of {collection} to match the predicate, found {matched}")]
    UnexpectedMatch { matched: String, collection: String },

    /// Type-tagged search found nothing
    #[error("Assertion failed: collection did not contain an item of type {0}")]
    NoItemOfType(String),

    /// Value is not an instance of the type
    #[error("Assertion failed: expected an instance of {expected}, got {actual}")]
    NotInstanceOf { expected: String, actual: String },

    /// Value is an instance of the type
    #[error("Assertion failed: expected anything but an instance of {0}")]
    InstanceOf(String),

    /// Value type cannot take values of the type
    #[error("Assertion failed: expected a value assignable from {expected}, got {actual}")]
    NotAssignableFrom { expected: String, actual: String },

    /// Value type can take values of the type
    #[error("Assertion failed: expected a value not assignable from {0}")]
    AssignableFrom(String),

    /// Comparison does not hold
    #[error("Assertion failed: expected {actual} to be {relation} {bound}")]
    Ordering {
        actual: String,
        relation: Relation,
        bound: String,
    },

    /// Boolean condition has the wrong value
    #[error("Assertion failed: expected {expected}, got {actual}")]
    Condition { expected: bool, actual: bool },

    /// Number is not NaN
    #[error("Assertion failed: expected NaN, got {0}")]
    NotNaN(String),

    /// Value is not null
    #[error("Assertion failed: expected null, got {0}")]
    NotNull(String),

    /// Value is null
    #[error("Assertion failed: expected a non-null value, got {0}")]
    Null(String),

    /// String does not start with the prefix
    #[error("Assertion failed: expected {actual} to start with {prefix}")]
    MissingPrefix { prefix: String, actual: String },

    /// String does not end with the suffix
    #[error("Assertion failed: expected {actual} to end with {suffix}")]
    MissingSuffix { suffix: String, actual: String },

    /// Action completed without raising anything
    #[error("Assertion failed: expected {expected} to be raised, but the action completed normally")]
    NothingRaised { expected: String },

    /// Action raised something of another type
    #[error("Assertion failed: expected {expected} to be raised, got {actual}")]
    WrongErrorType { expected: String, actual: String },
}

/// Result of a non-panicking assertion check
pub type AssertionResult = Result<(), AssertionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let errors = vec![
            (
                AssertionError::NotEqual { expected: "1".to_string(), actual: "2".to_string() },
                "Assertion failed: expected 1, got 2",
            ),
            (
                AssertionError::NoItemOfType("alloc::string::String".to_string()),
                "Assertion failed: collection did not contain an item of type alloc::string::String",
            ),
            (
                AssertionError::Ordering {
                    actual: "3".to_string(),
                    relation: Relation::LessThan,
                    bound: "1".to_string(),
                },
                "Assertion failed: expected 3 to be less than 1",
            ),
            (
                AssertionError::Condition { expected: true, actual: false },
                "Assertion failed: expected true, got false",
            ),
            (
                AssertionError::NothingRaised { expected: "core::num::error::ParseIntError".to_string() },
                "Assertion failed: expected core::num::error::ParseIntError to be raised, but the action completed normally",
            ),
        ];

        for (error, expected_msg) in errors {
            assert_eq!(error.to_string(), expected_msg);
        }
    }

    #[test]
    fn test_every_message_is_prefixed() {
        let error = AssertionError::Null("None".to_string());
        assert!(error.to_string().starts_with("Assertion failed: "));
    }

    #[test]
    fn test_error_clone_and_eq() {
        let original = AssertionError::Same("42".to_string());
        let cloned = original.clone();

        assert_eq!(original, cloned);
        assert_eq!(format!("{:?}", original), format!("{:?}", cloned));
    }
}
