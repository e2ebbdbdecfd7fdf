//! Fluent assertion helpers for context/specification style tests.
//!
//! Import the prelude and assert on values directly:
//!
//! ```
//! use contextspec_assertions::prelude::*;
//!
//! let primes = vec![2_u32, 3, 5, 7];
//! primes.should_not_be_empty();
//! primes.should_contain(&5);
//! primes.should_contain_match(|p| p % 2 == 0);
//! "because of the context".should_start_with("because");
//! primes.len().should_be_greater_than(&3);
//! should_fail_with::<std::num::ParseIntError>(|| "seven".parse::<u32>());
//! ```
//!
//! A failed assertion logs a `tracing` event and panics with a message such
//! as `Assertion failed: expected [2, 3, 5, 7] to contain 9`. Use the
//! `assert_*` functions from [`assertions`] to get the same checks as a
//! `Result` instead.

pub mod assertions;
pub mod config;
pub mod error;
pub mod failure;
pub mod types;

pub use config::RenderConfig;
pub use error::{AssertionError, AssertionResult};
pub use failure::{fail, verify};
pub use types::{RuntimeType, TypeToken};

/// The fluent surface: extension traits, free `should_*` helpers and the types
/// they mention.
pub mod prelude {
    pub use crate::assertions::{
        should_fail, should_fail_with, should_panic_with, Container, Elements, Nullable,
        ShouldBeEmpty, ShouldBeInstanceOf, ShouldBeNaN, ShouldBeNull, ShouldBeOrdered,
        ShouldBeTrue, ShouldContain, ShouldContainItemOfType, ShouldContainMatch, ShouldEqual,
        ShouldStartWith,
    };
    pub use crate::error::AssertionError;
    pub use crate::types::{RuntimeType, TypeToken};
}
