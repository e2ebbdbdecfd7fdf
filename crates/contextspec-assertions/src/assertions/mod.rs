//! Assertion helpers.
//!
//! Every check exists twice: an `assert_*` function returning
//! [`AssertionResult`](crate::error::AssertionResult), and a fluent
//! `should_*` method on an extension trait that fails the running test
//! through [`verify`](crate::failure::verify).

mod containment;
mod emptiness;
mod equality;
mod instance;
mod ordering;
mod raises;
mod scalar;
mod text;

// Re-export all assertion helpers for easy access
pub use containment::*;
pub use emptiness::*;
pub use equality::*;
pub use instance::*;
pub use ordering::*;
pub use raises::*;
pub use scalar::*;
pub use text::*;
