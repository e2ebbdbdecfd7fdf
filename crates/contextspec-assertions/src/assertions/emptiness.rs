//! Emptiness assertions for strings and collections.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt::Debug;
use std::ops::{Range, RangeInclusive};

use crate::config::render;
use crate::error::{AssertionError, AssertionResult};
use crate::failure::verify;

/// Anything with a countable number of elements.
///
/// Strings count chars. Ranges count the values they would yield.
pub trait Container {
    fn element_count(&self) -> usize;
}

impl Container for str {
    fn element_count(&self) -> usize {
        self.chars().count()
    }
}

impl Container for String {
    fn element_count(&self) -> usize {
        self.as_str().element_count()
    }
}

impl<T> Container for [T] {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Container for [T; N] {
    fn element_count(&self) -> usize {
        N
    }
}

impl<T> Container for Vec<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Container for VecDeque<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Container for HashMap<K, V, S> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Container for HashSet<T, S> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Container for BTreeMap<K, V> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Container for BTreeSet<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Container for LinkedList<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Container for BinaryHeap<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

// Ranges count the values they would yield, saturating at `usize::MAX`.
impl<T> Container for Range<T>
where
    Range<T>: Iterator,
{
    fn element_count(&self) -> usize {
        self.size_hint().0
    }
}

impl<T> Container for RangeInclusive<T>
where
    RangeInclusive<T>: Iterator,
{
    fn element_count(&self) -> usize {
        self.size_hint().0
    }
}

/// Asserts that `actual` has no elements.
///
/// # Arguments
///
/// * `actual` - A string, collection or range
///
/// # Returns
///
/// * `Ok(())` - If the element count is zero
/// * `Err(AssertionError::NotEmpty)` - Otherwise, with the count and the value
pub fn assert_empty<C: Container + Debug + ?Sized>(actual: &C) -> AssertionResult {
    let count = actual.element_count();
    if count == 0 {
        return Ok(());
    }

    Err(AssertionError::NotEmpty {
        count,
        actual: render(actual),
    })
}

/// Asserts that `actual` has at least one element.
///
/// # Returns
///
/// * `Ok(())` - If the element count is positive
/// * `Err(AssertionError::Empty)` - If it is zero
pub fn assert_not_empty<C: Container + Debug + ?Sized>(actual: &C) -> AssertionResult {
    if actual.element_count() > 0 {
        return Ok(());
    }

    Err(AssertionError::Empty(render(actual)))
}

/// Fluent emptiness checks for every [`Container`].
pub trait ShouldBeEmpty {
    fn should_be_empty(&self);
    fn should_not_be_empty(&self);
}

impl<C: Container + Debug + ?Sized> ShouldBeEmpty for C {
    #[track_caller]
    fn should_be_empty(&self) {
        verify(assert_empty(self));
    }

    #[track_caller]
    fn should_not_be_empty(&self) {
        verify(assert_not_empty(self));
    }
}
