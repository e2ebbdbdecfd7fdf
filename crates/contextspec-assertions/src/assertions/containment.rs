//! Containment assertions: literal elements, predicates, substrings and
//! type-tagged element search.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt::Debug;

use crate::config::render;
use crate::error::{AssertionError, AssertionResult};
use crate::failure::verify;
use crate::types::{RuntimeType, TypeToken};

/// A sequence whose elements can be walked by reference.
pub trait Elements {
    type Item;

    fn elements(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T> Elements for [T] {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Elements for [T; N] {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Elements for Vec<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Elements for VecDeque<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, S> Elements for HashSet<T, S> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Elements for BTreeSet<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Elements for LinkedList<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

/// Walks the heap in arbitrary order.
impl<T> Elements for BinaryHeap<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

/// Maps are searched by value. Use `contains_key` for keys.
impl<K, V, S> Elements for HashMap<K, V, S> {
    type Item = V;

    fn elements(&self) -> impl Iterator<Item = &V> {
        self.values()
    }
}

impl<K, V> Elements for BTreeMap<K, V> {
    type Item = V;

    fn elements(&self) -> impl Iterator<Item = &V> {
        self.values()
    }
}

/// Asserts that some element of `actual` equals `expected`.
///
/// # Arguments
///
/// * `actual` - The sequence to search
/// * `expected` - The element to look for
///
/// # Returns
///
/// * `Ok(())` - If an equal element is found
/// * `Err(AssertionError::Missing)` - Otherwise, naming the element and the
///   collection
pub fn assert_contains<C>(actual: &C, expected: &C::Item) -> AssertionResult
where
    C: Elements + Debug + ?Sized,
    C::Item: PartialEq + Debug,
{
    if actual.elements().any(|item| item == expected) {
        return Ok(());
    }

    Err(AssertionError::Missing {
        expected: render(expected),
        collection: render(actual),
    })
}

/// Asserts that no element of `actual` equals `unexpected`.
///
/// # Returns
///
/// * `Ok(())` - If no equal element is found
/// * `Err(AssertionError::Unexpected)` - Otherwise
pub fn assert_not_contains<C>(actual: &C, unexpected: &C::Item) -> AssertionResult
where
    C: Elements + Debug + ?Sized,
    C::Item: PartialEq + Debug,
{
    if !actual.elements().any(|item| item == unexpected) {
        return Ok(());
    }

    Err(AssertionError::Unexpected {
        unexpected: render(unexpected),
        collection: render(actual),
    })
}

/// Asserts that some element of `actual` satisfies `predicate`.
///
/// # Arguments
///
/// * `actual` - The sequence to search
/// * `predicate` - Called on each element until it returns `true`
///
/// # Returns
///
/// * `Ok(())` - If an element matches
/// * `Err(AssertionError::NoMatch)` - If none does
pub fn assert_contains_match<C, P>(actual: &C, predicate: P) -> AssertionResult
where
    C: Elements + Debug + ?Sized,
    P: Fn(&C::Item) -> bool,
{
    if actual.elements().any(predicate) {
        return Ok(());
    }

    Err(AssertionError::NoMatch {
        collection: render(actual),
    })
}

/// Fails on the first element that satisfies `predicate`.
pub fn assert_not_contains_match<C, P>(actual: &C, predicate: P) -> AssertionResult
where
    C: Elements + Debug + ?Sized,
    C::Item: Debug,
    P: Fn(&C::Item) -> bool,
{
    match actual.elements().find(|item| predicate(item)) {
        None => Ok(()),
        Some(matched) => Err(AssertionError::UnexpectedMatch {
            matched: render(matched),
            collection: render(actual),
        }),
    }
}

/// Asserts that `expected` is a substring of `actual`. The empty string is a
/// substring of everything.
pub fn assert_contains_str(actual: &str, expected: &str) -> AssertionResult {
    if actual.contains(expected) {
        return Ok(());
    }

    Err(AssertionError::Missing {
        expected: render(expected),
        collection: render(actual),
    })
}

pub fn assert_not_contains_str(actual: &str, unexpected: &str) -> AssertionResult {
    if !actual.contains(unexpected) {
        return Ok(());
    }

    Err(AssertionError::Unexpected {
        unexpected: render(unexpected),
        collection: render(actual),
    })
}

/// Asserts that at least one element's runtime type is exactly `expected`.
///
/// # Arguments
///
/// * `actual` - A sequence of type-erased values (`Box<dyn Any>` and friends)
/// * `expected` - Token of the type to look for
///
/// # Returns
///
/// * `Ok(())` - If some element has the expected runtime type
/// * `Err(AssertionError::NoItemOfType)` - Otherwise, naming the type
pub fn assert_contains_item_of_type<C>(actual: &C, expected: TypeToken) -> AssertionResult
where
    C: Elements + ?Sized,
    C::Item: RuntimeType,
{
    if actual
        .elements()
        .any(|item| item.runtime_type() == expected)
    {
        return Ok(());
    }

    Err(AssertionError::NoItemOfType(expected.name().to_string()))
}

/// `should_contain` / `should_not_contain` for sequences (by element) and
/// strings (by substring).
pub trait ShouldContain<T: ?Sized> {
    fn should_contain(&self, expected: &T);
    fn should_not_contain(&self, unexpected: &T);
}

impl<C, T> ShouldContain<T> for C
where
    C: Elements<Item = T> + Debug + ?Sized,
    T: PartialEq + Debug,
{
    #[track_caller]
    fn should_contain(&self, expected: &T) {
        verify(assert_contains(self, expected));
    }

    #[track_caller]
    fn should_not_contain(&self, unexpected: &T) {
        verify(assert_not_contains(self, unexpected));
    }
}

impl ShouldContain<str> for str {
    #[track_caller]
    fn should_contain(&self, expected: &str) {
        verify(assert_contains_str(self, expected));
    }

    #[track_caller]
    fn should_not_contain(&self, unexpected: &str) {
        verify(assert_not_contains_str(self, unexpected));
    }
}

/// Predicate-based containment.
pub trait ShouldContainMatch: Elements {
    fn should_contain_match<P>(&self, predicate: P)
    where
        P: Fn(&Self::Item) -> bool;

    fn should_not_contain_match<P>(&self, predicate: P)
    where
        P: Fn(&Self::Item) -> bool;
}

impl<C> ShouldContainMatch for C
where
    C: Elements + Debug + ?Sized,
    C::Item: Debug,
{
    #[track_caller]
    fn should_contain_match<P>(&self, predicate: P)
    where
        P: Fn(&Self::Item) -> bool,
    {
        verify(assert_contains_match(self, predicate));
    }

    #[track_caller]
    fn should_not_contain_match<P>(&self, predicate: P)
    where
        P: Fn(&Self::Item) -> bool,
    {
        verify(assert_not_contains_match(self, predicate));
    }
}

/// Search of heterogeneous collections by element type.
pub trait ShouldContainItemOfType: Elements {
    fn should_contain_item_of_type_token(&self, expected: TypeToken);

    #[track_caller]
    fn should_contain_item_of_type<T: Any>(&self) {
        self.should_contain_item_of_type_token(TypeToken::of::<T>());
    }
}

impl<C> ShouldContainItemOfType for C
where
    C: Elements + ?Sized,
    C::Item: RuntimeType,
{
    #[track_caller]
    fn should_contain_item_of_type_token(&self, expected: TypeToken) {
        verify(assert_contains_item_of_type(self, expected));
    }
}
