use alloc::vec::Vec;

use super::{ArrayStackIter, Stack, StackError};


/// Array-backed stack whose capacity is fixed at construction.
///
/// The backing storage is allocated once up front and never reallocated.
#[derive(Debug, Clone)]
pub struct FixedCapacityStack<T> {
  items:    Vec<T>,
  capacity: usize,
}

impl<T> FixedCapacityStack<T> {
  /// Creates an empty stack able to hold exactly `capacity` elements.
  ///
  /// # Panics
  ///
  /// Panics if `capacity` is zero.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    assert!(capacity > 0, "capacity must be positive");
    Self { items: Vec::with_capacity(capacity), capacity }
  }

  /// Returns the number of elements the stack can hold.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Indicates whether another push would be rejected.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    self.items.len() >= self.capacity
  }

  /// Pushes an element onto the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::CapacityExceeded`] when the stack already holds `capacity`
  /// elements.
  pub fn push(&mut self, item: T) -> Result<(), StackError> {
    if self.is_full() {
      return Err(StackError::CapacityExceeded { capacity: self.capacity });
    }
    self.items.push(item);
    Ok(())
  }

  /// Removes and returns the top element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop(&mut self) -> Result<T, StackError> {
    self.items.pop().ok_or(StackError::Empty)
  }

  /// Returns a reference to the top element.
  #[must_use]
  pub const fn peek(&self) -> Option<&T> {
    self.items.as_slice().last()
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.items.len()
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Drops every element while keeping the allocation.
  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Returns an iterator from the top element to the bottom one.
  #[must_use]
  pub fn iter(&self) -> ArrayStackIter<'_, T> {
    ArrayStackIter::new(&self.items)
  }
}

impl<T> Stack<T> for FixedCapacityStack<T> {
  type Iter<'a>
    = ArrayStackIter<'a, T>
  where
    T: 'a;

  fn push(&mut self, item: T) -> Result<(), StackError> {
    FixedCapacityStack::push(self, item)
  }

  fn pop(&mut self) -> Result<T, StackError> {
    FixedCapacityStack::pop(self)
  }

  fn peek(&self) -> Option<&T> {
    FixedCapacityStack::peek(self)
  }

  fn len(&self) -> usize {
    FixedCapacityStack::len(self)
  }

  fn clear(&mut self) {
    FixedCapacityStack::clear(self);
  }

  fn iter(&self) -> Self::Iter<'_> {
    FixedCapacityStack::iter(self)
  }
}

impl<'a, T> IntoIterator for &'a FixedCapacityStack<T> {
  type IntoIter = ArrayStackIter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
