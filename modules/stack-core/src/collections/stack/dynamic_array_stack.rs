use alloc::vec::Vec;

use tracing::debug;

use super::{ArrayStackIter, DynamicArrayStackConfig, ResizePolicy, Stack, StackError};


/// `tracing` target used for resize events.
pub const DYNAMIC_ARRAY_LOG_TARGET: &str = "lifo_stack::dynamic_array";

/// Array-backed stack that grows and shrinks its storage as elements come and go.
///
/// The stack tracks its own logical capacity. On growth or shrink a new buffer of exactly the
/// target capacity is allocated and the stored elements are moved into it, so memory stays
/// proportional to the element count while push and pop remain amortized O(1). See
/// [`ResizePolicy`] for the thresholds.
#[derive(Debug, Clone)]
pub struct DynamicArrayStack<T> {
  items:    Vec<T>,
  capacity: usize,
  config:   DynamicArrayStackConfig,
  policy:   ResizePolicy,
}

impl<T> DynamicArrayStack<T> {
  /// Creates an empty stack with the default configuration (capacity 20).
  #[must_use]
  pub fn new() -> Self {
    Self::with_config(DynamicArrayStackConfig::default())
  }

  /// Creates an empty stack from the provided configuration.
  #[must_use]
  pub fn with_config(config: DynamicArrayStackConfig) -> Self {
    let capacity = config.initial_capacity();
    Self { items: Vec::with_capacity(capacity), capacity, config, policy: config.resize_policy() }
  }

  /// Returns the configuration the stack was created with.
  #[must_use]
  pub const fn config(&self) -> &DynamicArrayStackConfig {
    &self.config
  }

  /// Returns the current capacity of the backing storage.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Pushes an element, doubling the storage first when the stack is two-thirds full.
  pub fn push(&mut self, item: T) {
    if let Some(target) = self.policy.grow_target(self.items.len(), self.capacity) {
      self.relocate(target);
    }
    self.items.push(item);
  }

  /// Removes and returns the top element, halving the storage first when the stack is at most
  /// half full.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements. Capacity is left
  /// untouched in that case.
  pub fn pop(&mut self) -> Result<T, StackError> {
    if self.items.is_empty() {
      return Err(StackError::Empty);
    }
    if let Some(target) = self.policy.shrink_target(self.items.len(), self.capacity) {
      self.relocate(target);
    }
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

  /// Drops every element and returns the storage to the initial capacity.
  pub fn clear(&mut self) {
    self.items = Vec::with_capacity(self.config.initial_capacity());
    self.capacity = self.config.initial_capacity();
  }

  /// Returns an iterator from the top element to the bottom one.
  #[must_use]
  pub fn iter(&self) -> ArrayStackIter<'_, T> {
    ArrayStackIter::new(&self.items)
  }

  fn relocate(&mut self, target: usize) {
    let mut items = Vec::with_capacity(target);
    items.append(&mut self.items);
    debug!(
      target: DYNAMIC_ARRAY_LOG_TARGET,
      from = self.capacity,
      to = target,
      len = items.len(),
      "resized dynamic array stack"
    );
    self.items = items;
    self.capacity = target;
  }
}

impl<T> Default for DynamicArrayStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Stack<T> for DynamicArrayStack<T> {
  type Iter<'a>
    = ArrayStackIter<'a, T>
  where
    T: 'a;

  fn push(&mut self, item: T) -> Result<(), StackError> {
    DynamicArrayStack::push(self, item);
    Ok(())
  }

  fn pop(&mut self) -> Result<T, StackError> {
    DynamicArrayStack::pop(self)
  }

  fn peek(&self) -> Option<&T> {
    DynamicArrayStack::peek(self)
  }

  fn len(&self) -> usize {
    DynamicArrayStack::len(self)
  }

  fn clear(&mut self) {
    DynamicArrayStack::clear(self);
  }

  fn iter(&self) -> Self::Iter<'_> {
    DynamicArrayStack::iter(self)
  }
}

impl<T> Extend<T> for DynamicArrayStack<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for item in iter {
      self.push(item);
    }
  }
}

impl<T> FromIterator<T> for DynamicArrayStack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut stack = Self::new();
    stack.extend(iter);
    stack
  }
}

impl<'a, T> IntoIterator for &'a DynamicArrayStack<T> {
  type IntoIter = ArrayStackIter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
