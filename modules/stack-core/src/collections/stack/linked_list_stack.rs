use alloc::boxed::Box;

use super::{
  LinkedListStackIter, Stack, StackError,
  stack_node::{NodeLink, StackNode},
};


/// Unbounded stack backed by a singly linked chain whose head is the top element.
///
/// Push and pop allocate or free exactly one node and run in O(1).
pub struct LinkedListStack<T> {
  head: NodeLink<T>,
  len:  usize,
}

impl<T> LinkedListStack<T> {
  /// Creates an empty stack.
  #[must_use]
  pub const fn new() -> Self {
    Self { head: None, len: 0 }
  }

  /// Pushes an element as the new head of the chain.
  pub fn push(&mut self, item: T) {
    let below = self.head.take();
    self.head = Some(Box::new(StackNode::new(item, below)));
    self.len += 1;
  }

  /// Unlinks the head of the chain and returns its element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the chain has no nodes.
  pub fn pop(&mut self) -> Result<T, StackError> {
    let node = self.head.take().ok_or(StackError::Empty)?;
    let StackNode { value, below } = *node;
    self.head = below;
    self.len -= 1;
    Ok(value)
  }

  /// Returns a reference to the top element.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.head.as_deref().map(|node| &node.value)
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// Drops every node.
  pub fn clear(&mut self) {
    // Unlink node by node so long chains do not recurse in `Box` drop glue.
    let mut link = self.head.take();
    while let Some(mut node) = link {
      link = node.below.take();
    }
    self.len = 0;
  }

  /// Returns an iterator from the top element to the bottom one.
  #[must_use]
  pub fn iter(&self) -> LinkedListStackIter<'_, T> {
    LinkedListStackIter::new(self.head.as_deref(), self.len)
  }
}

impl<T> Default for LinkedListStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Drop for LinkedListStack<T> {
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T: core::fmt::Debug> core::fmt::Debug for LinkedListStack<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T> Stack<T> for LinkedListStack<T> {
  type Iter<'a>
    = LinkedListStackIter<'a, T>
  where
    T: 'a;

  fn push(&mut self, item: T) -> Result<(), StackError> {
    LinkedListStack::push(self, item);
    Ok(())
  }

  fn pop(&mut self) -> Result<T, StackError> {
    LinkedListStack::pop(self)
  }

  fn peek(&self) -> Option<&T> {
    LinkedListStack::peek(self)
  }

  fn len(&self) -> usize {
    LinkedListStack::len(self)
  }

  fn clear(&mut self) {
    LinkedListStack::clear(self);
  }

  fn iter(&self) -> Self::Iter<'_> {
    LinkedListStack::iter(self)
  }
}

impl<T> Extend<T> for LinkedListStack<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for item in iter {
      self.push(item);
    }
  }
}

impl<T> FromIterator<T> for LinkedListStack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut stack = Self::new();
    stack.extend(iter);
    stack
  }
}

impl<'a, T> IntoIterator for &'a LinkedListStack<T> {
  type IntoIter = LinkedListStackIter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
