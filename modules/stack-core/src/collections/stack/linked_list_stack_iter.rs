use core::iter::FusedIterator;

use super::{StackError, stack_node::StackNode};


/// Top-to-bottom iterator over a [`LinkedListStack`](super::LinkedListStack).
#[derive(Debug)]
pub struct LinkedListStackIter<'a, T> {
  next:      Option<&'a StackNode<T>>,
  remaining: usize,
}

impl<'a, T> LinkedListStackIter<'a, T> {
  pub(crate) const fn new(head: Option<&'a StackNode<T>>, len: usize) -> Self {
    Self { next: head, remaining: len }
  }

  /// Advances to the next element below the current position.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] once the bottom of the stack has been passed.
  pub fn advance(&mut self) -> Result<&'a T, StackError> {
    self.next().ok_or(StackError::Empty)
  }
}

impl<T> Clone for LinkedListStackIter<'_, T> {
  fn clone(&self) -> Self {
    Self { next: self.next, remaining: self.remaining }
  }
}

impl<'a, T> Iterator for LinkedListStackIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.next?;
    self.next = node.below.as_deref();
    self.remaining = self.remaining.saturating_sub(1);
    Some(&node.value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for LinkedListStackIter<'_, T> {}

impl<T> FusedIterator for LinkedListStackIter<'_, T> {}
