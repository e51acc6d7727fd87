use core::{
  iter::{FusedIterator, Rev},
  slice::Iter,
};

use super::StackError;


/// Top-to-bottom iterator over an array-backed stack.
///
/// Covers the elements that were occupied when the iterator was created.
#[derive(Debug)]
pub struct ArrayStackIter<'a, T> {
  inner: Rev<Iter<'a, T>>,
}

impl<'a, T> ArrayStackIter<'a, T> {
  /// Creates an iterator over `items`, where the last element is the top of the stack.
  pub(crate) fn new(items: &'a [T]) -> Self {
    Self { inner: items.iter().rev() }
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

impl<T> Clone for ArrayStackIter<'_, T> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<'a, T> Iterator for ArrayStackIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<T> ExactSizeIterator for ArrayStackIter<'_, T> {}

impl<T> FusedIterator for ArrayStackIter<'_, T> {}
