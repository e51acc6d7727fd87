use super::StackError;

/// Last-in-first-out container contract shared by every storage backend.
///
/// Implementations own their elements exclusively and perform no internal synchronization.
pub trait Stack<T> {
  /// Iterator yielding elements from the top of the stack to the bottom.
  type Iter<'a>: Iterator<Item = &'a T>
  where
    Self: 'a,
    T: 'a;

  /// Pushes an element onto the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::CapacityExceeded`] when a bounded backend is already full. The
  /// rejected element is dropped.
  fn push(&mut self, item: T) -> Result<(), StackError>;

  /// Removes and returns the most recently pushed element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements. The stack is left
  /// unchanged in that case.
  fn pop(&mut self) -> Result<T, StackError>;

  /// Returns a reference to the top element without removing it.
  #[must_use]
  fn peek(&self) -> Option<&T>;

  /// Returns the number of stored elements.
  #[must_use]
  fn len(&self) -> usize;

  /// Indicates whether the stack is empty.
  #[must_use]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Drops every stored element.
  fn clear(&mut self);

  /// Returns an iterator over the elements from top to bottom.
  ///
  /// The iterator borrows the stack, so the stack cannot be mutated while it is alive.
  fn iter(&self) -> Self::Iter<'_>;
}
