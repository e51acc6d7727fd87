
/// Errors returned by stack operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
  /// The stack, or the traversal over it, has no further elements.
  #[error("stack is empty")]
  Empty,
  /// A bounded stack already holds as many elements as it can store.
  #[error("stack capacity of {capacity} exceeded")]
  CapacityExceeded {
    /// Capacity the stack was created with.
    capacity: usize,
  },
}
