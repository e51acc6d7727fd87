use alloc::boxed::Box;

/// Link to the next node down the chain.
pub(crate) type NodeLink<T> = Option<Box<StackNode<T>>>;

/// Node of a linked-list stack owning one element and the rest of the chain below it.
#[derive(Debug)]
pub(crate) struct StackNode<T> {
  pub(crate) value: T,
  pub(crate) below: NodeLink<T>,
}

impl<T> StackNode<T> {
  pub(crate) const fn new(value: T, below: NodeLink<T>) -> Self {
    Self { value, below }
  }
}
