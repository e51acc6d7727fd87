use super::ResizePolicy;

#[cfg(test)]
mod tests;

/// Configuration for [`DynamicArrayStack`](super::DynamicArrayStack).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DynamicArrayStackConfig {
  initial_capacity: usize,
  min_capacity:     usize,
}

impl DynamicArrayStackConfig {
  /// Capacity allocated by a freshly created stack.
  pub const DEFAULT_INITIAL_CAPACITY: usize = 20;
  /// Capacity below which the stack never shrinks.
  pub const DEFAULT_MIN_CAPACITY: usize = 1;

  /// Creates a configuration with explicit capacities.
  ///
  /// # Panics
  ///
  /// Panics if `min_capacity` is zero or if `initial_capacity` is smaller than
  /// `min_capacity`.
  #[must_use]
  pub const fn new(initial_capacity: usize, min_capacity: usize) -> Self {
    assert!(min_capacity > 0, "min_capacity must be positive");
    assert!(initial_capacity >= min_capacity, "initial_capacity must not be below min_capacity");
    Self { initial_capacity, min_capacity }
  }

  /// Returns a copy with a different initial capacity.
  ///
  /// # Panics
  ///
  /// Panics if `initial_capacity` is smaller than the configured minimum capacity.
  #[must_use]
  pub const fn with_initial_capacity(self, initial_capacity: usize) -> Self {
    Self::new(initial_capacity, self.min_capacity)
  }

  /// Returns a copy with a different shrink floor.
  ///
  /// # Panics
  ///
  /// Panics if `min_capacity` is zero or exceeds the configured initial capacity.
  #[must_use]
  pub const fn with_min_capacity(self, min_capacity: usize) -> Self {
    Self::new(self.initial_capacity, min_capacity)
  }

  /// Returns the capacity allocated on creation and after [`clear`](super::DynamicArrayStack::clear).
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }

  /// Returns the shrink floor.
  #[must_use]
  pub const fn min_capacity(&self) -> usize {
    self.min_capacity
  }

  /// Builds the resize policy described by this configuration.
  #[must_use]
  pub const fn resize_policy(&self) -> ResizePolicy {
    ResizePolicy::new(self.min_capacity)
  }
}

impl Default for DynamicArrayStackConfig {
  fn default() -> Self {
    Self::new(Self::DEFAULT_INITIAL_CAPACITY, Self::DEFAULT_MIN_CAPACITY)
  }
}
