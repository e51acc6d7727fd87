#[cfg(test)]
mod tests;

/// Ratio-based growth and shrink rules for a dynamic array.
///
/// Growth is checked before an insertion and triggers once `len * 3 / 2 >= capacity`, doubling
/// the capacity. Shrinking is checked before a removal, using the length prior to the removal,
/// and triggers once `len <= capacity / 2`, halving the capacity. The gap between the two
/// thresholds keeps a push/pop sequence at the boundary from resizing on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizePolicy {
  min_capacity: usize,
}

impl ResizePolicy {
  /// Creates a policy that never shrinks below `min_capacity`.
  ///
  /// # Panics
  ///
  /// Panics if `min_capacity` is zero.
  #[must_use]
  pub const fn new(min_capacity: usize) -> Self {
    assert!(min_capacity > 0, "min_capacity must be positive");
    Self { min_capacity }
  }

  /// Returns the shrink floor.
  #[must_use]
  pub const fn min_capacity(self) -> usize {
    self.min_capacity
  }

  /// Returns the capacity to grow to before inserting into a stack holding `len` elements, or
  /// `None` when the current capacity is kept.
  #[must_use]
  pub const fn grow_target(self, len: usize, capacity: usize) -> Option<usize> {
    // `len + len / 2` equals `len * 3 / 2` without overflowing the intermediate product.
    if len.saturating_add(len / 2) >= capacity {
      Some(capacity.saturating_mul(2))
    } else {
      None
    }
  }

  /// Returns the capacity to shrink to before removing from a stack holding `len` elements, or
  /// `None` when the current capacity is kept.
  #[must_use]
  pub const fn shrink_target(self, len: usize, capacity: usize) -> Option<usize> {
    let half = capacity / 2;
    if len <= half && half >= self.min_capacity {
      Some(half)
    } else {
      None
    }
  }
}

impl Default for ResizePolicy {
  fn default() -> Self {
    Self::new(1)
  }
}
