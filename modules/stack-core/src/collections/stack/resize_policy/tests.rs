use super::ResizePolicy;

#[test]
fn grows_once_len_reaches_two_thirds_of_capacity() {
  let policy = ResizePolicy::default();
  assert_eq!(policy.grow_target(13, 20), None);
  assert_eq!(policy.grow_target(14, 20), Some(40));
}

#[test]
fn growth_threshold_uses_integer_division() {
  let policy = ResizePolicy::default();
  // 1 * 3 / 2 == 1
  assert_eq!(policy.grow_target(1, 2), None);
  assert_eq!(policy.grow_target(1, 1), Some(2));
  // 3 * 3 / 2 == 4
  assert_eq!(policy.grow_target(3, 5), None);
  assert_eq!(policy.grow_target(3, 4), Some(8));
}

#[test]
fn empty_stack_does_not_grow() {
  let policy = ResizePolicy::default();
  assert_eq!(policy.grow_target(0, 1), None);
  assert_eq!(policy.grow_target(0, 20), None);
}

#[test]
fn shrinks_once_len_falls_to_half_of_capacity() {
  let policy = ResizePolicy::default();
  assert_eq!(policy.shrink_target(21, 40), None);
  assert_eq!(policy.shrink_target(20, 40), Some(20));
  assert_eq!(policy.shrink_target(15, 40), Some(20));
}

#[test]
fn shrink_threshold_uses_integer_division() {
  let policy = ResizePolicy::default();
  // 5 / 2 == 2
  assert_eq!(policy.shrink_target(3, 5), None);
  assert_eq!(policy.shrink_target(2, 5), Some(2));
}

#[test]
fn never_shrinks_below_the_floor() {
  let policy = ResizePolicy::new(8);
  assert_eq!(policy.shrink_target(4, 16), Some(8));
  assert_eq!(policy.shrink_target(2, 8), None);
  assert_eq!(ResizePolicy::default().shrink_target(1, 1), None);
}

#[test]
fn shrinking_keeps_room_for_all_elements() {
  let policy = ResizePolicy::default();
  for capacity in 1..64 {
    for len in 1..=capacity {
      if let Some(target) = policy.shrink_target(len, capacity) {
        assert!(target >= len, "len {len} does not fit into {target}");
        assert!(target >= policy.min_capacity());
      }
    }
  }
}

#[test]
fn growing_always_leaves_a_free_slot() {
  let policy = ResizePolicy::default();
  for capacity in 1..64 {
    for len in 0..=capacity {
      let effective = policy.grow_target(len, capacity).unwrap_or(capacity);
      assert!(len < effective, "no free slot for len {len} at capacity {capacity}");
    }
  }
}

#[test]
fn grow_target_saturates_instead_of_overflowing() {
  let policy = ResizePolicy::default();
  assert_eq!(policy.grow_target(usize::MAX, usize::MAX), Some(usize::MAX));
}

#[test]
fn growth_threshold_is_exact_near_the_top_of_usize() {
  let policy = ResizePolicy::default();
  let len = usize::MAX / 2 + 1;
  let threshold = len + len / 2;
  assert_eq!(policy.grow_target(len, threshold), Some(usize::MAX));
  assert_eq!(policy.grow_target(len, threshold + 1), None);
  assert_eq!(policy.grow_target(len - 1, threshold), None);
}

#[test]
fn full_stack_with_huge_capacity_still_grows() {
  let policy = ResizePolicy::default();
  let capacity = usize::MAX / 2 + 1;
  assert_eq!(policy.grow_target(capacity, capacity), Some(usize::MAX));
  assert_eq!(policy.grow_target(usize::MAX / 3 + 1, usize::MAX / 2), Some(usize::MAX - 1));
}

#[test]
#[should_panic(expected = "min_capacity must be positive")]
fn new_panics_on_zero_floor() {
  let _ = ResizePolicy::new(0);
}
