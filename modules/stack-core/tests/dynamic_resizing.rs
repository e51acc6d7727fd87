//! Resize timing of the dynamic-array stack observed through its public API.

use lifo_stack_core_rs::collections::stack::{DynamicArrayStack, DynamicArrayStackConfig};

fn capacities_while_pushing(stack: &mut DynamicArrayStack<usize>, count: usize) -> Vec<usize> {
  (0..count)
    .map(|i| {
      stack.push(i);
      stack.capacity()
    })
    .collect()
}

#[test]
fn first_growth_happens_on_the_fifteenth_push() {
  let mut stack = DynamicArrayStack::new();
  let capacities = capacities_while_pushing(&mut stack, 15);
  let first_growth = capacities.iter().position(|&capacity| capacity > 20).unwrap();
  assert_eq!(first_growth + 1, 15);
  assert_eq!(capacities[14], 40);
}

#[test]
fn capacity_doubles_at_each_two_thirds_crossing() {
  let mut stack = DynamicArrayStack::new();
  let capacities = capacities_while_pushing(&mut stack, 120);
  let mut transitions: Vec<(usize, usize)> = Vec::new();
  for (index, pair) in capacities.windows(2).enumerate() {
    if pair[0] != pair[1] {
      // element count at the moment the push that grew the storage began
      transitions.push((index + 1, pair[1]));
    }
  }
  assert_eq!(transitions, [(14, 40), (27, 80), (54, 160), (107, 320)]);
  assert_eq!(capacities[13], 20);
  assert_eq!(capacities[14], 40);
}

#[test]
fn draining_halves_capacity_at_each_half_crossing() {
  let mut stack = DynamicArrayStack::new();
  for i in 0..27 {
    stack.push(i);
  }
  assert_eq!(stack.capacity(), 40);

  let mut observed = Vec::new();
  while let Ok(value) = stack.pop() {
    observed.push((value, stack.capacity()));
  }

  // The pop that begins with 20 elements shrinks to 20, the one with 10 to 10, and so on.
  assert_eq!(observed.iter().find(|(value, _)| *value == 19), Some(&(19, 20)));
  assert_eq!(observed.iter().find(|(value, _)| *value == 20), Some(&(20, 40)));
  assert_eq!(observed.iter().find(|(value, _)| *value == 9), Some(&(9, 10)));
  assert_eq!(observed.iter().find(|(value, _)| *value == 4), Some(&(4, 5)));
  assert!(stack.capacity() >= 1);
}

#[test]
fn configured_initial_capacity_shifts_the_thresholds() {
  let mut stack = DynamicArrayStack::with_config(DynamicArrayStackConfig::new(8, 2));
  let capacities = capacities_while_pushing(&mut stack, 7);
  // 5 * 3 / 2 == 7 < 8, 6 * 3 / 2 == 9 >= 8
  assert_eq!(capacities, [8, 8, 8, 8, 8, 8, 16]);
}
