use super::DynamicArrayStackConfig;

#[test]
fn default_config_starts_at_twenty() {
  let config = DynamicArrayStackConfig::default();
  assert_eq!(config.initial_capacity(), 20);
  assert_eq!(config.min_capacity(), 1);
}

#[test]
fn new_accepts_explicit_capacities() {
  let config = DynamicArrayStackConfig::new(64, 8);
  assert_eq!(config.initial_capacity(), 64);
  assert_eq!(config.min_capacity(), 8);
}

#[test]
fn builders_replace_single_fields() {
  let config = DynamicArrayStackConfig::default().with_initial_capacity(32).with_min_capacity(4);
  assert_eq!(config, DynamicArrayStackConfig::new(32, 4));
}

#[test]
fn resize_policy_carries_the_floor() {
  let config = DynamicArrayStackConfig::new(16, 4);
  assert_eq!(config.resize_policy().min_capacity(), 4);
}

#[test]
#[should_panic(expected = "min_capacity must be positive")]
fn new_panics_on_zero_floor() {
  let _ = DynamicArrayStackConfig::new(20, 0);
}

#[test]
#[should_panic(expected = "initial_capacity must not be below min_capacity")]
fn new_panics_when_initial_is_below_floor() {
  let _ = DynamicArrayStackConfig::new(2, 4);
}

#[test]
#[should_panic(expected = "initial_capacity must not be below min_capacity")]
fn with_min_capacity_panics_above_initial() {
  let _ = DynamicArrayStackConfig::default().with_min_capacity(21);
}
