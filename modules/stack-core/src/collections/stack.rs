//! Stack contract with fixed-capacity, dynamic-array, and linked-list backends.

mod array_stack_iter;
mod dynamic_array_stack;
mod dynamic_array_stack_config;
mod fixed_capacity_stack;
mod linked_list_stack;
mod linked_list_stack_iter;
mod resize_policy;
mod stack_contract;
mod stack_error;
mod stack_node;

pub use array_stack_iter::ArrayStackIter;
pub use dynamic_array_stack::{DYNAMIC_ARRAY_LOG_TARGET, DynamicArrayStack};
pub use dynamic_array_stack_config::DynamicArrayStackConfig;
pub use fixed_capacity_stack::FixedCapacityStack;
pub use linked_list_stack::LinkedListStack;
pub use linked_list_stack_iter::LinkedListStackIter;
pub use resize_policy::ResizePolicy;
pub use stack_contract::Stack;
pub use stack_error::StackError;
