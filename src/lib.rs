#![deny(missing_docs)]
#![no_std]

//! Facade over `lifo-stack-core-rs`.
//!
//! Re-exports the stack contract and its fixed-capacity, dynamic-array, and linked-list
//! backends under one crate name.

pub use lifo_stack_core_rs::collections::stack::{
  ArrayStackIter, DYNAMIC_ARRAY_LOG_TARGET, DynamicArrayStack, DynamicArrayStackConfig, FixedCapacityStack,
  LinkedListStack, LinkedListStackIter, ResizePolicy, Stack, StackError,
};


/// Returns the version of this crate as recorded by Cargo.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
