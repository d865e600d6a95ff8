//! Execution-state containers for an EVM interpreter.
//!
//! Data only: the word stack, the linear memory and the per-frame state
//! the instruction loop mutates. Opcode dispatch, gas metering and host
//! access live elsewhere.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod interpreter;

pub use interpreter::{ExecutionState, ExecutionStatus, Memory, Stack, STACK_LIMIT};
