//! Shared primitive types for the evmof crates.
//!
//! Mostly re-exports from [`alloy_primitives`], plus the hardfork
//! enumeration that gates which bytecode formats a chain revision
//! recognizes.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod hardfork;

pub use alloy_primitives;
pub use alloy_primitives::{b256, bytes, hex, Bytes, B256, U256};
pub use hardfork::SpecId;
