//! Per-frame execution state.
mod memory;
mod stack;

pub use memory::Memory;
pub use stack::{Stack, STACK_LIMIT};

use primitives::{Bytes, SpecId};

/// Outcome of an execution frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStatus {
    /// Execution finished, or is still running, without failure.
    #[default]
    Success,
    /// Execution reverted.
    Revert,
    /// Gas ran out mid-execution.
    OutOfGas,
    /// A push would have exceeded the stack limit.
    StackOverflow,
    /// A pop was attempted on an empty stack.
    StackUnderflow,
}

/// State mutated by the instruction loop over one call frame.
///
/// Each frame owns its stack and memory region outright; nothing is
/// shared between frames. `code` is the executable region of a
/// container, owned, not borrowed from the caller.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionState {
    /// Gas remaining for this frame.
    pub gas_left: i64,
    /// Word stack.
    pub stack: Stack,
    /// Linear memory owned by this frame.
    pub memory: Memory,
    /// Return data of the most recent nested call.
    pub return_data: Bytes,
    /// Code being executed.
    pub code: Bytes,
    /// Current outcome.
    pub status: ExecutionStatus,
    /// Offset of the output slice within memory.
    pub output_offset: usize,
    /// Length of the output slice.
    pub output_size: usize,
    /// Active chain revision.
    pub spec_id: SpecId,
}

impl ExecutionState {
    /// Creates a fresh frame for `code` with `gas` available.
    pub fn new(code: Bytes, gas: i64, spec_id: SpecId) -> Self {
        Self {
            gas_left: gas,
            code,
            spec_id,
            ..Self::default()
        }
    }

    /// Clears the frame so it can be reused for another call.
    pub fn reset(&mut self, code: Bytes, gas: i64, spec_id: SpecId) {
        self.gas_left = gas;
        self.stack.clear();
        self.memory.clear();
        self.return_data = Bytes::new();
        self.code = code;
        self.status = ExecutionStatus::Success;
        self.output_offset = 0;
        self.output_size = 0;
        self.spec_id = spec_id;
    }
}
