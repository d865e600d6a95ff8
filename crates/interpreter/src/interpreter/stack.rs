use core::fmt;
use primitives::U256;
use std::vec::Vec;

/// Interpreter stack limit in words.
pub const STACK_LIMIT: usize = 1024;

/// Word stack with a fixed [`STACK_LIMIT`] capacity.
#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stack {
    /// The underlying data of the stack.
    data: Vec<U256>,
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str("]")
    }
}

impl Default for Stack {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Stack {
    fn clone(&self) -> Self {
        // Rebuild through `new` so the clone keeps the full reserved
        // capacity.
        let mut cloned = Self::new();
        cloned.data.extend_from_slice(&self.data);
        cloned
    }
}

impl Stack {
    /// Creates an empty stack with the whole capacity reserved up front.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(STACK_LIMIT),
        }
    }

    /// Number of words on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` when the stack holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the stack contents, bottom first.
    #[inline]
    pub fn data(&self) -> &[U256] {
        &self.data
    }

    /// Pushes a word, returning `false` when the stack is full.
    #[inline]
    #[must_use]
    pub fn push(&mut self, value: U256) -> bool {
        if self.data.len() == STACK_LIMIT {
            return false;
        }
        self.data.push(value);
        true
    }

    /// Pops the top word.
    #[inline]
    pub fn pop(&mut self) -> Option<U256> {
        self.data.pop()
    }

    /// Returns a reference to the top word.
    #[inline]
    pub fn top(&self) -> Option<&U256> {
        self.data.last()
    }

    /// Returns the word at `index`, counted from the top.
    #[inline]
    pub fn peek(&self, index: usize) -> Option<&U256> {
        self.data.get(self.data.len().checked_sub(index + 1)?)
    }

    /// Empties the stack.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Stack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct StackSerde {
            data: Vec<U256>,
        }

        let mut stack = StackSerde::deserialize(deserializer)?;
        if stack.data.len() > STACK_LIMIT {
            return Err(serde::de::Error::custom(std::format!(
                "stack size exceeds limit: {} > {}",
                stack.data.len(),
                STACK_LIMIT
            )));
        }
        stack.data.reserve(STACK_LIMIT - stack.data.len());
        Ok(Self { data: stack.data })
    }
}
