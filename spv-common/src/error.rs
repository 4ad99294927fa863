//! Error handling for the SPIR-V IR
//! 
//! Structural preconditions inside the IR (looking up an unmapped id,
//! inserting into an empty block, ...) are builder bugs and panic. The
//! variants here cover the few operations that can legitimately fail:
//! decoding words back into opcodes or text, and verifying a finished module.

use crate::types::Id;
use thiserror::Error;

/// Errors reported by the fallible IR helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IrError {
    #[error("Unknown opcode {0}")]
    UnknownOpcode(u16),

    #[error("Packed string has no null terminator")]
    MissingTerminator,

    #[error("Packed string is not valid UTF-8")]
    InvalidUtf8,

    #[error("Block %{block} contains a second OpLabel")]
    StrayLabel { block: Id },

    #[error("Block %{block} has instructions after its terminator")]
    InstructionAfterTerminator { block: Id },

    #[error("Block %{block} has a merge instruction that does not directly precede its terminator")]
    MisplacedMerge { block: Id },

    #[error("Block %{block} in function %{function} is not terminated")]
    UnterminatedBlock { function: Id, block: Id },

    #[error("Function %{function} has no blocks")]
    EmptyFunction { function: Id },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = IrError::UnterminatedBlock { function: 4, block: 9 };
        assert_eq!(err.to_string(), "Block %9 in function %4 is not terminated");

        assert_eq!(IrError::UnknownOpcode(999).to_string(), "Unknown opcode 999");
        assert_eq!(
            IrError::MisplacedMerge { block: 12 }.to_string(),
            "Block %12 has a merge instruction that does not directly precede its terminator"
        );
    }
}
