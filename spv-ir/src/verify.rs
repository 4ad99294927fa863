//! Structural checks on a finished module
//! 
//! Encoding never checks anything; a builder that wants to catch its own
//! mistakes before writing the binary calls [`Module::verify`].

use crate::block::Block;
use crate::module::Module;
use spv_common::{Id, IrError, Op};

impl Module {
    /// Check that every function has blocks and every emitted block is a
    /// label, straight-line code, and a single terminator at the end, with
    /// any merge instruction directly in front of that terminator.
    pub fn verify(&self) -> Result<(), IrError> {
        for function in self.functions() {
            if function.blocks().is_empty() {
                return Err(IrError::EmptyFunction { function: function.id() });
            }

            for block in function.blocks() {
                let block = self.block(*block);
                if self.options().elide_degenerate_unreachable && block.is_degenerate() {
                    continue;
                }
                self.verify_block(function.id(), block)?;
            }
        }
        Ok(())
    }

    fn verify_block(&self, function: Id, block: &Block) -> Result<(), IrError> {
        let body = &block.instructions()[1..];

        if body.iter().any(|inst| self.instr(*inst).opcode() == Op::Label) {
            return Err(IrError::StrayLabel { block: block.id() });
        }

        if let Some((_, init)) = body.split_last() {
            if init.iter().any(|inst| self.instr(*inst).opcode().is_terminator()) {
                return Err(IrError::InstructionAfterTerminator { block: block.id() });
            }
        }

        // A merge instruction is only meaningful directly before the branch it annotates.
        let merge_slot = body.len().checked_sub(2);
        for (index, inst) in body.iter().enumerate() {
            if self.instr(*inst).opcode().is_merge() && Some(index) != merge_slot {
                return Err(IrError::MisplacedMerge { block: block.id() });
            }
        }

        if !block.is_terminated(self) {
            return Err(IrError::UnterminatedBlock {
                function,
                block: block.id(),
            });
        }
        Ok(())
    }
}
