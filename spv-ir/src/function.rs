//! Functions
//!
//! A function owns its `OpFunction` instruction, one `OpFunctionParameter`
//! per parameter of its function type, and an ordered list of blocks. The
//! first block is the entry block and collects all function-scope variables.

use crate::instruction::Instruction;
use crate::module::Module;
use crate::refs::{BlockRef, FunctionRef, InstrRef};
use spv_common::{Id, Op, Word};

/// Closes every function in the binary
static FUNCTION_END: Instruction = Instruction::from_opcode(Op::FunctionEnd);

/// Function in IR
#[derive(Debug, Clone)]
pub struct Function {
    handle: FunctionRef,
    id: Id,
    return_type: Id,
    function_type: Id,
    function_instruction: InstrRef,
    parameters: Vec<InstrRef>,
    blocks: Vec<BlockRef>,
}

impl Function {
    pub(crate) fn new(
        handle: FunctionRef,
        id: Id,
        return_type: Id,
        function_type: Id,
        function_instruction: InstrRef,
    ) -> Self {
        Self {
            handle,
            id,
            return_type,
            function_type,
            function_instruction,
            parameters: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn handle(&self) -> FunctionRef {
        self.handle
    }

    pub fn return_type(&self) -> Id {
        self.return_type
    }

    pub fn function_type(&self) -> Id {
        self.function_type
    }

    pub fn function_instruction(&self) -> InstrRef {
        self.function_instruction
    }

    pub fn parameters(&self) -> &[InstrRef] {
        &self.parameters
    }

    pub fn num_params(&self) -> usize {
        self.parameters.len()
    }

    /// Result id of parameter `p`
    pub fn param_id(&self, module: &Module, p: usize) -> Id {
        module.instr(self.parameters[p]).result_id()
    }

    pub fn blocks(&self) -> &[BlockRef] {
        &self.blocks
    }

    pub fn entry_block(&self) -> Option<BlockRef> {
        self.blocks.first().copied()
    }

    pub fn last_block(&self) -> Option<BlockRef> {
        self.blocks.last().copied()
    }

    pub(crate) fn push_parameter(&mut self, param: InstrRef) {
        self.parameters.push(param);
    }

    pub(crate) fn push_block(&mut self, block: BlockRef) {
        self.blocks.push(block);
    }

    pub(crate) fn pop_block(&mut self) -> Option<BlockRef> {
        self.blocks.pop()
    }

    /// `OpFunction`, the parameters, every emitted block and `OpFunctionEnd`,
    /// in binary order
    pub fn emitted<'m>(&self, module: &'m Module) -> Vec<&'m Instruction> {
        let mut insts = vec![module.instr(self.function_instruction)];
        insts.extend(self.parameters.iter().map(|param| module.instr(*param)));
        for block in &self.blocks {
            insts.extend(module.block(*block).emitted(module));
        }
        insts.push(&FUNCTION_END);
        insts
    }

    /// Append `OpFunction`, the parameters, every block and `OpFunctionEnd` to `out`.
    pub fn encode(&self, module: &Module, out: &mut Vec<Word>) {
        for inst in self.emitted(module) {
            inst.encode(out);
        }
    }
}
