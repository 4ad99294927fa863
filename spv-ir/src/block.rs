//! Blocks - a label followed by straight-line code ending in a terminator
//!
//! A block keeps its CFG edges as plain handles. Edges are recorded exactly
//! as the builder adds them: adding a successor here does not add the
//! matching predecessor on the other block.

use crate::instruction::Instruction;
use crate::module::Module;
use crate::refs::{BlockRef, FunctionRef, InstrRef};
use log::debug;
use spv_common::{Id, Op, Word};

/// Basic block
#[derive(Debug, Clone)]
pub struct Block {
    handle: BlockRef,
    parent: FunctionRef,
    id: Id,
    /// First entry is always the label
    instructions: Vec<InstrRef>,
    predecessors: Vec<BlockRef>,
    successors: Vec<BlockRef>,
    /// Function-scope variables, written right after the label
    local_variables: Vec<InstrRef>,
    /// Known unreachable; set at least for the extraneous blocks the builder introduces
    unreachable: bool,
}

impl Block {
    pub(crate) fn new(handle: BlockRef, id: Id, parent: FunctionRef, label: InstrRef) -> Self {
        Self {
            handle,
            parent,
            id,
            instructions: vec![label],
            predecessors: Vec::new(),
            successors: Vec::new(),
            local_variables: Vec::new(),
            unreachable: false,
        }
    }

    /// Result id of the block's label
    pub fn id(&self) -> Id {
        self.id
    }

    pub fn handle(&self) -> BlockRef {
        self.handle
    }

    pub fn parent(&self) -> FunctionRef {
        self.parent
    }

    /// Body instructions, label first. Local variables are not included.
    pub fn instructions(&self) -> &[InstrRef] {
        &self.instructions
    }

    pub fn local_variables(&self) -> &[InstrRef] {
        &self.local_variables
    }

    pub fn num_instructions(&self) -> usize {
        self.instructions.len()
    }

    pub fn add_predecessor(&mut self, pred: BlockRef) {
        self.predecessors.push(pred);
    }

    pub fn add_successor(&mut self, succ: BlockRef) {
        self.successors.push(succ);
    }

    pub fn predecessors(&self) -> &[BlockRef] {
        &self.predecessors
    }

    pub fn successors(&self) -> &[BlockRef] {
        &self.successors
    }

    pub fn num_predecessors(&self) -> usize {
        self.predecessors.len()
    }

    pub fn num_successors(&self) -> usize {
        self.successors.len()
    }

    pub fn successor(&self, index: usize) -> BlockRef {
        self.successors[index]
    }

    pub fn has_predecessor(&self, pred: BlockRef) -> bool {
        self.predecessors.contains(&pred)
    }

    /// True if `other` lists this block among its predecessors
    pub fn is_predecessor_of(&self, other: &Block) -> bool {
        other.has_predecessor(self.handle)
    }

    pub fn set_unreachable(&mut self) {
        self.unreachable = true;
    }

    pub fn is_unreachable(&self) -> bool {
        self.unreachable
    }

    /// True if the last instruction transfers control out of the block.
    pub fn is_terminated(&self, module: &Module) -> bool {
        self.last_opcode(module).is_terminator()
    }

    /// Label plus at most one instruction in a block marked unreachable.
    /// Such blocks are left out of the binary.
    pub fn is_degenerate(&self) -> bool {
        self.unreachable && self.instructions.len() <= 2
    }

    pub(crate) fn push(&mut self, inst: InstrRef) {
        self.instructions.push(inst);
    }

    pub(crate) fn insert(&mut self, index: usize, inst: InstrRef) {
        self.instructions.insert(index, inst);
    }

    pub(crate) fn push_local_variable(&mut self, inst: InstrRef) {
        self.local_variables.push(inst);
    }

    fn last_opcode(&self, module: &Module) -> Op {
        let last = self
            .instructions
            .last()
            .unwrap_or_else(|| panic!("block %{} has no instructions", self.id));
        module.instr(*last).opcode()
    }

    /// Position a new instruction must take so that it lands in front of the
    /// terminator and any merge instruction paired with it.
    pub(crate) fn terminal_insert_index(&self, module: &Module) -> usize {
        let len = self.instructions.len();
        match self.last_opcode(module) {
            // The merge instruction sits right before these. Never step
            // in front of the label.
            Op::BranchConditional | Op::Switch => len.saturating_sub(2).max(1),
            Op::Branch => {
                if len > 1 && module.instr(self.instructions[len - 2]).opcode() == Op::LoopMerge {
                    len - 2
                } else {
                    len - 1
                }
            }
            Op::Kill | Op::Return | Op::ReturnValue => len - 1,
            _ => len,
        }
    }

    /// Instructions in binary order: label, local variables, then the rest
    /// of the body. Empty for a block that is left out of the binary.
    pub fn emitted<'m>(&self, module: &'m Module) -> Vec<&'m Instruction> {
        if module.options().elide_degenerate_unreachable && self.is_degenerate() {
            debug!("Skipping degenerate unreachable block %{}", self.id);
            return Vec::new();
        }

        let (label, body) = self
            .instructions
            .split_first()
            .unwrap_or_else(|| panic!("block %{} has no label", self.id));
        std::iter::once(label)
            .chain(&self.local_variables)
            .chain(body)
            .map(|inst| module.instr(*inst))
            .collect()
    }

    /// Append the binary form to `out`.
    pub fn encode(&self, module: &Module, out: &mut Vec<Word>) {
        for inst in self.emitted(module) {
            inst.encode(out);
        }
    }
}
