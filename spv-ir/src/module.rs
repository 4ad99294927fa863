//! IR Module - the root of the hierarchy
//!
//! The module owns every function, block and instruction of a compilation
//! unit, plus the table mapping result ids to their defining instruction.
//! All mutation that has to keep that table in sync goes through here.

use crate::block::Block;
use crate::function::Function;
use crate::id_table::IdTable;
use crate::instruction::Instruction;
use crate::refs::{BlockRef, FunctionRef, InstrRef};
use log::{debug, trace};
use spv_common::{FunctionControl, Id, Op, StorageClass, Word, NO_TYPE};

/// Options for building and encoding a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleOptions {
    /// Extra id table slots allocated past an overflowing id
    pub id_table_chunk: usize,
    /// Leave unreachable blocks holding at most one instruction after the
    /// label out of the binary
    pub elide_degenerate_unreachable: bool,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            id_table_chunk: 16,
            elide_degenerate_unreachable: true,
        }
    }
}

/// IR Module - represents a complete compilation unit
#[derive(Debug, Clone)]
pub struct Module {
    functions: Vec<Function>,
    blocks: Vec<Block>,
    instructions: Vec<Instruction>,
    id_table: IdTable,
    options: ModuleOptions,
}

impl Module {
    pub fn new() -> Self {
        Self::with_options(ModuleOptions::default())
    }

    pub fn with_options(options: ModuleOptions) -> Self {
        Self {
            functions: Vec::new(),
            blocks: Vec::new(),
            instructions: Vec::new(),
            id_table: IdTable::new(options.id_table_chunk),
            options,
        }
    }

    pub fn options(&self) -> &ModuleOptions {
        &self.options
    }

    fn store(&mut self, inst: Instruction) -> InstrRef {
        let handle = InstrRef(self.instructions.len() as u32);
        self.instructions.push(inst);
        handle
    }

    fn store_and_map(&mut self, inst: Instruction) -> InstrRef {
        let id = inst.result_id();
        let has_result = inst.has_result();
        let handle = self.store(inst);
        if has_result {
            self.id_table.map(id, handle);
        }
        handle
    }

    /// Take ownership of an instruction that lives outside any block (types,
    /// constants, globals, ...) and register its result id.
    ///
    /// Panics if the instruction has no result id or its id is already mapped.
    pub fn map_instruction(&mut self, inst: Instruction) -> InstrRef {
        assert!(
            inst.has_result(),
            "{} has no result id to map",
            inst.opcode()
        );
        self.store_and_map(inst)
    }

    pub(crate) fn add_function(&mut self, function: Function) -> FunctionRef {
        let handle = function.handle();
        debug_assert_eq!(handle.index(), self.functions.len());
        self.functions.push(function);
        handle
    }

    /// Create a function and append it to the module.
    ///
    /// Builds the `OpFunction` instruction and one `OpFunctionParameter` per
    /// parameter type of `function_type`, with ids counting up from
    /// `first_param`. `function_type` must already be mapped to an
    /// `OpTypeFunction` whose operands are the return type followed by the
    /// parameter types.
    pub fn new_function(
        &mut self,
        id: Id,
        return_type: Id,
        function_type: Id,
        first_param: Id,
    ) -> FunctionRef {
        self.new_function_with_control(id, return_type, function_type, first_param, FunctionControl::NONE)
    }

    /// [`Module::new_function`] with an explicit function control mask, a
    /// combination of the [`FunctionControl`] bits.
    pub fn new_function_with_control(
        &mut self,
        id: Id,
        return_type: Id,
        function_type: Id,
        first_param: Id,
        control: Word,
    ) -> FunctionRef {
        let mut function_inst = Instruction::new(id, return_type, Op::Function);
        function_inst.add_immediate_operand(control);
        function_inst.add_id_operand(function_type);
        let function_instruction = self.store_and_map(function_inst);

        let handle = FunctionRef(self.functions.len() as u32);
        let function = Function::new(handle, id, return_type, function_type, function_instruction);
        self.add_function(function);

        let type_inst = self.instruction(function_type);
        assert_eq!(
            type_inst.opcode(),
            Op::TypeFunction,
            "function %{} declared with non-function type %{}",
            id,
            function_type
        );
        let param_types: Vec<Id> = (1..type_inst.num_operands())
            .map(|index| type_inst.id_operand(index))
            .collect();

        for (p, param_type) in param_types.into_iter().enumerate() {
            let param = Instruction::new(first_param + p as Id, param_type, Op::FunctionParameter);
            let param = self.store_and_map(param);
            self.functions[handle.index()].push_parameter(param);
        }

        debug!(
            "Created function %{} with {} parameters",
            id,
            self.functions[handle.index()].num_params()
        );
        handle
    }

    /// Create a block for `function` with its label.
    ///
    /// The block is not part of the function's block list until
    /// [`Module::add_block`] is called. The label is not entered in the id table.
    pub fn new_block(&mut self, id: Id, function: FunctionRef) -> BlockRef {
        assert!(
            function.index() < self.functions.len(),
            "unknown function {:?}",
            function
        );
        let label = self.store(Instruction::new(id, NO_TYPE, Op::Label));
        let handle = BlockRef(self.blocks.len() as u32);
        self.blocks.push(Block::new(handle, id, function, label));
        handle
    }

    /// Append `block` to the end of its function's block list.
    pub fn add_block(&mut self, function: FunctionRef, block: BlockRef) {
        let parent = self.block(block).parent();
        assert_eq!(
            parent, function,
            "{} belongs to {:?}, not {:?}",
            block, parent, function
        );
        self.functions[function.index()].push_block(block);
    }

    /// Remove the last block from the function's block list.
    pub fn pop_block(&mut self, function: FunctionRef) -> Option<BlockRef> {
        self.functions[function.index()].pop_block()
    }

    /// Append an instruction to the end of a block.
    pub fn add_instruction(&mut self, block: BlockRef, inst: Instruction) -> InstrRef {
        let handle = self.store_and_map(inst);
        self.blocks[block.index()].push(handle);
        handle
    }

    /// Insert an instruction directly after the block's label.
    pub fn add_instruction_at_front(&mut self, block: BlockRef, inst: Instruction) -> InstrRef {
        assert_ne!(inst.opcode(), Op::Label, "cannot insert a second label into a block");
        {
            let b = self.block(block);
            assert!(b.num_instructions() > 0, "block %{} has no instructions", b.id());
            assert_eq!(
                self.instr(b.instructions()[0]).opcode(),
                Op::Label,
                "block %{} does not start with a label",
                b.id()
            );
        }

        let handle = self.store_and_map(inst);
        self.blocks[block.index()].insert(1, handle);
        handle
    }

    /// Insert an instruction at the end of the block, but in front of its
    /// terminator and any merge instruction that has to stay attached to it.
    ///
    /// Ends in `OpBranchConditional` or `OpSwitch`: before the last two.
    /// Ends in `OpBranch` preceded by `OpLoopMerge`: before that pair.
    /// Ends in any other branch, `OpKill` or a return: before the last one.
    /// Not terminated: appended.
    pub fn insert_instruction_before_terminal(&mut self, block: BlockRef, inst: Instruction) -> InstrRef {
        let index = self.block(block).terminal_insert_index(self);
        trace!("Inserting {} into block %{} at {}", inst.opcode(), self.block(block).id(), index);

        let handle = self.store_and_map(inst);
        self.blocks[block.index()].insert(index, handle);
        handle
    }

    /// Add a function-scope variable. It is written at the top of the entry block.
    pub fn add_local_variable(&mut self, function: FunctionRef, inst: Instruction) -> InstrRef {
        let entry = self
            .function(function)
            .entry_block()
            .unwrap_or_else(|| panic!("function %{} has no entry block", self.function(function).id()));
        let handle = self.map_instruction(inst);
        self.blocks[entry.index()].push_local_variable(handle);
        handle
    }

    pub fn function(&self, function: FunctionRef) -> &Function {
        &self.functions[function.index()]
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn num_functions(&self) -> usize {
        self.functions.len()
    }

    pub fn block(&self, block: BlockRef) -> &Block {
        &self.blocks[block.index()]
    }

    /// Mutable access for CFG edges and reachability
    pub fn block_mut(&mut self, block: BlockRef) -> &mut Block {
        &mut self.blocks[block.index()]
    }

    pub fn instr(&self, inst: InstrRef) -> &Instruction {
        &self.instructions[inst.index()]
    }

    /// Mutable access for operand rewriting
    pub fn instr_mut(&mut self, inst: InstrRef) -> &mut Instruction {
        &mut self.instructions[inst.index()]
    }

    pub fn try_instruction(&self, id: Id) -> Option<&Instruction> {
        self.id_table.get(id).map(|handle| self.instr(handle))
    }

    /// Instruction defining `id`.
    ///
    /// Panics if `id` has not been mapped.
    pub fn instruction(&self, id: Id) -> &Instruction {
        self.try_instruction(id)
            .unwrap_or_else(|| panic!("id %{} is not mapped", id))
    }

    pub fn instruction_mut(&mut self, id: Id) -> &mut Instruction {
        let handle = self
            .id_table
            .get(id)
            .unwrap_or_else(|| panic!("id %{} is not mapped", id));
        self.instr_mut(handle)
    }

    pub fn is_mapped(&self, id: Id) -> bool {
        self.id_table.contains(id)
    }

    /// Type id of the instruction producing `result_id`
    pub fn type_id(&self, result_id: Id) -> Id {
        self.instruction(result_id).type_id()
    }

    /// Raw storage class operand of a pointer type
    pub fn storage_class_word(&self, type_id: Id) -> Word {
        self.instruction(type_id).immediate_operand(0)
    }

    /// Storage class of a pointer type, read from its first operand.
    ///
    /// `None` if the operand is a storage class [`StorageClass`] does not
    /// name; [`Module::storage_class_word`] still returns it.
    pub fn storage_class(&self, type_id: Id) -> Option<StorageClass> {
        StorageClass::from_u32(self.storage_class_word(type_id))
    }

    pub fn id_table(&self) -> &IdTable {
        &self.id_table
    }

    pub fn id_table_capacity(&self) -> usize {
        self.id_table.capacity()
    }

    /// Every function's instructions in binary order
    pub fn emitted(&self) -> Vec<&Instruction> {
        self.functions
            .iter()
            .flat_map(|function| function.emitted(self))
            .collect()
    }

    /// Append every function's binary form to `out`, in creation order.
    pub fn encode(&self, out: &mut Vec<Word>) {
        for function in &self.functions {
            function.encode(self, out);
        }
    }

    /// Binary form of every function
    pub fn to_words(&self) -> Vec<Word> {
        let mut out = Vec::new();
        self.encode(&mut out);
        out
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::new()
    }
}
