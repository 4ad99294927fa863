mod block_tests;
mod encoding_tests;

use crate::{FunctionRef, Instruction, Module};
use spv_common::{Id, Op, StorageClass, NO_TYPE};

pub(crate) const VOID: Id = 1;
pub(crate) const FLOAT: Id = 2;
/// void(float, float)
pub(crate) const FN_TYPE: Id = 3;
/// Function-storage pointer to float
pub(crate) const FLOAT_PTR: Id = 4;
/// void()
pub(crate) const VOID_FN_TYPE: Id = 5;
pub(crate) const BOOL: Id = 6;

/// Module with the handful of types the tests build functions from
pub(crate) fn module_with_types() -> Module {
    let mut module = Module::new();

    module.map_instruction(Instruction::new(VOID, NO_TYPE, Op::TypeVoid));

    let mut float = Instruction::new(FLOAT, NO_TYPE, Op::TypeFloat);
    float.add_immediate_operand(32);
    module.map_instruction(float);

    let mut fn_type = Instruction::new(FN_TYPE, NO_TYPE, Op::TypeFunction);
    fn_type.add_id_operand(VOID);
    fn_type.add_id_operand(FLOAT);
    fn_type.add_id_operand(FLOAT);
    module.map_instruction(fn_type);

    let mut ptr = Instruction::new(FLOAT_PTR, NO_TYPE, Op::TypePointer);
    ptr.add_immediate_operand(StorageClass::Function.as_word());
    ptr.add_id_operand(FLOAT);
    module.map_instruction(ptr);

    let mut void_fn = Instruction::new(VOID_FN_TYPE, NO_TYPE, Op::TypeFunction);
    void_fn.add_id_operand(VOID);
    module.map_instruction(void_fn);

    module.map_instruction(Instruction::new(BOOL, NO_TYPE, Op::TypeBool));

    module
}

/// `void main()` with id 10 and no blocks yet
pub(crate) fn void_function(module: &mut Module) -> FunctionRef {
    module.new_function(10, VOID, VOID_FN_TYPE, 11)
}

pub(crate) fn branch(target: Id) -> Instruction {
    let mut inst = Instruction::from_opcode(Op::Branch);
    inst.add_id_operand(target);
    inst
}

pub(crate) fn branch_conditional(condition: Id, on_true: Id, on_false: Id) -> Instruction {
    let mut inst = Instruction::from_opcode(Op::BranchConditional);
    inst.add_id_operand(condition);
    inst.add_id_operand(on_true);
    inst.add_id_operand(on_false);
    inst
}

pub(crate) fn selection_merge(merge: Id) -> Instruction {
    let mut inst = Instruction::from_opcode(Op::SelectionMerge);
    inst.add_id_operand(merge);
    inst.add_immediate_operand(0);
    inst
}

pub(crate) fn loop_merge(merge: Id, continue_target: Id) -> Instruction {
    let mut inst = Instruction::from_opcode(Op::LoopMerge);
    inst.add_id_operand(merge);
    inst.add_id_operand(continue_target);
    inst.add_immediate_operand(0);
    inst
}

pub(crate) fn fadd(result: Id, lhs: Id, rhs: Id) -> Instruction {
    let mut inst = Instruction::new(result, FLOAT, Op::FAdd);
    inst.add_id_operand(lhs);
    inst.add_id_operand(rhs);
    inst
}

pub(crate) fn function_variable(result: Id) -> Instruction {
    let mut inst = Instruction::new(result, FLOAT_PTR, Op::Variable);
    inst.add_immediate_operand(StorageClass::Function.as_word());
    inst
}
