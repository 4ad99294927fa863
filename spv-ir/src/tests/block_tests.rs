use super::*;
use crate::BlockRef;
use pretty_assertions::assert_eq;

fn opcodes(module: &Module, block: BlockRef) -> Vec<Op> {
    module
        .block(block)
        .instructions()
        .iter()
        .map(|inst| module.instr(*inst).opcode())
        .collect()
}

fn result_ids(module: &Module, block: BlockRef) -> Vec<Id> {
    module
        .block(block)
        .instructions()
        .iter()
        .map(|inst| module.instr(*inst).result_id())
        .collect()
}

fn entry_block(module: &mut Module) -> BlockRef {
    let function = void_function(module);
    let block = module.new_block(20, function);
    module.add_block(function, block);
    block
}

#[test]
fn test_new_block_starts_with_label() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);

    let b = module.block(block);
    assert_eq!(b.id(), 20);
    assert_eq!(b.num_instructions(), 1);
    assert!(!b.is_unreachable());
    assert_eq!(opcodes(&module, block), vec![Op::Label]);

    // Labels are not entered in the id table
    assert!(!module.is_mapped(20));
}

#[test]
fn test_add_instruction_maps_result() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);

    module.add_instruction(block, fadd(30, 11, 11));
    module.add_instruction(block, Instruction::from_opcode(Op::Return));

    assert_eq!(module.instruction(30).opcode(), Op::FAdd);
    assert_eq!(module.type_id(30), FLOAT);
    assert_eq!(opcodes(&module, block), vec![Op::Label, Op::FAdd, Op::Return]);
}

#[test]
fn test_is_terminated() {
    let terminators = [
        Op::Branch,
        Op::BranchConditional,
        Op::Switch,
        Op::Kill,
        Op::Return,
        Op::ReturnValue,
    ];
    let others = [Op::Store, Op::LoopMerge, Op::SelectionMerge, Op::Unreachable, Op::FunctionCall];

    for op in terminators.iter().chain(others.iter()) {
        let mut module = module_with_types();
        let block = entry_block(&mut module);
        module.add_instruction(block, Instruction::from_opcode(*op));
        assert_eq!(
            module.block(block).is_terminated(&module),
            op.is_terminator(),
            "block ending in {}",
            op
        );
    }

    let mut module = module_with_types();
    let block = entry_block(&mut module);
    assert!(!module.block(block).is_terminated(&module));
}

#[test]
fn test_insert_before_conditional_branch_and_merge() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);
    module.add_instruction(block, fadd(30, 11, 11));
    module.add_instruction(block, selection_merge(23));
    module.add_instruction(block, branch_conditional(31, 21, 22));

    module.insert_instruction_before_terminal(block, fadd(32, 30, 30));

    assert_eq!(
        opcodes(&module, block),
        vec![Op::Label, Op::FAdd, Op::FAdd, Op::SelectionMerge, Op::BranchConditional]
    );
    assert_eq!(result_ids(&module, block)[2], 32);
    assert!(module.is_mapped(32));
}

#[test]
fn test_insert_before_switch_and_merge() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);
    module.add_instruction(block, selection_merge(23));
    let mut switch = Instruction::from_opcode(Op::Switch);
    switch.add_id_operand(30);
    switch.add_id_operand(23);
    module.add_instruction(block, switch);

    module.insert_instruction_before_terminal(block, fadd(32, 11, 11));

    assert_eq!(
        opcodes(&module, block),
        vec![Op::Label, Op::FAdd, Op::SelectionMerge, Op::Switch]
    );
}

#[test]
fn test_insert_before_loop_merge_and_branch() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);
    module.add_instruction(block, loop_merge(24, 25));
    module.add_instruction(block, branch(21));

    module.insert_instruction_before_terminal(block, fadd(32, 11, 11));

    assert_eq!(
        opcodes(&module, block),
        vec![Op::Label, Op::FAdd, Op::LoopMerge, Op::Branch]
    );
}

#[test]
fn test_insert_before_plain_branch() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);
    module.add_instruction(block, fadd(30, 11, 11));
    module.add_instruction(block, branch(21));

    module.insert_instruction_before_terminal(block, fadd(32, 30, 30));

    assert_eq!(result_ids(&module, block), vec![20, 30, 32, 0]);
}

#[test]
fn test_selection_merge_does_not_pair_with_branch() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);
    module.add_instruction(block, selection_merge(23));
    module.add_instruction(block, branch(21));

    module.insert_instruction_before_terminal(block, fadd(32, 11, 11));

    assert_eq!(
        opcodes(&module, block),
        vec![Op::Label, Op::SelectionMerge, Op::FAdd, Op::Branch]
    );
}

#[test]
fn test_insert_before_return_and_kill() {
    for op in [Op::Return, Op::ReturnValue, Op::Kill] {
        let mut module = module_with_types();
        let block = entry_block(&mut module);
        module.add_instruction(block, fadd(30, 11, 11));
        module.add_instruction(block, Instruction::from_opcode(op));

        module.insert_instruction_before_terminal(block, fadd(32, 30, 30));

        assert_eq!(
            opcodes(&module, block),
            vec![Op::Label, Op::FAdd, Op::FAdd, op],
            "block ending in {}",
            op
        );
        assert_eq!(result_ids(&module, block)[2], 32);
    }
}

#[test]
fn test_insert_into_open_block_appends() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);
    module.add_instruction(block, fadd(30, 11, 11));

    module.insert_instruction_before_terminal(block, fadd(32, 30, 30));
    assert_eq!(result_ids(&module, block), vec![20, 30, 32]);

    // Only the label so far
    let mut module = module_with_types();
    let block = entry_block(&mut module);
    module.insert_instruction_before_terminal(block, fadd(32, 11, 11));
    assert_eq!(result_ids(&module, block), vec![20, 32]);
}

#[test]
fn test_insert_never_lands_before_label() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);
    module.add_instruction(block, branch_conditional(31, 21, 22));

    module.insert_instruction_before_terminal(block, fadd(32, 11, 11));

    assert_eq!(
        opcodes(&module, block),
        vec![Op::Label, Op::FAdd, Op::BranchConditional]
    );
}

#[test]
fn test_add_instruction_at_front() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);
    module.add_instruction(block, fadd(30, 11, 11));
    module.add_instruction(block, Instruction::from_opcode(Op::Return));

    module.add_instruction_at_front(block, fadd(31, 11, 12));

    assert_eq!(result_ids(&module, block), vec![20, 31, 30, 0]);
    assert!(module.is_mapped(31));
}

#[test]
#[should_panic(expected = "second label")]
fn test_add_label_at_front_panics() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);
    module.add_instruction_at_front(block, Instruction::new(40, spv_common::NO_TYPE, Op::Label));
}

#[test]
fn test_cfg_edges_are_not_mirrored() {
    let mut module = module_with_types();
    let function = void_function(&mut module);
    let header = module.new_block(20, function);
    let then_block = module.new_block(21, function);
    let merge = module.new_block(22, function);
    for block in [header, then_block, merge] {
        module.add_block(function, block);
    }

    module.block_mut(header).add_successor(then_block);
    module.block_mut(header).add_successor(merge);
    module.block_mut(then_block).add_predecessor(header);

    let h = module.block(header);
    assert_eq!(h.num_successors(), 2);
    assert_eq!(h.successor(1), merge);
    assert_eq!(h.num_predecessors(), 0);

    let t = module.block(then_block);
    assert!(t.has_predecessor(header));
    assert!(h.is_predecessor_of(t));

    // merge never had the reverse edge added
    let m = module.block(merge);
    assert!(m.predecessors().is_empty());
    assert!(!h.is_predecessor_of(m));
}

#[test]
fn test_unreachable_flag() {
    let mut module = module_with_types();
    let block = entry_block(&mut module);
    module.add_instruction(block, Instruction::from_opcode(Op::Unreachable));

    assert!(!module.block(block).is_degenerate());
    module.block_mut(block).set_unreachable();
    assert!(module.block(block).is_unreachable());
    assert!(module.block(block).is_degenerate());

    module.add_instruction(block, branch(21));
    assert!(!module.block(block).is_degenerate());
}
