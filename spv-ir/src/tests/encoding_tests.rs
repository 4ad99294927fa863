use super::*;
use crate::{BlockRef, ModuleOptions};
use pretty_assertions::assert_eq;
use spv_common::{split_header_word, Word};

/// Split an encoded stream into (opcode, words) per instruction
fn instructions_of(words: &[Word]) -> Vec<(Op, Vec<Word>)> {
    let mut out = Vec::new();
    let mut pos = 0;
    while pos < words.len() {
        let (count, opcode) = split_header_word(words[pos]);
        let count = count as usize;
        assert!(count > 0, "zero word count at {}", pos);
        out.push((Op::try_from(opcode).unwrap(), words[pos + 1..pos + count].to_vec()));
        pos += count;
    }
    assert_eq!(pos, words.len());
    out
}

fn opcodes_of(words: &[Word]) -> Vec<Op> {
    instructions_of(words).into_iter().map(|(op, _)| op).collect()
}

/// entry -> (unreachable block with `body`) ; entry returns
fn function_with_unreachable(module: &mut Module, body: &[Instruction]) -> BlockRef {
    let function = void_function(module);
    let entry = module.new_block(20, function);
    module.add_block(function, entry);
    module.add_instruction(entry, Instruction::from_opcode(Op::Return));

    let dead = module.new_block(21, function);
    module.add_block(function, dead);
    for inst in body {
        module.add_instruction(dead, inst.clone());
    }
    module.block_mut(dead).set_unreachable();
    dead
}

#[test]
fn test_local_variables_follow_label() {
    let mut module = module_with_types();
    let function = void_function(&mut module);
    let entry = module.new_block(20, function);
    module.add_block(function, entry);
    module.add_instruction(entry, fadd(30, 11, 11));
    module.add_local_variable(function, function_variable(31));
    module.add_instruction(entry, Instruction::from_opcode(Op::Return));

    let ops = opcodes_of(&module.to_words());
    assert_eq!(
        ops,
        vec![Op::Function, Op::Label, Op::Variable, Op::FAdd, Op::Return, Op::FunctionEnd]
    );
}

#[test]
fn test_degenerate_unreachable_block_is_skipped() {
    let mut module = module_with_types();
    function_with_unreachable(&mut module, &[Instruction::from_opcode(Op::Unreachable)]);

    let ops = opcodes_of(&module.to_words());
    assert_eq!(
        ops,
        vec![Op::Function, Op::Label, Op::Return, Op::FunctionEnd]
    );
}

#[test]
fn test_label_only_unreachable_block_is_skipped() {
    let mut module = module_with_types();
    function_with_unreachable(&mut module, &[]);

    let labels = instructions_of(&module.to_words())
        .into_iter()
        .filter(|(op, _)| *op == Op::Label)
        .count();
    assert_eq!(labels, 1);
}

#[test]
fn test_larger_unreachable_block_is_kept() {
    let mut module = module_with_types();
    function_with_unreachable(&mut module, &[fadd(30, 11, 11), branch(20)]);

    let ops = opcodes_of(&module.to_words());
    assert_eq!(
        ops,
        vec![
            Op::Function,
            Op::Label,
            Op::Return,
            Op::Label,
            Op::FAdd,
            Op::Branch,
            Op::FunctionEnd
        ]
    );
}

#[test]
fn test_reachable_small_block_is_kept() {
    let mut module = module_with_types();
    let dead = function_with_unreachable(&mut module, &[branch(20)]);
    assert_eq!(module.block(dead).num_instructions(), 2);

    let mut reachable = module_with_types();
    let function = void_function(&mut reachable);
    let entry = reachable.new_block(20, function);
    reachable.add_block(function, entry);
    reachable.add_instruction(entry, branch(20));

    assert_eq!(
        opcodes_of(&reachable.to_words()),
        vec![Op::Function, Op::Label, Op::Branch, Op::FunctionEnd]
    );
}

#[test]
fn test_elision_can_be_disabled() {
    let mut module = Module::with_options(ModuleOptions {
        elide_degenerate_unreachable: false,
        ..ModuleOptions::default()
    });
    let mut void_fn = Instruction::new(VOID_FN_TYPE, NO_TYPE, Op::TypeFunction);
    void_fn.add_id_operand(VOID);
    module.map_instruction(void_fn);
    function_with_unreachable(&mut module, &[Instruction::from_opcode(Op::Unreachable)]);

    assert_eq!(
        opcodes_of(&module.to_words()),
        vec![
            Op::Function,
            Op::Label,
            Op::Return,
            Op::Label,
            Op::Unreachable,
            Op::FunctionEnd
        ]
    );
}

#[test]
fn test_functions_encode_in_creation_order() {
    let mut module = module_with_types();
    for (id, label) in [(10, 20), (12, 22), (14, 24)] {
        let function = module.new_function(id, VOID, VOID_FN_TYPE, id + 1);
        let entry = module.new_block(label, function);
        module.add_block(function, entry);
        module.add_instruction(entry, Instruction::from_opcode(Op::Return));
    }

    let function_ids: Vec<Word> = instructions_of(&module.to_words())
        .into_iter()
        .filter(|(op, _)| *op == Op::Function)
        .map(|(_, words)| words[1])
        .collect();
    assert_eq!(function_ids, vec![10, 12, 14]);
}

#[test]
fn test_module_encode_concatenates_functions() {
    let mut module = module_with_types();
    let mut handles = Vec::new();
    for (id, label) in [(10, 20), (12, 22)] {
        let function = module.new_function(id, VOID, VOID_FN_TYPE, id + 1);
        let entry = module.new_block(label, function);
        module.add_block(function, entry);
        module.add_instruction(entry, Instruction::from_opcode(Op::Return));
        handles.push(function);
    }

    let mut expected = Vec::new();
    for function in handles {
        module.function(function).encode(&module, &mut expected);
    }

    let mut out = vec![0x0723_0203];
    module.encode(&mut out);
    assert_eq!(out[0], 0x0723_0203);
    assert_eq!(&out[1..], &expected[..]);
}

#[test]
fn test_empty_module_encodes_nothing() {
    let module = Module::new();
    assert!(module.to_words().is_empty());
    assert_eq!(module.to_listing(), "");
}

#[test]
fn test_listing_matches_encoding_order() {
    let mut module = module_with_types();
    let function = module.new_function(10, VOID, FN_TYPE, 40);
    let entry = module.new_block(20, function);
    module.add_block(function, entry);
    module.add_local_variable(function, function_variable(30));
    module.add_instruction(entry, fadd(31, 40, 41));
    module.add_instruction(entry, Instruction::from_opcode(Op::Return));

    let expected = "\
%10 = OpFunction %1 0 %3
%40 = OpFunctionParameter %2
%41 = OpFunctionParameter %2
%20 = OpLabel
%30 = OpVariable %4 7
%31 = OpFAdd %2 %40 %41
OpReturn
OpFunctionEnd
";
    assert_eq!(module.to_listing(), expected);
    assert_eq!(module.function(function).to_listing(&module), expected);
}

#[test]
fn test_listing_leaves_out_elided_blocks() {
    let mut module = module_with_types();
    let function = void_function(&mut module);
    let entry = module.new_block(20, function);
    let dead = module.new_block(21, function);
    module.add_block(function, entry);
    module.add_block(function, dead);
    module.add_instruction(entry, Instruction::from_opcode(Op::Return));
    module.add_instruction(dead, Instruction::from_opcode(Op::Unreachable));
    module.block_mut(dead).set_unreachable();

    let listing = module.listing();
    assert_eq!(listing.len(), 4);
    assert_eq!(
        format!("{}", listing),
        "%10 = OpFunction %1 0 %5\n%20 = OpLabel\nOpReturn\nOpFunctionEnd\n"
    );

    // The listing walks the same instructions the encoder writes
    let words = module.to_words();
    let opcodes: Vec<Op> = module.emitted().iter().map(|inst| inst.opcode()).collect();
    assert_eq!(opcodes, opcodes_of(&words));
    assert!(Module::new().listing().is_empty());
}

#[test]
fn test_rewrite_after_block_merge() {
    let mut module = module_with_types();
    let function = void_function(&mut module);
    let entry = module.new_block(20, function);
    module.add_block(function, entry);
    let jump = module.add_instruction(entry, branch(21));

    // %21 was folded into %22
    module.instr_mut(jump).rewrite_operands(21, 22);

    let words = module.to_words();
    let (_, operands) = instructions_of(&words)
        .into_iter()
        .find(|(op, _)| *op == Op::Branch)
        .unwrap();
    assert_eq!(operands, vec![22]);
}
