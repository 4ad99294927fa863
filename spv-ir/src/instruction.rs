//! IR instructions
//!
//! An instruction is an opcode, optional result and result-type ids, an
//! ordered operand list and an optional packed string. It knows its own
//! word count and how to append its binary form to a word buffer.

use serde::{Deserialize, Serialize};
use spv_common::{header_word, pack_string, Id, Op, Word, NO_RESULT, NO_TYPE};
use std::fmt;

/// A single operand word
///
/// The binary form does not distinguish ids from literal numbers, but the
/// IR does, so that retargeting an id never touches a literal that happens
/// to have the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    /// Reference to another result id
    Id(Id),
    /// Literal number or enumerant
    Immediate(Word),
}

impl Operand {
    /// The word written to the binary stream
    pub fn word(&self) -> Word {
        match self {
            Operand::Id(id) => *id,
            Operand::Immediate(value) => *value,
        }
    }

    pub fn is_id(&self) -> bool {
        matches!(self, Operand::Id(_))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Id(id) => write!(f, "%{}", id),
            Operand::Immediate(value) => write!(f, "{}", value),
        }
    }
}

/// Packed string operand, kept alongside its source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StringOperand {
    text: String,
    words: Vec<Word>,
}

/// IR Instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    result_id: Id,
    type_id: Id,
    opcode: Op,
    operands: Vec<Operand>,
    string: Option<StringOperand>,
}

impl Instruction {
    pub const fn new(result_id: Id, type_id: Id, opcode: Op) -> Self {
        Self {
            result_id,
            type_id,
            opcode,
            operands: Vec::new(),
            string: None,
        }
    }

    /// Instruction with neither a result nor a type
    pub const fn from_opcode(opcode: Op) -> Self {
        Self::new(NO_RESULT, NO_TYPE, opcode)
    }

    pub fn add_id_operand(&mut self, id: Id) {
        self.operands.push(Operand::Id(id));
    }

    pub fn add_immediate_operand(&mut self, immediate: Word) {
        self.operands.push(Operand::Immediate(immediate));
    }

    /// Attach the string operand. It is written after all other operands.
    ///
    /// Panics if the instruction already carries a string.
    pub fn add_string_operand(&mut self, text: &str) {
        assert!(
            self.string.is_none(),
            "{} already has a string operand",
            self.opcode
        );
        self.string = Some(StringOperand {
            text: text.to_string(),
            words: pack_string(text),
        });
    }

    pub fn opcode(&self) -> Op {
        self.opcode
    }

    pub fn result_id(&self) -> Id {
        self.result_id
    }

    pub fn type_id(&self) -> Id {
        self.type_id
    }

    pub fn has_result(&self) -> bool {
        self.result_id != NO_RESULT
    }

    pub fn has_type(&self) -> bool {
        self.type_id != NO_TYPE
    }

    pub fn num_operands(&self) -> usize {
        self.operands.len()
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn operand(&self, index: usize) -> Operand {
        self.operands[index]
    }

    /// Raw word of operand `index`
    pub fn operand_word(&self, index: usize) -> Word {
        self.operands[index].word()
    }

    /// Operand `index` read as an id, whatever it was added as
    pub fn id_operand(&self, index: usize) -> Id {
        self.operands[index].word()
    }

    /// Operand `index` read as a literal, whatever it was added as
    pub fn immediate_operand(&self, index: usize) -> Word {
        self.operands[index].word()
    }

    pub fn string_operand(&self) -> Option<&str> {
        self.string.as_ref().map(|s| s.text.as_str())
    }

    /// Replace every id operand equal to `old` with `new`.
    pub fn rewrite_operands(&mut self, old: Id, new: Id) {
        for index in 0..self.operands.len() {
            self.rewrite_operand(old, new, index);
        }
    }

    /// Replace operand `index` with `new` if it is an id operand equal to `old`.
    pub fn rewrite_operand(&mut self, old: Id, new: Id, index: usize) {
        if self.operands[index] == Operand::Id(old) {
            self.operands[index] = Operand::Id(new);
        }
    }

    /// Number of words in the binary form, including the leading word
    pub fn word_count(&self) -> usize {
        let mut count = 1 + self.operands.len();
        if self.has_type() {
            count += 1;
        }
        if self.has_result() {
            count += 1;
        }
        if let Some(string) = &self.string {
            count += string.words.len();
        }
        count
    }

    /// Append the binary form to `out`.
    pub fn encode(&self, out: &mut Vec<Word>) {
        out.push(header_word(self.word_count() as u32, self.opcode.as_u16()));
        if self.has_type() {
            out.push(self.type_id);
        }
        if self.has_result() {
            out.push(self.result_id);
        }
        out.extend(self.operands.iter().map(Operand::word));
        if let Some(string) = &self.string {
            out.extend_from_slice(&string.words);
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_result() {
            write!(f, "%{} = ", self.result_id)?;
        }
        write!(f, "{}", self.opcode)?;
        if self.has_type() {
            write!(f, " %{}", self.type_id)?;
        }
        for operand in &self.operands {
            write!(f, " {}", operand)?;
        }
        if let Some(string) = &self.string {
            write!(f, " \"{}\"", string.text)?;
        }
        Ok(())
    }
}
