//! Basic identifier and word definitions
//! 
//! Result ids are dense small integers handed out by the builder, so the
//! IR stores and indexes them as plain `u32` values.

/// Result identifier. `0` is reserved for "no result" / "no type".
pub type Id = u32;

/// One 32-bit word of the binary stream
pub type Word = u32;

/// Marker for an instruction without a result id
pub const NO_RESULT: Id = 0;

/// Marker for an instruction without a result type
pub const NO_TYPE: Id = 0;

/// The word count lives in the high half of an instruction's first word
pub const WORD_COUNT_SHIFT: u32 = 16;

/// The opcode lives in the low half of an instruction's first word
pub const OPCODE_MASK: Word = 0xFFFF;

/// Build the leading word of an encoded instruction.
pub fn header_word(word_count: u32, opcode: u16) -> Word {
    (word_count << WORD_COUNT_SHIFT) | opcode as Word
}

/// Split a leading word into `(word_count, opcode)`.
pub fn split_header_word(word: Word) -> (u32, u16) {
    (word >> WORD_COUNT_SHIFT, (word & OPCODE_MASK) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_word_layout() {
        let word = header_word(4, 248);
        assert_eq!(word, 0x0004_00F8);
        assert_eq!(split_header_word(word), (4, 248));
    }
}
