//! Packed text operands
//! 
//! Strings are embedded in the word stream null-terminated, four bytes per
//! word with the first byte in the low bits, and the final word padded with
//! zeros. A string whose length is a multiple of four therefore always ends
//! with a whole zero word.

use crate::error::IrError;
use crate::types::Word;

/// Number of words `text` occupies once packed, terminator included
pub fn string_word_count(text: &str) -> usize {
    text.len() / 4 + 1
}

/// Pack `text` into little-endian words with a null terminator.
///
/// Panics if `text` contains an interior null byte, since the packed form
/// could not be read back.
pub fn pack_string(text: &str) -> Vec<Word> {
    assert!(
        !text.as_bytes().contains(&0),
        "string operand contains an interior null byte: {:?}",
        text
    );

    let mut words = Vec::with_capacity(string_word_count(text));
    for chunk in text.as_bytes().chunks(4) {
        let mut bytes = [0u8; 4];
        bytes[..chunk.len()].copy_from_slice(chunk);
        words.push(Word::from_le_bytes(bytes));
    }

    // Exact multiple of four: the terminator needs a word of its own
    if text.len() % 4 == 0 {
        words.push(0);
    }
    words
}

/// Read a packed string from the front of `words`.
///
/// Returns the text and the number of words it occupied.
pub fn unpack_string(words: &[Word]) -> Result<(String, usize), IrError> {
    let mut bytes = Vec::new();
    for (index, word) in words.iter().enumerate() {
        for byte in word.to_le_bytes() {
            if byte == 0 {
                let text = String::from_utf8(bytes).map_err(|_| IrError::InvalidUtf8)?;
                return Ok((text, index + 1));
            }
            bytes.push(byte);
        }
    }
    Err(IrError::MissingTerminator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pack_partial_word() {
        // "main" + NUL is five bytes
        assert_eq!(pack_string("abc"), vec![0x0063_6261]);
        assert_eq!(pack_string("main"), vec![0x6E69_616D, 0]);
    }

    #[test]
    fn test_pack_empty_string() {
        assert_eq!(pack_string(""), vec![0]);
        assert_eq!(string_word_count(""), 1);
    }

    #[test]
    fn test_word_count_matches_packing() {
        for len in 0..=13 {
            let text = "x".repeat(len);
            assert_eq!(pack_string(&text).len(), string_word_count(&text), "length {}", len);
        }
    }

    #[test]
    fn test_exact_multiple_gets_zero_word() {
        let words = pack_string("GLSL.std.450");
        assert_eq!(words.len(), 4);
        assert_eq!(*words.last().unwrap(), 0);
    }

    #[test]
    fn test_unpack_round_trip() {
        for text in ["", "a", "ab", "abc", "main", "gl_Position", "GLSL.std.450", "héllo"] {
            let words = pack_string(text);
            let (decoded, used) = unpack_string(&words).unwrap();
            assert_eq!(decoded, text);
            assert_eq!(decoded.len(), text.len());
            assert_eq!(used, words.len());
        }
    }

    #[test]
    fn test_unpack_stops_at_terminator() {
        let mut words = pack_string("abc");
        words.push(0xDEAD_BEEF);
        assert_eq!(unpack_string(&words), Ok(("abc".to_string(), 1)));
    }

    #[test]
    fn test_unpack_errors() {
        assert_eq!(unpack_string(&[0x6463_6261]), Err(IrError::MissingTerminator));
        assert_eq!(unpack_string(&[]), Err(IrError::MissingTerminator));
        assert_eq!(unpack_string(&[0x0000_00FF]), Err(IrError::InvalidUtf8));
    }

    #[test]
    #[should_panic(expected = "interior null byte")]
    fn test_interior_null_panics() {
        pack_string("a\0b");
    }
}
