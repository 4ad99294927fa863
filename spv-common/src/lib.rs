//! SPIR-V IR - Common Types and Utilities
//! 
//! This crate contains the identifier aliases, opcode tables, packed text
//! helpers and error definitions shared by the in-memory IR and anything
//! that consumes its word stream.

pub mod error;
pub mod op;
pub mod types;
pub mod words;

pub use error::IrError;
pub use op::{FunctionControl, Op, StorageClass};
pub use types::*;
pub use words::{pack_string, string_word_count, unpack_string};
