//! SPIR-V IR - In-memory representation
//! 
//! Holds each function's CFG of blocks while the backend assembles a module,
//! and writes the whole hierarchy out as a binary word stream:
//!  - `Module`, a list of
//!    - `Function`, a list of
//!      - `Block`, a list of
//!        - `Instruction`
//! 
//! The module owns every function, block and instruction in dense arenas.
//! Everything else refers to them through the copyable handles in [`refs`].

pub mod block;
pub mod function;
pub mod id_table;
pub mod instruction;
pub mod listing;
pub mod module;
pub mod refs;
pub mod verify;

#[cfg(test)]
mod tests;

pub use block::Block;
pub use function::Function;
pub use id_table::IdTable;
pub use instruction::{Instruction, Operand};
pub use listing::Listing;
pub use module::{Module, ModuleOptions};
pub use refs::{BlockRef, FunctionRef, InstrRef};

pub use spv_common::{
    FunctionControl, Id, IrError, Op, StorageClass, Word, NO_RESULT, NO_TYPE,
};
