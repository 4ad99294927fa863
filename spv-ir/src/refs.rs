//! Handles into the module's arenas
//! 
//! Handles are plain indices. They are only meaningful for the `Module`
//! that produced them and never own what they point at.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to an instruction stored in a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrRef(pub(crate) u32);

/// Handle to a block stored in a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockRef(pub(crate) u32);

/// Handle to a function stored in a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionRef(pub(crate) u32);

impl InstrRef {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl BlockRef {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl FunctionRef {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BlockRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block#{}", self.0)
    }
}
