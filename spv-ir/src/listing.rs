//! Textual listing of a module
//!
//! One line per instruction, in exactly the order `Module::encode` writes
//! them. Intended for debugging output and test expectations.

use crate::function::Function;
use crate::instruction::Instruction;
use crate::module::Module;
use std::fmt;

/// Instructions to print one per line
#[derive(Debug, Clone)]
pub struct Listing<'m> {
    instructions: Vec<&'m Instruction>,
}

impl<'m> Listing<'m> {
    pub fn new(instructions: Vec<&'m Instruction>) -> Self {
        Self { instructions }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inst in &self.instructions {
            writeln!(f, "{}", inst)?;
        }
        Ok(())
    }
}

impl Module {
    pub fn listing(&self) -> Listing<'_> {
        Listing::new(self.emitted())
    }

    /// Render the encoded instruction stream as text.
    pub fn to_listing(&self) -> String {
        self.listing().to_string()
    }
}

impl Function {
    pub fn listing<'m>(&self, module: &'m Module) -> Listing<'m> {
        Listing::new(self.emitted(module))
    }

    /// Render this function's encoded instruction stream as text.
    pub fn to_listing(&self, module: &Module) -> String {
        self.listing(module).to_string()
    }
}
