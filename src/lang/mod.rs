/*!
# Rust Language Module

This Rust module decodes ESScript source lines into instructions.

*/

#[macro_use]
mod error;
mod instruction;
mod line;
mod operand;

pub use error::Error;
pub use error::ErrorCode;
pub use error::Side;
pub use instruction::Instruction;
pub use instruction::Operator;
pub use line::parse_line;
pub use operand::classify;
pub use operand::is_nested_chain;
pub use operand::parse_number;
pub use operand::Operand;

/// 1-based source line, absent for errors outside any line.
pub type LineNumber = Option<i64>;

#[cfg(test)]
mod tests;
