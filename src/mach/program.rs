use crate::lang::{parse_line, Error, Instruction};
use tracing::{debug, trace};

/// ## Loaded program
///
/// One instruction per source line, addressed from 1. Lines that fail to
/// decode are kept as no-ops and their errors are collected so a caller
/// can report every problem at once.

#[derive(Debug, Clone, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
    errors: Vec<Error>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Splits on `\n` only; a trailing newline leaves an empty last line.
    pub fn from_source(source: &str) -> Program {
        Program::compile(source.split('\n'))
    }

    pub fn compile<'a, T: IntoIterator<Item = &'a str>>(lines: T) -> Program {
        let mut program = Program::new();
        for (index, text) in lines.into_iter().enumerate() {
            let source_line = index as i64 + 1;
            trace!(line = source_line, text, "parsing");
            let instruction = match parse_line(text, source_line) {
                Ok(instruction) => instruction,
                Err(error) => {
                    debug!(%error, "line rejected");
                    program.errors.push(error);
                    Instruction::no_op(source_line)
                }
            };
            program.instructions.push(instruction);
        }
        debug!(
            lines = program.instructions.len(),
            errors = program.errors.len(),
            "program compiled"
        );
        program
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Instruction at a 1-based line, if the line exists.
    pub fn line(&self, line: i64) -> Option<&Instruction> {
        if line < 1 {
            return None;
        }
        self.instructions.get((line - 1) as usize)
    }
}
