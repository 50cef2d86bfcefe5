use super::{Config, Memory, Program};
use crate::error;
use crate::lang::{Error, Operand, Operator, Side};
use std::collections::VecDeque;
use tracing::{debug, info, trace};

type Result<T> = std::result::Result<T, Error>;

const INPUT_PROMPT: &str = "< ";

/// ## Events
///
/// The runtime never touches the process streams. `execute` runs a slice
/// of the program and hands back what the host has to do next.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Nothing left to run.
    Stopped,
    /// The cycle budget ran out; call `execute` again.
    Running,
    /// Show the prompt, then supply one value with `enter_input`.
    Input(String),
    /// Formatted number output, newline included.
    Print(String),
    /// One unframed byte of output.
    Raw(u8),
    /// Diagnostics. Execution has stopped unless the runtime is lenient
    /// and these came from loading.
    Errors(Vec<Error>),
}

enum Step {
    Continue,
    Event(Event),
    Halt,
}

/// ## Execution engine
///
/// Holds the program, both memory regions and the program counter, which
/// counts source lines from 1. Execution ends once the counter leaves
/// the program.
#[derive(Debug)]
pub struct Runtime {
    config: Config,
    program: Program,
    memory: Memory,
    pc: i64,
    running: bool,
    interrupted: bool,
    input: VecDeque<i64>,
    pending_errors: Vec<Error>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        let memory = Memory::new(config.vars, config.cvars);
        Runtime {
            pc: config.start_line(),
            config,
            program: Program::new(),
            memory,
            running: false,
            interrupted: false,
            input: VecDeque::new(),
            pending_errors: vec![],
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn pc(&self) -> i64 {
        self.pc
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Compile `source` and get ready to run it from the configured entry.
    pub fn load(&mut self, source: &str) {
        self.set_program(Program::from_source(source));
    }

    /// Install a compiled program. Memory is reallocated and any unread
    /// input is dropped. Load errors are reported by the next `execute`.
    pub fn set_program(&mut self, program: Program) {
        debug!(
            vars = self.config.vars,
            cvars = self.config.cvars,
            "allocating memory"
        );
        self.memory = Memory::new(self.config.vars, self.config.cvars);
        self.input.clear();
        self.interrupted = false;
        self.pc = self.config.start_line();
        self.pending_errors = program.errors().to_vec();
        self.running = self.pending_errors.is_empty() || self.config.lenient;
        self.program = program;
        if self.running {
            info!(lines = self.program.len(), entry = self.pc, "beginning execution");
        }
    }

    pub fn enter_input(&mut self, value: i64) {
        self.input.push_back(value);
    }

    pub fn interrupt(&mut self) {
        if self.running {
            self.interrupted = true;
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if !self.pending_errors.is_empty() {
            return Event::Errors(std::mem::take(&mut self.pending_errors));
        }
        if !self.running {
            return Event::Stopped;
        }
        if self.interrupted {
            self.interrupted = false;
            self.running = false;
            return Event::Errors(vec![error!(Break, Some(self.pc))]);
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Event(event)) => return event,
                Ok(Step::Halt) => {
                    debug!(pc = self.pc, "ran out of lines");
                    self.running = false;
                    return Event::Stopped;
                }
                Err(error) => {
                    self.running = false;
                    return Event::Errors(vec![error]);
                }
            }
        }
        Event::Running
    }

    fn step(&mut self) -> Result<Step> {
        let Runtime {
            program,
            memory,
            input,
            pc,
            ..
        } = self;
        let instruction = match program.line(*pc) {
            Some(instruction) => instruction,
            None => return Ok(Step::Halt),
        };
        if !instruction.has_code {
            *pc += 1;
            return Ok(Step::Continue);
        }
        if input.len() < instruction.input_count() {
            return Ok(Step::Event(Event::Input(INPUT_PROMPT.to_string())));
        }
        trace!(line = instruction.source_line, %instruction, "step");
        let mut cells = Cells {
            memory,
            input,
            line: instruction.source_line,
        };
        let mut next = *pc + 1;
        let output = match instruction.op {
            Operator::Move => {
                let value = cells.read(&instruction.left, Side::Left)?;
                cells.write(&instruction.right, value)?
            }
            Operator::JumpIfPositive => {
                let a = cells.read(&instruction.left, Side::Left)?;
                let b = cells.read(&instruction.right, Side::Right)?;
                if a > 0 {
                    trace!(from = *pc, to = b, "jump");
                    next = b;
                }
                None
            }
            op => {
                let a = cells.read(&instruction.left, Side::Left)?;
                let b = cells.read(&instruction.right, Side::Right)?;
                let value = arithmetic(op, a, b)
                    .map_err(|e| e.in_line_number(Some(instruction.source_line)))?;
                cells.write(&instruction.right, value)?
            }
        };
        *pc = next;
        Ok(match output {
            Some(event) => Step::Event(event),
            None => Step::Continue,
        })
    }
}

/// Mutable state one instruction can touch, borrowed apart from the
/// program so operands are read in place.
struct Cells<'a> {
    memory: &'a mut Memory,
    input: &'a mut VecDeque<i64>,
    line: i64,
}

impl<'a> Cells<'a> {
    fn read(&mut self, operand: &Operand, side: Side) -> Result<i64> {
        let value = match operand {
            Operand::StdInput => match self.input.pop_front() {
                Some(value) => Ok(value),
                None => Err(error!(InternalError; "INPUT UNDERFLOW")),
            },
            Operand::Variable(index) => self.memory.var(*index),
            Operand::CharVariable(index) => self.memory.cvar(*index),
            Operand::CharLiteral(value) | Operand::NumberLiteral(value) => Ok(*value),
            Operand::LineNumber => Ok(self.line),
            Operand::NewlineChar => Ok(i64::from(b'\n')),
            Operand::NestedVariable(chain) => self
                .memory
                .resolve(chain)
                .and_then(|index| self.memory.var(index)),
            Operand::NestedCharVariable(chain) => self
                .memory
                .resolve(chain)
                .and_then(|index| self.memory.cvar(index)),
            Operand::StdOutput | Operand::RawOutput => {
                Err(error!(OperandRoleViolation; "READ FROM OUTPUT"))
            }
        };
        value.map_err(|e| e.in_line_number(Some(self.line)).in_side(side))
    }

    fn write(&mut self, operand: &Operand, value: i64) -> Result<Option<Event>> {
        let written = match operand {
            Operand::StdOutput => return Ok(Some(Event::Print(format!("> {}\n", value)))),
            Operand::RawOutput => return Ok(Some(Event::Raw(value as u8))),
            Operand::Variable(index) => self.memory.set_var(*index, value),
            Operand::CharVariable(index) => self.memory.set_cvar(*index, value),
            Operand::NestedVariable(chain) => {
                let index = self.memory.resolve(chain);
                index.and_then(|index| self.memory.set_var(index, value))
            }
            Operand::NestedCharVariable(chain) => {
                let index = self.memory.resolve(chain);
                index.and_then(|index| self.memory.set_cvar(index, value))
            }
            _ => Err(error!(OperandRoleViolation; "WRITE TO INPUT")),
        };
        let line = self.line;
        written
            .map(|_| None)
            .map_err(|e| e.in_line_number(Some(line)).in_side(Side::Right))
    }
}

/// Left is the operand, right the accumulator. Overflow wraps.
fn arithmetic(op: Operator, left: i64, right: i64) -> Result<i64> {
    match op {
        Operator::Add => Ok(right.wrapping_add(left)),
        Operator::Subtract => Ok(right.wrapping_sub(left)),
        Operator::Multiply => Ok(right.wrapping_mul(left)),
        Operator::Divide => {
            if left == 0 {
                Err(error!(DivideByZero))
            } else {
                Ok(right.wrapping_div(left))
            }
        }
        Operator::Move | Operator::JumpIfPositive => Err(error!(InternalError; "NOT ARITHMETIC")),
    }
}
