use super::{Error, Operand, Side};

type Result<T> = std::result::Result<T, Error>;

/// ## Instruction operators
///
/// | Symbol | Operator         | Effect                         |
/// |--------|------------------|--------------------------------|
/// | `>`    | `Move`           | right = left                   |
/// | `?`    | `JumpIfPositive` | if left > 0, continue at right |
/// | `+`    | `Add`            | right = right + left           |
/// | `-`    | `Subtract`       | right = right - left           |
/// | `*`    | `Multiply`       | right = right * left           |
/// | `/`    | `Divide`         | right = right / left           |

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Move,
    JumpIfPositive,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '>' => Some(Move),
            '?' => Some(JumpIfPositive),
            '+' => Some(Add),
            '-' => Some(Subtract),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        use Operator::*;
        match self {
            Move => '>',
            JumpIfPositive => '?',
            Add => '+',
            Subtract => '-',
            Multiply => '*',
            Divide => '/',
        }
    }

    pub fn is_arithmetic(self) -> bool {
        !matches!(self, Operator::Move | Operator::JumpIfPositive)
    }

    /// Left must always be readable. What the right side must be
    /// depends on the operator.
    pub fn check_roles(self, left: &Operand, right: &Operand) -> Result<()> {
        if !left.is_source() {
            return Err(error!(OperandRoleViolation; format!(
                "INPUT EXPECTED, GOT OUTPUT ONLY \"{}\"",
                left
            ))
            .in_side(Side::Left));
        }
        let message = match self {
            Operator::Move if !right.is_sink() => "OUTPUT EXPECTED, GOT INPUT ONLY",
            Operator::JumpIfPositive if !right.is_source() => "INPUT EXPECTED, GOT OUTPUT ONLY",
            op if op.is_arithmetic() && !(right.is_source() && right.is_sink()) => {
                "INPUT AND OUTPUT EXPECTED, GOT ONLY ONE"
            }
            _ => return Ok(()),
        };
        Err(error!(OperandRoleViolation; format!("{} \"{}\"", message, right)).in_side(Side::Right))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Move => write!(f, "MOVE"),
            JumpIfPositive => write!(f, "JUMP"),
            Add => write!(f, "ADD"),
            Subtract => write!(f, "SUB"),
            Multiply => write!(f, "MUL"),
            Divide => write!(f, "DIV"),
        }
    }
}

/// One decoded source line.
///
/// Lines without code still take an address so that jump targets keep
/// naming the same source lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub left: Operand,
    pub op: Operator,
    pub right: Operand,
    pub has_code: bool,
    pub source_line: i64,
}

impl Instruction {
    pub fn no_op(source_line: i64) -> Instruction {
        Instruction {
            left: Operand::NumberLiteral(0),
            op: Operator::Move,
            right: Operand::NumberLiteral(0),
            has_code: false,
            source_line,
        }
    }

    /// How many values this instruction takes from standard input.
    pub fn input_count(&self) -> usize {
        if !self.has_code {
            return 0;
        }
        [&self.left, &self.right]
            .iter()
            .filter(|operand| ***operand == Operand::StdInput)
            .count()
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.has_code {
            write!(f, "{}>{}{};", self.left, self.op.symbol(), self.right)
        } else {
            Ok(())
        }
    }
}
