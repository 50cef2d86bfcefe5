use super::{Error, Side};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## One side of an instruction
///
/// Every operand kind is readable (a source), writable (a sink), or both.
/// The capability belongs to the kind, never to the instance.
///
/// Nested kinds keep the chain text that follows the leading `v` or `c`.
/// It is resolved against memory every time the operand is evaluated.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    StdInput,
    StdOutput,
    RawOutput,
    Variable(i64),
    CharVariable(i64),
    CharLiteral(i64),
    NumberLiteral(i64),
    LineNumber,
    NewlineChar,
    NestedVariable(Rc<str>),
    NestedCharVariable(Rc<str>),
}

impl Operand {
    pub fn is_source(&self) -> bool {
        use Operand::*;
        match self {
            StdInput | Variable(_) | CharVariable(_) | CharLiteral(_) | NumberLiteral(_)
            | LineNumber | NewlineChar | NestedVariable(_) | NestedCharVariable(_) => true,
            StdOutput | RawOutput => false,
        }
    }

    pub fn is_sink(&self) -> bool {
        use Operand::*;
        match self {
            StdOutput | RawOutput | Variable(_) | CharVariable(_) | NestedVariable(_)
            | NestedCharVariable(_) => true,
            StdInput | CharLiteral(_) | NumberLiteral(_) | LineNumber | NewlineChar => false,
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operand::*;
        match self {
            StdInput => write!(f, "i"),
            StdOutput => write!(f, "o"),
            RawOutput => write!(f, "r"),
            Variable(n) => write!(f, "v{}", n),
            CharVariable(n) => write!(f, "c{}", n),
            CharLiteral(code) => match std::char::from_u32(*code as u32) {
                Some(ch) => write!(f, "\\{}", ch),
                None => write!(f, "\\?"),
            },
            NumberLiteral(n) => write!(f, "{}", n),
            LineNumber => write!(f, "l"),
            NewlineChar => write!(f, "n"),
            NestedVariable(chain) => write!(f, "v{}", chain),
            NestedCharVariable(chain) => write!(f, "c{}", chain),
        }
    }
}

/// Classify the raw text of one side of an instruction.
pub fn classify(text: &str, side: Side) -> Result<Operand> {
    let mut chars = text.chars();
    let first = match chars.next() {
        Some(ch) => ch,
        None => return Err(error!(MalformedOperand; "EMPTY OPERAND").in_side(side)),
    };
    let rest = chars.as_str();
    let malformed = |msg: String| error!(MalformedOperand; msg).in_side(side);
    match first {
        'v' => match address(rest) {
            Some(Address::Direct(n)) => Ok(Operand::Variable(n)),
            Some(Address::Nested(chain)) => Ok(Operand::NestedVariable(chain)),
            None => Err(malformed(format!(
                "VARIABLE REQUIRES NUMBER, GOT \"{}\"",
                rest
            ))),
        },
        'c' => match address(rest) {
            Some(Address::Direct(n)) => Ok(Operand::CharVariable(n)),
            Some(Address::Nested(chain)) => Ok(Operand::NestedCharVariable(chain)),
            None => Err(malformed(format!(
                "CHARACTER VARIABLE REQUIRES NUMBER, GOT \"{}\"",
                rest
            ))),
        },
        'i' | 'o' | 'r' | 'l' | 'n' => {
            if !rest.is_empty() {
                return Err(malformed(format!(
                    "\"{}\" MUST BE EXACTLY 1 CHARACTER, GOT \"{}\"",
                    first, text
                )));
            }
            Ok(match first {
                'i' => Operand::StdInput,
                'o' => Operand::StdOutput,
                'r' => Operand::RawOutput,
                'l' => Operand::LineNumber,
                _ => Operand::NewlineChar,
            })
        }
        '\\' => {
            let mut escaped = rest.chars();
            match (escaped.next(), escaped.next()) {
                (Some(ch), None) => Ok(Operand::CharLiteral(ch as i64)),
                _ => Err(malformed(format!(
                    "CHARACTER MUST BE EXACTLY 2 CHARACTERS, GOT \"{}\"",
                    text
                ))),
            }
        }
        _ => match parse_number(text) {
            Some(n) => Ok(Operand::NumberLiteral(n)),
            None => Err(malformed(format!("NUMBER EXPECTED, GOT \"{}\"", text))),
        },
    }
}

enum Address {
    Direct(i64),
    Nested(Rc<str>),
}

fn address(s: &str) -> Option<Address> {
    if is_digits(s) {
        return s.parse().ok().map(Address::Direct);
    }
    if is_nested_chain(s) {
        return Some(Address::Nested(s.into()));
    }
    None
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A run of `v`/`c` letters followed by one run of decimal digits.
pub fn is_nested_chain(s: &str) -> bool {
    let digits = s.trim_start_matches(|ch| ch == 'v' || ch == 'c');
    digits.len() < s.len() && is_digits(digits) && digits.parse::<i64>().is_ok()
}

/// Signed decimal integer; a `-` is only accepted as the first character.
pub fn parse_number(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if !is_digits(digits) {
        return None;
    }
    s.parse().ok()
}
