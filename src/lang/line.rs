use super::{classify, Error, Instruction, Operator, Side};

type Result<T> = std::result::Result<T, Error>;

/// ## Line decoding
///
/// A line reads `LEFT>OPRIGHT;`. The first `>` that is not escaped with
/// `\` closes the left operand, the next character is the operator and
/// the right operand runs up to `;`. Anything after the `;` is ignored.
///
/// A `//` seen before the right operand starts turns the line into a
/// comment. Inside the right operand it is plain text.
///
/// Lines that never reach the closing `;` carry no code.
pub fn parse_line(text: &str, source_line: i64) -> Result<Instruction> {
    let fields = match Scanner::new(text).split() {
        Some(fields) => fields,
        None => return Ok(Instruction::no_op(source_line)),
    };
    let line = Some(source_line);
    let op = match Operator::from_char(fields.op) {
        Some(op) => op,
        None => {
            return Err(error!(InvalidOperator, line; format!("'{}'", fields.op)));
        }
    };
    let left = classify(fields.left, Side::Left).map_err(|e| e.in_line_number(line))?;
    let right = classify(fields.right, Side::Right).map_err(|e| e.in_line_number(line))?;
    op.check_roles(&left, &right)
        .map_err(|e| e.in_line_number(line))?;
    Ok(Instruction {
        left,
        op,
        right,
        has_code: true,
        source_line,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Left,
    Operator,
    Right,
}

#[derive(Debug, PartialEq)]
struct Fields<'a> {
    left: &'a str,
    op: char,
    right: &'a str,
}

struct Scanner<'a> {
    text: &'a str,
    state: Scan,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Scanner<'a> {
        Scanner {
            text,
            state: Scan::Left,
        }
    }

    fn split(mut self) -> Option<Fields<'a>> {
        let mut previous = None;
        let mut left_end = 0;
        let mut right_start = 0;
        let mut op = '\0';
        for (cursor, ch) in self.text.char_indices() {
            match self.state {
                Scan::Left => {
                    if ch == '/' && previous == Some('/') {
                        return None;
                    }
                    if ch == '>' && previous != Some('\\') {
                        left_end = cursor;
                        self.state = Scan::Operator;
                    }
                }
                Scan::Operator => {
                    op = ch;
                    right_start = cursor + ch.len_utf8();
                    self.state = Scan::Right;
                }
                Scan::Right => {
                    if ch == ';' {
                        return Some(Fields {
                            left: &self.text[..left_end],
                            op,
                            right: &self.text[right_start..cursor],
                        });
                    }
                }
            }
            previous = Some(ch);
        }
        None
    }
}
