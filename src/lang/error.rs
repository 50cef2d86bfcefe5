use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    side: Option<Side>,
    message: String,
}

/// Which half of an instruction a diagnostic points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, $side:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_side($side)
    };
    ($err:ident, $line:expr, $side:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_side($side)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            side: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn in_side(self, side: Side) -> Error {
        Error {
            side: Some(side),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MalformedOperand = 1,
    InvalidOperator = 2,
    OperandRoleViolation = 3,
    UnclampedAccess = 4,
    DivideByZero = 5,
    Break = 6,
    FileNotFound = 53,
    InternalError = 51,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "LEFT"),
            Side::Right => write!(f, "RIGHT"),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::MalformedOperand => "MALFORMED OPERAND",
            ErrorCode::InvalidOperator => "INVALID OPERATOR",
            ErrorCode::OperandRoleViolation => "OPERAND ROLE VIOLATION",
            ErrorCode::UnclampedAccess => "UNCLAMPED ACCESS",
            ErrorCode::DivideByZero => "DIVIDE BY ZERO",
            ErrorCode::Break => "BREAK",
            ErrorCode::FileNotFound => "FILE NOT FOUND",
            ErrorCode::InternalError => "INTERNAL ERROR",
        };
        let mut location = String::new();
        if let Some(line_number) = self.line_number {
            location.push_str(&format!(" {}", line_number));
        }
        if let Some(side) = self.side {
            location.push_str(&format!(" {}", side));
        }
        write!(f, "{}", code_str)?;
        if !location.is_empty() {
            write!(f, " IN{}", location)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
