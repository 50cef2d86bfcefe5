use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Two zero-filled regions fixed at allocation: 64-bit variables and
/// 8-bit character variables. Every access is bounds checked.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    vars: Vec<i64>,
    cvars: Vec<u8>,
}

impl Memory {
    pub fn new(vars: usize, cvars: usize) -> Memory {
        Memory {
            vars: vec![0; vars],
            cvars: vec![0; cvars],
        }
    }

    pub fn vars_len(&self) -> usize {
        self.vars.len()
    }

    pub fn cvars_len(&self) -> usize {
        self.cvars.len()
    }

    pub fn var(&self, index: i64) -> Result<i64> {
        let i = checked_index(index, self.vars.len(), "VARIABLE")?;
        Ok(self.vars[i])
    }

    pub fn set_var(&mut self, index: i64, value: i64) -> Result<()> {
        let i = checked_index(index, self.vars.len(), "VARIABLE")?;
        self.vars[i] = value;
        Ok(())
    }

    /// Character variables read back widened to i64.
    pub fn cvar(&self, index: i64) -> Result<i64> {
        let i = checked_index(index, self.cvars.len(), "CHARACTER VARIABLE")?;
        Ok(i64::from(self.cvars[i]))
    }

    /// Stores the low 8 bits of `value`.
    pub fn set_cvar(&mut self, index: i64, value: i64) -> Result<()> {
        let i = checked_index(index, self.cvars.len(), "CHARACTER VARIABLE")?;
        self.cvars[i] = value as u8;
        Ok(())
    }

    /// Resolve a nested chain such as `vc5` to an index.
    ///
    /// The digits give the starting value. The letters are then applied
    /// from the one next to the digits outward: `c` replaces the value with
    /// the character variable it names, `v` with the variable it names.
    /// `vc5` is therefore `vars[cvars[5]]`.
    pub fn resolve(&self, chain: &str) -> Result<i64> {
        let split = match chain.find(|ch: char| ch.is_ascii_digit()) {
            Some(split) => split,
            None => return Err(malformed_chain(chain)),
        };
        let (letters, digits) = chain.split_at(split);
        let mut value: i64 = match digits.parse() {
            Ok(value) if digits.bytes().all(|b| b.is_ascii_digit()) => value,
            _ => return Err(malformed_chain(chain)),
        };
        for letter in letters.chars().rev() {
            value = match letter {
                'c' => self.cvar(value)?,
                'v' => self.var(value)?,
                _ => return Err(malformed_chain(chain)),
            };
        }
        Ok(value)
    }
}

fn checked_index(index: i64, len: usize, what: &str) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(error!(UnclampedAccess; format!(
            "{} {} NOT IN 0..{}",
            what, index, len
        ))),
    }
}

fn malformed_chain(chain: &str) -> Error {
    error!(MalformedOperand; format!("BAD NESTED CHAIN \"{}\"", chain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_zero_initialized() {
        let m = Memory::new(4, 8);
        assert_eq!(m.var(3).unwrap(), 0);
        assert_eq!(m.cvar(7).unwrap(), 0);
    }

    #[test]
    fn test_cvar_truncates() {
        let mut m = Memory::new(1, 1);
        m.set_cvar(0, 0x1_41).unwrap();
        assert_eq!(m.cvar(0).unwrap(), 0x41);
        m.set_cvar(0, -1).unwrap();
        assert_eq!(m.cvar(0).unwrap(), 255);
    }

    #[test]
    fn test_bounds() {
        let mut m = Memory::new(2, 2);
        assert_eq!(m.var(2).unwrap_err().code(), ErrorCode::UnclampedAccess);
        assert_eq!(m.var(-1).unwrap_err().code(), ErrorCode::UnclampedAccess);
        assert_eq!(
            m.set_cvar(2, 1).unwrap_err().to_string(),
            "UNCLAMPED ACCESS; CHARACTER VARIABLE 2 NOT IN 0..2"
        );
    }
}
