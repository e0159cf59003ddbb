//! Boolean functions given as truth vectors, and their residual (cofactor) functions.
//!
//! Row `i` of a vector assigns argument `k` the bit `(i >> k) & 1`, so arguments
//! are numbered from 0, right to left.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionError {
    #[error("function must consist of 0 and 1 only")]
    NotBinary,
    #[error("function length {0} is not a power of two")]
    BadLength(usize),
    #[error("residual lengths differ ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("argument number {arg} is out of range (max {max})")]
    ArgumentOutOfRange { arg: u32, max: u32 },
}

/// A truth vector over `{0, 1}` whose length is a power of two, at least 2.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BooleanFunction {
    vector: String,
    arguments: u32,
}

fn ensure_binary(text: &str) -> Result<(), FunctionError> {
    if text.bytes().all(|b| b == b'0' || b == b'1') {
        Ok(())
    } else {
        Err(FunctionError::NotBinary)
    }
}

fn arguments_for(len: usize) -> Result<u32, FunctionError> {
    if len >= 2 && len.is_power_of_two() {
        Ok(len.trailing_zeros())
    } else {
        Err(FunctionError::BadLength(len))
    }
}

impl BooleanFunction {
    pub fn parse(text: impl Into<String>) -> Result<Self, FunctionError> {
        let vector = text.into();
        ensure_binary(&vector)?;
        let arguments = arguments_for(vector.len())?;
        Ok(Self { vector, arguments })
    }

    /// Builds a function from its truth table rows, `rows.len()` must be a power of two.
    pub fn from_rows(rows: &[bool]) -> Result<Self, FunctionError> {
        let vector: String = rows.iter().map(|&bit| if bit { '1' } else { '0' }).collect();
        Self::parse(vector)
    }

    /// Inverse of [`BooleanFunction::residual`]: interleaves the zero and one
    /// residuals of argument `arg` back into the full function.
    pub fn from_residuals(zero: &str, one: &str, arg: u32) -> Result<Self, FunctionError> {
        ensure_binary(zero)?;
        ensure_binary(one)?;
        if zero.len() != one.len() {
            return Err(FunctionError::LengthMismatch {
                left: zero.len(),
                right: one.len(),
            });
        }

        let len = zero.len() * 2;
        let arguments = arguments_for(len)?;
        if arg >= arguments {
            return Err(FunctionError::ArgumentOutOfRange {
                arg,
                max: arguments - 1,
            });
        }

        let block = 1usize << arg;
        let (zero, one) = (zero.as_bytes(), one.as_bytes());
        let (mut zi, mut oi) = (0, 0);
        let mut vector = String::with_capacity(len);
        for row in 0..len {
            if (row / block) & 1 == 0 {
                vector.push(char::from(zero[zi]));
                zi += 1;
            } else {
                vector.push(char::from(one[oi]));
                oi += 1;
            }
        }

        Ok(Self { vector, arguments })
    }

    #[must_use]
    pub fn vector(&self) -> &str {
        &self.vector
    }

    #[must_use]
    pub fn arguments(&self) -> u32 {
        self.arguments
    }

    /// The function with argument `arg` fixed to `value`.
    ///
    /// The result has half the length and may be a single symbol, so it is
    /// returned as plain text rather than another `BooleanFunction`.
    pub fn residual(&self, arg: u32, value: bool) -> Result<String, FunctionError> {
        if arg >= self.arguments {
            return Err(FunctionError::ArgumentOutOfRange {
                arg,
                max: self.arguments - 1,
            });
        }
        let block = 1usize << arg;
        Ok(self
            .vector
            .chars()
            .enumerate()
            .filter(|(row, _)| ((row / block) & 1 == 1) == value)
            .map(|(_, symbol)| symbol)
            .collect())
    }
}

impl fmt::Display for BooleanFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.vector)
    }
}

#[cfg(test)]
mod tests {
    use super::{BooleanFunction, FunctionError};

    #[test]
    fn parse_counts_arguments() {
        assert_eq!(BooleanFunction::parse("10").unwrap().arguments(), 1);
        assert_eq!(BooleanFunction::parse("0110").unwrap().arguments(), 2);
        assert_eq!(BooleanFunction::parse("00010111").unwrap().arguments(), 3);
    }

    #[test]
    fn parse_rejects_non_binary() {
        assert_eq!(
            BooleanFunction::parse("abc"),
            Err(FunctionError::NotBinary)
        );
        assert_eq!(BooleanFunction::parse("0120"), Err(FunctionError::NotBinary));
    }

    #[test]
    fn parse_rejects_bad_length() {
        assert_eq!(
            BooleanFunction::parse("1010101010"),
            Err(FunctionError::BadLength(10))
        );
        assert_eq!(BooleanFunction::parse("1"), Err(FunctionError::BadLength(1)));
        assert_eq!(BooleanFunction::parse(""), Err(FunctionError::BadLength(0)));
    }

    #[test]
    fn residual_picks_rows_by_argument_bit() {
        let f = BooleanFunction::parse("00010111").unwrap();
        assert_eq!(f.residual(0, false).unwrap(), "0001");
        assert_eq!(f.residual(0, true).unwrap(), "0111");
        assert_eq!(f.residual(1, false).unwrap(), "0001");
        assert_eq!(f.residual(2, true).unwrap(), "0111");

        let g = BooleanFunction::parse("0110").unwrap();
        assert_eq!(g.residual(0, false).unwrap(), "01");
        assert_eq!(g.residual(1, false).unwrap(), "01");
        assert_eq!(g.residual(1, true).unwrap(), "10");
    }

    #[test]
    fn residual_out_of_range() {
        let f = BooleanFunction::parse("0110").unwrap();
        assert_eq!(
            f.residual(2, true),
            Err(FunctionError::ArgumentOutOfRange { arg: 2, max: 1 })
        );
    }

    #[test]
    fn from_residuals_interleaves() {
        let f = BooleanFunction::from_residuals("01", "11", 0).unwrap();
        assert_eq!(f.vector(), "0111");
        let f = BooleanFunction::from_residuals("01", "11", 1).unwrap();
        assert_eq!(f.vector(), "0111");
        let f = BooleanFunction::from_residuals("0", "1", 0).unwrap();
        assert_eq!(f.vector(), "01");
    }

    #[test]
    fn residuals_reconstruct_every_argument() {
        let f = BooleanFunction::parse("1011001101011100").unwrap();
        for arg in 0..f.arguments() {
            let zero = f.residual(arg, false).unwrap();
            let one = f.residual(arg, true).unwrap();
            assert_eq!(BooleanFunction::from_residuals(&zero, &one, arg).unwrap(), f);
        }
    }

    #[test]
    fn from_residuals_rejects_bad_inputs() {
        assert_eq!(
            BooleanFunction::from_residuals("12", "34", 1),
            Err(FunctionError::NotBinary)
        );
        assert_eq!(
            BooleanFunction::from_residuals("01", "1", 0),
            Err(FunctionError::LengthMismatch { left: 2, right: 1 })
        );
        assert_eq!(
            BooleanFunction::from_residuals("011", "101", 0),
            Err(FunctionError::BadLength(6))
        );
        assert_eq!(
            BooleanFunction::from_residuals("01", "10", 2),
            Err(FunctionError::ArgumentOutOfRange { arg: 2, max: 1 })
        );
    }

    #[test]
    fn from_rows_round_trips_display() {
        let f = BooleanFunction::from_rows(&[false, true, true, true]).unwrap();
        assert_eq!(f.to_string(), "0111");
    }
}
