use std::fmt;

use thiserror::Error;

/// Which side of an addition a digit was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// The first operand; its width fixes the width of the low part.
    Lhs,
    Rhs,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lhs => write!(f, "left"),
            Self::Rhs => write!(f, "right"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum AdderError {
    /// A character other than '0' or '1' was found in an operand.
    /// `position` counts characters from the most significant end.
    #[error("invalid binary digit {digit:?} at position {position} of the {operand} operand")]
    InvalidDigit {
        operand: Operand,
        digit: char,
        position: usize,
    },

    /// A fixed-width [`U128`](crate::wide::U128) operation left the 128-bit range.
    #[error("U128 {operation} overflow")]
    Overflow { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, AdderError>;
