use std::iter::Rev;
use std::str::Chars;

use crate::error::{AdderError, Operand, Result};

/// Converts a single character to its binary digit value.
pub fn parse_digit(c: char) -> Option<u8> {
    match c {
        '0' => Some(0),
        '1' => Some(1),
        _ => None,
    }
}

/// Walks a binary string from its least significant digit towards its most
/// significant one.
pub struct Digits<'a> {
    chars: Rev<Chars<'a>>,
    operand: Operand,
    // Characters not yet consumed.
    remaining: usize,
}

impl<'a> Digits<'a> {
    pub fn new(bits: &'a str, operand: Operand) -> Self {
        Digits {
            chars: bits.chars().rev(),
            operand,
            remaining: bits.chars().count(),
        }
    }

    /// Returns the next digit, or 0 once the string is exhausted.
    pub fn next_or_zero(&mut self) -> Result<u8> {
        Ok(self.next().transpose()?.unwrap_or(0))
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl Iterator for Digits<'_> {
    // Each iteration returns a Result with the digit value
    type Item = Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        self.remaining -= 1;
        Some(parse_digit(c).ok_or(AdderError::InvalidDigit {
            operand: self.operand,
            digit: c,
            position: self.remaining,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Digits<'_> {}
