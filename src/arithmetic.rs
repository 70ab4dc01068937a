use std::cmp;
use std::fmt;

use bit_vec::BitVec;
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::digits::Digits;
use crate::error::{Operand, Result};

/// The sum of two binary strings, split at the width of the left operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinarySum {
    low: String,
    high: String,
}

impl BinarySum {
    /// The least significant digits, exactly as wide as the left operand.
    pub fn low(&self) -> &str {
        &self.low
    }

    /// Digits beyond the width of the left operand. Empty when nothing spilled over.
    pub fn high(&self) -> &str {
        &self.high
    }

    /// Whether any digits landed beyond the width of the left operand.
    pub fn has_overflow(&self) -> bool {
        !self.high.is_empty()
    }

    /// Total number of digits in `high` followed by `low`.
    pub fn width(&self) -> usize {
        self.high.len() + self.low.len()
    }

    /// Splits into `(low, high)`.
    pub fn into_parts(self) -> (String, String) {
        (self.low, self.high)
    }

    /// Returns the numeric value of `high` followed by `low`.
    pub fn to_biguint(&self) -> BigUint {
        self.high
            .bytes()
            .chain(self.low.bytes())
            .fold(BigUint::zero(), |acc, digit| {
                (acc << 1usize) + u32::from(digit - b'0')
            })
    }
}

impl fmt::Display for BinarySum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "low: {}, hi: {}", self.low, self.high)
    }
}

/// Adds two binary strings digit by digit with a ripple carry.
///
/// The result is split so that `low` has as many digits as `s`; everything
/// more significant goes to `high`. When `t` is wider than `s`, `high` holds
/// the extra digits of `t` as well as any final carry.
///
/// Fails with [`AdderError::InvalidDigit`](crate::AdderError::InvalidDigit)
/// on the first character, from the least significant end, that is not '0'
/// or '1'. At a given position the left operand is checked first.
pub fn add(s: &str, t: &str) -> Result<BinarySum> {
    let mut lhs = Digits::new(s, Operand::Lhs);
    let mut rhs = Digits::new(t, Operand::Rhs);
    let width = lhs.len();
    let rhs_width = rhs.len();

    // Least significant digit first.
    let mut bits = BitVec::with_capacity(cmp::max(width, rhs_width) + 1);
    let mut carry: u8 = 0;

    while !lhs.is_exhausted() || !rhs.is_exhausted() {
        let a = lhs.next_or_zero()?;
        let b = rhs.next_or_zero()?;
        let sum = a + b + carry;
        bits.push(sum % 2 == 1);
        carry = sum / 2;
    }

    trace!("final carry: {}", carry);
    if carry > 0 {
        bits.push(true);
    }

    let digits: String = bits
        .iter()
        .rev()
        .map(|bit| if bit { '1' } else { '0' })
        .collect();
    debug_assert!(digits.len() >= width);
    let (high, low) = digits.split_at(digits.len() - width);

    debug!(
        "added {}-digit and {}-digit operands: {} low digits, {} high digits",
        width,
        rhs_width,
        low.len(),
        high.len()
    );

    Ok(BinarySum {
        low: low.to_owned(),
        high: high.to_owned(),
    })
}
