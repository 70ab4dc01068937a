use std::fmt;
use std::ops::{Add, Mul, Sub};

use log::debug;

use crate::error::{AdderError, Result};

/// A 128-bit unsigned integer kept as two 64-bit halves.
///
/// Arithmetic is checked: the operators return [`Result`] and fail with
/// [`AdderError::Overflow`] instead of wrapping.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U128 {
    high: u64,
    low: u64,
}

impl U128 {
    pub const ZERO: U128 = U128 { high: 0, low: 0 };
    pub const MAX: U128 = U128 {
        high: u64::MAX,
        low: u64::MAX,
    };

    pub const fn from_parts(high: u64, low: u64) -> Self {
        U128 { high, low }
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    /// Adds with carry from the low half into the high half.
    /// The flag is set when the sum does not fit in 128 bits.
    pub fn overflowing_add(self, other: Self) -> (Self, bool) {
        let (low, carry) = self.low.overflowing_add(other.low);
        let (high, high_carry) = self.high.overflowing_add(other.high);
        let (high, carry_out) = high.overflowing_add(u64::from(carry));
        (U128 { high, low }, high_carry || carry_out)
    }

    /// Subtracts with borrow from the high half into the low half.
    /// The flag is set when `other` is larger than `self`.
    pub fn overflowing_sub(self, other: Self) -> (Self, bool) {
        let (low, borrow) = self.low.overflowing_sub(other.low);
        let (high, high_borrow) = self.high.overflowing_sub(other.high);
        let (high, borrow_out) = high.overflowing_sub(u64::from(borrow));
        (U128 { high, low }, high_borrow || borrow_out)
    }

    pub fn checked_add(self, other: Self) -> Result<Self> {
        match self.overflowing_add(other) {
            (sum, false) => Ok(sum),
            (_, true) => Err(overflow("addition", self, other)),
        }
    }

    pub fn checked_sub(self, other: Self) -> Result<Self> {
        match self.overflowing_sub(other) {
            (difference, false) => Ok(difference),
            (_, true) => Err(overflow("subtraction", self, other)),
        }
    }

    /// Schoolbook multiplication over the 64-bit halves.
    pub fn checked_mul(self, other: Self) -> Result<Self> {
        if self.high != 0 && other.high != 0 {
            return Err(overflow("multiplication", self, other));
        }

        let low_product = u128::from(self.low) * u128::from(other.low);
        // At most one of these terms is non-zero.
        let cross = u128::from(self.high) * u128::from(other.low)
            + u128::from(self.low) * u128::from(other.high);
        let cross = u64::try_from(cross).map_err(|_| overflow("multiplication", self, other))?;

        let (high, carry) = ((low_product >> 64) as u64).overflowing_add(cross);
        if carry {
            return Err(overflow("multiplication", self, other));
        }
        Ok(U128 {
            high,
            low: low_product as u64,
        })
    }
}

fn overflow(operation: &'static str, lhs: U128, rhs: U128) -> AdderError {
    debug!("U128 {} overflow: {} and {}", operation, lhs, rhs);
    AdderError::Overflow { operation }
}

impl Add for U128 {
    type Output = Result<U128>;

    fn add(self, other: Self) -> Self::Output {
        self.checked_add(other)
    }
}

impl Sub for U128 {
    type Output = Result<U128>;

    fn sub(self, other: Self) -> Self::Output {
        self.checked_sub(other)
    }
}

impl Mul for U128 {
    type Output = Result<U128>;

    fn mul(self, other: Self) -> Self::Output {
        self.checked_mul(other)
    }
}

impl fmt::Debug for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U128({:b} {:b})", self.high, self.low)
    }
}

impl fmt::Display for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u128::from(*self))
    }
}

impl From<u128> for U128 {
    fn from(value: u128) -> Self {
        U128 {
            high: (value >> 64) as u64,
            low: value as u64,
        }
    }
}

impl From<U128> for u128 {
    fn from(value: U128) -> Self {
        (u128::from(value.high) << 64) | u128::from(value.low)
    }
}

macro_rules! from_narrow {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U128 {
                fn from(value: $t) -> Self {
                    U128 {
                        high: 0,
                        low: value as u64,
                    }
                }
            }
        )*
    };
}

from_narrow!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_add() -> Result<()> {
        let a = U128::from(10u64);
        let b = U128::from(20u8);
        let c = (a + b)?;
        assert_eq!(c.low(), 30);
        assert_eq!(c.high(), 0);
        Ok(())
    }

    #[test]
    fn test_add_carries_into_high_half() -> Result<()> {
        let a = U128::from(u64::MAX);
        let b = U128::from(1usize);
        let c = (a + b)?;
        assert_eq!(c.low(), 0);
        assert_eq!(c.high(), 1);
        Ok(())
    }

    #[test]
    fn test_add_overflow() {
        let a = U128::from(u128::MAX);
        let d = (a + a).and_then(|b| b + a).and_then(|c| c + a);
        assert_eq!(
            d,
            Err(AdderError::Overflow {
                operation: "addition"
            })
        );
        assert_eq!(U128::MAX.overflowing_add(U128::from(1u8)), (U128::ZERO, true));
    }

    #[test]
    fn test_sub() -> Result<()> {
        let a = U128::from(20u64);
        let b = U128::from(10u8);
        let c = (a - b)?;
        assert_eq!(c.low(), 10);
        assert_eq!(c.high(), 0);
        Ok(())
    }

    #[test]
    fn test_sub_borrows_from_high_half() -> Result<()> {
        let a = U128::from_parts(1, 0);
        let c = (a - U128::from(1u8))?;
        assert_eq!(c, U128::from(u64::MAX));
        Ok(())
    }

    #[test]
    fn test_sub_overflow() {
        let a = U128::from(10u64);
        let b = U128::from(20u8);
        assert_eq!(
            a - b,
            Err(AdderError::Overflow {
                operation: "subtraction"
            })
        );
        // The wrapped value matches two's complement.
        assert_eq!(a.overflowing_sub(b), (U128::from_parts(u64::MAX, u64::MAX - 9), true));
    }

    #[test]
    fn test_mul() -> Result<()> {
        let a = U128::from(10u64);
        let b = U128::from(20u8);
        let c = (a * b)?;
        assert_eq!(c.low(), 200);
        assert_eq!(c.high(), 0);
        Ok(())
    }

    #[test]
    fn test_mul_beyond_64_bits() -> Result<()> {
        let a = U128::from(u64::MAX);
        let b = U128::from(2usize);
        let c = (a * b)?;
        assert_eq!(c.low(), u64::MAX - 1);
        assert_eq!(c.high(), 1);
        Ok(())
    }

    #[test]
    fn test_mul_overflow() {
        let a = U128::from_parts(1, 0);
        assert_eq!(
            a * a,
            Err(AdderError::Overflow {
                operation: "multiplication"
            })
        );
        assert!((U128::from_parts(1, 1) * U128::from(u64::MAX)).is_ok());
        assert!((U128::from_parts(u64::MAX, 0) * U128::from(2u8)).is_err());
        assert!((U128::MAX * U128::from(2u8)).is_err());
    }

    #[test]
    fn test_display_and_debug() {
        let a = U128::from_parts(1, 5);
        assert_eq!(a.to_string(), "18446744073709551621");
        assert_eq!(format!("{:?}", a), "U128(1 101)");
        assert_eq!(U128::default(), U128::ZERO);
        assert_eq!(U128::MAX.to_string(), u128::MAX.to_string());
    }

    #[test]
    fn test_random_ops_match_primitive_u128() {
        let mut rng = StdRng::seed_from_u64(128);
        for _ in 0..1000 {
            let x: u128 = rng.gen::<u128>() >> rng.gen_range(0..128u32);
            let y: u128 = rng.gen::<u128>() >> rng.gen_range(0..128u32);
            let (a, b) = (U128::from(x), U128::from(y));

            assert_eq!((a + b).ok().map(u128::from), x.checked_add(y));
            assert_eq!((a - b).ok().map(u128::from), x.checked_sub(y));
            assert_eq!((a * b).ok().map(u128::from), x.checked_mul(y));
        }
    }
}
