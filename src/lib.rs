//! Ripple-carry addition of binary numbers written as strings of '0' and '1',
//! plus a fixed-width 128-bit integer with checked carry and borrow arithmetic.

pub mod arithmetic;
pub mod digits;
pub mod error;
pub mod wide;

pub use arithmetic::{add, BinarySum};
pub use error::{AdderError, Operand, Result};
pub use wide::U128;
