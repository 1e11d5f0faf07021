// this_file: crates/glyphwork-core/src/fixed.rs

//! 26.6 fixed-point coordinates.
//!
//! Font engines hand out outline points and advances as 32-bit integers
//! with six fractional bits. `F26Dot6` keeps that representation intact so
//! raw engine arrays can be decoded without guessing at the scale.

use std::ops::{Add, Neg, Sub};

/// A 26.6 fixed-point value: 26 integer bits, 6 fractional bits.
///
/// ```rust
/// use glyphwork_core::fixed::F26Dot6;
///
/// let x = F26Dot6::from_int(5);      // 5.0
/// let y = F26Dot6::from_float(5.5);  // 5 + 32/64
/// assert_eq!(y.raw() - x.raw(), 32);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct F26Dot6(i32);

impl F26Dot6 {
    /// Number of fractional bits
    pub const FRAC_BITS: u32 = 6;

    /// Mask selecting the fractional bits
    pub const FRAC_MASK: i32 = (1 << Self::FRAC_BITS) - 1;

    /// 1.0
    pub const ONE: F26Dot6 = F26Dot6(1 << Self::FRAC_BITS);

    /// 0.0
    pub const ZERO: F26Dot6 = F26Dot6(0);

    /// 0.5
    pub const HALF: F26Dot6 = F26Dot6(1 << (Self::FRAC_BITS - 1));

    /// Wrap a raw 26.6 value exactly as the engine stores it
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        F26Dot6(raw)
    }

    /// The raw 26.6 bits
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn from_int(x: i32) -> Self {
        F26Dot6(x << Self::FRAC_BITS)
    }

    /// Truncates toward zero, like the engine's own float conversion.
    #[inline]
    pub fn from_float(x: f32) -> Self {
        F26Dot6((x * 64.0) as i32)
    }

    /// Integer part, rounded toward negative infinity
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> Self::FRAC_BITS
    }

    /// Round to the nearest integer, halves toward positive infinity
    #[inline]
    pub const fn to_int_round(self) -> i32 {
        (self.0 + Self::HALF.0) >> Self::FRAC_BITS
    }

    /// Fractional part in 1/64 units
    #[inline]
    pub const fn frac(self) -> i32 {
        self.0 & Self::FRAC_MASK
    }

    /// Exact for every raw value with magnitude below 2^24.
    #[inline]
    pub fn to_float(self) -> f32 {
        self.0 as f32 / 64.0
    }
}

impl Add for F26Dot6 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        F26Dot6(self.0 + other.0)
    }
}

impl Sub for F26Dot6 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        F26Dot6(self.0 - other.0)
    }
}

impl Neg for F26Dot6 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        F26Dot6(-self.0)
    }
}

impl From<i32> for F26Dot6 {
    #[inline]
    fn from(x: i32) -> Self {
        Self::from_int(x)
    }
}

impl From<F26Dot6> for f32 {
    #[inline]
    fn from(x: F26Dot6) -> f32 {
        x.to_float()
    }
}
