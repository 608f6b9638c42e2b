use std::ops::Neg;

use num_traits::{PrimInt, Zero};

use crate::error::AlignError;
use crate::machine::{Ub4, PTR_SIZE};

#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

/// Negating the most negative value of a signed integer overflows and panics
/// in debug builds.
#[inline]
pub fn abs<T: PartialOrd + Zero + Neg<Output = T>>(a: T) -> T {
    if a > T::zero() {
        a
    } else {
        -a
    }
}

/// The sum wraps like unsigned arithmetic does, which can only happen on
/// 32-bit targets for sizes within `PTR_SIZE - 1` of `Ub4::MAX`.
#[inline]
pub const fn align(a: Ub4) -> usize {
    (a as usize).wrapping_add(PTR_SIZE - 1) & !(PTR_SIZE - 1)
}

/// Panics if `alignment` is not positive, or on overflow in debug builds.
pub fn align_to<T: PrimInt>(addr: T, alignment: T) -> T {
    assert!(alignment > T::zero(), "alignment must be positive");
    let rem = addr % alignment;
    if rem > T::zero() {
        addr + (alignment - rem)
    } else {
        // negative addr: rounding toward zero
        addr - rem
    }
}

pub fn checked_align_to<T: PrimInt>(addr: T, alignment: T) -> Result<T, AlignError> {
    if alignment <= T::zero() {
        return Err(AlignError::BadAlignment);
    }
    let rem = addr % alignment;
    if rem > T::zero() {
        addr.checked_add(&(alignment - rem)).ok_or(AlignError::Overflow)
    } else {
        Ok(addr - rem)
    }
}
