//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the magnitude buffers,
//! so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb, and `0`
//! is the least significant limb. A magnitude is normal when it has no
//! trailing zero limbs; the empty buffer is the unique encoding of zero.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::mem;

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except, it stores 32-bit
//  or 64-bit numbers instead. The width is picked per target by build.rs,
//  based on whether the architecture has native wide multiplication.

// 32-BIT LIMB
#[cfg(limb_width_32)]
pub(crate) type Limb = u32;

#[cfg(limb_width_32)]
type Wide = u64;

// 64-BIT LIMB
#[cfg(limb_width_64)]
pub(crate) type Limb = u64;

#[cfg(limb_width_64)]
type Wide = u128;

/// Bits in a single limb.
pub(crate) const LIMB_BITS: usize = mem::size_of::<Limb>() * 8;

/// Largest power of ten that fits in a limb.
#[cfg(limb_width_32)]
pub(crate) const DECIMAL_BASE: Limb = 1_000_000_000;

#[cfg(limb_width_64)]
pub(crate) const DECIMAL_BASE: Limb = 10_000_000_000_000_000_000;

/// Number of decimal digits in `DECIMAL_BASE`.
#[cfg(limb_width_32)]
pub(crate) const DECIMAL_DIGITS: usize = 9;

#[cfg(limb_width_64)]
pub(crate) const DECIMAL_DIGITS: usize = 19;

/// Powers of ten up to and including `DECIMAL_BASE`.
#[cfg(limb_width_32)]
pub(crate) const POW10: [Limb; DECIMAL_DIGITS + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

#[cfg(limb_width_64)]
pub(crate) const POW10: [Limb; DECIMAL_DIGITS + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

// CONVERSIONS
// -----------

/// Split a native integer into limbs, in little-endian order.
pub(crate) fn from_u128(mut x: u128) -> Vec<Limb> {
    let mut limbs = Vec::new();
    while x != 0 {
        limbs.push(x as Limb);
        x >>= LIMB_BITS;
    }
    limbs
}

/// Assemble a normal magnitude back into a native integer.
///
/// Returns `None` when the magnitude does not fit in 128 bits.
pub(crate) fn to_u128(x: &[Limb]) -> Option<u128> {
    if x.len() > 128 / LIMB_BITS {
        return None;
    }
    let mut acc: u128 = 0;
    for &xi in x.iter().rev() {
        acc = (acc << LIMB_BITS) | xi as u128;
    }
    Some(acc)
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn add(x: Limb, y: Limb) -> (Limb, bool) {
        x.overflowing_add(y)
    }

    /// AddAssign two small integers and return if overflow happens.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb) -> bool {
        let t = add(*x, y);
        *x = t.0;
        t.1
    }

    // SUBTRACTION

    /// Subtract two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn sub(x: Limb, y: Limb) -> (Limb, bool) {
        x.overflowing_sub(y)
    }

    /// SubAssign two small integers and return if overflow happens.
    #[inline]
    pub fn isub(x: &mut Limb, y: Limb) -> bool {
        let t = sub(*x, y);
        *x = t.0;
        t.1
    }

    // MULTIPLICATION

    /// Multiply two small integers (with carry).
    ///
    /// Returns the (low, high) components. Cannot overflow, as long as the
    /// wide type is twice the limb width, since the following always holds:
    /// `Wide::MAX - (Limb::MAX * Limb::MAX) >= Limb::MAX`.
    #[inline]
    pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        let z: Wide = x as Wide * y as Wide + carry as Wide;
        (z as Limb, (z >> LIMB_BITS) as Limb)
    }

    /// MulAssign two small integers (with carry) and return the overflow.
    #[inline]
    pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let t = mul(*x, y, carry);
        *x = t.0;
        t.1
    }

    /// Divide a two-limb value by a single limb.
    ///
    /// Returns the (quotient, remainder) components. The quotient fits in a
    /// single limb as long as `hi < divisor`.
    #[inline]
    pub fn div_wide(hi: Limb, lo: Limb, divisor: Limb) -> (Limb, Limb) {
        debug_assert!(hi < divisor);

        let lhs = ((hi as Wide) << LIMB_BITS) | lo as Wide;
        let rhs = divisor as Wide;
        ((lhs / rhs) as Limb, (lhs % rhs) as Limb)
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    // ADDITION

    /// Implied AddAssign implementation for adding a small integer to bigint.
    ///
    /// Allows us to choose a start-index in x to store, to allow incrementing
    /// from a non-zero start.
    pub fn iadd_impl(x: &mut Vec<Limb>, y: Limb, xstart: usize) {
        if x.len() <= xstart {
            x.push(y);
        } else {
            // Initial add
            let mut carry = scalar::iadd(&mut x[xstart], y);

            // Increment until overflow stops occurring.
            let mut size = xstart + 1;
            while carry && size < x.len() {
                carry = scalar::iadd(&mut x[size], 1);
                size += 1;
            }

            // If we overflowed the buffer entirely, need to add 1 to the end
            // of the buffer.
            if carry {
                x.push(1);
            }
        }
    }

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut Vec<Limb>, y: Limb) {
        iadd_impl(x, y, 0);
    }

    // SUBTRACTION

    /// SubAssign small integer to bigint.
    /// Does not do overflowing subtraction.
    pub fn isub_impl(x: &mut Vec<Limb>, y: Limb, xstart: usize) {
        debug_assert!(x.len() > xstart && (x[xstart] >= y || x.len() > xstart + 1));

        // Initial subtraction
        let mut carry = scalar::isub(&mut x[xstart], y);

        // Increment until overflow stops occurring.
        let mut size = xstart + 1;
        while carry && size < x.len() {
            carry = scalar::isub(&mut x[size], 1);
            size += 1;
        }
        normalize(x);
    }

    // MULTIPLICATION

    /// MulAssign small integer to bigint.
    pub fn imul(x: &mut Vec<Limb>, y: Limb) {
        // Multiply iteratively over all elements, adding the carry each time.
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            carry = scalar::imul(xi, y, carry);
        }

        // Overflow of value, add to end.
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Mul small integer to bigint.
    #[inline]
    pub fn mul(x: &[Limb], y: Limb) -> Vec<Limb> {
        let mut z = x.to_vec();
        imul(&mut z, y);
        z
    }

    // DIVISION

    /// DivAssign bigint by small integer, returning the remainder.
    ///
    /// The quotient replaces `x` and is normalized.
    pub fn idiv_rem(x: &mut Vec<Limb>, y: Limb) -> Limb {
        debug_assert!(y != 0);

        let mut rem: Limb = 0;
        for xi in x.iter_mut().rev() {
            let t = scalar::div_wide(rem, *xi, y);
            *xi = t.0;
            rem = t.1;
        }
        normalize(x);
        rem
    }

    // SHL

    /// Shift-left bits inside a buffer.
    ///
    /// Assumes `n < LIMB_BITS`, IE, internally shifting bits.
    pub fn ishl_bits(x: &mut Vec<Limb>, n: usize) {
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        // Internally, for each item, we shift left by n, and add the previous
        // right shifted limb-bits.
        let rshift = LIMB_BITS - n;
        let lshift = n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi <<= lshift;
            *xi |= prev >> rshift;
            prev = tmp;
        }

        // Always push the carry, even if it creates a non-normal result.
        let carry = prev >> rshift;
        if carry != 0 {
            x.push(carry);
        }
    }

    // SHR

    /// Shift-right bits inside a buffer.
    ///
    /// Assumes `n < LIMB_BITS`, IE, internally shifting bits.
    pub fn ishr_bits(x: &mut Vec<Limb>, n: usize) {
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        let lshift = LIMB_BITS - n;
        let rshift = n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut().rev() {
            let tmp = *xi;
            *xi >>= rshift;
            *xi |= prev << lshift;
            prev = tmp;
        }
        normalize(x);
    }

    // NORMALIZE

    /// Normalize the container by popping any trailing zero limbs.
    #[inline]
    pub fn normalize(x: &mut Vec<Limb>) {
        while x.last() == Some(&0) {
            x.pop();
        }
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// Both magnitudes must be normal; the limb count then decides before
    /// any limb is inspected.
    pub fn compare(x: &[Limb], y: &[Limb]) -> Ordering {
        if x.len() != y.len() {
            return x.len().cmp(&y.len());
        }
        let iter = x.iter().rev().zip(y.iter().rev());
        for (&xi, &yi) in iter {
            if xi != yi {
                return xi.cmp(&yi);
            }
        }
        Ordering::Equal
    }

    /// Check if x is greater than or equal to y.
    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) != Ordering::Less
    }

    // ADDITION

    /// Implied AddAssign implementation for bigints.
    ///
    /// Allows us to choose a start-index in x to store, so we can avoid
    /// padding the buffer with zeros when not needed, optimized for vectors.
    pub fn iadd_impl(x: &mut Vec<Limb>, y: &[Limb], xstart: usize) {
        // The effective x buffer is from `xstart..x.len()`, so we need to treat
        // that as the current range. If the effective y buffer is longer, need
        // to resize to that, + the start index.
        if y.len() > x.len() - xstart {
            x.resize(y.len() + xstart, 0);
        }

        // Iteratively add elements from y to x.
        let mut carry = false;
        for (xi, yi) in x[xstart..].iter_mut().zip(y.iter()) {
            // Only one op of the two can overflow, since we added at max
            // Limb::MAX + Limb::MAX. Add the previous carry, and store the
            // current carry for the next.
            let mut tmp = scalar::iadd(xi, *yi);
            if carry {
                tmp |= scalar::iadd(xi, 1);
            }
            carry = tmp;
        }

        // Overflow from the previous bit.
        if carry {
            small::iadd_impl(x, 1, y.len() + xstart);
        }
    }

    /// AddAssign bigint to bigint.
    #[inline]
    pub fn iadd(x: &mut Vec<Limb>, y: &[Limb]) {
        iadd_impl(x, y, 0);
    }

    /// Add bigint to bigint.
    #[inline]
    pub fn add(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let mut z = x.to_vec();
        iadd(&mut z, y);
        z
    }

    // SUBTRACTION

    /// Implied SubAssign implementation for bigints.
    ///
    /// The effective x buffer from `xstart..` must be at least y.
    pub fn isub_impl(x: &mut Vec<Limb>, y: &[Limb], xstart: usize) {
        // Iteratively subtract elements of y from x.
        let mut carry = false;
        for (xi, yi) in x[xstart..].iter_mut().zip(y.iter()) {
            // Only one op of the two can underflow. Subtract the previous
            // borrow, and store the current borrow for the next.
            let mut tmp = scalar::isub(xi, *yi);
            if carry {
                tmp |= scalar::isub(xi, 1);
            }
            carry = tmp;
        }

        if carry {
            small::isub_impl(x, 1, y.len() + xstart);
        } else {
            small::normalize(x);
        }
    }

    /// SubAssign bigint to bigint.
    #[inline]
    pub fn isub(x: &mut Vec<Limb>, y: &[Limb]) {
        debug_assert!(greater_equal(x, y));
        isub_impl(x, y, 0);
    }

    /// Subtract bigint from bigint, requiring `x >= y`.
    #[inline]
    pub fn sub(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let mut z = x.to_vec();
        isub(&mut z, y);
        z
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm.
    ///
    /// Slow, naive algorithm, using limb-bit bases and just shifting left for
    /// each iteration. This could be optimized with numerous other algorithms,
    /// but it's extremely simple, and works in O(n*m) time. Each iteration,
    /// of which there are `m` iterations, requires `n` multiplications, and
    /// `n` additions, or grade-school multiplication.
    pub fn long_mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        if x.is_empty() || y.is_empty() {
            return Vec::new();
        }

        // Using the immutable value, multiply by all the scalars in y, using
        // the algorithm defined above. Use a single buffer to avoid
        // frequent reallocations. Handle the first case to avoid a redundant
        // addition, since we know y.len() >= 1.
        let mut z = small::mul(x, y[0]);
        z.resize(x.len() + y.len(), 0);

        // Handle the iterative cases.
        for (i, &yi) in y[1..].iter().enumerate() {
            let zi = small::mul(x, yi);
            iadd_impl(&mut z, &zi, i + 1);
        }

        small::normalize(&mut z);

        z
    }

    // DIVISION

    /// Divide bigint by bigint, returning the (quotient, remainder) pair.
    ///
    /// The divisor must be non-zero; the caller surfaces that error. Uses
    /// short division for single-limb divisors and Knuth's Algorithm D
    /// otherwise: normalize so the divisor's top bit is set, then guess each
    /// quotient digit from the two top limbs of the running dividend and the
    /// top limb of the divisor, correcting the guess by iterated subtraction.
    pub fn div_rem(u: &[Limb], d: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
        debug_assert!(!d.is_empty());

        if u.is_empty() {
            return (Vec::new(), Vec::new());
        }
        if d.len() == 1 {
            let mut q = u.to_vec();
            let rem = small::idiv_rem(&mut q, d[0]);
            let r = if rem == 0 { Vec::new() } else { alloc::vec![rem] };
            return (q, r);
        }
        // Required or the q_len calculation below can underflow.
        match compare(u, d) {
            Ordering::Less => return (Vec::new(), u.to_vec()),
            Ordering::Equal => return (alloc::vec![1], Vec::new()),
            Ordering::Greater => {}
        }

        // Normalize the arguments so the highest bit in the highest limb of
        // the divisor is set: the main loop uses that limb for generating
        // guesses, so we want it to be the largest number we can efficiently
        // divide by.
        let shift = d[d.len() - 1].leading_zeros() as usize;
        let mut a = u.to_vec();
        small::ishl_bits(&mut a, shift);
        let mut b = d.to_vec();
        small::ishl_bits(&mut b, shift);

        // The algorithm works by incrementally calculating guesses, q0, for
        // part of the quotient. Once we have any q0 such that
        // `q0 * b <= a[j..]`, we can set `q[j..] += q0` and `a[j..] -= q0 * b`
        // and move to the next digit.
        //
        // q0 is calculated by dividing the top limbs of a by the top limb of
        // b, which gives a guess that is close to, but possibly greater than,
        // the true digit; iterated subtraction corrects the overshoot.
        let bn = b[b.len() - 1];
        let q_len = a.len() - b.len() + 1;
        let mut q = alloc::vec![0; q_len];

        for j in (0..q_len).rev() {
            // The digits below `j + b.len() - 1` cannot influence digit j of
            // the quotient, so the guess only reads a from that offset up.
            let offset = j + b.len() - 1;
            if offset >= a.len() {
                continue;
            }

            let mut q0 = a[offset..].to_vec();
            small::idiv_rem(&mut q0, bn);
            let mut prod = long_mul(&b, &q0);

            while compare(&prod, &a[j..]) == Ordering::Greater {
                small::isub_impl(&mut q0, 1, 0);
                isub(&mut prod, &b);
            }

            iadd_impl(&mut q, &q0, j);
            isub_impl(&mut a, &prod, j);
        }

        debug_assert!(compare(&a, &b) == Ordering::Less);

        small::normalize(&mut q);
        small::ishr_bits(&mut a, shift);
        (q, a)
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(limb_width_32)]
    fn from_u32(x: &[u32]) -> Vec<Limb> {
        x.to_vec()
    }

    #[cfg(limb_width_64)]
    fn from_u32(x: &[u32]) -> Vec<Limb> {
        let mut v = Vec::new();
        for xi in x.chunks(2) {
            match xi.len() {
                1 => v.push(xi[0] as u64),
                2 => v.push(((xi[1] as u64) << 32) | (xi[0] as u64)),
                _ => unreachable!(),
            }
        }
        small::normalize(&mut v);
        v
    }

    #[test]
    fn compare_test() {
        // Simple
        let x = from_u32(&[1]);
        let y = from_u32(&[2]);
        assert_eq!(large::compare(&x, &y), Ordering::Less);
        assert_eq!(large::compare(&x, &x), Ordering::Equal);
        assert_eq!(large::compare(&y, &x), Ordering::Greater);

        // Check asymmetric
        let x = from_u32(&[5, 1]);
        let y = from_u32(&[2]);
        assert_eq!(large::compare(&x, &y), Ordering::Greater);
        assert_eq!(large::compare(&y, &x), Ordering::Less);

        // Check when we use reverse ordering properly.
        let x = from_u32(&[5, 1, 9]);
        let y = from_u32(&[6, 2, 8]);
        assert_eq!(large::compare(&x, &y), Ordering::Greater);
        assert_eq!(large::compare(&y, &x), Ordering::Less);
    }

    #[test]
    fn iadd_small_test() {
        // Overflow check (single).
        let mut x = from_u32(&[4294967295]);
        small::iadd(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // No overflow, single value
        let mut x = from_u32(&[5]);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[12]));

        // Single carry, internal overflow
        let mut x = from_u128(0x80000000FFFFFFFF);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[6, 0x80000001]));

        // Double carry, overflow
        let mut x = from_u128(0xFFFFFFFFFFFFFFFF);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[6, 0, 1]));
    }

    #[test]
    fn imul_small_test() {
        // No overflow check, 1-int.
        let mut x = from_u32(&[5]);
        small::imul(&mut x, 7);
        assert_eq!(x, from_u32(&[35]));

        // Overflow, 1 carry.
        let mut x = from_u32(&[0x33333334]);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // Overflow, 2 carries.
        let mut x = from_u128(0x3333333333333334);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 0, 1]));
    }

    #[test]
    fn idiv_rem_small_test() {
        // 1-limb quotient, no remainder.
        let mut x = from_u32(&[35]);
        assert_eq!(small::idiv_rem(&mut x, 7), 0);
        assert_eq!(x, from_u32(&[5]));

        // Remainder and shrinking quotient.
        let mut x = from_u128(0x100000001);
        assert_eq!(small::idiv_rem(&mut x, 2), 1);
        assert_eq!(x, from_u32(&[0x80000000]));

        // Quotient of zero.
        let mut x = from_u32(&[3]);
        assert_eq!(small::idiv_rem(&mut x, 5), 3);
        assert_eq!(x, Vec::new());
    }

    #[test]
    fn iadd_large_test() {
        // Overflow, both ends
        let mut x = from_u32(&[0xFFFFFFFF, 6]);
        let y = from_u32(&[1, 1]);
        large::iadd(&mut x, &y);
        assert_eq!(x, from_u32(&[0, 8]));

        // Internal overflow
        let mut x = from_u32(&[0xFFFFFFFE, 0xFFFFFFFF]);
        let y = from_u32(&[2, 0]);
        large::iadd(&mut x, &y);
        assert_eq!(x, from_u32(&[0, 0, 1]));
    }

    #[test]
    fn isub_large_test() {
        // Simple
        let mut x = from_u32(&[4, 4]);
        let y = from_u32(&[2, 1]);
        large::isub(&mut x, &y);
        assert_eq!(x, from_u32(&[2, 3]));

        // Borrow propagation to the top limb.
        let mut x = from_u32(&[0, 0, 1]);
        let y = from_u32(&[1]);
        large::isub(&mut x, &y);
        assert_eq!(x, from_u32(&[0xFFFFFFFF, 0xFFFFFFFF]));

        // Result of zero.
        let mut x = from_u32(&[5, 7]);
        let y = from_u32(&[5, 7]);
        large::isub(&mut x, &y);
        assert_eq!(x, Vec::new());
    }

    #[test]
    fn long_mul_test() {
        // Zero operand.
        assert_eq!(large::long_mul(&from_u32(&[5]), &[]), Vec::new());

        // Carry into a fresh high limb.
        let x = from_u32(&[0xFFFFFFFF]);
        let z = large::long_mul(&x, &x);
        assert_eq!(z, from_u32(&[1, 0xFFFFFFFE]));

        // Multi-limb schoolbook product: (2^64 + 1) * (2^32 + 1).
        let x = from_u32(&[1, 0, 1]);
        let y = from_u32(&[1, 1]);
        let z = large::long_mul(&x, &y);
        assert_eq!(z, from_u32(&[1, 1, 1, 1]));
    }

    #[test]
    fn div_rem_test() {
        // Divisor larger than dividend.
        let (q, r) = large::div_rem(&from_u32(&[5]), &from_u32(&[0, 1]));
        assert_eq!(q, Vec::new());
        assert_eq!(r, from_u32(&[5]));

        // Equal operands.
        let (q, r) = large::div_rem(&from_u32(&[7, 9]), &from_u32(&[7, 9]));
        assert_eq!(q, from_u32(&[1]));
        assert_eq!(r, Vec::new());

        // Single-limb divisor short path: (2^33 - 1) / (2^32 - 1) = 2 rem 1.
        let (q, r) = large::div_rem(&from_u128(0x1FFFFFFFF), &from_u32(&[0xFFFFFFFF]));
        assert_eq!(q, from_u32(&[2]));
        assert_eq!(r, from_u32(&[1]));

        // Multi-limb divisor: 2^128 / 2^64 = 2^64.
        let (q, r) = large::div_rem(&from_u32(&[0, 0, 0, 0, 1]), &from_u32(&[0, 0, 1]));
        assert_eq!(q, from_u32(&[0, 0, 1]));
        assert_eq!(r, Vec::new());

        // Multi-limb divisor with remainder: (2^128 + 5) / 2^64.
        let (q, r) = large::div_rem(&from_u32(&[5, 0, 0, 0, 1]), &from_u32(&[0, 0, 1]));
        assert_eq!(q, from_u32(&[0, 0, 1]));
        assert_eq!(r, from_u32(&[5]));

        // Reconstruction: q * d + r == u on an awkward operand.
        let u = from_u32(&[0x12345678, 0x9ABCDEF0, 0x13579BDF, 0x2468ACE0]);
        let d = from_u32(&[0xFEDCBA98, 0x76543210]);
        let (q, r) = large::div_rem(&u, &d);
        let mut back = large::long_mul(&q, &d);
        large::iadd(&mut back, &r);
        assert_eq!(back, u);
        assert_eq!(large::compare(&r, &d), Ordering::Less);
    }

    #[test]
    fn shl_shr_test() {
        let mut big = from_u32(&[0xD2210408]);
        small::ishl_bits(&mut big, 5);
        assert_eq!(big, from_u32(&[0x44208100, 0x1A]));
        small::ishr_bits(&mut big, 5);
        assert_eq!(big, from_u32(&[0xD2210408]));
    }

    #[test]
    fn u128_round_trip_test() {
        assert_eq!(to_u128(&from_u128(0)), Some(0));
        assert_eq!(to_u128(&from_u128(u128::MAX)), Some(u128::MAX));
        assert_eq!(to_u128(&from_u128(1 << 64)), Some(1 << 64));

        // 2^128 needs five 32-bit (or three 64-bit) limbs; out of range.
        let mut too_big = from_u128(u128::MAX);
        small::iadd(&mut too_big, 1);
        assert_eq!(to_u128(&too_big), None);
    }
}
