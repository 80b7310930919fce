use super::*;

impl<
  const EXP: u32,
  const MANT: u32,
> Float<EXP, MANT, false> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that's the result of multiplying `x`
  /// and `y`, plus the sticky bit.
  ///
  /// `x` and `y` have to be normalised.
  #[inline]
  pub(crate) fn mul_kernel(x: Decoded, y: Decoded) -> (Decoded, bool) {
    // Multiplying two numbers in the form `frac × 2^exp` is the easy one. We have
    //
    //   (x.frac / 2^63 × 2^x.exp) × (y.frac / 2^63 × 2^y.exp)
    //   = (x.frac × y.frac) / 2^126 × 2^(x.exp + y.exp)
    //
    // Both fracs are in [2^63, 2^64[, so their 128-bit product is in [2^126, 2^128[: its leading
    // one is either at bit 127 or at bit 126. In the former case (e.g. 1.5 × 1.5 = 2.25) the
    // product is in [2, 4[ and the exponent goes up by one; in the latter (e.g. 1 × 1 = 1) we
    // shift left once to put the leading one at bit 127. Then the top 64 bits are the new `frac`
    // and the low 64 go to `sticky`.
    //
    // For the formats in this crate the significands are at most 24 bits, so the product is at
    // most 48 bits and `sticky` is always false; the rounding happens entirely in `encode_round`.
    debug_assert!(x.is_normalised() && y.is_normalised());
    let mul = u128::from(x.frac) * u128::from(y.frac);
    let overflow = (mul >> 127) as u32;
    let mul = mul << (1 - overflow);
    let frac = (mul >> 64) as u64;
    let sticky = mul as u64 != 0;
    let exp = x.exp + y.exp + overflow as i32;
    (Decoded { sign: x.sign != y.sign, frac, exp }, sticky)
  }

  /// Multiply two floats, the way the datapath does:
  ///
  ///   - NaN × anything is NaN.
  ///   - Infinity × (zero or subnormal) is NaN; infinity × anything else is infinity.
  ///   - Zero or subnormal × anything else is zero. Subnormal operands are flushed, not
  ///     multiplied.
  ///   - Otherwise, the exact product is [rounded](RoundFrom#rounding): to nearest even,
  ///     saturating to infinity on overflow and flushing to zero on underflow.
  ///
  /// The sign of every non-NaN result is the XOR of the operand signs.
  pub(crate) fn mul(self, other: Self) -> Self {
    let sign = self.sign() != other.sign();
    if self.is_nan() || other.is_nan() {
      Self::NAN
    } else if self.is_infinite() || other.is_infinite() {
      if self.exponent() == 0 || other.exponent() == 0 {
        Self::NAN
      } else {
        Self::INFINITY.with_sign(sign)
      }
    } else if self.exponent() == 0 || other.exponent() == 0 {
      Self::ZERO.with_sign(sign)
    } else {
      let a = self.decode_regular();
      let b = other.decode_regular();
      let (result, sticky) = Self::mul_kernel(a, b);
      Self::encode_round(result, sticky)
    }
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
