use super::*;

impl<
  const EXP: u32,
  const MANT: u32,
> Float<EXP, MANT, false> {
  /// Convert a fixed-point `sum` in the frame of `anchor` back into a float, i.e. round
  /// `sum × 2^(anchor - 31)`.
  ///
  ///   - A zero sum gives `+0` (the sign of a zero sum is not known).
  ///   - Otherwise the exponent is `msb + anchor - 31`, where `msb` is the index of the most
  ///     significant 1 of `|sum|`. If that's too small for a normal number, the result is signed
  ///     zero, *before* any rounding.
  ///   - Otherwise, the bits below the msb are [rounded](RoundFrom#rounding) into the mantissa,
  ///     to nearest even; a carry out of the mantissa bumps the exponent, which may then
  ///     saturate to infinity.
  ///
  /// ```
  /// # use npu_softfloat::*;
  /// let anchor = Anchor::from_bits(127 + 31);  // Units of 1
  /// assert_eq!(bf16::requantize(-5, anchor).to_bits(), 0xc0a0);
  /// assert_eq!(bf16::requantize(257, anchor).to_bits(), 0x4380);  // 256, ties to even
  /// ```
  pub fn requantize(sum: i32, anchor: Anchor) -> Self {
    if sum == 0 {
      return Self::ZERO
    }
    let sign = sum < 0;
    let magnitude = u64::from(sum.unsigned_abs());
    let decoded = Decoded::normalise(sign, magnitude, anchor.exp() - 31);
    if decoded.exp + Self::BIAS <= 0 {
      Self::ZERO.with_sign(sign)
    } else {
      Self::encode_round(decoded, false)
    }
  }
}

impl<
  const EXP: u32,
  const MANT: u32,
> RoundFrom<&Accumulator> for Float<EXP, MANT, false> {
  /// [Requantize](Float::requantize) the accumulator's sum.
  fn round_from(value: &Accumulator) -> Self {
    Self::requantize(value.sum(), value.anchor())
  }
}
