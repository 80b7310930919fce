use super::*;

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> Float<EXP, MANT, FINITE> {
  /// Positive zero (`+0`).
  pub const ZERO: Self = Self(0);

  /// Negative zero (`-0`).
  pub const NEG_ZERO: Self = Self(Self::SIGN_MASK);

  /// One (`1`), the multiplicative identity element.
  pub const ONE: Self = Self::from_fields(false, Self::BIAS as u32, 0);

  /// Not-a-number.
  ///
  /// For a finite format this is the single NaN, the all-ones bit pattern (so its sign bit is
  /// set). Otherwise it is the all-ones exponent field with an all-ones mantissa and a clear sign
  /// bit; use [`Self::with_sign`] for the negative one.
  pub const NAN: Self =
    if FINITE {
      Self(Self::MASK)
    } else {
      Self::from_fields(false, Self::EXP_FIELD_MAX, Self::MANT_MASK)
    };

  /// Largest finite value.
  //
  // The all-ones mantissa under the top exponent field; in a finite format that's the pattern
  // just below the NaN sentinel with the sign bit clear (`0x7f` for e4m3, i.e. 480).
  pub const MAX: Self = Self::from_fields(false, (Self::MAX_EXP + Self::BIAS) as u32, Self::MANT_MASK);

  /// Smallest positive *normal* value, 2 <sup>[`Self::MIN_EXP`]</sup>.
  pub const MIN_POSITIVE: Self = Self::from_fields(false, 1, 0);

  /// Smallest positive subnormal value, 2 <sup>[`Self::MIN_EXP`] - `MANT`</sup>.
  pub const MIN_POSITIVE_SUBNORMAL: Self = Self::from_fields(false, 0, 1);
}

impl<
  const EXP: u32,
  const MANT: u32,
> Float<EXP, MANT, false> {
  /// Positive infinity.
  pub const INFINITY: Self = Self::from_fields(false, Self::EXP_FIELD_MAX, 0);

  /// Negative infinity.
  pub const NEG_INFINITY: Self = Self::from_fields(true, Self::EXP_FIELD_MAX, 0);
}
