use super::*;

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> Float<EXP, MANT, FINITE> {
  /// The size of this type in bits (`1 + EXP + MANT`).
  ///
  /// Note: this is the logical size; the bits are always stored in a `u32`.
  pub const BITS: u32 = {
    assert!(EXP >= 2, "A float needs at least 2 exponent bits");
    assert!(MANT >= 1, "A float needs at least 1 mantissa bit");
    assert!(
      1 + EXP + MANT <= u32::BITS,
      "Cannot represent a float wider than 32 bits",
    );
    1 + EXP + MANT
  };

  /// The number of exponent bits (i.e. parameter `EXP`).
  pub const EXP_BITS: u32 = EXP;

  /// The number of explicit mantissa bits (i.e. parameter `MANT`).
  pub const MANT_BITS: u32 = MANT;

  /// The exponent bias, `2^(EXP-1) - 1`.
  pub const BIAS: i32 = (1 << (EXP - 1)) - 1;

  /// The all-ones exponent field.
  pub(crate) const EXP_FIELD_MAX: u32 = (1 << EXP) - 1;

  /// Mask of the bits that make up a value of this type.
  pub(crate) const MASK: u32 = if Self::BITS == u32::BITS {u32::MAX} else {(1 << Self::BITS) - 1};

  pub(crate) const MANT_MASK: u32 = (1 << MANT) - 1;

  pub(crate) const SIGN_MASK: u32 = 1 << (EXP + MANT);

  /// The exponent of the smallest normal number, `1 - bias`. Subnormals share this exponent
  /// (but lack the hidden bit).
  pub const MIN_EXP: i32 = 1 - Self::BIAS;

  /// The exponent of the largest finite number. For a finite format the all-ones exponent field
  /// still holds normal numbers, so this is one higher than for the usual formats.
  pub const MAX_EXP: i32 = {
    let top_field = if FINITE {Self::EXP_FIELD_MAX} else {Self::EXP_FIELD_MAX - 1};
    top_field as i32 - Self::BIAS
  };

  /// Construct a float from its raw bit representation. Bits higher than the lowest
  /// [`Self::BITS`] are ignored.
  #[inline]
  pub const fn from_bits(bits: u32) -> Self {
    Self(bits & Self::MASK)
  }

  /// Return the raw bit representation of `self`, in the low [`Self::BITS`] bits of a `u32`.
  #[inline]
  pub const fn to_bits(self) -> u32 {
    self.0
  }

  /// Assemble a float from its three fields. Bits of `exponent` and `mantissa` beyond their
  /// widths are ignored.
  #[inline]
  pub const fn from_fields(sign: bool, exponent: u32, mantissa: u32) -> Self {
    let sign = if sign {Self::SIGN_MASK} else {0};
    let exponent = (exponent & Self::EXP_FIELD_MAX) << MANT;
    let mantissa = mantissa & Self::MANT_MASK;
    Self(sign | exponent | mantissa)
  }

  /// The sign bit, `true` if negative (including `-0` and negative NaNs).
  #[inline]
  pub const fn sign(self) -> bool {
    self.0 & Self::SIGN_MASK != 0
  }

  /// The raw (biased) exponent field.
  #[inline]
  pub const fn exponent(self) -> u32 {
    (self.0 >> MANT) & Self::EXP_FIELD_MAX
  }

  /// The raw mantissa field, without the hidden bit.
  #[inline]
  pub const fn mantissa(self) -> u32 {
    self.0 & Self::MANT_MASK
  }

  /// Return `self` with the sign bit set to `sign`.
  #[inline]
  pub const fn with_sign(self, sign: bool) -> Self {
    let magnitude = self.0 & !Self::SIGN_MASK;
    Self(if sign {magnitude | Self::SIGN_MASK} else {magnitude})
  }

  /// `true` for `+0` and `-0`.
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.0 & !Self::SIGN_MASK == 0
  }

  /// `true` for nonzero values with an exponent field of 0.
  #[inline]
  pub const fn is_subnormal(self) -> bool {
    self.exponent() == 0 && self.mantissa() != 0
  }

  /// `true` for NaN. For a finite format, only the all-ones bit pattern is NaN.
  #[inline]
  pub const fn is_nan(self) -> bool {
    if FINITE {
      self.0 == Self::MASK
    } else {
      self.exponent() == Self::EXP_FIELD_MAX && self.mantissa() != 0
    }
  }

  /// `true` for ±infinity. Always `false` for a finite format.
  #[inline]
  pub const fn is_infinite(self) -> bool {
    !FINITE && self.exponent() == Self::EXP_FIELD_MAX && self.mantissa() == 0
  }

  /// `true` if `self` is neither NaN nor infinite.
  #[inline]
  pub const fn is_finite(self) -> bool {
    !self.is_nan() && !self.is_infinite()
  }

  /// Split `self` into its integer significand (including the hidden bit, if normal) and the
  /// exponent of that significand's lsb, so that the magnitude of `self` is exactly
  /// `sig × 2^exp_lsb`.
  ///
  /// Subnormals have no hidden bit and use exponent field 1 in place of 0. The all-ones exponent
  /// field is decoded like any other, so callers must deal with NaN and infinity first if they
  /// care.
  #[inline]
  pub(crate) const fn unpack(self) -> (u64, i32) {
    let exponent = self.exponent();
    let mantissa = self.mantissa() as u64;
    if exponent == 0 {
      (mantissa, Self::MIN_EXP - MANT as i32)
    } else {
      (mantissa | (1 << MANT), exponent as i32 - Self::BIAS - MANT as i32)
    }
  }

  /// The exponent field minus the bias, for the purpose of comparing magnitudes. Whatever the
  /// field, `|self| < 2^(effective_exp + 1)` holds: for zeros and subnormals this gives
  /// `-bias`, one below [`Self::MIN_EXP`], and they are all smaller than `2^MIN_EXP`.
  #[inline]
  pub(crate) const fn effective_exp(self) -> i32 {
    self.exponent() as i32 - Self::BIAS
  }
}

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> core::ops::Neg for Float<EXP, MANT, FINITE> {
  type Output = Self;

  /// Flip the sign bit. For a finite format, this never produces the NaN sentinel from a number
  /// (or vice versa); the one pattern without a counterpart is returned unchanged.
  #[inline]
  fn neg(self) -> Self {
    if FINITE && (self.is_nan() || self.0 == Self::MASK & !Self::SIGN_MASK) {
      self
    } else {
      Self(self.0 ^ Self::SIGN_MASK)
    }
  }
}
