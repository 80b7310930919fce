use super::*;

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> Float<EXP, MANT, FINITE> {
  /// Decode a float into zero, NaN, infinity, or a [normalised](Decoded::is_normalised)
  /// [`Decoded`] value. The core logic lives in [`Self::decode_regular`].
  pub(crate) fn try_decode(self) -> TryDecoded {
    let sign = self.sign();
    if self.is_zero() {
      TryDecoded::Zero { sign }
    } else if self.is_nan() {
      TryDecoded::NaN { sign }
    } else if self.is_infinite() {
      TryDecoded::Infinite { sign }
    } else {
      TryDecoded::Regular(self.decode_regular())
    }
  }

  /// Decode a float **which is not 0, NaN, or infinity** into a normalised [`Decoded`].
  ///
  /// Normal numbers already have their leading one in place (the hidden bit), so they only need
  /// shifting up to bit 63. Subnormals don't: their significand is just the mantissa field, and
  /// the leading one may be anywhere in it. For example, for e4m3 (3 mantissa bits)
  ///
  /// ```text
  ///   subnormal mantissa: 011        (3 × 2^-9)
  ///   normalised frac:    1.1000…    (exp -8)
  /// ```
  ///
  /// i.e. we find the first 1, shift it into the hidden bit's place, and decrease the exponent by
  /// the amount we shifted. Every subnormal of a narrow format thus becomes a normal number in
  /// the wider `Decoded` frame, which is what makes exact widening possible.
  pub(crate) fn decode_regular(self) -> Decoded {
    debug_assert!(
      !self.is_zero() && self.is_finite(),
      "Precondition violated: {self:?} cannot be 0, NaN, or infinity",
    );
    let (sig, exp_lsb) = self.unpack();
    Decoded::normalise(self.sign(), sig, exp_lsb)
  }
}
