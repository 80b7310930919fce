use super::*;

use crate::underlying::Sealed;

impl<
  const EXP: u32,
  const MANT: u32,
> Float<EXP, MANT, false> {
  /// Encode a [normalised](Decoded::is_normalised) [`Decoded`] into a float, rounding if
  /// necessary. This is the *only* place in the datapath where rounding happens.
  ///
  /// `sticky` is the sticky bit: it is `true` **if and only if** some nonzero bits were lost
  /// before getting to `x` (e.g. shifted out of a significand). In other words, accumulate any
  /// lost bits into `sticky`, then pass it here to get a correctly rounded result.
  ///
  /// The rules are:
  ///
  ///   - Round to nearest, ties to even.
  ///   - If the rounded exponent is too big, saturate to signed infinity.
  ///   - If the rounded exponent is too small for a normal number, flush to signed zero (the
  ///     datapath never produces subnormals).
  pub(crate) fn encode_round(x: Decoded, sticky: bool) -> Self {
    debug_assert!(x.is_normalised(), "Precondition violated: {x:?} is not normalised");

    // Rounding works in terms of three things. Let's call the lsb of the bits we keep `odd`, the
    // first bit shifted out `round` (or guard), and the OR of all the remaining bits shifted out
    // `sticky`. Then
    //
    //   odd | round | sticky | result
    //   ..x | 0     |  x     | round down (+0)
    //   ..0 | 1     | =0     | tie, round down to even (+0)
    //   ..1 | 1     | =0     | tie, round up to even (+1)
    //   ..x | 1     | ≠0     | round up (+1)
    //
    // which is the boolean formula `round & (odd | sticky)`.
    //
    // We keep `MANT + 1` bits of `frac` (the hidden bit plus `MANT` mantissa bits), so the round
    // bit is the next one down, and everything below it goes to `sticky`.
    let shift = Decoded::FRAC_WIDTH - MANT;
    let keep = x.frac >> shift;
    let round = x.frac.get_bit(shift - 1);
    let sticky = sticky || x.frac.mask_lsb(shift - 1) != 0;
    let odd = keep.get_lsb();
    let round_up = round & (odd | sticky);

    // Rounding up may carry all the way out of the significand, e.g. 1.111 + 0.001 = 10.000. In
    // that case the significand becomes 1.000 and the exponent goes up by one.
    let mut sig = keep + u64::from(round_up);
    let mut exponent = x.exp + Self::BIAS;
    if sig >> (MANT + 1) != 0 {
      sig >>= 1;
      exponent += 1;
    }

    // Finally, range checks on the biased exponent, *after* rounding.
    if exponent >= Self::EXP_FIELD_MAX as i32 {
      Self::INFINITY.with_sign(x.sign)
    } else if exponent <= 0 {
      Self::ZERO.with_sign(x.sign)
    } else {
      Self::from_fields(x.sign, exponent as u32, sig as u32)
    }
  }

  /// Encode a [normalised](Decoded::is_normalised) [`Decoded`] that is known to be exactly
  /// representable in `Self` as a normal number (e.g. a value widened from a narrower format).
  pub(crate) fn encode_exact(x: Decoded) -> Self {
    debug_assert!(
      x.frac.mask_lsb(Decoded::FRAC_WIDTH - MANT) == 0
        && x.exp >= Self::MIN_EXP
        && x.exp <= Self::MAX_EXP,
      "Precondition violated: {x:?} is not exactly representable",
    );
    Self::encode_round(x, false)
  }
}
