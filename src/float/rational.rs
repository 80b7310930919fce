use super::*;

use malachite::Integer;
use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{PowerOf2, Abs, Floor};

/// The error type returned when a [`Float`] cannot be converted to a [`Rational`] because it is
/// NaN or infinite.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct NotFinite;

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> TryFrom<Float<EXP, MANT, FINITE>> for Rational {
  type Error = NotFinite;

  /// This is a **super-explicit** rendition of the encoding rules, since this is what we will
  /// check our implementations against! It deliberately does not use [`Float::unpack`] or
  /// [`Decoded`].
  fn try_from(value: Float<EXP, MANT, FINITE>) -> Result<Self, Self::Error> {
    if value.is_nan() || value.is_infinite() {
      return Err(NotFinite)
    }
    let bits = value.to_bits();
    let sign = (bits >> (EXP + MANT)) & 1 == 1;
    let exponent = (bits >> MANT) & ((1 << EXP) - 1);
    let mantissa = bits & ((1 << MANT) - 1);
    let bias = (1i64 << (EXP - 1)) - 1;

    let fraction = Rational::from(mantissa) / Rational::power_of_2(MANT as i64);
    let magnitude =
      if exponent == 0 {
        // Subnormal (or zero): 0.mantissa × 2^(1 - bias)
        fraction * Rational::power_of_2(1 - bias)
      } else {
        // Normal: 1.mantissa × 2^(exponent - bias)
        (Rational::from(1) + fraction) * Rational::power_of_2(exponent as i64 - bias)
      };
    Ok(if sign {-magnitude} else {magnitude})
  }
}

/// The exact value an aligned fixed-point term should have: `value × 2^(31 - anchor_exp)`,
/// truncated towards zero.
pub fn aligned_value(value: Rational, anchor_exp: i32) -> Integer {
  let negative = value < Rational::from(0);
  let scaled = value.abs() * Rational::power_of_2(31 - anchor_exp as i64);
  let magnitude = scaled.floor();
  if negative {-magnitude} else {magnitude}
}

/// Round an exact `value` to a float of a non-finite format, to nearest with ties to even, under
/// the datapath's range rules: saturate to infinity above the range, flush to zero below the
/// normals (both decided *after* rounding).
///
/// This is worked out from scratch with rationals, as an independent check on
/// [`Float::encode_round`]; native or `half` conversions from `f64` don't round correctly in
/// every case, since they may round twice.
pub fn round_exact<const EXP: u32, const MANT: u32>(value: &Rational) -> Float<EXP, MANT, false> {
  type F<const EXP: u32, const MANT: u32> = Float<EXP, MANT, false>;
  let zero = Rational::from(0);
  if *value == zero {
    return F::<EXP, MANT>::ZERO
  }
  let sign = *value < zero;
  let magnitude = value.abs();

  // Find `exp` such that `2^exp ≤ magnitude < 2^(exp + 1)`.
  let mut exp = 0_i64;
  while magnitude >= Rational::power_of_2(exp + 1) { exp += 1 }
  while magnitude < Rational::power_of_2(exp) { exp -= 1 }

  // Scale so that the integer part holds the `MANT + 1` significant bits, then round the rest.
  let scaled = &magnitude * Rational::power_of_2(MANT as i64 - exp);
  let floor = (&scaled).floor();
  let rest = scaled - Rational::from(&floor);
  let half = Rational::from(1) / Rational::from(2);
  let odd = &floor % Integer::from(2) != Integer::from(0);
  let mut sig = if rest > half || (rest == half && odd) {floor + Integer::from(1)} else {floor};
  if sig == Integer::power_of_2(MANT as u64 + 1) {
    sig = Integer::power_of_2(MANT as u64);
    exp += 1;
  }

  let biased = exp + i64::from(F::<EXP, MANT>::BIAS);
  if biased >= i64::from(F::<EXP, MANT>::EXP_FIELD_MAX) {
    F::<EXP, MANT>::INFINITY.with_sign(sign)
  } else if biased <= 0 {
    F::<EXP, MANT>::ZERO.with_sign(sign)
  } else {
    let Ok(sig) = u32::try_from(&sig) else { unreachable!() };
    F::<EXP, MANT>::from_fields(sign, biased as u32, sig)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{e4m3, fp16, bf16};

  #[test]
  fn values() {
    assert_eq!(Rational::try_from(fp16::ONE), Ok(Rational::from(1)));
    assert_eq!(Rational::try_from(fp16::from_bits(0xc000)), Ok(Rational::from(-2)));
    assert_eq!(Rational::try_from(e4m3::from_bits(0x40)), Ok(Rational::from(2)));
    assert_eq!(Rational::try_from(e4m3::from_bits(0x7f)), Ok(Rational::from(480)));
    assert_eq!(Rational::try_from(e4m3::from_bits(0xfe)), Ok(Rational::from(-448)));
    assert_eq!(Rational::try_from(e4m3::from_bits(0x01)), Ok(Rational::power_of_2(-9i64)));
    assert_eq!(Rational::try_from(bf16::from_bits(0x8000)), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(fp16::MIN_POSITIVE_SUBNORMAL), Ok(Rational::power_of_2(-24i64)));
    assert_eq!(Rational::try_from(fp16::MAX), Ok(Rational::from(65504)));
  }

  #[test]
  fn not_finite() {
    assert_eq!(Rational::try_from(e4m3::NAN), Err(NotFinite));
    assert_eq!(Rational::try_from(fp16::NAN), Err(NotFinite));
    assert_eq!(Rational::try_from(fp16::INFINITY), Err(NotFinite));
    assert_eq!(Rational::try_from(bf16::NEG_INFINITY), Err(NotFinite));
  }

  #[test]
  fn aligned() {
    assert_eq!(aligned_value(Rational::from(1), 2), Integer::from(1 << 29));
    assert_eq!(aligned_value(Rational::from(-3), 31), Integer::from(-3));
    // -1.75 at anchor 31 truncates towards zero
    assert_eq!(aligned_value(Rational::from(-7) / Rational::from(4), 31), Integer::from(-1));
  }

  #[test]
  fn round_exact_examples() {
    assert_eq!(round_exact::<5, 10>(&Rational::from(0)), fp16::ZERO);
    assert_eq!(round_exact::<5, 10>(&Rational::from(1)), fp16::ONE);
    assert_eq!(round_exact::<8, 7>(&Rational::from(-5)).to_bits(), 0xc0a0);
    // Ties to even, both ways.
    assert_eq!(round_exact::<8, 7>(&Rational::from(257)).to_bits(), 0x4380);
    assert_eq!(round_exact::<8, 7>(&Rational::from(259)).to_bits(), 0x4382);
    // Carry into the exponent.
    assert_eq!(round_exact::<8, 7>(&Rational::from(511)).to_bits(), 0x4400);
    // Range rules.
    assert_eq!(round_exact::<5, 10>(&Rational::from(65520)), fp16::INFINITY);
    assert_eq!(round_exact::<5, 10>(&Rational::from(65519)), fp16::MAX);
    assert_eq!(round_exact::<5, 10>(&-Rational::power_of_2(-15i64)), fp16::NEG_ZERO);
    let just_below = Rational::power_of_2(-14i64) - Rational::power_of_2(-30i64);
    assert_eq!(round_exact::<5, 10>(&just_below), fp16::MIN_POSITIVE);
  }
}
