use super::*;

/// Extract the sign, significand, and exponent of a finite, nonzero [`f64`], and represent them
/// as a normalised [`Decoded`]. No bits are lost: a `Decoded` has room for the whole 53-bit
/// significand.
fn decode_finite_f64(num: f64) -> Decoded {
  debug_assert!(num.is_finite() && num != 0.);
  const MANTISSA_DIGITS_EXPLICIT: u32 = f64::MANTISSA_DIGITS - 1;
  const EXP_BIAS: i32 = f64::MAX_EXP - 1;

  use crate::underlying::Sealed;
  let bits = num.abs().to_bits();
  let mantissa = bits.mask_lsb(MANTISSA_DIGITS_EXPLICIT);
  let exponent = (bits >> MANTISSA_DIGITS_EXPLICIT) as i32;

  // An exponent field of 0 marks a subnormal number, which has no hidden bit and uses exponent
  // field 1 in place of 0; same as for our own formats.
  let (sig, exp_lsb) =
    if exponent == 0 {
      (mantissa, 1 - EXP_BIAS - MANTISSA_DIGITS_EXPLICIT as i32)
    } else {
      (mantissa | (1 << MANTISSA_DIGITS_EXPLICIT), exponent - EXP_BIAS - MANTISSA_DIGITS_EXPLICIT as i32)
    };
  Decoded::normalise(num.is_sign_negative(), sig, exp_lsb)
}

impl<
  const EXP: u32,
  const MANT: u32,
> RoundFrom<f64> for Float<EXP, MANT, false> {
  /// Convert an `f64` into a `Float`, [rounding](RoundFrom#rounding) if necessary.
  ///
  /// NaN converts to [NaN](Self::NAN) and infinity to infinity, keeping the sign. So do zeros.
  fn round_from(value: f64) -> Self {
    use core::num::FpCategory;
    let sign = value.is_sign_negative();
    match value.classify() {
      FpCategory::Nan => Self::NAN.with_sign(sign),
      FpCategory::Infinite => Self::INFINITY.with_sign(sign),
      FpCategory::Zero => Self::ZERO.with_sign(sign),
      FpCategory::Normal | FpCategory::Subnormal =>
        Self::encode_round(decode_finite_f64(value), false),
    }
  }
}

impl<
  const EXP: u32,
  const MANT: u32,
> RoundFrom<f32> for Float<EXP, MANT, false> {
  /// Convert an `f32` into a `Float`, [rounding](RoundFrom#rounding) if necessary.
  ///
  /// `f32` → `f64` is lossless, so this goes through [`RoundFrom<f64>`] with no double rounding.
  fn round_from(value: f32) -> Self {
    Self::round_from(f64::from(value))
  }
}

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> From<Float<EXP, MANT, FINITE>> for f64 {
  /// Convert a `Float` into an `f64`. This is **exact**: every value of every format up to 32
  /// bits wide (subnormals included) is a normal `f64`.
  ///
  /// NaN converts to an `f64` NaN with the same sign.
  fn from(value: Float<EXP, MANT, FINITE>) -> Self {
    const MANTISSA_DIGITS_EXPLICIT: u32 = f64::MANTISSA_DIGITS - 1;
    const EXP_BIAS: i32 = f64::MAX_EXP - 1;
    let sign = |x: f64| if value.sign() {-x} else {x};
    match value.try_decode() {
      TryDecoded::Zero { .. } => sign(0.),
      TryDecoded::NaN { .. } => sign(f64::NAN),
      TryDecoded::Infinite { .. } => sign(f64::INFINITY),
      TryDecoded::Regular(Decoded { sign: _, frac, exp }) => {
        // Drop the hidden bit, then keep the top 52 bits of fraction. The low bits shifted out
        // are all 0, since `MANT` < 52.
        let mantissa = (frac << 1) >> (u64::BITS - MANTISSA_DIGITS_EXPLICIT);
        let exponent = (exp + EXP_BIAS) as u64;
        sign(f64::from_bits((exponent << MANTISSA_DIGITS_EXPLICIT) | mantissa))
      },
    }
  }
}

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> From<Float<EXP, MANT, FINITE>> for f32 {
  /// Convert a `Float` into an `f32`. This is exact for every format *narrower* than fp32; for
  /// fp32 itself it's a plain bit reinterpretation modulo NaN payloads.
  fn from(value: Float<EXP, MANT, FINITE>) -> Self {
    const { assert!(MANT <= f32::MANTISSA_DIGITS - 1 && EXP <= 8, "Cannot convert losslessly") }
    f64::from(value) as f32
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{e4m3, fp16, bf16, fp32};
  use crate::float::rational::round_exact;
  use malachite::rational::Rational;
  use proptest::prelude::*;

  /// A strategy yielding `f64`s with an unbiased exponent in `exp` and a random significand.
  fn f64_with_exp(exp: core::ops::RangeInclusive<i32>) -> impl Strategy<Value = f64> {
    (any::<bool>(), exp, any::<u64>()).prop_map(|(sign, exp, mantissa)| {
      let bits = ((sign as u64) << 63) | (((exp + 1023) as u64) << 52) | (mantissa >> 12);
      f64::from_bits(bits)
    })
  }

  #[test]
  fn to_f64_examples() {
    assert_eq!(f64::from(e4m3::from_bits(0x40)), 2.);
    assert_eq!(f64::from(e4m3::from_bits(0x7f)), 480.);
    assert_eq!(f64::from(e4m3::from_bits(0x01)), 2f64.powi(-9));
    assert_eq!(f64::from(fp16::from_bits(0x3e00)), 1.5);
    assert_eq!(f64::from(bf16::from_bits(0xc0a0)), -5.);
    assert_eq!(f64::from(fp16::NEG_ZERO).to_bits(), (-0f64).to_bits());
    assert_eq!(f64::from(fp16::NEG_INFINITY), f64::NEG_INFINITY);
    assert!(f64::from(e4m3::NAN).is_nan());
    assert!(f64::from(e4m3::NAN).is_sign_negative());
  }

  #[test]
  fn from_f64_examples() {
    assert_eq!(fp16::round_from(1.5_f64).to_bits(), 0x3e00);
    assert_eq!(fp16::round_from(-2.0_f64).to_bits(), 0xc000);
    assert_eq!(bf16::round_from(3.0_f64).to_bits(), 0x4040);
    assert_eq!(fp16::round_from(65504.0_f64), fp16::MAX);
    assert_eq!(fp16::round_from(65520.0_f64), fp16::INFINITY);
    assert_eq!(fp16::round_from(-1e-10_f64), fp16::NEG_ZERO);
    assert_eq!(fp16::round_from(-0.0_f64), fp16::NEG_ZERO);
    assert_eq!(bf16::round_from(f64::NEG_INFINITY), bf16::NEG_INFINITY);
    assert!(bf16::round_from(f64::NAN).is_nan());
    // The smallest f64 subnormal is far too small for anything.
    assert_eq!(fp32::round_from(f64::from_bits(1)), fp32::ZERO);
  }

  #[test]
  fn from_f64_single_rounding() {
    // 1.33203125 is a tie between bf16 0x3faa and 0x3fab; the next f64 up is not, and rounds up.
    // Going through f32 first would round it to the tie, then down to even.
    let x = f64::from_bits(1.33203125_f64.to_bits() + 1);
    assert_eq!(bf16::round_from(x).to_bits(), 0x3fab);
    assert_eq!(bf16::round_from(1.33203125_f64).to_bits(), 0x3faa);
    let Ok(exact) = Rational::try_from(x) else { unreachable!() };
    assert_eq!(round_exact::<8, 7>(&exact).to_bits(), 0x3fab);
  }

  #[test]
  fn fp16_to_f64_exhaustive() {
    for x in fp16::cases_exhaustive_all() {
      let ours = f64::from(x);
      let theirs = half::f16::from_bits(x.to_bits() as u16).to_f64();
      if theirs.is_nan() {
        assert!(ours.is_nan(), "{x:?}")
      } else {
        assert_eq!(ours.to_bits(), theirs.to_bits(), "{x:?}")
      }
    }
  }

  #[test]
  fn bf16_to_f64_exhaustive() {
    for x in bf16::cases_exhaustive_all() {
      let ours = f64::from(x);
      let theirs = half::bf16::from_bits(x.to_bits() as u16).to_f64();
      if theirs.is_nan() {
        assert!(ours.is_nan(), "{x:?}")
      } else {
        assert_eq!(ours.to_bits(), theirs.to_bits(), "{x:?}")
      }
    }
  }

  #[test]
  fn fp32_round_trip_exhaustive_exponents() {
    // Every fp32 exponent field, with a few mantissas each.
    for exponent in 0 ..= 0xff {
      for mantissa in [0, 1, 0x40_0000, 0x7f_ffff] {
        let x = fp32::from_fields(false, exponent, mantissa);
        let native = f32::from_bits(x.to_bits());
        if native.is_nan() {
          assert!(f64::from(x).is_nan())
        } else {
          assert_eq!(f64::from(x), f64::from(native), "{x:?}")
        }
      }
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn fp16_from_f64(x in f64_with_exp(-30 ..= 20)) {
      let Ok(exact) = Rational::try_from(x) else { unreachable!() };
      prop_assert_eq!(fp16::round_from(x), round_exact::<5, 10>(&exact), "{}", x)
    }

    #[test]
    fn bf16_from_f64(x in f64_with_exp(-140 ..= 135)) {
      let Ok(exact) = Rational::try_from(x) else { unreachable!() };
      prop_assert_eq!(bf16::round_from(x), round_exact::<8, 7>(&exact), "{}", x)
    }

    #[test]
    fn fp32_from_f64(x in f64_with_exp(-130 ..= 130)) {
      let ours = fp32::round_from(x);
      if x.abs() >= f64::from(f32::MIN_POSITIVE) {
        prop_assert_eq!(ours.to_bits(), (x as f32).to_bits(), "{}", x)
      } else {
        prop_assert!(ours.is_zero() || ours.with_sign(false) == fp32::MIN_POSITIVE, "{}", x)
      }
    }

    #[test]
    fn fp16_from_f32_matches_f64(x in any::<f32>()) {
      prop_assert_eq!(fp16::round_from(x), fp16::round_from(f64::from(x)))
    }

    #[test]
    fn fp16_round_trip(x in fp16::cases_proptest_normal()) {
      prop_assert_eq!(fp16::round_from(f64::from(x)), x)
    }
  }
}
