use super::*;

use crate::{e4m3, fp16, bf16, fp32};

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> Float<EXP, MANT, FINITE> {
  /// The exponent of the smallest subnormal's lsb; every nonzero value of this type, once
  /// normalised, has an exponent at least this large.
  const MIN_SUBNORMAL_EXP: i32 = Self::MIN_EXP - MANT as i32;

  /// Convert `self` into a wider format `Float<EXP2, MANT2, false>`, **exactly**.
  ///
  /// The destination must have at least as many mantissa bits, and an exponent range that covers
  /// the source's whole range *including its subnormals*, as normal numbers (this is checked at
  /// compile time). Then:
  ///
  ///   - NaN becomes the destination's [NaN](Self::NAN), with the same sign.
  ///   - Infinity becomes infinity, with the same sign.
  ///   - Zero becomes zero, with the same sign.
  ///   - Otherwise, the exponent is re-biased (`new_exp = exp - bias + new_bias`) and the mantissa
  ///     is left-justified into the wider mantissa field (`mantissa << (MANT2 - MANT)`).
  ///
  /// The last step is *not* a simple shift of the bit pattern for subnormals: a subnormal's
  /// leading one has to be found and moved into the hidden bit first, adjusting the exponent
  /// accordingly, since the destination can represent it as a normal number. This happens in
  /// [`Self::decode_regular`].
  ///
  /// ```
  /// # use npu_softfloat::*;
  /// let x = e4m3::from_bits(0x01);  // 2^-9, subnormal
  /// assert_eq!(x.widen::<5, 10>().to_bits(), 0x1800);  // 2^-9, normal
  /// ```
  pub fn widen<const EXP2: u32, const MANT2: u32>(self) -> Float<EXP2, MANT2, false> {
    const {
      assert!(MANT2 >= MANT, "Widening cannot drop mantissa bits");
      assert!(
        Self::MIN_SUBNORMAL_EXP >= Float::<EXP2, MANT2, false>::MIN_EXP,
        "Widening destination must represent every source subnormal as a normal number",
      );
      assert!(
        Self::MAX_EXP <= Float::<EXP2, MANT2, false>::MAX_EXP,
        "Widening destination must cover the source's largest exponent",
      );
    }
    match self.try_decode() {
      TryDecoded::Zero { sign } => Float::<EXP2, MANT2, false>::ZERO.with_sign(sign),
      TryDecoded::NaN { sign } => Float::<EXP2, MANT2, false>::NAN.with_sign(sign),
      TryDecoded::Infinite { sign } => Float::<EXP2, MANT2, false>::INFINITY.with_sign(sign),
      TryDecoded::Regular(decoded) => Float::<EXP2, MANT2, false>::encode_exact(decoded),
    }
  }
}

/// Helper macro for the lossless `From` impls between concrete formats.
macro_rules! mk_widen {
  ($from:ty => $into:ty) => {
    impl From<$from> for $into {
      #[inline]
      fn from(value: $from) -> Self {
        value.widen()
      }
    }
  }
}

mk_widen!{e4m3 => fp16}
mk_widen!{e4m3 => bf16}
mk_widen!{e4m3 => fp32}
mk_widen!{fp16 => fp32}

/// A bf16 is the top half of an fp32 with the same value: same exponent field, same bias, and
/// subnormals map onto subnormals. So [`Float::widen`] doesn't apply, but a shift does.
impl From<bf16> for fp32 {
  #[inline]
  fn from(value: bf16) -> Self {
    let bits = value.to_bits() << 16;
    // Any NaN in fp32 is the canonical one, like the other widenings.
    if value.is_nan() {fp32::NAN.with_sign(value.sign())} else {fp32::from_bits(bits)}
  }
}
