//! This module and its submodules contain a software implementation of the narrow IEEE-style
//! floating point formats found in an NPU datapath: a sign bit, an `EXP`-bit biased exponent
//! field, and a `MANT`-bit mantissa (fraction) field with an implicit leading one for normal
//! numbers.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.
//!   - **Exponent field** vs **exponent**: the former is the raw biased bits, the latter the
//!     unbiased power of two they stand for.
//!
//! All formats share the usual encoding rules:
//!
//!   - exponent field 0, mantissa 0: signed zero;
//!   - exponent field 0, mantissa ≠ 0: subnormal, value `mantissa × 2^(1 - bias - MANT)`;
//!   - exponent field all ones: special (see below);
//!   - anything else: normal, value `(1 + mantissa / 2^MANT) × 2^(exponent field - bias)`.
//!
//! Formats come in two flavours, selected by the `FINITE` parameter. The usual one (`FINITE =
//! false`, e.g. fp16, bf16) treats an all-ones exponent field as infinity (mantissa 0) or NaN
//! (mantissa ≠ 0). A *finite* format (`FINITE = true`, e.g. e4m3) gives up infinities and almost
//! all NaNs for extra dynamic range: only the all-ones bit pattern is NaN, and every other
//! pattern with an all-ones exponent field is an ordinary normal number.

/// A floating point number with `EXP` exponent bits and `MANT` mantissa bits (plus one sign bit),
/// stored in the low `1 + EXP + MANT` bits of a `u32`.
///
/// Examples:
///
/// ```
/// # use npu_softfloat::Float;
/// type Foo = Float::<5, 10, false>;  // IEEE half precision, with infinities
/// type Bar = Float::<4, 3, true>;    // 8-bit float with no infinities and a single NaN
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Hash, Default)]  // Eq is bit-pattern equality: +0 ≠ -0, NaN = NaN
pub struct Float<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> (u32);

/// Basics
mod basics;

/// Constants (zero, one, NaN, max, min_positive, etc)
mod consts;

/// Debug and Display
mod fmt;

/// Conversions to and from other types
pub mod convert;

/// Arithmetic operations
mod ops;

/// A *decoded* floating point value, i.e. its sign, a normalised significand, and an unbiased
/// exponent. This is the form every arithmetic kernel works in: decode the operands, compute a
/// `Decoded` result (plus a sticky bit for any bits lost on the way), and [encode it with
/// rounding](Float::encode_round).
///
/// The represented value is
///
/// ```text
/// (-1)^sign × (frac / 2^FRAC_WIDTH) × 2^exp
/// ```
///
/// A `Decoded` is *normalised* if the msb of `frac` is set, i.e. `frac / 2^FRAC_WIDTH` is in the
/// range `[1, 2[`. Since `frac` is a `u64` with the leading one at bit 63, there are 63 bits of
/// fraction to the right of it: more than enough for the exact product of two fp32 significands
/// (48 bits) or a full `i32` fixed-point sum (32 bits).
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Decoded {
  /// `true` if negative.
  pub sign: bool,
  /// The significand, including the leading (hidden) one at bit [`Self::FRAC_WIDTH`].
  pub frac: u64,
  /// The unbiased exponent.
  pub exp: i32,
}

impl Decoded {
  /// Number of bits to the right of the leading one in a normalised [`Self::frac`].
  pub const FRAC_WIDTH: u32 = u64::BITS - 1;

  /// Build a normalised `Decoded` for the value `(-1)^sign × sig × 2^exp_lsb`, where `sig` is an
  /// arbitrary nonzero integer significand and `exp_lsb` is the exponent of its lsb.
  ///
  /// This is the one place where "find the leading one and shift it into position" happens:
  /// decoding a subnormal, building the product of two significands, and requantizing a
  /// fixed-point sum all go through here.
  #[inline]
  pub fn normalise(sign: bool, sig: u64, exp_lsb: i32) -> Self {
    debug_assert_ne!(sig, 0, "cannot normalise a zero significand");
    let lz = sig.leading_zeros();
    Self {
      sign,
      frac: sig << lz,
      exp: exp_lsb + (Self::FRAC_WIDTH - lz) as i32,
    }
  }

  /// Whether `self` satisfies the invariant that the leading one sits at bit `FRAC_WIDTH`.
  #[inline]
  pub fn is_normalised(self) -> bool {
    self.frac >> Self::FRAC_WIDTH == 1
  }
}

/// Result of decoding a [`Float`], see [`Float::try_decode`].
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TryDecoded {
  Zero { sign: bool },
  NaN { sign: bool },
  Infinite { sign: bool },
  Regular(Decoded),
}

/// Decoding from the raw bits
mod decode;

/// Encoding to the raw bits, with rounding
mod encode;


/// Exact conversion to [malachite](https://docs.rs/malachite) rationals, used as an oracle in tests
#[cfg(test)]
pub(crate) mod rational;
