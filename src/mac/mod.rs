//! The multiply-accumulate pipeline: a batch of fp16 products plus one e4m3 addend are summed
//! into a single bf16, the way an NPU dot-product engine does it.
//!
//! The sum is *not* a chain of floating point additions. Instead:
//!
//!   1. An [`Anchor`] exponent is chosen, once, from the largest exponent in the batch plus some
//!      headroom ([`Anchor::select`]).
//!   2. Every term is converted into a signed 32-bit fixed-point integer in the anchor's frame,
//!      truncating any bits that fall below the frame ([`Float::align`]).
//!   3. The integers are added, exactly ([`Accumulator`]).
//!   4. The sum is converted back into a bf16, rounding once ([`RoundFrom<&Accumulator>`]).
//!
//! Step 2 is the only lossy one besides the final rounding.

use crate::float::{Float, Decoded};
use crate::{RoundFrom, e4m3, fp16, bf16};

/// The shared reference exponent of a MAC batch.
///
/// An aligned term `t` in the frame of an anchor with exponent `a` stands for the real value
/// `t × 2^(a - 31)`; in other words the anchor is the exponent of bit 31 of the fixed-point
/// integer. It's stored as a `u8` biased by 127, like a bf16 exponent field, so that the biased
/// exponent of a requantized result is just `msb + anchor - 31`.
///
/// ```
/// # use npu_softfloat::Anchor;
/// let anchor = Anchor::from_bits(130);
/// assert_eq!(anchor.exp(), 3);
/// assert_eq!(Anchor::headroom(4), 3);  // 3 products + the addend
/// ```
#[derive(Clone, Copy)]
#[derive(Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Anchor(u8);

impl Anchor {
  /// The bias of the stored exponent.
  pub const BIAS: i32 = 127;

  /// Build an anchor from its raw biased representation.
  #[inline]
  pub const fn from_bits(bits: u8) -> Self {
    Self(bits)
  }

  /// The raw biased representation.
  #[inline]
  pub const fn to_bits(self) -> u8 {
    self.0
  }

  /// The unbiased exponent, `bits - 127`.
  #[inline]
  pub const fn exp(self) -> i32 {
    self.0 as i32 - Self::BIAS
  }

  /// Build an anchor from an unbiased exponent, saturating to the representable range
  /// `[-127, 128]`.
  #[inline]
  pub const fn from_exp_saturating(exp: i32) -> Self {
    let biased = exp + Self::BIAS;
    Self(if biased < 0 {0} else if biased > u8::MAX as i32 {u8::MAX} else {biased as u8})
  }

  /// The number of headroom bits needed to sum `terms` aligned values without overflowing an
  /// `i32`: `ceil(log2(terms)) + 1`.
  ///
  /// Every aligned term has fewer than `32 - headroom` significant bits, so the magnitude of the
  /// sum of `terms` of them is less than `terms × 2^(32 - headroom) ≤ 2^31`.
  #[inline]
  pub const fn headroom(terms: usize) -> u32 {
    crate::underlying::ceil_log2(terms) + 1
  }
}

/// An accumulator for aligned fixed-point terms: the running sum, plus the [`Anchor`] that gives
/// it meaning.
///
/// This is the software counterpart of the MAC array's accumulator register. Adding a [`Float`]
/// (with `+=`) [aligns](Float::align) it to the anchor and adds it, exactly; [rounding
/// out](RoundFrom) of the accumulator requantizes the sum into a float.
///
/// ```
/// # use npu_softfloat::*;
/// let products = [fp16::round_from(1.5_f32), fp16::round_from(1.0_f32)];
/// let addend = e4m3::from_bits(0x38);  // 1.0
///
/// let mut acc = Accumulator::new(Anchor::select(&products, addend));
/// for p in products {
///   acc += p;
/// }
/// acc += addend;
/// assert_eq!(bf16::round_from(&acc), bf16::round_from(3.5_f32));
/// ```
#[derive(Clone, Copy)]
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct Accumulator {
  anchor: Anchor,
  sum: i32,
}

/// Anchor selection.
mod anchor;

/// Float → fixed point.
mod align;

/// Summation.
mod accumulate;

/// Fixed point → float.
mod requantize;

/// The fused pipeline.
mod dot;

pub use accumulate::reduce;
pub use dot::{mac, dot};
