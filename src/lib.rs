#![cfg_attr(not(test), no_std)]
//! This crate provides a bit-exact software model of the multiply-accumulate (MAC) datapath of a
//! neural processing unit: the narrow floating point formats it works in, the fp16 multiplier,
//! and the anchored fixed-point accumulation that sums a batch of products into a bf16.
//!
//! # Introduction
//!
//! Dot-product engines in NPUs rarely add floats the way an FPU does. Instead, for each batch of
//! terms, they pick one shared exponent (the *anchor*), shift every term into a 32-bit
//! fixed-point integer in that frame, add the integers, and round the sum back into a float only
//! once, at the very end. This is cheap in hardware, and it is *almost* exact: bits of small terms
//! that fall below the frame are truncated. This crate reproduces that behaviour to the bit, so
//! that a model running on a CPU gives the same answers as the hardware.
//!
//! The formats involved are:
//!
//!   - [`e4m3`]: 8 bits, 4 exponent bits, 3 mantissa bits, bias 7. No infinities; the all-ones
//!     byte is the only NaN, and every other pattern is a number (up to ±480).
//!   - [`fp16`]: IEEE half precision, 5 exponent bits, 10 mantissa bits, bias 15.
//!   - [`bf16`]: bfloat16, 8 exponent bits, 7 mantissa bits, bias 127.
//!   - [`fp32`]: IEEE single precision, for convenience.
//!
//! All are instances of the one generic [`Float`] type.
//!
//! # Usage
//!
//! ```
//! use npu_softfloat::{e4m3, fp16, bf16};
//! # use npu_softfloat::{Anchor, Accumulator, RoundFrom, RoundInto, dot};
//!
//! // Build values from raw bits, constants, or by rounding native floats.
//! let a = fp16::from_bits(0x3e00);  // 1.5
//! let b: fp16 = 2.0_f32.round_into();
//! let c = e4m3::from_bits(0x38);    // 1.0
//!
//! // Widen e4m3 into fp16 or bf16, exactly.
//! assert_eq!(fp16::from(c), fp16::ONE);
//!
//! // Multiply fp16s, rounding like the hardware multiplier does.
//! assert_eq!((a * b).to_bits(), 0x4200);
//!
//! // Sum a batch of products plus an addend, the way the MAC array does.
//! let result = dot(&[a, b], &[b, a], c);
//! assert_eq!(result, bf16::round_from(7.0_f32));
//!
//! // Or drive the pipeline step by step.
//! let products = [a * b, b * a];
//! let mut acc = Accumulator::new(Anchor::select(&products, c));
//! for p in products {
//!   acc += p;
//! }
//! acc += c;
//! assert_eq!(bf16::round_from(&acc), result);
//! ```
//!
//! The [function-call interface](#functions) of the datapath (one function per hardware stage,
//! taking and returning bare bit-level types) is also available.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade, at `trace` level only: anchor selection, and
//! special values short-circuiting the MAC pipeline. Install any logger to see them.

mod float;
mod mac;
mod underlying;

pub use float::Float;
pub use float::convert::{RoundFrom, RoundInto};
pub use mac::{Anchor, Accumulator, mac, dot, reduce};

/// 8-bit float with 4 exponent bits and 3 mantissa bits, with no infinities and a single NaN.
#[allow(non_camel_case_types)]
pub type e4m3 = Float<4, 3, true>;

/// IEEE 754 half precision float (binary16).
#[allow(non_camel_case_types)]
pub type fp16 = Float<5, 10, false>;

/// Brain float: 16 bits with the exponent range of an `f32`.
#[allow(non_camel_case_types)]
pub type bf16 = Float<8, 7, false>;

/// IEEE 754 single precision float (binary32).
#[allow(non_camel_case_types)]
pub type fp32 = Float<8, 23, false>;

/// Widen an e4m3 into an fp16, exactly (subnormals are normalised, NaN keeps its sign).
pub fn widen_to_fp16(x: e4m3) -> fp16 {
  x.into()
}

/// Widen an e4m3 into a bf16, exactly (subnormals are normalised, NaN keeps its sign).
pub fn widen_to_bf16(x: e4m3) -> bf16 {
  x.into()
}

/// Multiply two fp16s like the datapath's multiplier (subnormal operands flush to zero; the
/// product is rounded to nearest even, saturating and flushing).
pub fn multiply_fp16(a: fp16, b: fp16) -> fp16 {
  a * b
}

/// Choose the biased anchor for a batch of products plus an addend. See [`Anchor::select`].
pub fn select_anchor(products: &[fp16], addend: e4m3) -> u8 {
  Anchor::select(products, addend).to_bits()
}

/// Align an fp16 to the frame of a biased `anchor`. See [`Float::align`].
pub fn align_fp16(x: fp16, anchor: u8) -> i32 {
  x.align(Anchor::from_bits(anchor))
}

/// Align an e4m3 to the frame of a biased `anchor`. See [`Float::align`].
pub fn align_e4m3(x: e4m3, anchor: u8) -> i32 {
  x.align(Anchor::from_bits(anchor))
}

/// Requantize a fixed-point sum in the frame of a biased `anchor` into a bf16. See
/// [`Float::requantize`].
pub fn requantize_to_bf16(sum: i32, anchor: u8) -> bf16 {
  bf16::requantize(sum, Anchor::from_bits(anchor))
}

/// Number of cases run by each property test.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x4000} else {0x10_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
