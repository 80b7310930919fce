//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::float::{Float, Decoded};
use crate::{Anchor, Accumulator, RoundFrom, e4m3, fp16, bf16};

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> Float<EXP, MANT, FINITE> {
  /// # Safety
  ///
  /// `self` cannot be 0, NaN, or infinity.
  pub unsafe fn bench_decode_regular(self) -> Decoded {
    self.decode_regular()
  }
}

impl<
  const EXP: u32,
  const MANT: u32,
> Float<EXP, MANT, false> {
  /// # Safety
  ///
  /// `a` and `b` have to be normalised.
  pub unsafe fn bench_mul_kernel(a: Decoded, b: Decoded) -> (Decoded, bool) {
    Self::mul_kernel(a, b)
  }

  /// # Safety
  ///
  /// `x` has to be normalised.
  pub unsafe fn bench_encode_round(x: Decoded, sticky: bool) -> Self {
    Self::encode_round(x, sticky)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn decode_e4m3(arg: e4m3) -> Decoded {
  arg.decode_regular()
}

#[unsafe(no_mangle)]
pub fn decode_fp16(arg: fp16) -> Decoded {
  arg.decode_regular()
}

#[unsafe(no_mangle)]
pub fn encode_fp16(arg: Decoded, sticky: bool) -> fp16 {
  fp16::encode_round(arg, sticky)
}

#[unsafe(no_mangle)]
pub fn encode_bf16(arg: Decoded, sticky: bool) -> bf16 {
  bf16::encode_round(arg, sticky)
}

//

#[unsafe(no_mangle)]
pub fn widen_e4m3_fp16(x: e4m3) -> fp16 {
  x.into()
}

#[unsafe(no_mangle)]
pub fn widen_e4m3_bf16(x: e4m3) -> bf16 {
  x.into()
}

//

#[unsafe(no_mangle)]
pub fn mul_kernel_fp16(x: Decoded, y: Decoded) -> (Decoded, bool) {
  fp16::mul_kernel(x, y)
}

#[unsafe(no_mangle)]
pub fn mul_fp16(x: fp16, y: fp16) -> fp16 {
  x * y
}

//

#[unsafe(no_mangle)]
pub fn align_fp16(x: fp16, anchor: Anchor) -> i32 {
  x.align(anchor)
}

#[unsafe(no_mangle)]
pub fn align_e4m3(x: e4m3, anchor: Anchor) -> i32 {
  x.align(anchor)
}

#[unsafe(no_mangle)]
pub fn accumulate_fp16(acc: &mut Accumulator, x: fp16) {
  *acc += x
}

#[unsafe(no_mangle)]
pub fn requantize_bf16(sum: i32, anchor: Anchor) -> bf16 {
  bf16::requantize(sum, anchor)
}

#[unsafe(no_mangle)]
pub fn round_accumulator_bf16(acc: &Accumulator) -> bf16 {
  bf16::round_from(acc)
}

//

#[unsafe(no_mangle)]
pub fn select_anchor_16(products: &[fp16; 16], addend: e4m3) -> Anchor {
  Anchor::select(products, addend)
}

#[unsafe(no_mangle)]
pub fn mac_16(products: &[fp16; 16], addend: e4m3) -> bf16 {
  crate::mac(products, addend)
}

#[unsafe(no_mangle)]
pub fn dot_16(a: &[fp16; 16], b: &[fp16; 16], addend: e4m3) -> bf16 {
  crate::dot(a, b, addend)
}

#[unsafe(no_mangle)]
pub fn dot_32(a: &[fp16; 32], b: &[fp16; 32], addend: e4m3) -> bf16 {
  crate::dot(a, b, addend)
}
