use super::*;

/// Fused multiply-accumulate: sum a batch of fp16 `products` and an e4m3 `addend` into a bf16,
/// the way the MAC array does: select an [`Anchor`], align every term to it, add them up in an
/// [`Accumulator`], and requantize.
///
/// Special values are dealt with before any alignment:
///
///   - Any NaN (among the products or the addend) gives [NaN](bf16::NAN).
///   - Infinities of both signs give NaN.
///   - Otherwise, any infinity gives that same infinity.
///
/// ```
/// # use npu_softfloat::*;
/// let products = [fp16::from_bits(0x3e00), fp16::from_bits(0x3c00)];  // 1.5, 1.0
/// let addend = e4m3::from_bits(0x38);                                  // 1.0
/// assert_eq!(mac(&products, addend).to_bits(), 0x4060);               // 3.5
/// ```
pub fn mac(products: &[fp16], addend: e4m3) -> bf16 {
  if addend.is_nan() || products.iter().any(|p| p.is_nan()) {
    log::trace!("NaN in MAC batch of {} products", products.len());
    return bf16::NAN
  }
  let positive = products.contains(&fp16::INFINITY);
  let negative = products.contains(&fp16::NEG_INFINITY);
  match (positive, negative) {
    (true, true) => {
      log::trace!("infinities of both signs in MAC batch of {} products", products.len());
      return bf16::NAN
    },
    (true, false) => return bf16::INFINITY,
    (false, true) => return bf16::NEG_INFINITY,
    (false, false) => (),
  }

  let mut acc = Accumulator::new(Anchor::select(products, addend));
  for &p in products {
    acc += p;
  }
  acc += addend;
  bf16::round_from(&acc)
}

/// Dot product of `a` and `b`, plus `addend`: each pair is multiplied into an fp16 product,
/// rounding each one, then the products are [summed](mac) into a bf16.
///
/// ```
/// # use npu_softfloat::*;
/// let a = [fp16::round_from(1.5_f32), fp16::round_from(2.0_f32)];
/// let b = [fp16::round_from(1.0_f32), fp16::round_from(0.5_f32)];
/// assert_eq!(dot(&a, &b, e4m3::from_bits(0x38)), bf16::round_from(3.5_f32));
/// ```
pub fn dot<const N: usize>(a: &[fp16; N], b: &[fp16; N], addend: e4m3) -> bf16 {
  let products: [fp16; N] = core::array::from_fn(|i| a[i] * b[i]);
  mac(&products, addend)
}
