use super::*;

impl Anchor {
  /// Choose the anchor for summing `products` plus `addend`.
  ///
  /// The anchor is the largest exponent in the batch (exponent field minus bias, comparing
  /// across formats) plus [`Anchor::headroom`] for `products.len() + 1` terms. Then every term
  /// aligns to an integer with fewer than `32 - headroom` significant bits, and the sum of all of
  /// them cannot overflow the accumulator.
  ///
  /// The products are usually fp16, but any format whose exponents fit the anchor's range works.
  /// If they don't, the anchor saturates and the no-overflow guarantee is lost; this cannot
  /// happen for fp16 products and batches of any size.
  ///
  /// ```
  /// # use npu_softfloat::*;
  /// let products = [fp16::from_bits(0x4200), fp16::from_bits(0x3c00)];  // 3.0, 1.0
  /// let addend = e4m3::from_bits(0x38);                                  // 1.0
  /// // Largest exponent is 1 (from 3.0), plus 3 bits for 3 terms.
  /// assert_eq!(Anchor::select(&products, addend).exp(), 4);
  /// ```
  pub fn select<
    const EXP: u32,
    const MANT: u32,
    const FINITE: bool,
  >(products: &[Float<EXP, MANT, FINITE>], addend: e4m3) -> Self {
    let max_exp = products.iter()
      .map(|p| p.effective_exp())
      .fold(addend.effective_exp(), i32::max);
    let headroom = Self::headroom(products.len() + 1);
    let anchor = Self::from_exp_saturating(max_exp + headroom as i32);
    log::trace!(
      "anchor for {} products: max exponent {max_exp}, headroom {headroom}, anchor {anchor:?}",
      products.len(),
    );
    anchor
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::float::rational::{aligned_value, NotFinite};
  use malachite::Integer;
  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::{Abs, PowerOf2};
  use proptest::prelude::*;

  #[test]
  fn examples() {
    let products = [fp16::from_bits(0x4200), fp16::ONE];
    assert_eq!(Anchor::select(&products, e4m3::ONE).exp(), 1 + 3);
    // The addend can hold the largest exponent: 0x7f is 1.875 × 2^8.
    assert_eq!(Anchor::select(&products, e4m3::from_bits(0x7f)).exp(), 8 + 3);
    // A single product and the addend: headroom 2.
    assert_eq!(Anchor::select(&[fp16::MAX], e4m3::ZERO).exp(), 15 + 2);
  }

  #[test]
  fn zeros() {
    // All zeros: the exponent fields are all 0, so the largest exponent is -7 (e4m3's field 0).
    let products = [fp16::ZERO; 3];
    assert_eq!(Anchor::select(&products, e4m3::ZERO).exp(), -7 + 3);
    // No products at all: just the addend.
    assert_eq!(Anchor::select::<5, 10, false>(&[], e4m3::ONE).exp(), 1);
  }

  #[test]
  fn subnormals() {
    // fp16 subnormals compare as exponent -15.
    let products = [fp16::from_bits(0x03ff), fp16::from_bits(0x8001)];
    assert_eq!(Anchor::select(&products, e4m3::ZERO).exp(), -7 + 3);
    let products = [fp16::from_bits(0x03ff); 8];
    assert_eq!(Anchor::select(&products, e4m3::from_bits(0x01)).exp(), -7 + 5);
  }

  #[test]
  fn headroom_grows_with_batch() {
    let small = Anchor::select(&[fp16::ONE; 3], e4m3::ZERO);
    let large = Anchor::select(&[fp16::ONE; 300], e4m3::ZERO);
    assert_eq!(small.exp(), 3);
    assert_eq!(large.exp(), 10);
  }

  /// A batch of 1 to 32 finite fp16 products, with exponents drawn from the whole range so that
  /// some terms get truncated away entirely.
  fn batch() -> impl Strategy<Value = (Vec<fp16>, e4m3)> {
    (proptest::collection::vec(fp16::cases_proptest_finite(), 1 ..= 32), e4m3::cases_proptest_finite())
  }

  /// A batch where every product has an exponent within a narrow band, which is where overflow
  /// would be likeliest.
  fn batch_clustered() -> impl Strategy<Value = (Vec<fp16>, e4m3)> {
    (-14_i32 ..= 15).prop_flat_map(|exp| {
      let near = fp16::cases_proptest_exp((exp - 1).max(-14) ..= exp);
      (proptest::collection::vec(near, 1 ..= 32), e4m3::cases_proptest_normal())
    })
  }

  fn check_sufficient(products: &[fp16], addend: e4m3) -> bool {
    let anchor = Anchor::select(products, addend);
    let magnitude = |x: Result<Rational, NotFinite>| match x {
      Ok(value) => aligned_value(value, anchor.exp()).abs(),
      Err(_) => unreachable!(),
    };
    let total: Integer = products.iter()
      .map(|&p| magnitude(Rational::try_from(p)))
      .chain(core::iter::once(magnitude(Rational::try_from(addend))))
      .fold(Integer::from(0), |acc, x| acc + x);
    total < Integer::power_of_2(31)
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn sufficient((products, addend) in batch()) {
      prop_assert!(check_sufficient(&products, addend), "{:?} + {:?}", products, addend)
    }

    #[test]
    fn sufficient_clustered((products, addend) in batch_clustered()) {
      prop_assert!(check_sufficient(&products, addend), "{:?} + {:?}", products, addend)
    }

    #[test]
    fn sufficient_max((n, sign) in (1_usize ..= 32, any::<bool>())) {
      // The worst case: every term at the largest magnitude.
      let products = vec![fp16::MAX.with_sign(sign); n];
      prop_assert!(check_sufficient(&products, e4m3::ZERO))
    }
  }
}
