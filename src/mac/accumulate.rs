use super::*;

impl Accumulator {
  /// An empty accumulator (sum 0) in the frame of `anchor`.
  #[inline]
  pub const fn new(anchor: Anchor) -> Self {
    Self { anchor, sum: 0 }
  }

  /// The anchor of this accumulator's frame.
  #[inline]
  pub const fn anchor(&self) -> Anchor {
    self.anchor
  }

  /// The raw fixed-point sum so far.
  #[inline]
  pub const fn sum(&self) -> i32 {
    self.sum
  }

  /// Add a term that has already been [aligned](Float::align) to [`Self::anchor`].
  ///
  /// The addition wraps on overflow, which keeps it associative and commutative: the sum never
  /// depends on the order the terms come in. Overflow cannot happen if the anchor was
  /// [selected](Anchor::select) for all the terms being added.
  #[inline]
  pub fn add_aligned(&mut self, term: i32) {
    self.sum = self.sum.wrapping_add(term)
  }
}

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> core::ops::AddAssign<Float<EXP, MANT, FINITE>> for Accumulator {
  /// [Align](Float::align) `rhs` to the accumulator's anchor and add it.
  #[inline]
  fn add_assign(&mut self, rhs: Float<EXP, MANT, FINITE>) {
    self.add_aligned(rhs.align(self.anchor))
  }
}

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> core::ops::AddAssign<&Float<EXP, MANT, FINITE>> for Accumulator {
  #[inline]
  fn add_assign(&mut self, rhs: &Float<EXP, MANT, FINITE>) {
    *self += *rhs
  }
}

/// Sum a batch of aligned terms plus an aligned addend, exactly.
///
/// ```
/// # use npu_softfloat::reduce;
/// assert_eq!(reduce(&[1 << 27, -(1 << 26), 3], 1 << 26), 1 << 27 | 3);
/// ```
pub fn reduce(terms: &[i32], addend: i32) -> i32 {
  terms.iter().fold(addend, |sum, &term| sum.wrapping_add(term))
}
