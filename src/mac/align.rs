use super::*;

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> Float<EXP, MANT, FINITE> {
  /// Convert `self` into a signed fixed-point integer in the frame of `anchor`, i.e. the integer
  /// `t` such that `t × 2^(anchor - 31)` is `self`, **truncated towards zero** to that frame.
  ///
  /// The significand (with the hidden bit for normals, without for subnormals, at exponent
  /// `1 - bias` for the latter) is shifted by `anchor - 31 - exp_lsb` places right, where `exp_lsb`
  /// is the exponent of its lsb:
  ///
  ///   - shifted 32 or more places right, nothing is left: 0;
  ///   - shifted right by less, the bits shifted out are simply dropped (no rounding);
  ///   - shifted left by up to 31 places, bits shifted past bit 31 wrap around;
  ///   - shifted left by more, 0 again.
  ///
  /// Subnormals sit at their true exponent `1 - bias`, the value they decode to, not at `-bias`.
  ///
  /// The last two cases cannot happen for an anchor from [`Anchor::select`]. The sign is then
  /// applied with a two's complement negation. Zero aligns to 0 whatever the anchor.
  ///
  /// NaN and infinity aren't numbers and have no aligned value; they are aligned as if their
  /// exponent field were an ordinary one, so they must be dealt with beforehand.
  ///
  /// ```
  /// # use npu_softfloat::*;
  /// let anchor = Anchor::from_bits(127 + 4);
  /// assert_eq!(fp16::from_bits(0x3c00).align(anchor), 1 << 27);   // 1.0
  /// assert_eq!(e4m3::from_bits(0xc0).align(anchor), -1 << 28);    // -2.0
  /// ```
  pub fn align(self, anchor: Anchor) -> i32 {
    let (sig, exp_lsb) = self.unpack();
    let shift = anchor.exp() - 31 - exp_lsb;
    let magnitude =
      if shift >= 32 {
        0
      } else if shift >= 0 {
        (sig >> shift) as u32
      } else if shift >= -31 {
        (sig as u32) << -shift
      } else {
        0
      };
    let aligned = magnitude as i32;
    if self.sign() {aligned.wrapping_neg()} else {aligned}
  }
}
