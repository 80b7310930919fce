//! This module contains the handful of bit-level integer operations needed by the datapath, as an
//! extension trait over the unsigned machine types that hold bit patterns (`u32`) and normalised
//! significands (`u64`). These are hidden from the end-user.

/// Bit-twiddling helpers shared by the codec, the rounding logic, and the aligner.
pub(crate) trait Sealed: Copy + Eq {
  /// Set all bits more significant than `n` to 0. If `n >= BITS`, this is the identity.
  ///
  /// ```ignore
  /// assert_eq!(0xabcd_u32.mask_lsb(4), 0x000d_u32)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  /// Get bit `n` (numbered from the lsb, starting at 0) as a bool.
  fn get_bit(self, n: u32) -> bool;

  /// Get the lsb of `self` as a bool.
  fn get_lsb(self) -> bool;
}

macro_rules! impl_sealed {
  ($uint:ty) => {
    impl Sealed for $uint {
      #[inline]
      fn mask_lsb(self, n: u32) -> Self {
        if n >= Self::BITS {
          self
        } else {
          self & ((1 << n) - 1)
        }
      }

      #[inline]
      fn get_bit(self, n: u32) -> bool {
        debug_assert!(n < Self::BITS);
        (self >> n) & 1 == 1
      }

      #[inline]
      fn get_lsb(self) -> bool {
        self & 1 == 1
      }
    }
  }
}

impl_sealed!{u32}
impl_sealed!{u64}

/// `ceil(log2(x))`, with `ceil_log2(0) = ceil_log2(1) = 0`.
///
/// ```ignore
/// assert_eq!(ceil_log2(4), 2);
/// assert_eq!(ceil_log2(5), 3);
/// ```
#[inline]
pub(crate) const fn ceil_log2(x: usize) -> u32 {
  if x <= 1 {
    0
  } else {
    usize::BITS - (x - 1).leading_zeros()
  }
}
