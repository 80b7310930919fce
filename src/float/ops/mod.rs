use super::*;

/// Multiplication.
mod mul;

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<const EXP: u32, const MANT: u32>
    $trait<Float<EXP, MANT, false>> for Float<EXP, MANT, false> {
      type Output = Float<EXP, MANT, false>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl<const EXP: u32, const MANT: u32>
    $trait<&Float<EXP, MANT, false>> for Float<EXP, MANT, false> {
      type Output = Float<EXP, MANT, false>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl<const EXP: u32, const MANT: u32>
    $trait<Float<EXP, MANT, false>> for &Float<EXP, MANT, false> {
      type Output = Float<EXP, MANT, false>;

      #[inline]
      fn $name(self, rhs: Float<EXP, MANT, false>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<const EXP: u32, const MANT: u32>
    $trait<&Float<EXP, MANT, false>> for &Float<EXP, MANT, false> {
      type Output = Float<EXP, MANT, false>;

      #[inline]
      fn $name(self, rhs: &Float<EXP, MANT, false>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<const EXP: u32, const MANT: u32>
    $trait_assign<Float<EXP, MANT, false>> for Float<EXP, MANT, false> {
      #[inline]
      fn $name_assign(&mut self, rhs: Float<EXP, MANT, false>) { *self = self.$name(rhs) }
    }

    impl<const EXP: u32, const MANT: u32>
    $trait_assign<&Float<EXP, MANT, false>> for Float<EXP, MANT, false> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Float<EXP, MANT, false>) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;
