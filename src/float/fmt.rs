use super::*;

use core::fmt::{Debug, Display};

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> Debug for Float<EXP, MANT, FINITE> {
  /// Print the bit pattern, with the sign, exponent, and mantissa fields separated by `_`.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let sign = self.sign() as u32;
    let exponent = self.exponent();
    let mantissa = self.mantissa();
    f.debug_tuple("Float")
      .field(&format_args!("0b{sign:b}_{exponent:0we$b}_{mantissa:0wm$b}", we=EXP as usize, wm=MANT as usize))
      .finish()
  }
}

impl<
  const EXP: u32,
  const MANT: u32,
  const FINITE: bool,
> Display for Float<EXP, MANT, FINITE> {
  /// Print the real value, which is always exactly representable as an `f64`.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Display::fmt(&f64::from(*self), f)
  }
}

impl Debug for Decoded {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let hidden = self.frac >> Self::FRAC_WIDTH;
    let fraction = self.frac & !(1 << Self::FRAC_WIDTH);
    f.debug_struct("Decoded")
      .field("sign", &self.sign)
      .field("frac", &format_args!("0b{hidden:b}_{fraction:0w$b}", w=Self::FRAC_WIDTH as usize))
      .field("exp", &format_args!("{:+}", self.exp))
      .finish()
  }
}
