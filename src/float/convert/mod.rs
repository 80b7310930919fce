use super::*;

/// Used to do value-to-value conversions that may *round* the input, according to the rules of
/// the datapath (see below). It is the reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`], but these conversions are _not
/// necessarily lossless_, unlike the [convention for the `From`
/// trait](core::convert::From#when-to-implement-from). Lossless conversions, such as widening an e4m3
/// into an fp16, are plain [`From`] impls instead.
///
/// Prefer implementing [`RoundFrom`] over [`RoundInto`], because implementing [`RoundFrom`]
/// automatically provides an implementation of [`RoundInto`]; and prefer using [`RoundInto`]
/// over [`RoundFrom`] when specifying trait bounds on a generic function.
///
/// # Rounding
///
/// "Rounding" in this crate always means:
///
///   - Round to the nearest representable value; in case of a tie, to the one with an even
///     mantissa.
///   - If the result is too large for the target format, it saturates to signed infinity.
///   - If the result is too small for a *normal* number of the target format, it flushes to
///     signed zero (subnormals are never produced).
///
/// # Examples
///
/// ```
/// # use npu_softfloat::*;
/// assert_eq!(fp16::round_from(1.5_f64).to_bits(), 0x3e00);
/// assert_eq!(bf16::round_from(1e39_f64), bf16::INFINITY);
/// assert_eq!(fp16::round_from(1e-6_f32), fp16::ZERO);
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, [rounding](RoundFrom#rounding) if necessary.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundFrom`]; see the documentation there.
///
/// ```
/// # use npu_softfloat::*;
/// let x: bf16 = 3.0_f32.round_into();
/// assert_eq!(x.to_bits(), 0x4040);
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, [rounding](RoundFrom#rounding) if
  /// necessary.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T, U> RoundInto<U> for T
where
  U: RoundFrom<T>,
{
  #[inline]
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

/// Lossless widening between formats
mod widen;

/// Conversions to and from `f32`/`f64`
mod float;
