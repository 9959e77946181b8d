//! Weight validation.
//!
//! Only strictly positive integers are eligible weights. Everything else
//! (zero, negatives, fractions, NaN/inf, absent values) maps to `None` and is
//! filtered out by the CDF builder; it is never surfaced as an error.

/// A raw weight value that can be validated into a positive integer weight.
///
/// Implemented for the primitive integer types, `f32`/`f64`, `Option<W>` and `&W`.
pub trait Weight {
    /// Returns `Some(w)` with `w >= 1` if this is a valid weight, `None` otherwise.
    fn to_weight(&self) -> Option<u64>;
}

macro_rules! impl_weight_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn to_weight(&self) -> Option<u64> {
                    u64::try_from(*self).ok().filter(|&w| w >= 1)
                }
            }
        )*
    };
}

impl_weight_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// 2^64: the first float that no longer fits in a u64.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

#[inline]
fn float_weight(w: f64) -> Option<u64> {
    if !w.is_finite() || w < 1.0 || w.fract() != 0.0 || w >= U64_LIMIT {
        return None;
    }
    Some(w as u64)
}

impl Weight for f64 {
    #[inline]
    fn to_weight(&self) -> Option<u64> {
        float_weight(*self)
    }
}

impl Weight for f32 {
    #[inline]
    fn to_weight(&self) -> Option<u64> {
        float_weight(f64::from(*self))
    }
}

impl<W: Weight> Weight for Option<W> {
    #[inline]
    fn to_weight(&self) -> Option<u64> {
        self.as_ref().and_then(Weight::to_weight)
    }
}

impl<W: Weight + ?Sized> Weight for &W {
    #[inline]
    fn to_weight(&self) -> Option<u64> {
        (**self).to_weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_integers_are_kept() {
        assert_eq!(1u8.to_weight(), Some(1));
        assert_eq!(7i32.to_weight(), Some(7));
        assert_eq!(u64::MAX.to_weight(), Some(u64::MAX));
        assert_eq!(3usize.to_weight(), Some(3));
    }

    #[test]
    fn zero_and_negative_integers_are_rejected() {
        assert_eq!(0u32.to_weight(), None);
        assert_eq!(0i64.to_weight(), None);
        assert_eq!((-5i32).to_weight(), None);
        assert_eq!(i128::MIN.to_weight(), None);
    }

    #[test]
    fn wide_integers_beyond_u64_are_rejected() {
        assert_eq!((u64::MAX as u128 + 1).to_weight(), None);
    }

    #[test]
    fn integral_floats_are_kept() {
        assert_eq!(2.0f64.to_weight(), Some(2));
        assert_eq!(5.0f32.to_weight(), Some(5));
    }

    #[test]
    fn non_integral_floats_are_rejected() {
        assert_eq!(1.5f64.to_weight(), None);
        assert_eq!(0.0f64.to_weight(), None);
        assert_eq!(0.5f32.to_weight(), None);
        assert_eq!((-3.0f64).to_weight(), None);
        assert_eq!(f64::NAN.to_weight(), None);
        assert_eq!(f64::INFINITY.to_weight(), None);
        assert_eq!(1e20f64.to_weight(), None);
    }

    #[test]
    fn options_and_references() {
        assert_eq!(Some(4u16).to_weight(), Some(4));
        assert_eq!(None::<u16>.to_weight(), None);
        let w = 9i64;
        assert_eq!((&w).to_weight(), Some(9));
    }
}
