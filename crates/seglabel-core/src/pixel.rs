//! Pixel element traits
//!
//! A raster stores values of one [`Pixel`] type. Scalars are single-channel
//! pixels; fixed-size arrays `[S; N]` of a [`Scalar`] are `N`-channel pixels
//! (color images use `[u8; 3]`, `[f32; 3]`, ...).
//!
//! [`Label`] narrows [`Scalar`] to the ordered, hashable integer types that
//! can serve as segment identifiers and index a dense statistics table.

use std::fmt::Debug;
use std::hash::Hash;

/// Numeric channel element.
///
/// Every scalar is also a single-channel [`Pixel`]. Values are promoted to
/// `f64` for accumulation and converted back with rounding (half away from
/// zero) and saturation for integer types.
pub trait Scalar: Pixel<Channel = Self> + Default + PartialOrd {
    /// Promote to `f64`.
    fn to_f64(self) -> f64;

    /// Convert from `f64`, rounding and clamping integers to their range.
    ///
    /// NaN converts to zero for integer types.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    // float-to-int `as` saturates at the bounds and maps NaN to 0
                    value.round() as $t
                }
            }
        )*
    };
}

impl_scalar_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Scalar for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Segment identifier stored in a label raster.
pub trait Label: Scalar + Ord + Hash {
    /// Index into a dense per-label table, `None` for negative labels.
    fn to_index(self) -> Option<usize>;

    /// Label with the given sequential id, `None` if not representable.
    fn from_index(index: usize) -> Option<Self>;
}

macro_rules! impl_label {
    ($($t:ty),*) => {
        $(
            impl Label for $t {
                #[inline]
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn from_index(index: usize) -> Option<Self> {
                    <$t>::try_from(index).ok()
                }
            }
        )*
    };
}

impl_label!(u8, u16, u32, u64, i8, i16, i32, i64);

/// A raster element made of one or more scalar channels.
pub trait Pixel: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Channel element type
    type Channel: Scalar;

    /// Number of channels per pixel
    const CHANNELS: usize;

    /// Get channel `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::CHANNELS`.
    fn channel(&self, index: usize) -> Self::Channel;

    /// Set channel `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::CHANNELS`.
    fn set_channel(&mut self, index: usize, value: Self::Channel);

    /// Pixel with every channel set to `value`.
    fn splat(value: Self::Channel) -> Self;
}

macro_rules! impl_scalar_pixel {
    ($($t:ty),*) => {
        $(
            impl Pixel for $t {
                type Channel = $t;
                const CHANNELS: usize = 1;

                #[inline]
                fn channel(&self, index: usize) -> $t {
                    assert!(index == 0, "channel index {index} out of range for scalar pixel");
                    *self
                }

                #[inline]
                fn set_channel(&mut self, index: usize, value: $t) {
                    assert!(index == 0, "channel index {index} out of range for scalar pixel");
                    *self = value;
                }

                #[inline]
                fn splat(value: $t) -> Self {
                    value
                }
            }
        )*
    };
}

impl_scalar_pixel!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<S: Scalar, const N: usize> Pixel for [S; N] {
    type Channel = S;
    const CHANNELS: usize = N;

    #[inline]
    fn channel(&self, index: usize) -> S {
        self[index]
    }

    #[inline]
    fn set_channel(&mut self, index: usize, value: S) {
        self[index] = value;
    }

    #[inline]
    fn splat(value: S) -> Self {
        [value; N]
    }
}

/// Three-channel pixel (RGB or any other triple)
pub type Vector3<S> = [S; 3];
