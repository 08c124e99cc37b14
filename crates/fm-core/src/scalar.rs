//! Element type bounds for the kernels.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use half::f16;
use num_complex::{Complex32, Complex64};
use num_traits::Zero;

/// Numeric capability every kernel relies on: `+`, `-`, `*` and a zero.
///
/// No ordering and no division are assumed. Anything satisfying the bounds
/// gets the implementation for free.
pub trait Scalar:
    Copy + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Zero
{
}

impl<T> Scalar for T where
    T: Copy
        + Debug
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Zero
{
}

/// Embedding of a scalar into `Complex64`, used by the complex-lifted
/// 4x4 kernel and by error measurement.
///
/// Real types keep only the real part on the way back (integers round to the
/// nearest value). Complex types round-trip the full value.
pub trait ComplexLift: Scalar {
    fn to_complex(self) -> Complex64;

    fn from_complex(z: Complex64) -> Self;

    /// Absolute value, computed in `f64`.
    fn magnitude(self) -> f64 {
        self.to_complex().norm()
    }
}

impl ComplexLift for f64 {
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }

    fn from_complex(z: Complex64) -> Self {
        z.re
    }

    fn magnitude(self) -> f64 {
        self.abs()
    }
}

impl ComplexLift for f32 {
    fn to_complex(self) -> Complex64 {
        Complex64::new(self as f64, 0.0)
    }

    fn from_complex(z: Complex64) -> Self {
        z.re as f32
    }
}

impl ComplexLift for f16 {
    fn to_complex(self) -> Complex64 {
        Complex64::new(self.to_f64(), 0.0)
    }

    fn from_complex(z: Complex64) -> Self {
        f16::from_f64(z.re)
    }
}

impl ComplexLift for i32 {
    fn to_complex(self) -> Complex64 {
        Complex64::new(self as f64, 0.0)
    }

    fn from_complex(z: Complex64) -> Self {
        z.re.round() as i32
    }
}

// Exact only while intermediate values stay below 2^53.
impl ComplexLift for i64 {
    fn to_complex(self) -> Complex64 {
        Complex64::new(self as f64, 0.0)
    }

    fn from_complex(z: Complex64) -> Self {
        z.re.round() as i64
    }
}

impl ComplexLift for Complex64 {
    fn to_complex(self) -> Complex64 {
        self
    }

    fn from_complex(z: Complex64) -> Self {
        z
    }
}

impl ComplexLift for Complex32 {
    fn to_complex(self) -> Complex64 {
        Complex64::new(self.re as f64, self.im as f64)
    }

    fn from_complex(z: Complex64) -> Self {
        Complex32::new(z.re as f32, z.im as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn test_standard_types() {
        assert_scalar::<f32>();
        assert_scalar::<f64>();
        assert_scalar::<i32>();
        assert_scalar::<i64>();
        assert_scalar::<f16>();
        assert_scalar::<Complex64>();
    }

    #[test]
    fn test_real_lift_drops_imaginary() {
        let z = Complex64::new(2.5, 7.0);
        assert_eq!(f64::from_complex(z), 2.5);
        assert_eq!(f32::from_complex(z), 2.5f32);
        assert_eq!(f16::from_complex(z), f16::from_f32(2.5));
    }

    #[test]
    fn test_integer_lift_rounds() {
        assert_eq!(i32::from_complex(Complex64::new(18.999_999_9, 0.0)), 19);
        assert_eq!(i64::from_complex(Complex64::new(-3.000_000_1, 1e-9)), -3);
    }

    #[test]
    fn test_complex_round_trip() {
        let z = Complex64::new(1.0, -2.0);
        assert_eq!(Complex64::from_complex(z.to_complex()), z);
        let w = Complex32::new(0.5, 0.25);
        assert_eq!(Complex32::from_complex(w.to_complex()), w);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!((-4.0f64).magnitude(), 4.0);
        assert_eq!(Complex64::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!((-7i32).magnitude(), 7.0);
    }
}
