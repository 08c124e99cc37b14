//! Operation accounting threaded through every arithmetic primitive.

use std::fmt;

use crate::scalar::Scalar;

/// Sink for multiplication and addition events.
///
/// Kernels are generic over the counter, so passing [`NoCounter`] compiles the
/// accounting away entirely.
pub trait Counter {
    fn count_mul(&mut self);
    fn count_add(&mut self);

    /// Records `n` additions at once.
    fn count_adds(&mut self, n: u64) {
        for _ in 0..n {
            self.count_add();
        }
    }
}

/// Multiplication and addition/subtraction tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounter {
    pub mul: u64,
    pub add: u64,
}

impl OpCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Adds the tallies of `other` into `self`.
    pub fn merge(&mut self, other: &OpCounter) {
        self.mul += other.mul;
        self.add += other.add;
    }
}

impl Counter for OpCounter {
    #[inline]
    fn count_mul(&mut self) {
        self.mul += 1;
    }

    #[inline]
    fn count_add(&mut self) {
        self.add += 1;
    }

    #[inline]
    fn count_adds(&mut self, n: u64) {
        self.add += n;
    }
}

impl fmt::Display for OpCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mul, {} add", self.mul, self.add)
    }
}

/// Counter that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCounter;

impl Counter for NoCounter {
    #[inline(always)]
    fn count_mul(&mut self) {}

    #[inline(always)]
    fn count_add(&mut self) {}

    #[inline(always)]
    fn count_adds(&mut self, _n: u64) {}
}

impl<C: Counter + ?Sized> Counter for &mut C {
    #[inline]
    fn count_mul(&mut self) {
        (**self).count_mul();
    }

    #[inline]
    fn count_add(&mut self) {
        (**self).count_add();
    }

    #[inline]
    fn count_adds(&mut self, n: u64) {
        (**self).count_adds(n);
    }
}

impl<C: Counter> Counter for Option<C> {
    #[inline]
    fn count_mul(&mut self) {
        if let Some(c) = self {
            c.count_mul();
        }
    }

    #[inline]
    fn count_add(&mut self) {
        if let Some(c) = self {
            c.count_add();
        }
    }

    #[inline]
    fn count_adds(&mut self, n: u64) {
        if let Some(c) = self {
            c.count_adds(n);
        }
    }
}

#[inline]
pub fn add<T: Scalar, C: Counter + ?Sized>(x: T, y: T, cnt: &mut C) -> T {
    cnt.count_add();
    x + y
}

#[inline]
pub fn sub<T: Scalar, C: Counter + ?Sized>(x: T, y: T, cnt: &mut C) -> T {
    cnt.count_add();
    x - y
}

#[inline]
pub fn mul<T: Scalar, C: Counter + ?Sized>(x: T, y: T, cnt: &mut C) -> T {
    cnt.count_mul();
    x * y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_count() {
        let mut cnt = OpCounter::new();
        assert_eq!(add(2, 3, &mut cnt), 5);
        assert_eq!(sub(2, 3, &mut cnt), -1);
        assert_eq!(mul(2, 3, &mut cnt), 6);
        assert_eq!(cnt, OpCounter { mul: 1, add: 2 });
    }

    #[test]
    fn test_no_counter() {
        let mut cnt = NoCounter;
        assert_eq!(mul(4.0, 0.5, &mut cnt), 2.0);
    }

    #[test]
    fn test_optional_counter() {
        let mut inner = OpCounter::new();
        {
            let mut cnt = Some(&mut inner);
            mul(1, 1, &mut cnt);
            add(1, 1, &mut cnt);
        }
        assert_eq!(inner, OpCounter { mul: 1, add: 1 });

        let mut absent: Option<&mut OpCounter> = None;
        mul(1, 1, &mut absent);
    }

    #[test]
    fn test_shared_by_reference() {
        let mut total = OpCounter::new();
        let mut outer = &mut total;
        let mut nested = &mut outer;
        mul(1.0, 2.0, &mut nested);
        nested.count_adds(3);
        assert_eq!(total, OpCounter { mul: 1, add: 3 });
    }

    #[test]
    fn test_merge_and_reset() {
        let mut a = OpCounter { mul: 2, add: 3 };
        a.merge(&OpCounter { mul: 5, add: 7 });
        assert_eq!(a, OpCounter { mul: 7, add: 10 });
        assert_eq!(a.to_string(), "7 mul, 10 add");
        a.reset();
        assert_eq!(a, OpCounter::default());
    }
}
