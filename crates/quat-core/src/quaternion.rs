use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Quaternion with integer coefficients: `a + bi + cj + dk`.
///
/// Exact arithmetic only. Equality is pointwise and multiplication is
/// associative but not commutative, so `p * q` and `q * p` generally differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quaternion {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl Quaternion {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);
    pub const ONE: Self = Self::new(1, 0, 0, 0);
    pub const I: Self = Self::new(0, 1, 0, 0);
    pub const J: Self = Self::new(0, 0, 1, 0);
    pub const K: Self = Self::new(0, 0, 0, 1);

    pub const fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }

    /// Negate the three imaginary parts.
    pub fn conjugate(self) -> Self {
        Self {
            a: self.a,
            b: -self.b,
            c: -self.c,
            d: -self.d,
        }
    }

    /// `a² + b² + c² + d²`. Multiplicative under the Hamilton product.
    pub fn squared_norm(self) -> i64 {
        self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d
    }

    /// Convert to [a, b, c, d] array.
    pub fn to_array(self) -> [i64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Create from [a, b, c, d] array.
    pub fn from_array(arr: [i64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<i64> for Quaternion {
    fn from(n: i64) -> Self {
        Self::new(n, 0, 0, 0)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            a: -self.a,
            b: -self.b,
            c: -self.c,
            d: -self.d,
        }
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            a: self.a + rhs.a,
            b: self.b + rhs.b,
            c: self.c + rhs.c,
            d: self.d + rhs.d,
        }
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

/// Hamilton product (quaternion multiplication).
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            a: self.a * rhs.a - self.b * rhs.b - self.c * rhs.c - self.d * rhs.d,
            b: self.a * rhs.b + self.b * rhs.a + self.c * rhs.d - self.d * rhs.c,
            c: self.a * rhs.c - self.b * rhs.d + self.c * rhs.a + self.d * rhs.b,
            d: self.a * rhs.d + self.b * rhs.c - self.c * rhs.b + self.d * rhs.a,
        }
    }
}

/// Renders as `a±bi±cj±dk`, e.g. `10-8i-5j+1k`.
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}i{:+}j{:+}k", self.a, self.b, self.c, self.d)
    }
}
