// vector.rs
// Integer 2D vector used for grid positions and per-tick displacements

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A grid coordinate or displacement. Plain value type; equality is componentwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const ZERO: Vec2i = Vec2i { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `n`. Same as `self * n` and `n * self`.
    pub fn scale(self, n: i32) -> Self {
        Self::new(self.x * n, self.y * n)
    }

    /// True when `0 <= x < width` and `0 <= y < height`.
    pub fn within(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }

    /// True when `0 < x < width` and `0 < y < height`; row 0 and column 0 are excluded.
    pub fn strictly_within(self, width: i32, height: i32) -> bool {
        self.x > 0 && self.x < width && self.y > 0 && self.y < height
    }
}

impl Add for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Vec2i {
    type Output = Vec2i;

    fn mul(self, n: i32) -> Vec2i {
        self.scale(n)
    }
}

impl Mul<Vec2i> for i32 {
    type Output = Vec2i;

    fn mul(self, v: Vec2i) -> Vec2i {
        v.scale(self)
    }
}

impl Neg for Vec2i {
    type Output = Vec2i;

    fn neg(self) -> Vec2i {
        Vec2i::ZERO - self
    }
}

impl AddAssign for Vec2i {
    fn add_assign(&mut self, rhs: Vec2i) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2i {
    fn sub_assign(&mut self, rhs: Vec2i) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl From<(i32, i32)> for Vec2i {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Vec2i {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vec2i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
