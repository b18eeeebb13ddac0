//! Fixed-Point 2D Vector
//!
//! Screen-space positions for the flight layer.

use std::fmt;
use serde::{Serialize, Deserialize};

use super::fixed::{Fixed, from_int, to_float};

/// Screen position with Q16.16 components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVec2 {
    /// Horizontal pixel offset
    pub x: Fixed,
    /// Vertical pixel offset, growing downward
    pub y: Fixed,
}

impl FixedVec2 {
    /// Position from raw fixed-point components.
    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Position from whole pixels.
    #[inline]
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self::new(from_int(x), from_int(y))
    }
}

impl fmt::Display for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", to_float(self.x), to_float(self.y))
    }
}
