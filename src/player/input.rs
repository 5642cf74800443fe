use crate::layout::Point;

/// Directional state sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionInput {
    pub fn is_idle(&self) -> bool {
        self.vector() == Point::zero()
    }

    /// Unit direction vector. Left wins over right and up wins over down, so
    /// opposing keys never cancel to a standstill.
    pub fn vector(&self) -> Point<f64> {
        let x: f64 = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };
        let y: f64 = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        let length = (x * x + y * y).sqrt();
        if length == 0.0 {
            return Point::zero();
        }
        Point::new(x / length, y / length)
    }
}
