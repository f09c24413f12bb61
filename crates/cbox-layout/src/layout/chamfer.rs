//! Chamfered steps on the side panel outline
//!
//! Wherever the side panel outline steps between two x positions it does so
//! with a diagonal instead of a right angle. Each step is described once for
//! the left half of the panel and mirrored onto the right half.

use super::{Layer, Point, Primitive};

/// Which half of a symmetric panel an edge belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHalf {
    Left,
    Right,
}

/// Mirror axis of a symmetric panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorAxis {
    left: f32,
    right: f32,
}

impl MirrorAxis {
    /// Axis halfway between the two outer edges of a panel
    pub fn between(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Map a left-half x coordinate onto the given half
    pub fn x(&self, half: PanelHalf, left_x: f32) -> f32 {
        match half {
            PanelHalf::Left => left_x,
            PanelHalf::Right => self.left + self.right - left_x,
        }
    }

    pub fn point(&self, half: PanelHalf, left_x: f32, y: f32) -> Point {
        Point::new(self.x(half, left_x), y)
    }

    /// A cut line given in left-half coordinates, placed on `half`
    pub fn cut(&self, half: PanelHalf, from: (f32, f32), to: (f32, f32)) -> Primitive {
        Primitive::line(
            self.point(half, from.0, from.1),
            self.point(half, to.0, to.1),
            Layer::Cut,
        )
    }
}

/// A diagonal step from `from_x` at `y` to `to_x` at `y + drop`.
///
/// Both x coordinates are given for the left half of the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamferedStep {
    pub from_x: f32,
    pub to_x: f32,
    pub y: f32,
    pub drop: f32,
}

impl ChamferedStep {
    pub fn new(from_x: f32, to_x: f32, y: f32, drop: f32) -> Self {
        Self {
            from_x,
            to_x,
            y,
            drop,
        }
    }

    /// y coordinate where the step ends
    pub fn end_y(&self) -> f32 {
        self.y + self.drop
    }

    /// Emit the step as a cut line on the given half of the panel
    pub fn emit(&self, axis: &MirrorAxis, half: PanelHalf) -> Primitive {
        axis.cut(half, (self.from_x, self.y), (self.to_x, self.end_y()))
    }
}
