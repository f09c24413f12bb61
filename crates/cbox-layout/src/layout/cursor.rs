//! Vertical layout cursor
//!
//! Panels are laid out top to bottom as a stack of segments. The cursor
//! accumulates segment heights and remembers named checkpoints so emitters
//! never rebuild long offset sums by hand.

/// Running vertical offset with named checkpoints
#[derive(Debug, Clone)]
pub struct Cursor {
    origin: f32,
    y: f32,
    marks: Vec<(&'static str, f32)>,
}

impl Cursor {
    /// Start a cursor at the given absolute y coordinate
    pub fn new(origin: f32) -> Self {
        Self {
            origin,
            y: origin,
            marks: Vec::new(),
        }
    }

    /// Distance travelled since the origin
    pub fn consumed(&self) -> f32 {
        self.y - self.origin
    }

    /// Move down by `height` and return the new y
    pub fn advance(&mut self, height: f32) -> f32 {
        self.y += height;
        self.y
    }

    /// Record the current y under `name` and return it
    pub fn mark(&mut self, name: &'static str) -> f32 {
        self.marks.push((name, self.y));
        self.y
    }

    /// Advance by `height`, then mark the new position
    pub fn segment(&mut self, height: f32, name: &'static str) -> f32 {
        self.advance(height);
        self.mark(name)
    }

    /// All checkpoints in the order they were recorded
    pub fn marks(&self) -> &[(&'static str, f32)] {
        &self.marks
    }

    /// Whether the distance travelled equals `extent` up to f32 rounding.
    ///
    /// The tolerance scales with the coordinates involved, since a long walk
    /// of segments and a grouped sum of the same terms drift apart by a few
    /// ulps.
    pub fn spans(&self, extent: f32) -> bool {
        let scale = self.y.abs().max(extent.abs()).max(1.0);
        (self.consumed() - extent).abs() <= f32::EPSILON * 16.0 * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_accumulate() {
        let mut cursor = Cursor::new(5.0);
        assert_eq!(cursor.segment(10.0, "a"), 15.0);
        assert_eq!(cursor.segment(2.5, "b"), 17.5);
        assert_eq!(cursor.advance(1.0), 18.5);
        assert_eq!(cursor.consumed(), 13.5);
        assert_eq!(cursor.marks(), &[("a", 15.0), ("b", 17.5)]);
    }

    #[test]
    fn test_mark_without_advancing() {
        let mut cursor = Cursor::new(3.0);
        assert_eq!(cursor.mark("top"), 3.0);
        cursor.segment(2.0, "edge");
        assert_eq!(cursor.marks(), &[("top", 3.0), ("edge", 5.0)]);
        assert_eq!(cursor.consumed(), 2.0);
    }

    #[test]
    fn test_spans_tolerates_rounding_on_large_walks() {
        let heights = [2720.99_f32, 8.6, 2720.99, 4.3, 107.2, 4.3, 2720.99, 8.6];
        let mut cursor = Cursor::new(5.0);
        for h in heights {
            cursor.advance(h);
        }
        cursor.advance(2720.99);

        let grouped = 4.0 * 2720.99_f32 + 2.0 * 8.6 + 2.0 * 4.3 + 107.2;
        assert!(cursor.spans(grouped));
        assert!(!cursor.spans(grouped + 1.0));
    }
}
