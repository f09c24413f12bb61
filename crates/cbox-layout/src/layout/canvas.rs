//! Canvas sizing
//!
//! Layout: [Strip] [padding] [Side #1]
//!                           [padding]
//!                           [Side #2]
//! with `padding` around the outside as well.

use super::{Canvas, DerivedDimensions, Rect};

/// Compute the canvas needed to hold the strip and both side panels.
pub fn size_canvas(dims: &DerivedDimensions, padding: f32) -> Canvas {
    let total_width = padding + dims.strip_width + padding + dims.side_outer_width + padding;
    let side_column_height = side_column_height(dims, padding);
    let total_height = dims.strip_height.max(side_column_height) + 2.0 * padding;

    Canvas {
        total_width,
        total_height,
    }
}

/// Height of the two stacked side panels and the gap between them
pub fn side_column_height(dims: &DerivedDimensions, padding: f32) -> f32 {
    2.0 * dims.side_stack_height + padding
}

/// Bounding box of the strip panel
pub fn strip_bounds(dims: &DerivedDimensions, padding: f32) -> Rect {
    Rect::new(padding, padding, dims.strip_width, dims.strip_height)
}

/// Bounding box of the side panel at `index` (0 = top)
pub fn side_bounds(dims: &DerivedDimensions, padding: f32, index: usize) -> Rect {
    let x = padding + dims.strip_width + padding;
    let y = padding + index as f32 * (dims.side_stack_height + padding);
    Rect::new(x, y, dims.side_outer_width, dims.side_stack_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Point, derive_dimensions};
    use crate::types::BoxSpec;

    #[test]
    fn test_default_canvas() {
        let dims = derive_dimensions(&BoxSpec::default());
        let canvas = size_canvas(&dims, 5.0);

        // 5 + 110 + 5 + 122 + 5
        assert_eq!(canvas.total_width, 247.0);
        // max(282, 2 * 102 + 5) + 10
        assert_eq!(canvas.total_height, 292.0);
    }

    #[test]
    fn test_side_column_taller_than_strip() {
        // Wide, shallow box: long side column dominates
        let dims = derive_dimensions(&BoxSpec::new(20.0, 20.0, 60.0, 1.0));
        let canvas = size_canvas(&dims, 5.0);

        assert!(side_column_height(&dims, 5.0) > dims.strip_height);
        assert_eq!(
            canvas.total_height,
            2.0 * dims.side_stack_height + 5.0 + 10.0
        );
    }

    #[test]
    fn test_panel_bounds_inside_canvas() {
        let dims = derive_dimensions(&BoxSpec::default());
        let canvas = size_canvas(&dims, 5.0);

        for rect in [
            strip_bounds(&dims, 5.0),
            side_bounds(&dims, 5.0, 0),
            side_bounds(&dims, 5.0, 1),
        ] {
            assert!(canvas.contains(Point::new(rect.x, rect.y)));
            assert!(canvas.contains(Point::new(rect.right(), rect.bottom())));
        }
    }
}
