//! Continuous strip panel
//!
//! The strip wraps the box: upper wall, base, lower wall, with no glue flaps.
//! Top to bottom its segments are
//! wall face (h), peel (p), wall lining (h), thickness (t), base (w),
//! thickness (t), wall lining (h), peel (p), wall face (h).

use crate::constants::{LABEL_INSET_X_MM, LABEL_OFFSET_Y_MM};

use super::{Cursor, DerivedDimensions, Layer, Panel, PanelKind, Point, Primitive, Rect};

/// Emit the strip panel with its top-left corner at `bounds.x, bounds.y`.
pub fn emit_strip(dims: &DerivedDimensions, bounds: Rect, labels: bool, folds: bool) -> Panel {
    let h = dims.spec.height;
    let p = dims.peel_height;
    let t = dims.spec.thickness;
    let w = dims.base_width;

    let x_left = bounds.x;
    let x_right = bounds.x + dims.strip_width;

    // A score line runs across the strip at every checkpoint
    let mut cursor = Cursor::new(bounds.y);
    cursor.segment(h, "upper_face_end");
    cursor.segment(p, "upper_peel_end");
    cursor.segment(h, "upper_lining_end");
    let base_top = cursor.segment(t, "base_top");
    let base_bottom = cursor.segment(w, "base_bottom");
    cursor.segment(t, "lower_lining_start");
    cursor.segment(h, "lower_lining_end");
    cursor.segment(p, "lower_peel_end");
    cursor.advance(h);
    debug_assert!(cursor.spans(dims.strip_height));

    let mut panel = Panel::new(PanelKind::Strip, bounds);

    for &(_, y) in cursor.marks() {
        panel.push(Primitive::line(
            Point::new(x_left, y),
            Point::new(x_right, y),
            Layer::Score,
        ));
    }

    panel.push(Primitive::rect(
        Rect::new(x_left, bounds.y, dims.strip_width, dims.strip_height),
        Layer::Cut,
    ));

    // Where the walls fold up from the base
    if folds {
        for x in [
            x_left + dims.peel_height,
            x_left + dims.peel_height + dims.spec.length,
        ] {
            panel.push(Primitive::line(
                Point::new(x, base_top),
                Point::new(x, base_bottom),
                Layer::Fold,
            ));
        }
    }

    if labels {
        let at = Point::new(
            (x_left + LABEL_INSET_X_MM).min(x_right),
            (base_top + LABEL_OFFSET_Y_MM).min(bounds.bottom()),
        );
        panel.push(Primitive::label(
            format!(
                "Main Body (outside dims {:.1} x {:.1} mm)",
                dims.strip_height, dims.strip_width
            ),
            at,
        ));
    }

    panel
}
