//! Flapped side panels
//!
//! Each side panel is a stack of: upper face (h), peel (p), lower face (h),
//! peel (p) and glue flap. The upper face is the narrow inner width with
//! short wings either side; the lower face spans the full outer width. The
//! outline is symmetric, so only its left half is described here and the
//! right half is mirrored.

use crate::constants::{CHAMFER_DROP_MM, LABEL_INSET_X_MM, LABEL_OFFSET_Y_MM};

use super::chamfer::{ChamferedStep, MirrorAxis, PanelHalf};
use super::{Cursor, DerivedDimensions, Layer, Panel, PanelKind, Point, Primitive, Rect};

/// Horizontal reference positions of a side panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideColumns {
    /// Outer edge of the lower face
    pub outer_left: f32,
    pub outer_right: f32,
    /// Edges of the inner (upper) face
    pub inner_left: f32,
    pub inner_right: f32,
}

impl SideColumns {
    pub fn new(dims: &DerivedDimensions, x: f32) -> Self {
        let inner_left = x + (dims.side_outer_width - dims.side_inner_width) / 2.0;
        Self {
            outer_left: x,
            outer_right: x + dims.side_outer_width,
            inner_left,
            inner_right: inner_left + dims.side_inner_width,
        }
    }

    fn axis(&self) -> MirrorAxis {
        MirrorAxis::between(self.outer_left, self.outer_right)
    }
}

/// Vertical reference positions of a side panel
#[derive(Debug, Clone, Copy, PartialEq)]
struct SideRows {
    top: f32,
    upper_face_end: f32,
    lower_face_start: f32,
    flap_start: f32,
    bottom: f32,
}

/// Emit side panel `index` with its top-left corner at `bounds.x, bounds.y`.
pub fn emit_side(
    dims: &DerivedDimensions,
    bounds: Rect,
    index: usize,
    labels: bool,
    folds: bool,
) -> Panel {
    let h = dims.spec.height;
    let p = dims.peel_height;
    let cols = SideColumns::new(dims, bounds.x);
    let axis = cols.axis();
    let wing = cols.inner_left - p;

    let mut cursor = Cursor::new(bounds.y);
    let top = cursor.mark("top");
    let upper_face_end = cursor.segment(h, "upper_face_end");
    let lower_face_start = cursor.segment(p, "lower_face_start");
    cursor.segment(h, "lower_face_end");
    let flap_start = cursor.segment(p, "flap_start");
    let bottom = cursor.segment(dims.flap_height, "bottom");
    debug_assert!(cursor.spans(dims.side_stack_height));
    let rows = SideRows {
        top,
        upper_face_end,
        lower_face_start,
        flap_start,
        bottom,
    };

    let mut panel = Panel::new(PanelKind::Side(index), bounds);

    // Cut outline: top and bottom edges are shared by both halves
    panel.push(Primitive::line(
        Point::new(cols.inner_left, top),
        Point::new(cols.inner_right, top),
        Layer::Cut,
    ));
    for half in [PanelHalf::Left, PanelHalf::Right] {
        emit_outline_half(&mut panel, &axis, half, &cols, wing, &rows);
    }
    panel.push(Primitive::line(
        Point::new(cols.inner_left, bottom),
        Point::new(cols.inner_right, bottom),
        Layer::Cut,
    ));

    // Upper face: open at the top, scored on three sides
    for x in [cols.inner_left, cols.inner_right] {
        panel.push(Primitive::line(
            Point::new(x, top),
            Point::new(x, upper_face_end),
            Layer::Score,
        ));
    }
    panel.push(Primitive::line(
        Point::new(cols.inner_left, upper_face_end),
        Point::new(cols.inner_right, upper_face_end),
        Layer::Score,
    ));

    // Lower face
    panel.push(Primitive::rect(
        Rect::new(cols.inner_left, lower_face_start, dims.side_inner_width, h),
        Layer::Score,
    ));

    if folds {
        let fold_left = cols.inner_left - p;
        let fold_right = cols.inner_right + p;
        panel.push(Primitive::line(
            Point::new(fold_left, lower_face_start),
            Point::new(fold_left, flap_start),
            Layer::Fold,
        ));
        panel.push(Primitive::line(
            Point::new(fold_left, flap_start),
            Point::new(fold_right, flap_start),
            Layer::Fold,
        ));
        panel.push(Primitive::line(
            Point::new(fold_right, lower_face_start),
            Point::new(fold_right, flap_start),
            Layer::Fold,
        ));
    }

    if labels {
        let at = Point::new(
            (cols.inner_left + LABEL_INSET_X_MM).min(bounds.right()),
            (top + LABEL_OFFSET_Y_MM).min(bounds.bottom()),
        );
        panel.push(Primitive::label(
            format!(
                "Side Panel (outside dims {:.1} x {:.1} mm) #{}",
                dims.side_stack_height,
                dims.side_outer_width,
                index + 1
            ),
            at,
        ));
    }

    panel
}

/// Emit one half of the side panel's cut outline, from the top chamfer down
/// to the flap chamfer.
fn emit_outline_half(
    panel: &mut Panel,
    axis: &MirrorAxis,
    half: PanelHalf,
    cols: &SideColumns,
    wing: f32,
    rows: &SideRows,
) {
    let SideRows {
        top,
        upper_face_end,
        lower_face_start,
        flap_start,
        bottom,
    } = *rows;

    let inner = cols.inner_left;
    let outer = cols.outer_left;

    // Top corner: inner face out to the wing
    let top_chamfer = ChamferedStep::new(inner, wing, top, CHAMFER_DROP_MM);
    panel.push(top_chamfer.emit(axis, half));

    // Wing edge and the step back in under it
    panel.push(axis.cut(half, (wing, top_chamfer.end_y()), (wing, upper_face_end)));
    panel.push(axis.cut(half, (inner, upper_face_end), (wing, upper_face_end)));

    // Across the peel strip to the lower face
    let peel_chamfer = ChamferedStep::new(
        inner,
        wing,
        upper_face_end,
        lower_face_start - upper_face_end,
    );
    panel.push(peel_chamfer.emit(axis, half));
    panel.push(axis.cut(half, (wing, lower_face_start), (outer, lower_face_start)));

    // Lower face edge, then back in above the flap
    let lower_chamfer = ChamferedStep::new(
        outer,
        wing,
        flap_start - CHAMFER_DROP_MM,
        CHAMFER_DROP_MM,
    );
    panel.push(axis.cut(half, (outer, lower_face_start), (outer, lower_chamfer.y)));
    panel.push(lower_chamfer.emit(axis, half));

    // Tapered glue flap
    let flap_chamfer = ChamferedStep::new(wing, inner, flap_start, bottom - flap_start);
    panel.push(flap_chamfer.emit(axis, half));
}
