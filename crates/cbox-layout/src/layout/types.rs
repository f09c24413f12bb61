//! Layout data types for box templates
//!
//! These types are the backend-independent output of the layout engine.
//! Coordinates are millimeters with the origin at the top-left corner of the
//! canvas and y growing downward.

/// Semantic layer of a stroked primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Full-depth cut separating material
    Cut,
    /// Partial-depth peel/score line at glue-flap joints
    Score,
    /// Bend guide, no material removed
    Fold,
}

impl Layer {
    /// All layers in drawing order
    pub const ALL: [Layer; 3] = [Layer::Cut, Layer::Score, Layer::Fold];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Cut => "cut",
            Layer::Score => "score",
            Layer::Fold => "fold",
        }
    }
}

/// A point in canvas millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// A rectangular area in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn perimeter(&self) -> f32 {
        2.0 * (self.width + self.height)
    }

    /// Whether the point lies inside or on the edge of this rectangle
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Whether the two rectangles share any area or edge
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Gap between two rectangles along the axis that separates them.
    /// Returns 0.0 when they intersect.
    pub fn gap_to(&self, other: &Rect) -> f32 {
        let dx = (other.x - self.right()).max(self.x - other.right());
        let dy = (other.y - self.bottom()).max(self.y - other.bottom());
        dx.max(dy).max(0.0)
    }
}

/// A single drawable element of the template
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Straight stroke between two points
    Line {
        start: Point,
        end: Point,
        layer: Layer,
    },
    /// Stroked, unfilled rectangle
    Rect { rect: Rect, layer: Layer },
    /// Descriptive text anchored at its baseline start
    Label { text: String, at: Point },
}

impl Primitive {
    pub fn line(start: Point, end: Point, layer: Layer) -> Self {
        Primitive::Line { start, end, layer }
    }

    pub fn rect(rect: Rect, layer: Layer) -> Self {
        Primitive::Rect { rect, layer }
    }

    pub fn label(text: impl Into<String>, at: Point) -> Self {
        Primitive::Label {
            text: text.into(),
            at,
        }
    }

    /// Stroke layer, `None` for labels
    pub fn layer(&self) -> Option<Layer> {
        match self {
            Primitive::Line { layer, .. } | Primitive::Rect { layer, .. } => Some(*layer),
            Primitive::Label { .. } => None,
        }
    }

    /// Every coordinate this primitive touches
    pub fn points(&self) -> Vec<Point> {
        match self {
            Primitive::Line { start, end, .. } => vec![*start, *end],
            Primitive::Rect { rect, .. } => vec![
                Point::new(rect.x, rect.y),
                Point::new(rect.right(), rect.bottom()),
            ],
            Primitive::Label { at, .. } => vec![*at],
        }
    }

    /// Stroked length in millimeters (0.0 for labels)
    pub fn stroke_length(&self) -> f32 {
        match self {
            Primitive::Line { start, end, .. } => start.distance_to(*end),
            Primitive::Rect { rect, .. } => rect.perimeter(),
            Primitive::Label { .. } => 0.0,
        }
    }
}

/// Which physical piece a panel is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Continuous wrap: upper wall, base, lower wall
    Strip,
    /// One of the flapped long-side panels (0-based index)
    Side(usize),
}

/// A separately cut piece of the template
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub kind: PanelKind,
    /// Bounding box of the piece on the canvas
    pub bounds: Rect,
    /// Primitives in emission order
    pub primitives: Vec<Primitive>,
}

impl Panel {
    pub fn new(kind: PanelKind, bounds: Rect) -> Self {
        Self {
            kind,
            bounds,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
}

/// Document size required to hold every panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub total_width: f32,
    pub total_height: f32,
}

impl Canvas {
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.total_width, self.total_height)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }
}
