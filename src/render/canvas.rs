use crate::foundation::core::{BezPath, Size};
use crate::foundation::error::SketchResult;
use crate::render::style::SketchStyle;
use crate::render::surface::Surface;

/// The abstract shape a drawable was generated from.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        diameter: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Path {
        d: String,
    },
}

/// A generated sketch: the primitive, its style, and the jittered outline strokes.
#[derive(Clone, Debug)]
pub struct Drawable {
    pub primitive: Primitive,
    pub style: SketchStyle,
    pub strokes: Vec<BezPath>,
}

/// Sketchy rendering backend.
///
/// Implementations turn an abstract primitive into hand-drawn looking strokes. The algorithm is
/// theirs; callers only rely on getting one [`Drawable`] per call.
pub trait RoughCanvas {
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, style: &SketchStyle)
    -> Drawable;

    fn circle(&mut self, cx: f64, cy: f64, diameter: f64, style: &SketchStyle) -> Drawable;

    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        style: &SketchStyle,
    ) -> Drawable;

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &SketchStyle) -> Drawable;

    /// Sketch an SVG path (`d` attribute syntax).
    fn path(&mut self, d: &str, style: &SketchStyle) -> SketchResult<Drawable>;
}

/// Stroke-only drawing handle onto one [`Surface`].
///
/// Every call clears the style's fill before reaching the canvas and appends the result to the
/// surface. Path data that fails to parse is logged and skipped.
pub struct Pen<'a> {
    canvas: &'a mut dyn RoughCanvas,
    surface: &'a mut Surface,
}

impl<'a> Pen<'a> {
    pub fn new(canvas: &'a mut dyn RoughCanvas, surface: &'a mut Surface) -> Self {
        Self { canvas, surface }
    }

    /// Size of the surface being drawn on.
    pub fn size(&self) -> Size {
        self.surface.size()
    }

    pub fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, style: &SketchStyle) {
        let d = self.canvas.rectangle(x, y, width, height, &style.outline());
        self.surface.push(d);
    }

    pub fn circle(&mut self, cx: f64, cy: f64, diameter: f64, style: &SketchStyle) {
        let d = self.canvas.circle(cx, cy, diameter, &style.outline());
        self.surface.push(d);
    }

    pub fn ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64, style: &SketchStyle) {
        let d = self.canvas.ellipse(cx, cy, width, height, &style.outline());
        self.surface.push(d);
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &SketchStyle) {
        let d = self.canvas.line(x1, y1, x2, y2, &style.outline());
        self.surface.push(d);
    }

    pub fn path(&mut self, d: &str, style: &SketchStyle) {
        match self.canvas.path(d, &style.outline()) {
            Ok(drawable) => self.surface.push(drawable),
            Err(err) => tracing::warn!(%err, "skipping sketch path"),
        }
    }
}
