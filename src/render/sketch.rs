use std::f64::consts::TAU;

use kurbo::PathEl;

use crate::foundation::core::{BezPath, Point, Vec2};
use crate::foundation::error::{SketchError, SketchResult};
use crate::render::canvas::{Drawable, Primitive, RoughCanvas};
use crate::render::style::SketchStyle;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub(crate) fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform in `[-magnitude, magnitude)`.
    fn offset(&mut self, magnitude: f64) -> f64 {
        (self.next_f64_01() * 2.0 - 1.0) * magnitude
    }

    fn jitter(&mut self, p: Point, magnitude: f64) -> Point {
        Point::new(p.x + self.offset(magnitude), p.y + self.offset(magnitude))
    }
}

/// Reference [`RoughCanvas`]: double-stroked, jittered outlines as Bézier paths.
///
/// Output is a pure function of the seed and the call sequence.
#[derive(Clone, Debug)]
pub struct SketchRecorder {
    rng: Rng64,
}

impl SketchRecorder {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng64::new(seed),
        }
    }

    fn double_line(&mut self, a: Point, b: Point, style: &SketchStyle) -> BezPath {
        let mut path = BezPath::new();
        let len = (b - a).hypot();
        let jitter = style.roughness * (len / 10.0).clamp(0.5, 2.0);
        let normal = if len > f64::EPSILON {
            Vec2::new(-(b.y - a.y) / len, (b.x - a.x) / len)
        } else {
            Vec2::ZERO
        };
        let bow = style.bowing * style.roughness * len / 200.0;

        for pass in 0..2 {
            let j = if pass == 0 { jitter } else { jitter * 0.5 };
            let start = self.rng.jitter(a, j);
            let end = self.rng.jitter(b, j);
            let bend = normal * (bow + self.rng.offset(j));
            let c1 = start.lerp(end, 0.33 + self.rng.offset(0.05)) + bend;
            let c2 = start.lerp(end, 0.66 + self.rng.offset(0.05)) + bend;
            path.move_to(start);
            path.curve_to(c1, c2, end);
        }
        path
    }

    fn double_ellipse(&mut self, center: Point, rx: f64, ry: f64, style: &SketchStyle) -> BezPath {
        let mut path = BezPath::new();
        let perimeter = TAU * ((rx * rx + ry * ry) / 2.0).sqrt();
        let steps = (perimeter / 12.0).ceil().clamp(9.0, 64.0) as usize;
        let jitter = style.roughness * 0.8;

        for pass in 0..2 {
            let j = if pass == 0 { jitter } else { jitter * 0.6 };
            let start = self.rng.next_f64_01() * TAU;
            // One extra step on each side so the loop overlaps like a pen stroke.
            let pts: Vec<Point> = (0..steps + 3)
                .map(|i| {
                    let angle = start + (i as f64 - 1.0) * TAU / steps as f64;
                    let k = 1.0 + self.rng.offset(0.02 * style.roughness);
                    let p = Point::new(
                        center.x + rx * k * angle.cos(),
                        center.y + ry * k * angle.sin(),
                    );
                    self.rng.jitter(p, j)
                })
                .collect();
            catmull_rom_into(&mut path, &pts);
        }
        path
    }

    fn line_drawable(&mut self, primitive: Primitive, corners: &[Point], style: &SketchStyle) -> Drawable {
        let strokes = corners
            .windows(2)
            .map(|w| self.double_line(w[0], w[1], style))
            .collect();
        Drawable {
            primitive,
            style: *style,
            strokes,
        }
    }
}

impl Default for SketchRecorder {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RoughCanvas for SketchRecorder {
    fn rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: &SketchStyle,
    ) -> Drawable {
        let corners = [
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
            Point::new(x, y),
        ];
        self.line_drawable(
            Primitive::Rectangle {
                x,
                y,
                width,
                height,
            },
            &corners,
            style,
        )
    }

    fn circle(&mut self, cx: f64, cy: f64, diameter: f64, style: &SketchStyle) -> Drawable {
        let r = diameter / 2.0;
        Drawable {
            primitive: Primitive::Circle { cx, cy, diameter },
            style: *style,
            strokes: vec![self.double_ellipse(Point::new(cx, cy), r, r, style)],
        }
    }

    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        style: &SketchStyle,
    ) -> Drawable {
        Drawable {
            primitive: Primitive::Ellipse {
                cx,
                cy,
                width,
                height,
            },
            style: *style,
            strokes: vec![self.double_ellipse(
                Point::new(cx, cy),
                width / 2.0,
                height / 2.0,
                style,
            )],
        }
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &SketchStyle) -> Drawable {
        self.line_drawable(
            Primitive::Line { x1, y1, x2, y2 },
            &[Point::new(x1, y1), Point::new(x2, y2)],
            style,
        )
    }

    fn path(&mut self, d: &str, style: &SketchStyle) -> SketchResult<Drawable> {
        let parsed = BezPath::from_svg(d.trim())
            .map_err(|e| SketchError::render(format!("invalid svg path data '{d}': {e}")))?;

        let mut strokes = Vec::with_capacity(2);
        for pass in 0..2 {
            let j = style.roughness * if pass == 0 { 1.0 } else { 0.5 };
            let mut out = BezPath::new();
            for el in parsed.elements() {
                let el = match *el {
                    PathEl::MoveTo(p) => PathEl::MoveTo(self.rng.jitter(p, j)),
                    PathEl::LineTo(p) => PathEl::LineTo(self.rng.jitter(p, j)),
                    PathEl::QuadTo(p1, p2) => {
                        PathEl::QuadTo(self.rng.jitter(p1, j), self.rng.jitter(p2, j))
                    }
                    PathEl::CurveTo(p1, p2, p3) => PathEl::CurveTo(
                        self.rng.jitter(p1, j),
                        self.rng.jitter(p2, j),
                        self.rng.jitter(p3, j),
                    ),
                    PathEl::ClosePath => PathEl::ClosePath,
                };
                out.push(el);
            }
            strokes.push(out);
        }

        Ok(Drawable {
            primitive: Primitive::Path { d: d.to_owned() },
            style: *style,
            strokes,
        })
    }
}

/// Append a smooth open curve through `pts[1..len-1]`, using the outer points as tangents.
fn catmull_rom_into(path: &mut BezPath, pts: &[Point]) {
    if pts.len() < 4 {
        return;
    }
    path.move_to(pts[1]);
    for w in pts.windows(4) {
        let (p0, p1, p2, p3) = (w[0], w[1], w[2], w[3]);
        let c1 = p1 + (p2 - p0) / 6.0;
        let c2 = p2 - (p3 - p1) / 6.0;
        path.curve_to(c1, c2, p2);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sketch.rs"]
mod tests;
