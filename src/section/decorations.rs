//! The concrete shape sets drawn by each section.
//!
//! Coordinates are relative to the surface (`pen.size()`); every routine is stroke-only.

use crate::foundation::core::{Rect, Size};
use crate::render::canvas::Pen;
use crate::render::style::{Emphasis, SketchStyle, StylePair};
use crate::section::controller::Decoration;

/// House style of the section decorations: the resting style with a stronger bow.
fn drawer_style() -> SketchStyle {
    SketchStyle::normal().with_bowing(2.0)
}

/// Hand-drawn connector lines between decorations.
fn connector_style() -> SketchStyle {
    drawer_style().with_width(1.0).with_roughness(1.2)
}

/// Landing hero: inset border, two corner circles, a diagonal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hero;

impl Decoration for Hero {
    fn name(&self) -> &str {
        "hero"
    }

    fn draw(&self, pen: &mut Pen<'_>, _emphasis: Emphasis) {
        let Size { width, height } = pen.size();
        let p = 50.0;
        pen.rectangle(
            p,
            p,
            width - p * 2.0,
            height - p * 2.0,
            &drawer_style().with_width(3.0).with_roughness(2.0),
        );

        let circles = drawer_style();
        pen.circle(p + 30.0, p + 30.0, 40.0, &circles);
        pen.circle(width - p - 30.0, height - p - 30.0, 50.0, &circles);

        pen.line(
            p + 50.0,
            p + 50.0,
            width - p - 50.0,
            height - p - 50.0,
            &drawer_style().with_width(1.5).with_roughness(1.2),
        );
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct About;

impl Decoration for About {
    fn name(&self) -> &str {
        "about"
    }

    fn draw(&self, pen: &mut Pen<'_>, _emphasis: Emphasis) {
        let Size { width, height } = pen.size();
        let faint = drawer_style().with_width(1.0);
        pen.ellipse(width * 0.2, height * 0.2, 100.0, 60.0, &faint);
        pen.rectangle(width * 0.7, height * 0.4, 80.0, 80.0, &faint);
        pen.circle(width * 0.3, height * 0.8, 70.0, &faint);

        let link = connector_style();
        pen.line(
            width * 0.25,
            height * 0.25,
            width * 0.75,
            height * 0.45,
            &link,
        );
        pen.line(
            width * 0.35,
            height * 0.85,
            width * 0.75,
            height * 0.5,
            &link,
        );
    }
}

/// Portrait frame on the about page: inset border plus corner ticks.
#[derive(Clone, Copy, Debug, Default)]
pub struct AboutPortrait;

impl Decoration for AboutPortrait {
    fn name(&self) -> &str {
        "about-portrait"
    }

    fn draw(&self, pen: &mut Pen<'_>, _emphasis: Emphasis) {
        let Size { width, height } = pen.size();
        let p = 10.0;
        let c = 30.0;
        let frame = SketchStyle::normal();
        pen.rectangle(p, p, width - p * 2.0, height - p * 2.0, &frame);

        let tick = frame.with_width(1.5);
        pen.line(p, p + c, p + c, p, &tick);
        pen.line(width - p - c, p, width - p, p + c, &tick);
        pen.line(p, height - p - c, p + c, height - p, &tick);
        pen.line(width - p - c, height - p, width - p, height - p - c, &tick);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Contact;

impl Decoration for Contact {
    fn name(&self) -> &str {
        "contact"
    }

    fn draw(&self, pen: &mut Pen<'_>, _emphasis: Emphasis) {
        let Size { width, height } = pen.size();
        let p = 30.0;
        pen.rectangle(
            p,
            p,
            width - p * 2.0,
            height - p * 2.0,
            &drawer_style().with_roughness(2.0),
        );

        let deco = drawer_style().with_width(1.5);
        pen.circle(width * 0.2, height * 0.15, 25.0, &deco);
        pen.circle(width * 0.8, height * 0.15, 25.0, &deco);
        pen.rectangle(width * 0.15, height * 0.85, 30.0, 30.0, &deco);
        pen.rectangle(width * 0.85, height * 0.85, 30.0, 30.0, &deco);

        let link = connector_style();
        pen.line(
            width * 0.2,
            height * 0.15,
            width * 0.15,
            height * 0.85,
            &link,
        );
        pen.line(
            width * 0.8,
            height * 0.15,
            width * 0.85,
            height * 0.85,
            &link,
        );
    }
}

/// Corner mark on a project card; the shape cycles with the card index.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectCard {
    pub index: usize,
}

impl Decoration for ProjectCard {
    fn name(&self) -> &str {
        "project-card"
    }

    fn draw(&self, pen: &mut Pen<'_>, _emphasis: Emphasis) {
        let width = pen.size().width;
        let mark = drawer_style().with_width(1.0);
        match self.index % 3 {
            0 => pen.circle(width - 20.0, 20.0, 30.0, &mark),
            1 => pen.rectangle(width - 40.0, 10.0, 30.0, 30.0, &mark),
            _ => pen.ellipse(width - 25.0, 15.0, 40.0, 25.0, &mark),
        }
    }
}

/// Heavy border around a design gallery card.
#[derive(Clone, Copy, Debug, Default)]
pub struct DesignCard;

impl Decoration for DesignCard {
    fn name(&self) -> &str {
        "design-card"
    }

    fn draw(&self, pen: &mut Pen<'_>, _emphasis: Emphasis) {
        let Size { width, height } = pen.size();
        let p = 2.0;
        pen.rectangle(
            p,
            p,
            width - p * 2.0,
            height - p * 2.0,
            &SketchStyle::normal()
                .with_width(3.0)
                .with_roughness(2.0)
                .with_bowing(2.0),
        );
    }
}

/// Full-size outline of a home navigation button; heavier while hovered.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavButton {
    pub styles: StylePair,
}

impl Decoration for NavButton {
    fn name(&self) -> &str {
        "nav-button"
    }

    fn draw(&self, pen: &mut Pen<'_>, emphasis: Emphasis) {
        let Size { width, height } = pen.size();
        pen.rectangle(0.0, 0.0, width, height, &self.styles.pick(emphasis));
    }
}

/// Toolbox launcher: a box with a handle and three tools inside.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToolboxIcon;

impl Decoration for ToolboxIcon {
    fn name(&self) -> &str {
        "toolbox"
    }

    fn draw(&self, pen: &mut Pen<'_>, _emphasis: Emphasis) {
        let size = pen.size().width;
        let body = SketchStyle::normal();
        let tool = body.with_width(1.5);

        let bw = size * 0.9;
        let bh = size * 0.7;
        let bx = (size - bw) / 2.0;
        let by = size * 0.2;
        pen.rectangle(bx, by, bw, bh, &body);

        let hw = bw * 0.4;
        let hh = bh * 0.15;
        pen.rectangle(bx + (bw - hw) / 2.0, by - hh * 0.5, hw, hh, &body);

        // hammer
        let hx = bx + bw * 0.2;
        let hy = by + bh * 0.3;
        pen.rectangle(hx, hy, bw * 0.15, bh * 0.15, &tool);
        pen.line(
            hx + bw * 0.075,
            hy + bh * 0.15,
            hx + bw * 0.075,
            by + bh * 0.6,
            &tool,
        );

        // wrench: a C-shaped head from two arcs
        let wx = bx + bw * 0.4;
        let wy = by + bh * 0.25;
        let r = bw * 0.12;
        let cx = wx + bw * 0.08;
        let head = format!(
            "M {} {} A {r} {r} 0 0 1 {} {} L {} {} A {r} {r} 0 0 1 {} {}",
            cx + r,
            wy - r * 0.5,
            cx + r * 0.3,
            wy + r * 0.5,
            cx - r * 0.3,
            wy + r * 0.5,
            cx + r,
            wy - r * 0.5,
        );
        pen.path(&head, &tool);
        pen.line(wx + bw * 0.15, wy, wx + bw * 0.25, by + bh * 0.5, &tool);

        // screwdriver
        let sx = bx + bw * 0.65;
        let sy = by + bh * 0.3;
        pen.rectangle(sx, sy, bw * 0.12, bh * 0.2, &tool);
        pen.line(
            sx + bw * 0.06,
            sy + bh * 0.2,
            sx + bw * 0.06,
            by + bh * 0.55,
            &tool,
        );
    }
}

/// Door hit-region inside a viewport: a quarter of the width (at most 280), twice as tall,
/// centered.
pub fn door_geometry(viewport: Size) -> Rect {
    let width = (viewport.width * 0.25).min(280.0);
    let height = width * 2.0;
    let x = (viewport.width - width) / 2.0;
    let y = (viewport.height - height) / 2.0;
    Rect::new(x, y, x + width, y + height)
}

/// The entry door: frame, inner frame, five panels, knob, keyhole, handle plate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Door {
    pub styles: StylePair,
}

impl Decoration for Door {
    fn name(&self) -> &str {
        "entry-door"
    }

    fn draw(&self, pen: &mut Pen<'_>, emphasis: Emphasis) {
        let door = door_geometry(pen.size());
        let (x, y, width, height) = (door.x0, door.y0, door.width(), door.height());
        let style = self.styles.pick(emphasis);
        let panel = style.scaled_width(0.7);
        let fine = style.scaled_width(0.5);

        pen.rectangle(x, y, width, height, &style);

        let inset = width * 0.05;
        pen.rectangle(
            x + inset,
            y + inset,
            width - inset * 2.0,
            height - inset * 2.0,
            &style.scaled_width(0.8),
        );

        let margin = width * 0.12;
        let gap = width * 0.08;
        let panels_width = width - margin * 2.0;
        let half = (panels_width - gap) / 2.0;

        let top_y = y + margin;
        let top_h = height * 0.32;
        pen.rectangle(x + margin, top_y, half, top_h, &panel);
        pen.rectangle(x + margin + half + gap, top_y, half, top_h, &panel);

        let mid_y = top_y + top_h + gap;
        let mid_h = height * 0.18;
        pen.rectangle(x + margin, mid_y, half, mid_h, &panel);
        pen.rectangle(x + margin + half + gap, mid_y, half, mid_h, &panel);

        let bottom_y = mid_y + mid_h + gap;
        let bottom_h = height - (bottom_y - y) - margin;
        pen.rectangle(x + margin, bottom_y, panels_width, bottom_h, &panel);

        let knob_x = x + width - margin - width * 0.05;
        let knob_y = y + height * 0.52;
        let knob = width * 0.07;
        pen.circle(knob_x, knob_y, knob, &style);
        pen.ellipse(knob_x, knob_y + knob * 0.8, knob * 0.3, knob * 0.6, &fine);

        let plate_w = width * 0.08;
        let plate_h = height * 0.12;
        pen.rectangle(
            knob_x - plate_w / 2.0,
            knob_y - plate_h / 3.0,
            plate_w,
            plate_h,
            &fine,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/decorations.rs"]
mod tests;
