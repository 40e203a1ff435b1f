use std::path::Path;

use anyhow::Context as _;
use kurbo::PathEl;

use crate::foundation::core::{BezPath, Rgba8};
use crate::foundation::error::{SketchError, SketchResult};
use crate::render::surface::Surface;

/// A rasterized surface as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Number of pixels with non-zero alpha.
    pub fn inked_pixels(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}

/// Rasterize every drawable on `surface` with `vello_cpu`, optionally over a solid background.
///
/// The surface size is rounded up to whole pixels; zero-sized surfaces are rejected.
#[tracing::instrument(skip(surface), fields(drawables = surface.drawables().len()))]
pub fn rasterize_surface(surface: &Surface, background: Option<Rgba8>) -> SketchResult<FrameRGBA> {
    let size = surface.size();
    let w = pixel_extent(size.width, "width")?;
    let h = pixel_extent(size.height, "height")?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    if let Some(bg) = background {
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));
    }

    for drawable in surface.drawables() {
        let c = drawable.style.stroke;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(
            drawable.style.stroke_width.max(0.1),
        ));
        for stroke in &drawable.strokes {
            ctx.stroke_path(&bezpath_to_cpu(stroke));
        }
    }

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRGBA {
        width: u32::from(w),
        height: u32::from(h),
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

/// Write a frame as PNG (straight alpha), creating parent directories.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> SketchResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn pixel_extent(v: f64, what: &str) -> SketchResult<u16> {
    let px = v.ceil();
    if !(px >= 1.0 && px <= f64::from(u16::MAX)) {
        return Err(SketchError::render(format!(
            "surface {what} {v} is not rasterizable"
        )));
    }
    Ok(px as u16)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
