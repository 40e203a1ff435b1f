use crate::foundation::core::Size;
use crate::render::canvas::Drawable;

/// A drawing surface: a pixel size plus whatever was drawn onto it since the last resize.
///
/// Like a `<canvas>`, resizing clears the content.
#[derive(Clone, Debug, Default)]
pub struct Surface {
    size: Size,
    drawables: Vec<Drawable>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.drawables.clear();
    }

    pub fn clear(&mut self) {
        self.drawables.clear();
    }

    pub fn push(&mut self, drawable: Drawable) {
        self.drawables.push(drawable);
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn is_blank(&self) -> bool {
        self.drawables.is_empty()
    }
}
