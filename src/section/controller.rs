//! Generic lifecycle of a decorated section: measure the container, size the surface, draw.
//!
//! A controller never touches navigation state. It is driven from outside: a visibility gate
//! fires [`SectionController::activate`], window resizes call [`SectionController::on_resize`]
//! and pointer hover calls [`SectionController::set_hovered`].

use crate::dom::document::{Document, ElementKey};
use crate::foundation::core::is_degenerate;
use crate::render::canvas::{Pen, RoughCanvas};
use crate::render::style::Emphasis;
use crate::render::surface::Surface;
use crate::runtime::listeners::Listeners;

/// Tag of the drawing surface child every section container exposes.
pub const CANVAS_TAG: &str = "canvas";

/// A section's own shape-drawing routine.
///
/// Implementations draw stroke-only shapes through the [`Pen`], using `pen.size()` for
/// coordinates. `emphasis` is [`Emphasis::Hover`] while a hoverable section is under the pointer.
pub trait Decoration: std::fmt::Debug {
    fn name(&self) -> &str;

    fn draw(&self, pen: &mut Pen<'_>, emphasis: Emphasis);
}

/// Outcome of an activation or resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Activation {
    /// The surface was resized to the container box and redrawn.
    Drawn,
    /// The container had a zero dimension; nothing was drawn. The next signal retries.
    Deferred,
}

#[derive(Debug)]
pub struct SectionController {
    container: ElementKey,
    canvas_el: ElementKey,
    decoration: Box<dyn Decoration>,
    surface: Surface,
    emphasis: Emphasis,
    resize_attached: bool,
    draws: u64,
}

impl SectionController {
    /// Bind to the container with id `container_id` and its canvas child.
    ///
    /// Missing elements are not errors: the section simply never activates.
    pub fn attach(
        doc: &Document,
        container_id: &str,
        decoration: Box<dyn Decoration>,
    ) -> Option<Self> {
        let Some(container) = doc.get_element_by_id(container_id) else {
            tracing::warn!(
                section = decoration.name(),
                container_id,
                "section container missing"
            );
            return None;
        };
        let Some(canvas_el) = doc.first_child_with_tag(container, CANVAS_TAG) else {
            tracing::warn!(
                section = decoration.name(),
                container_id,
                "section has no drawing surface"
            );
            return None;
        };
        Some(Self {
            container,
            canvas_el,
            decoration,
            surface: Surface::new(),
            emphasis: Emphasis::Normal,
            resize_attached: false,
            draws: 0,
        })
    }

    /// Visibility signal: hook up the resize listener (once per controller) and redraw.
    pub fn activate<T: Clone + PartialEq>(
        &mut self,
        doc: &mut Document,
        canvas: &mut dyn RoughCanvas,
        listeners: &mut Listeners<T>,
        listener: T,
    ) -> Activation {
        if !self.resize_attached {
            listeners.attach(listener);
            self.resize_attached = true;
        }
        self.redraw(doc, canvas)
    }

    pub fn on_resize(&mut self, doc: &mut Document, canvas: &mut dyn RoughCanvas) -> Activation {
        self.redraw(doc, canvas)
    }

    /// Pointer entered (`true`) or left the container. Redraws only when the state flips.
    pub fn set_hovered(
        &mut self,
        doc: &mut Document,
        canvas: &mut dyn RoughCanvas,
        hovered: bool,
    ) -> bool {
        let next = if hovered {
            Emphasis::Hover
        } else {
            Emphasis::Normal
        };
        if next == self.emphasis {
            return false;
        }
        self.emphasis = next;
        self.redraw(doc, canvas);
        true
    }

    fn redraw(&mut self, doc: &mut Document, canvas: &mut dyn RoughCanvas) -> Activation {
        let size = doc.bounding_box(self.container);
        if is_degenerate(size) {
            tracing::debug!(section = self.decoration.name(), ?size, "deferring draw");
            return Activation::Deferred;
        }
        doc.set_layout_size(self.canvas_el, size);
        self.surface.resize(size);
        self.decoration
            .draw(&mut Pen::new(canvas, &mut self.surface), self.emphasis);
        self.draws += 1;
        tracing::trace!(
            section = self.decoration.name(),
            drawables = self.surface.drawables().len(),
            "section drawn"
        );
        Activation::Drawn
    }

    pub fn name(&self) -> &str {
        self.decoration.name()
    }

    pub fn container(&self) -> ElementKey {
        self.container
    }

    pub fn canvas_element(&self) -> ElementKey {
        self.canvas_el
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    pub fn has_resize_listener(&self) -> bool {
        self.resize_attached
    }

    /// Number of completed draws since attachment.
    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/controller.rs"]
mod tests;
