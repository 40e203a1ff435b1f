//! The entry gate: a full-viewport door that must be clicked before the site is revealed.
//!
//! ```text
//! Idle <-> Hovering --click--> Opening --Swing--> Swinging --Zoom--> ZoomingThrough --Finish--> Entered
//! ```
//!
//! The door is the only producer of the session's "entered" transition. Timed steps are returned
//! to the caller as `(delay_ms, DoorTimer)` pairs to schedule; the door never reads a clock.

use crate::dom::document::{Document, ElementKey};
use crate::foundation::core::{Point, Rect, Size, is_degenerate};
use crate::render::canvas::{Pen, RoughCanvas};
use crate::render::style::{Emphasis, StylePair};
use crate::render::surface::Surface;
use crate::section::controller::Decoration;
use crate::section::decorations::{Door, door_geometry};
use crate::session::state::SessionState;

pub const ENTRY_SCREEN_ID: &str = "entry-screen";
pub const DOOR_CANVAS_ID: &str = "door-canvas";
pub const MAIN_CONTENT_ID: &str = "main-content";

/// Marker classes applied as the door moves through its animation.
pub mod classes {
    pub const HOVER: &str = "door-hover";
    pub const OPENING: &str = "door-opening";
    pub const SWING: &str = "door-swing";
    pub const ZOOM: &str = "zoom-through";
    pub const REVEALED: &str = "revealed";
    pub const ENTERED: &str = "entered";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum DoorState {
    #[default]
    Idle,
    Hovering,
    Opening,
    Swinging,
    ZoomingThrough,
    Entered,
}

impl DoorState {
    /// Whether pointer input is still handled (hover and click).
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Idle | Self::Hovering)
    }
}

/// Deferred door steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DoorTimer {
    Swing,
    Zoom,
    Finish,
}

/// Fixed delays of the opening sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DoorTimings {
    /// From the start of the swing to the zoom-through (and the reveal).
    pub swing_ms: u64,
    /// From the zoom-through until the entry screen is removed.
    pub zoom_ms: u64,
}

impl Default for DoorTimings {
    fn default() -> Self {
        Self {
            swing_ms: 600,
            zoom_ms: 1000,
        }
    }
}

#[derive(Debug)]
pub struct EntryDoor {
    screen: ElementKey,
    canvas_el: ElementKey,
    main_content: Option<ElementKey>,
    decoration: Door,
    timings: DoorTimings,
    surface: Surface,
    hit: Rect,
    state: DoorState,
    draws: u64,
}

impl EntryDoor {
    /// Bind to `#entry-screen` and its `#door-canvas`. Without them there is no door.
    pub fn attach(doc: &Document, styles: StylePair, timings: DoorTimings) -> Option<Self> {
        let screen = doc.get_element_by_id(ENTRY_SCREEN_ID);
        let canvas_el = doc.get_element_by_id(DOOR_CANVAS_ID);
        let (Some(screen), Some(canvas_el)) = (screen, canvas_el) else {
            tracing::warn!("entry door elements missing; door disabled");
            return None;
        };
        let main_content = doc.get_element_by_id(MAIN_CONTENT_ID);
        if main_content.is_none() {
            tracing::warn!("no main content element to reveal");
        }
        Some(Self {
            screen,
            canvas_el,
            main_content,
            decoration: Door { styles },
            timings,
            surface: Surface::new(),
            hit: Rect::ZERO,
            state: DoorState::Idle,
            draws: 0,
        })
    }

    /// Size the door canvas to the viewport and draw the resting door.
    pub fn init(&mut self, doc: &mut Document, canvas: &mut dyn RoughCanvas, viewport: Size) {
        self.resize(doc, canvas, viewport);
    }

    /// Window resize: re-fit the canvas and redraw in the current hover style.
    pub fn resize(&mut self, doc: &mut Document, canvas: &mut dyn RoughCanvas, viewport: Size) {
        if is_degenerate(viewport) {
            tracing::debug!(?viewport, "skipping door draw");
            return;
        }
        doc.set_layout_size(self.screen, viewport);
        doc.set_layout_size(self.canvas_el, viewport);
        self.surface.resize(viewport);
        self.hit = door_geometry(viewport);
        self.redraw(canvas);
    }

    /// Pointer moved over the entry screen. Returns `true` when the hover state flipped.
    pub fn pointer_move(
        &mut self,
        doc: &mut Document,
        canvas: &mut dyn RoughCanvas,
        at: Point,
    ) -> bool {
        let over = self.hit_test(at);
        match (self.state, over) {
            (DoorState::Idle, true) => {
                self.state = DoorState::Hovering;
                doc.add_class(self.canvas_el, classes::HOVER);
            }
            (DoorState::Hovering, false) => {
                self.state = DoorState::Idle;
                doc.remove_class(self.canvas_el, classes::HOVER);
            }
            _ => return false,
        }
        self.redraw(canvas);
        true
    }

    /// Click on the entry screen. A click on the door starts the opening sequence; the returned
    /// timer must be scheduled. Clicks off the door or during the animation do nothing.
    pub fn click(&mut self, doc: &mut Document, at: Point) -> Option<(u64, DoorTimer)> {
        if !self.state.is_interactive() {
            tracing::debug!(state = ?self.state, "door busy; click ignored");
            return None;
        }
        if !self.hit_test(at) {
            return None;
        }
        self.state = DoorState::Opening;
        doc.add_class(self.canvas_el, classes::OPENING);
        tracing::info!("door opening");
        Some((0, DoorTimer::Swing))
    }

    /// Advance the sequence on a fired timer. Returns the next timer to schedule, if any.
    pub fn on_timer(
        &mut self,
        doc: &mut Document,
        session: &mut SessionState,
        timer: DoorTimer,
    ) -> Option<(u64, DoorTimer)> {
        match (self.state, timer) {
            (DoorState::Opening, DoorTimer::Swing) => {
                self.state = DoorState::Swinging;
                doc.add_class(self.screen, classes::SWING);
                Some((self.timings.swing_ms, DoorTimer::Zoom))
            }
            (DoorState::Swinging, DoorTimer::Zoom) => {
                self.state = DoorState::ZoomingThrough;
                doc.add_class(self.screen, classes::ZOOM);
                if let Some(main) = self.main_content {
                    doc.add_class(main, classes::REVEALED);
                }
                session.enter();
                Some((self.timings.zoom_ms, DoorTimer::Finish))
            }
            (DoorState::ZoomingThrough, DoorTimer::Finish) => {
                self.state = DoorState::Entered;
                doc.set_hidden(self.screen, true);
                let body = doc.body();
                doc.add_class(body, classes::ENTERED);
                tracing::info!("entry screen removed");
                None
            }
            (state, timer) => {
                tracing::warn!(?state, ?timer, "stale door timer");
                None
            }
        }
    }

    fn hit_test(&self, at: Point) -> bool {
        let r = self.hit;
        at.x >= r.x0 && at.x <= r.x1 && at.y >= r.y0 && at.y <= r.y1
    }

    fn redraw(&mut self, canvas: &mut dyn RoughCanvas) {
        let emphasis = if self.state == DoorState::Hovering {
            Emphasis::Hover
        } else {
            Emphasis::Normal
        };
        self.surface.clear();
        self.decoration
            .draw(&mut Pen::new(canvas, &mut self.surface), emphasis);
        self.draws += 1;
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    /// The entry screen sits above the site and swallows pointer input until it is removed.
    pub fn captures_pointer(&self) -> bool {
        self.state != DoorState::Entered
    }

    pub fn hit_region(&self) -> Rect {
        self.hit
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entry/door.rs"]
mod tests;
