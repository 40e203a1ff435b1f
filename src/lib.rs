//! Sketchfolio is the behavioral core of a single-page portfolio site drawn in a hand-sketched
//! style, modeled in-process: an element tree, page navigation with session history, an entry
//! door that gates the site, and decorated sections that redraw whenever they become visible.
//!
//! # Overview
//!
//! 1. **Document**: [`Document::from_site`] builds the element tree a [`SiteConfig`] describes.
//! 2. **Navigation**: [`Router`] keeps exactly one page active and mirrors every transition into
//!    a [`MemoryHistory`]; pop-state and fragment changes are replayed without pushing.
//! 3. **Visibility gates**: [`VisibilityGates`] turn mutation records and the session's
//!    "entered" transition into one-shot or repeatable activation signals.
//! 4. **Sections**: each [`SectionController`] measures its container, sizes its [`Surface`] and
//!    draws its [`Decoration`] through a [`RoughCanvas`]; zero-size layouts are deferred.
//! 5. **Entry door**: [`EntryDoor`] is the only producer of the "entered" transition.
//!
//! [`PortfolioApp`] wires everything together and is driven by [`UiEvent`]s. Rendering is
//! deterministic for a given seed; [`rasterize_surface`] turns a surface into RGBA pixels.
#![forbid(unsafe_code)]

mod app;
mod config;
mod dom;
mod entry;
mod foundation;
mod gate;
mod nav;
mod render;
mod runtime;
mod section;
mod session;
mod toolbox;

pub use app::{AppSummary, PortfolioApp, SurfaceSummary, UiEvent};
pub use config::build::{
    DESIGN_CONTAINER_ID, PROJECT_DETAIL_CONTENT_ID, PROJECTS_CONTAINER_ID, back_button_id,
    nav_button_id, section_canvas_id,
};
pub use config::site::{
    LayoutSpec, NavButtonSpec, PageSpec, SectionKind, SectionSpec, SiteConfig,
};
pub use dom::document::{ACTIVE_CLASS, Document, ElementKey, MutationRecord, PAGE_CLASS};
pub use entry::door::{
    DOOR_CANVAS_ID, DoorState, DoorTimer, DoorTimings, ENTRY_SCREEN_ID, EntryDoor,
    MAIN_CONTENT_ID, classes as door_classes,
};
pub use foundation::core::{BezPath, Point, Rect, Rgba8, Size, Vec2, is_degenerate};
pub use foundation::error::{SketchError, SketchResult};
pub use gate::visibility::{Condition, GateHandle, ObserveOpts, VisibilityGates};
pub use nav::history::{
    History, HistoryEntry, HistoryState, MemoryHistory, fragment_of, url_for_page,
};
pub use nav::registry::{Page, PageRegistry};
pub use nav::router::{BACK_TARGET_ATTR, NAV_TARGET_ATTR, Router};
pub use render::canvas::{Drawable, Pen, Primitive, RoughCanvas};
pub use render::raster::{FrameRGBA, rasterize_surface, write_png};
pub use render::sketch::SketchRecorder;
pub use render::style::{Emphasis, SketchStyle, StylePair};
pub use render::surface::Surface;
pub use runtime::listeners::Listeners;
pub use runtime::timers::{TimerId, Timers};
pub use section::controller::{Activation, CANVAS_TAG, Decoration, SectionController};
pub use section::decorations::{
    About, AboutPortrait, Contact, DesignCard, Door, Hero, NavButton, ProjectCard, ToolboxIcon,
    door_geometry,
};
pub use section::gallery::{
    DESIGN_ID_ATTR, DesignProject, PROJECT_INDEX_ATTR, Project, default_design_projects,
    default_projects, design_card_id, fill_project_detail, project_card_id,
    render_design_cards, render_project_cards,
};
pub use session::state::SessionState;
pub use toolbox::popup::{
    CLOSE_CLASS, TOOL_ID_ATTR, TOOL_ITEM_CLASS, TOOLBOX_BUTTON_ID, TOOLBOX_CANVAS_ID,
    TOOLBOX_CLOSE_ID, TOOLBOX_POPUP_ID, TOOLS_LIST_CLASS, Tool, Toolbox, default_tools,
    tool_item_id,
};
