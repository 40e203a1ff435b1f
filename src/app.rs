//! The application shell: one document, one session, and every controller wired to them.
//!
//! [`PortfolioApp::dispatch`] runs a single UI event to completion, then settles: queued
//! mutation records are fed through the visibility gates and fired gates activate their
//! sections, until nothing is pending. Timed steps run on a virtual clock advanced by
//! [`UiEvent::AdvanceTime`].

use crate::config::build::{PROJECT_DETAIL_CONTENT_ID, nav_button_id, relayout};
use crate::config::site::{SectionKind, SiteConfig};
use crate::dom::document::{Document, ElementKey};
use crate::entry::door::{DoorState, DoorTimer, EntryDoor};
use crate::foundation::core::{Point, Size};
use crate::foundation::error::{SketchError, SketchResult};
use crate::gate::visibility::{Condition, ObserveOpts, VisibilityGates};
use crate::nav::history::{HistoryState, MemoryHistory};
use crate::nav::router::Router;
use crate::render::sketch::SketchRecorder;
use crate::render::surface::Surface;
use crate::runtime::listeners::Listeners;
use crate::runtime::timers::Timers;
use crate::section::controller::{Decoration, SectionController};
use crate::section::decorations::{
    About, AboutPortrait, Contact, DesignCard, Hero, NavButton, ProjectCard, ToolboxIcon,
};
use crate::section::gallery::{
    DESIGN_ID_ATTR, design_card_id, fill_project_detail, project_card_id,
};
use crate::session::state::SessionState;
use crate::toolbox::popup::{TOOLBOX_BUTTON_ID, Toolbox};

/// Upper bound on gate/mutation rounds per settle; a cycle past this is a bug and is logged.
const MAX_SETTLE_ROUNDS: usize = 64;

/// One user-agent event.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum UiEvent {
    /// Pointer moved to viewport point `(x, y)`, over element `target` (by id) if known.
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        target: Option<String>,
    },
    /// Click at `(x, y)` on element `target` (by id).
    Click {
        #[serde(default)]
        target: Option<String>,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    /// Window resized.
    Resize { width: f64, height: f64 },
    /// An element's laid-out size changed without a window resize (content reflow).
    Layout {
        element: String,
        width: f64,
        height: f64,
    },
    /// `popstate` carrying the state of the entry moved to.
    PopState {
        #[serde(default)]
        page: Option<String>,
    },
    Back,
    Forward,
    /// The user followed a `#fragment` link.
    HashChange { fragment: String },
    KeyDown { key: String },
    /// Let `ms` milliseconds pass, firing due timers in order.
    AdvanceTime { ms: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateTarget {
    Section(usize),
    Toolbox(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResizeListener {
    Door,
    Section(usize),
}

/// One drawn surface in a [`AppSummary`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SurfaceSummary {
    pub name: String,
    pub section: String,
    pub width: f64,
    pub height: f64,
    pub drawables: usize,
    pub draws: u64,
}

/// Observable state of the app, for scripted runs and tests.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AppSummary {
    pub current_page: String,
    pub active_pages: Vec<String>,
    pub url: String,
    pub history: Vec<String>,
    pub door: Option<DoorState>,
    pub entered: bool,
    pub now_ms: u64,
    pub toolbox_open: bool,
    pub selected_tool: Option<String>,
    pub resize_listeners: usize,
    pub surfaces: Vec<SurfaceSummary>,
}

pub struct PortfolioApp {
    site: SiteConfig,
    doc: Document,
    session: SessionState,
    router: Router,
    gates: VisibilityGates<GateTarget>,
    controllers: Vec<SectionController>,
    hoverable: Vec<usize>,
    door: Option<EntryDoor>,
    toolbox: Option<Toolbox>,
    timers: Timers<DoorTimer>,
    listeners: Listeners<ResizeListener>,
    canvas: SketchRecorder,
    viewport: Size,
}

impl std::fmt::Debug for PortfolioApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioApp")
            .field("current_page", &self.router.current_page())
            .field("entered", &self.session.has_entered())
            .field("controllers", &self.controllers.len())
            .field("now_ms", &self.timers.now_ms())
            .finish_non_exhaustive()
    }
}

impl PortfolioApp {
    /// Validate `site`, build its document and wire every component.
    pub fn new(site: SiteConfig) -> SketchResult<Self> {
        site.validate()?;
        let mut doc = Document::from_site(&site)?;

        let initial_url = match &site.initial_fragment {
            Some(frag) => format!("/#{}", frag.trim_start_matches('#')),
            None => "/".to_owned(),
        };
        let mut router = Router::new(&mut doc, &site.home, MemoryHistory::new(initial_url));
        if let Some(frag) = &site.initial_fragment {
            router.handle_hash_change(&mut doc, frag);
        }
        // The initial state is observed through the immediate check at registration.
        doc.take_mutations();

        let mut app = Self {
            viewport: site.viewport,
            canvas: SketchRecorder::new(site.seed),
            session: SessionState::new(),
            gates: VisibilityGates::new(),
            controllers: Vec::new(),
            hoverable: Vec::new(),
            door: None,
            toolbox: None,
            timers: Timers::new(),
            listeners: Listeners::new(),
            router,
            doc,
            site,
        };
        app.wire_sections()?;
        app.wire_toolbox();
        app.wire_door();
        app.settle();
        tracing::info!(
            sections = app.controllers.len(),
            gates = app.gates.len(),
            page = app.router.current_page(),
            "portfolio ready"
        );
        Ok(app)
    }

    fn page_active(&self, page: &str) -> SketchResult<Condition> {
        self.doc
            .get_element_by_id(page)
            .map(Condition::page_active)
            .ok_or_else(|| SketchError::validation(format!("unknown page '{page}'")))
    }

    fn add_section(
        &mut self,
        container_id: &str,
        decoration: Box<dyn Decoration>,
        condition: Condition,
    ) -> Option<usize> {
        let controller = SectionController::attach(&self.doc, container_id, decoration)?;
        let target = controller.container();
        let index = self.controllers.len();
        self.controllers.push(controller);
        self.gates.observe(
            &self.doc,
            &self.session,
            Some(target),
            condition,
            GateTarget::Section(index),
            ObserveOpts::repeat(),
        );
        Some(index)
    }

    fn wire_sections(&mut self) -> SketchResult<()> {
        let sections = self.site.sections.clone();
        for spec in &sections {
            let decoration: Box<dyn Decoration> = match spec.kind {
                SectionKind::Hero => Box::new(Hero),
                SectionKind::About => Box::new(About),
                SectionKind::AboutPortrait => Box::new(AboutPortrait),
                SectionKind::Contact => Box::new(Contact),
            };
            let mut condition = self.page_active(&spec.page)?;
            if spec.requires_entered {
                condition = Condition::All(vec![condition, Condition::Entered]);
            }
            self.add_section(&spec.container, decoration, condition);
        }

        let home = self.page_active(&self.site.home.clone())?;
        let styles = self.site.styles;
        let targets: Vec<String> = self
            .site
            .nav_buttons
            .iter()
            .map(|n| n.target.clone())
            .collect();
        for target in targets {
            let condition = Condition::All(vec![home.clone(), Condition::Entered]);
            if let Some(index) =
                self.add_section(&nav_button_id(&target), Box::new(NavButton { styles }), condition)
            {
                self.hoverable.push(index);
            }
        }

        if let Some(page) = self.site.projects_page.clone() {
            let condition = self.page_active(&page)?;
            for index in 0..self.site.projects.len() {
                self.add_section(
                    &project_card_id(index),
                    Box::new(ProjectCard { index }),
                    condition.clone(),
                );
            }
        }
        if let Some(page) = self.site.design_page.clone() {
            let condition = self.page_active(&page)?;
            let ids: Vec<String> = self
                .site
                .design_projects
                .iter()
                .map(|d| design_card_id(&d.id))
                .collect();
            for id in ids {
                self.add_section(&id, Box::new(DesignCard), condition.clone());
            }
        }
        Ok(())
    }

    fn wire_toolbox(&mut self) {
        let Some(toolbox) = Toolbox::attach(&self.doc, self.site.tools.clone()) else {
            return;
        };
        let Some(icon) =
            SectionController::attach(&self.doc, TOOLBOX_BUTTON_ID, Box::new(ToolboxIcon))
        else {
            return;
        };
        let target = icon.container();
        let index = self.controllers.len();
        self.controllers.push(icon);
        self.toolbox = Some(toolbox);
        self.gates.observe(
            &self.doc,
            &self.session,
            Some(target),
            Condition::Entered,
            GateTarget::Toolbox(index),
            ObserveOpts::once(),
        );
    }

    fn wire_door(&mut self) {
        let Some(mut door) = EntryDoor::attach(&self.doc, self.site.styles, self.site.door) else {
            return;
        };
        door.init(&mut self.doc, &mut self.canvas, self.viewport);
        self.listeners.attach(ResizeListener::Door);
        self.door = Some(door);
    }

    /// Run one event to completion and settle.
    #[tracing::instrument(skip(self), fields(page = %self.router.current_page()))]
    pub fn dispatch(&mut self, event: UiEvent) -> SketchResult<()> {
        match event {
            UiEvent::PointerMove { x, y, target } => self.pointer_move(Point::new(x, y), target),
            UiEvent::Click { target, x, y } => self.click(Point::new(x, y), target)?,
            UiEvent::Resize { width, height } => self.resize(Size::new(width, height)),
            UiEvent::Layout {
                element,
                width,
                height,
            } => match self.doc.get_element_by_id(&element) {
                Some(key) => self.doc.set_layout_size(key, Size::new(width, height)),
                None => tracing::warn!(element, "layout change for unknown element"),
            },
            UiEvent::PopState { page } => {
                let state = page.map(HistoryState::page);
                self.router.handle_pop_state(&mut self.doc, state.as_ref());
            }
            UiEvent::Back => {
                self.router.back(&mut self.doc);
            }
            UiEvent::Forward => {
                self.router.forward(&mut self.doc);
            }
            UiEvent::HashChange { fragment } => {
                self.router.follow_fragment(&mut self.doc, &fragment);
            }
            UiEvent::KeyDown { key } => {
                if let Some(toolbox) = &mut self.toolbox {
                    toolbox.handle_key(&mut self.doc, &key);
                }
            }
            UiEvent::AdvanceTime { ms } => self.advance_time(ms),
        }
        self.settle();
        Ok(())
    }

    /// Dispatch every event in order, stopping at the first error.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = UiEvent>) -> SketchResult<()> {
        for event in events {
            self.dispatch(event)?;
        }
        Ok(())
    }

    fn resolve(&self, id: Option<&str>) -> Option<ElementKey> {
        let id = id?;
        let key = self.doc.get_element_by_id(id);
        if key.is_none() {
            tracing::debug!(id, "event target not in document");
        }
        key
    }

    fn pointer_move(&mut self, at: Point, target: Option<String>) {
        if let Some(door) = self.door.as_mut().filter(|d| d.captures_pointer()) {
            door.pointer_move(&mut self.doc, &mut self.canvas, at);
            return;
        }
        let target = self.resolve(target.as_deref());
        for &index in &self.hoverable {
            let c = &mut self.controllers[index];
            // Never activated (still waiting on its gate).
            if c.draw_count() == 0 {
                continue;
            }
            let hovered = target.is_some_and(|t| {
                self.doc.contains(c.container(), t) && self.doc.is_rendered(c.container())
            });
            c.set_hovered(&mut self.doc, &mut self.canvas, hovered);
        }
    }

    fn click(&mut self, at: Point, target: Option<String>) -> SketchResult<()> {
        if let Some(door) = self.door.as_mut().filter(|d| d.captures_pointer()) {
            if let Some((delay, timer)) = door.click(&mut self.doc, at) {
                self.timers.schedule(delay, timer);
            }
            return Ok(());
        }
        let target = self.resolve(target.as_deref()).filter(|&t| {
            let rendered = self.doc.is_rendered(t);
            if !rendered {
                tracing::debug!(target = ?t, "click on element that is not rendered");
            }
            rendered
        });
        if let Some(toolbox) = &mut self.toolbox {
            toolbox.dismiss_outside(&mut self.doc, target);
        }
        let Some(target) = target else {
            return Ok(());
        };

        if let Some(toolbox) = &mut self.toolbox
            && toolbox.handle_click(&mut self.doc, target)?
        {
            return Ok(());
        }
        let design_id = self
            .doc
            .closest_with_attribute(target, DESIGN_ID_ATTR)
            .map(|(_, id)| id.to_owned());
        if let Some(id) = design_id {
            return self.open_project_detail(&id);
        }
        self.router.handle_click(&mut self.doc, target);
        Ok(())
    }

    /// Show the detail page for design project `id`.
    pub fn open_project_detail(&mut self, id: &str) -> SketchResult<()> {
        let Some(item) = self.site.design_projects.iter().find(|d| d.id == id) else {
            tracing::debug!(id, "unknown design project");
            return Ok(());
        };
        let Some(detail) = self.doc.get_element_by_id(PROJECT_DETAIL_CONTENT_ID) else {
            return Ok(());
        };
        fill_project_detail(&mut self.doc, detail, item)?;
        if let Some(page) = &self.site.project_detail_page {
            self.router.show_page(&mut self.doc, page);
        }
        Ok(())
    }

    fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        relayout(&mut self.doc, &self.site, viewport);
        for listener in self.listeners.snapshot() {
            match listener {
                ResizeListener::Door => {
                    if let Some(door) = &mut self.door {
                        door.resize(&mut self.doc, &mut self.canvas, viewport);
                    }
                }
                ResizeListener::Section(index) => {
                    self.controllers[index].on_resize(&mut self.doc, &mut self.canvas);
                }
            }
        }
    }

    fn advance_time(&mut self, ms: u64) {
        let until = self.timers.now_ms().saturating_add(ms);
        while let Some(timer) = self.timers.pop_due(until) {
            let Some(door) = &mut self.door else {
                continue;
            };
            if let Some((delay, next)) = door.on_timer(&mut self.doc, &mut self.session, timer) {
                self.timers.schedule(delay, next);
            }
            self.settle();
        }
        self.timers.advance_to(until);
    }

    /// Feed pending mutation records and session transitions through the gates and run what
    /// fired, until quiescent.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_ROUNDS {
            let records = self.doc.take_mutations();
            self.gates.notify(&self.doc, &self.session, &records);
            let ready = self.gates.drain_ready();
            if ready.is_empty() && !self.doc.has_pending_mutations() {
                return;
            }
            for target in ready {
                self.run_gate(target);
            }
        }
        tracing::warn!("gates did not settle");
    }

    fn run_gate(&mut self, target: GateTarget) {
        let index = match target {
            GateTarget::Section(index) => index,
            GateTarget::Toolbox(index) => {
                if let Some(toolbox) = &mut self.toolbox {
                    toolbox.show(&mut self.doc);
                }
                index
            }
        };
        self.controllers[index].activate(
            &mut self.doc,
            &mut self.canvas,
            &mut self.listeners,
            ResizeListener::Section(index),
        );
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn current_page(&self) -> &str {
        self.router.current_page()
    }

    pub fn door(&self) -> Option<&EntryDoor> {
        self.door.as_ref()
    }

    pub fn toolbox(&self) -> Option<&Toolbox> {
        self.toolbox.as_ref()
    }

    pub fn controllers(&self) -> &[SectionController] {
        &self.controllers
    }

    /// Controller bound to the container with id `container_id`.
    pub fn controller(&self, container_id: &str) -> Option<&SectionController> {
        let key = self.doc.get_element_by_id(container_id)?;
        self.controllers.iter().find(|c| c.container() == key)
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn resize_listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Every surface with something drawn on it, named by container id (the door as
    /// `entry-door`).
    pub fn drawn_surfaces(&self) -> Vec<(String, &Surface)> {
        let mut out = Vec::new();
        if let Some(door) = self.door.as_ref().filter(|d| !d.surface().is_blank()) {
            out.push(("entry-door".to_owned(), door.surface()));
        }
        for c in &self.controllers {
            if !c.surface().is_blank() {
                out.push((self.container_name(c), c.surface()));
            }
        }
        out
    }

    fn container_name(&self, c: &SectionController) -> String {
        self.doc.id(c.container()).unwrap_or(c.name()).to_owned()
    }

    pub fn summary(&self) -> AppSummary {
        let history = self.router.history();
        AppSummary {
            current_page: self.router.current_page().to_owned(),
            active_pages: self
                .router
                .registry()
                .active_pages(&self.doc)
                .into_iter()
                .map(str::to_owned)
                .collect(),
            url: history.current().url.clone(),
            history: history.entries().iter().map(|e| e.url.clone()).collect(),
            door: self.door.as_ref().map(EntryDoor::state),
            entered: self.session.has_entered(),
            now_ms: self.timers.now_ms(),
            toolbox_open: self.toolbox.as_ref().is_some_and(Toolbox::is_open),
            selected_tool: self
                .toolbox
                .as_ref()
                .and_then(|t| t.selected_tool().map(str::to_owned)),
            resize_listeners: self.listeners.len(),
            surfaces: self
                .controllers
                .iter()
                .filter(|c| c.draw_count() > 0)
                .map(|c| SurfaceSummary {
                    name: self.container_name(c),
                    section: c.name().to_owned(),
                    width: c.surface().size().width,
                    height: c.surface().size().height,
                    drawables: c.surface().drawables().len(),
                    draws: c.draw_count(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/app.rs"]
mod tests;
