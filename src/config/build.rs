//! Builds the element tree a [`SiteConfig`] describes (what the page's HTML would provide).

use crate::dom::document::{ACTIVE_CLASS, Document, ElementKey, PAGE_CLASS};
use crate::entry::door::{DOOR_CANVAS_ID, ENTRY_SCREEN_ID, MAIN_CONTENT_ID};
use crate::foundation::core::Size;
use crate::foundation::error::{SketchError, SketchResult};
use crate::nav::router::{BACK_TARGET_ATTR, NAV_TARGET_ATTR};
use crate::section::controller::CANVAS_TAG;
use crate::section::gallery::{render_design_cards, render_project_cards};
use crate::toolbox::popup::{
    CLOSE_CLASS, TOOLBOX_BUTTON_ID, TOOLBOX_CANVAS_ID, TOOLBOX_CLOSE_ID, TOOLBOX_POPUP_ID,
    TOOLS_LIST_CLASS,
};

use super::site::SiteConfig;

pub const PROJECTS_CONTAINER_ID: &str = "projects-container";
pub const DESIGN_CONTAINER_ID: &str = "design-projects-container";
pub const PROJECT_DETAIL_CONTENT_ID: &str = "project-detail-content";

pub fn nav_button_id(target: &str) -> String {
    format!("nav-{target}")
}

pub fn back_button_id(page: &str) -> String {
    format!("back-{page}")
}

pub fn section_canvas_id(container: &str) -> String {
    format!("{container}-canvas")
}

fn element(
    doc: &mut Document,
    tag: &str,
    id: Option<&str>,
    class: Option<&str>,
    parent: ElementKey,
) -> SketchResult<ElementKey> {
    let el = doc.create_element(tag, id, parent)?;
    if let Some(class) = class {
        doc.add_class(el, class);
    }
    Ok(el)
}

impl Document {
    /// Build the document for `site`: entry screen, pages (home active), section containers with
    /// their canvases, navigation and back buttons, galleries and the toolbox.
    ///
    /// Element sizes are the laid-out sizes at the configured viewport. Mutation records of the
    /// build are left queued.
    pub fn from_site(site: &SiteConfig) -> SketchResult<Self> {
        let mut doc = Document::new();
        let body = doc.body();
        let viewport = site.viewport;
        doc.set_layout_size(body, viewport);

        let screen = element(&mut doc, "div", Some(ENTRY_SCREEN_ID), None, body)?;
        element(&mut doc, CANVAS_TAG, Some(DOOR_CANVAS_ID), None, screen)?;

        let main = element(&mut doc, "main", Some(MAIN_CONTENT_ID), None, body)?;
        doc.set_layout_size(main, viewport);

        for spec in &site.pages {
            let page = element(&mut doc, "section", Some(&spec.id), Some(PAGE_CLASS), main)?;
            doc.set_layout_size(page, viewport);
            if spec.id == site.home {
                doc.add_class(page, ACTIVE_CLASS);
            }
            if let Some(back) = &spec.back_to {
                let id = back_button_id(&spec.id);
                let b = element(&mut doc, "button", Some(&id), Some("back-button"), page)?;
                doc.set_attribute(b, BACK_TARGET_ATTR, back);
                doc.set_text(b, "Back");
            }
            if let Some(title) = &spec.title {
                let h = element(&mut doc, "h1", None, Some("page-title"), page)?;
                doc.set_text(h, title);
            }
        }

        let page_of = |doc: &Document, id: &str| {
            doc.get_element_by_id(id)
                .ok_or_else(|| SketchError::validation(format!("unknown page '{id}'")))
        };

        if !site.nav_buttons.is_empty() {
            let home = page_of(&doc, &site.home)?;
            let nav = element(&mut doc, "nav", Some("home-nav"), Some("nav-buttons"), home)?;
            for spec in &site.nav_buttons {
                let id = nav_button_id(&spec.target);
                let b = element(&mut doc, "button", Some(&id), Some("nav-button"), nav)?;
                doc.set_attribute(b, NAV_TARGET_ATTR, &spec.target);
                doc.set_layout_size(b, site.layout.nav_button);
                element(&mut doc, CANVAS_TAG, None, Some("nav-button-canvas"), b)?;
                let label = element(&mut doc, "span", None, Some("nav-button-label"), b)?;
                doc.set_text(label, &spec.label);
            }
        }

        for spec in &site.sections {
            let page = page_of(&doc, &spec.page)?;
            let c = element(&mut doc, "div", Some(&spec.container), Some("section"), page)?;
            doc.set_layout_size(c, spec.size.unwrap_or(viewport));
            let canvas_id = section_canvas_id(&spec.container);
            element(&mut doc, CANVAS_TAG, Some(&canvas_id), None, c)?;
        }

        if let Some(page) = &site.projects_page {
            let page = page_of(&doc, page)?;
            let grid = element(&mut doc, "div", Some(PROJECTS_CONTAINER_ID), None, page)?;
            doc.set_layout_size(grid, viewport);
            render_project_cards(&mut doc, grid, &site.projects, site.layout.project_card)?;
        }
        if let Some(page) = &site.design_page {
            let page = page_of(&doc, page)?;
            let grid = element(&mut doc, "div", Some(DESIGN_CONTAINER_ID), None, page)?;
            doc.set_layout_size(grid, viewport);
            render_design_cards(
                &mut doc,
                grid,
                &site.design_projects,
                site.layout.design_card,
            )?;
        }
        if let Some(page) = &site.project_detail_page {
            let page = page_of(&doc, page)?;
            let detail = element(&mut doc, "article", Some(PROJECT_DETAIL_CONTENT_ID), None, page)?;
            doc.set_layout_size(detail, viewport);
        }

        let button = element(
            &mut doc,
            "button",
            Some(TOOLBOX_BUTTON_ID),
            Some("toolbox-button"),
            body,
        )?;
        doc.set_layout_size(button, site.layout.toolbox);
        doc.set_hidden(button, true);
        let canvas = element(&mut doc, CANVAS_TAG, Some(TOOLBOX_CANVAS_ID), None, button)?;
        doc.set_layout_size(canvas, site.layout.toolbox);

        let popup = element(
            &mut doc,
            "div",
            Some(TOOLBOX_POPUP_ID),
            Some("toolbox-popup"),
            body,
        )?;
        let heading = element(&mut doc, "h2", None, Some("toolbox-popup-title"), popup)?;
        doc.set_text(heading, "Toolbox");
        let close = element(
            &mut doc,
            "button",
            Some(TOOLBOX_CLOSE_ID),
            Some(CLOSE_CLASS),
            popup,
        )?;
        doc.set_text(close, "\u{d7}");
        element(&mut doc, "div", None, Some(TOOLS_LIST_CLASS), popup)?;

        Ok(doc)
    }
}

/// Re-lay out viewport-sized elements after a window resize.
pub(crate) fn relayout(doc: &mut Document, site: &SiteConfig, viewport: Size) {
    let body = doc.body();
    doc.set_layout_size(body, viewport);
    let containers = [
        MAIN_CONTENT_ID,
        PROJECTS_CONTAINER_ID,
        DESIGN_CONTAINER_ID,
        PROJECT_DETAIL_CONTENT_ID,
    ];
    let fluid = site
        .pages
        .iter()
        .map(|p| p.id.as_str())
        .chain(containers)
        .chain(
            site.sections
                .iter()
                .filter(|s| s.size.is_none())
                .map(|s| s.container.as_str()),
        );
    for id in fluid {
        if let Some(key) = doc.get_element_by_id(id) {
            doc.set_layout_size(key, viewport);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/build.rs"]
mod tests;
