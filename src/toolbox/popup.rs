//! Floating toolbox: a launcher button and a popup listing the available tools.

use crate::dom::document::{ACTIVE_CLASS, Document, ElementKey};
use crate::foundation::error::SketchResult;

pub const TOOLBOX_BUTTON_ID: &str = "toolbox-button";
pub const TOOLBOX_CANVAS_ID: &str = "toolbox-canvas";
pub const TOOLBOX_POPUP_ID: &str = "toolbox-popup";
pub const TOOLBOX_CLOSE_ID: &str = "toolbox-popup-close";
pub const CLOSE_CLASS: &str = "toolbox-popup-close";
pub const TOOLS_LIST_CLASS: &str = "toolbox-tools-list";
pub const TOOL_ITEM_CLASS: &str = "toolbox-tool-item";
pub const TOOL_ID_ATTR: &str = "data-tool-id";

/// Element id of the list entry for tool `id`.
pub fn tool_item_id(id: &str) -> String {
    format!("toolbox-tool-{id}")
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl Tool {
    pub fn new(id: &str, name: &str, description: &str, icon: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
        }
    }
}

/// Tools offered when nothing else is configured.
pub fn default_tools() -> Vec<Tool> {
    vec![
        Tool::new(
            "pickaxe",
            "Pickaxe",
            "Excavate hidden content and reveal buried information on the page.",
            "\u{26cf}\u{fe0f}",
        ),
        Tool::new(
            "magnifying",
            "Magnifying Glass",
            "Zoom in and inspect details of elements and content.",
            "\u{1f50d}",
        ),
    ]
}

#[derive(Clone, Debug)]
pub struct Toolbox {
    button: ElementKey,
    popup: ElementKey,
    close_button: Option<ElementKey>,
    list: Option<ElementKey>,
    tools: Vec<Tool>,
    open: bool,
    shown: bool,
    selected: Option<String>,
}

impl Toolbox {
    /// Bind to the launcher and popup elements; `None` (logged) if either is missing.
    pub fn attach(doc: &Document, tools: Vec<Tool>) -> Option<Self> {
        let button = doc.get_element_by_id(TOOLBOX_BUTTON_ID);
        let popup = doc.get_element_by_id(TOOLBOX_POPUP_ID);
        let canvas = doc.get_element_by_id(TOOLBOX_CANVAS_ID);
        let (Some(button), Some(popup), Some(_)) = (button, popup, canvas) else {
            tracing::warn!(
                button = button.is_some(),
                popup = popup.is_some(),
                canvas = canvas.is_some(),
                "toolbox elements missing"
            );
            return None;
        };
        let within = |class: &str| {
            doc.elements_by_class(class)
                .into_iter()
                .find(|&k| doc.contains(popup, k))
        };
        Some(Self {
            button,
            popup,
            close_button: within(CLOSE_CLASS),
            list: within(TOOLS_LIST_CLASS),
            tools,
            open: false,
            shown: false,
            selected: None,
        })
    }

    /// Reveal the launcher. Called once the site has been entered.
    pub fn show(&mut self, doc: &mut Document) {
        if self.shown {
            return;
        }
        self.shown = true;
        doc.set_hidden(self.button, false);
        tracing::debug!("toolbox shown");
    }

    /// Route a click. Returns `true` when the toolbox consumed it (the click must not reach
    /// anything else); a click outside only closes an open popup and is not consumed.
    pub fn handle_click(&mut self, doc: &mut Document, target: ElementKey) -> SketchResult<bool> {
        if self.dismiss_outside(doc, Some(target)) {
            return Ok(false);
        }
        let in_popup = doc.contains(self.popup, target);
        let in_button = doc.contains(self.button, target);

        if in_button {
            self.toggle(doc)?;
            return Ok(true);
        }
        if !in_popup {
            return Ok(false);
        }
        if self.close_button.is_some_and(|c| doc.contains(c, target)) {
            self.close(doc);
        } else if let Some((_, id)) = doc.closest_with_attribute(target, TOOL_ID_ATTR) {
            let id = id.to_owned();
            self.select_tool(&id);
        }
        Ok(true)
    }

    /// Document-level click check: close an open popup unless `target` lies inside the popup or
    /// the launcher. `None` is a click on nothing in particular. Returns `true` when it closed.
    pub fn dismiss_outside(&mut self, doc: &mut Document, target: Option<ElementKey>) -> bool {
        if !self.open {
            return false;
        }
        let inside =
            target.is_some_and(|t| doc.contains(self.popup, t) || doc.contains(self.button, t));
        if inside {
            return false;
        }
        self.close(doc);
        true
    }

    /// Escape closes an open popup.
    pub fn handle_key(&mut self, doc: &mut Document, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.close(doc);
            return true;
        }
        false
    }

    pub fn toggle(&mut self, doc: &mut Document) -> SketchResult<()> {
        if self.open {
            self.close(doc);
            Ok(())
        } else {
            self.open(doc)
        }
    }

    pub fn open(&mut self, doc: &mut Document) -> SketchResult<()> {
        tracing::debug!("opening toolbox popup");
        self.open = true;
        doc.add_class(self.popup, ACTIVE_CLASS);
        self.render_tools(doc)
    }

    pub fn close(&mut self, doc: &mut Document) {
        tracing::debug!("closing toolbox popup");
        self.open = false;
        doc.remove_class(self.popup, ACTIVE_CLASS);
    }

    fn render_tools(&self, doc: &mut Document) -> SketchResult<()> {
        let Some(list) = self.list else {
            return Ok(());
        };
        doc.clear_children(list);
        for tool in &self.tools {
            let item = doc.create_element("div", Some(&tool_item_id(&tool.id)), list)?;
            doc.add_class(item, TOOL_ITEM_CLASS);
            doc.set_attribute(item, TOOL_ID_ATTR, &tool.id);

            let icon = doc.create_element("div", None, item)?;
            doc.add_class(icon, "toolbox-tool-icon");
            doc.set_text(icon, &tool.icon);

            let info = doc.create_element("div", None, item)?;
            doc.add_class(info, "toolbox-tool-info");
            let name = doc.create_element("div", None, info)?;
            doc.add_class(name, "toolbox-tool-name");
            doc.set_text(name, &tool.name);
            let description = doc.create_element("div", None, info)?;
            doc.add_class(description, "toolbox-tool-description");
            doc.set_text(description, &tool.description);
        }
        Ok(())
    }

    pub fn select_tool(&mut self, id: &str) {
        if !self.tools.iter().any(|t| t.id == id) {
            tracing::debug!(tool = id, "unknown tool");
            return;
        }
        tracing::info!(tool = id, "tool selected");
        self.selected = Some(id.to_owned());
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn selected_tool(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn list_element(&self) -> Option<ElementKey> {
        self.list
    }
}

#[cfg(test)]
#[path = "../../tests/unit/toolbox/popup.rs"]
mod tests;
