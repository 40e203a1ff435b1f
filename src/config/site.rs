//! Site configuration: the pages, sections, galleries and tuning of one portfolio.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::entry::door::DoorTimings;
use crate::foundation::core::{Size, is_degenerate};
use crate::foundation::error::{SketchError, SketchResult};
use crate::render::style::{SketchStyle, StylePair};
use crate::section::gallery::{
    DesignProject, Project, default_design_projects, default_projects,
};
use crate::toolbox::popup::{Tool, default_tools};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpec {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Page a back button on this page returns to; no back button when unset.
    #[serde(default)]
    pub back_to: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    About,
    AboutPortrait,
    Contact,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionSpec {
    pub kind: SectionKind,
    /// Page the section lives on.
    pub page: String,
    /// Container element id; its canvas child gets `<container>-canvas`.
    pub container: String,
    /// Fixed container size. Unset means the container fills the viewport and follows resizes.
    #[serde(default)]
    pub size: Option<Size>,
    /// Also wait for the entry door to have been passed.
    #[serde(default)]
    pub requires_entered: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavButtonSpec {
    pub target: String,
    pub label: String,
}

/// Laid-out sizes of repeated elements.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutSpec {
    pub nav_button: Size,
    pub project_card: Size,
    pub design_card: Size,
    pub toolbox: Size,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            nav_button: Size::new(220.0, 64.0),
            project_card: Size::new(320.0, 260.0),
            design_card: Size::new(360.0, 300.0),
            toolbox: Size::new(80.0, 80.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Size,
    pub home: String,
    /// Fragment the session starts on (`#about` deep link).
    #[serde(default)]
    pub initial_fragment: Option<String>,
    pub pages: Vec<PageSpec>,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
    #[serde(default)]
    pub nav_buttons: Vec<NavButtonSpec>,
    #[serde(default)]
    pub projects_page: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub design_page: Option<String>,
    #[serde(default)]
    pub design_projects: Vec<DesignProject>,
    #[serde(default)]
    pub project_detail_page: Option<String>,
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub door: DoorTimings,
    #[serde(default)]
    pub styles: StylePair,
    #[serde(default)]
    pub layout: LayoutSpec,
    #[serde(default)]
    pub seed: u64,
}

fn default_viewport() -> Size {
    Size::new(1280.0, 800.0)
}

impl Default for SiteConfig {
    fn default() -> Self {
        let page = |id: &str, title: &str, back_to: &str| PageSpec {
            id: id.to_owned(),
            title: Some(title.to_owned()),
            back_to: Some(back_to.to_owned()),
        };
        let nav = |target: &str, label: &str| NavButtonSpec {
            target: target.to_owned(),
            label: label.to_owned(),
        };
        let section = |kind, page: &str, container: &str, size: Option<Size>, gated| SectionSpec {
            kind,
            page: page.to_owned(),
            container: container.to_owned(),
            size,
            requires_entered: gated,
        };
        Self {
            viewport: default_viewport(),
            home: "home".to_owned(),
            initial_fragment: None,
            pages: vec![
                PageSpec {
                    id: "home".to_owned(),
                    title: None,
                    back_to: None,
                },
                page("about", "About", "home"),
                page("projects", "Projects", "home"),
                page("design", "Design", "home"),
                page("contact", "Contact", "home"),
                page("project-detail", "Project", "design"),
            ],
            sections: vec![
                section(SectionKind::Hero, "home", "hero", None, true),
                section(
                    SectionKind::About,
                    "about",
                    "about-section",
                    Some(Size::new(900.0, 520.0)),
                    false,
                ),
                section(
                    SectionKind::AboutPortrait,
                    "about",
                    "portrait",
                    Some(Size::new(280.0, 360.0)),
                    false,
                ),
                section(SectionKind::Contact, "contact", "contact-section", None, false),
            ],
            nav_buttons: vec![
                nav("about", "About"),
                nav("projects", "Projects"),
                nav("design", "Design"),
                nav("contact", "Contact"),
            ],
            projects_page: Some("projects".to_owned()),
            projects: default_projects(),
            design_page: Some("design".to_owned()),
            design_projects: default_design_projects(),
            project_detail_page: Some("project-detail".to_owned()),
            tools: default_tools(),
            door: DoorTimings::default(),
            styles: StylePair::default(),
            layout: LayoutSpec::default(),
            seed: 0,
        }
    }
}

impl SiteConfig {
    /// Parse a site from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> SketchResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SketchError::validation(format!("parse site JSON: {e}")))
    }

    /// Parse a site from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SketchResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SketchError::validation(format!("open site JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> SketchResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SketchError::serde(format!("serialize site JSON: {e}")))
    }

    pub fn validate(&self) -> SketchResult<()> {
        if is_degenerate(self.viewport) || !self.viewport.is_finite() {
            return Err(SketchError::validation("viewport width/height must be > 0"));
        }
        if self.door.swing_ms == 0 || self.door.zoom_ms == 0 {
            return Err(SketchError::validation("door timings must be > 0 ms"));
        }
        for (name, style) in [
            ("normal", &self.styles.normal),
            ("hover", &self.styles.hover),
        ] {
            validate_style(style, name)?;
        }
        for (name, size) in [
            ("nav_button", self.layout.nav_button),
            ("project_card", self.layout.project_card),
            ("design_card", self.layout.design_card),
            ("toolbox", self.layout.toolbox),
        ] {
            if !size.is_finite() || size.width < 0.0 || size.height < 0.0 {
                return Err(SketchError::validation(format!(
                    "layout.{name} must be finite and >= 0"
                )));
            }
        }

        let mut ids = HashSet::new();
        for page in &self.pages {
            if page.id.trim().is_empty() {
                return Err(SketchError::validation("page id must be non-empty"));
            }
            if !ids.insert(page.id.as_str()) {
                return Err(SketchError::validation(format!(
                    "duplicate page id '{}'",
                    page.id
                )));
            }
        }
        let known = |id: &str, field: &str| -> SketchResult<()> {
            if ids.contains(id) {
                Ok(())
            } else {
                Err(SketchError::validation(format!(
                    "{field} references unknown page '{id}'"
                )))
            }
        };

        known(&self.home, "home")?;
        for page in &self.pages {
            if let Some(back) = &page.back_to {
                known(back, &format!("page '{}' back_to", page.id))?;
            }
        }
        for nav in &self.nav_buttons {
            known(&nav.target, "nav button")?;
        }
        for (field, page) in [
            ("projects_page", &self.projects_page),
            ("design_page", &self.design_page),
            ("project_detail_page", &self.project_detail_page),
        ] {
            if let Some(page) = page {
                known(page, field)?;
            }
        }
        if !self.projects.is_empty() && self.projects_page.is_none() {
            return Err(SketchError::validation("projects need a projects_page"));
        }
        if !self.design_projects.is_empty() && self.design_page.is_none() {
            return Err(SketchError::validation("design projects need a design_page"));
        }

        let mut containers = HashSet::new();
        for s in &self.sections {
            known(&s.page, &format!("section '{}'", s.container))?;
            if s.container.trim().is_empty() {
                return Err(SketchError::validation("section container must be non-empty"));
            }
            if ids.contains(s.container.as_str()) || !containers.insert(s.container.as_str()) {
                return Err(SketchError::validation(format!(
                    "section container id '{}' is not unique",
                    s.container
                )));
            }
            if let Some(size) = s.size
                && (!size.is_finite() || size.width < 0.0 || size.height < 0.0)
            {
                return Err(SketchError::validation(format!(
                    "section '{}' size must be finite and >= 0",
                    s.container
                )));
            }
        }

        let mut design_ids = HashSet::new();
        for d in &self.design_projects {
            if d.id.trim().is_empty() || !design_ids.insert(d.id.as_str()) {
                return Err(SketchError::validation(format!(
                    "design project id '{}' must be unique and non-empty",
                    d.id
                )));
            }
        }
        let mut tool_ids = HashSet::new();
        for t in &self.tools {
            if t.id.trim().is_empty() || !tool_ids.insert(t.id.as_str()) {
                return Err(SketchError::validation(format!(
                    "tool id '{}' must be unique and non-empty",
                    t.id
                )));
            }
        }

        if let Some(frag) = &self.initial_fragment
            && frag.trim_start_matches('#').is_empty()
        {
            return Err(SketchError::validation("initial_fragment must name a page"));
        }
        Ok(())
    }
}

fn validate_style(style: &SketchStyle, name: &str) -> SketchResult<()> {
    for (field, v) in [
        ("stroke_width", style.stroke_width),
        ("roughness", style.roughness),
        ("bowing", style.bowing),
    ] {
        if !v.is_finite() || v < 0.0 {
            return Err(SketchError::validation(format!(
                "styles.{name}.{field} must be finite and >= 0"
            )));
        }
    }
    if style.stroke_width == 0.0 {
        return Err(SketchError::validation(format!(
            "styles.{name}.stroke_width must be > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/config/site.rs"]
mod tests;
