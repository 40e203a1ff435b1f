//! Card galleries: the project list and the design grid with its detail page.

use crate::dom::document::{Document, ElementKey};
use crate::foundation::core::Size;
use crate::foundation::error::SketchResult;
use crate::section::controller::CANVAS_TAG;

pub const PROJECT_INDEX_ATTR: &str = "data-project-index";
pub const DESIGN_ID_ATTR: &str = "data-project-id";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignProject {
    pub id: String,
    pub title: String,
    pub image: String,
    pub description: String,
}

pub fn default_projects() -> Vec<Project> {
    let project = |title: &str, description: &str, tech: [&str; 3], slug: &str| Project {
        title: title.to_owned(),
        description: description.to_owned(),
        technologies: tech.iter().map(|t| (*t).to_owned()).collect(),
        link: Some(format!("https://github.com/yourusername/{slug}")),
    };
    vec![
        project(
            "Project One",
            "A brief description of your first project. Explain what it does and why it's interesting.",
            ["JavaScript", "HTML", "CSS"],
            "project-one",
        ),
        project(
            "Project Two",
            "A brief description of your second project. Highlight key features and technologies used.",
            ["React", "Node.js", "MongoDB"],
            "project-two",
        ),
        project(
            "Project Three",
            "A brief description of your third project. Showcase your skills and creativity.",
            ["Python", "Django", "PostgreSQL"],
            "project-three",
        ),
    ]
}

pub fn default_design_projects() -> Vec<DesignProject> {
    let placeholder = |n: u32, name: &str| DesignProject {
        id: format!("project-{n}"),
        title: format!("Project {name}"),
        image: format!(
            "https://via.placeholder.com/600x400/000000/FFFFFF?text=Project+{name}"
        ),
        description: format!(
            "This is a placeholder description for Project {name}. Add your project details here."
        ),
    };
    vec![
        DesignProject {
            id: "project-1".to_owned(),
            title: "All In - Accessible Board Game System for the Visually Impaired".to_owned(),
            image: "assets/design_images/all_in_cover.jpg".to_owned(),
            description: "This is a placeholder description for Project One. Add your project details here.".to_owned(),
        },
        placeholder(2, "Two"),
        placeholder(3, "Three"),
        placeholder(4, "Four"),
    ]
}

/// Id of the `index`th project card.
pub fn project_card_id(index: usize) -> String {
    format!("project-card-{index}")
}

/// Id of the design card for the design project `id`.
pub fn design_card_id(id: &str) -> String {
    format!("design-card-{id}")
}

fn child(doc: &mut Document, parent: ElementKey, tag: &str, class: &str) -> SketchResult<ElementKey> {
    let el = doc.create_element(tag, None, parent)?;
    doc.add_class(el, class);
    Ok(el)
}

/// Replace the content of `container` with one card per project. Returns the card ids.
pub fn render_project_cards(
    doc: &mut Document,
    container: ElementKey,
    projects: &[Project],
    card_size: Size,
) -> SketchResult<Vec<String>> {
    doc.clear_children(container);
    let mut ids = Vec::with_capacity(projects.len());
    for (index, project) in projects.iter().enumerate() {
        let id = project_card_id(index);
        let card = doc.create_element("div", Some(&id), container)?;
        doc.add_class(card, "project-card");
        doc.set_attribute(card, PROJECT_INDEX_ATTR, &index.to_string());
        doc.set_layout_size(card, card_size);

        child(doc, card, CANVAS_TAG, "project-card-canvas")?;
        let title = child(doc, card, "h3", "project-card-title")?;
        doc.set_text(title, &project.title);
        let description = child(doc, card, "p", "project-card-description")?;
        doc.set_text(description, &project.description);
        let tech = child(doc, card, "div", "project-card-technologies")?;
        for t in &project.technologies {
            let tag = child(doc, tech, "span", "technology-tag")?;
            doc.set_text(tag, t);
        }
        let link = child(doc, card, "a", "project-card-link")?;
        match &project.link {
            Some(href) => {
                doc.set_attribute(link, "href", href);
                doc.set_text(link, "View Project");
            }
            None => {
                doc.set_attribute(link, "href", "#");
                doc.set_text(link, "Coming Soon");
            }
        }
        ids.push(id);
    }
    Ok(ids)
}

/// Replace the content of `container` with one clickable card per design project.
pub fn render_design_cards(
    doc: &mut Document,
    container: ElementKey,
    items: &[DesignProject],
    card_size: Size,
) -> SketchResult<Vec<String>> {
    doc.clear_children(container);
    let mut ids = Vec::with_capacity(items.len());
    for item in items {
        let id = design_card_id(&item.id);
        let card = doc.create_element("div", Some(&id), container)?;
        doc.add_class(card, "design-project-card");
        doc.set_attribute(card, DESIGN_ID_ATTR, &item.id);
        doc.set_layout_size(card, card_size);

        child(doc, card, CANVAS_TAG, "design-project-canvas")?;
        let content = child(doc, card, "div", "design-project-content")?;
        let image = child(doc, content, "img", "design-project-image")?;
        doc.set_attribute(image, "src", &item.image);
        doc.set_attribute(image, "alt", &item.title);
        let title = child(doc, content, "h3", "design-project-title")?;
        doc.set_text(title, &item.title);
        ids.push(id);
    }
    Ok(ids)
}

/// Fill the detail panel with one design project (title, image, description).
pub fn fill_project_detail(
    doc: &mut Document,
    detail: ElementKey,
    item: &DesignProject,
) -> SketchResult<()> {
    doc.clear_children(detail);
    let title = child(doc, detail, "h1", "project-detail-title")?;
    doc.set_text(title, &item.title);
    let image = child(doc, detail, "img", "project-detail-image")?;
    doc.set_attribute(image, "src", &item.image);
    doc.set_attribute(image, "alt", &item.title);
    let description = child(doc, detail, "p", "project-detail-description")?;
    doc.set_text(description, &item.description);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/section/gallery.rs"]
mod tests;
