use super::*;

fn container() -> (Document, ElementKey) {
    let mut doc = Document::new();
    let body = doc.body();
    let c = doc.create_element("div", Some("grid"), body).unwrap();
    (doc, c)
}

#[test]
fn default_data_matches_site() {
    let projects = default_projects();
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[1].technologies, ["React", "Node.js", "MongoDB"]);

    let design = default_design_projects();
    assert_eq!(design.len(), 4);
    assert_eq!(design[0].image, "assets/design_images/all_in_cover.jpg");
    assert_eq!(design[3].id, "project-4");
    assert_eq!(design[3].title, "Project Four");
}

#[test]
fn project_cards_carry_canvas_and_content() {
    let (mut doc, grid) = container();
    let mut projects = default_projects();
    projects[2].link = None;
    let ids = render_project_cards(&mut doc, grid, &projects, Size::new(300.0, 200.0)).unwrap();
    assert_eq!(ids, ["project-card-0", "project-card-1", "project-card-2"]);

    let card = doc.get_element_by_id("project-card-2").unwrap();
    assert_eq!(doc.attribute(card, PROJECT_INDEX_ATTR), Some("2"));
    assert!(doc.first_child_with_tag(card, CANVAS_TAG).is_some());
    let link = doc.first_child_with_tag(card, "a").unwrap();
    assert_eq!(doc.text(link), Some("Coming Soon"));
    assert_eq!(doc.bounding_box(card), Size::new(300.0, 200.0));
}

#[test]
fn rerendering_replaces_cards() {
    let (mut doc, grid) = container();
    let items = default_design_projects();
    render_design_cards(&mut doc, grid, &items, Size::new(10.0, 10.0)).unwrap();
    render_design_cards(&mut doc, grid, &items[..2], Size::new(10.0, 10.0)).unwrap();
    assert_eq!(doc.children(grid).len(), 2);
    assert!(doc.get_element_by_id("design-card-project-3").is_none());
}

#[test]
fn detail_shows_selected_project() {
    let (mut doc, detail) = container();
    let items = default_design_projects();
    fill_project_detail(&mut doc, detail, &items[1]).unwrap();
    fill_project_detail(&mut doc, detail, &items[0]).unwrap();

    let kids = doc.children(detail).to_vec();
    assert_eq!(kids.len(), 3);
    assert_eq!(doc.tag(kids[0]), Some("h1"));
    assert_eq!(doc.text(kids[0]), Some(items[0].title.as_str()));
    assert_eq!(doc.attribute(kids[1], "src"), Some(items[0].image.as_str()));
}
