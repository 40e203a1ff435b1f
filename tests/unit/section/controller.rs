use super::*;
use crate::dom::document::{ACTIVE_CLASS, PAGE_CLASS};
use crate::foundation::core::Size;
use crate::render::sketch::SketchRecorder;
use crate::render::style::SketchStyle;

#[derive(Debug)]
struct Frame;

impl Decoration for Frame {
    fn name(&self) -> &str {
        "frame"
    }

    fn draw(&self, pen: &mut Pen<'_>, emphasis: Emphasis) {
        let size = pen.size();
        let style = match emphasis {
            Emphasis::Normal => SketchStyle::normal(),
            Emphasis::Hover => SketchStyle::hover(),
        };
        pen.rectangle(0.0, 0.0, size.width, size.height, &style);
    }
}

fn doc_with_section() -> (Document, ElementKey) {
    let mut doc = Document::new();
    let body = doc.body();
    let page = doc.create_element("section", Some("home"), body).unwrap();
    doc.add_class(page, PAGE_CLASS);
    doc.add_class(page, ACTIVE_CLASS);
    let container = doc.create_element("div", Some("hero"), page).unwrap();
    doc.create_element(CANVAS_TAG, Some("hero-canvas"), container)
        .unwrap();
    (doc, container)
}

#[test]
fn attach_requires_container_and_canvas() {
    let (mut doc, _) = doc_with_section();
    assert!(SectionController::attach(&doc, "missing", Box::new(Frame)).is_none());

    let body = doc.body();
    doc.create_element("div", Some("bare"), body).unwrap();
    assert!(SectionController::attach(&doc, "bare", Box::new(Frame)).is_none());

    let c = SectionController::attach(&doc, "hero", Box::new(Frame)).unwrap();
    assert_eq!(doc.id(c.canvas_element()), Some("hero-canvas"));
}

#[test]
fn zero_width_defers_then_draws_once_sized() {
    let (mut doc, container) = doc_with_section();
    let mut c = SectionController::attach(&doc, "hero", Box::new(Frame)).unwrap();
    let mut rc = SketchRecorder::new(3);
    let mut listeners = Listeners::new();

    doc.set_layout_size(container, Size::new(0.0, 120.0));
    assert_eq!(
        c.activate(&mut doc, &mut rc, &mut listeners, "hero"),
        Activation::Deferred
    );
    assert!(c.surface().is_blank());
    assert_eq!(c.draw_count(), 0);

    doc.set_layout_size(container, Size::new(300.0, 120.0));
    assert_eq!(
        c.activate(&mut doc, &mut rc, &mut listeners, "hero"),
        Activation::Drawn
    );
    assert_eq!(c.surface().size(), Size::new(300.0, 120.0));
    assert_eq!(c.surface().drawables().len(), 1);
    assert_eq!(doc.bounding_box(c.canvas_element()), Size::new(300.0, 120.0));
}

#[test]
fn resize_listener_is_attached_once() {
    let (mut doc, container) = doc_with_section();
    doc.set_layout_size(container, Size::new(200.0, 100.0));
    let mut c = SectionController::attach(&doc, "hero", Box::new(Frame)).unwrap();
    let mut rc = SketchRecorder::new(3);
    let mut listeners = Listeners::new();

    for _ in 0..5 {
        c.activate(&mut doc, &mut rc, &mut listeners, 7_usize);
    }
    assert_eq!(listeners.len(), 1);
    assert_eq!(listeners.count_of(&7), 1);
    assert!(c.has_resize_listener());
    assert_eq!(c.draw_count(), 5);
}

#[test]
fn resize_redraws_at_new_size() {
    let (mut doc, container) = doc_with_section();
    doc.set_layout_size(container, Size::new(200.0, 100.0));
    let mut c = SectionController::attach(&doc, "hero", Box::new(Frame)).unwrap();
    let mut rc = SketchRecorder::new(3);
    let mut listeners = Listeners::new();
    c.activate(&mut doc, &mut rc, &mut listeners, ());

    doc.set_layout_size(container, Size::new(400.0, 150.0));
    assert_eq!(c.on_resize(&mut doc, &mut rc), Activation::Drawn);
    assert_eq!(c.surface().size(), Size::new(400.0, 150.0));
    assert_eq!(c.surface().drawables().len(), 1);
}

#[test]
fn hidden_page_measures_as_zero() {
    let (mut doc, container) = doc_with_section();
    doc.set_layout_size(container, Size::new(200.0, 100.0));
    let page = doc.get_element_by_id("home").unwrap();
    doc.remove_class(page, ACTIVE_CLASS);
    let mut c = SectionController::attach(&doc, "hero", Box::new(Frame)).unwrap();
    let mut rc = SketchRecorder::new(3);
    assert_eq!(c.on_resize(&mut doc, &mut rc), Activation::Deferred);
}

#[test]
fn hover_redraws_only_on_transition() {
    let (mut doc, container) = doc_with_section();
    doc.set_layout_size(container, Size::new(200.0, 60.0));
    let mut c = SectionController::attach(&doc, "hero", Box::new(Frame)).unwrap();
    let mut rc = SketchRecorder::new(3);
    let mut listeners = Listeners::new();
    c.activate(&mut doc, &mut rc, &mut listeners, ());
    assert_eq!(c.draw_count(), 1);

    assert!(c.set_hovered(&mut doc, &mut rc, true));
    assert!(!c.set_hovered(&mut doc, &mut rc, true));
    assert!(!c.set_hovered(&mut doc, &mut rc, true));
    assert_eq!(c.draw_count(), 2);
    assert_eq!(c.emphasis(), Emphasis::Hover);
    assert_eq!(c.surface().drawables()[0].style.stroke_width, 4.0);

    assert!(c.set_hovered(&mut doc, &mut rc, false));
    assert_eq!(c.draw_count(), 3);
    assert_eq!(c.surface().drawables()[0].style.stroke_width, 2.0);
}
