use super::*;
use crate::render::canvas::Primitive;
use crate::render::sketch::SketchRecorder;
use crate::render::surface::Surface;

fn record(decoration: &dyn Decoration, size: Size, emphasis: Emphasis) -> Surface {
    let mut surface = Surface::new();
    surface.resize(size);
    let mut rc = SketchRecorder::new(11);
    decoration.draw(&mut Pen::new(&mut rc, &mut surface), emphasis);
    surface
}

fn kinds(surface: &Surface) -> Vec<&'static str> {
    surface
        .drawables()
        .iter()
        .map(|d| match d.primitive {
            Primitive::Rectangle { .. } => "rect",
            Primitive::Circle { .. } => "circle",
            Primitive::Ellipse { .. } => "ellipse",
            Primitive::Line { .. } => "line",
            Primitive::Path { .. } => "path",
        })
        .collect()
}

#[test]
fn section_shape_sets() {
    let size = Size::new(800.0, 500.0);
    assert_eq!(
        kinds(&record(&Hero, size, Emphasis::Normal)),
        ["rect", "circle", "circle", "line"]
    );
    assert_eq!(
        kinds(&record(&About, size, Emphasis::Normal)),
        ["ellipse", "rect", "circle", "line", "line"]
    );
    assert_eq!(
        kinds(&record(&Contact, size, Emphasis::Normal)),
        ["rect", "circle", "circle", "rect", "rect", "line", "line"]
    );
    assert_eq!(
        kinds(&record(&AboutPortrait, size, Emphasis::Normal)),
        ["rect", "line", "line", "line", "line"]
    );
    assert_eq!(kinds(&record(&DesignCard, size, Emphasis::Normal)), ["rect"]);
}

#[test]
fn hero_border_is_inset() {
    let s = record(&Hero, Size::new(800.0, 500.0), Emphasis::Normal);
    assert_eq!(
        s.drawables()[0].primitive,
        Primitive::Rectangle {
            x: 50.0,
            y: 50.0,
            width: 700.0,
            height: 400.0
        }
    );
    assert_eq!(s.drawables()[0].style.stroke_width, 3.0);
}

#[test]
fn project_card_mark_cycles_by_index() {
    let size = Size::new(300.0, 200.0);
    let shapes: Vec<_> = (0..4)
        .map(|index| kinds(&record(&ProjectCard { index }, size, Emphasis::Normal))[0])
        .collect();
    assert_eq!(shapes, ["circle", "rect", "ellipse", "circle"]);
}

#[test]
fn nav_button_follows_emphasis() {
    let b = NavButton::default();
    let size = Size::new(160.0, 48.0);
    let normal = record(&b, size, Emphasis::Normal);
    let hover = record(&b, size, Emphasis::Hover);
    assert_eq!(normal.drawables()[0].style, SketchStyle::normal());
    assert_eq!(hover.drawables()[0].style, SketchStyle::hover());
    assert_eq!(
        hover.drawables()[0].primitive,
        Primitive::Rectangle {
            x: 0.0,
            y: 0.0,
            width: 160.0,
            height: 48.0
        }
    );
}

#[test]
fn toolbox_icon_draws_every_part() {
    let s = record(&ToolboxIcon, Size::new(80.0, 80.0), Emphasis::Normal);
    assert_eq!(
        kinds(&s),
        ["rect", "rect", "rect", "line", "path", "line", "rect", "line"]
    );
}

#[test]
fn door_is_centered_and_capped() {
    let wide = door_geometry(Size::new(1280.0, 800.0));
    assert_eq!(wide, Rect::new(500.0, 120.0, 780.0, 680.0));

    let narrow = door_geometry(Size::new(400.0, 800.0));
    assert_eq!(narrow.width(), 100.0);
    assert_eq!(narrow.height(), 200.0);
    assert_eq!(narrow.x0, 150.0);
}

#[test]
fn door_parts_and_hover_weight() {
    let door = Door::default();
    let size = Size::new(1280.0, 800.0);
    let s = record(&door, size, Emphasis::Normal);
    assert_eq!(
        kinds(&s),
        [
            "rect", "rect", "rect", "rect", "rect", "rect", "rect", "circle", "ellipse", "rect"
        ]
    );
    let h = record(&door, size, Emphasis::Hover);
    assert_eq!(h.drawables()[0].style.stroke_width, 4.0);
    assert_eq!(h.drawables()[1].style.stroke_width, 4.0 * 0.8);
}

#[test]
fn everything_is_stroke_only() {
    let size = Size::new(640.0, 480.0);
    let all: [&dyn Decoration; 9] = [
        &Hero,
        &About,
        &AboutPortrait,
        &Contact,
        &ProjectCard { index: 2 },
        &DesignCard,
        &NavButton::default(),
        &ToolboxIcon,
        &Door::default(),
    ];
    for d in all {
        let s = record(d, size, Emphasis::Hover);
        assert!(!s.is_blank(), "{} drew nothing", d.name());
        assert!(s.drawables().iter().all(|x| x.style.fill.is_none()));
    }
}
