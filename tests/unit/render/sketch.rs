use super::*;
use kurbo::Shape;

fn move_count(p: &BezPath) -> usize {
    p.elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_)))
        .count()
}

#[test]
fn same_seed_same_strokes() {
    let style = SketchStyle::normal();
    let mut a = SketchRecorder::new(7);
    let mut b = SketchRecorder::new(7);
    let da = a.rectangle(10.0, 10.0, 100.0, 40.0, &style);
    let db = b.rectangle(10.0, 10.0, 100.0, 40.0, &style);
    assert_eq!(da.strokes, db.strokes);

    let mut c = SketchRecorder::new(8);
    let dc = c.rectangle(10.0, 10.0, 100.0, 40.0, &style);
    assert_ne!(da.strokes, dc.strokes);
}

#[test]
fn rectangles_are_four_double_stroked_sides() {
    let mut r = SketchRecorder::new(1);
    let d = r.rectangle(0.0, 0.0, 50.0, 20.0, &SketchStyle::normal());
    assert_eq!(d.strokes.len(), 4);
    assert!(d.strokes.iter().all(|s| move_count(s) == 2));
    assert_eq!(
        d.primitive,
        Primitive::Rectangle {
            x: 0.0,
            y: 0.0,
            width: 50.0,
            height: 20.0
        }
    );
}

#[test]
fn jitter_stays_near_the_shape() {
    let style = SketchStyle::normal();
    let mut r = SketchRecorder::new(3);
    let d = r.circle(100.0, 100.0, 40.0, &style);
    assert_eq!(d.strokes.len(), 1);
    assert_eq!(move_count(&d.strokes[0]), 2);
    let bb = d.strokes[0].bounding_box();
    assert!(bb.x0 > 70.0 && bb.x1 < 130.0, "{bb:?}");
    assert!(bb.y0 > 70.0 && bb.y1 < 130.0, "{bb:?}");

    let line = r.line(0.0, 0.0, 100.0, 0.0, &style);
    let bb = line.strokes[0].bounding_box();
    assert!(bb.y0 > -10.0 && bb.y1 < 10.0, "{bb:?}");
}

#[test]
fn zero_roughness_line_is_straight() {
    let style = SketchStyle::normal().with_roughness(0.0);
    let mut r = SketchRecorder::new(5);
    let d = r.line(0.0, 5.0, 80.0, 5.0, &style);
    let bb = d.strokes[0].bounding_box();
    assert!((bb.y0 - 5.0).abs() < 1e-9 && (bb.y1 - 5.0).abs() < 1e-9);
}

#[test]
fn svg_paths_parse_or_fail() {
    let mut r = SketchRecorder::new(2);
    let d = r
        .path("M 10 10 L 40 10 L 40 40 Z", &SketchStyle::normal())
        .unwrap();
    assert_eq!(d.strokes.len(), 2);
    assert!(matches!(d.primitive, Primitive::Path { .. }));

    let arc = r.path(
        "M 20 10 A 8 8 0 0 1 14 18 L 10 18 A 8 8 0 0 1 20 10",
        &SketchStyle::normal(),
    );
    assert!(arc.is_ok());

    assert!(r.path("M 10 10 X 20 20", &SketchStyle::normal()).is_err());
}
