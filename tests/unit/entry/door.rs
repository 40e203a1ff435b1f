use super::*;
use crate::render::sketch::SketchRecorder;

const VIEWPORT: Size = Size::new(1280.0, 800.0);
const ON_DOOR: Point = Point::new(640.0, 400.0);
const OFF_DOOR: Point = Point::new(20.0, 20.0);

struct Fixture {
    doc: Document,
    session: SessionState,
    rc: SketchRecorder,
    door: EntryDoor,
}

fn fixture() -> Fixture {
    let mut doc = Document::new();
    let body = doc.body();
    let screen = doc
        .create_element("div", Some(ENTRY_SCREEN_ID), body)
        .unwrap();
    doc.create_element("canvas", Some(DOOR_CANVAS_ID), screen)
        .unwrap();
    doc.create_element("main", Some(MAIN_CONTENT_ID), body)
        .unwrap();
    let mut rc = SketchRecorder::new(5);
    let mut door = EntryDoor::attach(&doc, StylePair::default(), DoorTimings::default()).unwrap();
    door.init(&mut doc, &mut rc, VIEWPORT);
    Fixture {
        doc,
        session: SessionState::new(),
        rc,
        door,
    }
}

/// Run the opening sequence to completion, returning the delays that were requested.
fn run_timers(f: &mut Fixture, first: (u64, DoorTimer)) -> Vec<u64> {
    let mut delays = vec![first.0];
    let mut next = f.door.on_timer(&mut f.doc, &mut f.session, first.1);
    while let Some((ms, timer)) = next {
        delays.push(ms);
        next = f.door.on_timer(&mut f.doc, &mut f.session, timer);
    }
    delays
}

#[test]
fn attach_needs_screen_and_canvas() {
    let doc = Document::new();
    assert!(EntryDoor::attach(&doc, StylePair::default(), DoorTimings::default()).is_none());
}

#[test]
fn init_draws_resting_door() {
    let f = fixture();
    assert_eq!(f.door.state(), DoorState::Idle);
    assert_eq!(f.door.draw_count(), 1);
    assert_eq!(f.door.hit_region(), Rect::new(500.0, 120.0, 780.0, 680.0));
    assert_eq!(f.door.surface().drawables()[0].style.stroke_width, 2.0);
}

#[test]
fn hover_redraws_once_per_transition() {
    let mut f = fixture();
    assert!(f.door.pointer_move(&mut f.doc, &mut f.rc, ON_DOOR));
    assert!(!f.door.pointer_move(&mut f.doc, &mut f.rc, Point::new(650.0, 410.0)));
    assert_eq!(f.door.state(), DoorState::Hovering);
    assert_eq!(f.door.draw_count(), 2);
    assert_eq!(f.door.surface().drawables()[0].style.stroke_width, 4.0);
    let canvas = f.doc.get_element_by_id(DOOR_CANVAS_ID).unwrap();
    assert!(f.doc.has_class(canvas, classes::HOVER));

    assert!(f.door.pointer_move(&mut f.doc, &mut f.rc, OFF_DOOR));
    assert!(!f.door.pointer_move(&mut f.doc, &mut f.rc, OFF_DOOR));
    assert_eq!(f.door.state(), DoorState::Idle);
    assert_eq!(f.door.draw_count(), 3);
    assert!(!f.doc.has_class(canvas, classes::HOVER));
}

#[test]
fn click_off_door_does_nothing() {
    let mut f = fixture();
    assert_eq!(f.door.click(&mut f.doc, OFF_DOOR), None);
    assert_eq!(f.door.state(), DoorState::Idle);
}

#[test]
fn full_sequence_enters_once() {
    let mut f = fixture();
    let first = f.door.click(&mut f.doc, ON_DOOR).unwrap();
    assert_eq!(f.door.state(), DoorState::Opening);
    assert!(!f.session.has_entered());

    let delays = run_timers(&mut f, first);
    assert_eq!(delays, [0, 600, 1000]);
    assert_eq!(f.door.state(), DoorState::Entered);
    assert!(f.session.has_entered());
    assert_eq!(f.session.generation(), 1);

    let screen = f.doc.get_element_by_id(ENTRY_SCREEN_ID).unwrap();
    let main = f.doc.get_element_by_id(MAIN_CONTENT_ID).unwrap();
    assert!(f.doc.has_class(screen, classes::SWING));
    assert!(f.doc.has_class(screen, classes::ZOOM));
    assert!(f.doc.has_class(main, classes::REVEALED));
    assert!(f.doc.has_class(f.doc.body(), classes::ENTERED));
    assert!(!f.doc.is_rendered(screen));
    assert!(!f.door.captures_pointer());
}

#[test]
fn clicks_during_animation_are_ignored() {
    let mut f = fixture();
    let first = f.door.click(&mut f.doc, ON_DOOR).unwrap();
    f.doc.take_mutations();
    let draws = f.door.draw_count();

    assert_eq!(f.door.click(&mut f.doc, ON_DOOR), None);
    assert!(!f.door.pointer_move(&mut f.doc, &mut f.rc, OFF_DOOR));
    assert_eq!(f.door.state(), DoorState::Opening);
    assert_eq!(f.door.draw_count(), draws);
    assert!(!f.doc.has_pending_mutations());

    let zoom = f.door.on_timer(&mut f.doc, &mut f.session, first.1).unwrap();
    assert_eq!(f.door.click(&mut f.doc, ON_DOOR), None);
    let finish = f.door.on_timer(&mut f.doc, &mut f.session, zoom.1).unwrap();
    assert_eq!(f.door.click(&mut f.doc, ON_DOOR), None);
    f.door.on_timer(&mut f.doc, &mut f.session, finish.1);
    assert_eq!(f.door.click(&mut f.doc, ON_DOOR), None);

    assert_eq!(f.session.generation(), 1);
}

#[test]
fn stale_timers_are_dropped() {
    let mut f = fixture();
    assert_eq!(
        f.door.on_timer(&mut f.doc, &mut f.session, DoorTimer::Finish),
        None
    );
    assert_eq!(f.door.state(), DoorState::Idle);
    assert!(!f.session.has_entered());
}

#[test]
fn resize_moves_hit_region() {
    let mut f = fixture();
    f.door.resize(&mut f.doc, &mut f.rc, Size::new(400.0, 600.0));
    assert_eq!(f.door.hit_region(), Rect::new(150.0, 200.0, 250.0, 400.0));
    assert_eq!(f.door.click(&mut f.doc, ON_DOOR), None);
    assert!(f.door.click(&mut f.doc, Point::new(200.0, 300.0)).is_some());
}
