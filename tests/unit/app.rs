use super::*;
use crate::render::style::Emphasis;

fn enter(app: &mut PortfolioApp) {
    app.dispatch(UiEvent::Click {
        target: None,
        x: 640.0,
        y: 400.0,
    })
    .unwrap();
    app.dispatch(UiEvent::AdvanceTime { ms: 1600 }).unwrap();
}

#[test]
fn starts_at_home_behind_the_door() {
    let app = PortfolioApp::new(SiteConfig::default()).unwrap();
    assert_eq!(app.current_page(), "home");
    assert_eq!(app.door().map(EntryDoor::state), Some(DoorState::Idle));
    assert!(!app.session().has_entered());
    assert_eq!(app.controller("hero").unwrap().draw_count(), 0);
    assert_eq!(app.resize_listener_count(), 1);
    assert_eq!(app.drawn_surfaces().len(), 1);
}

#[test]
fn entering_activates_gated_sections_and_toolbox() {
    let mut app = PortfolioApp::new(SiteConfig::default()).unwrap();
    enter(&mut app);
    assert_eq!(app.now_ms(), 1600);
    assert_eq!(app.door().unwrap().state(), DoorState::Entered);

    assert_eq!(app.controller("hero").unwrap().draw_count(), 1);
    assert_eq!(app.controller("nav-about").unwrap().draw_count(), 1);
    assert_eq!(app.controller(TOOLBOX_BUTTON_ID).unwrap().draw_count(), 1);
    assert!(app.toolbox().unwrap().is_shown());
    assert_eq!(app.controller("contact-section").unwrap().draw_count(), 0);
}

#[test]
fn ui_events_parse_from_tagged_json() {
    let json = r#"[
        { "type": "click", "target": "nav-about" },
        { "type": "pointer_move", "x": 1.0, "y": 2.0 },
        { "type": "back" },
        { "type": "advance_time", "ms": 600 },
        { "type": "pop_state" }
    ]"#;
    let events: Vec<UiEvent> = serde_json::from_str(json).unwrap();
    assert_eq!(
        events[0],
        UiEvent::Click {
            target: Some("nav-about".to_owned()),
            x: 0.0,
            y: 0.0
        }
    );
    assert_eq!(events[2], UiEvent::Back);
    assert_eq!(events[4], UiEvent::PopState { page: None });
}

#[test]
fn invalid_site_is_rejected() {
    let mut site = SiteConfig::default();
    site.home = "nowhere".to_owned();
    assert!(PortfolioApp::new(site).is_err());
}

#[test]
fn summary_reports_drawn_surfaces() {
    let mut app = PortfolioApp::new(SiteConfig::default()).unwrap();
    enter(&mut app);
    let summary = app.summary();
    assert!(summary.entered);
    assert_eq!(summary.current_page, "home");
    assert_eq!(summary.active_pages, ["home"]);
    let hero = summary.surfaces.iter().find(|s| s.name == "hero").unwrap();
    assert_eq!(hero.section, "hero");
    assert_eq!((hero.width, hero.height), (1280.0, 800.0));
    assert_eq!(hero.drawables, 4);
    serde_json::to_string(&summary).unwrap();
}

#[test]
fn hover_leaves_unactivated_nav_buttons_alone() {
    let mut app = PortfolioApp::new(SiteConfig::default()).unwrap();
    app.door = None;
    app.dispatch(UiEvent::PointerMove {
        x: 0.0,
        y: 0.0,
        target: Some("nav-about".to_owned()),
    })
    .unwrap();
    let nav = app.controller("nav-about").unwrap();
    assert_eq!(nav.draw_count(), 0);
    assert!(nav.surface().is_blank());
}

#[test]
fn hover_redraws_activated_nav_button() {
    let mut app = PortfolioApp::new(SiteConfig::default()).unwrap();
    enter(&mut app);
    app.dispatch(UiEvent::PointerMove {
        x: 0.0,
        y: 0.0,
        target: Some("nav-about".to_owned()),
    })
    .unwrap();
    let nav = app.controller("nav-about").unwrap();
    assert_eq!(nav.draw_count(), 2);
    assert_eq!(nav.emphasis(), Emphasis::Hover);
}
