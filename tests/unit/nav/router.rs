use super::*;
use crate::dom::document::{ACTIVE_CLASS, PAGE_CLASS};

struct Site {
    doc: Document,
    router: Router,
    nav_about: ElementKey,
    nav_label: ElementKey,
    back_home: ElementKey,
    plain: ElementKey,
}

fn site() -> Site {
    let mut doc = Document::new();
    let body = doc.body();
    let mut pages = Vec::new();
    for id in ["home", "about", "design"] {
        let p = doc.create_element("section", Some(id), body).unwrap();
        doc.add_class(p, PAGE_CLASS);
        pages.push(p);
    }
    doc.add_class(pages[0], ACTIVE_CLASS);

    let nav_about = doc.create_element("button", Some("nav-about"), pages[0]).unwrap();
    doc.set_attribute(nav_about, NAV_TARGET_ATTR, "about");
    let nav_label = doc.create_element("span", None, nav_about).unwrap();
    let back_home = doc.create_element("button", Some("back-about"), pages[1]).unwrap();
    doc.set_attribute(back_home, BACK_TARGET_ATTR, "home");
    let plain = doc.create_element("p", None, pages[1]).unwrap();

    let router = Router::new(&mut doc, "home", MemoryHistory::default());
    Site {
        doc,
        router,
        nav_about,
        nav_label,
        back_home,
        plain,
    }
}

#[test]
fn pop_state_replays_page_or_defaults_home() {
    let mut s = site();
    let about = HistoryState::page("about");
    assert!(s.router.handle_pop_state(&mut s.doc, Some(&about)));
    assert_eq!(s.router.current_page(), "about");
    assert_eq!(s.router.registry().active_pages(&s.doc), vec!["about"]);

    assert!(s.router.handle_pop_state(&mut s.doc, None));
    assert_eq!(s.router.current_page(), "home");
    assert_eq!(s.router.registry().active_pages(&s.doc), vec!["home"]);
}

#[test]
fn pop_state_does_not_push_history() {
    let mut s = site();
    let before = s.router.history().len();
    s.router
        .handle_pop_state(&mut s.doc, Some(&HistoryState::page("design")));
    assert_eq!(s.router.history().len(), before);
}

#[test]
fn hash_change_shows_only_known_pages() {
    let mut s = site();
    assert!(s.router.handle_hash_change(&mut s.doc, "#design"));
    assert_eq!(s.router.current_page(), "design");

    assert!(!s.router.handle_hash_change(&mut s.doc, "#missing"));
    assert!(!s.router.handle_hash_change(&mut s.doc, ""));
    assert_eq!(s.router.current_page(), "design");
}

#[test]
fn clicks_route_through_nav_and_back_controls() {
    let mut s = site();
    assert!(s.router.handle_click(&mut s.doc, s.nav_label));
    assert_eq!(s.router.current_page(), "about");
    assert_eq!(s.router.history().current().url, "#about");

    assert!(!s.router.handle_click(&mut s.doc, s.plain));
    assert_eq!(s.router.current_page(), "about");

    assert!(s.router.handle_click(&mut s.doc, s.back_home));
    assert_eq!(s.router.current_page(), "home");
    assert_eq!(s.router.history().current().url, "/");

    assert!(s.router.handle_click(&mut s.doc, s.nav_about));
}

#[test]
fn back_and_forward_walk_history() {
    let mut s = site();
    s.router.show_page(&mut s.doc, "about");
    s.router.show_page(&mut s.doc, "design");

    assert!(s.router.back(&mut s.doc));
    assert_eq!(s.router.current_page(), "about");
    assert!(s.router.back(&mut s.doc));
    assert_eq!(s.router.current_page(), "home");
    assert!(s.router.forward(&mut s.doc));
    assert!(s.router.forward(&mut s.doc));
    assert_eq!(s.router.current_page(), "design");
    assert!(!s.router.forward(&mut s.doc));
}

#[test]
fn followed_fragment_pops_back_to_stateless_entry() {
    let mut s = site();
    assert!(s.router.follow_fragment(&mut s.doc, "design"));
    assert_eq!(s.router.history().current().url, "/#design");
    s.router.show_page(&mut s.doc, "about");

    assert!(s.router.back(&mut s.doc));
    // Fragment entries carry no state, so replay falls back to home.
    assert_eq!(s.router.current_page(), "home");
}
