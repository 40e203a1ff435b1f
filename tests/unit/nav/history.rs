use super::*;

#[test]
fn urls_for_pages() {
    assert_eq!(url_for_page("home", "home"), "/");
    assert_eq!(url_for_page("about", "home"), "#about");
    assert_eq!(url_for_page("project-detail", "home"), "#project-detail");
}

#[test]
fn fragments() {
    assert_eq!(fragment_of("/#about"), Some("about"));
    assert_eq!(fragment_of("#design"), Some("design"));
    assert_eq!(fragment_of("/"), None);
    assert_eq!(fragment_of("/#"), None);
}

#[test]
fn push_truncates_forward_entries() {
    let mut h = MemoryHistory::default();
    h.push_state(HistoryState::page("about"), "#about");
    h.push_state(HistoryState::page("design"), "#design");
    assert_eq!(h.back(), Some(Some(HistoryState::page("about"))));
    h.push_state(HistoryState::page("contact"), "#contact");

    let urls: Vec<_> = h.entries().iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, vec!["/", "#about", "#contact"]);
    assert_eq!(h.forward(), None);
}

#[test]
fn traversal_yields_entry_state() {
    let mut h = MemoryHistory::new("/");
    h.push_state(HistoryState::page("about"), "#about");
    h.navigate("/#contact");

    assert_eq!(h.back(), Some(Some(HistoryState::page("about"))));
    assert_eq!(h.back(), Some(None));
    assert_eq!(h.back(), None);
    assert_eq!(h.forward(), Some(Some(HistoryState::page("about"))));
    assert_eq!(h.forward(), Some(None));
    assert_eq!(h.current().url, "/#contact");
}
