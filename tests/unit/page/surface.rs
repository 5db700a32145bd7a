use super::*;

#[test]
fn operations_on_missing_elements_are_noops() {
    let mut dom = MemoryDom::new();
    assert!(!dom.set_inner_html("nope", "<b>x</b>"));
    assert!(!dom.set_text("nope", "x"));
    assert!(!dom.set_attr("nope", "k", "v"));
    assert!(!dom.add_class("nope", "c"));
    assert!(!dom.remove_class("nope", "c"));
    assert_eq!(dom.get_attr("nope", "k"), None);
    assert!(dom.element("nope").is_none());
}

#[test]
fn registered_elements_accept_mutations() {
    let mut dom = MemoryDom::new();
    dom.insert("el");

    assert!(dom.set_inner_html("el", "<svg/>"));
    assert!(dom.set_text("el", "hello"));
    assert!(dom.set_attr("el", "data-theme", "dark"));
    assert!(dom.add_class("el", "vis"));

    let el = dom.element("el").unwrap();
    assert_eq!(el.inner_html, "<svg/>");
    assert_eq!(el.text, "hello");
    assert_eq!(dom.get_attr("el", "data-theme").as_deref(), Some("dark"));
    assert!(el.classes.contains("vis"));

    assert!(dom.remove_class("el", "vis"));
    assert!(!dom.element("el").unwrap().classes.contains("vis"));
}

#[test]
fn class_list_is_a_set() {
    let mut dom = MemoryDom::new();
    dom.insert("el");
    dom.add_class("el", "vis");
    dom.add_class("el", "vis");
    assert_eq!(dom.element("el").unwrap().classes.len(), 1);
}
