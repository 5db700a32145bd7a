use super::*;
use crate::page::surface::MemoryDom;

#[test]
fn from_attr_defaults_to_light() {
    assert_eq!(Theme::from_attr("dark"), Theme::Dark);
    assert_eq!(Theme::from_attr("light"), Theme::Light);
    assert_eq!(Theme::from_attr("solarized"), Theme::Light);
    assert_eq!(Theme::from_attr(""), Theme::Light);
}

#[test]
fn toggle_flips_both_ways() {
    assert_eq!(Theme::Light.toggle(), Theme::Dark);
    assert_eq!(Theme::Dark.toggle(), Theme::Light);
}

#[test]
fn photo_labels_match_page_copy() {
    assert_eq!(Theme::Light.photo_label(), "Light mode photo");
    assert_eq!(Theme::Dark.photo_label(), "Dark mode photo");
}

#[test]
fn toggle_theme_writes_attr_and_label() {
    let mut dom = MemoryDom::new();
    dom.insert(ROOT_ID);
    dom.insert(PHOTO_LABEL_ID);
    dom.set_attr(ROOT_ID, THEME_ATTR, "dark");

    let next = toggle_theme(&mut dom);
    assert_eq!(next, Theme::Light);
    assert_eq!(dom.get_attr(ROOT_ID, THEME_ATTR).as_deref(), Some("light"));
    assert_eq!(dom.element(PHOTO_LABEL_ID).unwrap().text, "Light mode photo");

    let next = toggle_theme(&mut dom);
    assert_eq!(next, Theme::Dark);
    assert_eq!(dom.get_attr(ROOT_ID, THEME_ATTR).as_deref(), Some("dark"));
    assert_eq!(dom.element(PHOTO_LABEL_ID).unwrap().text, "Dark mode photo");
}

#[test]
fn missing_label_element_is_tolerated() {
    let mut dom = MemoryDom::new();
    dom.insert(ROOT_ID);
    // No ph-mode-label element on this page; toggling must not care.
    assert_eq!(toggle_theme(&mut dom), Theme::Dark);
    assert_eq!(dom.get_attr(ROOT_ID, THEME_ATTR).as_deref(), Some("dark"));
}

#[test]
fn absent_attr_reads_as_light() {
    let mut dom = MemoryDom::new();
    dom.insert(ROOT_ID);
    assert_eq!(current_theme(&dom), Theme::Light);
    sync_theme_label(&mut dom);
}
