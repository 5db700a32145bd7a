use super::*;
use crate::page::surface::MemoryDom;

#[test]
fn scrolled_threshold_is_exclusive_at_80() {
    assert!(!NavState::on_scroll(80.0, 0.0).scrolled);
    assert!(NavState::on_scroll(80.5, 0.0).scrolled);
    assert!(!NavState::on_scroll(0.0, 500.0).scrolled);
}

#[test]
fn hides_only_scrolling_down_past_200() {
    // Scrolling down but still above the fold: stays visible.
    assert!(!NavState::on_scroll(150.0, 100.0).hidden);
    // Scrolling down past the fold: hides.
    assert!(NavState::on_scroll(300.0, 250.0).hidden);
    // Scrolling up at the same depth: shows again.
    assert!(!NavState::on_scroll(300.0, 350.0).hidden);
    // No movement is not "down".
    assert!(!NavState::on_scroll(300.0, 300.0).hidden);
}

#[test]
fn apply_nav_toggles_classes() {
    let mut dom = MemoryDom::new();
    dom.insert(NAV_ID);

    apply_nav(
        NavState {
            scrolled: true,
            hidden: true,
        },
        &mut dom,
    );
    let el = dom.element(NAV_ID).unwrap();
    assert!(el.classes.contains("scrolled"));
    assert!(el.classes.contains("hide"));

    apply_nav(NavState::default(), &mut dom);
    let el = dom.element(NAV_ID).unwrap();
    assert!(el.classes.is_empty());
}

fn sections() -> Vec<Section> {
    ["about", "projects", "contact"]
        .iter()
        .zip([200.0, 900.0, 1800.0])
        .map(|(id, top_px)| Section {
            id: (*id).to_string(),
            top_px,
        })
        .collect()
}

#[test]
fn active_section_picks_last_qualifying() {
    let sections = sections();
    assert_eq!(active_section(0.0, &sections), None);
    // 200 - 150 lead: qualifies exactly at 50.
    assert_eq!(active_section(50.0, &sections), Some("about"));
    assert_eq!(active_section(49.9, &sections), None);
    assert_eq!(active_section(800.0, &sections), Some("projects"));
    assert_eq!(active_section(5000.0, &sections), Some("contact"));
}

#[test]
fn active_section_empty_page() {
    assert_eq!(active_section(1000.0, &[]), None);
}
