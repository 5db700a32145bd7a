use super::*;
use crate::page::surface::MemoryDom;

#[test]
fn all_matches_everything() {
    assert!(card_visible(FILTER_ALL, "web"));
    assert!(card_visible(FILTER_ALL, "game"));
    assert!(card_visible(FILTER_ALL, ""));
}

#[test]
fn category_match_is_exact_and_case_sensitive() {
    assert!(card_visible("web", "web"));
    assert!(!card_visible("web", "game"));
    assert!(!card_visible("web", "Web"));
}

fn cards() -> Vec<ProjectCard> {
    [("card-a", "web"), ("card-b", "game"), ("card-c", "web")]
        .iter()
        .map(|(id, cat)| ProjectCard {
            id: (*id).to_string(),
            category: (*cat).to_string(),
        })
        .collect()
}

#[test]
fn apply_filter_hides_non_matching_cards() {
    let mut dom = MemoryDom::new();
    for card in cards() {
        dom.insert(card.id);
    }

    apply_filter("game", &cards(), &mut dom);
    assert!(dom.element("card-a").unwrap().classes.contains("hidden"));
    assert!(!dom.element("card-b").unwrap().classes.contains("hidden"));
    assert!(dom.element("card-c").unwrap().classes.contains("hidden"));

    // Back to "all": every card shows again.
    apply_filter(FILTER_ALL, &cards(), &mut dom);
    for card in cards() {
        assert!(!dom.element(&card.id).unwrap().classes.contains("hidden"));
    }
}
