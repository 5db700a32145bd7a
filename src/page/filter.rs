use crate::page::surface::DomSurface;

/// Filter tab value matching every project card.
pub const FILTER_ALL: &str = "all";

/// Whether a card stays visible under the active filter. Categories are
/// matched exactly and case-sensitively.
pub fn card_visible(active_filter: &str, card_category: &str) -> bool {
    active_filter == FILTER_ALL || active_filter == card_category
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A filterable project card.
pub struct ProjectCard {
    /// Card element id.
    pub id: String,
    /// Category the card is filed under.
    pub category: String,
}

/// Toggle the `hidden` class across a card set for the active filter.
pub fn apply_filter(active_filter: &str, cards: &[ProjectCard], surface: &mut dyn DomSurface) {
    for card in cards {
        if card_visible(active_filter, &card.category) {
            surface.remove_class(&card.id, "hidden");
        } else {
            surface.add_class(&card.id, "hidden");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/filter.rs"]
mod tests;
