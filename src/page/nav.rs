use crate::page::surface::DomSurface;

/// Navbar element id.
pub const NAV_ID: &str = "nav";

/// Scroll offset past which the navbar gains its `scrolled` chrome.
const SCROLLED_AT_PX: f64 = 80.0;

/// Scroll offset past which downward scrolling hides the navbar.
const HIDE_AFTER_PX: f64 = 200.0;

/// Lead subtracted from a section's top when deciding the active link.
const SECTION_LEAD_PX: f64 = 150.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Navbar chrome derived from the scroll position.
pub struct NavState {
    /// Compact chrome once the page is scrolled.
    pub scrolled: bool,
    /// Navbar slides away while scrolling down past the fold.
    pub hidden: bool,
}

impl NavState {
    /// Pure transition from the current and previous scroll offsets.
    pub fn on_scroll(y: f64, last_y: f64) -> Self {
        Self {
            scrolled: y > SCROLLED_AT_PX,
            hidden: y > last_y && y > HIDE_AFTER_PX,
        }
    }
}

/// Apply a navbar state as `scrolled`/`hide` classes.
pub fn apply_nav(state: NavState, surface: &mut dyn DomSurface) {
    if state.scrolled {
        surface.add_class(NAV_ID, "scrolled");
    } else {
        surface.remove_class(NAV_ID, "scrolled");
    }
    if state.hidden {
        surface.add_class(NAV_ID, "hide");
    } else {
        surface.remove_class(NAV_ID, "hide");
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A page section participating in active-link tracking.
pub struct Section {
    /// Section element id (the nav link target).
    pub id: String,
    /// Section top offset from the document start, in pixels.
    pub top_px: f64,
}

/// The section the viewport is currently in: the last one, in document
/// order, whose top (minus a fixed lead) has scrolled past.
pub fn active_section(scroll_y: f64, sections: &[Section]) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top_px - SECTION_LEAD_PX {
            current = Some(section.id.as_str());
        }
    }
    current
}

#[cfg(test)]
#[path = "../../tests/unit/page/nav.rs"]
mod tests;
