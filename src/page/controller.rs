use std::collections::BTreeSet;

use crate::foundation::core::{Point, Scale};
use crate::foundation::math::Fnv1a64;
use crate::page::filter::{FILTER_ALL, ProjectCard, apply_filter};
use crate::page::motion::SparkBurst;
use crate::page::nav::{NavState, Section, active_section, apply_nav};
use crate::page::surface::DomSurface;
use crate::page::theme::{Theme, current_theme, sync_theme_label, toggle_theme};
use crate::sprite::model::SpriteLibrary;
use crate::sprite::mount::mount_sprites;

/// Loader overlay element id.
pub const LOADER_ID: &str = "loader";

/// Delay before the loader overlay is dismissed, in milliseconds. Timers
/// belong to the host; the library only exposes the constant.
pub const LOADER_DISMISS_MS: u64 = 3200;

/// Hide the loader overlay by adding its `gone` class.
pub fn dismiss_loader(surface: &mut dyn DomSurface) {
    surface.add_class(LOADER_ID, "gone");
}

/// Monotone set of scroll-revealed elements: once visible, always visible.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: BTreeSet<String>,
}

impl RevealSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an element revealed. Returns `true` the first time.
    pub fn mark(&mut self, id: &str) -> bool {
        self.revealed.insert(id.to_string())
    }

    /// Whether an element has been revealed.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

/// Event hub of the portfolio page.
///
/// Owns the sprite library and the behavior state (theme, navbar, filter,
/// reveal set) and applies every outcome through the injected [`DomSurface`].
/// Hosts translate raw browser events into the `on_*` entry points; all
/// decisions live here where they are testable without a real page.
pub struct PageController {
    library: SpriteLibrary,
    scale: Scale,
    theme: Theme,
    nav: NavState,
    last_scroll_y: f64,
    sections: Vec<Section>,
    cards: Vec<ProjectCard>,
    tab_ids: Vec<String>,
    active_filter: String,
    active_section: Option<String>,
    reveal: RevealSet,
    seed: u64,
    clicks: u64,
}

impl PageController {
    /// Create a controller over a sprite library.
    pub fn new(library: SpriteLibrary, scale: Scale) -> Self {
        Self {
            library,
            scale,
            theme: Theme::default(),
            nav: NavState::default(),
            last_scroll_y: 0.0,
            sections: Vec::new(),
            cards: Vec::new(),
            tab_ids: Vec::new(),
            active_filter: FILTER_ALL.to_string(),
            active_section: None,
            reveal: RevealSet::new(),
            seed: 0,
            clicks: 0,
        }
    }

    /// Set the determinism seed for click bursts.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Register the sections tracked for the active nav link.
    pub fn sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Register the filterable project cards.
    pub fn cards(mut self, cards: Vec<ProjectCard>) -> Self {
        self.cards = cards;
        self
    }

    /// Register the filter tab element ids.
    pub fn tabs(mut self, tab_ids: Vec<String>) -> Self {
        self.tab_ids = tab_ids;
        self
    }

    #[tracing::instrument(skip(self, surface))]
    /// One-shot page initialization: mount every sprite variant into its
    /// placeholder and sync the theme-dependent label. Runs to completion
    /// synchronously; calling it again rewrites identical content.
    pub fn init(&mut self, surface: &mut dyn DomSurface) {
        mount_sprites(&self.library, self.scale, surface);
        self.theme = current_theme(surface);
        sync_theme_label(surface);
    }

    /// Handle a scroll event: navbar chrome plus active-section tracking.
    pub fn on_scroll(&mut self, y: f64, surface: &mut dyn DomSurface) {
        self.nav = NavState::on_scroll(y, self.last_scroll_y);
        apply_nav(self.nav, surface);
        self.active_section = active_section(y, &self.sections).map(str::to_string);
        self.last_scroll_y = y;
    }

    /// Flip the theme. Returns the new theme.
    pub fn on_theme_toggle(&mut self, surface: &mut dyn DomSurface) -> Theme {
        self.theme = toggle_theme(surface);
        self.theme
    }

    /// Activate a filter tab and re-filter the card set.
    pub fn on_filter(&mut self, tab_id: &str, filter: &str, surface: &mut dyn DomSurface) {
        for id in &self.tab_ids {
            surface.remove_class(id, "active");
        }
        surface.add_class(tab_id, "active");
        self.active_filter = filter.to_string();
        apply_filter(&self.active_filter, &self.cards, surface);
    }

    /// Produce the spark burst for a click. Each click draws from a fresh
    /// slice of the seeded stream, so a page session replays identically for
    /// a given seed.
    pub fn on_click(&mut self, at: Point) -> SparkBurst {
        let mut hash = Fnv1a64::new_default();
        hash.write_u64(self.seed);
        hash.write_u64(self.clicks);
        self.clicks += 1;
        SparkBurst::at(at, hash.finish())
    }

    /// Mark an element as intersecting; adds its `vis` class on first sight.
    pub fn reveal(&mut self, id: &str, surface: &mut dyn DomSurface) {
        if self.reveal.mark(id) {
            surface.add_class(id, "vis");
        }
    }

    /// Currently active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Current navbar state.
    pub fn nav_state(&self) -> NavState {
        self.nav
    }

    /// Active filter value.
    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Section the viewport is currently in, if any.
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/controller.rs"]
mod tests;
