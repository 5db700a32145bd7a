use crate::page::surface::{DomSurface, ROOT_ID};

/// Root attribute carrying the active theme.
pub const THEME_ATTR: &str = "data-theme";

/// Element showing which portrait photo matches the theme.
pub const PHOTO_LABEL_ID: &str = "ph-mode-label";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Color theme of the page, stored in the root `data-theme` attribute.
pub enum Theme {
    /// Light theme (the default when the attribute is absent or unknown).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Parse the attribute value; anything but `"dark"` is light.
    pub fn from_attr(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    /// Attribute value for this theme.
    pub fn attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Caption under the portrait photo.
    pub fn photo_label(self) -> &'static str {
        match self {
            Self::Light => "Light mode photo",
            Self::Dark => "Dark mode photo",
        }
    }
}

/// Read the current theme from the root attribute.
pub fn current_theme(surface: &dyn DomSurface) -> Theme {
    surface
        .get_attr(ROOT_ID, THEME_ATTR)
        .map(|v| Theme::from_attr(&v))
        .unwrap_or_default()
}

/// Write a theme to the root attribute and sync dependent elements.
pub fn apply_theme(theme: Theme, surface: &mut dyn DomSurface) {
    surface.set_attr(ROOT_ID, THEME_ATTR, theme.attr());
    surface.set_text(PHOTO_LABEL_ID, theme.photo_label());
}

/// Flip the current theme and apply the result. Returns the new theme.
pub fn toggle_theme(surface: &mut dyn DomSurface) -> Theme {
    let next = current_theme(surface).toggle();
    apply_theme(next, surface);
    next
}

/// Refresh the photo label from the current theme without changing it.
/// Used at initialization, where the attribute is whatever the page set.
pub fn sync_theme_label(surface: &mut dyn DomSurface) {
    let theme = current_theme(surface);
    surface.set_text(PHOTO_LABEL_ID, theme.photo_label());
}

#[cfg(test)]
#[path = "../../tests/unit/page/theme.rs"]
mod tests;
