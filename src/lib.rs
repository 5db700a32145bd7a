//! Pixelcat is the client-side behavior engine of a pixel-art personal
//! portfolio site.
//!
//! The core is a tiny deterministic renderer that turns palette-indexed
//! pixel grids (`Sprite`) into scalable vector image markup, upscaled so the
//! logical pixels stay sharp-edged. Around it sit the page behaviors: theme
//! toggling, navbar scroll state, project filtering, decorative motion
//! helpers, and the contact-form submission flow.
//!
//! # Pipeline overview
//!
//! 1. **Define**: a compiled-in [`SpriteLibrary`] maps variant names to
//!    immutable pixel grids and palettes ([`builtin_library`])
//! 2. **Render**: [`render_svg`] is a pure function `Sprite -> String`
//! 3. **Mount**: [`mount_sprites`] writes each variant's markup into its
//!    placeholder element, once, at initialization
//! 4. **React**: [`PageController`] folds page events into state and applies
//!    the outcome through the injected [`DomSurface`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: rendering the same variant twice yields
//!   byte-identical markup; click bursts replay from a seed.
//! - **Decorative paths never fail**: unknown variants, missing placeholder
//!   elements and unmapped palette characters are silent skips, so cosmetic
//!   rendering can never block page load.
//! - **No browser in the library**: everything behind the [`DomSurface`] and
//!   [`FormTransport`] capabilities, testable with [`MemoryDom`] and stubs.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod page;
mod sprite;

pub use foundation::core::{Point, Scale, SpriteSize, Vec2};
pub use foundation::error::{PixelcatError, PixelcatResult};
pub use page::controller::{
    LOADER_DISMISS_MS, LOADER_ID, PageController, RevealSet, dismiss_loader,
};
pub use page::filter::{FILTER_ALL, ProjectCard, apply_filter, card_visible};
pub use page::form::{ContactForm, FormResponse, FormTransport, SubmitStatus};
pub use page::motion::{
    SPARK_GLYPHS, SPARK_LIFETIME_MS, SPARKS_PER_BURST, Spark, SparkBurst, magnetic_offset,
    parallax_offset, ring_follow,
};
pub use page::nav::{NAV_ID, NavState, Section, active_section, apply_nav};
pub use page::surface::{DomSurface, MemoryDom, MemoryElement, ROOT_ID};
pub use page::theme::{
    PHOTO_LABEL_ID, THEME_ATTR, Theme, apply_theme, current_theme, sync_theme_label, toggle_theme,
};
pub use sprite::catalog::builtin_library;
pub use sprite::model::{Sprite, SpriteLibrary, SpriteLibraryBuilder, TRANSPARENT};
pub use sprite::mount::{PLACEHOLDER_PREFIX, mount_sprites, mount_variant, placeholder_id};
pub use sprite::svg::render_svg;
