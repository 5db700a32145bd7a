use crate::foundation::core::Scale;
use crate::page::surface::DomSurface;
use crate::sprite::model::SpriteLibrary;
use crate::sprite::svg::render_svg;

/// Placeholder id prefix, concatenated with the variant name.
pub const PLACEHOLDER_PREFIX: &str = "pcat-";

/// Placeholder element id for a variant, e.g. `pcat-black`.
pub fn placeholder_id(variant: &str) -> String {
    format!("{PLACEHOLDER_PREFIX}{variant}")
}

/// Render one variant into its placeholder element.
///
/// Unknown variant names and missing placeholders are silent no-ops: the
/// rendering is purely decorative and must never block page load. No error
/// is raised and nothing is logged on either path.
pub fn mount_variant(
    library: &SpriteLibrary,
    variant: &str,
    scale: Scale,
    surface: &mut dyn DomSurface,
) {
    let Some(sprite) = library.get(variant) else {
        return;
    };
    let markup = render_svg(sprite, scale);
    surface.set_inner_html(&placeholder_id(variant), &markup);
}

#[tracing::instrument(skip(library, surface))]
/// Render every known variant into its placeholder, once, at initialization.
///
/// Idempotent: mounting twice with an unchanged library writes identical
/// markup into the same elements.
pub fn mount_sprites(library: &SpriteLibrary, scale: Scale, surface: &mut dyn DomSurface) {
    for variant in library.variant_names() {
        mount_variant(library, variant, scale, surface);
    }
}
