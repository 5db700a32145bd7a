use crate::foundation::core::Scale;
use crate::sprite::model::{Sprite, TRANSPARENT};

/// Render a sprite into a self-contained SVG document string.
///
/// Pure and deterministic: the same sprite and scale always produce a
/// byte-identical document. Cells walk rows top to bottom, columns left to
/// right; each opaque cell becomes one `<rect>` of `S`×`S` pixels. Sentinel
/// cells and cells whose character has no palette entry emit nothing.
///
/// The root element carries explicit pixel dimensions and an inline style
/// disabling image smoothing, so upscaled pixels stay sharp-edged.
pub fn render_svg(sprite: &Sprite, scale: Scale) -> String {
    let s = scale.0;
    let size = sprite.size(scale);

    let mut shapes = String::new();
    for (y, row) in sprite.grid.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == TRANSPARENT {
                continue;
            }
            let Some(fill) = sprite.palette.get(&ch) else {
                continue;
            };
            shapes.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{s}" height="{s}" fill="{fill}"/>"#,
                x as u32 * s,
                y as u32 * s,
            ));
        }
    }

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="image-rendering:pixelated;display:block">{shapes}</svg>"#,
        size.width, size.height,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/svg.rs"]
mod tests;
