use std::collections::BTreeMap;

use crate::foundation::{
    core::{Scale, SpriteSize},
    error::{PixelcatError, PixelcatResult},
};

/// Grid character meaning "no pixel here."
pub const TRANSPARENT: char = '.';

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A palette-indexed pixel grid.
///
/// A sprite is a pure data model: ordered equal-length rows of single
/// characters, plus a palette mapping characters to opaque color strings.
/// Characters without a palette entry render as transparent, the same as
/// [`TRANSPARENT`]. That is a defined edge-case policy, not an error; sprite
/// authors may leave palette entries incomplete.
pub struct Sprite {
    /// Rows top to bottom; each char is a palette key or [`TRANSPARENT`].
    pub grid: Vec<String>,
    /// Palette key to color value (e.g. `"#1a1a1a"`). Keys are case-sensitive.
    pub palette: BTreeMap<char, String>,
}

impl Sprite {
    /// Build a validated sprite.
    pub fn new(grid: Vec<String>, palette: BTreeMap<char, String>) -> PixelcatResult<Self> {
        let sprite = Self { grid, palette };
        sprite.validate()?;
        Ok(sprite)
    }

    /// Validate structural invariants: non-empty rectangular grid, and the
    /// transparent sentinel never doubling as a palette key.
    ///
    /// Rendering does not re-run this check; it is a construction-time pass.
    pub fn validate(&self) -> PixelcatResult<()> {
        let Some(first) = self.grid.first() else {
            return Err(PixelcatError::validation("sprite grid has no rows"));
        };
        let columns = first.chars().count();
        if columns == 0 {
            return Err(PixelcatError::validation("sprite grid rows are empty"));
        }
        for (y, row) in self.grid.iter().enumerate() {
            if row.chars().count() != columns {
                return Err(PixelcatError::validation(format!(
                    "sprite grid is not rectangular: row {y} has {} cells, expected {columns}",
                    row.chars().count()
                )));
            }
        }
        if self.palette.contains_key(&TRANSPARENT) {
            return Err(PixelcatError::validation(
                "transparent sentinel cannot be a palette key",
            ));
        }
        Ok(())
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of columns, taken from the first row (0 for an empty grid).
    pub fn columns(&self) -> usize {
        self.grid.first().map(|r| r.chars().count()).unwrap_or(0)
    }

    /// Output image dimensions at the given upscale factor.
    pub fn size(&self, scale: Scale) -> SpriteSize {
        SpriteSize {
            width: self.columns() as u32 * scale.0,
            height: self.rows() as u32 * scale.0,
        }
    }

    /// Count of cells that render as filled shapes: neither the transparent
    /// sentinel nor an unmapped palette key.
    pub fn opaque_cells(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.chars())
            .filter(|ch| *ch != TRANSPARENT && self.palette.contains_key(ch))
            .count()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Immutable table of sprite variants, fixed at startup.
pub struct SpriteLibrary {
    /// Variant table keyed by stable variant names.
    pub variants: BTreeMap<String, Sprite>,
}

impl SpriteLibrary {
    /// Start building a library.
    pub fn builder() -> SpriteLibraryBuilder {
        SpriteLibraryBuilder::default()
    }

    /// Look up one variant. Unknown names return `None`; callers on the
    /// rendering path treat that as a silent no-op.
    pub fn get(&self, variant: &str) -> Option<&Sprite> {
        self.variants.get(variant)
    }

    /// Variant names in stable (sorted) order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }
}

/// Validating builder for [`SpriteLibrary`].
#[derive(Debug, Default)]
pub struct SpriteLibraryBuilder {
    variants: BTreeMap<String, Sprite>,
}

impl SpriteLibraryBuilder {
    /// Add a variant under a unique name.
    pub fn variant(mut self, name: impl Into<String>, sprite: Sprite) -> PixelcatResult<Self> {
        let name = name.into();
        if self.variants.contains_key(&name) {
            return Err(PixelcatError::validation(format!(
                "duplicate sprite variant '{name}'"
            )));
        }
        self.variants.insert(name, sprite);
        Ok(self)
    }

    /// Validate every variant and freeze the library.
    pub fn build(self) -> PixelcatResult<SpriteLibrary> {
        for (name, sprite) in &self.variants {
            sprite
                .validate()
                .map_err(|e| PixelcatError::validation(format!("variant '{name}': {e}")))?;
        }
        Ok(SpriteLibrary {
            variants: self.variants,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/model.rs"]
mod tests;
