use crate::foundation::core::{Point, Vec2};
use crate::foundation::math::Rng64;

/// Per-tick easing factor of the trailing cursor ring.
const RING_EASE: f64 = 0.1;

/// Fraction of the scroll offset applied to the hero background.
const PARALLAX_FACTOR: f64 = 0.25;

/// Magnetic-button pull factors, horizontal and vertical.
const MAGNETIC_PULL: Vec2 = Vec2::new(0.12, 0.25);

/// Glyphs drawn by click bursts.
pub const SPARK_GLYPHS: [char; 5] = ['✦', '✸', '⋆', '★', '✺'];

/// Sparks emitted per click.
pub const SPARKS_PER_BURST: usize = 7;

/// Lifetime of one spark element, in milliseconds.
pub const SPARK_LIFETIME_MS: u64 = 700;

/// Move the cursor ring one tick toward the pointer.
///
/// Exponential approach: each tick covers a tenth of the remaining distance,
/// which is what gives the ring its trailing feel.
pub fn ring_follow(ring: Point, mouse: Point) -> Point {
    ring + (mouse - ring) * RING_EASE
}

/// Vertical offset of the hero background name at a scroll position.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

/// Translation nudging a magnetic button toward the cursor.
///
/// `cursor` is the pointer position in the button's local space, `size` the
/// button's width and height; the pull is measured from the button center.
pub fn magnetic_offset(cursor: Point, size: Vec2) -> Vec2 {
    Vec2::new(
        (cursor.x - size.x / 2.0) * MAGNETIC_PULL.x,
        (cursor.y - size.y / 2.0) * MAGNETIC_PULL.y,
    )
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One decorative spark of a click burst.
pub struct Spark {
    /// Glyph the spark renders as.
    pub glyph: char,
    /// Spawn position (the click point).
    pub origin: Point,
    /// Outward travel over the spark's lifetime.
    pub offset: Vec2,
    /// Final rotation in degrees.
    pub rotation_deg: f64,
    /// Font size in rem.
    pub font_size_rem: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A full click burst: exactly [`SPARKS_PER_BURST`] sparks fanned around the
/// click point.
pub struct SparkBurst {
    /// Sparks in emission order.
    pub sparks: Vec<Spark>,
}

impl SparkBurst {
    /// Build the burst for a click at `origin`.
    ///
    /// Randomness comes from a seeded stream, so a given seed always yields
    /// the same burst. Spark `i` travels at `i/7` of a full turn; distance,
    /// rotation and size jitter per spark.
    pub fn at(origin: Point, seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let sparks = (0..SPARKS_PER_BURST)
            .map(|i| {
                let glyph = SPARK_GLYPHS
                    [(rng.next_f64_01() * SPARK_GLYPHS.len() as f64) as usize % SPARK_GLYPHS.len()];
                let angle = (i as f64 / SPARKS_PER_BURST as f64) * std::f64::consts::TAU;
                let dist = 28.0 + rng.next_f64_01() * 36.0;
                let rotation_deg = rng.next_f64_01() * 200.0 - 100.0;
                let font_size_rem = 0.6 + rng.next_f64_01() * 0.7;
                Spark {
                    glyph,
                    origin,
                    offset: Vec2::new(angle.cos() * dist, angle.sin() * dist),
                    rotation_deg,
                    font_size_rem,
                }
            })
            .collect();
        Self { sparks }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/motion.rs"]
mod tests;
