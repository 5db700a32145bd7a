use std::collections::BTreeMap;

use crate::sprite::model::{Sprite, SpriteLibrary};

// Shared running-cat silhouette, 14 wide by 15 tall. The last three body rows
// are the leg frames the stylesheet alternates between.

// B = body, P = pink inner ear, E = green eyes, N = nose
const BLACK_ROWS: [&str; 15] = [
    "..B...........",
    ".BBB..........",
    "BPBBB.........",
    "BBBBBBBB......",
    "BBBBBBB.......",
    "BEEBBEE.......",
    "BBBBNBBB......",
    "BBBBBBBBBB....",
    ".BBBBBBBBBB.BB",
    ".BBBBBBBBBBB..",
    ".BBBBBBBBB....",
    "..BBB..BBB....",
    "..BB....BB....",
    ".BBB...BBB....",
    "..............",
];

// W = body, Y = yellow eyes
const WHITE_ROWS: [&str; 15] = [
    "..W...........",
    ".WWW..........",
    "WPWWW.........",
    "WWWWWWWW......",
    "WWWWWWW.......",
    "WYYWWYY.......",
    "WWWWNWWW......",
    "WWWWWWWWWW....",
    ".WWWWWWWWWW.WW",
    ".WWWWWWWWWWW..",
    ".WWWWWWWWW....",
    "..WWW..WWW....",
    "..WW....WW....",
    ".WWW...WWW....",
    "..............",
];

// White base with black spots (S), O = orange eyes
const SPOTTED_ROWS: [&str; 15] = [
    "..W...........",
    ".WSW..........",
    "WPWWW.........",
    "WWSSSWWW......",
    "WWWWWWW.......",
    "WOOSWOO.......",
    "WWWWNWWW......",
    "WWSWWWWWWW....",
    ".WWWWSWWWWW.WW",
    ".WWWWWWWWWWW..",
    ".WWWWWWWWW....",
    "..WWW..WWW....",
    "..WW....WW....",
    ".WWW...WWW....",
    "..............",
];

const BLACK_PALETTE: [(char, &str); 4] = [
    ('B', "#1a1a1a"),
    ('E', "#4dde7a"),
    ('P', "#cc4466"),
    ('N', "#cc4466"),
];

const WHITE_PALETTE: [(char, &str); 4] = [
    ('W', "#ede8d0"),
    ('Y', "#FFD700"),
    ('P', "#e8a0b0"),
    ('N', "#e8a0b0"),
];

const SPOTTED_PALETTE: [(char, &str); 5] = [
    ('W', "#ede8d0"),
    ('S', "#1a1a1a"),
    ('O', "#FF8C00"),
    ('P', "#e8a0b0"),
    ('N', "#e8a0b0"),
];

fn sprite(rows: &[&str], palette: &[(char, &str)]) -> Sprite {
    Sprite {
        grid: rows.iter().map(|r| (*r).to_string()).collect(),
        palette: palette
            .iter()
            .map(|(ch, color)| (*ch, (*color).to_string()))
            .collect(),
    }
}

/// The compiled-in sprite library of the portfolio page: the cat variants
/// `black`, `white` and `spotted`.
///
/// Constructed directly from static literals; structural invariants are
/// covered by the validation pass in tests rather than re-checked here.
pub fn builtin_library() -> SpriteLibrary {
    let mut variants = BTreeMap::new();
    variants.insert("black".to_string(), sprite(&BLACK_ROWS, &BLACK_PALETTE));
    variants.insert("white".to_string(), sprite(&WHITE_ROWS, &WHITE_PALETTE));
    variants.insert(
        "spotted".to_string(),
        sprite(&SPOTTED_ROWS, &SPOTTED_PALETTE),
    );
    SpriteLibrary { variants }
}
