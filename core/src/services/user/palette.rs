//! Display colors handed out to accounts

use rand::seq::SliceRandom;

use crate::domain::entities::user::DEFAULT_USER_COLOR;

/// Palette of account colors. The first entry doubles as the default color.
pub const USER_COLORS: [&str; 12] = [
    DEFAULT_USER_COLOR,
    "#C96E2D",
    "#5A3A1E",
    "#E19A56",
    "#F3B94D",
    "#8B4513",
    "#228B22",
    "#CD853F",
    "#D2691E",
    "#B8860B",
    "#8FBC8F",
    "#BC8F8F",
];

/// Random palette color not present in `in_use`; any palette color once all are taken
pub fn pick_color(in_use: &[String]) -> String {
    let mut rng = rand::thread_rng();

    let available: Vec<&str> = USER_COLORS
        .iter()
        .copied()
        .filter(|color| !in_use.iter().any(|used| used == color))
        .collect();

    available
        .choose(&mut rng)
        .or_else(|| USER_COLORS.choose(&mut rng))
        .copied()
        .unwrap_or(DEFAULT_USER_COLOR)
        .to_string()
}
