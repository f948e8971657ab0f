//! Seeded demo layouts
//!
//! Stands in for a page of links: a grid of labelled bricks whose widths vary
//! like text does. Same seed, same layout.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::TargetSpec;

const MARGIN: f32 = 20.0;
const GAP: f32 = 10.0;
const TOP: f32 = 30.0;
const ROW_HEIGHT: f32 = 24.0;

const WORDS: &[&str] = &[
    "Home", "About", "Blog", "Docs", "Contact", "Careers", "Pricing", "Login", "Search", "News",
    "Help", "Press", "Terms", "Privacy", "Status", "Shop", "Events", "Team", "Guides", "API",
];

/// A `columns` x `rows` grid of link-sized bricks across an arena `width` wide
///
/// Returns an empty layout when the grid does not fit.
pub fn link_grid(width: f32, columns: usize, rows: usize, seed: u64) -> Vec<TargetSpec> {
    if columns == 0 || rows == 0 {
        return Vec::new();
    }
    let cell_width = (width - 2.0 * MARGIN - GAP * (columns - 1) as f32) / columns as f32;
    if cell_width < 1.0 {
        return Vec::new();
    }

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut targets = Vec::with_capacity(columns * rows);
    for row in 0..rows {
        let y = TOP + row as f32 * (ROW_HEIGHT + GAP);
        for col in 0..columns {
            let cell_x = MARGIN + col as f32 * (cell_width + GAP);
            let brick_width = cell_width * rng.random_range(0.7..=1.0f32);
            let label = WORDS[rng.random_range(0..WORDS.len())];
            targets.push(TargetSpec::new(
                cell_x + (cell_width - brick_width) / 2.0,
                y,
                brick_width,
                ROW_HEIGHT,
                label,
            ));
        }
    }
    targets
}
