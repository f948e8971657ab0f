//! Character-grid surface for terminals and tests

use std::fmt;

use glam::Vec2;

use super::{Font, Surface};
use crate::config::Color;
use crate::sim::Rect;

const BLANK: char = ' ';
const BRICK: char = '#';
const PADDLE: char = '=';
const BALL: char = 'O';

/// Rasterizes arena coordinates into a fixed grid of characters
///
/// Colors are ignored; each primitive has its own glyph.
#[derive(Debug, Clone)]
pub struct TextSurface {
    cols: usize,
    rows: usize,
    scale: Vec2,
    cells: Vec<char>,
}

impl TextSurface {
    /// A `cols` x `rows` grid covering a `width` x `height` arena
    pub fn new(cols: usize, rows: usize, width: f32, height: f32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale: Vec2::new(cols as f32 / width.max(1.0), rows as f32 / height.max(1.0)),
            cells: vec![BLANK; cols * rows],
        }
    }

    pub fn row(&self, index: usize) -> String {
        self.cells[index * self.cols..(index + 1) * self.cols]
            .iter()
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == BLANK)
    }

    /// Grid cell containing an arena point (may be off-grid)
    fn cell_of(&self, point: Vec2) -> (i64, i64) {
        let scaled = point * self.scale;
        (scaled.x.floor() as i64, scaled.y.floor() as i64)
    }

    fn put(&mut self, col: i64, row: i64, glyph: char) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        self.cells[row as usize * self.cols + col as usize] = glyph;
    }

    /// Clamp a half-open cell range to the grid
    fn clip(start: i64, end: i64, len: usize) -> (i64, i64) {
        (start.max(0), end.min(len as i64))
    }

    /// Fill every cell the rectangle touches, at least one
    fn fill_cells(&mut self, rect: Rect, glyph: char) {
        let (c0, r0) = self.cell_of(Vec2::new(rect.x, rect.y));
        let c1 = ((rect.right() * self.scale.x).ceil() as i64).max(c0.saturating_add(1));
        let r1 = ((rect.bottom() * self.scale.y).ceil() as i64).max(r0.saturating_add(1));
        let (c0, c1) = Self::clip(c0, c1, self.cols);
        let (r0, r1) = Self::clip(r0, r1, self.rows);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, glyph);
            }
        }
    }
}

impl Surface for TextSurface {
    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Color) {
        let bounds = Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
        let (c0, r0) = self.cell_of(Vec2::new(bounds.x, bounds.y));
        let (c1, r1) = self.cell_of(Vec2::new(bounds.right(), bounds.bottom()));
        let (c0, c1) = Self::clip(c0, c1.saturating_add(1), self.cols);
        let (r0, r1) = Self::clip(r0, r1.saturating_add(1), self.rows);
        for row in r0..r1 {
            for col in c0..c1 {
                let cell_center = Vec2::new(col as f32 + 0.5, row as f32 + 0.5) / self.scale;
                if cell_center.distance(center) <= radius {
                    self.put(col, row, BALL);
                }
            }
        }
        let (col, row) = self.cell_of(center);
        self.put(col, row, BALL);
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        self.fill_cells(rect, PADDLE);
    }

    fn fill_rounded_rect(&mut self, rect: Rect, _corner_radius: f32, _color: Color) {
        self.fill_cells(rect, BRICK);
    }

    fn fill_text(&mut self, text: &str, center: Vec2, _font: Font, _color: Color) {
        let (col, row) = self.cell_of(center);
        let len = text.chars().count() as i64;
        let start = col.saturating_sub(len / 2);
        for (i, ch) in text.chars().enumerate() {
            self.put(start.saturating_add(i as i64), row, ch);
        }
    }
}

impl fmt::Display for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            writeln!(f, "{}", self.row(row).trim_end())?;
        }
        Ok(())
    }
}
