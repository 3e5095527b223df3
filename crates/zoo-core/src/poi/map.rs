//! Static placement of POIs onto a character grid.
//!
//! Each POI gets a one-character marker (`1`-`9`, then `a`-`z`) placed at
//! its percentage coordinates scaled to the grid. Markers keep columns
//! aligned where emoji glyphs would not; the legend maps them back.

use crate::poi::catalog::Catalog;
use crate::poi::model::{Poi, PoiCategory};

const MARKERS: &[u8] = b"123456789abcdefghijklmnopqrstuvwxyz";
const EMPTY_CELL: char = '.';

/// One legend row of a rendered map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub marker: char,
    pub poi_id: String,
    pub label: String,
    pub is_exit: bool,
}

/// A catalog laid out on a `width` x `height` grid.
#[derive(Debug, Clone)]
pub struct TextMap {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
    legend: Vec<LegendEntry>,
}

impl TextMap {
    /// Places every POI that has a marker available. Grids smaller than
    /// 2x2 are widened to 2x2.
    pub fn render(catalog: &Catalog, width: usize, height: usize) -> Self {
        let width = width.max(2);
        let height = height.max(2);
        let mut cells = vec![vec![EMPTY_CELL; width]; height];
        let mut legend = Vec::new();

        for (poi, marker) in catalog.pois().iter().zip(MARKERS.iter().map(|b| *b as char)) {
            let (col, row) = Self::project(poi, width, height);
            // Shift right (wrapping) until a free cell is found in the row.
            let free = (0..width)
                .map(|offset| (col + offset) % width)
                .find(|c| cells[row][*c] == EMPTY_CELL);
            if let Some(c) = free {
                cells[row][c] = marker;
                legend.push(LegendEntry {
                    marker,
                    poi_id: poi.id.clone(),
                    label: format!("{} {} ({})", poi.emoji, poi.name, poi.category),
                    is_exit: poi.category == PoiCategory::Exit,
                });
            }
        }

        Self {
            width,
            height,
            cells,
            legend,
        }
    }

    /// Grid cell for a POI's coordinates, clamped into the grid.
    pub fn project(poi: &Poi, width: usize, height: usize) -> (usize, usize) {
        let scale = |value: f64, cells: usize| -> usize {
            let max = (cells - 1) as f64;
            (value.clamp(0.0, 100.0) / 100.0 * max).round() as usize
        };
        (
            scale(poi.position.x, width),
            scale(poi.position.y, height),
        )
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn marker_at(&self, col: usize, row: usize) -> Option<char> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .filter(|c| *c != EMPTY_CELL)
    }

    /// Grid rows as strings, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }
}
