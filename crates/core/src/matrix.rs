//! Matrix utilities - rectangular cell grids and in-place square rotation.
//!
//! Grids are stored flat in row-major order (`y * width + x`), the same layout
//! the board and piece shapes use, so row moves are plain `copy_within` calls.

use crate::types::{Cell, RotateDir, EMPTY};

/// Rotate a square row-major grid by 90° in place.
///
/// The grid is transposed, then each row is reversed (clockwise) or the row
/// order is reversed (counter-clockwise). `cells` must hold at least
/// `side * side` values; anything past that is left untouched.
pub fn rotate_square(cells: &mut [Cell], side: usize, dir: RotateDir) {
    let len = side * side;
    if cells.len() < len {
        return;
    }
    let cells = &mut cells[..len];

    for y in 0..side {
        for x in 0..y {
            cells.swap(y * side + x, x * side + y);
        }
    }

    match dir {
        RotateDir::Clockwise => {
            for row in cells.chunks_exact_mut(side) {
                row.reverse();
            }
        }
        RotateDir::CounterClockwise => {
            for y in 0..side / 2 {
                let mirror = side - 1 - y;
                for x in 0..side {
                    cells.swap(y * side + x, mirror * side + x);
                }
            }
        }
    }
}

/// A rectangular grid of cells, all zero when created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of `height` rows of `width` empty cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Returns `None` when the rows are ragged.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.iter().any(|r| r.as_ref().len() != width) {
            return None;
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            cells.extend_from_slice(row.as_ref());
        }
        Some(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Returns false if out of bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on a zero chunk size.
        self.cells.chunks_exact(self.width.max(1)).take(self.height)
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Remove row `y`, shift every row above it down by one and put an empty
    /// row at the top. Returns false if `y` is out of bounds.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let w = self.width;
        self.cells.copy_within(0..y * w, w);
        self.cells[..w].fill(EMPTY);
        true
    }

    /// Rotate in place. Returns false (and leaves the grid alone) when the
    /// grid is not square.
    pub fn rotate(&mut self, dir: RotateDir) -> bool {
        if !self.is_square() {
            return false;
        }
        rotate_square(&mut self.cells, self.width, dir);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_zero() {
        let g = Grid::new(12, 20);
        assert_eq!(g.width(), 12);
        assert_eq!(g.height(), 20);
        assert_eq!(g.rows().count(), 20);
        assert!(g.rows().all(|r| r.len() == 12 && r.iter().all(|&c| c == 0)));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(&[vec![1u8, 2], vec![3]]).is_none());
        let g = Grid::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
        assert_eq!(g.get(1, 0), Some(2));
        assert_eq!(g.get(0, 1), Some(3));
        assert_eq!(g.get(2, 0), None);
    }

    #[test]
    fn test_rotate_clockwise_and_back() {
        let mut g = Grid::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        assert!(g.rotate(RotateDir::Clockwise));
        assert_eq!(g, Grid::from_rows(&[[7u8, 4, 1], [8, 5, 2], [9, 6, 3]]).unwrap());
        assert!(g.rotate(RotateDir::CounterClockwise));
        assert_eq!(g, Grid::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap());
    }

    #[test]
    fn test_rotate_counter_clockwise() {
        let mut g = Grid::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
        assert!(g.rotate(RotateDir::CounterClockwise));
        assert_eq!(g, Grid::from_rows(&[[2u8, 4], [1, 3]]).unwrap());
    }

    #[test]
    fn test_rotate_rejects_non_square() {
        let mut g = Grid::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
        let before = g.clone();
        assert!(!g.rotate(RotateDir::Clockwise));
        assert_eq!(g, before);
    }

    #[test]
    fn test_remove_row_shifts_rows_above_down() {
        let mut g = Grid::from_rows(&[[1u8, 1], [2, 2], [3, 3]]).unwrap();
        assert!(g.remove_row(1));
        assert_eq!(g, Grid::from_rows(&[[0u8, 0], [1, 1], [3, 3]]).unwrap());
        assert!(!g.remove_row(3));
    }

    #[test]
    fn test_rotate_square_ignores_short_slice() {
        let mut cells = [1, 2, 3];
        rotate_square(&mut cells, 2, RotateDir::Clockwise);
        assert_eq!(cells, [1, 2, 3]);
    }
}
