//! Scoring module - line clear points.
//!
//! Within one sweep the first cleared row is worth [`POINTS_PER_LINE`] and
//! every further row doubles the multiplier, so clearing `k` rows at once
//! awards `10 * (2^k - 1)`:
//!
//! | Rows | Points |
//! |------|--------|
//! | 1 | 10 |
//! | 2 | 30 |
//! | 3 | 70 |
//! | 4 | 150 |

use crate::types::POINTS_PER_LINE;

/// Running score of a single sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepScore {
    multiplier: u32,
    lines: u32,
    points: u32,
}

impl SweepScore {
    pub fn new() -> Self {
        Self {
            multiplier: 1,
            lines: 0,
            points: 0,
        }
    }

    /// Award one cleared row and double the multiplier for the next one.
    pub fn award_row(&mut self) -> u32 {
        let row_points = self.multiplier.saturating_mul(POINTS_PER_LINE);
        self.points = self.points.saturating_add(row_points);
        self.lines += 1;
        self.multiplier = self.multiplier.saturating_mul(2);
        row_points
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}

impl Default for SweepScore {
    fn default() -> Self {
        Self::new()
    }
}

/// Closed form of a sweep clearing `lines` rows.
pub fn line_clear_score(lines: u32) -> u32 {
    let rows_factor = 1u32
        .checked_shl(lines)
        .map_or(u32::MAX, |pow| pow - 1);
    rows_factor.saturating_mul(POINTS_PER_LINE)
}
