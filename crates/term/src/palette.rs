//! Color lookup by cell index.

use crate::fb::Rgb;
use crate::types::Cell;

/// Surface background.
pub const BACKGROUND: Rgb = Rgb::from_hex(0x000000);

/// Colors for indices 1..=7.
pub const PIECE_COLORS: [Rgb; 7] = [
    Rgb::from_hex(0xFF0D72),
    Rgb::from_hex(0x0DC2FF),
    Rgb::from_hex(0x0DFF72),
    Rgb::from_hex(0xF538FF),
    Rgb::from_hex(0xFF8E0D),
    Rgb::from_hex(0xFFE138),
    Rgb::from_hex(0x3877FF),
];

/// `None` for empty and out-of-range values.
pub fn color_of(cell: Cell) -> Option<Rgb> {
    match cell {
        0 => None,
        c => PIECE_COLORS.get(c as usize - 1).copied(),
    }
}
