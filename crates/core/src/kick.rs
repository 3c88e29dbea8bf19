//! Wall-kick search after a rotation.
//!
//! When a freshly rotated piece collides, it is nudged sideways with a
//! growing, alternating offset: shift by `+1`, then `-2`, `+3`, `-4`, ...
//! Shifts accumulate, so the tested columns relative to the rotated piece are
//! `+1, -1, +2, -2, ...`. The search gives up as soon as the next offset
//! would exceed the shape width; the last shift is never tested.
//!
//! | Shape width | Displacements tested (after `0`) |
//! |-------------|----------------------------------|
//! | 2 | `+1` |
//! | 3 | `+1, -1, +2` |
//! | 4 | `+1, -1, +2` |

/// Iterator over the x displacements a kick search tests, relative to the
/// position the piece had when it rotated.
#[derive(Debug, Clone)]
pub struct KickSearch {
    offset: i16,
    total: i16,
    width: i16,
    done: bool,
}

impl KickSearch {
    pub fn new(width: usize) -> Self {
        Self {
            offset: 1,
            total: 0,
            width: width as i16,
            done: false,
        }
    }
}

impl Iterator for KickSearch {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.done {
            return None;
        }
        self.total += self.offset;
        self.offset = -(self.offset + self.offset.signum());
        if self.offset > self.width {
            self.done = true;
            return None;
        }
        Some(self.total)
    }
}
