//! Paging cursor for the enemy viewer.

/// Index into the living-enemies list shown one at a time.
///
/// The cursor does not know the list itself; callers pass the current length
/// and must [`clamp`](Self::clamp) whenever that length changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayCursor {
    index: usize,
}

impl DisplayCursor {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Moves by `direction` with wraparound.
    ///
    /// Stepping below zero lands on the last index and stepping to or past
    /// `len` lands on zero. Lists with fewer than two entries never move the
    /// cursor. Returns true when the index changed.
    pub fn step(&mut self, direction: i32, len: usize) -> bool {
        if len < 2 || direction == 0 {
            return false;
        }

        let target = self.index as i64 + i64::from(direction);
        let next = if target < 0 {
            len - 1
        } else if target >= len as i64 {
            0
        } else {
            target as usize
        };

        let moved = next != self.index;
        self.index = next;
        moved
    }

    /// Keeps the index inside `0..len` (zero for an empty list).
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }
}
