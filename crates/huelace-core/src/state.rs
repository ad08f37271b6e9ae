//! State buffers and the win predicate.

use crate::{ColorCount, ColorIndex};

/// One side of a puzzle: a flat array of cells.
///
/// Each slot is either an active cell holding a color, or `None` for a slot
/// that is permanently outside the board. Fixed-shape puzzles have no inactive
/// slots; generated polyform boards mark every grid slot outside the grown
/// region as inactive when the buffer is built and never touch it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBuffer {
    cells: Vec<Option<ColorIndex>>,
}

impl StateBuffer {
    /// Creates a buffer of `len` active cells, all holding color zero.
    #[must_use]
    pub fn filled(len: usize) -> Self {
        Self {
            cells: vec![Some(ColorIndex::ZERO); len],
        }
    }

    /// Creates a buffer from an activity mask: `true` slots become active
    /// cells holding color zero, `false` slots are permanently inactive.
    #[must_use]
    pub fn from_mask(mask: &[bool]) -> Self {
        Self {
            cells: mask
                .iter()
                .map(|&active| active.then_some(ColorIndex::ZERO))
                .collect(),
        }
    }

    /// Returns the number of slots, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether the buffer has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the color at `index`, or `None` for an inactive slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<ColorIndex> {
        self.cells[index]
    }

    /// Returns whether the slot at `index` is an active cell.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(Option::is_some)
    }

    /// Iterates over the indices of all active cells, in slot order.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|_| i))
    }

    /// Overwrites the color of the active cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the slot is inactive.
    pub fn set_color(&mut self, index: usize, color: ColorIndex) {
        let cell = &mut self.cells[index];
        assert!(cell.is_some(), "slot {index} is inactive");
        *cell = Some(color);
    }

    /// Advances the cell at `index` by `magnitude`, wrapping modulo `count`.
    ///
    /// Inactive slots are left untouched; grid-adjacency transforms probe
    /// neighbors that may fall outside the generated region.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn advance(&mut self, index: usize, magnitude: u8, count: ColorCount) {
        if let Some(color) = &mut self.cells[index] {
            *color = color.cycled(magnitude, count);
        }
    }

    /// Clamps every active cell into `[0, count)`.
    ///
    /// Used when the color count shrinks and buffer contents are about to be
    /// regenerated anyway, keeping the range invariant unbroken in between.
    pub fn clamp_colors(&mut self, count: ColorCount) {
        for cell in self.cells.iter_mut().flatten() {
            if !count.contains(*cell) {
                *cell = ColorIndex::ZERO;
            }
        }
    }
}

/// The target ("left") and current ("right") patterns of one puzzle.
///
/// Both buffers always have the same length and the same activity mask; only
/// cell colors ever differ.
///
/// # Example
///
/// ```
/// use huelace_core::{BoardState, ColorIndex};
///
/// let mut board = BoardState::new(4);
/// assert!(board.is_matched());
///
/// board.current_mut().set_color(0, ColorIndex::new(1));
/// assert!(!board.is_matched());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    target: StateBuffer,
    current: StateBuffer,
}

impl BoardState {
    /// Creates a board of `len` active cells, all color zero on both sides.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            target: StateBuffer::filled(len),
            current: StateBuffer::filled(len),
        }
    }

    /// Creates a board from an activity mask shared by both sides.
    #[must_use]
    pub fn from_mask(mask: &[bool]) -> Self {
        Self {
            target: StateBuffer::from_mask(mask),
            current: StateBuffer::from_mask(mask),
        }
    }

    /// Returns the target pattern.
    #[must_use]
    pub fn target(&self) -> &StateBuffer {
        &self.target
    }

    /// Returns the current pattern.
    #[must_use]
    pub fn current(&self) -> &StateBuffer {
        &self.current
    }

    /// Returns the target pattern mutably.
    pub fn target_mut(&mut self) -> &mut StateBuffer {
        &mut self.target
    }

    /// Returns the current pattern mutably.
    pub fn current_mut(&mut self) -> &mut StateBuffer {
        &mut self.current
    }

    /// Copies the target pattern into the current pattern.
    pub fn copy_target_to_current(&mut self) {
        self.current = self.target.clone();
    }

    /// The win predicate: every active cell holds the same color on both
    /// sides.
    ///
    /// Inactive slots are inactive on both sides by construction, so they can
    /// never make matched patterns compare as different.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.target == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_buffer_is_all_active_zero() {
        let buffer = StateBuffer::filled(6);
        assert_eq!(buffer.len(), 6);
        assert_eq!(buffer.active_indices().count(), 6);
        assert!((0..6).all(|i| buffer.color(i) == Some(ColorIndex::ZERO)));
    }

    #[test]
    fn test_mask_buffer_skips_inactive_slots() {
        let buffer = StateBuffer::from_mask(&[true, false, true]);
        assert!(buffer.is_active(0));
        assert!(!buffer.is_active(1));
        assert_eq!(buffer.active_indices().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(buffer.color(1), None);
    }

    #[test]
    fn test_advance_wraps_and_skips_inactive() {
        let count = ColorCount::new(3).unwrap();
        let mut buffer = StateBuffer::from_mask(&[true, false]);
        buffer.advance(0, 4, count);
        assert_eq!(buffer.color(0), Some(ColorIndex::new(1)));
        buffer.advance(1, 4, count);
        assert_eq!(buffer.color(1), None);
    }

    #[test]
    fn test_clamp_colors_resets_out_of_range_cells() {
        let mut buffer = StateBuffer::filled(2);
        buffer.set_color(0, ColorIndex::new(4));
        buffer.set_color(1, ColorIndex::new(1));
        buffer.clamp_colors(ColorCount::new(3).unwrap());
        assert_eq!(buffer.color(0), Some(ColorIndex::ZERO));
        assert_eq!(buffer.color(1), Some(ColorIndex::new(1)));
    }

    #[test]
    fn test_matched_ignores_inactive_slots() {
        let mut board = BoardState::from_mask(&[true, false, true]);
        assert!(board.is_matched());

        board.current_mut().set_color(2, ColorIndex::new(1));
        assert!(!board.is_matched());

        board.target_mut().set_color(2, ColorIndex::new(1));
        assert!(board.is_matched());
    }

    #[test]
    fn test_copy_target_to_current_restores_match() {
        let mut board = BoardState::new(3);
        board.target_mut().set_color(1, ColorIndex::new(1));
        assert!(!board.is_matched());
        board.copy_target_to_current();
        assert!(board.is_matched());
    }
}
