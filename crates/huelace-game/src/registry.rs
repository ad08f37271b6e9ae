//! The ordered collection of all puzzles.

use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

use crate::{GameError, Puzzle, PuzzleKind};

/// The eleven puzzle instances, in registry order, sharing one random
/// stream.
///
/// The registry owns the stream so that every site drawing randomness -
/// initial pattern colors, scramble magnitudes, polyform growth picks -
/// consumes the same sequence, and so that tests can pin the whole
/// collection down with [`Registry::with_seed`].
///
/// # Example
///
/// ```
/// use huelace_game::Registry;
///
/// let mut registry = Registry::with_seed(99);
/// let before = registry.puzzle(0).board().clone();
///
/// registry.scramble(0);
/// assert!(!registry.puzzle(0).is_won());
/// assert_ne!(registry.puzzle(0).board(), &before);
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    puzzles: Vec<Puzzle>,
    rng: Pcg64Mcg,
}

impl Registry {
    /// Creates the collection with an entropy-seeded random stream.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(Pcg64Mcg::from_rng(&mut rand::rng()))
    }

    /// Creates the collection from a fixed seed, for deterministic tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(Pcg64Mcg::seed_from_u64(seed))
    }

    fn from_rng(mut rng: Pcg64Mcg) -> Self {
        let puzzles = PuzzleKind::ALL
            .iter()
            .map(|&kind| Puzzle::new(kind, &mut rng))
            .collect();
        Self { puzzles, rng }
    }

    /// The number of puzzles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always `false`; present for container-API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// All puzzles, in registry order.
    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// The puzzle at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn puzzle(&self, index: usize) -> &Puzzle {
        &self.puzzles[index]
    }

    /// Applies a click on `region` of the puzzle at `index`.
    ///
    /// Returns whether a valid region was hit.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn click(&mut self, index: usize, region: usize) -> bool {
        self.puzzles[index].click(region)
    }

    /// Applies a click on the polyform cell `(row, col)` of the puzzle at
    /// `index`.
    ///
    /// Returns whether a valid active cell was hit.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn click_cell(&mut self, index: usize, row: usize, col: usize) -> bool {
        self.puzzles[index].click_cell(row, col)
    }

    /// Re-scrambles the puzzle at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn scramble(&mut self, index: usize) {
        self.puzzles[index].scramble(&mut self.rng);
    }

    /// Changes the color count of the puzzle at `index`, re-scrambling on
    /// change.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidColorCount`] when `value` is outside
    /// `[2, 9]`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_color_count(&mut self, index: usize, value: u8) -> Result<bool, GameError> {
        self.puzzles[index].set_color_count(value, &mut self.rng)
    }

    /// Grows the puzzle at `index` by one cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotGrowable`] for fixed-shape puzzles.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn grow(&mut self, index: usize) -> Result<bool, GameError> {
        self.puzzles[index].grow(&mut self.rng)
    }

    /// Shrinks the puzzle at `index` by one cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotGrowable`] for fixed-shape puzzles.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn shrink(&mut self, index: usize) -> Result<bool, GameError> {
        self.puzzles[index].shrink(&mut self.rng)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_holds_all_kinds_in_order() {
        let registry = Registry::with_seed(1);
        assert_eq!(registry.len(), 11);
        assert!(!registry.is_empty());
        for (puzzle, kind) in registry.puzzles().iter().zip(PuzzleKind::ALL) {
            assert_eq!(puzzle.kind(), kind);
            assert!(!puzzle.is_won());
        }
    }

    #[test]
    fn test_same_seed_same_collection() {
        let first = Registry::with_seed(42);
        let second = Registry::with_seed(42);
        for (a, b) in first.puzzles().iter().zip(second.puzzles()) {
            assert_eq!(a.board(), b.board());
        }
    }

    #[test]
    fn test_operations_forward_to_the_indexed_puzzle() {
        let mut registry = Registry::with_seed(7);

        assert!(registry.click(0, 0));
        assert!(!registry.click(0, 99));

        registry.scramble(2);
        assert!(!registry.puzzle(2).is_won());

        assert_eq!(registry.set_color_count(3, 4), Ok(true));
        assert_eq!(registry.puzzle(3).color_count().get(), 4);

        let ring = PuzzleKind::ALL
            .iter()
            .position(|&kind| kind == PuzzleKind::RingOfTriplets)
            .unwrap();
        let before = registry.puzzle(ring).cell_count();
        assert_eq!(registry.grow(ring), Ok(true));
        assert_eq!(registry.puzzle(ring).cell_count(), before + 1);
        assert_eq!(registry.shrink(ring), Ok(true));
        assert_eq!(registry.puzzle(ring).cell_count(), before);

        assert!(registry.grow(0).is_err());
    }
}
