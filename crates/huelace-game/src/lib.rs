//! Puzzle sessions and the puzzle registry.
//!
//! This crate is the boundary a presentation layer talks to. A [`Puzzle`] is
//! one playable instance: its topology, color count, and the target/current
//! pattern pair, together with the operations the player can trigger -
//! clicking a region, scrambling, changing the color count, and growing or
//! shrinking the growable boards. The [`Registry`] holds the ordered
//! collection of all eleven puzzle kinds and owns the single random stream
//! they share.
//!
//! # Example
//!
//! ```
//! use huelace_game::{PuzzleKind, Registry};
//!
//! let mut registry = Registry::with_seed(7);
//! assert_eq!(registry.len(), PuzzleKind::ALL.len());
//!
//! // Every puzzle starts scrambled.
//! assert!(registry.puzzles().iter().all(|puzzle| !puzzle.is_won()));
//!
//! // Clicking a valid region reports a hit.
//! assert!(registry.click(0, 0));
//! ```

pub mod puzzle;
pub mod registry;

pub use self::{
    puzzle::{GameError, Puzzle, PuzzleKind},
    registry::Registry,
};
