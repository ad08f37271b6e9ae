//! A single playable puzzle instance.

use std::{fmt, ops::RangeInclusive};

use derive_more::{Display, Error};
use huelace_core::{
    BoardState, ColorCount, ColorIndex, GridPos, Topology, topology::tables,
};
use huelace_generator::{ScrambleOptions, polyiamond, polyomino, scramble};
use rand::Rng;

/// The eleven puzzle kinds, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleKind {
    /// Four triangles: center, top, left, right.
    Triforce,
    /// A 2x2 block of squares.
    Foursquare,
    /// Six triangles around a shared center vertex.
    Hexagon,
    /// A hexagram of six points and six inner wedges.
    Star,
    /// Twenty-four squares and diamonds tiling a square.
    SquareDiamond,
    /// A twenty-four cell Ammann-Beenker patch.
    AmmannBeenker,
    /// A growable ring where each click advances a triplet of cells.
    RingOfTriplets,
    /// A growable board where each click advances every other cell.
    GridMinusOne,
    /// A growable hub-and-spokes board.
    Sun,
    /// A randomly grown region of unit squares.
    Polyomino,
    /// A randomly grown region of unit triangles.
    Polyiamond,
}

impl PuzzleKind {
    /// Every kind, in registry order.
    pub const ALL: [Self; 11] = [
        Self::Triforce,
        Self::Foursquare,
        Self::Hexagon,
        Self::Star,
        Self::SquareDiamond,
        Self::AmmannBeenker,
        Self::RingOfTriplets,
        Self::GridMinusOne,
        Self::Sun,
        Self::Polyomino,
        Self::Polyiamond,
    ];

    /// Short lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Triforce => "triforce",
            Self::Foursquare => "foursquare",
            Self::Hexagon => "hexagon",
            Self::Star => "star",
            Self::SquareDiamond => "squarediamond",
            Self::AmmannBeenker => "ammann-beenker",
            Self::RingOfTriplets => "ring-of-triplets",
            Self::GridMinusOne => "grid-minus-one",
            Self::Sun => "sun",
            Self::Polyomino => "polyomino",
            Self::Polyiamond => "polyiamond",
        }
    }

    /// Stable 1-based identifier, following registry order.
    #[must_use]
    pub fn uid(self) -> u32 {
        match self {
            Self::Triforce => 1,
            Self::Foursquare => 2,
            Self::Hexagon => 3,
            Self::Star => 4,
            Self::SquareDiamond => 5,
            Self::AmmannBeenker => 6,
            Self::RingOfTriplets => 7,
            Self::GridMinusOne => 8,
            Self::Sun => 9,
            Self::Polyomino => 10,
            Self::Polyiamond => 11,
        }
    }

    /// The cell-count range of a growable kind, or `None` for fixed shapes.
    #[must_use]
    pub fn size_range(self) -> Option<RangeInclusive<usize>> {
        match self {
            Self::RingOfTriplets => Some(4..=16),
            Self::GridMinusOne => Some(2..=25),
            Self::Sun => Some(5..=17),
            Self::Polyomino | Self::Polyiamond => Some(4..=100),
            _ => None,
        }
    }

    /// Whether the cell count can change at runtime.
    #[must_use]
    pub fn is_growable(self) -> bool {
        self.size_range().is_some()
    }

    /// The cell count a fresh puzzle of this kind starts with.
    #[must_use]
    pub fn initial_size(self) -> usize {
        match self {
            Self::Triforce | Self::Foursquare => 4,
            Self::Hexagon | Self::RingOfTriplets => 6,
            Self::Star => 12,
            Self::SquareDiamond | Self::AmmannBeenker => 24,
            Self::GridMinusOne | Self::Sun => 9,
            Self::Polyomino | Self::Polyiamond => 10,
        }
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A player-triggered operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The requested color count is outside `[2, 9]`.
    #[display("color count {value} is outside 2..=9")]
    InvalidColorCount {
        /// The rejected value.
        value: u8,
    },
    /// Grow/shrink was called on a fixed-shape puzzle.
    #[display("{kind} has a fixed number of cells")]
    NotGrowable {
        /// The fixed-shape kind.
        kind: PuzzleKind,
    },
}

/// One playable puzzle: a topology, a color count, and the target/current
/// pattern pair.
///
/// All randomized operations take the random generator as a parameter; the
/// [`Registry`](crate::Registry) threads its shared stream through them.
///
/// # Example
///
/// ```
/// use huelace_game::{Puzzle, PuzzleKind};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64Mcg;
///
/// let mut rng = Pcg64Mcg::seed_from_u64(1);
/// let mut puzzle = Puzzle::new(PuzzleKind::RingOfTriplets, &mut rng);
/// assert!(!puzzle.is_won());
///
/// // Clicking a region advances it and its two ring neighbors.
/// assert!(puzzle.click(0));
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle {
    kind: PuzzleKind,
    colors: ColorCount,
    size: usize,
    topology: Topology,
    board: BoardState,
}

impl Puzzle {
    /// Creates a puzzle of the given kind at its initial size and color
    /// count, generating the board layout where applicable and scrambling it.
    pub fn new<R: Rng + ?Sized>(kind: PuzzleKind, rng: &mut R) -> Self {
        let size = kind.initial_size();
        let topology = build_topology(kind, size, rng);
        let board = BoardState::from_mask(&topology.activity_mask());
        let mut puzzle = Self {
            kind,
            colors: ColorCount::default(),
            size,
            topology,
            board,
        };
        puzzle.scramble(rng);
        puzzle
    }

    /// This puzzle's kind.
    #[must_use]
    pub fn kind(&self) -> PuzzleKind {
        self.kind
    }

    /// The number of colors in play.
    #[must_use]
    pub fn color_count(&self) -> ColorCount {
        self.colors
    }

    /// The number of active cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.topology.cell_count()
    }

    /// The topology, for layers that need neighbor geometry.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The target/current pattern pair.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The target color of the cell at `index`, or `None` for an inactive
    /// slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn target_color(&self, index: usize) -> Option<ColorIndex> {
        self.board.target().color(index)
    }

    /// The current color of the cell at `index`, or `None` for an inactive
    /// slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn current_color(&self, index: usize) -> Option<ColorIndex> {
        self.board.current().color(index)
    }

    /// The win predicate: target and current patterns match on every active
    /// cell.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_matched()
    }

    /// Applies a click on `region` to the current pattern, advancing the
    /// region's neighbor set by one.
    ///
    /// Returns whether a valid region was hit; presentation layers use this
    /// to trigger a click sound. Clicks on out-of-range or inactive regions
    /// are ignored and report no hit.
    pub fn click(&mut self, region: usize) -> bool {
        self.topology
            .apply(region, self.board.current_mut(), 1, self.colors)
            .is_ok()
    }

    /// Applies a click on the polyform cell at `(row, col)`.
    ///
    /// Returns `false` without touching the board when this puzzle is not a
    /// polyform, or when the cell is outside the generated region.
    pub fn click_cell(&mut self, row: usize, col: usize) -> bool {
        let region = match &self.topology {
            Topology::Polyomino(shape) => {
                if row >= shape.rows() || col >= shape.cols() {
                    return false;
                }
                shape.index(GridPos::new(row, col))
            }
            Topology::Polyiamond(shape) => {
                if row >= shape.rows() || col >= shape.cols() {
                    return false;
                }
                shape.index(GridPos::new(row, col))
            }
            _ => return false,
        };
        self.click(region)
    }

    /// Re-randomizes both patterns, leaving the puzzle visibly unsolved.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        scramble(
            &mut self.board,
            &self.topology,
            self.colors,
            rng,
            &ScrambleOptions::default(),
        );
    }

    /// Changes the number of colors in play and re-scrambles.
    ///
    /// Returns `Ok(true)` when the count changed (and the board was
    /// re-scrambled), `Ok(false)` when `value` already was the count.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidColorCount`] when `value` is outside
    /// `[2, 9]`; the puzzle is untouched in that case.
    pub fn set_color_count<R: Rng + ?Sized>(
        &mut self,
        value: u8,
        rng: &mut R,
    ) -> Result<bool, GameError> {
        let colors = ColorCount::new(value).ok_or(GameError::InvalidColorCount { value })?;
        if colors == self.colors {
            return Ok(false);
        }
        self.colors = colors;
        // Old cell values may exceed a lowered count; clamp before the
        // re-scramble overwrites them so the range invariant never breaks.
        self.board.target_mut().clamp_colors(colors);
        self.board.current_mut().clamp_colors(colors);
        self.scramble(rng);
        Ok(true)
    }

    /// Grows the board by one cell and re-scrambles.
    ///
    /// Returns `Ok(true)` when the size changed, `Ok(false)` when the board
    /// already is at its maximum size.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotGrowable`] for fixed-shape puzzles.
    pub fn grow<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool, GameError> {
        self.resize(self.size + 1, rng)
    }

    /// Shrinks the board by one cell and re-scrambles.
    ///
    /// Returns `Ok(true)` when the size changed, `Ok(false)` when the board
    /// already is at its minimum size.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotGrowable`] for fixed-shape puzzles.
    pub fn shrink<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool, GameError> {
        match self.size.checked_sub(1) {
            Some(size) => self.resize(size, rng),
            None => Ok(false),
        }
    }

    fn resize<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) -> Result<bool, GameError> {
        let range = self
            .kind
            .size_range()
            .ok_or(GameError::NotGrowable { kind: self.kind })?;
        let size = size.clamp(*range.start(), *range.end());
        if size == self.size {
            return Ok(false);
        }
        self.size = size;
        self.topology = build_topology(self.kind, size, rng);
        self.board = BoardState::from_mask(&self.topology.activity_mask());
        self.scramble(rng);
        Ok(true)
    }
}

fn build_topology<R: Rng + ?Sized>(kind: PuzzleKind, size: usize, rng: &mut R) -> Topology {
    match kind {
        PuzzleKind::Triforce => Topology::Fixed(&tables::TRIFORCE),
        PuzzleKind::Foursquare => Topology::Fixed(&tables::FOURSQUARE),
        PuzzleKind::Hexagon => Topology::Fixed(&tables::HEXAGON),
        PuzzleKind::Star => Topology::Fixed(&tables::STAR),
        PuzzleKind::SquareDiamond => Topology::Fixed(&tables::SQUAREDIAMOND),
        PuzzleKind::AmmannBeenker => Topology::Fixed(&tables::AMMANN_BEENKER),
        PuzzleKind::RingOfTriplets => Topology::Ring { cells: size },
        PuzzleKind::GridMinusOne => Topology::AllButOne { cells: size },
        PuzzleKind::Sun => Topology::Sun { cells: size },
        PuzzleKind::Polyomino => Topology::Polyomino(polyomino::generate(size, rng)),
        PuzzleKind::Polyiamond => Topology::Polyiamond(polyiamond::generate(size, rng)),
    }
}
