//! Puzzle topologies and their transform rules.
//!
//! A topology decides which cells a click on a region advances. The six
//! fixed tilings use static hand-authored neighbor tables; the three
//! structural growable puzzles use computed rules (ring, all-but-one, sun);
//! the two polyform puzzles derive neighbors from grid adjacency on their
//! generated shapes.
//!
//! All variants are dispatched through [`Topology::apply`], which advances
//! every cell of the clicked region's neighbor set by a magnitude, modulo the
//! puzzle's color count.

use derive_more::{Display, Error};

use crate::{ColorCount, PolyiamondShape, PolyominoShape, StateBuffer};

pub mod tables;

/// A hand-authored fixed-shape layout: one neighbor list per region.
#[derive(Debug)]
pub struct FixedLayout {
    /// Short lowercase layout name.
    pub name: &'static str,
    /// Per-region lists of the cells advanced by a click on that region.
    pub neighbors: &'static [&'static [usize]],
}

/// A transform was asked to start from an invalid region.
///
/// Region indices come from the presentation layer's hit testing, which is
/// contractually required to filter clicks down to active regions; this error
/// turns a violation of that contract into a loud, testable failure instead
/// of silent out-of-range access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TransformError {
    /// The region index was out of range or referred to an inactive slot.
    #[display("region {index} is out of range or inactive")]
    InvalidRegion {
        /// The offending region index.
        index: usize,
    },
}

/// The neighbor-transformation rule of one puzzle, as a tagged variant.
#[derive(Debug, Clone)]
pub enum Topology {
    /// Fixed-shape puzzle with a static neighbor table.
    Fixed(&'static FixedLayout),
    /// Ring of cells; a click advances the cell and both ring neighbors,
    /// wrapping around. `cells` must be at least 3 for the three affected
    /// cells to be distinct.
    Ring {
        /// Number of cells in the ring.
        cells: usize,
    },
    /// A click advances every cell except the clicked one.
    AllButOne {
        /// Total number of cells.
        cells: usize,
    },
    /// A hub (region 0) surrounded by a ring of spokes. Clicking the hub
    /// advances every cell; clicking a spoke advances the spoke, its two
    /// ring neighbors (wrapping within the spokes only), and always the hub.
    /// `cells` must be at least 4 so a spoke's neighbors are distinct.
    Sun {
        /// Total number of cells, hub included.
        cells: usize,
    },
    /// Generated square-grid region with up/down/left/right adjacency.
    Polyomino(PolyominoShape),
    /// Generated triangle-grid region with left/right adjacency plus one
    /// vertical neighbor chosen by triangle orientation.
    Polyiamond(PolyiamondShape),
}

impl Topology {
    /// The number of buffer slots this topology addresses.
    ///
    /// For polyform puzzles this counts the whole allocation grid, inactive
    /// slots included; state buffers must have exactly this length.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        match self {
            Self::Fixed(layout) => layout.neighbors.len(),
            Self::Ring { cells } | Self::AllButOne { cells } | Self::Sun { cells } => *cells,
            Self::Polyomino(shape) => shape.slot_count(),
            Self::Polyiamond(shape) => shape.slot_count(),
        }
    }

    /// The number of active cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        match self {
            Self::Polyomino(shape) => shape.cell_count(),
            Self::Polyiamond(shape) => shape.cell_count(),
            _ => self.slot_count(),
        }
    }

    /// Returns whether `region` is a clickable region of this topology.
    #[must_use]
    pub fn is_region(&self, region: usize) -> bool {
        match self {
            Self::Polyomino(shape) => {
                region < shape.slot_count() && shape.is_filled(shape.pos(region))
            }
            Self::Polyiamond(shape) => {
                region < shape.slot_count() && shape.is_filled(shape.pos(region))
            }
            _ => region < self.slot_count(),
        }
    }

    /// Iterates over every clickable region, in slot order.
    pub fn regions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.slot_count()).filter(move |&region| self.is_region(region))
    }

    /// Builds the activity mask matching this topology's buffer layout.
    #[must_use]
    pub fn activity_mask(&self) -> Vec<bool> {
        match self {
            Self::Polyomino(shape) => shape.mask().to_vec(),
            Self::Polyiamond(shape) => shape.mask().to_vec(),
            _ => vec![true; self.slot_count()],
        }
    }

    /// Applies a click on `region`: advances every cell of the region's
    /// neighbor set by `magnitude`, wrapping modulo `count`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidRegion`] when `region` is out of
    /// range or addresses an inactive polyform slot. The buffer is untouched
    /// in that case.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` has fewer slots than [`Self::slot_count`].
    pub fn apply(
        &self,
        region: usize,
        buffer: &mut StateBuffer,
        magnitude: u8,
        count: ColorCount,
    ) -> Result<(), TransformError> {
        if !self.is_region(region) {
            return Err(TransformError::InvalidRegion { index: region });
        }
        debug_assert_eq!(buffer.len(), self.slot_count());

        match self {
            Self::Fixed(layout) => {
                for &cell in layout.neighbors[region] {
                    buffer.advance(cell, magnitude, count);
                }
            }
            Self::Ring { cells } => {
                for cell in [(region + cells - 1) % cells, region, (region + 1) % cells] {
                    buffer.advance(cell, magnitude, count);
                }
            }
            Self::AllButOne { cells } => {
                for cell in (0..*cells).filter(|&cell| cell != region) {
                    buffer.advance(cell, magnitude, count);
                }
            }
            Self::Sun { cells } => {
                if region == 0 {
                    for cell in 0..*cells {
                        buffer.advance(cell, magnitude, count);
                    }
                } else {
                    let spokes = cells - 1;
                    let spoke = region - 1;
                    let prev = 1 + (spoke + spokes - 1) % spokes;
                    let next = 1 + (spoke + 1) % spokes;
                    for cell in [0, prev, region, next] {
                        buffer.advance(cell, magnitude, count);
                    }
                }
            }
            Self::Polyomino(shape) => {
                for cell in shape.neighborhood(shape.pos(region)) {
                    buffer.advance(cell, magnitude, count);
                }
            }
            Self::Polyiamond(shape) => {
                for cell in shape.neighborhood(shape.pos(region)) {
                    buffer.advance(cell, magnitude, count);
                }
            }
        }
        Ok(())
    }
}
