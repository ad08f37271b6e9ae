//! Core data structures for huelace puzzles.
//!
//! This crate provides the board representations shared by every puzzle in the
//! collection. Each puzzle holds two parallel patterns over the same cells: a
//! *target* the player is trying to reproduce and a *current* pattern they
//! manipulate by clicking regions. A click advances the color index of every
//! cell in the clicked region's neighbor set, modulo the puzzle's color count.
//!
//! # Overview
//!
//! 1. **Color values** - [`ColorIndex`] and [`ColorCount`] are small
//!    range-checked copy types; all transforms advance colors with
//!    [`ColorIndex::cycled`].
//! 2. **State buffers** - [`StateBuffer`] holds one side's cells
//!    (`Option<ColorIndex>` per slot; `None` marks a slot permanently outside
//!    the board, as happens on generated polyform grids). [`BoardState`] pairs
//!    the target and current buffers and exposes the win predicate.
//! 3. **Topologies** - [`Topology`] is a tagged variant over every neighbor
//!    rule in the collection: static hand-authored tables, the ring / sun /
//!    all-but-one parametric rules, and grid adjacency over generated
//!    [`PolyominoShape`] / [`PolyiamondShape`] regions.
//!
//! Random board generation and scrambling live in `huelace-generator`; the
//! per-puzzle session API lives in `huelace-game`.
//!
//! # Examples
//!
//! ```
//! use huelace_core::{BoardState, ColorCount, Topology, topology::tables};
//!
//! let topology = Topology::Fixed(&tables::TRIFORCE);
//! let mut board = BoardState::new(topology.slot_count());
//! let colors = ColorCount::default();
//!
//! // Clicking the top corner advances it together with the center.
//! topology
//!     .apply(1, board.current_mut(), 1, colors)
//!     .unwrap();
//! assert!(!board.is_matched());
//! ```

pub mod color;
pub mod polyform;
pub mod state;
pub mod topology;

pub use self::{
    color::{ColorCount, ColorIndex},
    polyform::{BoundingBox, GridPos, PolyiamondShape, PolyominoShape},
    state::{BoardState, StateBuffer},
    topology::{Topology, TransformError},
};
