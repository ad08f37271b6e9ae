//! Randomized algorithms for huelace puzzles.
//!
//! Two responsibilities live here:
//!
//! 1. **Polyform growth** - [`polyomino::generate`] and
//!    [`polyiamond::generate`] grow a random connected region of the
//!    requested size by frontier expansion, producing the shape types from
//!    `huelace-core`.
//! 2. **Scrambling** - [`scramble()`] regenerates a puzzle's target and
//!    current patterns into a random, solvable-but-unsolved configuration by
//!    rejection sampling.
//!
//! Every entry point takes the random generator as an explicit parameter so
//! callers can share one stream across the whole collection and tests can
//! seed it deterministically.
//!
//! # Examples
//!
//! ```
//! use huelace_generator::polyomino;
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64Mcg;
//!
//! let mut rng = Pcg64Mcg::seed_from_u64(7);
//! let shape = polyomino::generate(12, &mut rng);
//! assert_eq!(shape.cell_count(), 12);
//! ```

pub mod polyiamond;
pub mod polyomino;
pub mod scramble;

pub use self::scramble::{ScrambleOptions, scramble};
