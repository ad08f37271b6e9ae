//! Random polyomino growth on a square grid.

use std::ops::RangeInclusive;

use huelace_core::{GridPos, PolyominoShape};
use log::debug;
use rand::Rng;
use rand::RngExt;

/// Sizes the polyomino puzzle may be grown to.
pub const SIZE_RANGE: RangeInclusive<usize> = 4..=100;

/// Fallback size when a request falls outside [`SIZE_RANGE`].
pub const DEFAULT_SIZE: usize = 1;

/// Grows a random connected region of `size` unit squares.
///
/// The allocation grid is `(2 * size - 1)` cells on each side and growth
/// starts at its center, so the region can never reach the grid border.
/// Growth is frontier expansion: starting from the center cell, `size - 1`
/// times a uniformly random cell is picked from the frontier (the unfilled
/// cells orthogonally adjacent to the region), filled, and its own unfilled
/// neighbors join the frontier.
///
/// A `size` outside [`SIZE_RANGE`] is clamped to [`DEFAULT_SIZE`]; callers
/// wanting a hard error must validate beforehand.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> PolyominoShape {
    let size = if SIZE_RANGE.contains(&size) {
        size
    } else {
        DEFAULT_SIZE
    };
    let dim = 2 * size - 1;
    let mut mask = vec![false; dim * dim];
    let mut pending = vec![false; dim * dim];
    let mut frontier: Vec<GridPos> = Vec::new();

    let start = GridPos::new(size - 1, size - 1);
    mask[start.row * dim + start.col] = true;
    extend_frontier(start, dim, &mask, &mut pending, &mut frontier);

    for _ in 1..size {
        let pick = rng.random_range(0..frontier.len());
        let pos = frontier.swap_remove(pick);
        mask[pos.row * dim + pos.col] = true;
        extend_frontier(pos, dim, &mask, &mut pending, &mut frontier);
    }

    let shape = PolyominoShape::new(dim, dim, mask);
    debug!(
        "grew polyomino: {} cells in a {}x{} box",
        shape.cell_count(),
        shape.bounds().height(),
        shape.bounds().width(),
    );
    shape
}

/// Adds the unfilled, not-yet-pending grid neighbors of `pos` to the frontier.
fn extend_frontier(
    pos: GridPos,
    dim: usize,
    mask: &[bool],
    pending: &mut [bool],
    frontier: &mut Vec<GridPos>,
) {
    let sides = [pos.left(), pos.above(), Some(pos.right()), Some(pos.below())];
    for side in sides.into_iter().flatten() {
        if side.row >= dim || side.col >= dim {
            continue;
        }
        let index = side.row * dim + side.col;
        if !mask[index] && !pending[index] {
            pending[index] = true;
            frontier.push(side);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    /// Breadth-first size of the connected component containing the first
    /// filled cell, using orthogonal adjacency.
    fn connected_count(filled: &HashSet<(usize, usize)>) -> usize {
        let Some(&start) = filled.iter().min() else {
            return 0;
        };
        let mut seen = HashSet::from([start]);
        let mut queue = vec![start];
        while let Some((row, col)) = queue.pop() {
            let mut push = |cell: (usize, usize)| {
                if filled.contains(&cell) && seen.insert(cell) {
                    queue.push(cell);
                }
            };
            if row > 0 {
                push((row - 1, col));
            }
            if col > 0 {
                push((row, col - 1));
            }
            push((row + 1, col));
            push((row, col + 1));
        }
        seen.len()
    }

    fn filled_set(shape: &PolyominoShape) -> HashSet<(usize, usize)> {
        shape.filled_cells().map(|pos| (pos.row, pos.col)).collect()
    }

    #[test]
    fn test_generated_regions_are_connected_and_sized() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        for size in [1, 4, 12, 50, 100] {
            let shape = generate(size, &mut rng);
            let filled = filled_set(&shape);
            let expected = if SIZE_RANGE.contains(&size) {
                size
            } else {
                DEFAULT_SIZE
            };
            assert_eq!(filled.len(), expected);
            assert_eq!(shape.cell_count(), filled.len());
            assert_eq!(connected_count(&filled), filled.len(), "size {size}");

            let bounds = shape.bounds();
            assert!(filled.iter().all(|&(row, col)| {
                bounds.contains(huelace_core::GridPos::new(row, col))
            }));
        }
    }

    #[test]
    fn test_out_of_range_sizes_clamp_to_default() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        assert_eq!(generate(0, &mut rng).cell_count(), DEFAULT_SIZE);
        assert_eq!(generate(101, &mut rng).cell_count(), DEFAULT_SIZE);
    }

    #[test]
    fn test_grid_dimensions_guarantee_fit() {
        let mut rng = Pcg64Mcg::seed_from_u64(9);
        let shape = generate(10, &mut rng);
        assert_eq!(shape.rows(), 19);
        assert_eq!(shape.cols(), 19);
        assert!(shape.bounds().height() <= 10);
        assert!(shape.bounds().width() <= 10);
    }

    #[test]
    fn test_same_seed_same_shape() {
        let first = generate(30, &mut Pcg64Mcg::seed_from_u64(5));
        let second = generate(30, &mut Pcg64Mcg::seed_from_u64(5));
        assert_eq!(first, second);
    }
}
