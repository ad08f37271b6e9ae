//! Random polyiamond growth on a triangular grid.

use std::ops::RangeInclusive;

use huelace_core::{GridPos, PolyiamondShape};
use log::debug;
use rand::Rng;
use rand::RngExt;

/// Sizes the polyiamond puzzle may be grown to.
pub const SIZE_RANGE: RangeInclusive<usize> = 4..=100;

/// Fallback size when a request falls outside [`SIZE_RANGE`].
pub const DEFAULT_SIZE: usize = 4;

/// Grows a random connected region of `size` unit triangles.
///
/// The allocation grid has `size` rows and `2 * size - 1` columns; growth
/// starts from an up-pointing triangle in the center column, halfway down,
/// which leaves room on every side. Orientation follows the grid parity
/// rule: a triangle points the same way as the start cell exactly when its
/// `row + col` parity matches the start's. Cells are adjacent to their left
/// and right grid neighbors plus one vertical neighbor, below for up-pointing
/// triangles and above for down-pointing ones.
///
/// Growth itself is the same frontier expansion as the polyomino: `size - 1`
/// uniformly random picks from the set of unfilled cells edge-adjacent to
/// the region.
///
/// A `size` outside [`SIZE_RANGE`] is clamped to [`DEFAULT_SIZE`]; callers
/// wanting a hard error must validate beforehand.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> PolyiamondShape {
    let size = if SIZE_RANGE.contains(&size) {
        size
    } else {
        DEFAULT_SIZE
    };
    let rows = size;
    let cols = 2 * size - 1;
    let mut mask = vec![false; rows * cols];
    let mut pending = vec![false; rows * cols];
    let mut frontier: Vec<GridPos> = Vec::new();

    let start = GridPos::new(size / 2, size - 1);
    let up_parity = (start.row + start.col) % 2;
    mask[start.row * cols + start.col] = true;
    extend_frontier(start, rows, cols, up_parity, &mask, &mut pending, &mut frontier);

    for _ in 1..size {
        let pick = rng.random_range(0..frontier.len());
        let pos = frontier.swap_remove(pick);
        mask[pos.row * cols + pos.col] = true;
        extend_frontier(pos, rows, cols, up_parity, &mask, &mut pending, &mut frontier);
    }

    let origin_up = up_parity == 0;
    let shape = PolyiamondShape::new(rows, cols, mask, origin_up);
    debug!(
        "grew polyiamond: {} cells in a {}x{} box, top-left {}",
        shape.cell_count(),
        shape.bounds().height(),
        shape.bounds().width(),
        if shape.top_left_points_up() { "up" } else { "down" },
    );
    shape
}

/// Adds the unfilled, not-yet-pending edge neighbors of `pos` to the
/// frontier: left, right, and the vertical neighbor chosen by orientation.
fn extend_frontier(
    pos: GridPos,
    rows: usize,
    cols: usize,
    up_parity: usize,
    mask: &[bool],
    pending: &mut [bool],
    frontier: &mut Vec<GridPos>,
) {
    let points_up = (pos.row + pos.col) % 2 == up_parity;
    let vertical = if points_up {
        Some(pos.below())
    } else {
        pos.above()
    };
    for side in [pos.left(), Some(pos.right()), vertical].into_iter().flatten() {
        if side.row >= rows || side.col >= cols {
            continue;
        }
        let index = side.row * cols + side.col;
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

    fn filled_set(shape: &PolyiamondShape) -> HashSet<(usize, usize)> {
        shape.filled_cells().map(|pos| (pos.row, pos.col)).collect()
    }

    /// Breadth-first size of the connected component containing the first
    /// filled cell, using triangle edge adjacency.
    fn connected_count(shape: &PolyiamondShape, filled: &HashSet<(usize, usize)>) -> usize {
        let Some(&start) = filled.iter().min() else {
            return 0;
        };
        let mut seen = HashSet::from([start]);
        let mut queue = vec![start];
        while let Some((row, col)) = queue.pop() {
            let pos = GridPos::new(row, col);
            let vertical = if shape.points_up(pos) {
                Some(pos.below())
            } else {
                pos.above()
            };
            for side in [pos.left(), Some(pos.right()), vertical].into_iter().flatten() {
                let cell = (side.row, side.col);
                if filled.contains(&cell) && seen.insert(cell) {
                    queue.push(cell);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn test_generated_regions_are_connected_and_sized() {
        let mut rng = Pcg64Mcg::seed_from_u64(24);
        for size in [4, 7, 20, 100] {
            let shape = generate(size, &mut rng);
            let filled = filled_set(&shape);
            assert_eq!(filled.len(), size);
            assert_eq!(connected_count(&shape, &filled), size, "size {size}");
        }
    }

    #[test]
    fn test_out_of_range_sizes_clamp_to_default() {
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        assert_eq!(generate(3, &mut rng).cell_count(), DEFAULT_SIZE);
        assert_eq!(generate(500, &mut rng).cell_count(), DEFAULT_SIZE);
    }

    #[test]
    fn test_start_cell_points_up() {
        for size in [4, 5, 6, 7] {
            let mut rng = Pcg64Mcg::seed_from_u64(3);
            let shape = generate(size, &mut rng);
            let start = GridPos::new(size / 2, size - 1);
            assert!(shape.is_filled(start), "size {size}");
            assert!(shape.points_up(start), "size {size}");
        }
    }

    #[test]
    fn test_size_four_orientations_follow_parity() {
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let shape = generate(4, &mut rng);
        // Start is (2, 3); odd row+col sums point up, even sums point down.
        for pos in shape.filled_cells() {
            let expected_up = (pos.row + pos.col) % 2 == 1;
            assert_eq!(shape.points_up(pos), expected_up, "{pos:?}");
        }
    }

    #[test]
    fn test_grid_dimensions() {
        let mut rng = Pcg64Mcg::seed_from_u64(8);
        let shape = generate(10, &mut rng);
        assert_eq!(shape.rows(), 10);
        assert_eq!(shape.cols(), 19);
    }
}
