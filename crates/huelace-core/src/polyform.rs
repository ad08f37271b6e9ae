//! Generated polyform board shapes.
//!
//! A polyform board is a connected region of unit squares (polyomino) or unit
//! triangles (polyiamond) grown at random on an allocation grid large enough
//! that the region can never reach the border. The shape types here hold the
//! outcome of that growth: the grid dimensions, the row-major activity mask,
//! the clipped bounding box, and the geometry needed to derive each cell's
//! neighbor set. The growth algorithm itself lives in `huelace-generator`.

/// A cell coordinate on a polyform allocation grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl GridPos {
    /// Creates a grid position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell one column to the left, if any.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        match self.col.checked_sub(1) {
            Some(col) => Some(Self::new(self.row, col)),
            None => None,
        }
    }

    /// The cell one column to the right.
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// The cell one row up, if any.
    #[must_use]
    pub const fn above(self) -> Option<Self> {
        match self.row.checked_sub(1) {
            Some(row) => Some(Self::new(row, self.col)),
            None => None,
        }
    }

    /// The cell one row down.
    #[must_use]
    pub const fn below(self) -> Self {
        Self::new(self.row + 1, self.col)
    }
}

/// The clipped bounds of a generated region: the smallest rectangle of grid
/// cells containing every filled cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
}

impl BoundingBox {
    /// Creates a bounding box covering a single cell.
    #[must_use]
    pub const fn of_cell(pos: GridPos) -> Self {
        Self {
            min_row: pos.row,
            min_col: pos.col,
            max_row: pos.row,
            max_col: pos.col,
        }
    }

    /// Grows the box to cover `pos`.
    pub const fn expand(&mut self, pos: GridPos) {
        if pos.row < self.min_row {
            self.min_row = pos.row;
        }
        if pos.row > self.max_row {
            self.max_row = pos.row;
        }
        if pos.col < self.min_col {
            self.min_col = pos.col;
        }
        if pos.col > self.max_col {
            self.max_col = pos.col;
        }
    }

    /// Returns whether `pos` lies inside the box.
    #[must_use]
    pub const fn contains(&self, pos: GridPos) -> bool {
        pos.row >= self.min_row
            && pos.row <= self.max_row
            && pos.col >= self.min_col
            && pos.col <= self.max_col
    }

    /// The top-left cell of the box.
    #[must_use]
    pub const fn top_left(&self) -> GridPos {
        GridPos::new(self.min_row, self.min_col)
    }

    /// The first row covered by the box.
    #[must_use]
    pub const fn min_row(&self) -> usize {
        self.min_row
    }

    /// The last row covered by the box.
    #[must_use]
    pub const fn max_row(&self) -> usize {
        self.max_row
    }

    /// The first column covered by the box.
    #[must_use]
    pub const fn min_col(&self) -> usize {
        self.min_col
    }

    /// The last column covered by the box.
    #[must_use]
    pub const fn max_col(&self) -> usize {
        self.max_col
    }

    /// The number of rows the box spans.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    /// The number of columns the box spans.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    /// Iterates over every cell of the box in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + use<> {
        let (rows, cols) = (self.min_row..=self.max_row, self.min_col..=self.max_col);
        rows.flat_map(move |row| cols.clone().map(move |col| GridPos::new(row, col)))
    }
}

/// Shared shape data: allocation grid dimensions, activity mask, bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ShapeGrid {
    rows: usize,
    cols: usize,
    mask: Vec<bool>,
    bounds: BoundingBox,
    cell_count: usize,
}

impl ShapeGrid {
    fn new(rows: usize, cols: usize, mask: Vec<bool>) -> Self {
        assert_eq!(mask.len(), rows * cols, "mask does not cover the grid");
        let mut filled = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then(|| GridPos::new(i / cols, i % cols)));
        let first = filled.next().expect("shape has at least one filled cell");
        let mut bounds = BoundingBox::of_cell(first);
        let mut cell_count = 1;
        for pos in filled {
            bounds.expand(pos);
            cell_count += 1;
        }
        Self {
            rows,
            cols,
            mask,
            bounds,
            cell_count,
        }
    }

    fn index(&self, pos: GridPos) -> usize {
        pos.row * self.cols + pos.col
    }

    fn is_filled(&self, pos: GridPos) -> bool {
        pos.row < self.rows && pos.col < self.cols && self.mask[self.index(pos)]
    }
}

macro_rules! shape_accessors {
    () => {
        /// The number of rows of the allocation grid.
        #[must_use]
        pub fn rows(&self) -> usize {
            self.grid.rows
        }

        /// The number of columns of the allocation grid.
        #[must_use]
        pub fn cols(&self) -> usize {
            self.grid.cols
        }

        /// The total number of grid slots (`rows * cols`), filled or not.
        ///
        /// State buffers for this shape have exactly this many slots.
        #[must_use]
        pub fn slot_count(&self) -> usize {
            self.grid.rows * self.grid.cols
        }

        /// The number of filled cells in the region.
        #[must_use]
        pub fn cell_count(&self) -> usize {
            self.grid.cell_count
        }

        /// The clipped bounding box of the region.
        #[must_use]
        pub fn bounds(&self) -> BoundingBox {
            self.grid.bounds
        }

        /// The row-major activity mask over the allocation grid.
        #[must_use]
        pub fn mask(&self) -> &[bool] {
            &self.grid.mask
        }

        /// Converts a grid position to its flat slot index.
        #[must_use]
        pub fn index(&self, pos: GridPos) -> usize {
            self.grid.index(pos)
        }

        /// Converts a flat slot index back to its grid position.
        #[must_use]
        pub fn pos(&self, index: usize) -> GridPos {
            GridPos::new(index / self.grid.cols, index % self.grid.cols)
        }

        /// Returns whether `pos` is a filled cell of the region.
        ///
        /// Positions outside the allocation grid are never filled.
        #[must_use]
        pub fn is_filled(&self, pos: GridPos) -> bool {
            self.grid.is_filled(pos)
        }

        /// Iterates over the filled cells inside the bounding box, in
        /// row-major order.
        pub fn filled_cells(&self) -> impl Iterator<Item = GridPos> + '_ {
            self.grid
                .bounds
                .cells()
                .filter(move |&pos| self.grid.is_filled(pos))
        }
    };
}

/// A randomly grown connected region of unit squares.
///
/// Cells are adjacent to their up/down/left/right grid neighbors. The
/// allocation grid is `(2n - 1) x (2n - 1)` for a region of `n` cells, grown
/// from the center, so the region never reaches the border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyominoShape {
    grid: ShapeGrid,
}

impl PolyominoShape {
    /// Creates a shape from its allocation grid and row-major activity mask.
    ///
    /// # Panics
    ///
    /// Panics if the mask length is not `rows * cols` or no cell is filled.
    #[must_use]
    pub fn new(rows: usize, cols: usize, mask: Vec<bool>) -> Self {
        Self {
            grid: ShapeGrid::new(rows, cols, mask),
        }
    }

    shape_accessors!();

    /// The clicked cell together with its filled orthogonal neighbors, as
    /// flat slot indices.
    ///
    /// Neighbors outside the grid or outside the region are skipped.
    #[must_use]
    pub fn neighborhood(&self, pos: GridPos) -> tinyvec::ArrayVec<[usize; 5]> {
        let mut cells = tinyvec::ArrayVec::new();
        cells.push(self.grid.index(pos));
        let sides = [pos.left(), pos.above(), Some(pos.right()), Some(pos.below())];
        for side in sides.into_iter().flatten() {
            if self.grid.is_filled(side) {
                cells.push(self.grid.index(side));
            }
        }
        cells
    }
}

/// A randomly grown connected region of unit triangles.
///
/// Triangles alternate between pointing up and pointing down; a cell shares
/// edges with its left and right grid neighbors and with exactly one vertical
/// neighbor, below for up-pointing cells and above for down-pointing ones.
/// Orientation follows a parity rule anchored at the generation start cell,
/// which always points up: two cells point the same way exactly when their
/// `row + col` parities agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyiamondShape {
    grid: ShapeGrid,
    origin_up: bool,
}

impl PolyiamondShape {
    /// Creates a shape from its allocation grid, row-major activity mask, and
    /// the orientation of grid cell `(0, 0)`.
    ///
    /// # Panics
    ///
    /// Panics if the mask length is not `rows * cols` or no cell is filled.
    #[must_use]
    pub fn new(rows: usize, cols: usize, mask: Vec<bool>, origin_up: bool) -> Self {
        Self {
            grid: ShapeGrid::new(rows, cols, mask),
            origin_up,
        }
    }

    shape_accessors!();

    /// Returns whether the triangle at `pos` points up.
    #[must_use]
    pub fn points_up(&self, pos: GridPos) -> bool {
        ((pos.row + pos.col) % 2 == 0) == self.origin_up
    }

    /// The orientation of the bounding box's top-left cell, for layers that
    /// render the clipped region.
    #[must_use]
    pub fn top_left_points_up(&self) -> bool {
        self.points_up(self.grid.bounds.top_left())
    }

    /// The clicked cell, its left and right neighbors, and its single
    /// vertical neighbor, as flat slot indices.
    ///
    /// The vertical neighbor is below the cell when it points up and above it
    /// when it points down. Neighbors outside the region are skipped.
    #[must_use]
    pub fn neighborhood(&self, pos: GridPos) -> tinyvec::ArrayVec<[usize; 4]> {
        let mut cells = tinyvec::ArrayVec::new();
        cells.push(self.grid.index(pos));
        let vertical = if self.points_up(pos) {
            Some(pos.below())
        } else {
            pos.above()
        };
        for side in [pos.left(), Some(pos.right()), vertical].into_iter().flatten() {
            if self.grid.is_filled(side) {
                cells.push(self.grid.index(side));
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(rows: usize, cols: usize, filled: &[(usize, usize)]) -> Vec<bool> {
        let mut mask = vec![false; rows * cols];
        for &(row, col) in filled {
            mask[row * cols + col] = true;
        }
        mask
    }

    #[test]
    fn test_bounds_and_counts() {
        let shape = PolyominoShape::new(5, 5, mask(5, 5, &[(2, 2), (2, 3), (3, 2)]));
        assert_eq!(shape.cell_count(), 3);
        assert_eq!(shape.bounds().height(), 2);
        assert_eq!(shape.bounds().width(), 2);
        assert_eq!(shape.bounds().top_left(), GridPos::new(2, 2));
        assert_eq!(shape.filled_cells().count(), 3);
    }

    #[test]
    fn test_polyomino_neighborhood_skips_unfilled() {
        let shape = PolyominoShape::new(5, 5, mask(5, 5, &[(2, 2), (2, 3), (3, 2)]));
        let cells = shape.neighborhood(GridPos::new(2, 2));
        let expected = [
            shape.index(GridPos::new(2, 2)),
            shape.index(GridPos::new(2, 3)),
            shape.index(GridPos::new(3, 2)),
        ];
        assert_eq!(cells.len(), 3);
        for index in expected {
            assert!(cells.contains(&index));
        }
    }

    #[test]
    fn test_polyomino_neighborhood_at_grid_border() {
        let shape = PolyominoShape::new(2, 2, mask(2, 2, &[(0, 0), (0, 1)]));
        let cells = shape.neighborhood(GridPos::new(0, 0));
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn test_polyiamond_orientation_parity() {
        // Origin up: orientation alternates along rows and columns.
        let shape = PolyiamondShape::new(2, 3, mask(2, 3, &[(0, 0), (0, 1), (0, 2), (1, 1)]), true);
        assert!(shape.points_up(GridPos::new(0, 0)));
        assert!(!shape.points_up(GridPos::new(0, 1)));
        assert!(shape.points_up(GridPos::new(0, 2)));
        assert!(!shape.points_up(GridPos::new(1, 0)));
        assert!(shape.points_up(GridPos::new(1, 1)));
    }

    #[test]
    fn test_polyiamond_vertical_neighbor_follows_orientation() {
        let shape = PolyiamondShape::new(2, 3, mask(2, 3, &[(0, 0), (0, 1), (0, 2), (1, 1)]), true);

        // (0, 1) points down: its vertical neighbor is above the grid, so
        // only itself and its left/right neighbors remain, never (1, 1).
        let down_cell = shape.neighborhood(GridPos::new(0, 1));
        assert_eq!(down_cell.len(), 3);
        assert!(!down_cell.contains(&shape.index(GridPos::new(1, 1))));

        // (1, 1) points up, so it connects downward; row 2 does not exist
        // and its horizontal neighbors are unfilled, leaving just itself.
        let up_cell = shape.neighborhood(GridPos::new(1, 1));
        assert_eq!(up_cell.len(), 1);
    }

    #[test]
    fn test_top_left_orientation() {
        let shape = PolyiamondShape::new(3, 3, mask(3, 3, &[(1, 1), (1, 2)]), true);
        // Bounding box top-left is (1, 1), parity even, same as origin.
        assert!(shape.top_left_points_up());
    }
}
