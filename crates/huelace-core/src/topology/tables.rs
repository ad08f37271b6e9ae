//! Static neighbor tables for the fixed-shape puzzles.
//!
//! Each table lists, per clickable region, the cells advanced by a click on
//! that region. The tables are symmetric: whenever clicking `i` advances `j`,
//! clicking `j` advances `i`. Every row also contains its own region, with one
//! deliberate exception: the triforce center (region 0) advances only the
//! three outer triangles.

use super::FixedLayout;

/// Four triangles: a center triangle surrounded by top, left, and right.
pub static TRIFORCE: FixedLayout = FixedLayout {
    name: "triforce",
    neighbors: &[
        &[1, 2, 3], // center
        &[0, 1],    // top
        &[0, 2],    // left
        &[0, 3],    // right
    ],
};

/// A 2x2 block of squares; each click advances all but the diagonal square.
pub static FOURSQUARE: FixedLayout = FixedLayout {
    name: "foursquare",
    neighbors: &[
        &[0, 1, 3], // top left
        &[0, 1, 2], // top right
        &[1, 2, 3], // bottom right
        &[0, 2, 3], // bottom left
    ],
};

/// Six triangles sharing a center vertex; a click advances the triangle, its
/// two ring neighbors, and the opposite triangle.
pub static HEXAGON: FixedLayout = FixedLayout {
    name: "hexagon",
    neighbors: &[
        &[0, 1, 3, 5],
        &[1, 0, 2, 4],
        &[2, 1, 3, 5],
        &[3, 0, 2, 4],
        &[4, 1, 3, 5],
        &[5, 0, 2, 4],
    ],
};

/// A hexagram: six points (0-5) interleaved with six inner wedges (6-11).
/// Wedge `6 + k` sits between points `k` and `k + 1`; a point advances itself
/// and its flanking wedges, a wedge additionally reaches the adjacent wedges.
pub static STAR: FixedLayout = FixedLayout {
    name: "star",
    neighbors: &[
        &[0, 11, 6],
        &[1, 6, 7],
        &[2, 7, 8],
        &[3, 8, 9],
        &[4, 9, 10],
        &[5, 10, 11],
        &[6, 0, 1, 11, 7],
        &[7, 1, 2, 6, 8],
        &[8, 2, 3, 7, 9],
        &[9, 3, 4, 8, 10],
        &[10, 4, 5, 9, 11],
        &[11, 5, 0, 10, 6],
    ],
};

/// Twenty-four cells tiling a square with diamonds around its rim.
pub static SQUAREDIAMOND: FixedLayout = FixedLayout {
    name: "squarediamond",
    neighbors: &[
        &[0, 1, 11],
        &[1, 0, 2],
        &[2, 1, 3, 9],
        &[3, 2, 4, 8],
        &[4, 3, 5],
        &[5, 4, 6],
        &[6, 5, 7],
        &[7, 6, 8, 16],
        &[8, 3, 7, 9, 15],
        &[9, 2, 8, 10, 14],
        &[10, 9, 11, 13],
        &[11, 0, 10],
        &[12, 13, 23],
        &[13, 10, 12, 14],
        &[14, 9, 13, 15, 21],
        &[15, 8, 14, 16, 20],
        &[16, 7, 15, 17],
        &[17, 16, 18],
        &[18, 17, 19],
        &[19, 18, 20],
        &[20, 15, 19, 21],
        &[21, 14, 20, 22],
        &[22, 21, 23],
        &[23, 12, 22],
    ],
};

/// A twenty-four cell patch of the Ammann-Beenker tiling (squares and
/// rhombi around an octagonal center).
pub static AMMANN_BEENKER: FixedLayout = FixedLayout {
    name: "ammann-beenker",
    neighbors: &[
        &[0, 2, 15, 16, 17],
        &[1, 2, 3, 17, 18],
        &[0, 1, 2],
        &[1, 3, 4],
        &[3, 4, 6, 18, 19],
        &[5, 6, 8, 19, 20],
        &[4, 5, 6],
        &[7, 8, 10, 20, 21],
        &[5, 7, 8],
        &[9, 10, 12, 21, 22],
        &[7, 9, 10],
        &[11, 12, 14, 22, 23],
        &[9, 11, 12],
        &[13, 14, 15, 16, 23],
        &[11, 13, 14],
        &[0, 13, 15],
        &[0, 13, 16, 17, 23],
        &[0, 1, 16, 17, 18],
        &[1, 4, 17, 18, 19],
        &[4, 5, 18, 19, 20],
        &[5, 7, 19, 20, 21],
        &[7, 9, 20, 21, 22],
        &[9, 11, 21, 22, 23],
        &[11, 13, 16, 22, 23],
    ],
};

/// All fixed layouts, in registry order.
pub static ALL: [&FixedLayout; 6] = [
    &TRIFORCE,
    &FOURSQUARE,
    &HEXAGON,
    &STAR,
    &SQUAREDIAMOND,
    &AMMANN_BEENKER,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_non_empty_and_in_range() {
        for layout in ALL {
            let cells = layout.neighbors.len();
            for row in layout.neighbors {
                assert!(!row.is_empty(), "{}: empty row", layout.name);
                assert!(
                    row.iter().all(|&n| n < cells),
                    "{}: neighbor out of range",
                    layout.name
                );
            }
        }
    }

    #[test]
    fn test_tables_are_symmetric() {
        for layout in ALL {
            for (i, row) in layout.neighbors.iter().enumerate() {
                for &j in *row {
                    assert!(
                        layout.neighbors[j].contains(&i),
                        "{}: {i} affects {j} but not the reverse",
                        layout.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_rows_contain_their_region() {
        for layout in ALL {
            for (i, row) in layout.neighbors.iter().enumerate() {
                if layout.name == "triforce" && i == 0 {
                    // The center triangle advances only the outer three.
                    assert!(!row.contains(&i));
                    continue;
                }
                assert!(row.contains(&i), "{}: row {i} misses itself", layout.name);
            }
        }
    }

    #[test]
    fn test_rows_have_no_duplicates() {
        for layout in ALL {
            for (i, row) in layout.neighbors.iter().enumerate() {
                let mut seen = row.to_vec();
                seen.sort_unstable();
                seen.dedup();
                assert_eq!(seen.len(), row.len(), "{}: row {i} repeats", layout.name);
            }
        }
    }
}
