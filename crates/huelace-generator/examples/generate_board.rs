//! Example demonstrating polyform board generation and scrambling.
//!
//! Grows a random polyomino or polyiamond region, prints its clipped
//! bounding box as ASCII, then scrambles a board over it and reports the
//! result.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! cargo run --example generate_board -- --kind polyiamond --size 24
//! cargo run --example generate_board -- --seed 42 --colors 4
//! ```

use clap::{Parser, ValueEnum};
use huelace_core::{BoardState, ColorCount, GridPos, Topology};
use huelace_generator::{ScrambleOptions, polyiamond, polyomino, scramble};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Polyomino,
    Polyiamond,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Which polyform family to grow.
    #[arg(long, value_name = "KIND", default_value = "polyomino")]
    kind: Kind,

    /// Number of cells to grow.
    #[arg(long, value_name = "CELLS", default_value_t = 20)]
    size: usize,

    /// Number of colors to scramble with.
    #[arg(long, value_name = "COUNT", default_value_t = 2)]
    colors: u8,

    /// Seed for the random stream; omit for a random board.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => Pcg64Mcg::seed_from_u64(seed),
        None => Pcg64Mcg::from_rng(&mut rand::rng()),
    };

    let topology = match args.kind {
        Kind::Polyomino => Topology::Polyomino(polyomino::generate(args.size, &mut rng)),
        Kind::Polyiamond => Topology::Polyiamond(polyiamond::generate(args.size, &mut rng)),
    };

    println!("Shape ({} cells):", topology.cell_count());
    print_shape(&topology);
    println!();

    let Some(count) = ColorCount::new(args.colors) else {
        eprintln!("--colors must be between 2 and 9.");
        std::process::exit(1);
    };
    let mut board = BoardState::from_mask(&topology.activity_mask());
    scramble(&mut board, &topology, count, &mut rng, &ScrambleOptions::default());

    println!("Target / current (row-major over the bounding box):");
    print_colors(&topology, &board);
    println!();
    println!("Matched: {}", board.is_matched());
}

fn print_shape(topology: &Topology) {
    match topology {
        Topology::Polyomino(shape) => {
            for row in row_range(shape.bounds()) {
                let line: String = col_range(shape.bounds())
                    .map(|col| {
                        if shape.is_filled(GridPos::new(row, col)) {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect();
                println!("  {line}");
            }
        }
        Topology::Polyiamond(shape) => {
            for row in row_range(shape.bounds()) {
                let line: String = col_range(shape.bounds())
                    .map(|col| {
                        let pos = GridPos::new(row, col);
                        if !shape.is_filled(pos) {
                            '.'
                        } else if shape.points_up(pos) {
                            '^'
                        } else {
                            'v'
                        }
                    })
                    .collect();
                println!("  {line}");
            }
        }
        _ => unreachable!("only polyform boards are grown here"),
    }
}

fn print_colors(topology: &Topology, board: &BoardState) {
    let (bounds, cols) = match topology {
        Topology::Polyomino(shape) => (shape.bounds(), shape.cols()),
        Topology::Polyiamond(shape) => (shape.bounds(), shape.cols()),
        _ => unreachable!("only polyform boards are grown here"),
    };
    for row in row_range(bounds) {
        let render = |buffer: &huelace_core::StateBuffer| -> String {
            col_range(bounds)
                .map(|col| {
                    buffer
                        .color(row * cols + col)
                        .map_or('.', |color| char::from(b'0' + color.get()))
                })
                .collect()
        };
        println!("  {}   {}", render(board.target()), render(board.current()));
    }
}

fn row_range(bounds: huelace_core::BoundingBox) -> std::ops::RangeInclusive<usize> {
    bounds.min_row()..=bounds.max_row()
}

fn col_range(bounds: huelace_core::BoundingBox) -> std::ops::RangeInclusive<usize> {
    bounds.min_col()..=bounds.max_col()
}
