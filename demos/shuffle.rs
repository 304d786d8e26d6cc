//! Shuffle a board and print it, one row per line.
//!
//! Usage: cargo run --example shuffle -- [--size N] [--seed S] [--rounds K]
//!
//! Example:
//!   RUST_LOG=debug cargo run --example shuffle -- --size 4 --seed 42 --rounds 3

use clap::Parser;
use derangement_sim::{Board, BoardSize};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[derive(Parser, Debug)]
#[command(about = "Shuffle an N x N board and report whether it is a derangement")]
struct Args {
    /// Board side length.
    #[arg(short, long, default_value_t = BoardSize::default())]
    size: BoardSize,

    /// RNG seed. A random seed is drawn if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of shuffles to print.
    #[arg(short, long, default_value_t = 1)]
    rounds: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    println!("size = {}, seed = {}", args.size, seed);

    let mut board = Board::new(args.size, ChaCha20Rng::seed_from_u64(seed));
    for round in 0..args.rounds {
        if round > 0 {
            board.shuffle();
        }
        println!();
        print_board(&board);
    }
}

fn print_board<R: Rng>(board: &Board<R>) {
    let n = board.size().get();
    let width = board.size().cells().to_string().len();
    let fixed = board.fixed_points();

    for row in board.arrangement().chunks(n) {
        let line: Vec<String> = row
            .iter()
            .map(|&v| format!("{:>width$}", v + 1, width = width))
            .collect();
        println!("{}", line.join(" "));
    }

    if board.is_deranged() {
        println!("This is a derangement");
    } else {
        let labels: Vec<String> = fixed.iter().map(|&s| (s + 1).to_string()).collect();
        println!("This is not a derangement (fixed: {})", labels.join(", "));
    }
}
