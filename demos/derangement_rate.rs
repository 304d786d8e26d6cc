//! Compare the observed derangement rate of shuffled boards with theory.
//!
//! For m = N² cells the probability that a uniform permutation is a
//! derangement is !m / m!, which converges to 1/e very quickly.
//!
//! Usage: cargo run --release --example derangement_rate -- [trials] [seed]

use derangement_sim::{Board, BoardSize};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;
use std::time::Instant;

const MAX_SIZE: usize = 6;

/// !m / m!, via the recurrence p(m) = p(m-1) + (-1)^m / m!.
fn derangement_probability(m: usize) -> f64 {
    let mut p = 0.0;
    let mut term = 1.0;
    for k in 0..=m {
        if k > 0 {
            term /= k as f64;
        }
        p += if k % 2 == 0 { term } else { -term };
    }
    p
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let trials: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    println!("=== Derangement Rate ===");
    println!("trials = {}, seed = {}", trials, seed);
    println!("1/e = {:.6}", (-1.0f64).exp());
    println!();
    println!("{:>4} {:>6} {:>10} {:>10} {:>8} {:>8}", "N", "cells", "observed", "expected", "z", "time");

    for size in 1..=MAX_SIZE {
        let board_size = match BoardSize::new(size) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };
        let start = Instant::now();
        let mut board = Board::new(board_size, ChaCha20Rng::seed_from_u64(seed + size as u64));

        let mut deranged = 0usize;
        for _ in 0..trials {
            board.shuffle();
            if board.is_deranged() {
                deranged += 1;
            }
        }

        let observed = deranged as f64 / trials as f64;
        let expected = derangement_probability(board_size.cells());
        let sd = (expected * (1.0 - expected) / trials as f64).sqrt();
        let z = if sd > 0.0 { (observed - expected) / sd } else { 0.0 };

        println!(
            "{:>4} {:>6} {:>10.6} {:>10.6} {:>8.2} {:>7.2}s",
            size,
            board_size.cells(),
            observed,
            expected,
            z,
            start.elapsed().as_secs_f64()
        );
    }
}
