//! Timing harness for the target-sum strategies.
//!
//! Builds a 100x100 empty grid and a pool of 1..=10000, then times one
//! fill-and-check run per strategy.

use std::time::Instant;

use magic_square::check::{Check, Clean, Compact, Iterative};
use magic_square::{fill_matrix, Grid, Pool, Sum};

const SIDE: usize = 100;

fn time_run(name: &str, check: &dyn Check, grid: &Grid, pool: &Pool, target: Sum) {
    let start = Instant::now();
    let verdict = match fill_matrix(grid, pool, target, check) {
        Some(_) => "accepted",
        None => "rejected",
    };
    println!("{}: {} in {:?}", name, verdict, start.elapsed());
}

fn main() {
    let grid = Grid::empty(SIDE);
    let pool = Pool::from(1..=(SIDE * SIDE) as i32);
    let target = pool.magic_target(SIDE).expect("pool total divides by side");

    time_run("iterative", &Iterative, &grid, &pool, target);
    time_run("compact", &Compact, &grid, &pool, target);
    time_run("clean", &Clean, &grid, &pool, target);
}
