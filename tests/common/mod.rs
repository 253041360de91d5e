//! Shared test utilities

#![allow(dead_code)]

use assert_cmd::Command;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a command for the hdcv binary with logging env cleared
pub fn hdcv() -> Command {
    let mut cmd = Command::cargo_bin("hdcv").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Deterministic spread of i64 values, including the extremes and zero
pub fn sample_values(seed: u64, count: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values = vec![0, 1, -1, i64::MAX, i64::MIN, i64::MIN + 1];
    values.extend((0..count).map(|_| rng.gen::<i64>()));
    // Small magnitudes exercise short outputs
    values.extend((0..count).map(|_| rng.gen_range(-1000i64..=1000)));
    values
}

/// Every supported radix
pub fn all_radices() -> impl Iterator<Item = u32> {
    2..=36
}
