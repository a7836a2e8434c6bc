//! Input generators for the sort tests and benchmarks.
//!
//! All random generators draw from a `StdRng` seeded by [`random_init_seed`]. Tests keep that
//! seed fixed for the whole process and print it, so a failing input can be regenerated.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Uniformly random `i32` values over the full range.
pub fn random(size: usize) -> Vec<i32> {
    let mut rng = seeded_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Uniformly random values drawn from `range`, e.g. `0..16` for many duplicates.
pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    seeded_rng().sample_iter(dist).take(size).collect()
}

/// Lowercase words of 1 to 12 letters, duplicates likely for larger sizes.
pub fn random_words(size: usize) -> Vec<String> {
    let mut rng = seeded_rng();
    let letters = Uniform::new_inclusive(b'a', b'z');

    (0..size)
        .map(|_| {
            let word_len = rng.gen_range(1..=12);
            (&mut rng)
                .sample_iter(letters)
                .take(word_len)
                .map(char::from)
                .collect()
        })
        .collect()
}

/// Zero padded decimal strings whose lexicographic order matches the numeric order of `vals`.
pub fn ordered_strings(vals: Vec<i32>) -> Vec<String> {
    vals.into_iter()
        .map(|val| format!("{:010}", val as i64 - i32::MIN as i64))
        .collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    ascending(size).into_iter().rev().collect()
}

/// Random values cut into `run_count` runs of roughly equal length, each run sorted ascending or
/// descending at random.
pub fn saw_mixed(size: usize, run_count: usize) -> Vec<i32> {
    let mut vals = random(size);
    if size == 0 {
        return vals;
    }

    let run_len = (size / run_count.max(1)).max(1);
    let mut rng = seeded_rng();

    for run in vals.chunks_mut(run_len) {
        run.sort_unstable();
        if rng.gen::<bool>() {
            run.reverse();
        }
    }

    vals
}

/// Ascending first half, descending second half.
pub fn pipe_organ(size: usize) -> Vec<i32> {
    let mut vals = random(size);
    let (rise, fall) = vals.split_at_mut(size / 2);

    rise.sort_unstable();
    fall.sort_unstable_by(|a, b| b.cmp(a));

    vals
}

/// Every call to [`random_init_seed`] draws a new seed from now on. Benchmarks want that, tests
/// don't.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    static FIXED_SEED: OnceCell<u64> = OnceCell::new();

    if USE_FIXED_SEED.load(Ordering::Acquire) {
        *FIXED_SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
