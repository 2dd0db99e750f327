//! Input patterns for exercising sorting algorithms. Limited to `i32`
//! values; the battery widens the type where it needs to.

use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::prelude::*;

use zipf::ZipfDistribution;

/// The process-wide pattern seed. Drawn once per process so a failure
/// can be re-run against the same inputs; set `OVERRIDE_SEED=<u64>` to
/// reproduce a reported failure exactly.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(val) => u64::from_str(&val).expect("OVERRIDE_SEED must be a u64"),
        Err(_) => thread_rng().gen(),
    })
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Heavily duplicated values, per https://en.wikipedia.org/wiki/Zipf's_law
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Random values with the first `sorted_percent` of the slice presorted.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// Random values arranged into `saw_count` runs, each sorted ascending
/// or descending at random.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let mut vals = random(len);
    let chunk_size = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunk_size.max(1)) {
        if rng.gen::<bool>() {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&val| std::cmp::Reverse(val));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);
    let (first_half, second_half) = vals.split_at_mut(len / 2);

    first_half.sort_unstable();
    second_half.sort_unstable_by_key(|&val| std::cmp::Reverse(val));

    vals
}

fn new_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}
