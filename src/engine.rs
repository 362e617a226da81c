//! The odd-only elimination sieve.
//!
//! The candidate sequence starts as `2, 3, 5, 7, ...` (every odd number up
//! to the bound) and is filtered in place: each confirmed prime at the
//! front removes its multiples from everything after it. Once the prime
//! under the cursor exceeds `ceil(sqrt(upto))`, whatever remains is prime.

use tracing::{debug, trace};

use crate::bound::check_bound;
use crate::error::Error;
use crate::profiler::profile;

/// Every prime in `[2, upto]`, ascending.
pub fn sieve(upto: i32) -> Result<Vec<i32>, Error> {
    let upto = check_bound(upto)?;
    let stop_at = cutoff(upto);
    debug!(upto, stop_at, "sieving");

    let (candidates, _) = profile("build", || candidates(upto));
    let mut candidates = candidates?;
    debug!(candidates = candidates.len(), "built candidate sequence");

    profile("sieve", || eliminate(&mut candidates, stop_at));
    debug!(primes = candidates.len(), "sieve finished");

    Ok(candidates)
}

/// Largest divisor that has to be tried.
pub fn cutoff(upto: i32) -> i32 {
    (upto as f64).sqrt().ceil() as i32
}

/// Number of entries in the initial candidate sequence. `upto` must already
/// be within bounds.
fn candidate_count(upto: i32) -> usize {
    ((upto - 1) / 2 + 1) as usize
}

/// `[2, 3, 5, 7, ..]` up to the largest odd number not above `upto`.
pub fn candidates(upto: i32) -> Result<Vec<i32>, Error> {
    let upto = check_bound(upto)?;
    let len = candidate_count(upto);

    let mut res = reserve(len)?;
    res.push(2);
    res.extend((3..=upto).step_by(2));

    debug_assert_eq!(res.len(), len);
    Ok(res)
}

/// Empty vector with room for exactly `len` values. Running out of memory
/// shows up as [`Error::Allocation`] instead of an abort.
fn reserve(len: usize) -> Result<Vec<i32>, Error> {
    let mut res = Vec::new();
    res.try_reserve_exact(len).map_err(|source| Error::Allocation {
        candidates: len,
        source,
    })?;
    Ok(res)
}

/// Removes, in place, every value divisible by an earlier entry that is no
/// larger than `stop_at`. Entries before the cursor are never touched again.
pub fn eliminate(candidates: &mut Vec<i32>, stop_at: i32) {
    let mut pos = 0;
    while pos < candidates.len() {
        let divisor = candidates[pos];
        if divisor > stop_at {
            break;
        }

        let before = candidates.len();
        retain_after(candidates, pos + 1, |value| value % divisor != 0);
        trace!(divisor, removed = before - candidates.len());

        pos += 1;
    }
}

/// Stable in-place filter over `list[start..]`. The prefix is left alone
/// and the vector is truncated to the survivors.
pub fn retain_after<T: Copy>(list: &mut Vec<T>, start: usize, mut keep: impl FnMut(T) -> bool) {
    let mut write = start;
    for read in start..list.len() {
        let value = list[read];
        if keep(value) {
            list[write] = value;
            write += 1;
        }
    }
    list.truncate(write);
}
