//! Brute-force searches for the smallest value satisfying a predicate.

use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use rayon::prelude::*;

/// Smallest candidate in `candidates` for which `predicate` holds, using one
/// worker per rayon thread.
pub fn min_satisfying<P>(candidates: Range<u64>, predicate: P) -> Option<u64>
where
    P: Fn(u64) -> bool + Sync,
{
    min_satisfying_with(rayon::current_num_threads(), candidates, predicate)
}

/// Like [`min_satisfying`] with an explicit worker count.
///
/// Workers claim candidates in increasing order from a shared counter and stop
/// at their first hit, or once every remaining candidate is larger than the
/// best hit so far. Which worker hits first is unspecified; the smallest hit
/// wins.
pub fn min_satisfying_with<P>(workers: usize, candidates: Range<u64>, predicate: P) -> Option<u64>
where
    P: Fn(u64) -> bool + Sync,
{
    let workers = workers.max(1);
    let end = candidates.end;
    let next = AtomicU64::new(candidates.start);
    let best = AtomicU64::new(u64::MAX);

    let found = (0..workers)
        .into_par_iter()
        .filter_map(|_| loop {
            let candidate = next
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| {
                    // Lazy: `c + 1` overflows once the counter sits at u64::MAX.
                    (c < end).then(|| c + 1)
                })
                .ok()?;
            if candidate > best.load(Ordering::Relaxed) {
                return None;
            }
            if predicate(candidate) {
                best.fetch_min(candidate, Ordering::Relaxed);
                return Some(candidate);
            }
        })
        .min();

    debug!("{workers} workers searched {candidates:?}, smallest match {found:?}");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn finds_the_smallest_match() {
        assert_eq!(min_satisfying(0..10_000, |n| n * n > 5_000), Some(71));
        assert_eq!(min_satisfying(100..10_000, |n| n % 97 == 0), Some(194));
    }

    #[test]
    fn worker_count_does_not_change_the_answer() {
        let predicate = |n: u64| n % 7 == 3 && n % 11 == 5 && n > 400;
        let expected = (0..5_000).find(|&n| predicate(n));
        for workers in [1, 2, 3, 8, 32] {
            assert_eq!(min_satisfying_with(workers, 0..5_000, predicate), expected);
        }
    }

    #[test]
    fn no_match_and_empty_range() {
        assert_eq!(min_satisfying(0..1_000, |_| false), None);
        assert_eq!(min_satisfying(10..10, |_| true), None);
        assert_eq!(min_satisfying_with(0, 5..6, |_| true), Some(5));
    }

    #[test]
    fn range_end_at_type_max_does_not_wrap() {
        let start = u64::MAX - 4;
        assert_eq!(min_satisfying(start..u64::MAX, |_| false), None);
        assert_eq!(
            min_satisfying(start..u64::MAX, |n| n == u64::MAX - 1),
            Some(u64::MAX - 1)
        );
    }

    #[test]
    fn each_candidate_is_tested_at_most_once() {
        let calls = AtomicUsize::new(0);
        let found = min_satisfying_with(4, 0..1_000, |_| {
            calls.fetch_add(1, Ordering::Relaxed);
            false
        });
        assert_eq!(found, None);
        assert_eq!(calls.load(Ordering::Relaxed), 1_000);
    }
}
