use itertools::Itertools;
use num::Integer;

pub use num::integer::{gcd, lcm};

/// Least common multiple of every value, `None` for an empty input.
pub fn lcm_all<T, I>(values: I) -> Option<T>
where
    T: Integer,
    I: IntoIterator<Item = T>,
{
    values.into_iter().reduce(|a, b| a.lcm(&b))
}

/// Every unordered pair of items exactly once, as `(earlier, later)` in
/// lexicographic order of positions.
pub fn distinct_pairs<I>(items: I) -> impl Iterator<Item = (I::Item, I::Item)>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Clone,
{
    items.into_iter().tuple_combinations()
}

/// Call `f` for every ordered pair of distinct positions, or only for `i < j`
/// when `unique` is set.
pub fn for_each_pair<T>(items: &[T], unique: bool, mut f: impl FnMut(&T, &T)) {
    if unique {
        for (a, b) in items.iter().tuple_combinations() {
            f(a, b);
        }
    } else {
        for pair in items.iter().permutations(2) {
            f(pair[0], pair[1]);
        }
    }
}
