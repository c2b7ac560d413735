#![deny(clippy::disallowed_methods)]

use std::{collections::hash_map::DefaultHasher, hash::BuildHasherDefault};

mod set;
mod slot;
mod stats;

pub use set::HashSet;
pub use stats::CollisionStats;

// SipHash with fixed keys, so table layouts are reproducible between runs
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

const DEFAULT_TABLE_SIZE: usize = 11;

/// Smallest prime `>= n`. Non-positive inputs are treated as 3.
pub fn next_prime(n: isize) -> usize {
    let n = usize::try_from(n).ok().filter(|&n| n > 0).unwrap_or(3);
    next_prime_from(n)
}

pub(crate) fn next_prime_from(n: usize) -> usize {
    let mut n = if n == 0 { 3 } else { n };
    if n % 2 == 0 {
        n = n.checked_add(1).expect("next prime doesn't fit a usize");
    }
    while !is_prime(n) {
        n = n.checked_add(2).expect("next prime doesn't fit a usize");
    }
    n
}

pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    // i <= n / i avoids overflowing i * i near usize::MAX
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
