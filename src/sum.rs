//! Finding the pairs and triples of expense entries which sum up to a target.
//!
//! Numbers are processed as they are read: each one is matched against the numbers seen before
//! it, never against itself, so a value only pairs with itself when it appears twice.

use indexmap::IndexSet;
use itertools::Itertools;
use std::convert::TryFrom;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

use crate::io::OnePerLine;
use crate::Error;

pub const TARGET: i64 = 2020;

/// Sum found with the most recently pushed number as the first factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    Pair(i32, i32),
    Triple(i32, i32, i32),
}

impl Match {
    pub fn product(&self) -> i128 {
        self.factors().iter().map(|&x| x as i128).product()
    }

    fn factors(&self) -> Vec<i32> {
        match *self {
            Match::Pair(a, b) => vec![a, b],
            Match::Triple(a, b, c) => vec![a, b, c],
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            "{} = {}",
            self.factors().iter().join(" * "),
            self.product()
        )
    }
}

pub struct SumFinder {
    target: i64,
    // insertion order keeps the output stable between runs
    seen: IndexSet<i32>,
}

impl SumFinder {
    pub fn new(target: i64) -> Self {
        SumFinder {
            target,
            seen: IndexSet::new(),
        }
    }

    /// Matches `n` against the previously pushed numbers, then remembers it.
    ///
    /// Pair matches come first, followed by triples in the order their middle factor was first
    /// seen. Both orders of the two seen factors of a triple are reported.
    pub fn push(&mut self, n: i32) -> Vec<Match> {
        let mut found = Vec::new();

        if let Some(other) = self.lookup(self.target - n as i64) {
            found.push(Match::Pair(n, other));
        }

        for &a in &self.seen {
            let rest = self.target - n as i64 - a as i64;
            match self.lookup(rest) {
                Some(b) if b != a => found.push(Match::Triple(n, a, b)),
                _ => {}
            }
        }

        trace!(n, matches = found.len(), "pushed");

        self.seen.insert(n);
        found
    }

    /// Unique numbers pushed so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    fn lookup(&self, wanted: i64) -> Option<i32> {
        // anything outside of i32 cannot have been pushed
        let wanted = i32::try_from(wanted).ok()?;
        self.seen.get(&wanted).copied()
    }
}

impl Default for SumFinder {
    fn default() -> Self {
        SumFinder::new(TARGET)
    }
}

/// Streams the matches for every number of `input` to `output`, one per line.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), Error> {
    let mut finder = SumFinder::default();
    let mut total = 0;

    for item in OnePerLine::<_, i32>::new(input) {
        let (_, n) = item?;

        for m in finder.push(n) {
            debug!(%m, "found");
            writeln!(output, "{}", m)?;
            total += 1;
        }
    }

    debug!(unique = finder.len(), matches = total, "done");
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_all(numbers: &[i32]) -> Vec<Match> {
        let mut finder = SumFinder::default();
        numbers.iter().flat_map(|&n| finder.push(n)).collect()
    }

    #[test]
    fn example() {
        let found = push_all(&[1721, 979, 366, 299, 675, 1456]);

        assert_eq!(
            found,
            vec![
                Match::Pair(299, 1721),
                Match::Triple(675, 979, 366),
                Match::Triple(675, 366, 979),
            ]
        );

        assert_eq!(found[0].product(), 514_579);
        assert_eq!(found[1].product(), 241_861_950);
        assert_eq!(found[2].product(), 241_861_950);
    }

    #[test]
    fn display() {
        assert_eq!(Match::Pair(299, 1721).to_string(), "299 * 1721 = 514579");
        assert_eq!(
            Match::Triple(675, 979, 366).to_string(),
            "675 * 979 * 366 = 241861950"
        );
    }

    #[test]
    fn no_self_pairing() {
        assert_eq!(push_all(&[1010]), vec![]);
        assert_eq!(push_all(&[1010, 1010]), vec![Match::Pair(1010, 1010)]);
    }

    #[test]
    fn triple_needs_two_distinct_seen_values() {
        // 20 + 1000 + 1000 would need 1000 twice in the set, which a set cannot hold
        assert_eq!(push_all(&[1000, 20]), vec![]);
        assert_eq!(push_all(&[1000, 1000, 20]), vec![]);
    }

    #[test]
    fn nothing_sums_up() {
        assert_eq!(push_all(&[1, 2, 3, 4, 5]), vec![]);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let found = push_all(&[i32::MAX, i32::MIN, 2020 - i32::MAX]);
        assert_eq!(found, vec![Match::Pair(2020 - i32::MAX, i32::MAX)]);
        assert_eq!(
            found[0].product(),
            (2020 - i32::MAX) as i128 * i32::MAX as i128
        );
    }

    #[test]
    fn duplicates_are_remembered_once() {
        let mut finder = SumFinder::default();
        finder.push(5);
        finder.push(5);
        assert_eq!(finder.len(), 1);
    }
}
