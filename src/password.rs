//! Password policy validation: `1-3 a: abcde` read two different ways.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, trace};

use crate::io::OnePerLine;
use crate::{Error, OutOfRange, ParseError};

lazy_static! {
    static ref POLICY_LINE: Regex = Regex::new(r"^(\d+)-(\d+) (\S): (\S+)$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRecord {
    pub lower: usize,
    pub upper: usize,
    pub target: char,
    pub password: String,
}

impl FromStr for PasswordRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cap = POLICY_LINE.captures(s).ok_or(ParseError::PolicyLine)?;

        let lower = cap[1].parse::<usize>().map_err(ParseError::Bound)?;
        let upper = cap[2].parse::<usize>().map_err(ParseError::Bound)?;
        let target = cap[3].chars().next().ok_or(ParseError::PolicyLine)?;

        Ok(PasswordRecord {
            lower,
            upper,
            target,
            password: cap[4].to_owned(),
        })
    }
}

impl fmt::Display for PasswordRecord {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            "{}-{} {}: {}",
            self.lower, self.upper, self.target, self.password
        )
    }
}

impl PasswordRecord {
    /// The target occurs at least `lower` and at most `upper` times.
    pub fn verify_count(&self) -> bool {
        let found = self.password.chars().filter(|&ch| ch == self.target).count();
        (self.lower..=self.upper).contains(&found)
    }

    /// Exactly one of the 1-based positions `lower` and `upper` holds the target.
    pub fn verify_positions(&self) -> Result<bool, OutOfRange> {
        Ok(self.is_target_at(self.lower)? ^ self.is_target_at(self.upper)?)
    }

    fn is_target_at(&self, position: usize) -> Result<bool, OutOfRange> {
        position
            .checked_sub(1)
            .and_then(|index| self.password.chars().nth(index))
            .map(|ch| ch == self.target)
            .ok_or_else(|| OutOfRange::Position {
                position,
                len: self.password.chars().count(),
            })
    }
}

/// Running counts of passwords valid under each rule.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub by_count: usize,
    pub by_position: usize,
}

impl Tally {
    /// Checks both rules, leaving the tally untouched if the positions cannot be checked.
    pub fn record(&mut self, record: &PasswordRecord) -> Result<(), OutOfRange> {
        let by_count = record.verify_count();
        let by_position = record.verify_positions()?;

        trace!(%record, by_count, by_position);

        self.by_count += by_count as usize;
        self.by_position += by_position as usize;
        Ok(())
    }
}

pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), Error> {
    let mut tally = Tally::default();

    for item in OnePerLine::<_, PasswordRecord>::new(input).skip_blank(true) {
        let (line, record) = item?;
        tally
            .record(&record)
            .map_err(|e| Error::compute(line, &record.to_string(), e))?;
    }

    debug!(?tally, "done");

    writeln!(output, "{} passwords are valid (1)", tally.by_count)?;
    writeln!(output, "{} passwords are valid (2)", tally.by_position)?;
    output.flush()?;
    Ok(())
}
