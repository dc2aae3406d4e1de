//! Counting the trees hit when tobogganing down a horizontally repeating map.

use bitvec::{order::LocalBits, vec::BitVec};
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use crate::io::OnePerLine;
use crate::{Error, OutOfRange, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slope {
    /// rows advanced per step, must not be zero
    pub down: usize,
    /// columns advanced per step
    pub right: usize,
}

impl Slope {
    pub const fn new(down: usize, right: usize) -> Self {
        Slope { down, right }
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "down {} right {}", self.down, self.right)
    }
}

pub const SLOPES: [Slope; 5] = [
    Slope::new(1, 1),
    Slope::new(1, 3),
    Slope::new(1, 5),
    Slope::new(1, 7),
    Slope::new(2, 1),
];

/// One line of the map, set bits being trees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerrainRow {
    cells: BitVec<LocalBits, usize>,
}

impl TerrainRow {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The row repeats to the right, so any column is valid for a non-empty row.
    pub fn is_tree(&self, column: usize) -> bool {
        assert!(!self.is_empty());
        self.cells[column % self.cells.len()]
    }
}

impl FromStr for TerrainRow {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .map(|ch| match ch {
                '#' => Ok(true),
                '.' => Ok(false),
                other => Err(ParseError::TerrainCell(other)),
            })
            .collect::<Result<_, _>>()?;

        Ok(TerrainRow { cells })
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct TerrainMap {
    rows: Vec<TerrainRow>,
}

impl TerrainMap {
    pub fn push(&mut self, row: TerrainRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Walks from the top left corner until passing the last row.
    ///
    /// The column wraps around with the length of the row it was on, so rows of different
    /// widths each repeat on their own.
    pub fn count_trees(&self, slope: &Slope) -> Result<usize, OutOfRange> {
        assert_ne!(slope.down, 0, "slope would never leave the first row");

        if self.rows.is_empty() {
            return Err(OutOfRange::EmptyMap);
        }

        let mut column = 0;
        let mut trees = 0;

        for (index, row) in self.rows.iter().enumerate().step_by(slope.down) {
            if row.is_empty() {
                return Err(OutOfRange::EmptyRow { row: index });
            }

            if row.is_tree(column) {
                trees += 1;
            }

            column = (column + slope.right) % row.len();
        }

        Ok(trees)
    }

    pub fn survey(&self, slopes: &[Slope]) -> Result<Survey, OutOfRange> {
        let counts = slopes
            .iter()
            .map(|slope| {
                let trees = self.count_trees(slope)?;
                debug!(%slope, trees);
                Ok(trees)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Survey { counts })
    }
}

/// Tree counts in the order of the surveyed slopes.
#[derive(Debug, PartialEq, Eq)]
pub struct Survey {
    pub counts: Vec<usize>,
}

impl Survey {
    pub fn product(&self) -> Result<u64, OutOfRange> {
        self.counts
            .iter()
            .try_fold(1u64, |acc, &c| acc.checked_mul(c as u64))
            .ok_or(OutOfRange::ProductOverflow)
    }
}

pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), Error> {
    let mut map = TerrainMap::default();

    for item in OnePerLine::<_, TerrainRow>::new(input) {
        let (_, row) = item?;
        map.push(row);
    }

    debug!(rows = map.rows(), "map read");

    let survey = map.survey(&SLOPES).map_err(Error::Map)?;
    let product = survey.product().map_err(Error::Map)?;

    for count in &survey.counts {
        writeln!(output, "Slope has {} trees", count)?;
    }
    writeln!(output, "Encountered trees: {}", product)?;
    output.flush()?;
    Ok(())
}
