use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use parse_ints::{leading_pair, parse_field, FieldError, LineFields};
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod opts;

type Error = anyhow::Error;

/// Input shapes that the lenient parser tolerates and the strict one refuses.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: expected two fields, found only `{content}`")]
    ShortLine { line: usize, content: String },
    #[error("line {line}: bad field")]
    InvalidField {
        line: usize,
        #[source]
        source: FieldError,
    },
}

/// How the parser treats lines that don't hold two integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Skip lines with a single field and read unparseable fields as zero,
    /// counting both in the [`ParseReport`].
    #[default]
    Lenient,
    /// Fail on the first line that would be skipped or defaulted.
    Strict,
}

/// Counters describing what the parser saw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub lines: usize,
    pub pairs: usize,
    pub blank_lines: usize,
    pub short_lines: usize,
    pub invalid_fields: usize,
}

impl ParseReport {
    /// Whether anything was skipped or defaulted.
    pub fn is_clean(&self) -> bool {
        self.short_lines == 0 && self.invalid_fields == 0
    }
}

/// The left and right columns of the input, always of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, left: i64, right: i64) {
        self.left.push(left);
        self.right.push(right);
    }

    pub fn left(&self) -> &[i64] {
        &self.left
    }

    pub fn right(&self) -> &[i64] {
        &self.right
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn into_parts(self) -> (Vec<i64>, Vec<i64>) {
        (self.left, self.right)
    }
}

impl FromIterator<(i64, i64)> for Columns {
    fn from_iter<T: IntoIterator<Item = (i64, i64)>>(iter: T) -> Self {
        let mut columns = Columns::new();
        for (left, right) in iter {
            columns.push(left, right);
        }
        columns
    }
}

/// Reads the whole puzzle input into memory.
pub fn load_input<P>(path: P) -> Result<String, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let puzzle = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    info!(path = %path.display(), bytes = puzzle.len(), "loaded input");
    Ok(puzzle)
}

pub fn parse_input(puzzle: &str, policy: ParsePolicy) -> Result<(Columns, ParseReport), Error> {
    let mut columns = Columns::new();
    let mut report = ParseReport::default();

    for (idx, line) in puzzle.split('\n').enumerate() {
        let line_no = idx + 1;
        report.lines += 1;
        let (left, right) = match leading_pair(line) {
            LineFields::Blank => {
                report.blank_lines += 1;
                continue;
            }
            LineFields::Short(content) => {
                if policy == ParsePolicy::Strict {
                    return Err(InputError::ShortLine {
                        line: line_no,
                        content: content.to_string(),
                    }
                    .into());
                }
                warn!(line = line_no, content, "skipping line with a single field");
                report.short_lines += 1;
                continue;
            }
            LineFields::Pair(left, right) => (left, right),
        };
        let left = read_field(left, line_no, policy, &mut report)?;
        let right = read_field(right, line_no, policy, &mut report)?;
        columns.push(left, right);
    }

    report.pairs = columns.len();
    debug!(?report, "parsed input");
    Ok((columns, report))
}

fn read_field(
    token: &str,
    line: usize,
    policy: ParsePolicy,
    report: &mut ParseReport,
) -> Result<i64, InputError> {
    match parse_field(token) {
        Ok(n) => Ok(n),
        Err(source) if policy == ParsePolicy::Strict => {
            Err(InputError::InvalidField { line, source })
        }
        Err(e) => {
            warn!(line, error = %e, "reading unparseable field as 0");
            report.invalid_fields += 1;
            Ok(0)
        }
    }
}

/// Total distance: both columns sorted independently, then the absolute
/// differences of each position summed. The inputs are left untouched.
///
/// Each difference is exact; the running sum wraps at `u64::MAX`.
pub fn solve_puzzle_part1(left: &[i64], right: &[i64]) -> u64 {
    debug_assert_eq!(left.len(), right.len());
    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort_unstable();
    right.sort_unstable();
    left.iter()
        .zip(right.iter())
        .fold(0, |mut summed_diff, (left_num, right_num)| {
            summed_diff = summed_diff.wrapping_add(left_num.abs_diff(*right_num));
            summed_diff
        })
}

fn frequencies(values: &[i64]) -> HashMap<i64, usize> {
    values.iter().fold(HashMap::new(), |mut counts, n| {
        *counts.entry(*n).or_insert(0) += 1;
        counts
    })
}

/// Similarity score: each left value times the number of times it
/// appears in the right column. Products and the sum wrap in two's
/// complement, like the 64-bit `int` arithmetic of the reference solution.
pub fn solve_puzzle_part2(left: &[i64], right: &[i64]) -> i64 {
    let counts = frequencies(right);
    left.iter()
        .map(|n| n.wrapping_mul(counts.get(n).copied().unwrap_or(0) as i64))
        .fold(0, i64::wrapping_add)
}
