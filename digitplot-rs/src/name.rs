//! Benchmark name parsing
//!
//! The benchmark harness names every benchmark
//! `<crate>-<type>-digits-<min>-to-<max>`, e.g. `lexical-core-u64-digits-1-to-20`.
//! Older runs also used the short form `<crate>-<type>-digits-<n>` for exact
//! digit counts. The crate name may itself contain `-`.

use crate::error::{DigitPlotError, Result};
use std::fmt;
use std::str::FromStr;

/// Separator between name segments
pub const DELIMITER: &str = "-";

const DIGITS_TOKEN: &str = "digits";
const RANGE_TOKEN: &str = "to";

/// A decoded benchmark identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BenchName {
    /// Crate (implementation) under test
    pub group: String,
    /// Numeric type being parsed, e.g. `u64`
    pub subtype: String,
    /// Smallest number of digits in the inputs
    pub min_count: u32,
    /// Largest number of digits in the inputs
    pub max_count: u32,
}

impl BenchName {
    /// Parse a benchmark name
    ///
    /// Everything before the token preceding `digits` is the group, so
    /// multi-segment crate names survive. A trailing `-to-<max>` sets the
    /// upper bound; without it the range collapses to the single count.
    ///
    /// # Errors
    /// - [`DigitPlotError::MalformedName`] if `digits` is missing or has no type before it
    /// - [`DigitPlotError::InvalidCount`] if a count token is missing or not a number
    /// - [`DigitPlotError::InvalidRange`] if a count is zero or `max < min`
    pub fn parse(name: &str) -> Result<Self> {
        let parts: Vec<&str> = name.split(DELIMITER).collect();

        let digits_idx = parts
            .iter()
            .position(|part| *part == DIGITS_TOKEN)
            .filter(|&idx| idx > 0)
            .ok_or_else(|| DigitPlotError::MalformedName(name.to_string()))?;

        let group = parts[..digits_idx - 1].join(DELIMITER);
        let subtype = parts[digits_idx - 1].to_string();
        let min_count = parse_count(name, parts.get(digits_idx + 1).copied())?;

        let max_count = match (parts.get(digits_idx + 2), parts.get(digits_idx + 3)) {
            (Some(&RANGE_TOKEN), Some(token)) => parse_count(name, Some(*token))?,
            _ => min_count,
        };

        if min_count == 0 || max_count < min_count {
            return Err(DigitPlotError::InvalidRange {
                name: name.to_string(),
                min: min_count,
                max: max_count,
            });
        }

        Ok(Self {
            group,
            subtype,
            min_count,
            max_count,
        })
    }

    /// Inputs all have exactly `max_count` digits
    pub fn is_exact(&self) -> bool {
        self.min_count == self.max_count
    }

    /// Inputs are drawn from the `1..=max_count` digit distribution
    pub fn starts_at_one(&self) -> bool {
        self.min_count == 1
    }
}

fn parse_count(name: &str, token: Option<&str>) -> Result<u32> {
    let token = token.unwrap_or_default();
    token.parse().map_err(|_| DigitPlotError::InvalidCount {
        name: name.to_string(),
        token: token.to_string(),
    })
}

impl FromStr for BenchName {
    type Err = DigitPlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BenchName {
    /// Formats the name the way the harness emits it (always with `-to-`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.group.is_empty() {
            write!(f, "{}{DELIMITER}", self.group)?;
        }
        write!(
            f,
            "{}{DELIMITER}{DIGITS_TOKEN}{DELIMITER}{}{DELIMITER}{RANGE_TOKEN}{DELIMITER}{}",
            self.subtype, self.min_count, self.max_count
        )
    }
}
