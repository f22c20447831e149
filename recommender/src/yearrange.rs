use std::fmt::Debug;
use std::str::FromStr;

use fallible_iterator::FallibleIterator;

/// Inclusive release-year range, e.g. 2000-2008.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

impl YearRange {
    pub fn new(start: u16, end: u16) -> YearRange {
        YearRange { start, end }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("Could not parse release year range")]
pub struct ParseYearRangeError {}

impl FromStr for YearRange {
    type Err = ParseYearRangeError;
    fn from_str(s: &str) -> Result<YearRange, ParseYearRangeError> {
        let sep = if s.contains(',') { ',' } else { '-' };
        let nums: Vec<u16> =
            fallible_iterator::convert(s.split(sep).map(|year| year.trim().parse::<u16>()))
                .collect()
                .map_err(|_| ParseYearRangeError {})?;
        if nums.len() != 2 {
            return Err(ParseYearRangeError {});
        }
        if nums[0] > nums[1] {
            return Err(ParseYearRangeError {});
        }
        Ok(YearRange {
            start: nums[0],
            end: nums[1],
        })
    }
}

impl ToString for YearRange {
    fn to_string(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}
