use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Grid coordinate of a simulator node: time-step `t`, row `i`, column `j`.
///
/// Ordered by `t`, then `i`, then `j`. The textual form is `[t][i][j]`, which
/// is also how positions appear as JSON keys in case data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub t: usize,
    pub i: usize,
    pub j: usize,
}

impl Position {
    #[inline]
    pub const fn new(t: usize, i: usize, j: usize) -> Self {
        Self { t, i, j }
    }

    /// Manhattan distance over all three axes.
    #[inline]
    pub fn distance(&self, other: &Self) -> usize {
        self.t.abs_diff(other.t) + self.i.abs_diff(other.i) + self.j.abs_diff(other.j)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}][{}]", self.t, self.i, self.j)
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPosition(s.to_string());
        let inner = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(invalid)?;
        let parts: Vec<&str> = inner.split("][").collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let parse = |p: &str| {
            if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            p.parse::<usize>().map_err(|_| invalid())
        };
        Ok(Self::new(parse(parts[0])?, parse(parts[1])?, parse(parts[2])?))
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
