//! Bounded sequence classifier (FizzBuzz)

use std::fmt;

use crate::error::{SearcherError, SearcherResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceItem {
    Number(u64),
    Fizz,
    Buzz,
    FizzBuzz,
}

impl SequenceItem {
    pub fn classify(n: u64) -> Self {
        match (n % 3 == 0, n % 5 == 0) {
            (true, true) => SequenceItem::FizzBuzz,
            (true, false) => SequenceItem::Fizz,
            (false, true) => SequenceItem::Buzz,
            (false, false) => SequenceItem::Number(n),
        }
    }
}

impl fmt::Display for SequenceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceItem::Number(n) => write!(f, "{n}"),
            SequenceItem::Fizz => write!(f, "Fizz"),
            SequenceItem::Buzz => write!(f, "Buzz"),
            SequenceItem::FizzBuzz => write!(f, "FizzBuzz"),
        }
    }
}

/// Classify `1..=bound` lazily; the bound must be at least 1
///
/// Items are produced on demand, so any positive `i64` bound is accepted.
pub fn fizz_buzz(bound: i64) -> SearcherResult<impl Iterator<Item = SequenceItem>> {
    if bound < 1 {
        return Err(SearcherError::SequenceBound { bound });
    }
    Ok((1..=bound as u64).map(SequenceItem::classify))
}
