use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RandomSource;

/// Experiment group a visitor is bucketed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Group {
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognised experiment group: {0:?}")]
pub struct ParseGroupError(pub String);

impl Group {
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::A => "A",
            Group::B => "B",
        }
    }

    pub fn all() -> [Group; 2] {
        [Group::A, Group::B]
    }

    /// Draws one sample: A below 0.5, B otherwise.
    pub fn draw<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        if rng.next_unit() < 0.5 {
            Group::A
        } else {
            Group::B
        }
    }
}

impl FromStr for Group {
    type Err = ParseGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Group::A),
            "B" => Ok(Group::B),
            other => Err(ParseGroupError(other.to_string())),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_exact_symbols() {
        assert_eq!("A".parse::<Group>(), Ok(Group::A));
        assert_eq!("B".parse::<Group>(), Ok(Group::B));
        for bad in ["", "a", " A", "C", "\"A\"", "{\"group\":\"A\"}"] {
            assert!(bad.parse::<Group>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn draw_splits_at_half() {
        assert_eq!(Group::draw(&mut || 0.0), Group::A);
        assert_eq!(Group::draw(&mut || 0.499_999), Group::A);
        assert_eq!(Group::draw(&mut || 0.5), Group::B);
        assert_eq!(Group::draw(&mut || 0.999), Group::B);
    }

    #[test]
    fn serializes_as_plain_symbol() {
        assert_eq!(serde_json::to_string(&Group::B).unwrap(), "\"B\"");
        assert_eq!(Group::A.to_string(), "A");
    }
}
