use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("rating must be between 1 and 5, got {0}")]
    OutOfRange(i64),
    #[error("rating is not a number: {0}")]
    NotANumber(String),
}

/// Star rating from 1 to 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange(value.into()))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn stars(self) -> String {
        (Self::MIN..=Self::MAX)
            .map(|i| if i <= self.0 { '★' } else { '☆' })
            .collect()
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(3)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value = s
            .parse::<i64>()
            .map_err(|_| RatingError::NotANumber(s.to_string()))?;
        let value = u8::try_from(value).map_err(|_| RatingError::OutOfRange(value))?;
        Rating::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_through_five() {
        for v in 1..=5 {
            assert_eq!(Rating::new(v).unwrap().get(), v);
        }
        assert_eq!(Rating::new(0), Err(RatingError::OutOfRange(0)));
        assert_eq!(Rating::new(6), Err(RatingError::OutOfRange(6)));
    }

    #[test]
    fn default_is_three_stars() {
        assert_eq!(Rating::default().stars(), "★★★☆☆");
    }

    #[test]
    fn parses_from_text() {
        assert_eq!("4".parse::<Rating>().unwrap().get(), 4);
        assert!(matches!("four".parse::<Rating>(), Err(RatingError::NotANumber(_))));
        assert!(matches!("9".parse::<Rating>(), Err(RatingError::OutOfRange(9))));
    }

    #[test]
    fn large_or_negative_numbers_are_out_of_range() {
        assert_eq!("300".parse::<Rating>(), Err(RatingError::OutOfRange(300)));
        assert_eq!("-2".parse::<Rating>(), Err(RatingError::OutOfRange(-2)));
        assert_eq!("0".parse::<Rating>(), Err(RatingError::OutOfRange(0)));
    }

    #[test]
    fn out_of_range_message_names_bounds() {
        assert_eq!(
            RatingError::OutOfRange(7).to_string(),
            "rating must be between 1 and 5, got 7"
        );
    }
}
