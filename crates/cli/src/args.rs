//! Command-line value parsers.

use std::fmt;
use std::num::ParseIntError;

use trishape::Point;

/// Failure to parse an `X,Y` point argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    MissingComma { input: String },
    BadCoordinate { input: String, source: ParseIntError },
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComma { input } => {
                write!(f, "expected a point as X,Y but got {input:?}")
            }
            Self::BadCoordinate { input, source } => {
                write!(f, "invalid coordinate in {input:?}: {source}")
            }
        }
    }
}

impl std::error::Error for ParsePointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingComma { .. } => None,
            Self::BadCoordinate { source, .. } => Some(source),
        }
    }
}

/// Parse `X,Y` (whitespace around either number is ignored).
pub fn parse_point(s: &str) -> Result<Point, ParsePointError> {
    let (x, y) = s.split_once(',').ok_or_else(|| ParsePointError::MissingComma {
        input: s.to_string(),
    })?;
    let coord = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|source| ParsePointError::BadCoordinate {
                input: s.to_string(),
                source,
            })
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}
