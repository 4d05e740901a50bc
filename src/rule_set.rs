use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::parse_util;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:               0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                0000_0000_0000_0000_0000_0000_0000_0000
/// b12345678s012345678: 0000_0001_1111_1110_0000_0001_1111_1111
/// ```
///
/// Birth on zero neighbours is never representable: the engine only looks at cells next to
/// live ones, so such a rule could not be simulated on an unbounded plane.
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored, as is
    /// bit 0 of `b`.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FE;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub const fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub const fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// Whether a dead cell with `n` live neighbours comes alive.
    pub const fn is_born(&self, n: usize) -> bool {
        n <= 8 && self.births() & (1 << n) != 0
    }

    /// Whether a live cell with `n` live neighbours stays alive.
    pub const fn survives(&self, n: usize) -> bool {
        n <= 8 && self.survivals() & (1 << n) != 0
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({self})")
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |mask: u16| -> String {
            (0..=8u8)
                .filter(|&i| mask & (1u16 << i) != 0)
                .map(|i| char::from(b'0' + i))
                .collect()
        };

        write!(f, "B{}/S{}", digits(self.births()), digits(self.survivals()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Empty rule")]
    Empty,

    #[error("Expected a neighbour count between 0 and 8, found '{got}'")]
    InvalidDigit { got: char },

    #[error("Neighbour count {n} given twice")]
    Repeated { n: u8 },

    #[error("Birth on 0 neighbours is not supported")]
    BirthOnZero,

    #[error(transparent)]
    Parse(#[from] parse_util::ParseError),
}

impl FromStr for RuleSet {
    type Err = RuleError;

    /// Accepts `B3/S23`, `b3s23` and the older survival-first `23/3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = parse_util::take_ws(s.trim_end().as_bytes());

        let (b, s) = match parse_util::peek_1(bytes) {
            None => return Err(RuleError::Empty),
            Some(b'b' | b'B') => parse_named(bytes)?,
            Some(_) => parse_nameless(bytes)?,
        };

        if b & 1 != 0 {
            return Err(RuleError::BirthOnZero);
        }

        Ok(RuleSet::new(b, s))
    }
}

// Parse rules that look like b3/s23 or B3S23
fn parse_named(bytes: &[u8]) -> Result<(u16, u16), RuleError> {
    let (_, bytes) = parse_util::take_1(bytes);

    let (b, bytes) = parse_util::take_until_fn(|a| a == b'/' || a == b's' || a == b'S', bytes);
    let bytes = parse_util::expect(b'/', bytes).unwrap_or(bytes);

    let bytes = match parse_util::take_1(bytes) {
        (Some(b's' | b'S'), rest) => rest,
        (Some(got), _) => {
            let err = parse_util::ParseError::UnexpectedToken {
                exp: 'S',
                got: got as char,
            };

            return Err(err.into());
        }
        (None, _) => return Err(parse_util::ParseError::UnexpectedEof { exp: 'S' }.into()),
    };

    let b = digits_to_mask(b.unwrap_or_default())?;
    let s = digits_to_mask(bytes)?;

    Ok((b, s))
}

// Parse rules that look like 23/3, survivals first.
fn parse_nameless(bytes: &[u8]) -> Result<(u16, u16), RuleError> {
    let (s, bytes) = parse_util::take_until(b'/', bytes);
    let bytes = parse_util::expect(b'/', bytes)?;

    let s = digits_to_mask(s.unwrap_or_default())?;
    let b = digits_to_mask(bytes)?;

    Ok((b, s))
}

/// Convert the human readable neighbour counts to a packed bit representation
fn digits_to_mask(bytes: &[u8]) -> Result<u16, RuleError> {
    let mut n: u16 = 0;

    for &b in bytes {
        if !(b'0'..=b'8').contains(&b) {
            return Err(RuleError::InvalidDigit { got: b as char });
        }

        let d = b - b'0';
        if n & (1 << d) != 0 {
            return Err(RuleError::Repeated { n: d });
        }

        n |= 1 << d;
    }

    Ok(n)
}
