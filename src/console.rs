//! Reads starting cells typed at a terminal, one `(X,Y)` pair per line.

use std::io::BufRead;

use thiserror::Error;
use tracing::warn;

use crate::parse_util;
use crate::parse_util::ParseError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("Invalid x coordinate: {0}")]
    X(ParseError),

    #[error("Invalid y coordinate: {0}")]
    Y(ParseError),

    #[error("Malformed pair: {0}")]
    Shape(#[from] ParseError),

    #[error("Trailing input after pair: \"{rest}\"")]
    Trailing { rest: String },
}

/// What a single line of console input means.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Cell(i64, i64),

    /// A blank line or one starting with `d`, as in "done".
    End,
}

/// Parse one line. Whitespace anywhere in the line is ignored.
pub fn parse_line(line: &str) -> Result<Line, ConsoleError> {
    let bytes: Vec<u8> = line.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    match parse_util::peek_1(&bytes) {
        None | Some(b'd' | b'D') => Ok(Line::End),
        Some(_) => {
            let (x, y) = parse_coordinate(&bytes)?;

            Ok(Line::Cell(x, y))
        }
    }
}

/// Parse `(X,Y)` with no surrounding whitespace.
pub fn parse_coordinate(bytes: &[u8]) -> Result<(i64, i64), ConsoleError> {
    let bytes = parse_util::expect(b'(', bytes)?;
    let (x, bytes) = parse_util::take_number(bytes).map_err(ConsoleError::X)?;
    let bytes = parse_util::expect(b',', bytes)?;
    let (y, bytes) = parse_util::take_number(bytes).map_err(ConsoleError::Y)?;
    let bytes = parse_util::expect(b')', bytes)?;

    if !bytes.is_empty() {
        return Err(ConsoleError::Trailing {
            rest: String::from_utf8_lossy(bytes).to_string(),
        });
    }

    Ok((x, y))
}

/// Read pairs until an end line or the end of input. Malformed lines are skipped.
pub fn read_coordinates<R: BufRead>(reader: R) -> std::io::Result<Vec<(i64, i64)>> {
    let mut cells = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;

        match parse_line(&line) {
            Ok(Line::Cell(x, y)) => cells.push((x, y)),
            Ok(Line::End) => break,
            Err(e) => warn!(number = i + 1, "Skipping \"{}\": {}", line, e),
        }
    }

    Ok(cells)
}
