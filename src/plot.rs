//! The "Life 1.06" plain coordinate listing.
//!
//! See: https://conwaylife.com/wiki/Life_1.06

use std::io;
use std::io::Write;

use thiserror::Error;

use crate::cell::Cell;
use crate::parse_util;
use crate::parse_util::ParseError;

pub const HEADER: &str = "#Life 1.06";

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Missing \"#Life 1.06\" header")]
    MissingHeader,

    #[error("Line {line}: {source}")]
    Line { line: usize, source: ParseError },

    #[error("Line {line}: expected two coordinates, found trailing \"{rest}\"")]
    Trailing { line: usize, rest: String },
}

/// Write `cells` as a plot, sorted by row then column so the output does not depend on
/// how the cells were stored.
pub fn write_plot<'a, I, W>(cells: I, mut out: W) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Cell>,
    W: Write,
{
    let mut coords: Vec<(i64, i64)> = cells.into_iter().map(Cell::logical).collect();
    coords.sort_unstable_by_key(|&(x, y)| (y, x));

    writeln!(out, "{HEADER}")?;
    for (x, y) in coords {
        writeln!(out, "{x} {y}")?;
    }

    Ok(())
}

/// Read a plot back into logical coordinates. Blank lines and `#` lines after the header
/// are ignored.
pub fn read_plot(text: &str) -> Result<Vec<(i64, i64)>, PlotError> {
    let mut lines = text.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim_end() == HEADER => {}
        _ => return Err(PlotError::MissingHeader),
    }

    let mut cells = Vec::new();

    for (i, line) in lines {
        let bytes = parse_util::take_ws(line.as_bytes());
        if matches!(parse_util::peek_1(bytes), None | Some(b'#')) {
            continue;
        }

        let line = i + 1;
        let at = |source| PlotError::Line { line, source };

        let (x, bytes) = parse_util::take_number(bytes).map_err(at)?;
        let bytes = parse_util::take_ws(bytes);
        let (y, bytes) = parse_util::take_number(bytes).map_err(at)?;

        let rest = parse_util::take_ws(bytes);
        if !rest.is_empty() {
            return Err(PlotError::Trailing {
                line,
                rest: String::from_utf8_lossy(rest).to_string(),
            });
        }

        cells.push((x, y));
    }

    Ok(cells)
}
