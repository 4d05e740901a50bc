use std::str::FromStr;

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected end of input, expected '{exp}'")]
    UnexpectedEof { exp: char },

    #[error("Expected '{exp}', but got '{got}'")]
    UnexpectedToken { exp: char, got: char },

    #[error("Expected a number, but got nothing")]
    MissingNumber,

    #[error("Failed to convert \"{str}\"")]
    Convert { str: String },
}

/// Consumes the slice until a non-ascii whitespace character is reached.
pub fn take_ws(bytes: &[u8]) -> &[u8] {
    let i = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    &bytes[i..]
}

/// Takes the next character from the slice. If none is found, the slice is left as-is.
pub const fn take_1(bytes: &[u8]) -> (Option<u8>, &[u8]) {
    let [b, bytes @ ..] = bytes else {
        return (None, bytes);
    };

    (Some(*b), bytes)
}

/// Like `take_1`, but doesn't consume the token
pub fn peek_1(bytes: &[u8]) -> Option<u8> {
    let [b, _bytes @ ..] = bytes else { return None };

    Some(*b)
}

/// Expects the next character in `bytes` to be `b`. Otherwise leaves `bytes` unchanged.
pub fn expect(b: u8, bytes: &[u8]) -> ParseResult<&[u8]> {
    let (Some(a), bytes) = take_1(bytes) else {
        return Err(ParseError::UnexpectedEof { exp: b as char });
    };

    if a != b {
        return Err(ParseError::UnexpectedToken {
            exp: b as char,
            got: a as char,
        });
    }

    Ok(bytes)
}

/// Advance the slice until `P` is satisfied, without consuming the matching byte. If `P` is
/// never satisfied the whole slice is taken.
///
/// Returns `None` instead of an empty prefix.
pub fn take_until_fn<P>(p: P, bytes: &[u8]) -> (Option<&[u8]>, &[u8])
where
    P: Fn(u8) -> bool,
{
    let i = bytes.iter().position(|&a| p(a)).unwrap_or(bytes.len());
    let (res, bytes) = bytes.split_at(i);

    if res.is_empty() {
        (None, bytes)
    } else {
        (Some(res), bytes)
    }
}

/// Advance the slice until byte `b` is found, without consuming it.
pub fn take_until(b: u8, bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    take_until_fn(|a| a == b, bytes)
}

/// Takes an optionally signed run of ascii digits and converts it to `T`.
pub fn take_number<T: FromStr>(bytes: &[u8]) -> ParseResult<(T, &[u8])> {
    let sign = match peek_1(bytes) {
        Some(b'-' | b'+') => 1,
        _ => 0,
    };

    let (digits, _) = take_until_fn(|a| !a.is_ascii_digit(), &bytes[sign..]);
    let Some(digits) = digits else {
        return Err(ParseError::MissingNumber);
    };

    let (number, rest) = bytes.split_at(sign + digits.len());

    Ok((convert(number)?, rest))
}

/// Converts `&[u8]` to `T` if `T: FromStr`.
pub fn convert<T: FromStr>(bytes: &[u8]) -> ParseResult<T> {
    let str = String::from_utf8_lossy(bytes);

    str.parse::<T>().map_err(|_| ParseError::Convert {
        str: str.to_string(),
    })
}
