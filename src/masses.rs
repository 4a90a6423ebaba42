use std::num::ParseIntError;
use std::str::FromStr;

pub type Mass = i64;

/// A token in the input that isn't a base-10 integer, or doesn't fit in a
/// `Mass`.
#[derive(Debug, Fail, Clone, Eq, PartialEq)]
#[fail(display = "bad mass {:?} at token {}: {}", token, index, error)]
pub struct ParseError {
    pub token: String,
    /// Zero-based position of `token` among the whitespace-separated tokens.
    pub index: usize,
    #[fail(cause)]
    pub error: ParseIntError,
}

/// Return an iterator over the masses in `text`, one per whitespace-separated
/// token, in order.
///
/// Tokens are parsed by `i64::from_str`: an optional sign followed by ASCII
/// digits. Anything else produces a `ParseError` naming the token.
pub fn masses<'a>(text: &'a str) -> impl Iterator<Item = Result<Mass, ParseError>> + 'a {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            Mass::from_str(token).map_err(|error| ParseError {
                token: token.to_owned(),
                index,
                error,
            })
        })
}
