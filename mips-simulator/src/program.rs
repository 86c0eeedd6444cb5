//! Parsing of programs written as hex instruction words, e.g.
//! `0x20080005 0x20090001`. Words may be separated by whitespace or commas
//! and `#` starts a comment which runs to the end of the line.

use crate::error::ProgramError;

/// Parse a textual program into instruction words
pub fn parse_program(text: &str) -> Result<Vec<u32>, ProgramError> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| parse_word(token).ok_or_else(|| invalid_word(index, token)))
        .collect()
}

/// Parse a single hex word, with or without a `0x` prefix
pub fn parse_word(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() || digits.starts_with('+') {
        return None;
    }

    u32::from_str_radix(digits, 16).ok()
}

fn invalid_word(index: usize, token: &str) -> ProgramError {
    ProgramError::InvalidWord {
        index,
        token: token.to_string(),
    }
}
