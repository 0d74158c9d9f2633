//! Chilean RUT validation, formatting, and credential derivation.
//!
//! A RUT is a digit body plus a trailing check symbol (`0`–`9` or `K`)
//! computed with the Module-11 weighted checksum. The free functions here
//! are total: malformed input yields `false` or an unchanged string, never
//! an error. [`Rut::parse`] is the diagnostic variant for callers that need
//! to know *why* an identifier was rejected.

use std::fmt;

use thiserror::Error;

/// Strip grouping punctuation (`.` and `-`) and uppercase the result.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '.' && *c != '-')
        .collect::<String>()
        .to_uppercase()
}

/// Compute the Module-11 check symbol for a digit body.
///
/// Weights cycle 2,3,4,5,6,7 starting from the rightmost digit. The
/// remainder `11 - (sum % 11)` maps 11 → `'0'`, 10 → `'K'`, and anything
/// else to its decimal digit.
pub fn compute_check_symbol(body: &str) -> char {
    let mut sum: u32 = 0;
    let mut weight: u32 = 2;

    for c in body.chars().rev() {
        sum += c.to_digit(10).unwrap_or(0) * weight;
        weight = if weight == 7 { 2 } else { weight + 1 };
    }

    match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        n => char::from_digit(n, 10).unwrap_or('0'),
    }
}

/// Validate a RUT string against its check symbol.
///
/// Returns `false` for input shorter than two characters after
/// normalization, a body containing non-digits, or a checksum mismatch.
pub fn validate(raw: &str) -> bool {
    let clean = normalize(raw);
    let Some((body, check)) = split_body_check(&clean) else {
        return false;
    };

    if !body.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    check == compute_check_symbol(body)
}

/// Format a RUT for display: body grouped in threes, `-` before the check
/// symbol, e.g. `"123456785"` → `"12.345.678-5"`.
///
/// Pure string transform — invalid identifiers are formatted without
/// complaint, and input shorter than two characters is returned as-is.
pub fn format(raw: &str) -> String {
    let clean = normalize(raw);
    match split_body_check(&clean) {
        Some((body, check)) => format!("{}-{check}", group_thousands(body)),
        None => clean,
    }
}

/// Last four characters of the body (check symbol excluded), left-padded
/// with `'0'` to exactly four.
///
/// Used only to seed the temporary credential of a newly provisioned
/// patient account. The identity provider forces rotation on first
/// sign-in; this value must never survive as a long-term credential.
pub fn derive_credential_fragment(raw: &str) -> String {
    let clean = normalize(raw);
    let body = match split_body_check(&clean) {
        Some((body, _)) => body,
        None => "",
    };

    let tail: Vec<char> = body.chars().rev().take(4).collect();
    let tail: String = tail.into_iter().rev().collect();
    format!("{tail:0>4}")
}

/// Split a normalized identifier into body and check symbol. `None` when
/// there are fewer than two characters.
fn split_body_check(clean: &str) -> Option<(&str, char)> {
    if clean.chars().count() < 2 {
        return None;
    }
    let (idx, check) = clean.char_indices().next_back()?;
    Some((&clean[..idx], check))
}

fn group_thousands(body: &str) -> String {
    let total = body.chars().count();
    let mut grouped = String::with_capacity(body.len() + body.len() / 3);
    for (i, c) in body.chars().enumerate() {
        if i > 0 && (total - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Why a RUT failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RutParseError {
    #[error("identifier too short: need a body and a check symbol")]
    TooShort,

    #[error("identifier body contains a non-digit character")]
    NonDigitBody,

    #[error("checksum mismatch: expected check symbol '{expected}'")]
    ChecksumMismatch { expected: char },
}

/// A validated RUT: canonical digit body plus its check symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rut {
    body: String,
    check: char,
}

impl Rut {
    /// Parse and validate, reporting the specific failure. Accepts exactly
    /// the inputs [`validate`] accepts.
    pub fn parse(raw: &str) -> Result<Self, RutParseError> {
        let clean = normalize(raw);
        let (body, check) = split_body_check(&clean).ok_or(RutParseError::TooShort)?;

        if !body.chars().all(|c| c.is_ascii_digit()) {
            return Err(RutParseError::NonDigitBody);
        }

        let expected = compute_check_symbol(body);
        if check != expected {
            return Err(RutParseError::ChecksumMismatch { expected });
        }

        Ok(Self {
            body: body.to_string(),
            check: expected,
        })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn check_symbol(&self) -> char {
        self.check
    }

    /// Display form, grouped in threes: `12.345.678-5`.
    pub fn formatted(&self) -> String {
        format!("{}-{}", group_thousands(&self.body), self.check)
    }

    /// See [`derive_credential_fragment`].
    pub fn credential_fragment(&self) -> String {
        let tail: Vec<char> = self.body.chars().rev().take(4).collect();
        let tail: String = tail.into_iter().rev().collect();
        format!("{tail:0>4}")
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
