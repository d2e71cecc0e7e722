//! Chilean RUT parsing and check digit validation.

use std::{fmt, str::FromStr};

use crate::domain::billing::errors::TaxIdError;

/// Longest body accepted, in digits.
const MAX_BODY_DIGITS: usize = 9;

/// A validated RUT: numeric body plus its modulo-11 check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaxId {
    body: u32,
    check_digit: char,
}

impl TaxId {
    #[must_use]
    pub const fn body(&self) -> u32 {
        self.body
    }

    #[must_use]
    pub const fn check_digit(&self) -> char {
        self.check_digit
    }
}

/// Modulo-11 check digit for a RUT body, `'K'` for a remainder of ten.
#[must_use]
pub fn check_digit(body: u32) -> char {
    let mut remaining = body;
    let mut sum = 0_u32;
    let mut factor = 2_u32;

    while remaining > 0 {
        sum += (remaining % 10) * factor;
        remaining /= 10;
        factor = if factor == 7 { 2 } else { factor + 1 };
    }

    match 11 - sum % 11 {
        11 => '0',
        10 => 'K',
        digit => char::from_digit(digit, 10).unwrap_or('0'),
    }
}

impl FromStr for TaxId {
    type Err = TaxIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let compact: String = value
            .trim()
            .chars()
            .filter(|c| *c != '.' && *c != '-')
            .collect();

        if compact.is_empty() {
            return Err(TaxIdError::Empty);
        }

        let mut chars = compact.chars();

        let given = chars
            .next_back()
            .map(|c| c.to_ascii_uppercase())
            .ok_or(TaxIdError::InvalidFormat)?;

        let digits = chars.as_str();

        if digits.is_empty()
            || digits.len() > MAX_BODY_DIGITS
            || !digits.chars().all(|c| c.is_ascii_digit())
            || !(given.is_ascii_digit() || given == 'K')
        {
            return Err(TaxIdError::InvalidFormat);
        }

        let body: u32 = digits.parse().map_err(|_parse| TaxIdError::InvalidFormat)?;

        if body == 0 {
            return Err(TaxIdError::InvalidFormat);
        }
        let expected = check_digit(body);

        if given != expected {
            return Err(TaxIdError::CheckDigitMismatch { expected });
        }

        Ok(Self {
            body,
            check_digit: expected,
        })
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.body.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (index, c) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push('.');
            }

            grouped.push(c);
        }

        write!(f, "{grouped}-{}", self.check_digit)
    }
}
