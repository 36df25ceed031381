// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Interval Literals
//!
//! Parsing of canonical bracket notation into [`Interval`] values, exposed as
//! the standard `FromStr` impl: `"[2,5)".parse::<Interval<i64>>()`.
//!
//! The grammar is `<min-delim><number>,<number><max-delim>` with `[`/`(` as
//! the min delimiter and `]`/`)` as the max delimiter. Whitespace around the
//! whole literal is trimmed; whitespace anywhere inside is not tolerated.
//! Numeric components are converted directly by the target type's own
//! `FromStr`, so integer instantiations keep full precision without a
//! widening float intermediate.
//!
//! Parsing is purely structural: it never checks the interval invariant.
//! Callers validate separately, or rely on the merge engine validating every
//! input it receives.

use crate::interval::{Interval, Limit};
use crate::num::IntervalNumeric;
use std::str::FromStr;

/// The shortest well-formed literal, e.g. `[1,2]`.
const MIN_LITERAL_LEN: usize = 5;

/// The error type for malformed interval literals.
///
/// One variant per failure mode, each carrying the offending (trimmed) input;
/// the numeric variants additionally carry the component token that failed
/// and the name of the target type.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ParseIntervalError {
    /// The trimmed input is shorter than the minimal literal `[1,2]`.
    TooShort {
        /// The trimmed input text.
        input: String,
    },
    /// The first character is neither `[` nor `(`.
    InvalidMinDelimiter {
        /// The character found instead.
        found: char,
        /// The trimmed input text.
        input: String,
    },
    /// The last character is neither `]` nor `)`.
    InvalidMaxDelimiter {
        /// The character found instead.
        found: char,
        /// The trimmed input text.
        input: String,
    },
    /// The interior does not split on `,` into exactly two components.
    InvalidComponentCount {
        /// The trimmed input text.
        input: String,
    },
    /// The min component does not parse as the target numeric type.
    InvalidMinValue {
        /// The component token that failed to parse.
        token: String,
        /// The name of the target numeric type.
        type_name: &'static str,
        /// The trimmed input text.
        input: String,
    },
    /// The max component does not parse as the target numeric type.
    InvalidMaxValue {
        /// The component token that failed to parse.
        token: String,
        /// The name of the target numeric type.
        type_name: &'static str,
        /// The trimmed input text.
        input: String,
    },
}

impl std::fmt::Display for ParseIntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { input } => {
                write!(f, "Interval literal '{}' is too short (minimal form is \"[1,2]\")", input)
            }
            Self::InvalidMinDelimiter { found, input } => {
                write!(
                    f,
                    "Interval literal '{}' must start with '[' or '(', found '{}'",
                    input, found
                )
            }
            Self::InvalidMaxDelimiter { found, input } => {
                write!(
                    f,
                    "Interval literal '{}' must end with ']' or ')', found '{}'",
                    input, found
                )
            }
            Self::InvalidComponentCount { input } => {
                write!(
                    f,
                    "Interval literal '{}' must contain exactly two comma-separated bounds",
                    input
                )
            }
            Self::InvalidMinValue { token, type_name, input } => {
                write!(
                    f,
                    "Could not parse min bound '{}' of '{}' as type {}",
                    token, input, type_name
                )
            }
            Self::InvalidMaxValue { token, type_name, input } => {
                write!(
                    f,
                    "Could not parse max bound '{}' of '{}' as type {}",
                    token, input, type_name
                )
            }
        }
    }
}

impl std::error::Error for ParseIntervalError {}

impl<T> FromStr for Interval<T>
where
    T: IntervalNumeric,
{
    type Err = ParseIntervalError;

    /// Parses canonical bracket notation into an interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway_core::interval::Interval;
    ///
    /// let iv: Interval<i64> = "[3,5)".parse().unwrap();
    /// assert_eq!(iv, Interval::closed_open(3, 5));
    ///
    /// // Surrounding whitespace is trimmed, interior whitespace is not.
    /// assert!("  (0.5,2.75] ".parse::<Interval<f64>>().is_ok());
    /// assert!("[1, 2]".parse::<Interval<i64>>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() < MIN_LITERAL_LEN {
            return Err(ParseIntervalError::TooShort {
                input: trimmed.to_string(),
            });
        }

        // The length guard above makes both delimiter positions present.
        let mut delimiters = trimmed.chars();
        let first = delimiters.next().unwrap_or_default();
        let last = delimiters.last().unwrap_or_default();

        let min_open = match first {
            '(' => true,
            '[' => false,
            found => {
                return Err(ParseIntervalError::InvalidMinDelimiter {
                    found,
                    input: trimmed.to_string(),
                });
            }
        };
        let max_open = match last {
            ')' => true,
            ']' => false,
            found => {
                return Err(ParseIntervalError::InvalidMaxDelimiter {
                    found,
                    input: trimmed.to_string(),
                });
            }
        };

        // Both delimiters are single-byte ASCII, so this slice is on char
        // boundaries.
        let interior = &trimmed[1..trimmed.len() - 1];
        let mut components = interior.split(',');
        let (min_token, max_token) =
            match (components.next(), components.next(), components.next()) {
                (Some(min), Some(max), None) => (min, max),
                _ => {
                    return Err(ParseIntervalError::InvalidComponentCount {
                        input: trimmed.to_string(),
                    });
                }
            };

        let min_value = min_token.parse::<T>().map_err(|_| ParseIntervalError::InvalidMinValue {
            token: min_token.to_string(),
            type_name: std::any::type_name::<T>(),
            input: trimmed.to_string(),
        })?;
        let max_value = max_token.parse::<T>().map_err(|_| ParseIntervalError::InvalidMaxValue {
            token: max_token.to_string(),
            type_name: std::any::type_name::<T>(),
            input: trimmed.to_string(),
        })?;

        Ok(Interval::new(
            Limit::new(min_value, min_open),
            Limit::new(max_value, max_open),
        ))
    }
}
