//! Level-dependent difficulty curves.
//!
//! Both curves approach a cap exponentially:
//!
//! ```text
//! value(level) = cap - (cap - start) * e^(-level / accelerator)
//! ```
//!
//! and are rounded to the nearest integer with [`f64::round`] (half away from
//! zero; every value here is positive, so this is round-half-up).

use crate::error::{Error, Result};

/// Size of the base alphabet the acceleration reduction is scaled against.
pub const ALPHABET_SIZE: f64 = 26.0;

/// Share of the base accelerator removed once a full alphabet is unlocked.
const REDUCTION_PERCENTAGE: f64 = 50.0;

/// Allowed-character counts must stay strictly below this (52).
pub const ALLOWED_CHARS_BOUND: f64 = ALPHABET_SIZE * (100.0 / REDUCTION_PERCENTAGE);

const BASE_ACCELERATOR: f64 = 100.0;
const MIN_LENGTH_START: f64 = 2.0;
const MIN_LENGTH_CAP: f64 = 6.0;

const WORD_COUNT_START: f64 = 3.0;
const WORD_COUNT_CAP: f64 = 20.0;
const WORD_COUNT_ACCELERATOR: f64 = 62.5;

pub fn validate_level(level: i32) -> Result<()> {
    if level <= 0 {
        return Err(Error::InvalidArgument(format!(
            "level must be > 0 (was {level})"
        )));
    }
    Ok(())
}

fn approach_cap(level: i32, start: f64, cap: f64, accelerator: f64) -> f64 {
    cap - (cap - start) * (-f64::from(level) / accelerator).exp()
}

/// How much the min-length accelerator shrinks for `allowed_chars` unlocked
/// characters. In `[0, 50)` for valid input.
pub fn acceleration_reduction(allowed_chars: usize) -> Result<f64> {
    let count = allowed_chars as f64;
    if count >= ALLOWED_CHARS_BOUND {
        return Err(Error::InvalidArgument(format!(
            "size of allowedChars too big! Must be < {ALLOWED_CHARS_BOUND} (was {allowed_chars})"
        )));
    }
    Ok((count / ALPHABET_SIZE) * REDUCTION_PERCENTAGE)
}

/// Shortest word length served at `level`. Grows from 2 toward 6, faster
/// the more characters are unlocked.
pub fn min_word_length(level: i32, allowed_chars: usize) -> Result<i32> {
    validate_level(level)?;
    let accelerator = BASE_ACCELERATOR - acceleration_reduction(allowed_chars)?;
    let value = approach_cap(level, MIN_LENGTH_START, MIN_LENGTH_CAP, accelerator);
    Ok(value.round() as i32)
}

/// Number of words served at `level`. Grows from 3 toward 20.
pub fn word_count(level: i32) -> Result<usize> {
    validate_level(level)?;
    let value = approach_cap(level, WORD_COUNT_START, WORD_COUNT_CAP, WORD_COUNT_ACCELERATOR);
    Ok(value.round() as usize)
}
