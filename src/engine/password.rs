//! Structured password space.
//!
//! A password is exactly five characters laid out as
//!
//! ```text
//! [A-Z] [d1 d2 d3] [a-z]      d1, d2, d3 pairwise distinct digits
//! ```
//!
//! The digit block is an ordered selection, so its size is the falling
//! factorial `P(10, 3) = 10 × 9 × 8 = 720` and the whole space holds
//! `26 × 720 × 26 = 486 720` passwords.
//!
//! ## Sampling strategies
//!
//! - [`GenerationStrategy::AttemptBudget`] draws single passwords and keeps
//!   new ones until enough are collected or `count × 100` draws are spent.
//!   It can return fewer than requested.
//! - [`GenerationStrategy::Exact`] samples distinct indices of the space
//!   without replacement and decodes them through [`PasswordSpace`], so it
//!   always returns exactly `count` passwords.

use super::EngineError;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

pub const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8; 10] = b"0123456789";

/// Number of distinct digits in the middle block.
pub const DIGIT_SLOTS: usize = 3;

/// Inclusive bounds for a batch request.
pub const MIN_BATCH: i64 = 1;
pub const MAX_BATCH: i64 = 20;

/// Draws allowed per requested password under the attempt budget.
pub const ATTEMPTS_PER_PASSWORD: usize = 100;

/// Ordered selections of `k` distinct items out of `n`.
const fn falling_factorial(n: u64, k: u64) -> u64 {
    let mut result = 1;
    let mut i = 0;
    while i < k {
        result *= n - i;
        i += 1;
    }
    result
}

const DIGIT_ARRANGEMENTS: u64 = falling_factorial(DIGITS.len() as u64, DIGIT_SLOTS as u64);
const SPACE_SIZE: u64 = UPPERCASE.len() as u64 * DIGIT_ARRANGEMENTS * LOWERCASE.len() as u64;

/// Exact number of passwords in the space.
pub fn total_password_space() -> u64 {
    SPACE_SIZE
}

/// A password of the `[A-Z][3 distinct digits][a-z]` shape.
///
/// Values are only built by the samplers, [`PasswordSpace::decode`] or the
/// validating [`FromStr`] impl, so the shape always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    fn from_parts(upper: u8, digits: [u8; DIGIT_SLOTS], lower: u8) -> Self {
        let mut bytes = Vec::with_capacity(DIGIT_SLOTS + 2);
        bytes.push(upper);
        bytes.extend_from_slice(&digits);
        bytes.push(lower);
        // Every byte comes from an ASCII alphabet.
        Password(bytes.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The leading uppercase letter.
    pub fn upper(&self) -> char {
        char::from(self.0.as_bytes()[0])
    }

    /// The three-digit block.
    pub fn digits(&self) -> &str {
        &self.0[1..1 + DIGIT_SLOTS]
    }

    /// The trailing lowercase letter.
    pub fn lower(&self) -> char {
        char::from(self.0.as_bytes()[DIGIT_SLOTS + 1])
    }

    /// Checks the `[A-Z][3 distinct digits][a-z]` shape.
    pub fn is_well_formed(s: &str) -> bool {
        let bytes = s.as_bytes();
        if bytes.len() != DIGIT_SLOTS + 2 {
            return false;
        }

        let digits = &bytes[1..1 + DIGIT_SLOTS];
        let distinct: HashSet<&u8> = digits.iter().collect();

        bytes[0].is_ascii_uppercase()
            && bytes[DIGIT_SLOTS + 1].is_ascii_lowercase()
            && digits.iter().all(u8::is_ascii_digit)
            && distinct.len() == DIGIT_SLOTS
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Password {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Password::is_well_formed(s) {
            Ok(Password(s.to_string()))
        } else {
            Err(EngineError::MalformedPassword(s.to_string()))
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Bijection between `[0, 486 720)` and the password space.
///
/// Indices are mixed-radix: the uppercase letter is the most significant
/// digit, then the Lehmer code of the digit block, then the lowercase
/// letter. Index order therefore matches lexicographic password order.
pub struct PasswordSpace;

impl PasswordSpace {
    pub const SIZE: u64 = SPACE_SIZE;

    /// Maps an index to its password.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidParameter`] when `index >= PasswordSpace::SIZE`.
    pub fn decode(index: u64) -> Result<Password, EngineError> {
        if index >= Self::SIZE {
            let value = i64::try_from(index).unwrap_or(i64::MAX);
            return Err(EngineError::invalid("index", value, "an index below 486720"));
        }

        let alphabet = LOWERCASE.len() as u64;
        let lower = LOWERCASE[(index % alphabet) as usize];
        let rest = index / alphabet;
        let arrangement = rest % DIGIT_ARRANGEMENTS;
        let upper = UPPERCASE[(rest / DIGIT_ARRANGEMENTS) as usize];

        let mut pool: Vec<u8> = DIGITS.to_vec();
        let mut digits = [0u8; DIGIT_SLOTS];
        let mut remainder = arrangement;
        for (slot, digit) in digits.iter_mut().enumerate() {
            let block = falling_factorial((pool.len() - 1) as u64, (DIGIT_SLOTS - slot - 1) as u64);
            let position = (remainder / block) as usize;
            remainder %= block;
            *digit = pool.remove(position);
        }

        Ok(Password::from_parts(upper, digits, lower))
    }

    /// Inverse of [`PasswordSpace::decode`].
    pub fn index_of(password: &Password) -> u64 {
        let bytes = password.as_str().as_bytes();
        let upper = u64::from(bytes[0] - b'A');
        let lower = u64::from(bytes[DIGIT_SLOTS + 1] - b'a');

        let mut pool: Vec<u8> = DIGITS.to_vec();
        let mut arrangement = 0;
        for (slot, digit) in bytes[1..1 + DIGIT_SLOTS].iter().enumerate() {
            let position = pool.iter().position(|d| d == digit).unwrap_or(0);
            let block = falling_factorial((pool.len() - 1) as u64, (DIGIT_SLOTS - slot - 1) as u64);
            arrangement += position as u64 * block;
            pool.remove(position);
        }

        (upper * DIGIT_ARRANGEMENTS + arrangement) * LOWERCASE.len() as u64 + lower
    }
}

/// How a batch of distinct passwords is drawn.
///
/// Serialized as `"budget"` / `"exact"`, the same names the CLI accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStrategy {
    /// Repeated single draws under a `count × 100` attempt budget.
    #[default]
    #[serde(rename = "budget")]
    AttemptBudget,
    /// Sampling without replacement over space indices.
    Exact,
}

/// Draws one password using the thread-local RNG.
pub fn generate_one_password() -> Password {
    generate_one_password_with(&mut rand::thread_rng())
}

/// Draws one password from `rng`.
///
/// Uniform uppercase letter, three digits taken without replacement in
/// random order, uniform lowercase letter.
pub fn generate_one_password_with<R: Rng + ?Sized>(rng: &mut R) -> Password {
    let upper = UPPERCASE[rng.gen_range(0..UPPERCASE.len())];

    let mut pool = *DIGITS;
    let (picked, _) = pool.partial_shuffle(rng, DIGIT_SLOTS);
    let mut digits = [0u8; DIGIT_SLOTS];
    digits.copy_from_slice(picked);

    let lower = LOWERCASE[rng.gen_range(0..LOWERCASE.len())];

    Password::from_parts(upper, digits, lower)
}

/// Generates `count` distinct passwords with the attempt-budget strategy.
///
/// May return fewer than `count` passwords if the budget runs out; callers
/// must check the length of the result.
///
/// # Errors
///
/// [`EngineError::InvalidParameter`] when `count` is outside `[1, 20]`.
pub fn generate_n_passwords(count: i64) -> Result<Vec<Password>, EngineError> {
    generate_n_passwords_with(count, GenerationStrategy::AttemptBudget, &mut rand::thread_rng())
}

/// Generates up to `count` distinct passwords from `rng` with `strategy`.
///
/// Results keep the order in which they were drawn.
///
/// # Errors
///
/// [`EngineError::InvalidParameter`] when `count` is outside `[1, 20]`.
pub fn generate_n_passwords_with<R: Rng + ?Sized>(count: i64, strategy: GenerationStrategy, rng: &mut R) -> Result<Vec<Password>, EngineError> {
    if !(MIN_BATCH..=MAX_BATCH).contains(&count) {
        return Err(EngineError::invalid("count", count, "a password count between 1 and 20"));
    }
    let count = count as usize;

    let passwords = match strategy {
        GenerationStrategy::AttemptBudget => draw_with_budget(count, rng),
        GenerationStrategy::Exact => index::sample(rng, SPACE_SIZE as usize, count)
            .into_iter()
            .map(|i| PasswordSpace::decode(i as u64))
            .collect::<Result<Vec<_>, _>>()?,
    };

    debug!(requested = count, delivered = passwords.len(), ?strategy, "generated passwords");
    Ok(passwords)
}

fn draw_with_budget<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Password> {
    let max_attempts = count * ATTEMPTS_PER_PASSWORD;
    let mut seen = HashSet::with_capacity(count);
    let mut passwords = Vec::with_capacity(count);
    let mut attempts = 0;

    while passwords.len() < count && attempts < max_attempts {
        let candidate = generate_one_password_with(rng);
        if seen.insert(candidate.clone()) {
            passwords.push(candidate);
        }
        attempts += 1;
    }

    if passwords.len() < count {
        warn!(requested = count, delivered = passwords.len(), attempts, "attempt budget exhausted");
    }
    passwords
}
