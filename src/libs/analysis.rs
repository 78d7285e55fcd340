//! Result bundles handed from the engine to views and exporters.
//!
//! The engine returns bare values; commands need a little context around
//! them (what was requested, when, whether strings were materialized).
//! [`PasswordBatch`] and [`PatternAnalysis`] carry that context and are what
//! gets rendered and exported.

use crate::engine::binary::{count_valid, enumerate_valid};
use crate::engine::password::{generate_n_passwords_with, total_password_space, GenerationStrategy, Password};
use crate::engine::EngineError;
use chrono::Local;
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Serializer};

/// A generated set of distinct passwords.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordBatch {
    pub requested: usize,
    pub strategy: GenerationStrategy,
    pub space_size: u64,
    pub generated_at: String,
    pub passwords: Vec<Password>,
}

impl PasswordBatch {
    /// Generates `count` passwords, seeded when `seed` is given.
    pub fn generate(count: i64, strategy: GenerationStrategy, seed: Option<u64>) -> Result<Self, EngineError> {
        let passwords = match seed {
            Some(seed) => generate_n_passwords_with(count, strategy, &mut StdRng::seed_from_u64(seed))?,
            None => generate_n_passwords_with(count, strategy, &mut rand::thread_rng())?,
        };

        Ok(Self::from_passwords(count.max(0) as usize, strategy, passwords))
    }

    pub fn from_passwords(requested: usize, strategy: GenerationStrategy, passwords: Vec<Password>) -> Self {
        PasswordBatch {
            requested,
            strategy,
            space_size: total_password_space(),
            generated_at: Local::now().to_rfc3339(),
            passwords,
        }
    }

    /// `true` when the attempt budget ran out before `requested` passwords were found.
    pub fn is_short(&self) -> bool {
        self.passwords.len() < self.requested
    }
}

/// Count, and optionally the full list, of valid binary strings of length `n`.
#[derive(Debug, Clone, Serialize)]
pub struct PatternAnalysis {
    pub n: i64,
    #[serde(serialize_with = "serialize_decimal")]
    pub count: BigUint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strings: Option<Vec<String>>,
    #[serde(skip)]
    pub list_limit: i64,
}

impl PatternAnalysis {
    /// Counts strings of length `n` and lists them when `n <= list_limit` or `force_list` is set.
    pub fn analyze(n: i64, list_limit: i64, force_list: bool) -> Result<Self, EngineError> {
        let count = count_valid(n)?;
        let strings = if force_list || n <= list_limit { Some(enumerate_valid(n)?) } else { None };

        Ok(PatternAnalysis { n, count, strings, list_limit })
    }
}

/// Writes a count as a decimal string; JSON numbers cannot hold it exactly.
fn serialize_decimal<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
