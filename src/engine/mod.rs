//! Combinatorial pattern engine.
//!
//! Pure, stateless computations behind every pwlab command:
//!
//! - **Password space** ([`password`]): exact size of the
//!   `[A-Z][3 distinct digits][a-z]` space, single and batch sampling,
//!   and an index codec over the whole space.
//! - **Binary patterns** ([`binary`]): counting and enumerating binary
//!   strings of length `n` with no two consecutive `1`s.
//!
//! Nothing in this module prompts, prints, or touches the filesystem.
//! Callers in [`crate::commands`] own all presentation and export.
//!
//! ## Usage
//!
//! ```rust
//! use pwlab::engine::{binary, password};
//!
//! assert_eq!(password::total_password_space(), 486_720);
//! assert_eq!(binary::count_valid(5).unwrap(), num_bigint::BigUint::from(13u32));
//! assert_eq!(binary::enumerate_valid(2).unwrap(), vec!["00", "01", "10"]);
//! ```

pub mod binary;
pub mod password;

use thiserror::Error;

/// Errors raised by engine operations.
///
/// Every variant is produced synchronously before any work is done, so a
/// failed call never leaves partial results behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An integer argument is outside the accepted range.
    #[error("invalid parameter `{name}`: got {value}, expected {expected}")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        expected: &'static str,
    },

    /// A string does not have the `[A-Z][3 distinct digits][a-z]` shape.
    #[error("malformed password '{0}': expected an uppercase letter, three distinct digits and a lowercase letter")]
    MalformedPassword(String),
}

impl EngineError {
    pub(crate) fn invalid(name: &'static str, value: i64, expected: &'static str) -> Self {
        EngineError::InvalidParameter { name, value, expected }
    }

    /// Returns `true` for rejected input parameters.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, EngineError::InvalidParameter { .. })
    }
}
