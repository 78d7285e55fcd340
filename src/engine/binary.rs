//! Binary strings without consecutive ones.
//!
//! A string over `{0, 1}` is valid when no two adjacent characters are both
//! `1`. Every valid string of length `n` either ends in `0` after a valid
//! string of length `n - 1`, or ends in `01` after a valid string of length
//! `n - 2`, which gives
//!
//! ```text
//! S(0) = 1, S(1) = 2, S(n) = S(n - 1) + S(n - 2)
//! ```
//!
//! i.e. `S(n) = F(n + 2)` in Fibonacci terms.

use super::EngineError;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use tracing::debug;

/// Most result slots reserved before enumeration starts; beyond this the
/// vector grows as strings are found.
pub const RESERVE_LIMIT: usize = 1 << 16;

const LENGTH_EXPECTED: &str = "a non-negative length";

fn validate_length(n: i64) -> Result<usize, EngineError> {
    if n < 0 {
        return Err(EngineError::invalid("n", n, LENGTH_EXPECTED));
    }
    usize::try_from(n).map_err(|_| EngineError::invalid("n", n, LENGTH_EXPECTED))
}

/// Counts valid binary strings of length `n`.
///
/// Bottom-up over the recurrence keeping only the last two terms, so the
/// cost is O(n) additions and two live values. Counts are exact for every
/// length; `S(n)` has roughly `0.7 n` bits.
///
/// # Errors
///
/// [`EngineError::InvalidParameter`] when `n < 0`.
pub fn count_valid(n: i64) -> Result<BigUint, EngineError> {
    let length = validate_length(n)?;
    if length == 0 {
        return Ok(BigUint::one());
    }

    let (mut previous, mut current) = (BigUint::one(), BigUint::from(2u32));
    for _ in 2..=length {
        let next = &previous + &current;
        previous = std::mem::replace(&mut current, next);
    }

    Ok(current)
}

/// Result slots to reserve up front for length `length`, capped at [`RESERVE_LIMIT`].
fn reserve_hint(length: usize) -> usize {
    match i64::try_from(length).ok().and_then(|n| count_valid(n).ok()).and_then(|c| c.to_usize()) {
        Some(count) => count.min(RESERVE_LIMIT),
        None => RESERVE_LIMIT,
    }
}

/// Enumerates every valid binary string of length `n`.
///
/// Depth-first backtracking: each step always tries `0`, and tries `1` only
/// when the prefix is empty or ends in `0`. Branches that would create `11`
/// are never entered, so no result needs filtering afterwards. Since `0` is
/// explored before `1`, results come out in lexicographic order.
///
/// Returns `[""]` for `n = 0`. Output size grows like the count, so callers
/// decide how large an `n` is worth materializing.
///
/// # Errors
///
/// [`EngineError::InvalidParameter`] when `n < 0`.
pub fn enumerate_valid(n: i64) -> Result<Vec<String>, EngineError> {
    let length = validate_length(n)?;

    let mut found = Vec::with_capacity(reserve_hint(length));
    let mut prefix = String::with_capacity(length);
    extend(&mut prefix, length, &mut found);

    debug!(n, strings = found.len(), "enumerated binary strings");
    Ok(found)
}

fn extend(prefix: &mut String, length: usize, found: &mut Vec<String>) {
    if prefix.len() == length {
        found.push(prefix.clone());
        return;
    }

    prefix.push('0');
    extend(prefix, length, found);
    prefix.pop();

    if !prefix.ends_with('1') {
        prefix.push('1');
        extend(prefix, length, found);
        prefix.pop();
    }
}

/// Checks that `s` is made of `0`/`1` only and never contains `11`.
pub fn is_valid_pattern(s: &str) -> bool {
    s.chars().all(|c| c == '0' || c == '1') && !s.contains("11")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn count(n: i64) -> BigUint {
        count_valid(n).unwrap()
    }

    fn big(digits: &str) -> BigUint {
        digits.parse().unwrap()
    }

    #[test]
    fn test_count_valid_base_cases() {
        assert_eq!(count(0), BigUint::from(1u32));
        assert_eq!(count(1), BigUint::from(2u32));
    }

    #[test]
    fn test_count_valid_known_values() {
        assert_eq!(count(2), BigUint::from(3u32));
        assert_eq!(count(3), BigUint::from(5u32));
        assert_eq!(count(5), BigUint::from(13u32));
        assert_eq!(count(10), BigUint::from(144u32));
        assert_eq!(count(20), BigUint::from(17_711u32));
        assert_eq!(count(50), BigUint::from(32_951_280_099u64));
    }

    #[test]
    fn test_count_valid_follows_recurrence() {
        for n in 2..=300 {
            assert_eq!(count(n), count(n - 1) + count(n - 2), "n = {}", n);
        }
    }

    #[test]
    fn test_count_valid_rejects_negative_length() {
        let err = count_valid(-1).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(count_valid(i64::MIN).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_count_valid_past_128_bits() {
        assert_eq!(count(184), BigUint::from(332_825_110_087_067_562_321_196_029_789_634_457_848u128));
        assert_eq!(count(185), big("538522340430300790495419781092981030533"));
        assert!(count(185) > BigUint::from(u128::MAX));
        assert_eq!(count(300), big("581811569836004006491505558634099066259034153405766997246569401"));
    }

    #[test]
    fn test_reserve_hint_is_capped() {
        assert_eq!(reserve_hint(0), 1);
        assert_eq!(reserve_hint(5), 13);
        assert_eq!(reserve_hint(40), RESERVE_LIMIT);
        assert_eq!(reserve_hint(90), RESERVE_LIMIT);
        assert_eq!(reserve_hint(400), RESERVE_LIMIT);
    }

    #[test]
    fn test_enumerate_valid_beyond_reserve_limit() {
        let strings = enumerate_valid(24).unwrap();
        assert_eq!(strings.len(), 121_393);
        assert!(strings.len() > RESERVE_LIMIT);
        assert_eq!(strings.last().map(String::as_str), Some("101010101010101010101010"));
    }

    #[test]
    fn test_enumerate_valid_empty_length() {
        assert_eq!(enumerate_valid(0).unwrap(), vec![String::new()]);
    }

    #[test]
    fn test_enumerate_valid_small_lengths() {
        let one: BTreeSet<String> = enumerate_valid(1).unwrap().into_iter().collect();
        assert_eq!(one, ["0", "1"].iter().map(|s| s.to_string()).collect());

        let three: BTreeSet<String> = enumerate_valid(3).unwrap().into_iter().collect();
        let expected: BTreeSet<String> = ["000", "001", "010", "100", "101"].iter().map(|s| s.to_string()).collect();
        assert_eq!(three, expected);
    }

    #[test]
    fn test_enumerate_valid_is_lexicographic() {
        let strings = enumerate_valid(4).unwrap();
        let mut sorted = strings.clone();
        sorted.sort();
        assert_eq!(strings, sorted);
        assert_eq!(strings.first().map(String::as_str), Some("0000"));
        assert_eq!(strings.last().map(String::as_str), Some("1010"));
    }

    #[test]
    fn test_enumerate_matches_count() {
        for n in 0..=16 {
            let strings = enumerate_valid(n).unwrap();
            assert_eq!(BigUint::from(strings.len()), count(n), "n = {}", n);

            let distinct: BTreeSet<&String> = strings.iter().collect();
            assert_eq!(distinct.len(), strings.len());
        }
    }

    #[test]
    fn test_enumerate_never_contains_adjacent_ones() {
        for n in 0..=14 {
            for s in enumerate_valid(n).unwrap() {
                assert_eq!(s.len() as i64, n);
                assert!(!s.contains("11"), "{} contains 11", s);
                assert!(is_valid_pattern(&s));
            }
        }
    }

    #[test]
    fn test_enumerate_valid_rejects_negative_length() {
        assert!(enumerate_valid(-1).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_is_valid_pattern() {
        assert!(is_valid_pattern(""));
        assert!(is_valid_pattern("10101"));
        assert!(!is_valid_pattern("0110"));
        assert!(!is_valid_pattern("012"));
    }
}
