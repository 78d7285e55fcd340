#[cfg(test)]
mod tests {
    use pwlab::engine::password::{
        generate_n_passwords, generate_n_passwords_with, generate_one_password, total_password_space, GenerationStrategy, Password, PasswordSpace,
    };
    use pwlab::engine::EngineError;
    use pwlab::libs::analysis::PasswordBatch;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn assert_shape(password: &Password) {
        let s = password.as_str();
        let chars: Vec<char> = s.chars().collect();
        assert_eq!(chars.len(), 5, "{}", s);
        assert!(chars[0].is_ascii_uppercase(), "{}", s);
        assert!(chars[1..4].iter().all(char::is_ascii_digit), "{}", s);
        assert!(chars[4].is_ascii_lowercase(), "{}", s);

        let digits: HashSet<&char> = chars[1..4].iter().collect();
        assert_eq!(digits.len(), 3, "repeated digit in {}", s);
    }

    #[test]
    fn test_total_password_space_is_constant() {
        for _ in 0..3 {
            assert_eq!(total_password_space(), 486720);
        }
    }

    #[test]
    fn test_single_password_shape() {
        for _ in 0..1000 {
            assert_shape(&generate_one_password());
        }
    }

    #[test]
    fn test_batches_are_distinct_and_well_formed() {
        for count in 1..=20 {
            let passwords = generate_n_passwords(count).unwrap();
            assert_eq!(passwords.len(), count as usize);

            let distinct: HashSet<&Password> = passwords.iter().collect();
            assert_eq!(distinct.len(), passwords.len());
            passwords.iter().for_each(assert_shape);
        }
    }

    #[test]
    fn test_batch_size_limits() {
        assert!(matches!(generate_n_passwords(0), Err(EngineError::InvalidParameter { name: "count", value: 0, .. })));
        assert!(matches!(generate_n_passwords(21), Err(EngineError::InvalidParameter { name: "count", value: 21, .. })));
        assert!(generate_n_passwords(1).is_ok());
        assert!(generate_n_passwords(20).is_ok());
    }

    #[test]
    fn test_exact_strategy_delivers_full_batch() {
        let mut rng = StdRng::seed_from_u64(2024);
        for count in [1, 7, 20] {
            let passwords = generate_n_passwords_with(count, GenerationStrategy::Exact, &mut rng).unwrap();
            assert_eq!(passwords.len(), count as usize);
            passwords.iter().for_each(assert_shape);
        }
    }

    #[test]
    fn test_exact_strategy_validates_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_n_passwords_with(21, GenerationStrategy::Exact, &mut rng).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_space_codec_round_trip() {
        for index in [0, 1, 25, 26, 719 * 26, 486_719] {
            let password = PasswordSpace::decode(index).unwrap();
            assert_shape(&password);
            assert_eq!(PasswordSpace::index_of(&password), index);
        }

        let parsed: Password = "M905q".parse().unwrap();
        assert_eq!(PasswordSpace::decode(PasswordSpace::index_of(&parsed)).unwrap(), parsed);
    }

    #[test]
    fn test_seeded_batch_is_reproducible() {
        let first = PasswordBatch::generate(12, GenerationStrategy::AttemptBudget, Some(99)).unwrap();
        let second = PasswordBatch::generate(12, GenerationStrategy::AttemptBudget, Some(99)).unwrap();
        assert_eq!(first.passwords, second.passwords);
        assert_eq!(first.requested, 12);
        assert_eq!(first.space_size, 486_720);
        assert!(!first.is_short());
    }

    #[test]
    fn test_short_batch_is_reported() {
        let passwords = vec!["A123b".parse::<Password>().unwrap()];
        let batch = PasswordBatch::from_passwords(3, GenerationStrategy::AttemptBudget, passwords);
        assert!(batch.is_short());
    }

    #[test]
    fn test_batch_rejects_invalid_count() {
        assert!(PasswordBatch::generate(0, GenerationStrategy::Exact, None).unwrap_err().is_invalid_parameter());
    }
}
