#[cfg(test)]
mod tests {
    use pwlab::engine::binary::{count_valid, enumerate_valid};
    use pwlab::engine::EngineError;
    use pwlab::libs::analysis::PatternAnalysis;
    use pwlab::libs::formatter::format_count;
    use num_bigint::BigUint;
    use std::collections::HashSet;

    fn as_set(strings: &[String]) -> HashSet<&str> {
        strings.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_count_valid_concrete_values() {
        for (n, expected) in [(0, 1u32), (1, 2), (2, 3), (5, 13), (10, 144)] {
            assert_eq!(count_valid(n).unwrap(), BigUint::from(expected), "n = {}", n);
        }
    }

    #[test]
    fn test_enumerate_valid_concrete_values() {
        assert_eq!(enumerate_valid(0).unwrap(), vec![String::new()]);
        assert_eq!(as_set(&enumerate_valid(1).unwrap()), HashSet::from(["0", "1"]));

        let three = enumerate_valid(3).unwrap();
        assert_eq!(three.len(), 5);
        assert_eq!(as_set(&three), HashSet::from(["000", "001", "010", "100", "101"]));
    }

    #[test]
    fn test_enumeration_agrees_with_count() {
        for n in 0..=20 {
            assert_eq!(BigUint::from(enumerate_valid(n).unwrap().len()), count_valid(n).unwrap(), "n = {}", n);
        }
    }

    #[test]
    fn test_no_enumerated_string_contains_adjacent_ones() {
        for n in 0..=12 {
            assert!(enumerate_valid(n).unwrap().iter().all(|s| !s.contains("11")));
        }
    }

    #[test]
    fn test_negative_length_is_rejected() {
        assert!(matches!(count_valid(-1), Err(EngineError::InvalidParameter { name: "n", value: -1, .. })));
        assert!(matches!(enumerate_valid(-1), Err(EngineError::InvalidParameter { name: "n", value: -1, .. })));
    }

    #[test]
    fn test_large_counts_stay_exact() {
        assert_eq!(count_valid(90).unwrap(), BigUint::from(7_540_113_804_746_346_429u64));
        assert_eq!(count_valid(185).unwrap().to_string(), "538522340430300790495419781092981030533");
        assert_eq!(count_valid(200).unwrap().to_string(), "734544867157818093234908902110449296423351");
    }

    #[test]
    fn test_analysis_of_long_length_reports_count_only() {
        let analysis = PatternAnalysis::analyze(200, 5, false).unwrap();
        assert!(analysis.strings.is_none());
        assert_eq!(format_count(&analysis.count), "734,544,867,157,818,093,234,908,902,110,449,296,423,351");
    }

    #[test]
    fn test_analysis_lists_only_within_limit() {
        let listed = PatternAnalysis::analyze(4, 5, false).unwrap();
        assert_eq!(listed.count, BigUint::from(8u32));
        assert_eq!(listed.strings.as_ref().map(Vec::len), Some(8));

        let hidden = PatternAnalysis::analyze(6, 5, false).unwrap();
        assert_eq!(hidden.count, BigUint::from(21u32));
        assert!(hidden.strings.is_none());

        let forced = PatternAnalysis::analyze(6, 5, true).unwrap();
        assert_eq!(forced.strings.map(|s| s.len()), Some(21));
    }

    #[test]
    fn test_analysis_rejects_negative_length() {
        assert!(PatternAnalysis::analyze(-3, 5, false).unwrap_err().is_invalid_parameter());
    }
}
