//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{Address, GeoLocation, MAX_ADDRESS_CHARS, normalize_address};
use proptest::prelude::*;

// ============================================================================
// Address normalization properties
// ============================================================================

mod address_tests {
    use super::*;

    proptest! {
        #[test]
        fn normalization_is_idempotent(raw in ".{0,256}") {
            let once = normalize_address(&raw);
            let twice = normalize_address(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalized_text_has_no_forbidden_characters(raw in ".{0,256}") {
            let normalized = normalize_address(&raw);
            let has_forbidden = normalized.chars().any(|c| {
                c.is_control() || matches!(c, '/' | '"' | '\'' | '\\' | ';')
            });
            prop_assert!(!has_forbidden);
        }

        #[test]
        fn normalized_text_has_no_double_spaces(raw in ".{0,256}") {
            let normalized = normalize_address(&raw);
            prop_assert!(!normalized.contains("  "));
            prop_assert_eq!(normalized.trim(), normalized.as_str());
        }

        #[test]
        fn parsed_address_round_trips_through_normalization(raw in "[a-zA-Z0-9 ,.]{1,64}") {
            if let Ok(addr) = Address::parse(&raw) {
                // Already-clean text must not be mangled further
                prop_assert_eq!(normalize_address(addr.as_str()), addr.as_str());
            }
        }

        #[test]
        fn length_bound_is_enforced(extra in 1usize..16) {
            let input = "x".repeat(MAX_ADDRESS_CHARS + extra);
            prop_assert!(Address::parse(&input).is_err());
        }
    }
}

// ============================================================================
// GeoLocation properties
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_err());
        }
    }
}
