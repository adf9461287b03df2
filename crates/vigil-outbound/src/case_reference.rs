//! Case-reference token generation.

use rand::Rng;

/// Suffix alphabet: uppercase base36. Six characters give a 36^6 space,
/// making collisions within the same millisecond overwhelmingly unlikely.
const SUFFIX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 6;

/// Generates an opaque correlation token of the form
/// `PV-<unix-millis>-<6-char base36>`.
///
/// Generated once per follow-up request, used only for display and
/// correlation, and never persisted by this system.
pub fn generate_case_reference() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("PV-{}-{}", millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(reference: &str) {
        let mut parts = reference.splitn(3, '-');
        assert_eq!(parts.next(), Some("PV"));

        let millis = parts.next().expect("millis segment");
        assert!(millis.parse::<i64>().is_ok(), "millis not numeric: {}", millis);

        let suffix = parts.next().expect("suffix segment");
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
    }

    #[test]
    fn references_match_the_fixed_shape() {
        for _ in 0..100 {
            assert_well_formed(&generate_case_reference());
        }
    }

    #[test]
    fn repeated_generation_is_unique_in_practice() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(generate_case_reference()));
        }
    }
}
