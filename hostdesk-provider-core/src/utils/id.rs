//! Identifier generation for provider-style resource ids.

use uuid::Uuid;

/// Number of UUID hex characters kept after the prefix.
const ID_SUFFIX_LEN: usize = 12;

/// Generate a provider-style identifier with the given prefix,
/// e.g. `txn_1f9a38c2d4e5`.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &uuid[..ID_SUFFIX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_prefix() {
        assert!(generate_id("txn").starts_with("txn_"));
        assert!(generate_id("cus").starts_with("cus_"));
    }

    #[test]
    fn suffix_length_fixed() {
        assert_eq!(generate_id("pi").len(), "pi_".len() + ID_SUFFIX_LEN);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(generate_id("inv"), generate_id("inv"));
    }

    #[test]
    fn suffix_is_lowercase_hex() {
        let id = generate_id("sub");
        let suffix = id.trim_start_matches("sub_");
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
