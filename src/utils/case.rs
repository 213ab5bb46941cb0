use regex::Regex;
use std::sync::LazyLock;

static RE_WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z0-9]*").expect("word boundary pattern is valid"));

/// Convert a camelCase or PascalCase identifier to snake_case.
///
/// Every uppercase ASCII letter starts a new word, so acronyms split letter
/// by letter: `staffID` becomes `staff_i_d`. Input without uppercase letters
/// is returned unchanged.
pub fn to_snake_case(input: &str) -> String {
    let converted = RE_WORD_START.replace_all(input, |caps: &regex::Captures| {
        format!("_{}", caps[0].to_ascii_lowercase())
    });

    // Only the marker inserted for a leading capital is removed; an input
    // that already starts with '_' keeps it
    if input.starts_with(|c: char| c.is_ascii_uppercase()) {
        converted
            .strip_prefix('_')
            .unwrap_or(converted.as_ref())
            .to_string()
    } else {
        converted.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case_camel() {
        assert_eq!(to_snake_case("staffId"), "staff_id");
        assert_eq!(to_snake_case("firstName"), "first_name");
        assert_eq!(to_snake_case("qualificationExpiryDate"), "qualification_expiry_date");
    }

    #[test]
    fn test_to_snake_case_pascal() {
        assert_eq!(to_snake_case("StaffMember"), "staff_member");
        assert_eq!(to_snake_case("Id"), "id");
        assert_eq!(to_snake_case("A"), "a");
    }

    #[test]
    fn test_to_snake_case_acronyms_split_per_letter() {
        assert_eq!(to_snake_case("staffID"), "staff_i_d");
        assert_eq!(to_snake_case("ABC"), "a_b_c");
        assert_eq!(to_snake_case("HTTPServer"), "h_t_t_p_server");
    }

    #[test]
    fn test_to_snake_case_digits_stay_with_word() {
        assert_eq!(to_snake_case("address2Line"), "address2_line");
        assert_eq!(to_snake_case("v1Api"), "v1_api");
    }

    #[test]
    fn test_to_snake_case_without_uppercase_is_unchanged() {
        for input in ["", "staff", "staff_id", "already_snake_2", "_private", "ünïcode"] {
            assert_eq!(to_snake_case(input), input);
        }
    }

    #[test]
    fn test_to_snake_case_keeps_existing_leading_underscore() {
        assert_eq!(to_snake_case("_Foo"), "__foo");
        assert_eq!(to_snake_case("_staffId"), "_staff_id");
    }

    #[test]
    fn test_to_snake_case_never_adds_leading_underscore() {
        for input in ["Staff", "StaffID", "X1", "ZZ", "aB", "Qualification"] {
            assert!(!to_snake_case(input).starts_with('_'), "{}", input);
        }
    }
}
