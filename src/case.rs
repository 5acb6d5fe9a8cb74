//! ASCII case mapping. Non-ASCII characters pass through untouched, so the
//! byte length of the output always matches the input.

pub fn to_upper_case(input: &str) -> String {
    input.to_ascii_uppercase()
}

pub fn to_lower_case(input: &str) -> String {
    input.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_mixed() {
        assert_eq!(to_upper_case("Hello123"), "HELLO123");
    }

    #[test]
    fn test_lower_mixed() {
        assert_eq!(to_lower_case("Hello123"), "hello123");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_upper_case(""), "");
        assert_eq!(to_lower_case(""), "");
    }

    #[test]
    fn test_non_ascii_untouched() {
        assert_eq!(to_upper_case("straße é"), "STRAßE é");
        assert_eq!(to_lower_case("ÉCOLE"), "École");
    }

    #[test]
    fn test_length_preserved() {
        for s in ["Hello, World!", "ß", "ǅ", "mixed CASE 42"] {
            assert_eq!(to_upper_case(s).len(), s.len());
            assert_eq!(to_lower_case(s).len(), s.len());
        }
    }

    #[test]
    fn test_idempotent() {
        let s = "MiXeD 123 _-";
        assert_eq!(to_upper_case(&to_upper_case(s)), to_upper_case(s));
        assert_eq!(to_lower_case(&to_lower_case(s)), to_lower_case(s));
    }

    #[test]
    fn test_upper_of_lower_for_alphabetic() {
        let s = "AbCdEfXyZ";
        assert_eq!(to_upper_case(&to_lower_case(s)), to_upper_case(s));
    }
}
