/// Characters stripped by [`trim`]. Form feed, vertical tab and Unicode
/// spaces are not in the set.
pub const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

pub fn is_trim_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Removes leading and trailing [`WHITESPACE`]. Interior whitespace is kept.
pub fn trim(input: &str) -> String {
    input.trim_matches(is_trim_whitespace).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(trim(""), "");
    }

    #[test]
    fn test_only_whitespace() {
        assert_eq!(trim("   "), "");
        assert_eq!(trim(" \t\r\n "), "");
    }

    #[test]
    fn test_both_ends() {
        assert_eq!(trim("  hello  "), "hello");
        assert_eq!(trim("\t\nhello\r\n"), "hello");
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        assert_eq!(trim("  a b  "), "a b");
        assert_eq!(trim("\ta \t b\n"), "a \t b");
    }

    #[test]
    fn test_no_whitespace_unchanged() {
        assert_eq!(trim("hello"), "hello");
    }

    #[test]
    fn test_other_whitespace_kept() {
        // form feed, vertical tab and NBSP are outside the trim set
        assert_eq!(trim("\x0chi\x0b"), "\x0chi\x0b");
        assert_eq!(trim(" \u{00A0}hi "), "\u{00A0}hi");
    }

    #[test]
    fn test_idempotent() {
        for s in ["", "  x ", "\r\n a b \t", "abc", " \n "] {
            assert_eq!(trim(&trim(s)), trim(s));
        }
    }
}
