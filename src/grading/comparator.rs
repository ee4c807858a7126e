//! Output comparison policy
//!
//! Pass/fail for a single test case is decided by trimmed byte equality.
//! No numeric tolerance or semantic comparison: exercises that need looser
//! matching must normalize their expected output at authoring time.

/// Compare actual program output against the expected output.
///
/// Both sides are trimmed of leading/trailing whitespace before a
/// byte-for-byte comparison. A program that produced no stdout at all only
/// matches an expected output that trims to empty.
pub fn outputs_match(actual: Option<&str>, expected: &str) -> bool {
    let expected = expected.trim();
    match actual {
        Some(actual) => actual.trim() == expected,
        None => expected.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(outputs_match(Some("42"), "42"));
        assert!(!outputs_match(Some("42"), "43"));
    }

    #[test]
    fn test_trailing_newline_ignored() {
        assert!(outputs_match(Some("5"), "5\n"));
        assert!(outputs_match(Some("5\n"), "5"));
        assert!(outputs_match(Some("  5  \n"), "\t5"));
    }

    #[test]
    fn test_interior_whitespace_significant() {
        assert!(!outputs_match(Some("1 2"), "1  2"));
        assert!(!outputs_match(Some("a\nb"), "a b"));
    }

    #[test]
    fn test_missing_stdout() {
        assert!(outputs_match(None, ""));
        assert!(outputs_match(None, "  \n"));
        assert!(!outputs_match(None, "5"));
    }

    #[test]
    fn test_trim_idempotence() {
        // compare(a, b) == compare(trim(a), trim(b))
        let cases = [("  5\n", "5"), ("x", " x "), ("", "\n"), ("a b", "a b\n")];
        for (a, b) in cases {
            assert_eq!(
                outputs_match(Some(a), b),
                outputs_match(Some(a.trim()), b.trim())
            );
        }
    }

    #[test]
    fn test_argument_order_irrelevant() {
        // Trimming is applied to both sides identically, so swapping the
        // operands cannot change the boolean.
        let cases = [("5\n", "5"), ("abc", "abd"), ("", " "), ("x ", " x")];
        for (a, b) in cases {
            assert_eq!(outputs_match(Some(a), b), outputs_match(Some(b), a));
        }
    }

    #[test]
    fn test_no_numeric_tolerance() {
        assert!(!outputs_match(Some("1.0"), "1"));
        assert!(!outputs_match(Some("0.30000000000000004"), "0.3"));
    }
}
