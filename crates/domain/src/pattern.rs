use std::fmt;

use microbench_shared_kernel::{DomainError, DomainResult};
use regex::bytes::Regex;

/// A compiled regular expression applied to raw line bytes.
///
/// Matching is an unanchored search, so `b` matches `abc`.
#[derive(Debug, Clone)]
pub struct LinePattern {
    regex: Regex,
}

impl LinePattern {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPattern` if `pattern` does not compile.
    pub fn new(pattern: &str) -> DomainResult<Self> {
        Regex::new(pattern).map(|regex| Self { regex }).map_err(|err| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })
    }

    #[inline]
    pub fn is_match(&self, line: &[u8]) -> bool {
        self.regex.is_match(line)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl fmt::Display for LinePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_unanchored() {
        let pattern = LinePattern::new("b+c").unwrap();
        assert!(pattern.is_match(b"abbbcd"));
        assert!(!pattern.is_match(b"acb"));
    }

    #[test]
    fn anchors_apply_to_the_line() {
        let pattern = LinePattern::new("^foo$").unwrap();
        assert!(pattern.is_match(b"foo"));
        assert!(!pattern.is_match(b"foo bar"));
    }

    #[test]
    fn matches_non_utf8_bytes() {
        let pattern = LinePattern::new(r"(?-u)\xFF").unwrap();
        assert!(pattern.is_match(&[b'a', 0xFF, b'b']));
    }

    #[test]
    fn invalid_pattern_reports_source() {
        let err = LinePattern::new("(unclosed").unwrap_err();
        match err {
            DomainError::InvalidPattern { pattern, source, .. } => {
                assert_eq!(pattern, "(unclosed");
                assert!(source.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
