//! Semver precedence ordering
//!
//! Build metadata never participates. Pre-release versions sort before the
//! associated normal version, and pre-release identifiers compare field by
//! field: numeric < alphanumeric, numerics by value, alphanumerics by ASCII.

use std::cmp::Ordering;

use crate::version::error::ParseError;
use crate::version::semver::{Identifier, SemanticVersion, parse};

/// Compare two versions by precedence
pub fn compare(a: &SemanticVersion, b: &SemanticVersion) -> Ordering {
    (a.major(), a.minor(), a.patch())
        .cmp(&(b.major(), b.minor(), b.patch()))
        .then_with(|| compare_prerelease(a.prerelease(), b.prerelease()))
}

/// Parse and compare two version strings, returning -1, 0 or 1
pub fn compare_str(a: &str, b: &str) -> Result<i8, ParseError> {
    let a = parse(a)?;
    let b = parse(b)?;
    Ok(match compare(&a, &b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // A pre-release has lower precedence than the normal version
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            for (x, y) in a.iter().zip(b) {
                let ord = compare_identifier(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            // Shorter sequence wins only when every shared field is equal
            a.len().cmp(&b.len())
        }
    }
}

fn compare_identifier(a: &Identifier, b: &Identifier) -> Ordering {
    match (a, b) {
        // No leading zeros, so a longer digit string is a larger number
        (Identifier::Numeric(x), Identifier::Numeric(y)) => {
            x.len().cmp(&y.len()).then_with(|| x.cmp(y))
        }
        (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
        (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
        (Identifier::AlphaNumeric(x), Identifier::AlphaNumeric(y)) => {
            x.as_bytes().cmp(y.as_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.0.0-alpha", "1.0.0-alpha.1", -1)]
    #[case("1.0.0-alpha.1", "1.0.0-alpha.beta", -1)]
    #[case("1.0.0-alpha.beta", "1.0.0-beta", -1)]
    #[case("1.0.0-beta", "1.0.0-beta.2", -1)]
    #[case("1.0.0-beta.2", "1.0.0-beta.11", -1)]
    #[case("1.0.0-beta.11", "1.0.0-rc.1", -1)]
    #[case("1.0.0-rc.1", "1.0.0", -1)]
    #[case("1.0.0", "1.0.0-0", 1)]
    #[case("1.0.0", "2.0.0", -1)]
    #[case("2.0.0", "2.1.0", -1)]
    #[case("2.1.0", "2.1.1", -1)]
    #[case("2.1.1", "2.1.0", 1)]
    #[case("1.2.3", "v1.2.3", 0)]
    #[case("1.0.0+a", "1.0.0+b", 0)]
    #[case("1.0.0-rc.1+a", "1.0.0-rc.1", 0)]
    #[case("1.0.0-a.b", "1.0.0-a.b", 0)]
    #[case("1.0.0-9", "1.0.0-10", -1)]
    #[case("1.0.0-Z", "1.0.0-a", -1)]
    #[case("1.0.0-1.99999999999999999999", "1.0.0-1.100000000000000000000", -1)]
    fn compare_str_returns_expected(#[case] a: &str, #[case] b: &str, #[case] expected: i8) {
        assert_eq!(compare_str(a, b), Ok(expected));
        assert_eq!(compare_str(b, a), Ok(-expected));
    }

    #[test]
    fn compare_str_rejects_invalid_input() {
        assert_eq!(compare_str("1.0", "1.0.0"), Err(ParseError::new("1.0")));
        assert_eq!(compare_str("1.0.0", "x"), Err(ParseError::new("x")));
    }

    #[test]
    fn compare_is_transitive_over_sorted_chain() {
        let chain = [
            "0.9.9",
            "1.0.0-0",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "1.0.1",
            "1.1.0",
            "2.0.0",
        ];
        let versions: Vec<_> = chain.iter().map(|v| parse(v).unwrap()).collect();

        for (i, a) in versions.iter().enumerate() {
            assert_eq!(compare(a, a), Ordering::Equal);
            for b in &versions[i + 1..] {
                assert_eq!(compare(a, b), Ordering::Less, "{a} < {b}");
                assert_eq!(compare(b, a), Ordering::Greater, "{b} > {a}");
            }
        }
    }
}
