use thompson_regex::{is_match, Regex};

// (pattern, haystack, expected)
const TESTS: &[(&str, &str, bool)] = &[
    // literals
    ("a", "a", true),
    ("a", "", false),
    ("abc", "abc", true),
    ("abc", "abcd", false),
    ("abc", "xabc", false),
    ("a.c", "a.c", true),
    ("a.c", "abc", false),
    // concatenation
    ("ab", "ab", true),
    ("ab", "a", false),
    ("ab", "ba", false),
    // alternation
    ("a|b", "a", true),
    ("a|b", "b", true),
    ("a|b", "c", false),
    ("a|b", "ab", false),
    ("ab|cd", "cd", true),
    ("ab|cd", "ad", false),
    ("a|b|c", "c", true),
    // star
    ("a*", "", true),
    ("a*", "aaaa", true),
    ("a*", "aab", false),
    ("ba*", "b", true),
    ("ba*", "baaa", true),
    ("a*b", "aaab", true),
    ("a*b", "aaa", false),
    // plus
    ("a+", "", false),
    ("a+", "a", true),
    ("a+", "aaa", true),
    ("a+b+", "abbb", true),
    ("a+b+", "b", false),
    // optional
    ("a?b", "b", true),
    ("a?b", "ab", true),
    ("a?b", "aab", false),
    ("a??", "", true),
    // groups
    ("(ab)+", "abab", true),
    ("(ab)+", "aba", false),
    ("(ab)+", "", false),
    ("(ab)*", "", true),
    ("(a|b)*c", "abbac", true),
    ("(a|b)*c", "abbab", false),
    ("a(bb)+|cde", "abbbb", true),
    ("a(bb)+|cde", "abbb", false),
    ("a(bb)+|cde", "cde", true),
    ("((a))", "a", true),
    ("(a)(b)", "ab", true),
    // nested quantifiers over epsilon cycles
    ("(a*)*", "", true),
    ("(a*)*", "aaaa", true),
    ("(a*)*", "b", false),
    ("(a+)*", "aaa", true),
    ("(a?)*", "aa", true),
    ("(a*)+", "", true),
    ("(a*|b)*", "abba", true),
    ("((a*)*b)*", "aabab", true),
    ("((a*)*b)*", "aaba", false),
    // empty pattern
    ("", "", true),
    ("", "a", false),
    // non-ASCII
    ("ü+", "üüü", true),
    ("δ|λ", "λ", true),
];

#[test]
fn table() {
    crate::init();
    for &(pattern, haystack, expected) in TESTS {
        let re = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("failed to compile {:?}: {}", pattern, e));
        assert_eq!(
            re.is_match(haystack),
            expected,
            "pattern {:?} against {:?}",
            pattern,
            haystack
        );
    }
}

#[test]
fn table_via_shortcut() -> anyhow::Result<()> {
    for &(pattern, haystack, expected) in TESTS {
        assert_eq!(is_match(pattern, haystack)?, expected, "{:?} {:?}", pattern, haystack);
    }
    Ok(())
}

#[test]
fn literal_patterns_match_only_themselves() -> anyhow::Result<()> {
    let re = Regex::new("hello")?;
    assert!(re.is_match("hello"));
    for other in ["", "hell", "hello!", "Hello", "ohello"] {
        assert!(!re.is_match(other), "{:?}", other);
    }
    Ok(())
}

#[test]
fn long_haystack() -> anyhow::Result<()> {
    let re = Regex::new("(a|aa)*b")?;
    let mut haystack = "a".repeat(10_000);
    assert!(!re.is_match(&haystack));
    haystack.push('b');
    assert!(re.is_match(&haystack));
    Ok(())
}

#[test]
fn deeply_nested_quantifiers_terminate() -> anyhow::Result<()> {
    let pattern = format!("{}a{}", "(".repeat(50), ")*".repeat(50));
    let re = Regex::new(&pattern)?;
    assert!(re.is_match(""));
    assert!(re.is_match("aaaaaaaa"));
    assert!(!re.is_match("aaab"));
    Ok(())
}
