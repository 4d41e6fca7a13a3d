// pattern matching by binary search on the suffix array

use std::cmp::Ordering;
use std::ops::Range;

use crate::sa::is_permutation;

// compare the suffix at `p`, truncated to the pattern length, against the pattern
fn cmp_prefix(s: &[u8], p: i32, pattern: &[u8]) -> Ordering {
    let p = p as usize;
    let end = std::cmp::min(s.len(), p + pattern.len());
    s[p..end].cmp(pattern)
}

/// the suffix array interval whose suffixes start with `pattern`
///
/// Occurrences of a pattern are contiguous in suffix order: every truncated
/// prefix below the interval is `< pattern`, every one above it is `> pattern`.
pub fn occurrence_range(s: &[u8], sa: &[i32], pattern: &[u8]) -> Range<usize> {
    debug_assert!(is_permutation(sa, s.len()));
    if sa.is_empty() || pattern.is_empty() {
        return 0..0;
    }
    let lo = sa.partition_point(|&p| cmp_prefix(s, p, pattern) == Ordering::Less);
    let hi = lo
        + sa[lo..].partition_point(|&p| cmp_prefix(s, p, pattern) == Ordering::Equal);
    lo..hi
}

/// offset of the lexicographically smallest suffix starting with `pattern`
pub fn search_pattern(s: &[u8], sa: &[i32], pattern: &[u8]) -> Option<usize> {
    debug_assert!(is_permutation(sa, s.len()));
    if sa.is_empty() || pattern.is_empty() {
        return None;
    }
    let lo = sa.partition_point(|&p| cmp_prefix(s, p, pattern) == Ordering::Less);
    match sa.get(lo) {
        Some(&p) if cmp_prefix(s, p, pattern) == Ordering::Equal => Some(p as usize),
        _ => None,
    }
}

pub fn contains(s: &[u8], sa: &[i32], pattern: &[u8]) -> bool {
    search_pattern(s, sa, pattern).is_some()
}

/// all offsets where `pattern` occurs, in increasing order
pub fn find_all_occurrences(s: &[u8], sa: &[i32], pattern: &[u8]) -> Vec<usize> {
    let mut occs: Vec<usize> = sa[occurrence_range(s, sa, pattern)]
        .iter()
        .map(|&p| p as usize)
        .collect();
    occs.sort_unstable();
    occs
}

#[test]
fn test_search_abcabc() {
    let s = b"abcabc";
    let sa = crate::doubling::build_suffix_array_doubling(s);
    assert_eq!(find_all_occurrences(s, &sa, b"abc"), vec![0, 3]);
    // "abc" (3) sorts before "abcabc" (0)
    assert_eq!(search_pattern(s, &sa, b"abc"), Some(3));
    assert_eq!(find_all_occurrences(s, &sa, b"c"), vec![2, 5]);
    assert_eq!(find_all_occurrences(s, &sa, b"cab"), vec![2]);
}

#[test]
fn test_search_mississippi() {
    let s = b"mississippi";
    let sa = crate::doubling::build_suffix_array_doubling(s);
    assert_eq!(find_all_occurrences(s, &sa, b"is"), vec![1, 4]);
    assert_eq!(find_all_occurrences(s, &sa, b"ss"), vec![2, 5]);
    assert_eq!(find_all_occurrences(s, &sa, b"ssi"), vec![2, 5]);
    assert_eq!(find_all_occurrences(s, &sa, b"i"), vec![1, 4, 7, 10]);
    assert_eq!(occurrence_range(s, &sa, b"i"), 0..4);
    assert_eq!(search_pattern(s, &sa, b"iss"), Some(4));
    assert_eq!(search_pattern(s, &sa, b"xyz"), None);
    assert!(find_all_occurrences(s, &sa, b"xyz").is_empty());
}

#[test]
fn test_search_pattern_longer_than_suffix() {
    let s = b"banana";
    let sa = crate::naive::build_suffix_array_naive(s);
    assert_eq!(search_pattern(s, &sa, b"nanas"), None);
    assert_eq!(search_pattern(s, &sa, b"bananas"), None);
    assert_eq!(search_pattern(s, &sa, b"banana"), Some(0));
    assert_eq!(occurrence_range(s, &sa, b"ab"), 1..1);
}

#[test]
fn test_search_trivial_texts() {
    assert_eq!(search_pattern(b"", &[], b"a"), None);
    assert!(find_all_occurrences(b"", &[], b"a").is_empty());
    assert_eq!(search_pattern(b"a", &[0], b"a"), Some(0));
    assert_eq!(search_pattern(b"a", &[0], b"b"), None);
    assert_eq!(search_pattern(b"a", &[0], b""), None);
    assert!(find_all_occurrences(b"a", &[0], b"").is_empty());
}

#[cfg(test)]
mod tests {
    use super::{find_all_occurrences, occurrence_range, search_pattern};
    use crate::doubling::build_suffix_array_doubling;
    use quickcheck::quickcheck;

    // offsets found by scanning every window of the text
    fn scan(s: &[u8], pattern: &[u8]) -> Vec<usize> {
        if pattern.is_empty() || pattern.len() > s.len() {
            return Vec::new();
        }
        s.windows(pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == pattern)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn qc_occurrences_match_scan() {
        fn prop(s: Vec<u8>, pattern: Vec<u8>) -> bool {
            let s: Vec<u8> = s.into_iter().map(|c| b'a' + c % 2).collect();
            let pattern: Vec<u8> = pattern
                .into_iter()
                .take(4)
                .map(|c| b'a' + c % 2)
                .collect();
            let sa = build_suffix_array_doubling(&s);
            let expected = scan(&s, &pattern);
            find_all_occurrences(&s, &sa, &pattern) == expected
                && search_pattern(&s, &sa, &pattern).is_some() == !expected.is_empty()
        }
        quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
    }

    #[test]
    fn qc_occurrences_are_contiguous() {
        fn prop(s: Vec<u8>, pattern: Vec<u8>) -> bool {
            let s: Vec<u8> = s.into_iter().map(|c| b'a' + c % 3).collect();
            let pattern: Vec<u8> = pattern
                .into_iter()
                .take(3)
                .map(|c| b'a' + c % 3)
                .collect();
            let sa = build_suffix_array_doubling(&s);
            let range = occurrence_range(&s, &sa, &pattern);
            let matching: Vec<usize> = (0..sa.len())
                .filter(|&i| !pattern.is_empty() && s[sa[i] as usize..].starts_with(&pattern))
                .collect();
            matching == range.collect::<Vec<usize>>()
        }
        quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
    }

    #[test]
    fn qc_search_returns_leftmost() {
        fn prop(s: Vec<u8>, pattern: Vec<u8>) -> bool {
            let s: Vec<u8> = s.into_iter().map(|c| b'a' + c % 2).collect();
            let pattern: Vec<u8> = pattern
                .into_iter()
                .take(3)
                .map(|c| b'a' + c % 2)
                .collect();
            let sa = build_suffix_array_doubling(&s);
            let range = occurrence_range(&s, &sa, &pattern);
            let leftmost = if range.is_empty() {
                None
            } else {
                Some(sa[range.start] as usize)
            };
            search_pattern(&s, &sa, &pattern) == leftmost
        }
        quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
    }
}
