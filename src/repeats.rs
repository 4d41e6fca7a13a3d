// repeated substrings via the lcp array

use std::collections::HashSet;

use crate::sa::is_permutation;

/// a substring of length `len` occurring (at least) at both offsets of `pos`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Repeat {
    pub len: usize,
    /// ascending
    pub pos: [usize; 2],
}

impl Repeat {
    fn at(sa: &[i32], lcp: &[i32], i: usize) -> Self {
        let a = sa[i - 1] as usize;
        let b = sa[i] as usize;
        Repeat {
            len: lcp[i] as usize,
            pos: [a.min(b), a.max(b)],
        }
    }

    pub fn start(&self) -> usize {
        self.pos[0]
    }

    pub fn substring<'a>(&self, s: &'a [u8]) -> &'a [u8] {
        &s[self.pos[0]..self.pos[0] + self.len]
    }
}

/// a distinct repeated substring with every offset it occurs at
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepeatedSubstring<'a> {
    pub text: &'a [u8],
    pub occurrences: Vec<usize>,
}

fn check_arrays(s: &[u8], sa: &[i32], lcp: &[i32]) {
    debug_assert!(is_permutation(sa, s.len()));
    debug_assert_eq!(lcp.len(), sa.len());
}

fn max_lcp(lcp: &[i32]) -> usize {
    lcp.iter().skip(1).copied().max().unwrap_or(0) as usize
}

/// the longest substring occurring at least twice, at the first lcp index
/// realizing it; `None` if no byte repeats
pub fn find_longest_repeated_substring(s: &[u8], sa: &[i32], lcp: &[i32]) -> Option<Repeat> {
    check_arrays(s, sa, lcp);
    let mut best: Option<usize> = None;
    for i in 1..lcp.len() {
        if lcp[i] > best.map_or(0, |b| lcp[b]) {
            best = Some(i);
        }
    }
    best.map(|i| Repeat::at(sa, lcp, i))
}

/// one `Repeat` per lcp index tying the maximum; the same substring may appear
/// several times when it occurs more than twice
pub fn all_longest_repeats(s: &[u8], sa: &[i32], lcp: &[i32]) -> Vec<Repeat> {
    check_arrays(s, sa, lcp);
    let max = max_lcp(lcp);
    if max == 0 {
        return Vec::new();
    }
    (1..lcp.len())
        .filter(|&i| lcp[i] as usize == max)
        .map(|i| Repeat::at(sa, lcp, i))
        .collect()
}

/// the distinct longest repeated substrings with all their occurrences
///
/// Suffixes sharing a prefix of maximal length are adjacent in the suffix
/// array, so each run of maximal lcp entries is exactly one substring.
pub fn longest_repeated_substrings<'a>(
    s: &'a [u8],
    sa: &[i32],
    lcp: &[i32],
) -> Vec<RepeatedSubstring<'a>> {
    check_arrays(s, sa, lcp);
    let max = max_lcp(lcp);
    let mut res = Vec::new();
    if max == 0 {
        return res;
    }
    let mut i = 1;
    while i < lcp.len() {
        if lcp[i] as usize != max {
            i += 1;
            continue;
        }
        let mut j = i;
        while j + 1 < lcp.len() && lcp[j + 1] as usize == max {
            j += 1;
        }
        let mut occurrences: Vec<usize> =
            sa[i - 1..=j].iter().map(|&p| p as usize).collect();
        occurrences.sort_unstable();
        let p = sa[i] as usize;
        res.push(RepeatedSubstring {
            text: &s[p..p + max],
            occurrences,
        });
        i = j + 1;
    }
    res
}

/// up to `k` distinct repeated substrings, longest first
///
/// Ties in length are broken by suffix array position.
pub fn top_k_repeats(s: &[u8], sa: &[i32], lcp: &[i32], k: usize) -> Vec<Repeat> {
    check_arrays(s, sa, lcp);
    let mut peaks: Vec<usize> = (1..lcp.len()).filter(|&i| lcp[i] > 0).collect();
    peaks.sort_by(|&a, &b| lcp[b].cmp(&lcp[a]).then(a.cmp(&b)));

    let mut seen = HashSet::new();
    let mut res = Vec::new();
    for i in peaks {
        if res.len() == k {
            break;
        }
        let r = Repeat::at(sa, lcp, i);
        if seen.insert(r.substring(s)) {
            res.push(r);
        }
    }
    res
}

/// summary of the non-zero entries of `lcp[1..]`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LcpStats {
    pub max: usize,
    pub min: usize,
    pub mean: f64,
    pub total: usize,
    pub count: usize,
}

pub fn lcp_statistics(lcp: &[i32]) -> Option<LcpStats> {
    let values: Vec<usize> = lcp
        .iter()
        .skip(1)
        .filter(|&&x| x > 0)
        .map(|&x| x as usize)
        .collect();
    let max = *values.iter().max()?;
    let min = *values.iter().min()?;
    let total: usize = values.iter().sum();
    Some(LcpStats {
        max,
        min,
        mean: total as f64 / values.len() as f64,
        total,
        count: values.len(),
    })
}

#[cfg(test)]
fn arrays(s: &[u8]) -> (Vec<i32>, Vec<i32>) {
    let sa = crate::doubling::build_suffix_array_doubling(s);
    let lcp = crate::lcp::build_lcp_array(s, &sa);
    (sa, lcp)
}

#[test]
fn test_longest_repeat_mississippi() {
    let s = b"mississippi";
    let (sa, lcp) = arrays(s);
    let r = find_longest_repeated_substring(s, &sa, &lcp).unwrap();
    assert_eq!(r, Repeat { len: 4, pos: [1, 4] });
    assert_eq!(r.substring(s), b"issi");
    assert_eq!(r.start(), 1);
}

#[test]
fn test_longest_repeat_banana() {
    let s = b"banana";
    let (sa, lcp) = arrays(s);
    let r = find_longest_repeated_substring(s, &sa, &lcp).unwrap();
    assert_eq!(r.substring(s), b"ana");
    assert_eq!(r.pos, [1, 3]);
}

#[test]
fn test_longest_repeat_none() {
    for s in [&b""[..], b"a", b"abcd"] {
        let (sa, lcp) = arrays(s);
        assert_eq!(find_longest_repeated_substring(s, &sa, &lcp), None);
        assert!(all_longest_repeats(s, &sa, &lcp).is_empty());
        assert!(longest_repeated_substrings(s, &sa, &lcp).is_empty());
        assert!(top_k_repeats(s, &sa, &lcp, 3).is_empty());
    }
}

#[test]
fn test_longest_repeat_unary() {
    let s = b"aaaaa";
    let (sa, lcp) = arrays(s);
    let r = find_longest_repeated_substring(s, &sa, &lcp).unwrap();
    assert_eq!(r, Repeat { len: 4, pos: [0, 1] });
}

#[test]
fn test_longest_repeated_substrings_dedup() {
    // "abc" occurs three times: two lcp peaks, one substring
    let s = b"abcxabcyabc";
    let (sa, lcp) = arrays(s);
    assert_eq!(all_longest_repeats(s, &sa, &lcp).len(), 2);
    let subs = longest_repeated_substrings(s, &sa, &lcp);
    assert_eq!(
        subs,
        vec![RepeatedSubstring {
            text: &b"abc"[..],
            occurrences: vec![0, 4, 8],
        }]
    );
}

#[test]
fn test_longest_repeated_substrings_distinct() {
    // "ab" and "cd" are both repeated with length 2
    let s = b"abxcdyabzcd";
    let (sa, lcp) = arrays(s);
    let subs = longest_repeated_substrings(s, &sa, &lcp);
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].text, b"ab");
    assert_eq!(subs[0].occurrences, vec![0, 6]);
    assert_eq!(subs[1].text, b"cd");
    assert_eq!(subs[1].occurrences, vec![3, 9]);
}

#[test]
fn test_top_k_repeats() {
    let s = b"mississippi";
    let (sa, lcp) = arrays(s);
    let top: Vec<&[u8]> = top_k_repeats(s, &sa, &lcp, 3)
        .iter()
        .map(|r| r.substring(s))
        .collect();
    assert_eq!(top, vec![&b"issi"[..], b"ssi", b"si"]);
    assert!(top_k_repeats(s, &sa, &lcp, 0).is_empty());
}

#[test]
fn test_lcp_statistics() {
    let stats = lcp_statistics(&[0, 2, 4, 1, 3, 2]).unwrap();
    assert_eq!(stats.max, 4);
    assert_eq!(stats.min, 1);
    assert_eq!(stats.total, 12);
    assert_eq!(stats.count, 5);
    assert!((stats.mean - 2.4).abs() < 1e-9);
    assert_eq!(lcp_statistics(&[0, 0, 0]), None);
    assert_eq!(lcp_statistics(&[]), None);
}

#[cfg(test)]
mod tests {
    use super::{arrays, find_longest_repeated_substring, longest_repeated_substrings};
    use quickcheck::quickcheck;
    use std::collections::HashSet;

    // does any substring of length `len` occur twice?
    fn repeats_with_len(s: &[u8], len: usize) -> bool {
        let mut seen = HashSet::new();
        s.windows(len).any(|w| !seen.insert(w))
    }

    #[test]
    fn qc_longest_repeat_is_maximal() {
        fn prop(s: Vec<u8>) -> bool {
            let s: Vec<u8> = s.into_iter().map(|c| b'a' + c % 3).collect();
            let (sa, lcp) = arrays(&s);
            match find_longest_repeated_substring(&s, &sa, &lcp) {
                None => s.is_empty() || !repeats_with_len(&s, 1),
                Some(r) => {
                    s[r.pos[0]..r.pos[0] + r.len] == s[r.pos[1]..r.pos[1] + r.len]
                        && r.pos[0] < r.pos[1]
                        && !repeats_with_len(&s, r.len + 1)
                }
            }
        }
        quickcheck(prop as fn(Vec<u8>) -> bool);
    }

    #[test]
    fn qc_longest_substrings_are_distinct_and_complete() {
        fn prop(s: Vec<u8>) -> bool {
            let s: Vec<u8> = s.into_iter().map(|c| b'a' + c % 2).collect();
            let (sa, lcp) = arrays(&s);
            let subs = longest_repeated_substrings(&s, &sa, &lcp);
            let distinct: HashSet<&[u8]> = subs.iter().map(|r| r.text).collect();
            distinct.len() == subs.len()
                && subs.iter().all(|r| {
                    let occs: Vec<usize> = (0..s.len())
                        .filter(|&i| s[i..].starts_with(r.text))
                        .collect();
                    occs.len() >= 2 && occs == r.occurrences
                })
        }
        quickcheck(prop as fn(Vec<u8>) -> bool);
    }
}
