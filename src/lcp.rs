// longest common prefix arrays

use crate::sa::{is_permutation, rank_array};

/// compute lcp array given suffix and rank arrays via Kasai's algorithm
///
/// `lcp[r]` is the length of the longest common prefix of the suffixes of rank
/// `r - 1` and `r`; `lcp[0] = 0`. Suffixes are visited in text order so that
/// `k` drops by at most one between iterations, giving O(n) comparisons overall.
pub fn lcp_array(s: &[u8], sa: &[i32], rank: &[i32]) -> Vec<i32> {
    debug_assert!(is_permutation(sa, s.len()));
    debug_assert_eq!(rank.len(), sa.len());
    debug_assert!(sa
        .iter()
        .enumerate()
        .all(|(i, &p)| rank[p as usize] == i as i32));
    let n = s.len();
    let mut lcp = vec![0; n];
    if n <= 1 {
        return lcp;
    }
    let mut k = 0;
    for i in 0..n {
        let x = rank[i];
        if x > 0 {
            let y = sa[x as usize - 1] as usize;
            while i + k < n && y + k < n && s[i + k] == s[y + k] {
                k += 1;
            }
            lcp[x as usize] = k as i32;
        }
        k = k.saturating_sub(1);
    }
    tracing::trace!(len = n, "lcp array built");
    lcp
}

/// compute lcp array given the text and its suffix array
#[tracing::instrument(skip_all, fields(len = s.len()))]
pub fn build_lcp_array(s: &[u8], sa: &[i32]) -> Vec<i32> {
    let rank = rank_array(sa);
    lcp_array(s, sa, &rank)
}

/// length of the longest common prefix of the suffixes starting at `i` and `j`
pub fn lcp(s: &[u8], i: usize, j: usize) -> usize {
    match (s.get(i..), s.get(j..)) {
        (Some(a), Some(b)) => a.iter().zip(b).take_while(|(x, y)| x == y).count(),
        _ => 0,
    }
}

/// all-pairs lcp of the given suffixes; the diagonal holds the suffix length itself
pub fn lcp_matrix(s: &[u8], positions: &[usize]) -> Vec<Vec<usize>> {
    positions
        .iter()
        .map(|&p| {
            positions
                .iter()
                .map(|&q| if p == q { s.len().saturating_sub(p) } else { lcp(s, p, q) })
                .collect()
        })
        .collect()
}

/// the pair of suffixes sharing the longest prefix, as `(len, p, q)`
///
/// The first pair in input order wins ties. `None` if no two suffixes share
/// even one byte.
pub fn max_pairwise_lcp(s: &[u8], positions: &[usize]) -> Option<(usize, usize, usize)> {
    let mut best: Option<(usize, usize, usize)> = None;
    for (a, &p) in positions.iter().enumerate() {
        for &q in &positions[a + 1..] {
            let l = lcp(s, p, q);
            if l > best.map_or(0, |b| b.0) {
                best = Some((l, p, q));
            }
        }
    }
    best
}

#[test]
fn test_lcp_array() {
    let s = crate::words::thue_morse(3);
    let sa = crate::sa::build_suffix_array_divsufsort(&s);
    let rank = rank_array(&sa);
    let lcp = lcp_array(&s, &sa, &rank);
    assert_eq!(lcp, vec![0, 1, 2, 2, 0, 1, 2, 1]);
}

#[test]
fn test_lcp_array_scenarios() {
    assert_eq!(
        build_lcp_array(b"banana", &[5, 3, 1, 0, 4, 2]),
        vec![0, 1, 3, 0, 0, 2]
    );
    assert_eq!(build_lcp_array(b"aaaa", &[3, 2, 1, 0]), vec![0, 1, 2, 3]);
    assert_eq!(
        build_lcp_array(b"mississippi", &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]),
        vec![0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3]
    );
    assert!(build_lcp_array(b"", &[]).is_empty());
    assert_eq!(build_lcp_array(b"q", &[0]), vec![0]);
}

#[test]
fn test_pairwise_lcp() {
    assert_eq!(lcp(b"banana", 1, 3), 3);
    assert_eq!(lcp(b"banana", 0, 1), 0);
    assert_eq!(lcp(b"abcabc", 0, 3), 3);
    assert_eq!(lcp(b"aaaa", 0, 1), 3);
    assert_eq!(lcp(b"abc", 1, 7), 0);
}

#[test]
fn test_lcp_matrix() {
    let m = lcp_matrix(b"ababa", &[0, 1, 2]);
    assert_eq!(m, vec![vec![5, 0, 3], vec![0, 4, 0], vec![3, 0, 3]]);
}

#[test]
fn test_max_pairwise_lcp() {
    assert_eq!(
        max_pairwise_lcp(b"abcabcab", &[0, 1, 2, 3, 4, 5]),
        Some((5, 0, 3))
    );
    assert_eq!(max_pairwise_lcp(b"abcd", &[0, 1, 2, 3]), None);
    assert_eq!(max_pairwise_lcp(b"abcd", &[]), None);
}

#[cfg(test)]
mod tests {
    use super::{build_lcp_array, lcp};
    use crate::doubling::build_suffix_array_doubling;
    use quickcheck::quickcheck;

    #[test]
    fn qc_kasai_matches_direct_comparison() {
        fn prop(s: Vec<u8>) -> bool {
            let s: Vec<u8> = s.into_iter().map(|c| b'a' + c % 2).collect();
            let sa = build_suffix_array_doubling(&s);
            let l = build_lcp_array(&s, &sa);
            l.len() == s.len()
                && l.first().map_or(true, |&x| x == 0)
                && (1..sa.len())
                    .all(|i| l[i] as usize == lcp(&s, sa[i - 1] as usize, sa[i] as usize))
        }
        quickcheck(prop as fn(Vec<u8>) -> bool);
    }

    #[test]
    fn qc_lcp_is_idempotent() {
        fn prop(s: Vec<u8>) -> bool {
            let s: Vec<u8> = s.into_iter().map(|c| b'a' + c % 3).collect();
            let sa = build_suffix_array_doubling(&s);
            build_lcp_array(&s, &sa) == build_lcp_array(&s, &sa)
        }
        quickcheck(prop as fn(Vec<u8>) -> bool);
    }

    #[test]
    fn qc_lcp_bounded_by_suffix_lengths() {
        fn prop(s: Vec<u8>) -> bool {
            let s: Vec<u8> = s.into_iter().map(|c| b'a' + c % 3).collect();
            let sa = build_suffix_array_doubling(&s);
            let l = build_lcp_array(&s, &sa);
            (1..sa.len()).all(|i| {
                let far = sa[i - 1].max(sa[i]) as usize;
                l[i] >= 0 && l[i] as usize <= s.len() - far
            })
        }
        quickcheck(prop as fn(Vec<u8>) -> bool);
    }
}
