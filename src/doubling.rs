//
// Suffix array construction by prefix doubling (Manber-Myers style, with comparison sorts)
//

use std::mem;

/// rank of a position past the end of the text; smaller than every character and class
pub const SENTINEL: i32 = -1;

/// a suffix together with its sort key for the current window
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RankedSuffix {
    pub rank: (i32, i32),
    pub index: usize,
}

impl RankedSuffix {
    fn new(index: usize) -> Self {
        RankedSuffix {
            rank: (SENTINEL, SENTINEL),
            index,
        }
    }

    pub fn key(&self) -> (i32, i32) {
        self.rank
    }
}

// assign dense classes to sorted suffixes; equal keys share a class.
// returns the number of classes.
fn assign_classes(sorted: &[RankedSuffix], class: &mut [i32]) -> usize {
    let mut c = 0;
    for (i, r) in sorted.iter().enumerate() {
        if i > 0 && sorted[i - 1].rank != r.rank {
            c += 1;
        }
        class[r.index] = c;
    }
    c as usize + 1
}

/// compute suffix array by the doubling algorithm, O(n log^2 n)
///
/// Round `h` sorts suffixes by their first `2h` bytes, using the classes of
/// the previous round for `s[i..i + h]` and `s[i + h..i + 2h]`.
#[tracing::instrument(skip_all, fields(len = s.len()))]
pub fn build_suffix_array_doubling(s: &[u8]) -> Vec<i32> {
    assert!(s.len() <= crate::sa::MAX_LENGTH);
    let n = s.len();
    if n <= 1 {
        return (0..n as i32).collect();
    }

    // classes for window 1 are the bytes themselves
    let mut rank: Vec<i32> = s.iter().map(|&c| c as i32).collect();
    let mut next = vec![0_i32; n];
    let mut suffixes: Vec<RankedSuffix> = (0..n).map(RankedSuffix::new).collect();

    let mut h = 1;
    loop {
        for r in suffixes.iter_mut() {
            let second = rank.get(r.index + h).copied().unwrap_or(SENTINEL);
            r.rank = (rank[r.index], second);
        }
        // stable: suffixes still tied keep their relative order
        suffixes.sort_by_key(RankedSuffix::key);
        let classes = assign_classes(&suffixes, &mut next);
        mem::swap(&mut rank, &mut next);
        tracing::debug!(window = 2 * h, classes, "doubling round");

        if classes == n || 2 * h >= n {
            debug_assert_eq!(classes, n);
            break;
        }
        h *= 2;
    }
    suffixes.iter().map(|r| r.index as i32).collect()
}

#[test]
fn test_doubling_banana() {
    assert_eq!(build_suffix_array_doubling(b"banana"), vec![5, 3, 1, 0, 4, 2]);
}

#[test]
fn test_doubling_repeated() {
    assert_eq!(build_suffix_array_doubling(b"aaaa"), vec![3, 2, 1, 0]);
    assert_eq!(
        build_suffix_array_doubling(b"mississippi"),
        vec![10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]
    );
}

#[test]
fn test_doubling_trivial() {
    assert!(build_suffix_array_doubling(b"").is_empty());
    assert_eq!(build_suffix_array_doubling(b"z"), vec![0]);
    assert_eq!(build_suffix_array_doubling(b"ba"), vec![1, 0]);
}

#[test]
fn test_doubling_high_bytes() {
    // byte 0 still sorts after the end of the text
    let s = [0u8, 255, 0, 255, 0];
    assert_eq!(
        build_suffix_array_doubling(&s),
        crate::naive::build_suffix_array_naive(&s)
    );
}

#[test]
fn test_assign_classes_ties() {
    let sorted = [
        RankedSuffix { rank: (0, 1), index: 2 },
        RankedSuffix { rank: (0, 1), index: 0 },
        RankedSuffix { rank: (1, SENTINEL), index: 1 },
    ];
    let mut class = [0; 3];
    assert_eq!(assign_classes(&sorted, &mut class), 2);
    assert_eq!(class, [0, 1, 0]);
}

#[cfg(test)]
mod tests {
    use super::build_suffix_array_doubling;
    use crate::naive::build_suffix_array_naive;
    use quickcheck::quickcheck;

    #[test]
    fn qc_doubling_matches_naive() {
        fn prop(s: Vec<u8>) -> bool {
            let s: Vec<u8> = s.into_iter().map(|c| b'a' + c % 3).collect();
            build_suffix_array_doubling(&s) == build_suffix_array_naive(&s)
        }
        quickcheck(prop as fn(Vec<u8>) -> bool);
    }

    #[test]
    fn qc_doubling_matches_naive_full_alphabet() {
        fn prop(s: Vec<u8>) -> bool {
            build_suffix_array_doubling(&s) == build_suffix_array_naive(&s)
        }
        quickcheck(prop as fn(Vec<u8>) -> bool);
    }

    #[test]
    fn qc_doubling_is_idempotent() {
        fn prop(s: Vec<u8>) -> bool {
            build_suffix_array_doubling(&s) == build_suffix_array_doubling(&s)
        }
        quickcheck(prop as fn(Vec<u8>) -> bool);
    }
}
