// naive suffix sorting, used as the oracle for the other builders

/// compute suffix array by comparing the suffixes themselves, O(n^2 log n)
#[tracing::instrument(skip_all, fields(len = s.len()))]
pub fn build_suffix_array_naive(s: &[u8]) -> Vec<i32> {
    assert!(s.len() <= crate::sa::MAX_LENGTH);
    let mut sa = (0..s.len() as i32).collect::<Vec<i32>>();
    sa.sort_by(|&a, &b| s[a as usize..].cmp(&s[b as usize..]));
    sa
}

#[test]
fn test_naive_banana() {
    assert_eq!(build_suffix_array_naive(b"banana"), vec![5, 3, 1, 0, 4, 2]);
}

#[test]
fn test_naive_trivial() {
    assert!(build_suffix_array_naive(b"").is_empty());
    assert_eq!(build_suffix_array_naive(b"a"), vec![0]);
}

#[test]
fn test_naive_prefix_first() {
    // "a" < "aa" < "aaa"
    assert_eq!(build_suffix_array_naive(b"aaa"), vec![2, 1, 0]);
    assert_eq!(build_suffix_array_naive(b"dcba"), vec![3, 2, 1, 0]);
}
