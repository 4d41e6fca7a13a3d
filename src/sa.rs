// routines related to suffix arrays

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::repeats::{Repeat, RepeatedSubstring};

/// Maximum length of the input text; suffix arrays are stored as `i32`.
pub const MAX_LENGTH: usize = i32::MAX as usize;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    Naive,
    #[default]
    Doubling,
    DivSufSort,
}

impl Algorithm {
    pub fn build(self, s: &[u8]) -> Vec<i32> {
        match self {
            Algorithm::Naive => crate::naive::build_suffix_array_naive(s),
            Algorithm::Doubling => crate::doubling::build_suffix_array_doubling(s),
            Algorithm::DivSufSort => build_suffix_array_divsufsort(s),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Algorithm::Naive),
            "doubling" => Ok(Algorithm::Doubling),
            "divsufsort" | "sais" => Ok(Algorithm::DivSufSort),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Naive => "naive",
            Algorithm::Doubling => "doubling",
            Algorithm::DivSufSort => "divsufsort",
        })
    }
}

/// construction settings; `max_len` rejects texts before any work is done
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub max_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::default(),
            max_len: MAX_LENGTH,
        }
    }
}

impl Config {
    pub fn build(&self, s: &[u8]) -> Result<Vec<i32>> {
        let max = self.max_len.min(MAX_LENGTH);
        if s.len() > max {
            return Err(Error::TextTooLong { len: s.len(), max });
        }
        Ok(self.algorithm.build(s))
    }
}

/// compute suffix array with the given algorithm, rejecting texts that do not fit `i32`
pub fn build_suffix_array(s: &[u8], algorithm: Algorithm) -> Result<Vec<i32>> {
    Config {
        algorithm,
        ..Config::default()
    }
    .build(s)
}

/// compute suffix array via libdivsufsort
#[tracing::instrument(skip_all, fields(len = s.len()))]
pub fn build_suffix_array_divsufsort(s: &[u8]) -> Vec<i32> {
    assert!(s.len() <= MAX_LENGTH);
    if s.len() <= 1 {
        return (0..s.len() as i32).collect();
    }
    let mut sa = vec![0; s.len()];
    cdivsufsort::sort_in_place(s, &mut sa);
    sa
}

/// compute rank array (inverse permutation), given suffix array
pub fn rank_array(sa: &[i32]) -> Vec<i32> {
    let mut res = vec![0_i32; sa.len()];
    for (i, &p) in sa.iter().enumerate() {
        res[p as usize] = i as i32;
    }
    res
}

pub fn is_permutation(sa: &[i32], n: usize) -> bool {
    check_permutation(sa, n).is_ok()
}

/// check that `sa` holds every offset of a text of length `n` exactly once
pub fn check_permutation(sa: &[i32], n: usize) -> Result<()> {
    if sa.len() != n {
        return Err(Error::LengthMismatch {
            expected: n,
            found: sa.len(),
        });
    }
    let mut seen = vec![false; n];
    for &p in sa {
        if p < 0 || p as usize >= n {
            return Err(Error::NotAPermutation {
                len: n,
                reason: format!("offset {} out of range", p),
            });
        }
        if seen[p as usize] {
            return Err(Error::NotAPermutation {
                len: n,
                reason: format!("offset {} appears twice", p),
            });
        }
        seen[p as usize] = true;
    }
    Ok(())
}

/// check that `sa` is the suffix array of `s`
///
/// Sortedness of adjacent pairs implies global sortedness. Each pair is decided
/// in O(1) from its first bytes and the ranks of the suffixes one position
/// later, with the empty suffix ranked below everything.
pub fn check_suffix_array(s: &[u8], sa: &[i32]) -> Result<()> {
    check_permutation(sa, s.len())?;
    let rank = rank_array(sa);
    let next_rank = |p: usize| rank.get(p + 1).copied().unwrap_or(-1);
    for (i, w) in sa.windows(2).enumerate() {
        let (a, b) = (w[0] as usize, w[1] as usize);
        let ordered = s[a] < s[b] || (s[a] == s[b] && next_rank(a) < next_rank(b));
        if !ordered {
            return Err(Error::Unsorted { index: i + 1 });
        }
    }
    Ok(())
}

/// enhanced suffix array: suffix, rank and lcp arrays over a borrowed text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ESA<'a> {
    pub text: &'a [u8],
    pub sa: Vec<i32>,
    pub rank: Vec<i32>,
    pub lcp: Vec<i32>,
}

impl<'a> ESA<'a> {
    pub fn new(text: &'a [u8], algorithm: Algorithm) -> Result<Self> {
        Self::with_config(
            text,
            &Config {
                algorithm,
                ..Config::default()
            },
        )
    }

    pub fn with_config(text: &'a [u8], config: &Config) -> Result<Self> {
        let sa = config.build(text)?;
        Ok(Self::assemble(text, sa))
    }

    /// wrap an externally computed suffix array after validating it
    pub fn from_suffix_array(text: &'a [u8], sa: Vec<i32>) -> Result<Self> {
        if text.len() > MAX_LENGTH {
            return Err(Error::TextTooLong {
                len: text.len(),
                max: MAX_LENGTH,
            });
        }
        check_suffix_array(text, &sa)?;
        Ok(Self::assemble(text, sa))
    }

    fn assemble(text: &'a [u8], sa: Vec<i32>) -> Self {
        let rank = rank_array(&sa);
        let lcp = crate::lcp::lcp_array(text, &sa, &rank);
        ESA {
            text,
            sa,
            rank,
            lcp,
        }
    }

    pub fn len(&self) -> usize {
        self.sa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// the suffix of lexicographic rank `i`
    pub fn suffix(&self, i: usize) -> &'a [u8] {
        &self.text[self.sa[i] as usize..]
    }

    pub fn search(&self, pattern: &[u8]) -> Option<usize> {
        crate::search::search_pattern(self.text, &self.sa, pattern)
    }

    pub fn contains(&self, pattern: &[u8]) -> bool {
        crate::search::contains(self.text, &self.sa, pattern)
    }

    pub fn occurrence_range(&self, pattern: &[u8]) -> Range<usize> {
        crate::search::occurrence_range(self.text, &self.sa, pattern)
    }

    pub fn occurrences(&self, pattern: &[u8]) -> Vec<usize> {
        crate::search::find_all_occurrences(self.text, &self.sa, pattern)
    }

    pub fn longest_repeat(&self) -> Option<Repeat> {
        crate::repeats::find_longest_repeated_substring(self.text, &self.sa, &self.lcp)
    }

    pub fn longest_repeated_substrings(&self) -> Vec<RepeatedSubstring<'a>> {
        crate::repeats::longest_repeated_substrings(self.text, &self.sa, &self.lcp)
    }

    pub fn top_k_repeats(&self, k: usize) -> Vec<Repeat> {
        crate::repeats::top_k_repeats(self.text, &self.sa, &self.lcp, k)
    }
}

#[test]
fn test_rank_array() {
    let sa = vec![5, 3, 1, 0, 4, 2];
    assert_eq!(rank_array(&sa), vec![3, 2, 5, 1, 4, 0]);
    assert!(rank_array(&[]).is_empty());
}

#[test]
fn test_divsufsort_agrees() {
    for s in [&b"banana"[..], b"aaaa", b"mississippi", b"", b"x"] {
        assert_eq!(
            build_suffix_array_divsufsort(s),
            crate::naive::build_suffix_array_naive(s)
        );
    }
}

#[test]
fn test_algorithm_from_str() {
    assert_eq!("naive".parse::<Algorithm>(), Ok(Algorithm::Naive));
    assert_eq!("Doubling".parse::<Algorithm>(), Ok(Algorithm::Doubling));
    assert_eq!("divsufsort".parse::<Algorithm>(), Ok(Algorithm::DivSufSort));
    assert_eq!(
        "skew".parse::<Algorithm>(),
        Err(Error::UnknownAlgorithm("skew".to_string()))
    );
    assert_eq!(Algorithm::DivSufSort.to_string(), "divsufsort");
}

#[test]
fn test_length_cap() {
    let config = Config {
        algorithm: Algorithm::Doubling,
        max_len: 4,
    };
    assert_eq!(
        config.build(b"banana"),
        Err(Error::TextTooLong { len: 6, max: 4 })
    );
    assert_eq!(config.build(b"bana"), Ok(vec![3, 1, 0, 2]));
}

#[test]
fn test_check_suffix_array() {
    let s = b"banana";
    assert_eq!(check_suffix_array(s, &[5, 3, 1, 0, 4, 2]), Ok(()));
    assert_eq!(
        check_suffix_array(s, &[5, 3, 1, 0, 4]),
        Err(Error::LengthMismatch {
            expected: 6,
            found: 5
        })
    );
    assert!(matches!(
        check_suffix_array(s, &[5, 3, 1, 0, 4, 4]),
        Err(Error::NotAPermutation { len: 6, .. })
    ));
    assert!(matches!(
        check_suffix_array(s, &[5, 3, 1, 0, 4, 6]),
        Err(Error::NotAPermutation { len: 6, .. })
    ));
    assert_eq!(
        check_suffix_array(s, &[5, 3, 1, 0, 2, 4]),
        Err(Error::Unsorted { index: 2 })
    );
}

#[test]
fn test_check_suffix_array_unary() {
    let s = vec![b'a'; 100_000];
    let sa: Vec<i32> = (0..s.len() as i32).rev().collect();
    assert_eq!(check_suffix_array(&s, &sa), Ok(()));

    let mut swapped = sa.clone();
    swapped.swap(500, 501);
    assert_eq!(
        check_suffix_array(&s, &swapped),
        Err(Error::Unsorted { index: 501 })
    );
}

#[test]
fn test_check_suffix_array_words() {
    for s in [crate::words::fibonacci(20), crate::words::thue_morse(14)] {
        let sa = build_suffix_array_divsufsort(&s);
        assert_eq!(check_suffix_array(&s, &sa), Ok(()));
        let mut sa = sa;
        let last = sa.len() - 1;
        sa.swap(0, last);
        assert!(matches!(
            check_suffix_array(&s, &sa),
            Err(Error::Unsorted { .. })
        ));
    }
}

#[test]
fn test_esa_banana() {
    let esa = ESA::new(b"banana", Algorithm::Doubling).unwrap();
    assert_eq!(esa.sa, vec![5, 3, 1, 0, 4, 2]);
    assert_eq!(esa.lcp, vec![0, 1, 3, 0, 0, 2]);
    assert_eq!(esa.suffix(2), b"anana");
    assert_eq!(esa.occurrences(b"ana"), vec![1, 3]);
    assert_eq!(esa.occurrence_range(b"ana"), 1..3);
    assert!(esa.contains(b"nan"));
    assert_eq!(esa.search(b"ban"), Some(0));
    let r = esa.longest_repeat().unwrap();
    assert_eq!((r.len, r.pos), (3, [1, 3]));
}

#[test]
fn test_esa_from_suffix_array() {
    let s = b"mississippi";
    let esa = ESA::from_suffix_array(s, vec![10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]).unwrap();
    assert_eq!(esa.lcp, vec![0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3]);
    assert_eq!(esa.rank[0], 4);
    assert!(ESA::from_suffix_array(s, vec![0; 11]).is_err());
}

#[test]
fn test_esa_empty() {
    let esa = ESA::new(b"", Algorithm::Naive).unwrap();
    assert!(esa.is_empty());
    assert_eq!(esa.search(b"a"), None);
    assert!(esa.occurrences(b"a").is_empty());
    assert_eq!(esa.longest_repeat(), None);
}
