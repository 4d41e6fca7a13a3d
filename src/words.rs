// Highly repetitive words, handy as suffix array inputs.

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Word {
    Fibonacci,
    ThueMorse,
    PeriodDoubling,
}

impl Word {
    /// length of the word of order `i`, `None` if it does not fit `usize`
    pub fn len(self, i: usize) -> Option<usize> {
        match self {
            Word::Fibonacci => {
                let (mut prev, mut cur) = (1_usize, 1_usize);
                for _ in 1..i {
                    let next = cur.checked_add(prev)?;
                    prev = cur;
                    cur = next;
                }
                Some(cur)
            }
            Word::ThueMorse | Word::PeriodDoubling => {
                if i >= usize::BITS as usize {
                    None
                } else {
                    Some(1 << i)
                }
            }
        }
    }

    /// the word of order `i`, refused up front if longer than `max_len`
    pub fn generate(self, i: usize, max_len: usize) -> Result<Vec<u8>> {
        match self.len(i) {
            Some(len) if len <= max_len => Ok(match self {
                Word::Fibonacci => fibonacci(i),
                Word::ThueMorse => thue_morse(i),
                Word::PeriodDoubling => period_doubling(i),
            }),
            len => Err(Error::TextTooLong {
                len: len.unwrap_or(usize::MAX),
                max: max_len,
            }),
        }
    }
}

// Fibonacci words
// 0 : b
// 1 : a
// 2 : ab
// 3 : aba
// 4:  abaab
// i : f(i-1) f(i-2)
pub fn fibonacci(i: usize) -> Vec<u8> {
    let mut prev = vec![b'b'];
    if i == 0 {
        return prev;
    }
    let mut cur = vec![b'a'];
    for _ in 1..i {
        let next = [cur.as_slice(), prev.as_slice()].concat();
        prev = std::mem::replace(&mut cur, next);
    }
    cur
}

/// Fibonacci word followed by the letter that keeps it non-periodic
pub fn fibonacci_plus(i: usize) -> Vec<u8> {
    let mut res = fibonacci(i);
    res.push(if i % 2 == 0 { b'b' } else { b'a' });
    res
}

// construct ith Thue-Morse word
// 0: a, 1: ab, 2: abba
pub fn thue_morse(i: usize) -> Vec<u8> {
    let mut res = vec![b'a'];
    for _ in 0..i {
        let complement: Vec<u8> = res
            .iter()
            .map(|&c| if c == b'a' { b'b' } else { b'a' })
            .collect();
        res.extend(complement);
    }
    res
}

// fixed point of a -> ab, b -> aa
pub fn period_doubling(i: usize) -> Vec<u8> {
    let mut res = vec![b'a'];
    for _ in 0..i {
        res = res
            .iter()
            .flat_map(|&c| if c == b'a' { *b"ab" } else { *b"aa" })
            .collect();
    }
    res
}

#[test]
fn test_fibonacci() {
    assert_eq!(fibonacci(0), b"b".to_vec());
    assert_eq!(fibonacci(1), b"a".to_vec());
    assert_eq!(fibonacci(2), b"ab".to_vec());
    assert_eq!(fibonacci(3), b"aba".to_vec());
    assert_eq!(
        fibonacci(10),
        b"abaababaabaababaababaabaababaabaababaababaabaababaababaabaababaabaababaababaabaababaabaab"
            .to_vec()
    );
    assert_eq!(
        fibonacci_plus(8),
        b"abaababaabaababaababaabaababaabaabb".to_vec()
    )
}

#[test]
fn test_thue_morse() {
    assert_eq!(thue_morse(2), b"abba".to_vec());
    assert_eq!(thue_morse(5), b"abbabaabbaababbabaababbaabbabaab".to_vec());
}

#[test]
fn test_period_doubling() {
    assert_eq!(period_doubling(3), b"abaaabab".to_vec());
    assert_eq!(period_doubling(4), b"abaaabababaaabaa".to_vec())
}

#[test]
fn test_word_len() {
    for i in 0..16 {
        assert_eq!(Word::Fibonacci.len(i), Some(fibonacci(i).len()));
        assert_eq!(Word::ThueMorse.len(i), Some(thue_morse(i).len()));
        assert_eq!(Word::PeriodDoubling.len(i), Some(period_doubling(i).len()));
    }
    assert_eq!(Word::ThueMorse.len(200), None);
    assert_eq!(Word::Fibonacci.len(200), None);
}

#[test]
fn test_word_generate_respects_max_len() {
    assert_eq!(Word::ThueMorse.generate(3, 8), Ok(b"abbabaab".to_vec()));
    assert_eq!(
        Word::ThueMorse.generate(40, 1 << 20),
        Err(Error::TextTooLong {
            len: 1 << 40,
            max: 1 << 20
        })
    );
    assert_eq!(
        Word::PeriodDoubling.generate(100, 1000),
        Err(Error::TextTooLong {
            len: usize::MAX,
            max: 1000
        })
    );
    assert_eq!(
        Word::Fibonacci.generate(10, 88),
        Err(Error::TextTooLong { len: 89, max: 88 })
    );
}

#[test]
fn test_builders_agree_on_words() {
    use crate::doubling::build_suffix_array_doubling;
    use crate::naive::build_suffix_array_naive;
    use crate::sa::build_suffix_array_divsufsort;

    for k in 0..12 {
        for s in [fibonacci_plus(k), thue_morse(k.min(9)), period_doubling(k.min(9))] {
            let expected = build_suffix_array_divsufsort(&s);
            assert_eq!(build_suffix_array_doubling(&s), expected);
            assert_eq!(build_suffix_array_naive(&s), expected);
        }
    }
}

#[test]
fn test_lcp_on_words() {
    use crate::lcp::{build_lcp_array, lcp};
    use crate::sa::build_suffix_array_divsufsort;

    for s in [fibonacci(12), thue_morse(7), period_doubling(7)] {
        let sa = build_suffix_array_divsufsort(&s);
        let l = build_lcp_array(&s, &sa);
        for i in 1..sa.len() {
            assert_eq!(l[i] as usize, lcp(&s, sa[i - 1] as usize, sa[i] as usize));
        }
    }
}
