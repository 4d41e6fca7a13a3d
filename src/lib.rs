//! Suffix arrays over byte strings: construction (naive, prefix doubling,
//! libdivsufsort), Kasai's LCP array, binary-search pattern matching and
//! longest repeated substrings.
//!
//! ```
//! use sufkit::{build_lcp_array, build_suffix_array_doubling, find_all_occurrences};
//!
//! let text = b"banana";
//! let sa = build_suffix_array_doubling(text);
//! assert_eq!(sa, vec![5, 3, 1, 0, 4, 2]);
//! assert_eq!(build_lcp_array(text, &sa), vec![0, 1, 3, 0, 0, 2]);
//! assert_eq!(find_all_occurrences(text, &sa, b"ana"), vec![1, 3]);
//! ```

pub mod doubling;
pub mod error;
pub mod lcp;
pub mod naive;
pub mod repeats;
pub mod sa;
pub mod search;
pub mod words;

pub use doubling::build_suffix_array_doubling;
pub use error::{Error, Result};
pub use lcp::build_lcp_array;
pub use naive::build_suffix_array_naive;
pub use repeats::{find_longest_repeated_substring, Repeat, RepeatedSubstring};
pub use sa::{build_suffix_array, Algorithm, Config, ESA, MAX_LENGTH};
pub use search::{find_all_occurrences, search_pattern};
