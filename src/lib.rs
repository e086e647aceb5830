//! Edit distance, edit-script recovery, and generalized median strings.
//!
//! # Basic usage
//!
//! ```rust
//! use levenmed::distance::distance;
//!
//! let d = distance(b"kitten", b"sitting", false);
//! assert_eq!(d, 3);
//! ```
//!
//! # Recovering an edit script
//!
//! ```rust
//! use levenmed::editops::{editops_find, apply};
//!
//! let a = b"kitten";
//! let b = b"sitting";
//! let ops = editops_find(a, b);
//! assert_eq!(apply(a, b, &ops), b);
//! ```
//!
//! # Generalized median of a set of strings
//!
//! ```rust
//! use levenmed::median::greedy_median;
//!
//! let strings: [&[u8]; 3] = [b"foo", b"foobar", b"fobar"];
//! let weights = [1.0, 1.0, 1.0];
//! let median = greedy_median(&strings, &weights);
//! assert!(!median.is_empty());
//! ```
//!
//! # Parallelization
//!
//! [`median::greedy_median`]'s candidate-scoring inner loop has a parallel
//! counterpart, [`median::par_greedy_median`], behind the `rayon` feature.
//! This simply involves calling the parallel version of the function
//! (as long as the symbol type is [Send] + [Sync]).
//!
//! ```rust
//! # #[cfg(feature = "rayon")]
//! # fn main() {
//! use levenmed::median::par_greedy_median;
//!
//! let strings: [&[u8]; 3] = [b"foo", b"foobar", b"fobar"];
//! let weights = [1.0, 1.0, 1.0];
//! let median = par_greedy_median(&strings, &weights);
//! assert!(!median.is_empty());
//! # }
//! # #[cfg(not(feature = "rayon"))]
//! # fn main() {}
//! ```

pub mod distance;
pub mod editops;
pub mod median;
pub mod munkres;
pub mod quick_median;
pub mod seqset;
pub mod set_median;
pub mod symbol;
