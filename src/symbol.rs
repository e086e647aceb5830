//! Distinct-symbol extraction for the median algorithms' candidate loops.
//!
//! The dense byte table and the wide-character hash set are two different
//! representations of the same operation: list every symbol that occurs in
//! at least one input string, once each, in a deterministic order.

use std::collections::HashSet;
use std::hash::Hash;

/// A symbol type that can enumerate the distinct symbols across a set of
/// strings sharing its representation.
pub trait SymbolTable: Copy + Eq {
    /// Returns every distinct symbol occurring in `strings`, each once.
    fn distinct_symbols(strings: &[&[Self]]) -> Vec<Self>;
}

impl SymbolTable for u8 {
    fn distinct_symbols(strings: &[&[u8]]) -> Vec<u8> {
        let mut present = [false; 256];
        for s in strings {
            for &c in *s {
                present[c as usize] = true;
            }
        }
        (0u32..256)
            .filter(|&c| present[c as usize])
            .map(|c| c as u8)
            .collect()
    }
}

impl SymbolTable for char {
    fn distinct_symbols(strings: &[&[char]]) -> Vec<char> {
        let mut seen: HashSet<char> = HashSet::new();
        for s in strings {
            for &c in *s {
                seen.insert(c);
            }
        }
        // Sorted by scalar value rather than first appearance: the reference's
        // wide symbol table is bucketed by `(c + (c >> 7)) & 0xff`, which for
        // ASCII codepoints comes out in ascending order, matching the byte
        // table above. Sorting here keeps the two instantiations' Sigma order
        // (and so the median routines' tie-breaks) in agreement on ASCII.
        let mut list: Vec<char> = seen.into_iter().collect();
        list.sort_unstable();
        list
    }
}

/// Extra bound some callers need (weighted voting, greedy median) on top of
/// [`SymbolTable`]; kept separate so `distance`/`editops` only require
/// `Copy + Eq`, not `Hash`.
pub trait HashableSymbol: SymbolTable + Hash {}
impl<T: SymbolTable + Hash> HashableSymbol for T {}
