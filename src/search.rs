//! Backtracking search for words spellable from a rack of letters.
//!
//! The walk descends the lexicon one letter at a time. At every node it tries
//! each unused position of the rack; a position whose letter has no child edge
//! is pruned on the spot. Every occurrence of a repeated letter is its own
//! branch, which is how racks like "eel" reach words like "eel". The same word
//! can therefore be reached along several paths, so matches go through a set.

use crate::error::QueryError;
use crate::lexicon::{Lexicon, TrieNode};
use std::collections::BTreeSet;
use tracing::debug;

/// Per-query search state. Positions are excluded by flag rather than by
/// removing letters, so the rack itself is never mutated.
struct Walk<'a> {
    lexicon: &'a Lexicon,
    letters: Vec<char>,
    used: Vec<bool>,
    found: BTreeSet<&'a str>,
    visited: usize,
}

impl<'a> Walk<'a> {
    fn new(lexicon: &'a Lexicon, letters: &str) -> Self {
        let letters: Vec<char> = letters.chars().collect();
        Self {
            lexicon,
            used: vec![false; letters.len()],
            letters,
            found: BTreeSet::new(),
            visited: 0,
        }
    }

    fn explore(&mut self, node: &'a TrieNode) {
        for i in 0..self.letters.len() {
            if self.used[i] {
                continue;
            }
            let Some(child) = self.lexicon.child_at(node, self.letters[i]) else {
                continue;
            };

            self.visited += 1;
            if self.lexicon.is_complete_word(child) {
                self.found.insert(child.prefix());
            }

            self.used[i] = true;
            self.explore(child);
            self.used[i] = false;
        }
    }
}

/// All distinct lexicon words spellable from a sub-multiset of `letters`,
/// in ascending ordinal order.
///
/// Letters are compared exactly as given; "EEL" does not match "eel".
pub fn find_anagrams(letters: &str, lexicon: &Lexicon) -> Vec<String> {
    let mut walk = Walk::new(lexicon, letters);
    walk.explore(lexicon.root());

    let words: Vec<String> = walk.found.into_iter().map(str::to_owned).collect();
    debug!(
        letters,
        matches = words.len(),
        visited = walk.visited,
        "anagrams for {}: {:?}",
        letters,
        words
    );
    words
}

/// Like [`find_anagrams`], but rejects racks longer than `max_letters`
/// characters before searching.
pub fn find_anagrams_bounded(
    letters: &str,
    lexicon: &Lexicon,
    max_letters: usize,
) -> Result<Vec<String>, QueryError> {
    let len = letters.chars().count();
    if len > max_letters {
        return Err(QueryError::InputTooLong {
            len,
            max: max_letters,
        });
    }
    Ok(find_anagrams(letters, lexicon))
}
