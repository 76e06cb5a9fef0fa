//! Query dispatcher over a shared lexicon.
//!
//! The solver holds the lexicon through an `Arc` and never mutates it, so any
//! number of queries may run against it at once without locking.

use crate::error::QueryError;
use crate::lexicon::Lexicon;
use crate::search::{find_anagrams, find_anagrams_bounded};
use crate::DEFAULT_MAX_LETTERS;
use rayon::prelude::*;
use std::sync::Arc;

/// Answers rack queries against one immutable lexicon.
#[derive(Debug, Clone)]
pub struct AnagramSolver {
    lexicon: Arc<Lexicon>,
    max_letters: Option<usize>,
}

impl AnagramSolver {
    /// A solver over `lexicon` with the default rack bound.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            max_letters: Some(DEFAULT_MAX_LETTERS),
        }
    }

    /// Set the longest rack accepted by [`AnagramSolver::solve`]. `None`
    /// removes the bound.
    pub fn with_max_letters(mut self, max_letters: Option<usize>) -> Self {
        self.max_letters = max_letters;
        self
    }

    /// The current rack bound, if any.
    pub fn max_letters(&self) -> Option<usize> {
        self.max_letters
    }

    /// The lexicon queries run against.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Whether `word` is in the lexicon exactly as written.
    pub fn is_word(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// Sorted, distinct words spellable from `letters`.
    pub fn solve(&self, letters: &str) -> Result<Vec<String>, QueryError> {
        match self.max_letters {
            Some(max) => find_anagrams_bounded(letters, &self.lexicon, max),
            None => Ok(find_anagrams(letters, &self.lexicon)),
        }
    }

    /// Solve several racks in parallel. Results come back in input order,
    /// each paired with its rack.
    pub fn solve_many<S>(&self, racks: &[S]) -> Vec<(String, Result<Vec<String>, QueryError>)>
    where
        S: AsRef<str> + Sync,
    {
        racks
            .par_iter()
            .map(|rack| {
                let rack = rack.as_ref();
                (rack.to_string(), self.solve(rack))
            })
            .collect()
    }
}
