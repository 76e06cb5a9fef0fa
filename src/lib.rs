//! # Anagram Finder
//!
//! Finds every dictionary word that can be spelled from a rack of letters,
//! using each letter at most as often as it appears in the rack.
//!
//! The word list is indexed once into a prefix tree ([`Lexicon`]). Each query
//! walks the tree while consuming letters from the rack, pruning as soon as
//! the letters spelled so far stop being a prefix of any word.

pub mod error;
pub mod lexicon;
pub mod loader;
pub mod search;
pub mod solver;

pub use error::{LoadError, QueryError};
pub use lexicon::{Lexicon, TrieNode};
pub use loader::{lexicon_from_str, load_dictionary, load_lexicon, parse_word_list};
pub use search::{find_anagrams, find_anagrams_bounded};
pub use solver::AnagramSolver;

/// Longest rack accepted by default. Search cost grows quickly with rack
/// length.
pub const DEFAULT_MAX_LETTERS: usize = 16;
