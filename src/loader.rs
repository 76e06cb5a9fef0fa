//! Word list loading.
//!
//! A word list is plain text with one word per line. Carriage returns are
//! dropped wherever they appear so CRLF files load the same as LF files.

use crate::error::LoadError;
use crate::lexicon::Lexicon;
use std::fs;
use std::path::Path;
use tracing::info;

/// Split a word list into lines, removing every `\r`. Blank lines are kept;
/// the lexicon ignores them.
pub fn parse_word_list(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split('\n').map(|line| line.replace('\r', ""))
}

pub fn lexicon_from_str(text: &str) -> Lexicon {
    Lexicon::build(parse_word_list(text))
}

/// Read and index the word list at `path`.
pub fn load_lexicon(path: impl AsRef<Path>) -> Result<Lexicon, LoadError> {
    let path = path.as_ref();
    info!("Loading dictionary from {}", path.display());

    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| LoadError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let lexicon = lexicon_from_str(&text);
    info!(
        words = lexicon.word_count(),
        nodes = lexicon.node_count(),
        "Successfully loaded {} words",
        lexicon.word_count()
    );
    Ok(lexicon)
}

/// Index the word list embedded in the binary.
pub fn load_dictionary() -> Lexicon {
    let lexicon = lexicon_from_str(include_str!("../dictionary/dictionary.txt"));
    info!("Loaded builtin dictionary with {} words", lexicon.word_count());
    lexicon
}
