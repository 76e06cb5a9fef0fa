//! Prefix tree over the word list.
//!
//! The lexicon is built once from a line-delimited word list and is read-only
//! afterwards. Each node caches the prefix it stands for, so a search that
//! reaches a word node can report the word without rebuilding it from the path.

use std::collections::HashMap;

/// One prefix of the lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    prefix: String,
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    fn with_prefix(prefix: String) -> Self {
        Self {
            prefix,
            children: HashMap::new(),
            is_word: false,
        }
    }

    /// The characters on the path from the root to this node.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether the prefix is itself an entry of the word list.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Child edges in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }

    fn count_nodes(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.count_nodes())
            .sum()
    }
}

/// Insert-only prefix tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    root: TrieNode,
    word_count: usize,
}

impl Lexicon {
    /// An empty lexicon holding only the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from a sequence of lines, one word per line.
    ///
    /// Lines are inserted verbatim: no trimming and no case folding. Blank
    /// lines and repeated words are absorbed silently.
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for line in lines {
            lexicon.insert(line.as_ref());
        }
        lexicon
    }

    /// Add a word. Empty words are a no-op; inserting a word twice only
    /// re-marks the existing node.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        let mut prefix = String::with_capacity(word.len());
        for c in word.chars() {
            prefix.push(c);
            node = node
                .children
                .entry(c)
                .or_insert_with(|| TrieNode::with_prefix(prefix.clone()));
        }

        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
    }

    /// The node for the empty prefix. Never a word.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// The node reached from `node` by appending `c`, if any word continues that way.
    pub fn child_at<'a>(&'a self, node: &'a TrieNode, c: char) -> Option<&'a TrieNode> {
        node.children.get(&c)
    }

    /// Whether `node` marks the end of a word.
    pub fn is_complete_word(&self, node: &TrieNode) -> bool {
        node.is_word
    }

    /// Follow `prefix` character by character from the root.
    pub fn node_for(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| self.child_at(node, c))
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.node_for(word).is_some_and(|node| node.is_word)
    }

    /// True when some word starts with `prefix` (the empty prefix included,
    /// as long as the lexicon is not empty).
    pub fn has_prefix(&self, prefix: &str) -> bool {
        match self.node_for(prefix) {
            Some(node) => node.is_word || !node.children.is_empty(),
            None => false,
        }
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// True when no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
