use crate::{
    board::{letter_slot, ALPHABET_LEN},
    path_cache::Lineage,
    prefilter::Candidate,
    NodeId,
};
use std::{fmt, ops::BitOr};

/// Which dictionary words end on a node.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Terminal {
    /// The node only is a shared prefix.
    None,
    /// The accumulated pattern is a dictionary word.
    Forward,
    /// The accumulated pattern is a dictionary word written backwards.
    Reversed,
    /// Both of the above, for two different dictionary words.
    Both,
}

impl Terminal {
    const fn bits(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Forward => 1,
            Self::Reversed => 2,
            Self::Both => 3,
        }
    }

    /// Create a terminal from its mask, clamped to the representable states.
    const fn from_bits(bits: u8) -> Self {
        match bits & 3 {
            0 => Self::None,
            1 => Self::Forward,
            2 => Self::Reversed,
            _ => Self::Both,
        }
    }

    pub fn is_word(self) -> bool {
        self != Self::None
    }

    pub fn forward(self) -> bool {
        self.bits() & Self::Forward.bits() != 0
    }

    pub fn reversed(self) -> bool {
        self.bits() & Self::Reversed.bits() != 0
    }
}

impl BitOr for Terminal {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.bits() | rhs.bits())
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::None
    }
}

/// A node of the [PatternTree].
///
/// The node does not own its characters: they are a view into the word that
/// created it, stored in the tree. The owning word starts at `word_start` in
/// the tree characters, the node pattern spans `prefix_len..end` of that word
/// and the accumulated pattern from the root spans `0..end`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PatternNode {
    word_start: usize,
    prefix_len: usize,
    end: usize,
    parent: Option<NodeId>,
    children: [Option<NodeId>; ALPHABET_LEN],
    terminal: Terminal,
}

impl PatternNode {
    fn new(word_start: usize, prefix_len: usize, end: usize, parent: Option<NodeId>) -> Self {
        debug_assert!(prefix_len < end);
        Self {
            word_start,
            prefix_len,
            end,
            parent,
            children: [None; ALPHABET_LEN],
            terminal: Terminal::None,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    /// Length of the accumulated pattern before this node.
    pub fn depth(&self) -> usize {
        self.prefix_len
    }

    /// Iterate over the children in letter order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().flatten().copied()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

/// Length of the longest common prefix of two byte strings.
fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// A compressed trie over the dictionary, with one root per first letter.
///
/// Nodes are stored in an arena and addressed by [NodeId], the characters of
/// all inserted words are stored in a single string.
#[derive(Debug, Clone)]
pub struct PatternTree {
    chars: String,
    nodes: Vec<PatternNode>,
    roots: [Option<NodeId>; ALPHABET_LEN],
}

impl Default for PatternTree {
    fn default() -> Self {
        Self {
            chars: String::new(),
            nodes: Vec::new(),
            roots: [None; ALPHABET_LEN],
        }
    }
}

impl PatternTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the tree from the prepared candidates.
    pub fn build(candidates: &[Candidate]) -> Self {
        let mut tree = Self::new();
        for candidate in candidates {
            tree.insert(&candidate.search, candidate.terminal);
        }

        log::debug!(
            "Pattern tree built with {} nodes from {} candidates",
            tree.len(),
            candidates.len()
        );

        tree
    }

    fn push_node(&mut self, node: PatternNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a node holding the tail of `word` from `prefix_len`, under `parent`.
    fn push_leaf(&mut self, word_start: usize, prefix_len: usize, end: usize, parent: NodeId) -> NodeId {
        let slot = letter_slot(self.chars.as_bytes()[word_start + prefix_len]);
        let leaf = self.push_node(PatternNode::new(word_start, prefix_len, end, Some(parent)));
        debug_assert!(self.nodes[parent.get()].children[slot].is_none());
        self.nodes[parent.get()].children[slot] = Some(leaf);
        leaf
    }

    /// Cut a node after `split_at` characters of its owning word.
    /// The cut tail goes to a new child which inherits the children and terminal.
    fn split(&mut self, id: NodeId, split_at: usize) {
        let node = &mut self.nodes[id.get()];
        debug_assert!(node.prefix_len < split_at && split_at < node.end);

        let mut tail = PatternNode::new(node.word_start, split_at, node.end, Some(id));
        tail.children = std::mem::replace(&mut node.children, [None; ALPHABET_LEN]);
        tail.terminal = std::mem::take(&mut node.terminal);
        node.end = split_at;

        let tail_slot = letter_slot(self.chars.as_bytes()[tail.word_start + split_at]);
        let tail_id = self.push_node(tail);

        // Grandchildren now hang below the tail
        let grandchildren: Vec<_> = self.nodes[tail_id.get()].children().collect();
        for child in grandchildren {
            self.nodes[child.get()].parent = Some(tail_id);
        }

        self.nodes[id.get()].children[tail_slot] = Some(tail_id);
    }

    fn mark(&mut self, id: NodeId, terminal: Terminal) -> NodeId {
        let node = &mut self.nodes[id.get()];
        node.terminal = node.terminal | terminal;
        id
    }

    /// Insert a non-empty lowercase word and return the node it ends on.
    ///
    /// Inserting the same word twice merges the terminal flags.
    pub fn insert(&mut self, word: &str, terminal: Terminal) -> NodeId {
        assert!(!word.is_empty(), "cannot insert an empty word");
        let word_len = word.len();

        // Store the word, so that new nodes can point into it
        let word_start = self.chars.len();
        self.chars.push_str(word);

        let root_slot = letter_slot(word.as_bytes()[0]);
        let mut current = match self.roots[root_slot] {
            Some(root) => root,
            None => {
                let root = self.push_node(PatternNode::new(word_start, 0, word_len, None));
                self.roots[root_slot] = Some(root);
                return self.mark(root, terminal);
            }
        };

        loop {
            let node = &self.nodes[current.get()];
            let prefix_len = node.prefix_len;
            let pattern_len = node.end - prefix_len;
            let chars = self.chars.as_bytes();
            let pattern = &chars[node.word_start + prefix_len..node.word_start + node.end];
            let remaining = &word.as_bytes()[prefix_len..];

            let common = common_prefix_len(pattern, remaining);
            assert_ne!(
                common, 0,
                "node selected by its first letter does not share it with the word"
            );

            if common == pattern_len {
                if common == remaining.len() {
                    // The word ends exactly on this node
                    return self.mark(current, terminal);
                }

                let next_offset = prefix_len + common;
                let child = node.children[letter_slot(word.as_bytes()[next_offset])];
                match child {
                    Some(child) => current = child,
                    None => {
                        let leaf = self.push_leaf(word_start, next_offset, word_len, current);
                        return self.mark(leaf, terminal);
                    }
                }
            } else {
                let split_at = prefix_len + common;
                self.split(current, split_at);

                return if common == remaining.len() {
                    self.mark(current, terminal)
                } else {
                    let leaf = self.push_leaf(word_start, split_at, word_len, current);
                    self.mark(leaf, terminal)
                };
            }
        }
    }

    /// Return the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &PatternNode {
        &self.nodes[id.get()]
    }

    /// Iterate over the roots in letter order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.roots.iter().flatten().copied()
    }

    /// Return the root of the words starting with a letter.
    pub fn root(&self, letter: u8) -> Option<NodeId> {
        self.roots[letter_slot(letter)]
    }

    /// Iterate over the children of a node in letter order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id).children()
    }

    pub fn terminal(&self, id: NodeId) -> Terminal {
        self.node(id).terminal
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).is_leaf()
    }

    /// Return the characters contributed by the node itself.
    pub fn pattern(&self, id: NodeId) -> &str {
        let node = self.node(id);
        &self.chars[node.word_start + node.prefix_len..node.word_start + node.end]
    }

    /// Return the concatenation of the patterns from the root to the node.
    pub fn prefix(&self, id: NodeId) -> &str {
        let node = self.node(id);
        &self.chars[node.word_start..node.word_start + node.end]
    }

    /// Return the node whose accumulated pattern is exactly `word`, if any.
    pub fn find(&self, word: &str) -> Option<NodeId> {
        let first = *word.as_bytes().first()?;
        if !first.is_ascii_lowercase() {
            return None;
        }

        let mut current = self.root(first)?;
        loop {
            let prefix = self.prefix(current);
            if word.len() < prefix.len() || !word.starts_with(prefix) {
                return None;
            }
            if word.len() == prefix.len() {
                return Some(current);
            }

            let next = word.as_bytes()[prefix.len()];
            if !next.is_ascii_lowercase() {
                return None;
            }
            current = self.node(current).children[letter_slot(next)]?;
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, indent: usize) -> fmt::Result {
        writeln!(f, "{}{}", "---".repeat(indent), self.pattern(id))?;
        for child in self.children(id) {
            self.fmt_node(f, child, indent + 1)?;
        }
        Ok(())
    }
}

impl Lineage for PatternTree {
    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }
}

/// Dump the tree, one node pattern per line, indented by its depth.
impl fmt::Display for PatternTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for root in self.roots() {
            self.fmt_node(f, root, 0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(words: &[&str]) -> PatternTree {
        let mut tree = PatternTree::new();
        for word in words {
            tree.insert(word, Terminal::Forward);
        }
        tree
    }

    /// Check the parent links and that children extend their parent prefix.
    fn assert_consistent(tree: &PatternTree) {
        for root in tree.roots() {
            assert!(tree.node(root).parent().is_none());
        }
        for i in 0..tree.len() {
            let id = NodeId::new(i as u32);
            assert!(!tree.pattern(id).is_empty());
            for child in tree.children(id) {
                assert_eq!(tree.node(child).parent(), Some(id));
                assert!(tree.prefix(child).starts_with(tree.prefix(id)));
                assert_eq!(tree.node(child).depth(), tree.prefix(id).len());
            }
        }
    }

    #[test]
    fn terminal_union() {
        assert_eq!(Terminal::None | Terminal::Forward, Terminal::Forward);
        assert_eq!(Terminal::Forward | Terminal::Reversed, Terminal::Both);
        assert_eq!(Terminal::Both | Terminal::Reversed, Terminal::Both);
        assert_eq!(Terminal::Forward | Terminal::Forward, Terminal::Forward);
        assert!(Terminal::Both.forward() && Terminal::Both.reversed());
        assert!(!Terminal::None.is_word());
    }

    #[test]
    fn one_word_per_root() {
        let tree = tree_of(&["oath", "eat"]);
        assert_eq!(tree.len(), 2);
        let roots: Vec<_> = tree.roots().map(|r| tree.pattern(r)).collect();
        assert_eq!(roots, vec!["eat", "oath"]);
        assert!(tree.root(b'p').is_none());
    }

    #[test]
    fn continuation_creates_child() {
        let tree = tree_of(&["abc", "abcdefg"]);
        let root = tree.root(b'a').unwrap();
        assert_eq!(tree.pattern(root), "abc");
        assert_eq!(tree.terminal(root), Terminal::Forward);

        let children: Vec<_> = tree.children(root).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(tree.pattern(children[0]), "defg");
        assert_eq!(tree.prefix(children[0]), "abcdefg");
        assert_consistent(&tree);
    }

    #[test]
    fn split_inside_pattern() {
        let tree = tree_of(&["abcdefg", "abcklm"]);
        let root = tree.root(b'a').unwrap();
        assert_eq!(tree.pattern(root), "abc");
        assert_eq!(tree.terminal(root), Terminal::None);

        let children: Vec<_> = tree.children(root).map(|c| tree.pattern(c)).collect();
        assert_eq!(children, vec!["defg", "klm"]);
        assert_consistent(&tree);
    }

    #[test]
    fn split_at_word_end() {
        let tree = tree_of(&["abcdefg", "abc"]);
        let root = tree.root(b'a').unwrap();
        assert_eq!(tree.pattern(root), "abc");
        assert_eq!(tree.terminal(root), Terminal::Forward);

        let tail = tree.children(root).next().unwrap();
        assert_eq!(tree.pattern(tail), "defg");
        assert_eq!(tree.terminal(tail), Terminal::Forward);
        assert!(tree.is_leaf(tail));
    }

    #[test]
    fn split_keeps_grandchildren() {
        let tree = tree_of(&["abcd", "abcdxy", "abcdz", "ab"]);
        let root = tree.root(b'a').unwrap();
        assert_eq!(tree.pattern(root), "ab");

        let cd = tree.find("abcd").unwrap();
        assert_eq!(tree.pattern(cd), "cd");
        assert_eq!(tree.node(cd).parent(), Some(root));
        let grandchildren: Vec<_> = tree.children(cd).map(|c| tree.pattern(c)).collect();
        assert_eq!(grandchildren, vec!["xy", "z"]);
        assert_consistent(&tree);
    }

    #[test]
    fn duplicate_and_reversed_words_merge() {
        let mut tree = PatternTree::new();
        let first = tree.insert("abc", Terminal::Forward);
        let again = tree.insert("abc", Terminal::Forward);
        assert_eq!(first, again);
        assert_eq!(tree.terminal(first), Terminal::Forward);

        tree.insert("abc", Terminal::Reversed);
        assert_eq!(tree.terminal(first), Terminal::Both);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn single_letter_words() {
        let tree = tree_of(&["a", "ab", "b"]);
        let a = tree.find("a").unwrap();
        assert_eq!(tree.pattern(a), "a");
        assert_eq!(tree.pattern(tree.find("ab").unwrap()), "b");
        assert_eq!(tree.terminal(tree.find("b").unwrap()), Terminal::Forward);
    }

    #[test]
    fn find_only_exact_prefixes() {
        let tree = tree_of(&["abcdefg", "abcklm"]);
        assert!(tree.find("abc").is_some());
        assert!(tree.find("abcklm").is_some());
        assert!(tree.find("ab").is_none());
        assert!(tree.find("abcd").is_none());
        assert!(tree.find("abcdefgh").is_none());
        assert!(tree.find("").is_none());
        assert!(tree.find("Abc").is_none());
    }

    #[test]
    fn display_is_indented() {
        let tree = tree_of(&["abcdefg", "abcklm", "b"]);
        assert_eq!(tree.to_string(), "abc\n---defg\n---klm\nb\n");
    }
}
