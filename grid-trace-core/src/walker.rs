//! Depth-first walk of a [PatternTree] over a [Board].
//!
//! Every node is searched once, after its parent. A root is searched from
//! every cell holding its first letter. Any other node is searched from the
//! end cells of the paths found for its parent, and only keeps the extensions
//! for which a disjoint chain of ancestor paths still exists.

use crate::{
    path_cache::{CachedPath, PathCaches},
    Board, CellIndex, NodeId, PatternTree,
};

/// A cell of the path being built and the next of its neighbors to try.
#[derive(Debug, Copy, Clone)]
struct Frame {
    cell: CellIndex,
    next_neighbor: usize,
}

impl Frame {
    fn new(cell: CellIndex) -> Self {
        Self {
            cell,
            next_neighbor: 0,
        }
    }
}

/// Counters describing the work done by a walk.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct WalkStats {
    pub nodes_searched: usize,
    pub subtrees_pruned: usize,
    pub paths_recorded: usize,
    pub words_emitted: usize,
}

/// The result of a walk.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Walk {
    /// The found words, in emission order.
    pub words: Vec<String>,
    pub stats: WalkStats,
}

/// Find the words of a [PatternTree] that can be traced on a [Board].
pub struct BoardWalker<'a> {
    board: &'a Board,
    tree: &'a PatternTree,
    caches: PathCaches,
    /// Whether a cell is part of the path being built.
    in_path: Vec<bool>,
    frames: Vec<Frame>,
    words: Vec<String>,
    stats: WalkStats,
}

impl<'a> BoardWalker<'a> {
    pub fn new(board: &'a Board, tree: &'a PatternTree) -> Self {
        Self {
            board,
            tree,
            caches: PathCaches::with_nodes(tree.len()),
            in_path: vec![false; board.len()],
            // One frame per cell at most, plus the anchor of a non-root search
            frames: Vec::with_capacity(board.len() + 1),
            words: Vec::new(),
            stats: WalkStats::default(),
        }
    }

    /// Walk the whole tree, roots in letter order.
    pub fn walk(mut self) -> Walk {
        let tree = self.tree;
        for root in tree.roots() {
            self.visit(root);
        }

        log::debug!("Walk done: {:?}", self.stats);

        Walk {
            words: self.words,
            stats: self.stats,
        }
    }

    /// Search a node, emit its words and walk its children.
    fn visit(&mut self, node: NodeId) {
        let tree = self.tree;
        self.stats.nodes_searched += 1;

        if !self.search(node) {
            self.stats.subtrees_pruned += 1;
            return;
        }

        self.emit(node);
        for child in tree.children(node) {
            self.visit(child);
        }
        self.caches.clear(node);
    }

    fn emit(&mut self, node: NodeId) {
        let tree = self.tree;
        let terminal = tree.terminal(node);
        let prefix = tree.prefix(node);

        if terminal.forward() {
            self.words.push(prefix.to_owned());
            self.stats.words_emitted += 1;
        }
        if terminal.reversed() {
            self.words.push(prefix.chars().rev().collect());
            self.stats.words_emitted += 1;
        }
    }

    /// Record the paths spelling the pattern of a node and return whether there is one.
    ///
    /// A leaf only needs one path. Any other node keeps all of them, as each
    /// one may be the only way for some descendant to continue.
    fn search(&mut self, node: NodeId) -> bool {
        let tree = self.tree;
        let find_all = !tree.is_leaf(node);
        let parent = tree.node(node).parent();
        let starts = self.start_cells(node, parent);

        let mut found = false;
        for start in starts {
            found |= self.search_impl(node, parent, start, find_all);
            if found && !find_all {
                break;
            }
        }
        found
    }

    /// The first cells of the root paths, or the end cells of the parent paths.
    fn start_cells(&self, node: NodeId, parent: Option<NodeId>) -> Vec<CellIndex> {
        match parent {
            None => {
                let first = self.tree.pattern(node).as_bytes()[0];
                self.board.cells_with(first).to_vec()
            }
            Some(parent) => self.caches.end_cells(parent),
        }
    }

    /// Backtrack from `start` over the paths spelling the node pattern.
    ///
    /// For a root, `start` is the first cell of the path. Otherwise it is the
    /// end of a parent path and the pattern is spelled by its continuation.
    fn search_impl(
        &mut self,
        node: NodeId,
        parent: Option<NodeId>,
        start: CellIndex,
        find_all: bool,
    ) -> bool {
        let board = self.board;
        let tree = self.tree;
        let pattern = tree.pattern(node).as_bytes();
        // Number of frames not spelling the pattern
        let skip = if parent.is_some() { 1 } else { 0 };

        debug_assert!(self.frames.is_empty());
        self.in_path[start.get()] = true;
        self.frames.push(Frame::new(start));

        let mut found = false;
        loop {
            let depth = self.frames.len();
            if depth == 0 {
                break;
            }

            if depth - skip == pattern.len() {
                let cells = self.frames[skip..].iter().map(|f| f.cell).collect();
                let from = parent.map(|_| start);
                self.caches.insert(node, CachedPath::new(from, cells));
                self.stats.paths_recorded += 1;
                found = true;

                if !find_all {
                    break;
                }
                self.retreat(parent, skip);
                continue;
            }

            let next_letter = pattern[depth - skip];
            let top = self.frames[depth - 1];
            let slots = board.neighbor_slots(top.cell);

            let mut next = None;
            for (i, slot) in slots.iter().enumerate().skip(top.next_neighbor) {
                let cell = match *slot {
                    Some(cell) => cell,
                    None => continue,
                };
                if self.in_path[cell.get()] || board.letter(cell) != next_letter {
                    continue;
                }
                next = Some((i, cell));
                break;
            }

            match next {
                Some((i, cell)) => {
                    self.frames[depth - 1].next_neighbor = i + 1;

                    if let Some(parent) = parent {
                        self.caches.invalidate_paths(tree, parent, cell);
                        if !self.caches.has_valid_path(tree, parent, start) {
                            self.caches.validate_paths(tree, parent, cell);
                            continue;
                        }
                    }

                    assert!(
                        self.frames.len() <= board.len(),
                        "a path cannot hold more cells than the board"
                    );
                    self.in_path[cell.get()] = true;
                    self.frames.push(Frame::new(cell));
                }
                None => self.retreat(parent, skip),
            }
        }

        while !self.frames.is_empty() {
            self.retreat(parent, skip);
        }

        found
    }

    /// Drop the last cell of the path being built.
    fn retreat(&mut self, parent: Option<NodeId>, skip: usize) {
        let depth = self.frames.len();
        let frame = match self.frames.pop() {
            Some(frame) => frame,
            None => return,
        };
        self.in_path[frame.cell.get()] = false;

        // The anchor of a non-root search never blocked anything
        if let Some(parent) = parent {
            if depth > skip {
                self.caches.validate_paths(self.tree, parent, frame.cell);
            }
        }
    }
}
