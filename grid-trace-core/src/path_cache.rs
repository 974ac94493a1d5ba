//! The board paths discovered for every pattern tree node.
//!
//! A node only stores the cells spelling its own pattern. The full path of a
//! word is rebuilt by chaining a node path to a path of its parent ending on
//! the cell the node path starts from, and so on up to the root.
//!
//! While the walker extends a path for a child node, every cell it takes
//! blocks the ancestor paths going through that cell. An ancestor path stays
//! blocked until the walker retreats from the cell.

use crate::{CellIndex, NodeId};
use std::collections::{BTreeMap, HashMap};

/// Give access to the parent of a node.
pub trait Lineage {
    /// Return the parent of the node, or None for a root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;
}

/// Whether a cached path can currently be part of a word path.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PathState {
    Valid,
    /// The path goes through a cell used by the path being extended.
    Blocked(CellIndex),
}

/// A path spelling the pattern of one node.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CachedPath {
    from: Option<CellIndex>,
    cells: Vec<CellIndex>,
    state: PathState,
}

impl CachedPath {
    /// Create a valid path.
    ///
    /// `from` is the end cell of the parent path it extends, None for a root.
    /// `cells` must not be empty and does not include `from`.
    pub fn new(from: Option<CellIndex>, cells: Vec<CellIndex>) -> Self {
        assert!(!cells.is_empty(), "a cached path spells at least one letter");
        Self {
            from,
            cells,
            state: PathState::Valid,
        }
    }

    pub fn from(&self) -> Option<CellIndex> {
        self.from
    }

    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    pub fn end(&self) -> CellIndex {
        self.cells[self.cells.len() - 1]
    }

    pub fn state(&self) -> PathState {
        self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state == PathState::Valid
    }

    /// Block the path on `cell` unless it is already blocked.
    fn block(&mut self, cell: CellIndex) {
        if self.state == PathState::Valid {
            self.state = PathState::Blocked(cell);
        }
    }

    /// Validate the path again if it was blocked on `cell`.
    fn unblock(&mut self, cell: CellIndex) {
        if self.state == PathState::Blocked(cell) {
            self.state = PathState::Valid;
        }
    }
}

/// The paths of one node, grouped by end cell.
#[derive(Debug, Clone, Default)]
pub struct PathCache {
    by_end: BTreeMap<CellIndex, Vec<CachedPath>>,
    // For every cell, the (end cell, position) of the paths going through it
    by_cell: HashMap<CellIndex, Vec<(CellIndex, usize)>>,
    len: usize,
}

impl PathCache {
    pub fn insert(&mut self, path: CachedPath) {
        let end = path.end();
        let paths = self.by_end.entry(end).or_default();
        let position = paths.len();

        for &cell in path.cells() {
            self.by_cell.entry(cell).or_default().push((end, position));
        }

        paths.push(path);
        self.len += 1;
    }

    /// Return the paths ending on a cell.
    pub fn ending_at(&self, end: CellIndex) -> &[CachedPath] {
        match self.by_end.get(&end) {
            Some(paths) => paths,
            None => &[],
        }
    }

    /// Iterate over the end cells in increasing order.
    pub fn end_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.by_end.keys().copied()
    }

    /// Iterate over all the paths.
    pub fn paths(&self) -> impl Iterator<Item = &CachedPath> + '_ {
        self.by_end.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.by_end.clear();
        self.by_cell.clear();
        self.len = 0;
    }

    fn for_each_containing(&mut self, cell: CellIndex, mut f: impl FnMut(&mut CachedPath)) {
        let by_end = &mut self.by_end;
        if let Some(refs) = self.by_cell.get(&cell) {
            for &(end, position) in refs {
                if let Some(path) = by_end.get_mut(&end).and_then(|p| p.get_mut(position)) {
                    f(path);
                }
            }
        }
    }

    fn block(&mut self, cell: CellIndex) {
        self.for_each_containing(cell, |path| path.block(cell));
    }

    fn unblock(&mut self, cell: CellIndex) {
        self.for_each_containing(cell, |path| path.unblock(cell));
    }
}

/// The path caches of all the nodes of a tree, indexed by [NodeId].
#[derive(Debug, Clone, Default)]
pub struct PathCaches {
    caches: Vec<PathCache>,
}

impl PathCaches {
    /// Create empty caches for a tree of `nb_nodes` nodes.
    pub fn with_nodes(nb_nodes: usize) -> Self {
        Self {
            caches: vec![PathCache::default(); nb_nodes],
        }
    }

    pub fn get(&self, node: NodeId) -> &PathCache {
        &self.caches[node.get()]
    }

    pub fn insert(&mut self, node: NodeId, path: CachedPath) {
        self.caches[node.get()].insert(path);
    }

    /// Forget all the paths of a node.
    pub fn clear(&mut self, node: NodeId) {
        self.caches[node.get()].clear();
    }

    /// Return the end cells of the paths of a node, in increasing order.
    pub fn end_cells(&self, node: NodeId) -> Vec<CellIndex> {
        self.get(node).end_cells().collect()
    }

    /// Return whether a word path can end on `end` with the pattern of `node`:
    /// there is a valid path of `node` ending there, extending a valid path of
    /// its parent, and so on up to the root, without two of them sharing a cell.
    pub fn has_valid_path<L: Lineage>(&self, lineage: &L, node: NodeId, end: CellIndex) -> bool {
        let mut used = Vec::new();
        self.has_valid_path_avoiding(lineage, node, end, &mut used)
    }

    fn has_valid_path_avoiding<L: Lineage>(
        &self,
        lineage: &L,
        node: NodeId,
        end: CellIndex,
        used: &mut Vec<CellIndex>,
    ) -> bool {
        let parent = lineage.parent(node);

        for path in self.get(node).ending_at(end) {
            if !path.is_valid() || path.cells().iter().any(|c| used.contains(c)) {
                continue;
            }

            let parent = match parent {
                None => return true,
                Some(parent) => parent,
            };
            let from = path
                .from()
                .expect("a path of a child node extends a parent path");

            let nb_used = used.len();
            used.extend_from_slice(path.cells());
            let found = self.has_valid_path_avoiding(lineage, parent, from, used);
            used.truncate(nb_used);

            if found {
                return true;
            }
        }

        false
    }

    /// Block the valid paths going through `cell`, in `node` and all its ancestors.
    pub fn invalidate_paths<L: Lineage>(&mut self, lineage: &L, node: NodeId, cell: CellIndex) {
        let mut current = Some(node);
        while let Some(node) = current {
            self.caches[node.get()].block(cell);
            current = lineage.parent(node);
        }
    }

    /// Validate again the paths blocked by `cell`, in `node` and all its ancestors.
    pub fn validate_paths<L: Lineage>(&mut self, lineage: &L, node: NodeId, cell: CellIndex) {
        let mut current = Some(node);
        while let Some(node) = current {
            self.caches[node.get()].unblock(cell);
            current = lineage.parent(node);
        }
    }
}
