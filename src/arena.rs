//! Arena-backed term forest.

use std::collections::HashMap;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::term::{Term, TermId};

/// Tree node wrapping one term.
#[derive(Debug)]
pub struct TermNode {
    /// The original term record
    pub term: Term,
    /// Index of the parent node, None for root nodes
    pub parent: Option<Index>,
    /// Indices of child nodes, in attachment order
    pub children: Vec<Index>,
}

/// Arena-based forest of term trees.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Roots keep the order in which they entered the input sequence; the forest
/// is immutable once the builder hands it out.
#[derive(Debug)]
pub struct TermForest {
    /// Arena storage for all nodes
    arena: Arena<TermNode>,
    /// Root node indices, in promotion order
    roots: Vec<Index>,
    /// Lookup from term id to arena index
    by_id: HashMap<TermId, Index>,
}

impl Default for TermForest {
    fn default() -> Self {
        Self::new()
    }
}

impl TermForest {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            arena: Arena::with_capacity(n),
            roots: Vec::new(),
            by_id: HashMap::with_capacity(n),
        }
    }

    /// Insert a node without attaching it anywhere yet.
    ///
    /// The builder inserts all nodes first so that children appearing before
    /// their parent in the input can still resolve the parent by id.
    pub(crate) fn insert_detached(&mut self, term: Term) -> Index {
        let id = term.id;
        let idx = self.arena.insert(TermNode {
            term,
            parent: None,
            children: Vec::new(),
        });
        self.by_id.insert(id, idx);
        idx
    }

    pub(crate) fn attach_root(&mut self, idx: Index) {
        self.roots.push(idx);
    }

    pub(crate) fn attach_child(&mut self, parent: Index, child: Index) {
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(child);
        }
        if let Some(child_node) = self.arena.get_mut(child) {
            child_node.parent = Some(parent);
        }
    }

    /// Detach a node from its parent and make it a root.
    ///
    /// Used by the cycle rescue pass; a no-op on nodes that are already roots.
    pub(crate) fn promote_root(&mut self, idx: Index) {
        let Some(parent) = self.arena.get(idx).and_then(|n| n.parent) else {
            return;
        };
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.retain(|&c| c != idx);
        }
        if let Some(node) = self.arena.get_mut(idx) {
            node.parent = None;
        }
        self.roots.push(idx);
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TermNode> {
        self.arena.get(idx)
    }

    /// Resolve a term id to its arena index.
    pub fn find(&self, id: TermId) -> Option<Index> {
        self.by_id.get(&id).copied()
    }

    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order iterator over the whole forest.
    ///
    /// Yields `(index, depth, node)` with a zero-based depth; parents precede
    /// their children, siblings keep attachment order. Stack-based, so depth
    /// is bounded by heap, not the call stack.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIter {
        PreOrderIter::new(self)
    }

    /// Number of nesting levels in the deepest tree (1 for a lone root).
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.iter().map(|(_, depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Terms with no children, in display order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_terms(&self) -> Vec<&Term> {
        self.iter()
            .filter(|(_, _, node)| node.children.is_empty())
            .map(|(_, _, node)| &node.term)
            .collect()
    }

    /// Ancestry chain from a root down to the given term, inclusive.
    ///
    /// Returns None for unknown ids. Terminates on any built forest since
    /// construction breaks every parent cycle.
    pub fn path_to(&self, id: TermId) -> Option<Vec<&Term>> {
        let mut idx = self.find(id)?;
        let mut path = Vec::new();
        loop {
            let node = self.get_node(idx)?;
            path.push(&node.term);
            match node.parent {
                Some(parent) => idx = parent,
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }
}

pub struct PreOrderIter<'a> {
    forest: &'a TermForest,
    stack: Vec<(Index, usize)>,
}

impl<'a> PreOrderIter<'a> {
    fn new(forest: &'a TermForest) -> Self {
        let stack = forest.roots.iter().rev().map(|&idx| (idx, 0)).collect();
        Self { forest, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (Index, usize, &'a TermNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, depth)) = self.stack.pop() {
            if let Some(node) = self.forest.get_node(idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((idx, depth, node));
            }
        }
        None
    }
}
