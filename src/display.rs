//! Terminal-friendly renderings of a term forest.

use generational_arena::Index;
use itertools::Itertools;
use termtree::Tree;

use crate::arena::TermForest;
use crate::term::{Term, TermId};

/// Convert each root into a [`termtree::Tree`] for pretty-printing.
pub fn to_display_trees(forest: &TermForest) -> Vec<Tree<String>> {
    forest
        .roots()
        .iter()
        .filter_map(|&root| subtree(forest, root))
        .collect()
}

fn subtree(forest: &TermForest, idx: Index) -> Option<Tree<String>> {
    let node = forest.get_node(idx)?;
    let leaves: Vec<_> = node
        .children
        .iter()
        .filter_map(|&child| subtree(forest, child))
        .collect();
    Some(Tree::new(node.term.name.clone()).with_leaves(leaves))
}

/// Ancestry path for one term joined with a separator, e.g. `Fruit / Citrus / Lemon`.
pub fn breadcrumb(forest: &TermForest, id: TermId, separator: &str) -> Option<String> {
    forest
        .path_to(id)
        .map(|path| path.iter().map(|term| term.name.as_str()).join(separator))
}

/// All root-to-leaf ancestry chains, one per leaf term.
pub fn branches(forest: &TermForest) -> Vec<Vec<&Term>> {
    forest
        .leaf_terms()
        .iter()
        .filter_map(|leaf| forest.path_to(leaf.id))
        .collect()
}
