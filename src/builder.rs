//! Forest builder: reassembles flat parent-linked term lists into trees.

use std::collections::{HashMap, HashSet};

use generational_arena::Index;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::arena::TermForest;
use crate::errors::{TreeError, TreeResult};
use crate::term::{Term, TermId};

/// Defensive caps on what a build will accept.
///
/// Both default to unlimited. An exceeded cap refuses the build with an error
/// rather than truncating, so callers never render a silently incomplete
/// taxonomy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of input terms
    pub max_terms: Option<usize>,
    /// Maximum number of nesting levels in the built forest
    pub max_depth: Option<usize>,
}

/// Constructs a [`TermForest`] from a flat term sequence.
///
/// The builder absorbs malformed data instead of failing: a dangling parent
/// reference promotes the term to a root, parent cycles are broken by
/// promoting every cycle member to a root, and duplicate ids resolve
/// last-write-wins with the earlier record discarded. The only refusals are
/// the configured [`Limits`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    limits: Limits,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    #[instrument(level = "debug", skip(self, terms), fields(term_count = terms.len()))]
    pub fn build(&self, terms: Vec<Term>) -> TreeResult<TermForest> {
        if let Some(limit) = self.limits.max_terms {
            if terms.len() > limit {
                return Err(TreeError::TooManyTerms {
                    count: terms.len(),
                    limit,
                });
            }
        }

        let terms = dedupe_last_wins(terms);

        // Insert every node first so a child can reference a parent that
        // appears later in the input.
        let mut forest = TermForest::with_capacity(terms.len());
        let order: Vec<Index> = terms
            .into_iter()
            .map(|term| forest.insert_detached(term))
            .collect();

        self.attach(&mut forest, &order);
        self.rescue_cycles(&mut forest, &order);

        if let Some(limit) = self.limits.max_depth {
            let depth = forest.depth();
            if depth > limit {
                return Err(TreeError::TooDeep { depth, limit });
            }
        }

        Ok(forest)
    }

    /// Attach each node under its resolved parent, in input order.
    fn attach(&self, forest: &mut TermForest, order: &[Index]) {
        for &idx in order {
            let parent_id = forest
                .get_node(idx)
                .and_then(|node| node.term.parent);

            match parent_id {
                None => forest.attach_root(idx),
                Some(parent_id) => match forest.find(parent_id) {
                    Some(parent_idx) => forest.attach_child(parent_idx, idx),
                    None => {
                        debug!(parent_id, "dangling parent reference, promoting term to root");
                        forest.attach_root(idx);
                    }
                },
            }
        }
    }

    /// Break parent cycles so every node is reachable from a root.
    ///
    /// A node left unreachable by the attach pass lies on or under a parent
    /// cycle. Every member of the cycle is promoted to a root; terms hanging
    /// off the cycle stay attached beneath the promoted members. Runs only
    /// over the unreachable residue, so well-formed input pays nothing.
    fn rescue_cycles(&self, forest: &mut TermForest, order: &[Index]) {
        let mut visited = HashSet::with_capacity(order.len());
        for root in forest.roots().to_vec() {
            mark_reachable(forest, root, &mut visited);
        }
        if visited.len() == order.len() {
            return;
        }

        for &start in order {
            if visited.contains(&start) {
                continue;
            }

            // Follow the parent chain until it repeats or reaches known ground.
            let mut path: Vec<Index> = Vec::new();
            let mut position: HashMap<Index, usize> = HashMap::new();
            let mut current = start;
            let cycle_entry = loop {
                if visited.contains(&current) {
                    break None;
                }
                if let Some(&at) = position.get(&current) {
                    break Some(at);
                }
                position.insert(current, path.len());
                path.push(current);
                match forest.get_node(current).and_then(|node| node.parent) {
                    Some(parent) => current = parent,
                    None => break None,
                }
            };

            if let Some(entry) = cycle_entry {
                for &member in &path[entry..] {
                    debug!(?member, "parent cycle detected, promoting term to root");
                    forest.promote_root(member);
                }
                for &member in &path[entry..] {
                    mark_reachable(forest, member, &mut visited);
                }
            }
        }
    }
}

/// Keep only the last occurrence of each id, preserving input order otherwise.
fn dedupe_last_wins(mut terms: Vec<Term>) -> Vec<Term> {
    let mut last: HashMap<TermId, usize> = HashMap::with_capacity(terms.len());
    for (i, term) in terms.iter().enumerate() {
        last.insert(term.id, i);
    }
    if last.len() == terms.len() {
        return terms;
    }

    debug!(
        dropped = terms.len() - last.len(),
        "duplicate term ids in input, keeping last occurrence"
    );
    let mut i = 0;
    terms.retain(|term| {
        let keep = last[&term.id] == i;
        i += 1;
        keep
    });
    terms
}

fn mark_reachable(forest: &TermForest, from: Index, visited: &mut HashSet<Index>) {
    let mut stack = vec![from];
    while let Some(idx) = stack.pop() {
        if !visited.insert(idx) {
            continue;
        }
        if let Some(node) = forest.get_node(idx) {
            stack.extend(node.children.iter().copied());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_unique_ids_when_deduping_then_input_unchanged() {
        let terms = vec![Term::root(1, "a"), Term::root(2, "b")];
        assert_eq!(dedupe_last_wins(terms.clone()), terms);
    }

    #[test]
    fn given_duplicate_ids_when_deduping_then_last_occurrence_survives_in_place() {
        let terms = vec![
            Term::root(1, "old"),
            Term::root(2, "keep"),
            Term::root(1, "new"),
        ];
        let deduped = dedupe_last_wins(terms);
        assert_eq!(
            deduped,
            vec![Term::root(2, "keep"), Term::root(1, "new")]
        );
    }

    #[test]
    fn given_partial_limits_when_deserializing_then_missing_fields_stay_unlimited() {
        let limits: Limits = serde_json::from_str(r#"{"max_terms": 5000}"#).unwrap();
        assert_eq!(limits.max_terms, Some(5000));
        assert_eq!(limits.max_depth, None);
    }
}
