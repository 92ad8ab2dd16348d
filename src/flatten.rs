//! Pre-order linearization of a term forest for display.

use serde::Serialize;
use tracing::instrument;

use crate::arena::TermForest;
use crate::term::TermId;

/// One row of the flattened display sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatTerm {
    pub id: TermId,
    pub name: String,
    /// Zero-based nesting level, 0 for roots
    pub depth: usize,
}

impl FlatTerm {
    /// Name prefixed with `pad` repeated `depth` times, the way dropdown
    /// consumers indent nested entries.
    pub fn indented_name(&self, pad: &str) -> String {
        format!("{}{}", pad.repeat(self.depth), self.name)
    }
}

/// Flatten a forest into display order.
///
/// Pre-order depth-first: every term immediately precedes its descendants and
/// precedes its next sibling's whole subtree; siblings keep their attachment
/// order. Output length equals the forest's node count.
#[instrument(level = "debug", skip(forest), fields(term_count = forest.len()))]
pub fn flatten(forest: &TermForest) -> Vec<FlatTerm> {
    forest
        .iter()
        .map(|(_, depth, node)| FlatTerm {
            id: node.term.id,
            name: node.term.name.clone(),
            depth,
        })
        .collect()
}

/// Remove `excluded` and its whole subtree from a flattened sequence.
///
/// Pre-order output places a subtree in one contiguous block: it ends before
/// the next entry at the same or a shallower depth. Call sites use this to
/// keep a term from being offered as its own ancestor. An unknown id returns
/// the input unchanged.
pub fn exclude_subtree(entries: &[FlatTerm], excluded: TermId) -> Vec<FlatTerm> {
    let Some(start) = entries.iter().position(|entry| entry.id == excluded) else {
        return entries.to_vec();
    };
    let depth = entries[start].depth;
    let end = entries[start + 1..]
        .iter()
        .position(|entry| entry.depth <= depth)
        .map(|offset| start + 1 + offset)
        .unwrap_or(entries.len());

    let mut result = Vec::with_capacity(entries.len() - (end - start));
    result.extend_from_slice(&entries[..start]);
    result.extend_from_slice(&entries[end..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: TermId, depth: usize) -> FlatTerm {
        FlatTerm {
            id,
            name: format!("t{}", id),
            depth,
        }
    }

    #[test]
    fn given_subtree_at_end_when_excluding_then_removes_through_tail() {
        let entries = vec![entry(1, 0), entry(2, 0), entry(3, 1), entry(4, 2)];
        let result = exclude_subtree(&entries, 2);
        assert_eq!(result, vec![entry(1, 0)]);
    }

    #[test]
    fn given_unknown_id_when_excluding_then_input_unchanged() {
        let entries = vec![entry(1, 0), entry(2, 1)];
        assert_eq!(exclude_subtree(&entries, 99), entries);
    }

    #[test]
    fn given_depth_when_indenting_then_pad_repeats() {
        assert_eq!(entry(1, 2).indented_name("--"), "----t1");
        assert_eq!(entry(1, 0).indented_name("--"), "t1");
    }
}
