//! Hierarchical taxonomy term trees.
//!
//! A content store delivers taxonomy terms as a flat, ordered list of
//! parent-referencing records. This crate reassembles that list into a forest
//! ([`TreeBuilder`]), linearizes the forest into the indented display order
//! selection controls consume ([`flatten`]), and filters subtrees out of the
//! result ([`exclude_subtree`]) so a term is never offered as its own
//! ancestor.
//!
//! Malformed data never fails a build: a dangling parent reference promotes
//! the term to a top-level entry, parent cycles are broken by promoting their
//! members, and duplicate ids resolve last-write-wins. Availability beats
//! strict validation at this layer; a transiently inconsistent snapshot from
//! a live store still renders.
//!
//! ```
//! use taxtree::{flatten, Term, TreeBuilder};
//!
//! let terms = vec![
//!     Term::root(1, "Fruit"),
//!     Term::child_of(2, 1, "Apple"),
//!     Term::child_of(3, 1, "Banana"),
//!     Term::root(4, "Vegetable"),
//! ];
//! let forest = TreeBuilder::new().build(terms).unwrap();
//! let entries = flatten(&forest);
//!
//! let names: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.depth)).collect();
//! assert_eq!(
//!     names,
//!     [("Fruit", 0), ("Apple", 1), ("Banana", 1), ("Vegetable", 0)]
//! );
//! ```

pub mod arena;
pub mod builder;
pub mod display;
pub mod errors;
pub mod flatten;
pub mod term;
pub mod util;

pub use arena::{PreOrderIter, TermForest, TermNode};
pub use builder::{Limits, TreeBuilder};
pub use errors::{TreeError, TreeResult};
pub use flatten::{exclude_subtree, flatten, FlatTerm};
pub use term::{Term, TermId};
