//! Tests for terminal renderings: trees, breadcrumbs, branches

use rstest::{fixture, rstest};
use taxtree::display::{branches, breadcrumb, to_display_trees};
use taxtree::{Term, TermForest, TreeBuilder};

#[fixture]
fn produce_forest() -> TermForest {
    let terms = vec![
        Term::root(1, "Fruit"),
        Term::child_of(2, 1, "Apple"),
        Term::child_of(6, 1, "Citrus"),
        Term::child_of(7, 6, "Lemon"),
        Term::root(4, "Vegetable"),
        Term::child_of(5, 4, "Carrot"),
    ];
    TreeBuilder::new().build(terms).unwrap()
}

#[rstest]
fn given_forest_when_rendering_then_one_tree_per_root(produce_forest: TermForest) {
    let trees = to_display_trees(&produce_forest);

    assert_eq!(trees.len(), 2);

    let rendered = trees[0].to_string();
    assert!(rendered.starts_with("Fruit"), "got: {}", rendered);
    assert!(rendered.contains("├── Apple"), "got: {}", rendered);
    assert!(rendered.contains("└── Citrus"), "got: {}", rendered);
    assert!(rendered.contains("Lemon"), "got: {}", rendered);
}

#[rstest]
fn given_nested_term_when_building_breadcrumb_then_joins_ancestry(produce_forest: TermForest) {
    assert_eq!(
        breadcrumb(&produce_forest, 7, " / "),
        Some("Fruit / Citrus / Lemon".to_string())
    );
    assert_eq!(
        breadcrumb(&produce_forest, 1, " / "),
        Some("Fruit".to_string())
    );
    assert_eq!(breadcrumb(&produce_forest, 99, " / "), None);
}

#[rstest]
fn given_forest_when_listing_branches_then_one_chain_per_leaf(produce_forest: TermForest) {
    let mut chains: Vec<Vec<String>> = branches(&produce_forest)
        .iter()
        .map(|chain| chain.iter().map(|t| t.name.clone()).collect())
        .collect();
    chains.sort();

    let mut expected = vec![
        vec!["Fruit".to_string(), "Apple".to_string()],
        vec![
            "Fruit".to_string(),
            "Citrus".to_string(),
            "Lemon".to_string(),
        ],
        vec!["Vegetable".to_string(), "Carrot".to_string()],
    ];
    expected.sort();

    assert_eq!(chains, expected);
}
