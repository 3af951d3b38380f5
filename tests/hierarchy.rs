use shopadmin::{CategoryId, CategoryRecord, CategoryTree, HierarchyError};

fn id(v: &str) -> CategoryId {
    CategoryId::from(v)
}

/// The three-level chain 1 <- 2 <- 3.
fn chain() -> CategoryTree {
    CategoryTree::from_records(vec![
        CategoryRecord::root("1", "Electronics"),
        CategoryRecord::child("2", "Phones", "1"),
        CategoryRecord::child("3", "Cases", "2"),
    ])
    .unwrap()
}

#[test]
fn descendants_of_root_covers_the_chain() {
    let tree = chain();
    let set = tree.descendants_of(&id("1"));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&id("2")));
    assert!(set.contains(&id("3")));
}

#[test]
fn root_of_a_chain_has_no_eligible_parent() {
    // only itself and its descendants exist, so nothing is left
    assert!(chain().eligible_parents(Some(&id("1"))).is_empty());
}

#[test]
fn leaf_may_move_anywhere_above_it() {
    let tree = chain();
    let eligible = tree.eligible_parents(Some(&id("3")));
    let ids: Vec<&str> = eligible.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn new_category_sees_the_whole_list() {
    let tree = chain();
    assert_eq!(tree.eligible_parents(None).len(), tree.len());
}

#[test]
fn branching_tree_excludes_only_the_moved_subtree() {
    let tree = CategoryTree::from_records(vec![
        CategoryRecord::root("1", "Catalog"),
        CategoryRecord::child("2", "Apparel", "1"),
        CategoryRecord::child("3", "Shoes", "2"),
        CategoryRecord::child("4", "Sneakers", "3"),
        CategoryRecord::child("5", "Accessories", "1"),
        CategoryRecord::root("6", "Clearance"),
    ])
    .unwrap();

    let eligible = tree.eligible_parents(Some(&id("2")));
    let ids: Vec<&str> = eligible.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "5", "6"]);
}

#[test]
fn numeric_and_string_ids_are_the_same_key() {
    let tree = chain();
    assert_eq!(
        tree.descendants_of(&CategoryId::from(1_i64)),
        tree.descendants_of(&id("1"))
    );
    assert!(tree.get(&CategoryId::from(3_u64)).is_some());
}

#[test]
fn dangling_parent_reference_is_tolerated() {
    let tree = CategoryTree::from_records(vec![
        CategoryRecord::root("1", "Kept"),
        CategoryRecord::child("2", "Orphan", "404"),
    ])
    .unwrap();
    assert!(tree.descendants_of(&id("1")).is_empty());
    // the orphan is still a record and still an eligible parent elsewhere
    assert_eq!(tree.eligible_parents(Some(&id("1"))).len(), 1);
}

#[test]
fn absent_exclude_id_filters_nothing() {
    let tree = chain();
    assert_eq!(tree.eligible_parents(Some(&id("no-such"))).len(), 3);
}

#[test]
fn cyclic_parent_relation_is_rejected() {
    let result = CategoryTree::from_records(vec![
        CategoryRecord::child("1", "A", "3"),
        CategoryRecord::child("2", "B", "1"),
        CategoryRecord::child("3", "C", "2"),
    ]);
    match result {
        Err(HierarchyError::Cycle { path }) => {
            assert!(path.len() >= 4, "cycle path should close the loop");
            assert_eq!(path.first(), path.last());
            let rendered = HierarchyError::Cycle { path }.to_string();
            assert!(rendered.contains("malformed hierarchy"));
        }
        other => panic!("expected Cycle, got {other:?}"),
    }
}

#[test]
fn duplicate_id_is_rejected() {
    let result = CategoryTree::from_records(vec![
        CategoryRecord::root("1", "A"),
        CategoryRecord::child("1", "B", "2"),
    ]);
    assert!(matches!(
        result,
        Err(HierarchyError::DuplicateId { id }) if id == CategoryId::from("1")
    ));
}

#[test]
fn empty_list_builds_an_empty_tree() {
    let tree = CategoryTree::from_records(Vec::new()).unwrap();
    assert!(tree.is_empty());
    assert!(tree.eligible_parents(None).is_empty());
    assert!(tree.descendants_of(&id("1")).is_empty());
}
