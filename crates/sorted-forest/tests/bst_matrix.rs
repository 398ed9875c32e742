use sorted_forest::{BinarySearchTree, Error, SortedCollection};

fn in_order(tree: &BinarySearchTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

#[test]
fn bst_size_is_empty_clear_matrix() {
    let mut tree = BinarySearchTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);

    tree.insert(4);
    assert_eq!(tree.size(), 1);
    assert!(!tree.is_empty());

    tree.insert(5);
    tree.insert(6);
    assert_eq!(tree.size(), 3);

    tree.clear();
    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.root_index(), None);
    assert_eq!(tree.first(), None);
}

#[test]
fn bst_left_leaning_chain_matrix() {
    let mut tree = BinarySearchTree::new();
    for v in [10, 7, 6, 2] {
        tree.insert(v);
    }

    let root = tree.root_index().unwrap();
    assert_eq!(*tree.value(root), 10);
    let l1 = tree.left(root).unwrap();
    assert_eq!(*tree.value(l1), 7);
    let l2 = tree.left(l1).unwrap();
    assert_eq!(*tree.value(l2), 6);
    let l3 = tree.left(l2).unwrap();
    assert_eq!(*tree.value(l3), 2);

    assert_eq!(tree.right(root), None);
    assert_eq!(tree.parent(l3), Some(l2));
    assert_eq!(tree.parent(root), None);
    assert_eq!(tree.to_level_order_string(), "[ 10, 7, 6, 2 ]");
    tree.assert_valid().unwrap();
}

#[test]
fn bst_mixed_shape_matrix() {
    let mut tree = BinarySearchTree::new();
    for v in [8, 15, 11, 3, 20] {
        tree.insert(v);
    }
    let root = tree.root_index().unwrap();
    let r = tree.right(root).unwrap();
    assert_eq!(*tree.value(r), 15);
    assert_eq!(tree.left(r).map(|i| *tree.value(i)), Some(11));
    assert_eq!(tree.right(r).map(|i| *tree.value(i)), Some(20));
    assert_eq!(tree.left(root).map(|i| *tree.value(i)), Some(3));
    assert_eq!(tree.to_in_order_string(), "[ 3, 8, 11, 15, 20 ]");
    assert_eq!(tree.first(), Some(&3));
    assert_eq!(tree.last(), Some(&20));
}

#[test]
fn bst_duplicates_go_left_matrix() {
    let mut tree = BinarySearchTree::new();
    let a = tree.insert(5);
    let b = tree.insert(5);
    let c = tree.insert(5);
    assert_eq!(tree.left(a), Some(b));
    assert_eq!(tree.left(b), Some(c));
    assert_eq!(tree.right(a), None);
    assert_eq!(tree.size(), 3);
    assert_eq!(in_order(&tree), vec![5, 5, 5]);
}

#[test]
fn bst_contains_matrix() {
    let tree: BinarySearchTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    for v in [50, 30, 70, 20, 40, 60, 80] {
        assert!(tree.contains(&v), "expected {v} to be found");
    }
    for v in [0, 25, 45, 65, 90] {
        assert!(!tree.contains(&v), "did not expect {v} to be found");
    }
    assert!(!BinarySearchTree::<i32>::new().contains(&1));
}

#[test]
fn bst_strings_matrix() {
    let mut tree = BinarySearchTree::new();
    for s in ["pear", "apple", "quince", "fig"] {
        tree.insert(s.to_string());
    }
    assert!(tree.contains(&"fig".to_string()));
    assert!(!tree.contains(&"kiwi".to_string()));
    assert_eq!(tree.to_in_order_string(), "[ apple, fig, pear, quince ]");
}

#[test]
fn bst_try_insert_absent_value_matrix() {
    let mut tree = BinarySearchTree::<i32>::new();
    let err = tree.try_insert(None).unwrap_err();
    assert_eq!(err, Error::AbsentValue);
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "absent value");
    assert!(tree.is_empty());

    let idx = tree.try_insert(Some(3)).unwrap();
    assert_eq!(tree.root_index(), Some(idx));
}

#[test]
fn bst_through_collection_trait_matrix() {
    fn load<C: SortedCollection<i32>>(c: &mut C, rows: &[Option<i32>]) -> usize {
        let mut loaded = 0;
        for row in rows {
            if c.try_insert(*row).is_ok() {
                loaded += 1;
            }
        }
        loaded
    }

    let mut tree = BinarySearchTree::new();
    let loaded = load(&mut tree, &[Some(3), None, Some(1), Some(2), None]);
    assert_eq!(loaded, 3);
    assert_eq!(SortedCollection::size(&tree), 3);
    assert!(SortedCollection::contains(&tree, &2));
    SortedCollection::clear(&mut tree);
    assert!(SortedCollection::is_empty(&tree));
}

#[test]
fn bst_sorted_insertion_chain_does_not_recurse_matrix() {
    let mut tree = BinarySearchTree::new();
    for v in 0..10_000 {
        tree.insert(v);
    }
    assert_eq!(tree.size(), 10_000);
    assert!(tree.contains(&9_999));
    assert_eq!(tree.iter().count(), 10_000);
    assert_eq!(tree.range(Some(&9_990), None).count(), 10);
    tree.assert_valid().unwrap();
}

#[test]
fn bst_print_matrix() {
    let tree: BinarySearchTree<i32> = [2, 1].into_iter().collect();
    assert_eq!(
        tree.print(""),
        "Node[0] { 2 }\n  L=Node[1] { 1 }\n    L=∅\n    R=∅\n  R=∅"
    );
}
