use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use simplelog::{Config, LevelFilter, TestLogger};
use sorted_forest::{Color, Error, IterableSortedCollection, RedBlackTree, SortedCollection};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn insert_checked<T: Ord + std::fmt::Debug + Clone>(tree: &mut RedBlackTree<T>, value: T) {
    tree.insert(value.clone());
    if let Err(err) = tree.assert_valid() {
        panic!("invalid red-black tree after insert({value:?}): {err}");
    }
}

fn height(tree: &RedBlackTree<i32>) -> usize {
    let mut max = 0;
    let mut pending: Vec<(u32, usize)> = tree.root_index().map(|r| (r, 1)).into_iter().collect();
    while let Some((i, depth)) = pending.pop() {
        max = max.max(depth);
        pending.extend(tree.left(i).map(|l| (l, depth + 1)));
        pending.extend(tree.right(i).map(|r| (r, depth + 1)));
    }
    max
}

#[test]
fn rb_letters_null_aunt_then_red_aunt_matrix() {
    init_logging();
    let mut tree = RedBlackTree::new();
    for s in ["C", "D", "F", "B", "G"] {
        insert_checked(&mut tree, s);
    }
    assert_eq!(tree.to_level_order_string(), "[ D(b), C(b), F(b), B(r), G(r) ]");
}

#[test]
fn rb_cascading_repairs_matrix() {
    init_logging();
    let mut tree = RedBlackTree::new();
    for v in [50, 30, 70, 20] {
        insert_checked(&mut tree, v);
    }
    // Red aunt recolor reaching the root, which is then blackened.
    assert_eq!(tree.to_level_order_string(), "[ 50(b), 30(b), 70(b), 20(r) ]");

    for v in [40, 60, 80, 10, 25, 5] {
        insert_checked(&mut tree, v);
    }
    assert_eq!(
        tree.to_level_order_string(),
        "[ 30(b), 20(r), 50(r), 10(b), 25(b), 40(b), 70(b), 5(r), 60(r), 80(r) ]"
    );
    assert_eq!(tree.black_height(), Some(2));
}

#[test]
fn rb_zig_zag_repair_matrix() {
    let mut tree = RedBlackTree::new();
    for v in [10, 5, 7] {
        insert_checked(&mut tree, v);
    }
    assert_eq!(tree.to_level_order_string(), "[ 7(b), 5(r), 10(r) ]");

    let mut tree = RedBlackTree::new();
    for v in [10, 15, 12] {
        insert_checked(&mut tree, v);
    }
    assert_eq!(tree.to_level_order_string(), "[ 12(b), 10(r), 15(r) ]");
}

#[test]
fn rb_root_color_and_links_matrix() {
    let mut tree = RedBlackTree::new();
    let a = tree.insert(1);
    assert_eq!(tree.color(a), Color::Black);
    let b = tree.insert(2);
    assert_eq!(tree.color(b), Color::Red);
    let c = tree.insert(3);

    assert_eq!(tree.root_index(), Some(b));
    assert!(tree.is_black(b));
    assert_eq!(tree.left(b), Some(a));
    assert_eq!(tree.right(b), Some(c));
    assert_eq!(tree.parent(a), Some(b));
    assert_eq!(tree.parent(c), Some(b));
    assert_eq!(tree.parent(b), None);
}

#[test]
fn rb_numbers_from_0_to_100_matrix() {
    let mut tree = RedBlackTree::new();
    for i in 0..=100 {
        insert_checked(&mut tree, i);
        assert_eq!(tree.size(), (i + 1) as usize);
    }
    let values: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(values, (0..=100).collect::<Vec<_>>());
}

#[test]
fn rb_numbers_from_100_to_11_matrix() {
    let mut tree = RedBlackTree::new();
    for i in (11..=100).rev() {
        insert_checked(&mut tree, i);
    }
    assert_eq!(tree.size(), 90);
    assert_eq!(tree.first(), Some(&11));
    assert_eq!(tree.last(), Some(&100));
}

#[test]
fn rb_numbers_both_directions_from_50_matrix() {
    let mut tree = RedBlackTree::new();
    for i in 0..=100 {
        insert_checked(&mut tree, 50 + i);
        insert_checked(&mut tree, 50 - i);
        assert_eq!(tree.size(), (i * 2 + 2) as usize);
    }
    assert!(tree.contains(&-50));
    assert!(tree.contains(&150));
    assert!(!tree.contains(&151));
}

#[test]
fn rb_duplicates_matrix() {
    let mut tree = RedBlackTree::new();
    for v in [7, 7, 7, 3, 7, 9, 7, 3] {
        insert_checked(&mut tree, v);
    }
    let values: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(values, vec![3, 3, 7, 7, 7, 7, 7, 9]);
    assert_eq!(tree.range(Some(&7), Some(&7)).count(), 5);
    assert!(tree.contains(&3));
}

#[test]
fn rb_try_insert_absent_value_matrix() {
    let mut tree = RedBlackTree::<String>::new();
    assert_eq!(tree.try_insert(None), Err(Error::AbsentValue));
    assert!(tree.is_empty());
    tree.try_insert(Some("x".to_string())).unwrap();
    assert_eq!(tree.size(), 1);
    tree.assert_valid().unwrap();
}

#[test]
fn rb_clear_keeps_bounds_matrix() {
    let mut tree: RedBlackTree<i32> = (1..=10).collect();
    tree.set_iterator_min(Some(4));
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.iterator().count(), 0);
    tree.extend(1..=6);
    assert_eq!(tree.iterator().copied().collect::<Vec<_>>(), vec![4, 5, 6]);
}

#[test]
fn rb_seeded_random_insert_matrix() {
    init_logging();
    let seeds = [0x5eed_c0de_u64, 1, 0xff, 0x00c0_ffee, 0x0123_4567_89ab_cdef];
    for seed in seeds {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut tree = RedBlackTree::new();
        let mut expected = Vec::new();
        for _ in 0..500 {
            let v: i32 = rng.gen_range(-200..200);
            tree.insert(v);
            expected.push(v);
        }
        if let Err(err) = tree.assert_valid() {
            panic!("invalid tree (seed={seed}): {err}");
        }
        expected.sort();
        let actual: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(actual, expected, "in-order mismatch (seed={seed})");

        let n = expected.len() as f64;
        let bound = (2.0 * (n + 1.0).log2()).floor() as usize;
        assert!(height(&tree) <= bound, "height above 2*log2(n+1) (seed={seed})");
    }
}

#[test]
fn rb_through_iterable_collection_trait_matrix() {
    fn window<C: IterableSortedCollection<i32>>(c: &mut C, lo: i32, hi: i32) -> Vec<i32> {
        c.set_iterator_min(Some(lo));
        c.set_iterator_max(Some(hi));
        c.iterator().copied().collect()
    }

    let mut tree = RedBlackTree::new();
    for v in [5, 1, 9, 3, 7] {
        SortedCollection::insert(&mut tree, v);
    }
    assert_eq!(window(&mut tree, 2, 8), vec![3, 5, 7]);
    assert_eq!(window(&mut tree, 9, 100), vec![9]);
}

#[test]
fn rb_print_matrix() {
    let tree: RedBlackTree<&str> = ["b", "a"].into_iter().collect();
    assert_eq!(
        tree.print(""),
        "Node[0] black { \"b\" }\n  L=Node[1] red { \"a\" }\n    L=∅\n    R=∅\n  R=∅"
    );
}
