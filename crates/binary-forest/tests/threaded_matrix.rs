use binary_forest::threaded::{DoubleThreadedTree, LeftThreadedTree, RightThreadedTree};
use binary_forest::{BinaryTree, TraversalOrder, TreeError};

const BASIC: [i32; 11] = [23, 4, 30, 11, 7, 34, 20, 24, 22, 15, 1];
const SORTED: [i32; 11] = [1, 4, 7, 11, 15, 20, 22, 23, 24, 30, 34];

fn load<T: BinaryTree<i32, String>>(tree: &mut T) {
    for k in BASIC {
        tree.insert(k, k.to_string()).unwrap();
    }
}

fn walk<T: BinaryTree<i32, String>>(tree: &T, order: TraversalOrder) -> Result<Vec<i32>, TreeError> {
    Ok(tree.traverse(order)?.map(|(k, _)| *k).collect())
}

#[test]
fn right_threaded_matrix() {
    let mut tree = RightThreadedTree::new();
    load(&mut tree);
    tree.validate().unwrap();
    assert_eq!(walk(&tree, TraversalOrder::In).unwrap(), SORTED.to_vec());
    assert_eq!(
        walk(&tree, TraversalOrder::Pre).unwrap(),
        vec![23, 4, 1, 11, 7, 20, 15, 22, 30, 24, 34]
    );
    for order in [TraversalOrder::Post, TraversalOrder::Level, TraversalOrder::ReverseIn] {
        assert_eq!(walk(&tree, order), Err(TreeError::UnsupportedTraversal(order)));
    }
    assert_eq!(tree.height(), Some(4));
    assert_eq!(tree.search(&24).unwrap(), "24");
}

#[test]
fn left_threaded_matrix() {
    let mut tree = LeftThreadedTree::new();
    load(&mut tree);
    tree.validate().unwrap();
    let mut descending = SORTED.to_vec();
    descending.reverse();
    assert_eq!(walk(&tree, TraversalOrder::ReverseIn).unwrap(), descending);
    for order in [TraversalOrder::Pre, TraversalOrder::In, TraversalOrder::Post, TraversalOrder::Level] {
        assert_eq!(walk(&tree, order), Err(TreeError::UnsupportedTraversal(order)));
    }
}

#[test]
fn double_threaded_deletion_matrix() {
    let mut tree = DoubleThreadedTree::new();
    load(&mut tree);

    // no child
    tree.delete(&15).unwrap();
    tree.validate().unwrap();
    assert_eq!(walk(&tree, TraversalOrder::In).unwrap(), vec![1, 4, 7, 11, 20, 22, 23, 24, 30, 34]);
    // one right child
    tree.delete(&20).unwrap();
    tree.validate().unwrap();
    assert_eq!(walk(&tree, TraversalOrder::In).unwrap(), vec![1, 4, 7, 11, 22, 23, 24, 30, 34]);
    // one left child
    tree.insert(17, "17".to_string()).unwrap();
    tree.delete(&22).unwrap();
    tree.validate().unwrap();
    assert_eq!(walk(&tree, TraversalOrder::In).unwrap(), vec![1, 4, 7, 11, 17, 23, 24, 30, 34]);
    // two children
    tree.delete(&11).unwrap();
    tree.validate().unwrap();
    assert_eq!(walk(&tree, TraversalOrder::In).unwrap(), vec![1, 4, 7, 17, 23, 24, 30, 34]);
    assert_eq!(
        walk(&tree, TraversalOrder::ReverseIn).unwrap(),
        vec![34, 30, 24, 23, 17, 7, 4, 1]
    );
    assert_eq!(walk(&tree, TraversalOrder::Pre).unwrap(), vec![23, 4, 1, 17, 7, 30, 24, 34]);
}

#[test]
fn threaded_round_trip_matrix() {
    let mut right = RightThreadedTree::new();
    let mut left = LeftThreadedTree::new();
    let mut double = DoubleThreadedTree::new();
    load(&mut right);
    load(&mut left);
    load(&mut double);
    // Delete in an order that exercises root removal and arena compaction.
    for k in [23, 1, 34, 11, 4, 30, 7, 24, 20, 22, 15] {
        assert_eq!(right.delete(&k).unwrap(), k.to_string());
        assert_eq!(left.delete(&k).unwrap(), k.to_string());
        assert_eq!(double.delete(&k).unwrap(), k.to_string());
        right.validate().unwrap();
        left.validate().unwrap();
        double.validate().unwrap();
    }
    assert!(right.is_empty() && left.is_empty() && double.is_empty());
    assert_eq!(walk(&right, TraversalOrder::In).unwrap(), Vec::<i32>::new());
    assert_eq!(double.delete(&23), Err(TreeError::KeyNotFound));
}

#[test]
fn threaded_neighbours_matrix() {
    let mut tree = DoubleThreadedTree::new();
    load(&mut tree);
    assert_eq!(tree.first().map(|(k, _)| *k), Some(1));
    assert_eq!(tree.last().map(|(k, _)| *k), Some(34));
    assert_eq!(tree.successor(&20).map(|(k, _)| *k), Some(22));
    assert_eq!(tree.predecessor(&20).map(|(k, _)| *k), Some(15));
    tree.search_mut(&20).unwrap().push_str("!");
    assert_eq!(tree.search(&20).unwrap(), "20!");
}
