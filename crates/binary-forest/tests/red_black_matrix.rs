use binary_forest::red_black::{Color, RbTree};
use binary_forest::{BinaryTree, TraversalOrder, TreeError};

const BASIC: [i32; 11] = [23, 4, 30, 11, 7, 34, 20, 24, 22, 15, 1];

fn basic_tree() -> RbTree<i32, String> {
    let mut tree = RbTree::new();
    for k in BASIC {
        tree.insert(k, k.to_string()).unwrap();
    }
    tree
}

fn pairs(tree: &RbTree<i32, String>, order: TraversalOrder) -> Vec<(i32, String)> {
    tree.traverse(order)
        .unwrap()
        .map(|(k, v)| (*k, v.clone()))
        .collect()
}

fn keys(tree: &RbTree<i32, String>, order: TraversalOrder) -> Vec<i32> {
    pairs(tree, order).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn red_black_simple_matrix() {
    let mut tree = basic_tree();
    assert_eq!(tree.first(), Some((&1, &"1".to_string())));
    assert_eq!(tree.last(), Some((&34, &"34".to_string())));
    assert_eq!(tree.search(&24).unwrap(), "24");

    tree.delete(&15).unwrap();
    assert_eq!(tree.search(&15), Err(TreeError::KeyNotFound));
    tree.validate().unwrap();
}

#[test]
fn red_black_deletion_matrix() {
    let mut tree = basic_tree();

    // no child
    tree.delete(&15).unwrap();
    assert_eq!(keys(&tree, TraversalOrder::In), vec![1, 4, 7, 11, 20, 22, 23, 24, 30, 34]);
    tree.validate().unwrap();

    // one right child
    tree.delete(&7).unwrap();
    assert_eq!(keys(&tree, TraversalOrder::In), vec![1, 4, 11, 20, 22, 23, 24, 30, 34]);
    tree.validate().unwrap();

    // one left child
    tree.insert(9, "9".to_string()).unwrap();
    tree.delete(&11).unwrap();
    assert_eq!(keys(&tree, TraversalOrder::In), vec![1, 4, 9, 20, 22, 23, 24, 30, 34]);
    tree.validate().unwrap();

    // two children
    tree.delete(&23).unwrap();
    assert_eq!(
        pairs(&tree, TraversalOrder::In),
        [1, 4, 9, 20, 22, 24, 30, 34]
            .into_iter()
            .map(|k| (k, k.to_string()))
            .collect::<Vec<_>>()
    );
    tree.validate().unwrap();
}

#[test]
fn red_black_traversal_matrix() {
    let tree = basic_tree();
    assert_eq!(keys(&tree, TraversalOrder::In), vec![1, 4, 7, 11, 15, 20, 22, 23, 24, 30, 34]);
    assert_eq!(keys(&tree, TraversalOrder::Pre), vec![20, 7, 4, 1, 11, 15, 23, 22, 30, 24, 34]);
    assert_eq!(keys(&tree, TraversalOrder::Post), vec![1, 4, 15, 11, 7, 22, 24, 34, 30, 23, 20]);
    assert_eq!(keys(&tree, TraversalOrder::Level), vec![20, 7, 23, 4, 11, 22, 30, 1, 15, 24, 34]);
    assert_eq!(
        keys(&tree, TraversalOrder::ReverseIn),
        vec![34, 30, 24, 23, 22, 20, 15, 11, 7, 4, 1]
    );
}

#[test]
fn red_black_root_stays_black_matrix() {
    let mut tree = RbTree::new();
    for k in (0..200).rev() {
        tree.insert(k, ()).unwrap();
        let root = tree.root_index().unwrap();
        assert_eq!(tree.arena()[root as usize].color, Color::Black);
    }
    tree.validate().unwrap();
    // 200 keys: height is at most 2 * log2(201).
    assert!(tree.height().unwrap() <= 15);
    for k in 0..200 {
        tree.delete(&k).unwrap();
        tree.validate().unwrap();
    }
    assert!(tree.is_empty());
}

#[test]
fn red_black_traversal_restarts_matrix() {
    let tree = basic_tree();
    let mut walk = tree.traverse(TraversalOrder::In).unwrap();
    assert_eq!(walk.next().map(|(k, _)| *k), Some(1));
    assert_eq!(walk.next().map(|(k, _)| *k), Some(4));
    let again = tree.traverse(TraversalOrder::In).unwrap();
    assert_eq!(again.count(), 11);
    assert_eq!(walk.count(), 9);
}
