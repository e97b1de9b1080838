use ordered_tree::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(v) => bst.insert(v.clone()) == set.insert(v.clone()),
        Op::Delete(v) => bst.delete(v) == set.remove(v),
        Op::Search(v) => bst.search(v) == set.contains(v),
        Op::Iter => bst.iter().eq(set.iter()),
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.size() == set.len()
        && set.iter().all(|v| tree.search(v))
}

#[quickcheck]
fn fuzz_multiple_operations_string(ops: Vec<Op<String>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.inorder_traversal() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn inorder_is_sorted_and_distinct(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.inorder_traversal().windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn round_trip(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.inorder_traversal() == expected && tree.size() == expected.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(x);

    let size = tree.size();
    let height = tree.height();
    let values = tree.inorder_traversal();

    !tree.insert(x)
        && tree.size() == size
        && tree.height() == height
        && tree.inorder_traversal() == values
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        let size = tree.size();
        let was_present = tree.search(delete);

        if tree.delete(delete) != was_present {
            return false;
        }
        let expected_size = if was_present { size - 1 } else { size };
        if tree.search(delete) || tree.size() != expected_size {
            return false;
        }
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    xs.iter()
        .filter(|x| !deleted.contains(x))
        .all(|x| tree.search(x))
}

#[quickcheck]
fn emptied_tree_reports_errors(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for x in &xs {
        tree.delete(x);
    }

    tree.is_empty() && tree.height() == 0 && tree.find_min().is_err() && tree.find_max().is_err()
}
