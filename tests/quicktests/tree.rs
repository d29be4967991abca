use ordered_tree::Tree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and to a sorted `Vec`.
/// This way we can ensure that after a random smattering of inserts
/// and removals we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, model: &mut Vec<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                let pos = model.partition_point(|y| y <= x);
                model.insert(pos, x.clone());
            }
            Op::Remove(x) => {
                let expected = model.binary_search(x).ok().map(|pos| model.remove(pos));
                assert_eq!(bst.remove(x), expected);
            }
        }
        assert_eq!(bst.validate(), Ok(()));
    }
}

fn sorted(xs: &[i8]) -> Vec<i8> {
    let mut xs = xs.to_vec();
    xs.sort();
    xs
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.dfs_in_order() == model.iter().collect::<Vec<_>>()
        && model.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    tree.dfs_in_order().into_iter().copied().collect::<Vec<_>>() == sorted(&xs)
}

#[quickcheck]
fn recursive_insert_builds_the_same_tree(xs: Vec<i8>) -> bool {
    let looped: Tree<i8> = xs.iter().copied().collect();
    let mut recursed = Tree::new();
    for x in &xs {
        recursed.insert_recursive(*x);
    }

    looped.dfs_pre_order() == recursed.dfs_pre_order()
        && looped.bfs() == recursed.bfs()
        && looped.validate() == recursed.validate()
        && recursed.validate().is_ok()
        && xs.iter().all(|x| recursed.find_recursive(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.find_recursive(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        // We may have inserted the same value multiple times - remove each one.
        while tree.remove(delete).is_some() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.validate().is_ok()
}

#[quickcheck]
fn removing_one_value_keeps_the_rest_in_order(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| {
        let mut tree = tree.clone();
        let mut expected = sorted(&xs);
        let pos = expected.binary_search(x).unwrap();
        expected.remove(pos);

        tree.remove(x) == Some(*x)
            && tree.dfs_in_order().into_iter().copied().collect::<Vec<_>>() == expected
    })
}

#[quickcheck]
fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let expected = sorted(&xs);
    let as_sorted = |walk: Vec<&i8>| {
        let mut walk: Vec<i8> = walk.into_iter().copied().collect();
        walk.sort();
        walk
    };

    as_sorted(tree.dfs_pre_order()) == expected
        && as_sorted(tree.dfs_post_order()) == expected
        && as_sorted(tree.bfs()) == expected
        && tree.bfs().first() == tree.root().map(|n| n.value()).as_ref()
        && tree.dfs_pre_order().first() == tree.dfs_post_order().last()
}

#[quickcheck]
fn second_highest_is_spine_predecessor(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    let Some(root) = tree.root() else {
        return tree.find_second_highest().is_none();
    };
    let mut max = root;
    while let Some(right) = max.right() {
        max = right;
    }

    let expected = max.parent().map(|n| n.value());
    if tree.find_second_highest() != expected {
        return false;
    }

    // Without a left subtree under the maximum the spine predecessor really is second highest.
    match (expected, max.left()) {
        (Some(second), None) => *second == sorted(&xs)[xs.len() - 2],
        _ => true,
    }
}

#[quickcheck]
fn sorted_inserts_degenerate(len: u8) -> bool {
    let tree: Tree<u8> = (0..len).collect();

    tree.is_balanced() == (len < 3) && tree.height() == len.checked_sub(1).map(usize::from)
}

#[test]
fn balanced_insertion_order() {
    let values = [5, 3, 8, 1, 4, 7, 9];
    let tree: Tree<i32> = values.into_iter().collect();

    assert_eq!(tree.dfs_in_order(), [&1, &3, &4, &5, &7, &8, &9]);
    assert_eq!(tree.bfs(), [&5, &3, &8, &1, &4, &7, &9]);
    assert!(tree.is_balanced());
    assert_eq!(tree.find_second_highest(), Some(&8));
}

#[test]
fn increasing_insertion_order() {
    let tree: Tree<i32> = [1, 2, 3, 4, 5].into_iter().collect();

    assert!(!tree.is_balanced());
    assert_eq!(tree.bfs(), [&1, &2, &3, &4, &5]);
}

#[test]
fn second_highest_follows_the_spine() {
    // 8's left child 7 is the true second highest, the spine predecessor is 5.
    let tree: Tree<i32> = [5, 3, 8, 1, 4, 7].into_iter().collect();
    assert_eq!(tree.find_second_highest(), Some(&5));

    let tree: Tree<i32> = [10, 20, 15].into_iter().collect();
    assert_eq!(tree.find_second_highest(), Some(&10));
}
