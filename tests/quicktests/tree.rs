use balanced_bst::{Order, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                tree.delete(k);
                set.remove(k);
            }
            Op::Iter => {
                if !tree.iter(Order::In).eq(set.iter()) {
                    return false;
                }
            }
        }

        if !tree.is_balanced() {
            return false;
        }
    }

    true
}

fn in_order<K: Clone>(tree: &Tree<K>) -> Vec<K> {
    let mut keys = Vec::new();
    tree.in_order(|k| keys.push(k.clone()));
    keys
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter(Order::In).eq(set.iter())
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i32>, deletes: Vec<i32>) -> bool {
    let mut tree = Tree::build(xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    in_order(&tree).windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied());
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs.iter().copied());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i16>, index: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree = Tree::build(xs.iter().copied());
    let before = in_order(&tree);

    !tree.insert(xs[index % xs.len()]) && in_order(&tree) == before
}

#[quickcheck]
fn absent_delete_is_idempotent(xs: Vec<i16>, absent: i16) -> bool {
    let mut tree = Tree::build(xs.into_iter().filter(|x| *x != absent));
    let before = tree.clone();

    tree.delete(&absent).is_none() && tree == before
}

#[quickcheck]
fn height_after_rebalance(xs: Vec<i32>, inserts: Vec<i32>) -> bool {
    let mut tree = Tree::build(xs);
    tree.extend(inserts);
    tree.rebalance();

    let n = tree.len();
    let min_height = (usize::BITS - n.leading_zeros()) as usize;
    tree.height() == min_height
}

#[quickcheck]
fn depth_matches_path_length(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);

    tree.iter(Order::Level).all(|k| {
        let node = tree.find(k).expect("every traversed key is in the tree");
        let depth = tree.depth(node).expect("every node has a depth");
        depth < tree.height()
    })
}

#[quickcheck]
fn every_order_visits_every_key(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);
    let expected = in_order(&tree);

    Order::ALL.iter().all(|order| {
        let mut keys: Vec<_> = tree.iter(*order).copied().collect();
        keys.sort_unstable();
        keys == expected
    })
}
