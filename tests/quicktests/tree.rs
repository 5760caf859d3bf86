use unbalanced_bst::{BinarySearchTree, Error};

use quickcheck::quickcheck;
use std::collections::{BTreeSet, HashSet};

/// Builds a tree from `root` and every value in `xs`, skipping duplicates.
fn build(root: i8, xs: &[i8]) -> BinarySearchTree {
    let mut tree = BinarySearchTree::new(i64::from(root));
    for x in xs {
        match tree.insert(i64::from(*x)) {
            Ok(()) | Err(Error::Duplicate(_)) => {}
            Err(e) => panic!("Unexpected insert error: {}", e),
        }
    }
    tree
}

quickcheck! {
    fn contains(root: i8, xs: Vec<i8>) -> bool {
        let tree = build(root, &xs);

        xs.iter().all(|x| tree.contains(i64::from(*x)))
    }
}

quickcheck! {
    fn contains_not(root: i8, xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(root, &xs);
        let added: HashSet<_> = xs.into_iter().chain(Some(root)).collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| {
            let x = i64::from(*x);
            tree.search(x).is_err() && tree.node_height(x) == Err(Error::NotFound(x))
        })
    }
}

quickcheck! {
    fn duplicates_rejected(root: i8, xs: Vec<i8>) -> bool {
        let mut tree = build(root, &xs);
        let before = tree.to_string();

        xs.iter().all(|x| tree.insert(i64::from(*x)) == Err(Error::Duplicate(i64::from(*x))))
            && tree.to_string() == before
    }
}

quickcheck! {
    fn counts_unique_values(root: i8, xs: Vec<i8>) -> bool {
        let tree = build(root, &xs);
        let unique: BTreeSet<_> = xs.into_iter().chain(Some(root)).collect();

        tree.len() == unique.len()
    }
}

quickcheck! {
    fn subtree_shares_storage(root: i8, xs: Vec<i8>, extra: i8) -> bool {
        let tree = build(root, &xs);
        let subtree_root = i64::from(xs.first().copied().unwrap_or(root));
        let mut subtree = tree.search(subtree_root).unwrap();
        let extra = i64::from(extra);

        match subtree.insert(extra) {
            Ok(()) => tree.level_order().any(|v| v == extra),
            Err(e) => e == Error::Duplicate(extra),
        }
    }
}
