use std::collections::HashSet;

use pivot_tree::util::{first, next, swap_nodes};
use pivot_tree::TreeNode;

fn node_of(arena: &[TreeNode<i64>], value: i64) -> u32 {
    arena
        .iter()
        .position(|n| n.value == value)
        .map(|i| i as u32)
        .unwrap_or_else(|| panic!("no node holds {value}"))
}

fn inorder_values(arena: &[TreeNode<i64>], root: Option<u32>) -> Vec<i64> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        out.push(arena[i as usize].value);
        curr = next(arena, i);
    }
    out
}

fn assert_tree_links(arena: &[TreeNode<i64>], root: Option<u32>) {
    fn walk(
        arena: &[TreeNode<i64>],
        idx: u32,
        expected_parent: Option<u32>,
        visited: &mut HashSet<u32>,
    ) {
        assert!(visited.insert(idx), "cycle detected at node {idx}");
        let node = &arena[idx as usize];

        assert_eq!(node.parent, expected_parent);
        if let Some(l) = node.left {
            walk(arena, l, Some(idx), visited);
        }
        if let Some(r) = node.right {
            walk(arena, r, Some(idx), visited);
        }
    }

    let mut visited = HashSet::<u32>::new();
    if let Some(root) = root {
        walk(arena, root, None, &mut visited);
    }
}

fn fixture_tree() -> (Vec<TreeNode<i64>>, Option<u32>) {
    //        5
    //      /   \
    //     4     11
    //    /      /
    //   2      7
    //    \    / \
    //     3  6   9
    //             \
    //              10
    let mut arena = vec![
        TreeNode::new(5),
        TreeNode::new(11),
        TreeNode::new(7),
        TreeNode::new(4),
        TreeNode::new(6),
        TreeNode::new(9),
        TreeNode::new(2),
        TreeNode::new(3),
        TreeNode::new(10),
    ];

    arena[0].left = Some(3);
    arena[0].right = Some(1);

    arena[1].parent = Some(0);
    arena[1].left = Some(2);

    arena[2].parent = Some(1);
    arena[2].left = Some(4);
    arena[2].right = Some(5);

    arena[3].parent = Some(0);
    arena[3].left = Some(6);

    arena[4].parent = Some(2);

    arena[5].parent = Some(2);
    arena[5].right = Some(8);

    arena[6].parent = Some(3);
    arena[6].right = Some(7);

    arena[7].parent = Some(6);

    arena[8].parent = Some(5);

    (arena, Some(0))
}

#[test]
fn swap_adjacent_right_child_matrix() {
    let (mut arena, mut root) = fixture_tree();
    let n6 = node_of(&arena, 6);
    let n7 = node_of(&arena, 7);
    let n9 = node_of(&arena, 9);
    let n10 = node_of(&arena, 10);
    let n11 = node_of(&arena, 11);

    root = swap_nodes(&mut arena, root, n7, n9);
    assert_eq!(arena[n7 as usize].parent, Some(n9));
    assert_eq!(arena[n9 as usize].parent, Some(n11));
    assert_eq!(arena[n9 as usize].right, Some(n7));
    assert_eq!(arena[n9 as usize].left, Some(n6));
    assert_eq!(arena[n7 as usize].left, None);
    assert_eq!(arena[n7 as usize].right, Some(n10));
    assert_eq!(arena[n10 as usize].parent, Some(n7));
    assert_eq!(arena[n6 as usize].parent, Some(n9));
    assert_tree_links(&arena, root);

    // Swapping with the root from the position just taken over.
    let n5 = node_of(&arena, 5);
    root = swap_nodes(&mut arena, root, n11, n5);
    assert_eq!(root, Some(n11));
    assert_eq!(arena[n11 as usize].parent, None);
    assert_eq!(arena[n5 as usize].parent, Some(n11));
    assert_eq!(arena[n11 as usize].right, Some(n5));
    assert_eq!(arena[n5 as usize].left, Some(n9));
    assert_tree_links(&arena, root);
}

#[test]
fn swap_adjacent_left_child_matrix() {
    let (mut arena, mut root) = fixture_tree();
    let n2 = node_of(&arena, 2);
    let n4 = node_of(&arena, 4);
    let n5 = node_of(&arena, 5);
    let n11 = node_of(&arena, 11);

    // 4 is the left child of the root; its subtrees on both sides must
    // survive the exchange.
    root = swap_nodes(&mut arena, root, n5, n4);
    assert_eq!(root, Some(n4));
    assert_eq!(arena[n4 as usize].parent, None);
    assert_eq!(arena[n4 as usize].left, Some(n5));
    assert_eq!(arena[n4 as usize].right, Some(n11));
    assert_eq!(arena[n5 as usize].parent, Some(n4));
    assert_eq!(arena[n5 as usize].left, Some(n2));
    assert_eq!(arena[n5 as usize].right, None);
    assert_eq!(arena[n2 as usize].parent, Some(n5));
    assert_eq!(arena[n11 as usize].parent, Some(n4));
    assert_tree_links(&arena, root);
}

#[test]
fn swap_disjoint_matrix() {
    let (mut arena, mut root) = fixture_tree();
    let n2 = node_of(&arena, 2);
    let n4 = node_of(&arena, 4);
    let n5 = node_of(&arena, 5);
    let n6 = node_of(&arena, 6);
    let n7 = node_of(&arena, 7);
    let n9 = node_of(&arena, 9);
    let n11 = node_of(&arena, 11);

    root = swap_nodes(&mut arena, root, n4, n7);
    assert_eq!(root, Some(n5));
    assert_eq!(arena[n5 as usize].left, Some(n7));
    assert_eq!(arena[n7 as usize].parent, Some(n5));
    assert_eq!(arena[n7 as usize].left, Some(n2));
    assert_eq!(arena[n7 as usize].right, None);
    assert_eq!(arena[n2 as usize].parent, Some(n7));
    assert_eq!(arena[n11 as usize].left, Some(n4));
    assert_eq!(arena[n4 as usize].parent, Some(n11));
    assert_eq!(arena[n4 as usize].left, Some(n6));
    assert_eq!(arena[n4 as usize].right, Some(n9));
    assert_eq!(arena[n6 as usize].parent, Some(n4));
    assert_eq!(arena[n9 as usize].parent, Some(n4));
    assert_tree_links(&arena, root);
}

#[test]
fn swap_siblings_matrix() {
    let (mut arena, mut root) = fixture_tree();
    let n2 = node_of(&arena, 2);
    let n4 = node_of(&arena, 4);
    let n5 = node_of(&arena, 5);
    let n7 = node_of(&arena, 7);
    let n11 = node_of(&arena, 11);

    // Both under the same parent; the two slot writes must not collide.
    root = swap_nodes(&mut arena, root, n4, n11);
    assert_eq!(root, Some(n5));
    assert_eq!(arena[n5 as usize].left, Some(n11));
    assert_eq!(arena[n5 as usize].right, Some(n4));
    assert_eq!(arena[n11 as usize].parent, Some(n5));
    assert_eq!(arena[n4 as usize].parent, Some(n5));
    assert_eq!(arena[n11 as usize].left, Some(n2));
    assert_eq!(arena[n2 as usize].parent, Some(n11));
    assert_eq!(arena[n4 as usize].left, Some(n7));
    assert_eq!(arena[n7 as usize].parent, Some(n4));
    assert_tree_links(&arena, root);
}

#[test]
fn swap_root_with_leaf_matrix() {
    let (mut arena, mut root) = fixture_tree();
    let n2 = node_of(&arena, 2);
    let n3 = node_of(&arena, 3);
    let n4 = node_of(&arena, 4);
    let n5 = node_of(&arena, 5);
    let n11 = node_of(&arena, 11);

    root = swap_nodes(&mut arena, root, n5, n3);
    assert_eq!(root, Some(n3));
    assert_eq!(arena[n3 as usize].parent, None);
    assert_eq!(arena[n3 as usize].left, Some(n4));
    assert_eq!(arena[n3 as usize].right, Some(n11));
    assert_eq!(arena[n4 as usize].parent, Some(n3));
    assert_eq!(arena[n11 as usize].parent, Some(n3));
    assert_eq!(arena[n2 as usize].right, Some(n5));
    assert_eq!(arena[n5 as usize].parent, Some(n2));
    assert_eq!(arena[n5 as usize].left, None);
    assert_eq!(arena[n5 as usize].right, None);
    assert_tree_links(&arena, root);
}

#[test]
fn swap_root_with_grandchild_matrix() {
    let (mut arena, mut root) = fixture_tree();
    let n4 = node_of(&arena, 4);
    let n5 = node_of(&arena, 5);
    let n6 = node_of(&arena, 6);
    let n7 = node_of(&arena, 7);
    let n9 = node_of(&arena, 9);
    let n11 = node_of(&arena, 11);

    // Disjoint pair where one side is the root: no parent slot to rewrite
    // on that side, only the root handoff.
    root = swap_nodes(&mut arena, root, n5, n7);
    assert_eq!(root, Some(n7));
    assert_eq!(arena[n7 as usize].parent, None);
    assert_eq!(arena[n7 as usize].left, Some(n4));
    assert_eq!(arena[n7 as usize].right, Some(n11));
    assert_eq!(arena[n4 as usize].parent, Some(n7));
    assert_eq!(arena[n11 as usize].parent, Some(n7));
    assert_eq!(arena[n11 as usize].left, Some(n5));
    assert_eq!(arena[n5 as usize].parent, Some(n11));
    assert_eq!(arena[n5 as usize].left, Some(n6));
    assert_eq!(arena[n5 as usize].right, Some(n9));
    assert_eq!(arena[n6 as usize].parent, Some(n5));
    assert_eq!(arena[n9 as usize].parent, Some(n5));
    assert_tree_links(&arena, root);
}

#[test]
fn swap_same_node_matrix() {
    let (mut arena, root) = fixture_tree();
    let n7 = node_of(&arena, 7);

    let before = inorder_values(&arena, root);
    let new_root = swap_nodes(&mut arena, root, n7, n7);
    assert_eq!(new_root, root);
    assert_eq!(inorder_values(&arena, new_root), before);
    assert_tree_links(&arena, new_root);
}
