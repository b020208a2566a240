//! Tree Utilities
//!
//! Helper functions for rendering the activity tree.

use crate::models::ActivityNode;

/// Flatten the nested activity tree into (node, depth) pairs in display
/// order, children directly under their parent.
pub fn flatten_tree(nodes: &[ActivityNode]) -> Vec<(ActivityNode, usize)> {
    fn collect(nodes: &[ActivityNode], depth: usize, out: &mut Vec<(ActivityNode, usize)>) {
        for node in nodes {
            out.push((node.clone(), depth));
            collect(&node.children, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    collect(nodes, 0, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_node(id: u32, parent_id: Option<u32>, children: Vec<ActivityNode>) -> ActivityNode {
        ActivityNode {
            id,
            name: format!("活动 {}", id),
            description: None,
            parent_id,
            children,
        }
    }

    #[test]
    fn test_flatten_tree() {
        let nodes = vec![
            make_node(1, None, vec![
                make_node(3, Some(1), vec![
                    make_node(5, Some(3), vec![]),
                ]),
                make_node(4, Some(1), vec![]),
            ]),
            make_node(2, None, vec![]),
        ];

        let tree = flatten_tree(&nodes);

        // Should be: 1 (depth 0), 3 (depth 1), 5 (depth 2), 4 (depth 1), 2 (depth 0)
        assert_eq!(tree.len(), 5);
        assert_eq!(tree[0].0.id, 1); assert_eq!(tree[0].1, 0);
        assert_eq!(tree[1].0.id, 3); assert_eq!(tree[1].1, 1);
        assert_eq!(tree[2].0.id, 5); assert_eq!(tree[2].1, 2);
        assert_eq!(tree[3].0.id, 4); assert_eq!(tree[3].1, 1);
        assert_eq!(tree[4].0.id, 2); assert_eq!(tree[4].1, 0);
    }

    #[test]
    fn empty_tree_flattens_to_nothing() {
        assert!(flatten_tree(&[]).is_empty());
    }
}
