use alloc::{vec, vec::Vec};

use crate::core::{builder::NodeBuilder, node::Node};

/// What [`walk`] does after visiting a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VisitFlow {
    /// Descend into the node's children.
    Continue,
    /// Do not descend, but keep visiting siblings.
    SkipChildren,
    /// Abort the whole walk.
    Stop,
}

/// A read-only visitor over a node tree.
pub trait Visit<B: NodeBuilder> {
    /// Called once per node, parents before children, children left to right.
    /// `depth` is 0 for the root.
    fn visit_node(&mut self, node: &Node<B>, depth: usize) -> VisitFlow;
}

/// Walk `root` in pre-order, calling `visitor` on every node.
pub fn walk<B, V>(root: &Node<B>, visitor: &mut V)
where
    B: NodeBuilder,
    V: Visit<B> + ?Sized,
{
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        match visitor.visit_node(node, depth) {
            VisitFlow::Continue => {
                // Push children in reverse, so they pop in order
                stack.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
            }
            VisitFlow::SkipChildren => {}
            VisitFlow::Stop => return,
        }
    }
}

struct Stats {
    count: usize,
    max_depth: usize,
}

impl<B: NodeBuilder> Visit<B> for Stats {
    fn visit_node(&mut self, _node: &Node<B>, depth: usize) -> VisitFlow {
        self.count += 1;
        self.max_depth = self.max_depth.max(depth);
        VisitFlow::Continue
    }
}

impl<B: NodeBuilder> Node<B> {
    /// Total number of nodes in this tree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut stats = Stats { count: 0, max_depth: 0 };
        walk(self, &mut stats);
        stats.count
    }

    /// Length of the longest root-to-leaf path, counted in edges.
    pub fn depth(&self) -> usize {
        let mut stats = Stats { count: 0, max_depth: 0 };
        walk(self, &mut stats);
        stats.max_depth
    }

    /// First node of `kind` in pre-order, if any.
    pub fn find(&self, kind: crate::NodeKind) -> Option<&Node<B>> {
        let mut stack: Vec<&Node<B>> = vec![self];
        while let Some(node) = stack.pop() {
            if node.kind() == kind {
                return Some(node);
            }
            stack.extend(node.children().iter().rev());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoxBuilder, NodeKind};

    struct KindLog(Vec<(NodeKind, usize)>);

    impl Visit<BoxBuilder> for KindLog {
        fn visit_node(&mut self, node: &Node<BoxBuilder>, depth: usize) -> VisitFlow {
            self.0.push((node.kind(), depth));
            if node.kind() == NodeKind::Struct {
                VisitFlow::SkipChildren
            } else {
                VisitFlow::Continue
            }
        }
    }

    fn tuple_of_struct_and_id(b: &BoxBuilder) -> Node<BoxBuilder> {
        let module = Node::with_text(b, NodeKind::Module, "M");
        let name = Node::with_text(b, NodeKind::Identifier, "S");
        let strukt = Node::with_children(b, NodeKind::Struct, [module, name]);
        let other = Node::with_text(b, NodeKind::Identifier, "x");
        Node::with_children(b, NodeKind::NonVariadicTuple, [strukt, other])
    }

    #[test]
    fn test_preorder_with_skip() {
        let b = BoxBuilder::new();
        let tree = tuple_of_struct_and_id(&b);

        let mut log = KindLog(Vec::new());
        walk(&tree, &mut log);
        assert_eq!(
            log.0,
            vec![
                (NodeKind::NonVariadicTuple, 0),
                (NodeKind::Struct, 1),
                (NodeKind::Identifier, 1),
            ]
        );
    }

    #[test]
    fn test_count_and_depth() {
        let b = BoxBuilder::new();
        let tree = tuple_of_struct_and_id(&b);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_find() {
        let b = BoxBuilder::new();
        let tree = tuple_of_struct_and_id(&b);
        assert_eq!(tree.find(NodeKind::Module).and_then(|n| n.text()), Some("M"));
        assert!(tree.find(NodeKind::Protocol).is_none());
    }
}
