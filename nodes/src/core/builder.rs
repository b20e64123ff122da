use core::{fmt::Debug, hash::Hash, ops::Deref};

use super::node::{Node, NodeData};

pub trait NodeBuilder: Copy + Clone + Debug + Eq + Hash + Sized {
    /// Examples: `&'a NodeData<Self>`, `Rc<NodeData<Self>>`.
    type NodeHandle: AsRef<NodeData<Self>> + Clone + Debug;

    /// Examples: `string_cache::DefaultAtom`, `&'a str`, `Rc<str>`.
    type TextHandle: AsRef<str> + Clone + Debug + Eq + Hash;

    /// Children could be `Vec<T>` for Box, and `&'a [T]` for Arena.
    type ChildrenHandle: Deref<Target = [Node<Self>]> + Clone + Debug;

    /// Internal: Allocate a node.
    /// Call instead: `Node::new(builder, kind)` and friends.
    fn alloc(&self, data: NodeData<Self>) -> Self::NodeHandle;

    fn alloc_text(&self, text: impl AsRef<str>) -> Self::TextHandle;

    fn alloc_children(
        &self,
        iter: impl IntoIterator<Item = Node<Self>, IntoIter: ExactSizeIterator>,
    ) -> Self::ChildrenHandle;
}
