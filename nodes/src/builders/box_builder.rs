use crate::core::{Node, NodeBuilder, NodeData};
use alloc::rc::Rc;
use alloc::vec::Vec;
use string_cache::DefaultAtom;

/// Node allocator using reference counting.
///
/// Each node is an `Rc` and owns its children, so a tree can be handed to a
/// consumer that outlives any arena, and subtrees produced by a decoder can
/// be spliced into a new parent without copying. Text payloads are
/// `string_cache` atoms.
///
/// # Example
///
/// ```
/// use tyname_nodes::{BoxBuilder, Node, NodeKind};
///
/// let b = BoxBuilder::new();
/// let module = Node::with_text(&b, NodeKind::Module, "__ObjC");
/// let name = Node::with_text(&b, NodeKind::Identifier, "NSObject");
/// let class = Node::with_children(&b, NodeKind::Class, [module, name]);
///
/// assert_eq!(class.child(1).and_then(|n| n.text()), Some("NSObject"));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoxBuilder;

impl BoxBuilder {
    /// Create a new box builder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BoxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeBuilder for BoxBuilder {
    type NodeHandle = Rc<NodeData<Self>>;
    type TextHandle = DefaultAtom;
    type ChildrenHandle = Vec<Node<Self>>;

    fn alloc(&self, data: NodeData<Self>) -> Self::NodeHandle {
        Rc::new(data)
    }

    fn alloc_text(&self, text: impl AsRef<str>) -> Self::TextHandle {
        DefaultAtom::from(text.as_ref())
    }

    fn alloc_children(
        &self,
        iter: impl IntoIterator<Item = Node<Self>, IntoIter: ExactSizeIterator>,
    ) -> Self::ChildrenHandle {
        iter.into_iter().collect()
    }
}
