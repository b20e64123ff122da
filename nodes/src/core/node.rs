use core::fmt;

use super::builder::NodeBuilder;
use super::kind::NodeKind;

/// Lightweight handle to a node allocated by a [`NodeBuilder`].
///
/// Equality is structural for every builder: two nodes are equal when their
/// kinds, text payloads and children are equal, so trees built by separate
/// invocations compare equal regardless of where they were allocated.
#[derive(Clone, Debug)]
pub struct Node<B: NodeBuilder>(B::NodeHandle);

// Implement Copy when NodeHandle is Copy (e.g., for ArenaBuilder)
impl<B: NodeBuilder> Copy for Node<B> where B::NodeHandle: Copy {}

impl<B: NodeBuilder> Node<B> {
    /// Create a leaf node with neither text nor children.
    pub fn new(builder: &B, kind: NodeKind) -> Self {
        Self::from_data(builder, NodeData::new(builder, kind, None, core::iter::empty()))
    }

    /// Create a leaf node carrying a text payload.
    pub fn with_text(builder: &B, kind: NodeKind, text: impl AsRef<str>) -> Self {
        debug_assert!(kind.has_text(), "{kind} nodes carry no text");
        let text = builder.alloc_text(text);
        Self::from_data(builder, NodeData::new(builder, kind, Some(text), core::iter::empty()))
    }

    /// Create an interior node owning `children`, in order.
    pub fn with_children(
        builder: &B,
        kind: NodeKind,
        children: impl IntoIterator<Item = Node<B>, IntoIter: ExactSizeIterator>,
    ) -> Self {
        let data = NodeData::new(builder, kind, None, children);
        debug_assert!(
            kind != NodeKind::Type || data.children.len() == 1,
            "Type nodes wrap exactly one child, got {}",
            data.children.len()
        );
        Self::from_data(builder, data)
    }

    /// Shorthand for `Node::with_children(builder, kind, [child])`.
    pub fn wrap(builder: &B, kind: NodeKind, child: Node<B>) -> Self {
        Self::with_children(builder, kind, [child])
    }

    fn from_data(builder: &B, data: NodeData<B>) -> Self {
        Self(builder.alloc(data))
    }

    pub fn handle(&self) -> &B::NodeHandle {
        &self.0
    }

    pub fn data(&self) -> &NodeData<B> {
        self.0.as_ref()
    }

    pub fn kind(&self) -> NodeKind {
        self.data().kind
    }

    pub fn text(&self) -> Option<&str> {
        self.data().text.as_ref().map(AsRef::as_ref)
    }

    pub fn children(&self) -> &[Node<B>] {
        &self.data().children
    }

    pub fn num_children(&self) -> usize {
        self.children().len()
    }

    pub fn child(&self, index: usize) -> Option<&Node<B>> {
        self.children().get(index)
    }

    pub fn first_child(&self) -> Option<&Node<B>> {
        self.child(0)
    }

    /// Returns the wrapped node if this is a `Type` node, or `self` otherwise.
    pub fn unwrap_type(&self) -> &Node<B> {
        match (self.kind(), self.first_child()) {
            (NodeKind::Type, Some(inner)) => inner,
            _ => self,
        }
    }
}

impl<B: NodeBuilder> PartialEq for Node<B> {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
            && self.text() == other.text()
            && self.children() == other.children()
    }
}

impl<B: NodeBuilder> Eq for Node<B> {}

/// Storage of a single node: its tag, optional text, and ordered children.
pub struct NodeData<B: NodeBuilder> {
    kind: NodeKind,
    text: Option<B::TextHandle>,
    children: B::ChildrenHandle,
}

impl<B: NodeBuilder> NodeData<B> {
    fn new(
        builder: &B,
        kind: NodeKind,
        text: Option<B::TextHandle>,
        children: impl IntoIterator<Item = Node<B>, IntoIter: ExactSizeIterator>,
    ) -> Self {
        Self {
            kind,
            text,
            children: builder.alloc_children(children),
        }
    }
}

impl<B: NodeBuilder> AsRef<NodeData<B>> for NodeData<B> {
    fn as_ref(&self) -> &NodeData<B> {
        self
    }
}

impl<B: NodeBuilder> fmt::Debug for NodeData<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("NodeData");
        s.field("kind", &self.kind);
        if let Some(text) = &self.text {
            s.field("text", &text.as_ref());
        }
        s.field("children", &&*self.children).finish()
    }
}
