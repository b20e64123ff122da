use crate::core::{Node, NodeBuilder, NodeData};
use bumpalo::Bump;
use core::cell::RefCell;
use core::{fmt, hash};
use hashbrown::{DefaultHashBuilder, HashSet};

/// An interned string reference with pointer-based equality.
///
/// Two `InternedStr` values are equal if and only if they point to the
/// same memory location. This is guaranteed when using `ArenaBuilder`
/// since identical strings are deduplicated during interning.
#[derive(Clone, Copy)]
pub struct InternedStr<'arena>(&'arena str);

impl<'arena> InternedStr<'arena> {
    /// Returns the string slice.
    pub fn as_str(&self) -> &'arena str {
        self.0
    }
}

impl<'arena> AsRef<str> for InternedStr<'arena> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl<'arena> fmt::Debug for InternedStr<'arena> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl<'arena> fmt::Display for InternedStr<'arena> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl<'arena> PartialEq for InternedStr<'arena> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.0.as_ptr(), other.0.as_ptr()) && self.0.len() == other.0.len()
    }
}

impl<'arena> Eq for InternedStr<'arena> {}

impl<'arena> hash::Hash for InternedStr<'arena> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.as_ptr().hash(state)
    }
}

type StringSet<'arena> = HashSet<&'arena str, DefaultHashBuilder, &'arena Bump>;

/// Node allocator backed by a `Bump` arena.
///
/// Nodes and child lists live in the arena and are freed all at once when
/// the arena is dropped. Text payloads (module names, identifiers, tuple
/// labels) are interned, so a name that recurs across a large tree is stored
/// once.
///
/// # Example
///
/// ```
/// use tyname_nodes::{ArenaBuilder, Node, NodeKind};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let b = ArenaBuilder::new(&arena);
///
/// let module = Node::with_text(&b, NodeKind::Module, "M");
/// let name = Node::with_text(&b, NodeKind::Identifier, "Foo");
/// let strukt = Node::with_children(&b, NodeKind::Struct, [module, name]);
/// let ty = Node::wrap(&b, NodeKind::Type, strukt);
///
/// assert_eq!(ty.unwrap_type().kind(), NodeKind::Struct);
/// ```
#[derive(Copy, Clone)]
pub struct ArenaBuilder<'arena> {
    arena: &'arena Bump,
    interned_strs: &'arena RefCell<StringSet<'arena>>,
}

impl<'arena> fmt::Debug for ArenaBuilder<'arena> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaBuilder")
            .field("arena", &(self.arena as *const Bump))
            .finish_non_exhaustive()
    }
}

// Bump has no PartialEq/Eq/Hash: two builders are equal if they share an arena.
impl<'arena> PartialEq for ArenaBuilder<'arena> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena)
    }
}

impl<'arena> Eq for ArenaBuilder<'arena> {}

impl<'arena> hash::Hash for ArenaBuilder<'arena> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.arena, state)
    }
}

impl<'arena> ArenaBuilder<'arena> {
    /// Create a new arena builder.
    pub fn new(arena: &'arena Bump) -> Self {
        let interned_strs = arena.alloc(RefCell::new(HashSet::with_capacity_in(64, arena)));
        Self {
            arena,
            interned_strs,
        }
    }

    pub fn arena(&self) -> &'arena Bump {
        self.arena
    }
}

impl<'arena> NodeBuilder for ArenaBuilder<'arena> {
    type NodeHandle = &'arena NodeData<Self>;
    type TextHandle = InternedStr<'arena>;
    type ChildrenHandle = &'arena [Node<Self>];

    fn alloc(&self, data: NodeData<Self>) -> Self::NodeHandle {
        self.arena.alloc(data)
    }

    fn alloc_text(&self, text: impl AsRef<str>) -> Self::TextHandle {
        let s = text.as_ref();
        let mut set = self.interned_strs.borrow_mut();
        if let Some(&interned) = set.get(s) {
            return InternedStr(interned);
        }
        let allocated = self.arena.alloc_str(s);
        set.insert(allocated);
        InternedStr(allocated)
    }

    fn alloc_children(
        &self,
        iter: impl IntoIterator<Item = Node<Self>, IntoIter: ExactSizeIterator>,
    ) -> Self::ChildrenHandle {
        self.arena.alloc_slice_fill_iter(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;

    #[test]
    fn test_interned_text_equality() {
        let arena = Bump::new();
        let builder = ArenaBuilder::new(&arena);

        let t1 = builder.alloc_text("Swift");
        let t2 = builder.alloc_text("Swift");
        let t3 = builder.alloc_text("Foundation");

        // Same string content -> same pointer -> equal
        assert_eq!(t1, t2);
        assert_ne!(t1, t3);
    }

    #[test]
    fn test_nodes_are_copy() {
        let arena = Bump::new();
        let b = ArenaBuilder::new(&arena);

        let id = Node::with_text(&b, NodeKind::Identifier, "Int");
        let copy = id;
        assert_eq!(id, copy);
        assert_eq!(copy.text(), Some("Int"));
    }

    #[test]
    fn test_builders_from_distinct_arenas_differ() {
        let a1 = Bump::new();
        let a2 = Bump::new();
        assert_ne!(ArenaBuilder::new(&a1), ArenaBuilder::new(&a2));
    }
}
