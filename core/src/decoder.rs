//! The mangled-name decoder collaborator.
//!
//! Parsing the compact mangled grammar is the job of an external decoder.
//! The tree builder only asks it for two things: the tree of a nominal
//! type's mangled name, and the tree of a protocol's mangled symbol.

use hashbrown::HashMap;
use tyname_nodes::{Node, NodeBuilder, NodeKind};

use crate::String;

/// Decodes mangled names into node trees allocated by `B`.
pub trait NameDecoder<B: NodeBuilder> {
    /// Decode a mangled type name. Nominal names decode to
    /// `Type(Class|Struct|Enum(Module, Identifier))`.
    fn decode_type_name(&self, builder: &B, name: &str) -> Option<Node<B>>;

    /// Decode a full mangled symbol, rooted at a `Global` node.
    fn decode_symbol(&self, builder: &B, symbol: &str) -> Option<Node<B>>;
}

impl<B: NodeBuilder, D: NameDecoder<B> + ?Sized> NameDecoder<B> for &D {
    fn decode_type_name(&self, builder: &B, name: &str) -> Option<Node<B>> {
        (**self).decode_type_name(builder, name)
    }

    fn decode_symbol(&self, builder: &B, symbol: &str) -> Option<Node<B>> {
        (**self).decode_symbol(builder, symbol)
    }
}

/// A decoder backed by tables of already-decoded names.
///
/// Suits hosts that receive names together with their trees (for example
/// from a reflection section decoded ahead of time) and tests.
#[derive(Clone, Debug)]
pub struct TableDecoder<B: NodeBuilder> {
    type_names: HashMap<String, Node<B>>,
    symbols: HashMap<String, Node<B>>,
}

impl<B: NodeBuilder> Default for TableDecoder<B> {
    fn default() -> Self {
        Self {
            type_names: HashMap::new(),
            symbols: HashMap::new(),
        }
    }
}

impl<B: NodeBuilder> TableDecoder<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_type_name(&mut self, name: impl Into<String>, tree: Node<B>) {
        self.type_names.insert(name.into(), tree);
    }

    pub fn insert_symbol(&mut self, symbol: impl Into<String>, tree: Node<B>) {
        self.symbols.insert(symbol.into(), tree);
    }

    /// Register the mangled name of a nominal type declared at module scope:
    /// `Type(kind(Module(module), Identifier(name)))`.
    pub fn insert_nominal(
        &mut self,
        builder: &B,
        mangled: impl Into<String>,
        kind: NodeKind,
        module: &str,
        name: &str,
    ) {
        debug_assert!(kind.is_nominal(), "{kind} is not a nominal kind");
        let module = Node::with_text(builder, NodeKind::Module, module);
        let ident = Node::with_text(builder, NodeKind::Identifier, name);
        let nominal = Node::with_children(builder, kind, [module, ident]);
        self.insert_type_name(mangled, Node::wrap(builder, NodeKind::Type, nominal));
    }

    /// Register the mangled symbol of a protocol, in the shape a protocol
    /// type symbol decodes to:
    /// `Global(TypeMangling(Type(ProtocolList(TypeList(Type(Protocol(..)))))))`.
    pub fn insert_protocol(
        &mut self,
        builder: &B,
        symbol: impl Into<String>,
        module: &str,
        name: &str,
    ) {
        let module = Node::with_text(builder, NodeKind::Module, module);
        let ident = Node::with_text(builder, NodeKind::Identifier, name);
        let protocol = Node::with_children(builder, NodeKind::Protocol, [module, ident]);
        let tree = [
            NodeKind::Type,
            NodeKind::TypeList,
            NodeKind::ProtocolList,
            NodeKind::Type,
            NodeKind::TypeMangling,
            NodeKind::Global,
        ]
        .into_iter()
        .fold(protocol, |inner, kind| Node::wrap(builder, kind, inner));
        self.insert_symbol(symbol, tree);
    }
}

impl<B: NodeBuilder> NameDecoder<B> for TableDecoder<B> {
    fn decode_type_name(&self, _builder: &B, name: &str) -> Option<Node<B>> {
        self.type_names.get(name).cloned()
    }

    fn decode_symbol(&self, _builder: &B, symbol: &str) -> Option<Node<B>> {
        self.symbols.get(symbol).cloned()
    }
}
