use smallvec::SmallVec;
use tyname_nodes::{Node, NodeBuilder, NodeKind};

use super::TreeBuilder;
use crate::bridge::OBJC_MODULE;
use crate::decoder::NameDecoder;
use crate::descriptor::{DescriptorStore, ExistentialMetadata, ProtocolDescriptor};
use crate::error::BuildError;

/// Wrappers around the protocol entry of a decoded protocol symbol, outermost
/// first. The entry is the first child of the last one.
const PROTOCOL_SYMBOL_PATH: [NodeKind; 5] = [
    NodeKind::Global,
    NodeKind::TypeMangling,
    NodeKind::Type,
    NodeKind::ProtocolList,
    NodeKind::TypeList,
];

impl<'a, B, S, D> TreeBuilder<'a, B, S, D>
where
    B: NodeBuilder,
    S: DescriptorStore + ?Sized,
    D: NameDecoder<B> + ?Sized,
{
    /// Name a protocol composition.
    ///
    /// Protocols are listed in byte-wise order of their names. The order in
    /// the descriptor follows registration and changes between runs.
    pub(super) fn build_existential(
        &self,
        existential: &ExistentialMetadata,
    ) -> Result<Node<B>, BuildError> {
        let mut protocols: SmallVec<[&ProtocolDescriptor; 4]> = existential
            .protocols
            .iter()
            .map(|&id| self.store.protocol(id).ok_or(BuildError::UnknownProtocol(id)))
            .collect::<Result<_, _>>()?;
        protocols.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

        let entries: SmallVec<[Node<B>; 4]> = protocols
            .iter()
            .map(|protocol| self.protocol_entry(protocol))
            .collect();

        let b = &self.builder;
        let type_list = Node::with_children(b, NodeKind::TypeList, entries);
        Ok(Node::wrap(b, NodeKind::ProtocolList, type_list))
    }

    /// `Type(Protocol(..))` for one protocol of a composition.
    fn protocol_entry(&self, protocol: &ProtocolDescriptor) -> Node<B> {
        let b = &self.builder;

        let Some(symbol) = self.decoder.decode_symbol(b, &protocol.name) else {
            // Foreign protocol names are not mangled.
            let module = Node::with_text(b, NodeKind::Module, OBJC_MODULE);
            let ident = Node::with_text(b, NodeKind::Identifier, &protocol.name);
            let node = Node::with_children(b, NodeKind::Protocol, [module, ident]);
            return Node::wrap(b, NodeKind::Type, node);
        };

        let mut entry = &symbol;
        for expected in PROTOCOL_SYMBOL_PATH {
            assert_eq!(
                entry.kind(),
                expected,
                "protocol symbol {:?} has an unexpected shape",
                protocol.name
            );
            let Some(child) = entry.first_child() else {
                panic!("protocol symbol {:?} ends at {}", protocol.name, expected);
            };
            entry = child;
        }
        assert!(
            entry.kind() == NodeKind::Type
                && entry.first_child().map(Node::kind) == Some(NodeKind::Protocol),
            "protocol symbol {:?} does not name a protocol",
            protocol.name
        );
        entry.clone()
    }
}
