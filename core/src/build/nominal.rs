use smallvec::SmallVec;
use tyname_nodes::{Node, NodeBuilder, NodeKind};

use super::TreeBuilder;
use crate::decoder::NameDecoder;
use crate::descriptor::{Descriptor, DescriptorId, DescriptorStore};
use crate::error::BuildError;

impl<'a, B, S, D> TreeBuilder<'a, B, S, D>
where
    B: NodeBuilder,
    S: DescriptorStore + ?Sized,
    D: NameDecoder<B> + ?Sized,
{
    /// Name a class, struct, enum or optional.
    ///
    /// The declaration's mangled name gives `Type(kind(Module, Identifier))`.
    /// A nested type replaces `Module` with its parent's tree; a generic type
    /// is bound to the trees of its arguments.
    pub(super) fn build_nominal(
        &self,
        id: DescriptorId,
        descriptor: &Descriptor,
        depth: usize,
    ) -> Result<Node<B>, BuildError> {
        let (nominal, bound_kind) = match descriptor {
            Descriptor::Class(nominal) => (nominal, NodeKind::BoundGenericClass),
            Descriptor::Struct(nominal) => (nominal, NodeKind::BoundGenericStructure),
            Descriptor::Enum(nominal) | Descriptor::Optional(nominal) => {
                (nominal, NodeKind::BoundGenericEnum)
            }
            other => unreachable!("{} descriptor routed to the nominal builder", other.kind()),
        };
        let b = &self.builder;

        let mut node = self.decode_type_name(nominal.name())?;
        assert_eq!(
            node.kind(),
            NodeKind::Type,
            "nominal name {:?} must decode to a Type node",
            nominal.name()
        );

        if let Some(parent) = nominal.parent {
            let parent_node = self.build_at(parent, depth + 1)?;
            let context = parent_node.unwrap_type().clone();

            let decl = node.unwrap_type();
            let [_module, ident] = decl.children() else {
                panic!(
                    "nominal name {:?} must decode to (Module, Identifier), got {} children",
                    nominal.name(),
                    decl.num_children()
                );
            };
            let nested = Node::with_children(b, decl.kind(), [context, ident.clone()]);
            node = Node::wrap(b, NodeKind::Type, nested);
        }

        if nominal.description.generic_params.num_primary_params == 0 {
            return Ok(node);
        }

        let arguments = self.store.generic_arguments(id)?;
        let arguments: SmallVec<[Node<B>; 4]> = arguments
            .iter()
            .map(|&argument| self.build_at(argument, depth + 1))
            .collect::<Result<_, _>>()?;

        let type_list = Node::with_children(b, NodeKind::TypeList, arguments);
        Ok(Node::with_children(b, bound_kind, [node, type_list]))
    }
}
