use smallvec::SmallVec;
use tyname_nodes::{Node, NodeBuilder, NodeKind};

use super::TreeBuilder;
use crate::decoder::NameDecoder;
use crate::descriptor::{DescriptorStore, FunctionConvention, FunctionMetadata};
use crate::error::BuildError;

impl<'a, B, S, D> TreeBuilder<'a, B, S, D>
where
    B: NodeBuilder,
    S: DescriptorStore + ?Sized,
    D: NameDecoder<B> + ?Sized,
{
    pub(super) fn build_function(
        &self,
        function: &FunctionMetadata,
        depth: usize,
    ) -> Result<Node<B>, BuildError> {
        let b = &self.builder;
        let kind = match function.convention() {
            FunctionConvention::Swift => NodeKind::FunctionType,
            FunctionConvention::Block => NodeKind::ObjCBlockType,
            FunctionConvention::CFunctionPointer => NodeKind::CFunctionPointerType,
            FunctionConvention::Thin => NodeKind::ThinFunctionType,
        };

        let mut inputs: SmallVec<[Node<B>; 4]> = SmallVec::with_capacity(function.arguments().len());
        for argument in function.arguments() {
            let input = self.build_at(argument.ty, depth + 1)?;
            inputs.push(if argument.inout {
                Node::wrap(b, NodeKind::InOut, input)
            } else {
                input
            });
        }

        // A single argument stands alone; none or several form a tuple.
        let total_input = if inputs.len() == 1 {
            inputs.remove(0)
        } else {
            Node::with_children(b, NodeKind::NonVariadicTuple, inputs)
        };
        let arguments = Node::wrap(b, NodeKind::ArgumentTuple, total_input);

        let result = self.build_at(function.result(), depth + 1)?;
        let result = Node::wrap(b, NodeKind::ReturnType, result);

        let mut children: SmallVec<[Node<B>; 3]> = SmallVec::new();
        if function.throws() {
            children.push(Node::new(b, NodeKind::ThrowsAnnotation));
        }
        children.push(arguments);
        children.push(result);
        Ok(Node::with_children(b, kind, children))
    }
}
