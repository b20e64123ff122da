//! The descriptor-to-tree builder.
//!
//! [`TreeBuilder::build`] renders a type descriptor into its symbolic node
//! tree with a single top-down recursive descent, dispatching on the
//! descriptor kind:
//!
//! | Descriptor | Tree |
//! |------------|------|
//! | class, struct, enum, optional | `Type(Class\|Struct\|Enum(..))`, or `BoundGeneric*` |
//! | existential | `ProtocolList(TypeList(Type(Protocol(..))...))` |
//! | function | `FunctionType\|ObjCBlockType\|..(ThrowsAnnotation?, ArgumentTuple, ReturnType)` |
//! | tuple | `NonVariadicTuple(TupleElement(TupleElementName?, type)...)` |
//! | metatype | `Metatype(Type(instance))` |
//! | existential metatype | `ExistentialMetatype(instance)` |
//! | bridged class | `Class(Module("__ObjC"), Identifier(name))` |
//! | foreign class | the decoded foreign type name |
//! | opaque, local variables, error object | no name |
//!
//! A component that cannot be named makes the whole containing type
//! unnamed.

mod existential;
mod function;
mod nominal;
mod tuple;


use tyname_nodes::{Node, NodeBuilder, NodeKind};

use crate::bridge::ForeignClassNames;
use crate::decoder::NameDecoder;
use crate::descriptor::{Descriptor, DescriptorId, DescriptorStore, ForeignClassId};
use crate::error::BuildError;
use crate::options::BuildOptions;

/// Builds symbolic node trees from type descriptors.
///
/// Holds no mutable state: one builder may render any number of
/// descriptors, and every call returns a fresh tree.
///
/// # Example
///
/// ```
/// use tyname_core::{TableDecoder, TreeBuilder, descriptor::TypeTable};
/// use tyname_nodes::{BoxBuilder, NodeKind, node};
///
/// let b = BoxBuilder::new();
/// let mut decoder = TableDecoder::new();
/// decoder.insert_nominal(&b, "V1M3Foo", NodeKind::Struct, "M", "Foo");
///
/// let mut table = TypeTable::new();
/// let foo = table.add_struct("V1M3Foo");
///
/// let tree = TreeBuilder::new(b, &table, &decoder).build(foo);
/// assert_eq!(tree, Some(node!(b, Type[Struct[Module("M"), Identifier("Foo")]])));
/// ```
pub struct TreeBuilder<'a, B, S: ?Sized, D: ?Sized> {
    builder: B,
    store: &'a S,
    decoder: &'a D,
    bridge: Option<&'a dyn ForeignClassNames>,
    options: BuildOptions,
}

impl<'a, B, S, D> TreeBuilder<'a, B, S, D>
where
    B: NodeBuilder,
    S: DescriptorStore + ?Sized,
    D: NameDecoder<B> + ?Sized,
{
    pub fn new(builder: B, store: &'a S, decoder: &'a D) -> Self {
        Self {
            builder,
            store,
            decoder,
            bridge: None,
            options: BuildOptions::default(),
        }
    }

    /// Supply the object-model bridge used to name bridged classes.
    pub fn with_bridge(mut self, bridge: &'a dyn ForeignClassNames) -> Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build the symbolic tree of `id`, or `None` if it has no symbolic name.
    pub fn build(&self, id: DescriptorId) -> Option<Node<B>> {
        match self.try_build(id) {
            Ok(node) => Some(node),
            Err(error) => {
                tracing::debug!(descriptor = %id, %error, "No symbolic name");
                None
            }
        }
    }

    /// Like [`build`](Self::build), but reports why no name was built.
    pub fn try_build(&self, id: DescriptorId) -> Result<Node<B>, BuildError> {
        self.build_at(id, 0)
    }

    fn build_at(&self, id: DescriptorId, depth: usize) -> Result<Node<B>, BuildError> {
        if depth > self.options.max_depth {
            return Err(BuildError::DepthExceeded(self.options.max_depth));
        }
        let descriptor = self
            .store
            .descriptor(id)
            .ok_or(BuildError::UnknownDescriptor(id))?;
        tracing::trace!(descriptor = %id, kind = %descriptor.kind(), depth, "Building");

        match descriptor {
            Descriptor::Class(_)
            | Descriptor::Struct(_)
            | Descriptor::Enum(_)
            | Descriptor::Optional(_) => self.build_nominal(id, descriptor, depth),
            Descriptor::ObjCClassWrapper { class } => self.build_bridged_class(*class),
            Descriptor::ForeignClass { name } => self.decode_type_name(name),
            Descriptor::Existential(existential) => self.build_existential(existential),
            Descriptor::ExistentialMetatype { instance } => {
                let instance = self.build_at(*instance, depth + 1)?;
                Ok(Node::wrap(&self.builder, NodeKind::ExistentialMetatype, instance))
            }
            Descriptor::Function(function) => self.build_function(function, depth),
            Descriptor::Metatype { instance } => {
                let instance = self.build_at(*instance, depth + 1)?;
                let ty = Node::wrap(&self.builder, NodeKind::Type, instance);
                Ok(Node::wrap(&self.builder, NodeKind::Metatype, ty))
            }
            Descriptor::Tuple(tuple) => self.build_tuple(tuple, depth),
            Descriptor::Opaque
            | Descriptor::HeapLocalVariable
            | Descriptor::HeapGenericLocalVariable
            | Descriptor::ErrorObject => Err(BuildError::Unnamed(descriptor.kind())),
        }
    }

    fn decode_type_name(&self, name: &str) -> Result<Node<B>, BuildError> {
        self.decoder
            .decode_type_name(&self.builder, name)
            .ok_or_else(|| BuildError::UndecodableName(name.into()))
    }

    /// `Class(Module("__ObjC"), Identifier(name))`, not wrapped in `Type`.
    #[cfg(feature = "objc-interop")]
    fn build_bridged_class(&self, class: ForeignClassId) -> Result<Node<B>, BuildError> {
        let bridge = self.bridge.ok_or(BuildError::NoForeignBridge(class))?;
        let name = bridge
            .class_name(class)
            .ok_or(BuildError::UnknownForeignClass(class))?;

        let b = &self.builder;
        let module = Node::with_text(b, NodeKind::Module, crate::bridge::OBJC_MODULE);
        let ident = Node::with_text(b, NodeKind::Identifier, name);
        Ok(Node::with_children(b, NodeKind::Class, [module, ident]))
    }

    #[cfg(not(feature = "objc-interop"))]
    fn build_bridged_class(&self, class: ForeignClassId) -> Result<Node<B>, BuildError> {
        panic!("bridged class {class} reached a build without object-model interop")
    }
}

/// Build the symbolic tree of `id` with default options and no object-model
/// bridge.
pub fn build_tree<B, S, D>(builder: B, store: &S, decoder: &D, id: DescriptorId) -> Option<Node<B>>
where
    B: NodeBuilder,
    S: DescriptorStore + ?Sized,
    D: NameDecoder<B> + ?Sized,
{
    TreeBuilder::new(builder, store, decoder).build(id)
}
