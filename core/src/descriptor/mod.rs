//! The type-descriptor model.
//!
//! A [`Descriptor`] is the read-only runtime record describing one type. Each
//! kind of record is a variant of the enum, so the tree builder matches on
//! them exhaustively instead of reinterpreting a common header per kind tag.
//!
//! Descriptors refer to each other through [`DescriptorId`]s resolved by a
//! [`DescriptorStore`].

mod function;
mod ids;
mod kind;
mod store;

pub use function::{FunctionArgument, FunctionConvention, FunctionMetadata, FunctionTypeFlags};
pub use ids::{DescriptorId, ForeignClassId, ProtocolId};
pub use kind::DescriptorKind;
pub use store::{DescriptorStore, GenericArguments, TypeTable, WORD_SIZE, read_type_words};

use crate::{String, Vec};

/// A runtime type record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Descriptor {
    Class(NominalMetadata),
    Struct(NominalMetadata),
    Enum(NominalMetadata),
    /// Sugared enum; named like any other enum.
    Optional(NominalMetadata),

    /// A class of the external object model, bridged without a native
    /// declaration. Its name comes from the object-model bridge.
    ObjCClassWrapper { class: ForeignClassId },

    /// A foreign class with its own mangled type name.
    ForeignClass { name: String },

    /// A composition of zero or more protocol requirements.
    Existential(ExistentialMetadata),

    ExistentialMetatype { instance: DescriptorId },
    Function(FunctionMetadata),
    Metatype { instance: DescriptorId },
    Tuple(TupleMetadata),

    Opaque,
    HeapLocalVariable,
    HeapGenericLocalVariable,
    ErrorObject,
}

impl Descriptor {
    pub fn kind(&self) -> DescriptorKind {
        match self {
            Descriptor::Class(_) => DescriptorKind::Class,
            Descriptor::Struct(_) => DescriptorKind::Struct,
            Descriptor::Enum(_) => DescriptorKind::Enum,
            Descriptor::Optional(_) => DescriptorKind::Optional,
            Descriptor::ObjCClassWrapper { .. } => DescriptorKind::ObjCClassWrapper,
            Descriptor::ForeignClass { .. } => DescriptorKind::ForeignClass,
            Descriptor::Existential(_) => DescriptorKind::Existential,
            Descriptor::ExistentialMetatype { .. } => DescriptorKind::ExistentialMetatype,
            Descriptor::Function(_) => DescriptorKind::Function,
            Descriptor::Metatype { .. } => DescriptorKind::Metatype,
            Descriptor::Tuple(_) => DescriptorKind::Tuple,
            Descriptor::Opaque => DescriptorKind::Opaque,
            Descriptor::HeapLocalVariable => DescriptorKind::HeapLocalVariable,
            Descriptor::HeapGenericLocalVariable => DescriptorKind::HeapGenericLocalVariable,
            Descriptor::ErrorObject => DescriptorKind::ErrorObject,
        }
    }

    /// The nominal record, for class, struct, enum and optional descriptors.
    pub fn as_nominal(&self) -> Option<&NominalMetadata> {
        match self {
            Descriptor::Class(nominal)
            | Descriptor::Struct(nominal)
            | Descriptor::Enum(nominal)
            | Descriptor::Optional(nominal) => Some(nominal),
            _ => None,
        }
    }
}

/// Instance record of a class, struct, enum or optional type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NominalMetadata {
    pub description: NominalDescription,
    /// Enclosing type, for types declared inside another type.
    pub parent: Option<DescriptorId>,
    /// Pointer-sized words of the instance record. Generic arguments are
    /// found here, at the offset given by the description.
    pub words: Vec<MetadataWord>,
}

impl NominalMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: NominalDescription {
                name: name.into(),
                generic_params: GenericParams::default(),
            },
            parent: None,
            words: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: DescriptorId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Lay the generic arguments out after `prefix` non-type words.
    pub fn with_generic_arguments(
        mut self,
        prefix: usize,
        arguments: impl IntoIterator<Item = DescriptorId>,
    ) -> Self {
        self.words = core::iter::repeat_n(MetadataWord::Raw(0), prefix).collect();
        self.words
            .extend(arguments.into_iter().map(MetadataWord::Type));
        self.description.generic_params = GenericParams {
            offset: prefix,
            num_primary_params: self.words.len() - prefix,
        };
        self
    }

    pub fn name(&self) -> &str {
        &self.description.name
    }
}

/// The static (per-declaration) part of a nominal type record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NominalDescription {
    /// Mangled type name of the declaration.
    pub name: String,
    pub generic_params: GenericParams,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GenericParams {
    /// Offset of the first generic argument, in words from the start of the
    /// instance record.
    pub offset: usize,
    pub num_primary_params: usize,
}

/// One pointer-sized word of an instance record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MetadataWord {
    /// Reference to another type descriptor.
    Type(DescriptorId),
    /// Any other payload (vtable entries, field offsets, ...).
    Raw(u64),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExistentialMetadata {
    /// In registration order; carries no meaning for the rendered name.
    pub protocols: Vec<ProtocolId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProtocolDescriptor {
    /// Either a mangled symbol (`_Tt...`) or a verbatim foreign protocol name.
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TupleMetadata {
    pub elements: Vec<DescriptorId>,
    /// Space-terminated labels, one segment per element; an empty segment
    /// leaves that element unlabeled.
    pub labels: Option<String>,
}
