use smallvec::SmallVec;

use super::{
    Descriptor, DescriptorId, ExistentialMetadata, FunctionArgument, FunctionConvention,
    FunctionMetadata, MetadataWord, NominalMetadata, ProtocolDescriptor, ProtocolId,
    TupleMetadata,
};
use crate::error::StoreError;
use crate::{String, Vec};

/// Size in bytes of one instance-record word.
pub const WORD_SIZE: usize = 8;

/// Generic argument lists are short; most fit inline.
pub type GenericArguments = SmallVec<[DescriptorId; 4]>;

/// Read access to the runtime's type descriptors.
///
/// Descriptors are never mutated once published, so a store may be shared
/// across threads and read concurrently.
pub trait DescriptorStore {
    fn descriptor(&self, id: DescriptorId) -> Option<&Descriptor>;

    fn protocol(&self, id: ProtocolId) -> Option<&ProtocolDescriptor>;

    /// Generic arguments of the nominal type `id`.
    ///
    /// Reads `num_primary_params` consecutive type words starting at the
    /// description's offset into the instance record, with bounds checks.
    fn generic_arguments(&self, id: DescriptorId) -> Result<GenericArguments, StoreError> {
        let descriptor = self
            .descriptor(id)
            .ok_or(StoreError::UnknownDescriptor(id))?;
        let nominal = descriptor
            .as_nominal()
            .ok_or(StoreError::NotNominal(id, descriptor.kind()))?;
        let params = nominal.description.generic_params;
        read_type_words(&nominal.words, params.offset * WORD_SIZE, params.num_primary_params)
    }
}

/// Read `count` consecutive type references starting `byte_offset` bytes into
/// `words`.
pub fn read_type_words(
    words: &[MetadataWord],
    byte_offset: usize,
    count: usize,
) -> Result<GenericArguments, StoreError> {
    if byte_offset % WORD_SIZE != 0 {
        return Err(StoreError::Misaligned { byte_offset });
    }
    let start = byte_offset / WORD_SIZE;
    let slots = start
        .checked_add(count)
        .and_then(|end| words.get(start..end))
        .ok_or(StoreError::OutOfBounds {
            byte_offset,
            count,
            len: words.len(),
        })?;

    slots
        .iter()
        .enumerate()
        .map(|(i, word)| match *word {
            MetadataWord::Type(id) => Ok(id),
            MetadataWord::Raw(_) => Err(StoreError::NotATypeWord { index: start + i }),
        })
        .collect()
}

/// In-memory descriptor store.
///
/// Descriptors are registered once and referred to by the returned ids.
///
/// # Example
///
/// ```
/// use tyname_core::descriptor::{DescriptorStore, TypeTable};
///
/// let mut table = TypeTable::new();
/// let int = table.add_struct("Si");
/// let array = table.add_generic_struct("Sa", [int]);
///
/// assert_eq!(table.generic_arguments(array).unwrap().as_slice(), &[int]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    descriptors: Vec<Descriptor>,
    protocols: Vec<ProtocolDescriptor>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn add(&mut self, descriptor: Descriptor) -> DescriptorId {
        let id = DescriptorId::from_raw(self.descriptors.len() as u32);
        self.descriptors.push(descriptor);
        id
    }

    pub fn add_protocol(&mut self, name: impl Into<String>) -> ProtocolId {
        let id = ProtocolId::from_raw(self.protocols.len() as u32);
        self.protocols.push(ProtocolDescriptor { name: name.into() });
        id
    }

    pub fn add_class(&mut self, name: impl Into<String>) -> DescriptorId {
        self.add(Descriptor::Class(NominalMetadata::new(name)))
    }

    pub fn add_struct(&mut self, name: impl Into<String>) -> DescriptorId {
        self.add(Descriptor::Struct(NominalMetadata::new(name)))
    }

    pub fn add_enum(&mut self, name: impl Into<String>) -> DescriptorId {
        self.add(Descriptor::Enum(NominalMetadata::new(name)))
    }

    pub fn add_generic_class(
        &mut self,
        name: impl Into<String>,
        arguments: impl IntoIterator<Item = DescriptorId>,
    ) -> DescriptorId {
        let nominal = NominalMetadata::new(name).with_generic_arguments(0, arguments);
        self.add(Descriptor::Class(nominal))
    }

    pub fn add_generic_struct(
        &mut self,
        name: impl Into<String>,
        arguments: impl IntoIterator<Item = DescriptorId>,
    ) -> DescriptorId {
        let nominal = NominalMetadata::new(name).with_generic_arguments(0, arguments);
        self.add(Descriptor::Struct(nominal))
    }

    pub fn add_existential(
        &mut self,
        protocols: impl IntoIterator<Item = ProtocolId>,
    ) -> DescriptorId {
        self.add(Descriptor::Existential(ExistentialMetadata {
            protocols: protocols.into_iter().collect(),
        }))
    }

    pub fn add_function(
        &mut self,
        convention: FunctionConvention,
        throws: bool,
        arguments: impl IntoIterator<Item = FunctionArgument>,
        result: DescriptorId,
    ) -> DescriptorId {
        self.add(Descriptor::Function(FunctionMetadata::new(
            convention, throws, arguments, result,
        )))
    }

    pub fn add_tuple(
        &mut self,
        elements: impl IntoIterator<Item = DescriptorId>,
        labels: Option<&str>,
    ) -> DescriptorId {
        self.add(Descriptor::Tuple(TupleMetadata {
            elements: elements.into_iter().collect(),
            labels: labels.map(String::from),
        }))
    }

    pub fn add_metatype(&mut self, instance: DescriptorId) -> DescriptorId {
        self.add(Descriptor::Metatype { instance })
    }

    pub fn add_existential_metatype(&mut self, instance: DescriptorId) -> DescriptorId {
        self.add(Descriptor::ExistentialMetatype { instance })
    }
}

impl DescriptorStore for TypeTable {
    fn descriptor(&self, id: DescriptorId) -> Option<&Descriptor> {
        self.descriptors.get(id.index())
    }

    fn protocol(&self, id: ProtocolId) -> Option<&ProtocolDescriptor> {
        self.protocols.get(id.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DescriptorKind;

    #[test]
    fn test_generic_arguments_after_prefix() {
        let mut table = TypeTable::new();
        let int = table.add_struct("Si");
        let string = table.add_struct("SS");
        let dict = NominalMetadata::new("Dictionary").with_generic_arguments(2, [string, int]);
        let dict = table.add(Descriptor::Struct(dict));

        assert_eq!(
            table.generic_arguments(dict).unwrap().as_slice(),
            &[string, int]
        );
    }

    #[test]
    fn test_generic_arguments_out_of_bounds() {
        let mut table = TypeTable::new();
        let int = table.add_struct("Si");
        let mut nominal = NominalMetadata::new("Box").with_generic_arguments(1, [int]);
        nominal.description.generic_params.num_primary_params = 3;
        let boxed = table.add(Descriptor::Class(nominal));

        assert_eq!(
            table.generic_arguments(boxed),
            Err(StoreError::OutOfBounds {
                byte_offset: WORD_SIZE,
                count: 3,
                len: 2
            })
        );
    }

    #[test]
    fn test_generic_arguments_reject_raw_words() {
        let mut table = TypeTable::new();
        let int = table.add_struct("Si");
        let mut nominal = NominalMetadata::new("Box").with_generic_arguments(1, [int]);
        nominal.description.generic_params.offset = 0;
        let boxed = table.add(Descriptor::Class(nominal));

        assert_eq!(
            table.generic_arguments(boxed),
            Err(StoreError::NotATypeWord { index: 0 })
        );
    }

    #[test]
    fn test_generic_arguments_of_non_nominal() {
        let mut table = TypeTable::new();
        let opaque = table.add(Descriptor::Opaque);
        assert_eq!(
            table.generic_arguments(opaque),
            Err(StoreError::NotNominal(opaque, DescriptorKind::Opaque))
        );
        let missing = DescriptorId::from_raw(99);
        assert_eq!(
            table.generic_arguments(missing),
            Err(StoreError::UnknownDescriptor(missing))
        );
    }

    #[test]
    fn test_misaligned_read() {
        assert_eq!(
            read_type_words(&[], 3, 0),
            Err(StoreError::Misaligned { byte_offset: 3 })
        );
    }

    #[test]
    fn test_empty_read_at_end() {
        let words = [MetadataWord::Raw(1)];
        assert!(read_type_words(&words, WORD_SIZE, 0).unwrap().is_empty());
    }
}
