use core::fmt;

use crate::error::DescriptorError;

/// Kind tag of a type descriptor.
///
/// The discriminants are the raw tags stored in the first word of a runtime
/// type record, so a host that reads records out of process memory can map
/// them with [`DescriptorKind::try_from`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DescriptorKind {
    Class = 0,
    Struct = 1,
    Enum = 2,
    Optional = 3,
    Opaque = 8,
    Tuple = 9,
    Function = 10,
    Existential = 12,
    Metatype = 13,
    ObjCClassWrapper = 14,
    ExistentialMetatype = 15,
    ForeignClass = 16,
    HeapLocalVariable = 64,
    HeapGenericLocalVariable = 65,
    ErrorObject = 128,
}

impl DescriptorKind {
    const ALL: [DescriptorKind; 15] = [
        DescriptorKind::Class,
        DescriptorKind::Struct,
        DescriptorKind::Enum,
        DescriptorKind::Optional,
        DescriptorKind::Opaque,
        DescriptorKind::Tuple,
        DescriptorKind::Function,
        DescriptorKind::Existential,
        DescriptorKind::Metatype,
        DescriptorKind::ObjCClassWrapper,
        DescriptorKind::ExistentialMetatype,
        DescriptorKind::ForeignClass,
        DescriptorKind::HeapLocalVariable,
        DescriptorKind::HeapGenericLocalVariable,
        DescriptorKind::ErrorObject,
    ];

    pub const fn to_raw(self) -> u32 {
        self as u32
    }

    /// Class, struct, enum and optional: kinds declared by name.
    pub fn is_nominal(self) -> bool {
        matches!(
            self,
            DescriptorKind::Class
                | DescriptorKind::Struct
                | DescriptorKind::Enum
                | DescriptorKind::Optional
        )
    }

    /// Kinds from which no symbolic name can ever be derived.
    pub fn is_unnamed(self) -> bool {
        matches!(
            self,
            DescriptorKind::Opaque
                | DescriptorKind::HeapLocalVariable
                | DescriptorKind::HeapGenericLocalVariable
                | DescriptorKind::ErrorObject
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            DescriptorKind::Class => "class",
            DescriptorKind::Struct => "struct",
            DescriptorKind::Enum => "enum",
            DescriptorKind::Optional => "optional",
            DescriptorKind::Opaque => "opaque",
            DescriptorKind::Tuple => "tuple",
            DescriptorKind::Function => "function",
            DescriptorKind::Existential => "existential",
            DescriptorKind::Metatype => "metatype",
            DescriptorKind::ObjCClassWrapper => "bridged class",
            DescriptorKind::ExistentialMetatype => "existential metatype",
            DescriptorKind::ForeignClass => "foreign class",
            DescriptorKind::HeapLocalVariable => "heap local variable",
            DescriptorKind::HeapGenericLocalVariable => "heap generic local variable",
            DescriptorKind::ErrorObject => "error object",
        }
    }
}

impl TryFrom<u32> for DescriptorKind {
    type Error = DescriptorError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_raw() == raw)
            .ok_or(DescriptorError::InvalidKind(raw))
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
