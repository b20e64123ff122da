use core::fmt;

/// Tag of a symbolic node.
///
/// The set is closed: it covers exactly the shapes a type descriptor can be
/// rendered into, plus the two outer wrappers (`Global`, `TypeMangling`) that
/// a decoded symbol carries around its type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    /// Root of a decoded symbol.
    Global,
    /// Wraps the `Type` of a symbol that names a type.
    TypeMangling,

    /// Wrapper around the shape of a type. Always has exactly one child.
    Type,

    Module,
    Identifier,

    Class,
    Struct,
    Enum,
    Protocol,

    /// Existential composition: one `TypeList` of `Type(Protocol)` nodes.
    ProtocolList,
    TypeList,

    BoundGenericClass,
    BoundGenericEnum,
    BoundGenericStructure,

    FunctionType,
    ObjCBlockType,
    CFunctionPointerType,
    ThinFunctionType,
    ArgumentTuple,
    ReturnType,
    ThrowsAnnotation,
    InOut,

    NonVariadicTuple,
    TupleElement,
    TupleElementName,

    Metatype,
    ExistentialMetatype,
}

impl NodeKind {
    /// Whether nodes of this kind carry a text payload.
    pub fn has_text(self) -> bool {
        matches!(
            self,
            NodeKind::Module | NodeKind::Identifier | NodeKind::TupleElementName
        )
    }

    /// Whether this is one of the nominal kinds that can be bound to generic
    /// arguments.
    pub fn is_nominal(self) -> bool {
        matches!(
            self,
            NodeKind::Class | NodeKind::Struct | NodeKind::Enum | NodeKind::Protocol
        )
    }

    pub fn is_function(self) -> bool {
        matches!(
            self,
            NodeKind::FunctionType
                | NodeKind::ObjCBlockType
                | NodeKind::CFunctionPointerType
                | NodeKind::ThinFunctionType
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Global => "Global",
            NodeKind::TypeMangling => "TypeMangling",
            NodeKind::Type => "Type",
            NodeKind::Module => "Module",
            NodeKind::Identifier => "Identifier",
            NodeKind::Class => "Class",
            NodeKind::Struct => "Struct",
            NodeKind::Enum => "Enum",
            NodeKind::Protocol => "Protocol",
            NodeKind::ProtocolList => "ProtocolList",
            NodeKind::TypeList => "TypeList",
            NodeKind::BoundGenericClass => "BoundGenericClass",
            NodeKind::BoundGenericEnum => "BoundGenericEnum",
            NodeKind::BoundGenericStructure => "BoundGenericStructure",
            NodeKind::FunctionType => "FunctionType",
            NodeKind::ObjCBlockType => "ObjCBlockType",
            NodeKind::CFunctionPointerType => "CFunctionPointerType",
            NodeKind::ThinFunctionType => "ThinFunctionType",
            NodeKind::ArgumentTuple => "ArgumentTuple",
            NodeKind::ReturnType => "ReturnType",
            NodeKind::ThrowsAnnotation => "ThrowsAnnotation",
            NodeKind::InOut => "InOut",
            NodeKind::NonVariadicTuple => "NonVariadicTuple",
            NodeKind::TupleElement => "TupleElement",
            NodeKind::TupleElementName => "TupleElementName",
            NodeKind::Metatype => "Metatype",
            NodeKind::ExistentialMetatype => "ExistentialMetatype",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
