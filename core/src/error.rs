//! Error types.
//!
//! The public tree-building entry point reports a single outcome, "no
//! symbolic name" (`None`). [`BuildError`] carries the reason behind it for
//! callers of `try_build` and for logging.

use thiserror::Error;

use crate::String;
use crate::descriptor::{DescriptorId, DescriptorKind, ForeignClassId, ProtocolId};

/// Why no symbolic name could be built for a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The kind has no name at all (opaque, local-variable boxes, errors).
    #[error("{0} descriptors have no symbolic name")]
    Unnamed(DescriptorKind),

    #[error("unknown type descriptor {0}")]
    UnknownDescriptor(DescriptorId),

    #[error("unknown protocol descriptor {0}")]
    UnknownProtocol(ProtocolId),

    /// The name decoder rejected a mangled nominal or foreign type name.
    #[error("cannot decode type name {0:?}")]
    UndecodableName(String),

    /// No object-model bridge was supplied to name a bridged class.
    #[error("no foreign object-model bridge to name bridged class {0}")]
    NoForeignBridge(ForeignClassId),

    /// The object-model bridge does not know the class.
    #[error("foreign class {0} is not known to the object-model bridge")]
    UnknownForeignClass(ForeignClassId),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("type nesting exceeds maximum depth of {0}")]
    DepthExceeded(usize),
}

/// A failed read from a descriptor store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("unknown type descriptor {0}")]
    UnknownDescriptor(DescriptorId),

    #[error("descriptor {0} is a {1} descriptor, not a nominal type")]
    NotNominal(DescriptorId, DescriptorKind),

    #[error(
        "reading {count} words at byte offset {byte_offset} overruns an instance record of {len} words"
    )]
    OutOfBounds {
        byte_offset: usize,
        count: usize,
        len: usize,
    },

    #[error("instance record word {index} is not a type reference")]
    NotATypeWord { index: usize },

    #[error("byte offset {byte_offset} is not word aligned")]
    Misaligned { byte_offset: usize },
}

/// A raw descriptor field that does not decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("invalid descriptor kind {0}")]
    InvalidKind(u32),

    #[error("invalid function convention {0}")]
    InvalidConvention(u8),

    #[error("function flags declare {expected} arguments, record has {found}")]
    ArgumentCountMismatch { expected: usize, found: usize },
}
