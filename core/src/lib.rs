//! Symbolic names for runtime type descriptors.
//!
//! Given a type descriptor (a runtime record describing a nominal type,
//! function, tuple, protocol composition, metatype or bridged class), this
//! crate builds the canonical symbolic node tree naming that type. The tree
//! is independent of descriptor identity, so it can be printed, compared and
//! re-serialized across process runs.
//!
//! The crate reads descriptors through a [`DescriptorStore`], decodes the
//! mangled names stored in them through a [`NameDecoder`], and names bridged
//! classes through a [`ForeignClassNames`] bridge. Printing the tree is left
//! to the consumer.
//!
//! # Example
//!
//! ```
//! use tyname_core::{TableDecoder, build_tree, descriptor::{FunctionArgument, FunctionConvention, TypeTable}};
//! use tyname_nodes::{BoxBuilder, NodeKind, node};
//!
//! let b = BoxBuilder::new();
//! let mut decoder = TableDecoder::new();
//! decoder.insert_nominal(&b, "Si", NodeKind::Struct, "Swift", "Int");
//!
//! let mut table = TypeTable::new();
//! let int = table.add_struct("Si");
//! let inc = table.add_function(FunctionConvention::Swift, false, [FunctionArgument::inout(int)], int);
//!
//! let int_tree = node!(b, Type[Struct[Module("Swift"), Identifier("Int")]]);
//! assert_eq!(
//!     build_tree(b, &table, &decoder, inc),
//!     Some(node!(b, FunctionType[
//!         ArgumentTuple[InOut[{int_tree}]],
//!         ReturnType[{int_tree}],
//!     ])),
//! );
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod bridge;
pub mod build;
pub mod decoder;
pub mod descriptor;
pub mod error;
pub mod options;

pub use bridge::{ForeignClassNames, ForeignClassTable, OBJC_MODULE};
pub use build::{TreeBuilder, build_tree};
pub use decoder::{NameDecoder, TableDecoder};
pub use descriptor::{Descriptor, DescriptorId, DescriptorKind, DescriptorStore, TypeTable};
pub use error::{BuildError, DescriptorError, StoreError};
pub use options::{BuildOptions, BuildOptionsOverride};

static_assertions::assert_impl_all!(TypeTable: Send, Sync);
