//! Tyname - symbolic names for runtime type descriptors
//!
//! # Overview
//!
//! Tyname turns the type descriptors a runtime publishes (nominal types,
//! protocol compositions, functions, tuples, metatypes and bridged classes)
//! into canonical symbolic node trees. Trees are structural: two builds of
//! the same type compare equal, even across process runs where descriptor
//! identity and protocol registration order change. Common uses include:
//!
//! - Naming types in reflection and debugging tools
//! - Re-mangling types for cross-process caches
//! - Comparing types by name rather than by descriptor address
//!
//! # Quick Start
//!
//! ```
//! use tyname::{Bump, ArenaBuilder, NodeKind, TableDecoder, TreeBuilder};
//! use tyname::descriptor::TypeTable;
//!
//! // Trees are allocated in an arena
//! let arena = Bump::new();
//! let b = ArenaBuilder::new(&arena);
//!
//! // The decoder turns mangled names into trees
//! let mut decoder = TableDecoder::new();
//! decoder.insert_nominal(&b, "Si", NodeKind::Struct, "Swift", "Int");
//! decoder.insert_nominal(&b, "Sa", NodeKind::Struct, "Swift", "Array");
//!
//! // The store holds the descriptors
//! let mut table = TypeTable::new();
//! let int = table.add_struct("Si");
//! let array = table.add_generic_struct("Sa", [int]);
//!
//! let tree = TreeBuilder::new(b, &table, &decoder).build(array).unwrap();
//! assert_eq!(tree.kind(), NodeKind::BoundGenericStructure);
//! assert_eq!(tree.node_count(), 10);
//! ```
//!
//! # Collaborators
//!
//! The builder is generic over three seams, each a trait:
//!
//! 1. [`DescriptorStore`]: read access to descriptors ([`TypeTable`] is an
//!    in-memory store)
//! 2. [`NameDecoder`]: decodes mangled names ([`TableDecoder`] serves
//!    pre-decoded trees)
//! 3. [`ForeignClassNames`]: names bridged classes of the foreign object
//!    model, when built with the `objc-interop` feature
//!
//! Node storage is pluggable through [`NodeBuilder`]: [`ArenaBuilder`] for
//! bump allocation with interned text, [`BoxBuilder`] for reference-counted
//! trees that outlive any arena.

pub use bumpalo::Bump;

pub use tyname_core::{
    BuildError, BuildOptions, BuildOptionsOverride, Descriptor, DescriptorError, DescriptorId,
    DescriptorKind, DescriptorStore, ForeignClassNames, ForeignClassTable, NameDecoder,
    OBJC_MODULE, StoreError, TableDecoder, TreeBuilder, TypeTable, build_tree, descriptor,
};
pub use tyname_nodes::{
    ArenaBuilder, BoxBuilder, Dump, Node, NodeBuilder, NodeKind, node,
    core::traversal::{Visit, VisitFlow, walk},
};
