//! Symbolic node trees with pluggable node builders.
//!
//! A symbolic node tree is the canonical structural name of a type: an
//! immutable n-ary tree of tagged nodes, some of which carry a text payload
//! (module names, identifiers, tuple labels). Children are ordered and the
//! order is significant.
//!
//! Trees are allocated through a [`NodeBuilder`], which decides the storage
//! strategy (arena, RC-based).
//!
//! # Example
//!
//! ```
//! use tyname_nodes::{node, ArenaBuilder, Node, NodeKind};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let b = ArenaBuilder::new(&arena);
//!
//! let int = node!(b, Type[Struct[Module("Swift"), Identifier("Int")]]);
//! let boxed = node!(b, BoundGenericClass[
//!     Type[Class[Module("M"), Identifier("Box")]],
//!     TypeList[{int}],
//! ]);
//!
//! assert_eq!(boxed.kind(), NodeKind::BoundGenericClass);
//! assert_eq!(boxed.node_count(), 10);
//! ```

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod builders;
pub mod core;
pub mod dump;
mod macros;

pub use builders::{ArenaBuilder, BoxBuilder, InternedStr};
pub use crate::core::{Node, NodeBuilder, NodeData, NodeKind};
pub use dump::Dump;

static_assertions::assert_eq_size!(Node<ArenaBuilder<'static>>, usize);
static_assertions::assert_impl_all!(Node<ArenaBuilder<'static>>: Copy);
