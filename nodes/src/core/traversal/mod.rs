//! Read-only traversal of node trees.
//!
//! [`walk`] drives a [`Visit`] implementation over a tree in pre-order using
//! an explicit stack, so arbitrarily deep trees never grow the call stack.
//!
//! # Example
//!
//! ```
//! use tyname_nodes::{BoxBuilder, Node, NodeKind};
//! use tyname_nodes::core::traversal::{Visit, VisitFlow, walk};
//!
//! struct Identifiers(usize);
//!
//! impl Visit<BoxBuilder> for Identifiers {
//!     fn visit_node(&mut self, node: &Node<BoxBuilder>, _depth: usize) -> VisitFlow {
//!         if node.kind() == NodeKind::Identifier {
//!             self.0 += 1;
//!         }
//!         VisitFlow::Continue
//!     }
//! }
//!
//! let b = BoxBuilder::new();
//! let id = Node::with_text(&b, NodeKind::Identifier, "Foo");
//! let mut ctx = Identifiers(0);
//! walk(&id, &mut ctx);
//! assert_eq!(ctx.0, 1);
//! ```

mod visit;

pub use visit::{Visit, VisitFlow, walk};
