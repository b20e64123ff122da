//! Core node tree components.
//!
//! - [`NodeBuilder`]: Trait for node allocation strategies
//! - [`Node`] and [`NodeData`]: Node handles and their underlying storage
//! - [`NodeKind`]: The closed set of node tags
//!
//! See the [`traversal`] submodule for read-only walking utilities.

mod builder;
mod kind;
mod node;
pub mod traversal;

pub use builder::NodeBuilder;
pub use kind::NodeKind;
pub use node::{Node, NodeData};
