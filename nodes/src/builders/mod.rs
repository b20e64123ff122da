//! Node builder implementations for different storage strategies.
//!
//! - [`ArenaBuilder`]: Arena-based allocation with interned text
//! - [`BoxBuilder`]: RC-based allocation, trees outlive any arena

mod arena_builder;
mod box_builder;

pub use arena_builder::{ArenaBuilder, InternedStr};
pub use box_builder::BoxBuilder;
