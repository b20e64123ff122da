//! The foreign object-model bridge.

use crate::descriptor::ForeignClassId;
use crate::{String, Vec};

/// Module name under which classes and protocols of the foreign object model
/// are rendered.
pub const OBJC_MODULE: &str = "__ObjC";

/// Names classes of the foreign object model.
pub trait ForeignClassNames {
    /// Runtime name of `class`, if the object model knows it.
    fn class_name(&self, class: ForeignClassId) -> Option<&str>;
}

/// A table of foreign class names, indexed by registration order.
#[derive(Clone, Debug, Default)]
pub struct ForeignClassTable {
    names: Vec<String>,
}

impl ForeignClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>) -> ForeignClassId {
        let id = ForeignClassId::from_raw(self.names.len() as u32);
        self.names.push(name.into());
        id
    }
}

impl ForeignClassNames for ForeignClassTable {
    fn class_name(&self, class: ForeignClassId) -> Option<&str> {
        self.names.get(class.index()).map(String::as_str)
    }
}
