//! Indented debug rendering of a node tree.
//!
//! The output is one node per line, children indented two spaces deeper than
//! their parent, with text payloads quoted after the kind:
//!
//! ```text
//! Type
//!   Struct
//!     Module("M")
//!     Identifier("Foo")
//! ```
//!
//! This is a debugging and snapshot aid. It is not the compact mangled
//! grammar, which is produced by consumers of the tree.

use core::fmt;

use crate::core::traversal::{Visit, VisitFlow, walk};
use crate::core::{Node, NodeBuilder};

/// `Display` adapter returned by [`Node::dump`].
pub struct Dump<'a, B: NodeBuilder>(&'a Node<B>);

impl<B: NodeBuilder> Node<B> {
    pub fn dump(&self) -> Dump<'_, B> {
        Dump(self)
    }
}

struct Writer<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
    result: fmt::Result,
}

impl<B: NodeBuilder> Visit<B> for Writer<'_, '_> {
    fn visit_node(&mut self, node: &Node<B>, depth: usize) -> VisitFlow {
        self.result = write_line(self.f, node, depth);
        if self.result.is_err() {
            VisitFlow::Stop
        } else {
            VisitFlow::Continue
        }
    }
}

fn write_line<B: NodeBuilder>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<B>,
    depth: usize,
) -> fmt::Result {
    write!(f, "{:indent$}{}", "", node.kind(), indent = depth * 2)?;
    if let Some(text) = node.text() {
        write!(f, "({text:?})")?;
    }
    writeln!(f)
}

impl<B: NodeBuilder> fmt::Display for Dump<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = Writer { f, result: Ok(()) };
        walk(self.0, &mut writer);
        writer.result
    }
}

#[cfg(test)]
mod tests {
    use crate::{BoxBuilder, Node, NodeKind};
    use alloc::string::ToString;
    use expect_test::expect;

    #[test]
    fn test_dump_nested() {
        let b = BoxBuilder::new();
        let module = Node::with_text(&b, NodeKind::Module, "M");
        let name = Node::with_text(&b, NodeKind::Identifier, "Foo");
        let strukt = Node::with_children(&b, NodeKind::Struct, [module, name]);
        let ty = Node::wrap(&b, NodeKind::Type, strukt);

        expect![[r#"
            Type
              Struct
                Module("M")
                Identifier("Foo")
        "#]]
        .assert_eq(&ty.dump().to_string());
    }

    #[test]
    fn test_dump_leaf() {
        let b = BoxBuilder::new();
        let throws = Node::new(&b, NodeKind::ThrowsAnnotation);
        expect![[r#"
            ThrowsAnnotation
        "#]]
        .assert_eq(&throws.dump().to_string());
    }
}
