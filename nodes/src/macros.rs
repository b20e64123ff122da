//! Node construction macro for ergonomic tree building.
//!
//! # Example
//!
//! ```
//! use tyname_nodes::{node, BoxBuilder, NodeKind};
//!
//! let b = BoxBuilder::new();
//!
//! let foo = node!(b, Type[Struct[Module("M"), Identifier("Foo")]]);
//! assert_eq!(foo.unwrap_type().kind(), NodeKind::Struct);
//!
//! // Splice an existing node with `{expr}`
//! let tuple = node!(b, NonVariadicTuple[TupleElement[{foo}], TupleElement[{foo}]]);
//! assert_eq!(tuple.num_children(), 2);
//! ```

/// Macro for constructing node trees with a concise syntax.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `Kind` | Leaf node without text |
/// | `Kind("text")` | Leaf node with a text payload |
/// | `Kind[child, ...]` | Node with ordered children |
/// | `{expr}` | An existing `Node` (cloned) |
#[macro_export]
macro_rules! node {
    // === Single node ===

    (@node $b:expr ; { $e:expr }) => {
        ::core::clone::Clone::clone(&$e)
    };
    (@node $b:expr ; $kind:ident ( $text:expr )) => {
        $crate::Node::with_text($b, $crate::NodeKind::$kind, $text)
    };
    (@node $b:expr ; $kind:ident [ $($children:tt)* ]) => {{
        let children = $crate::node!(@children $b ; [] $($children)*);
        $crate::Node::with_children($b, $crate::NodeKind::$kind, children)
    }};
    (@node $b:expr ; $kind:ident) => {
        $crate::Node::new($b, $crate::NodeKind::$kind)
    };

    // === Child list parsing ===
    // @children builder ; [collected] remaining

    (@children $b:expr ; [$($acc:expr),*]) => {
        [$($acc),*]
    };
    (@children $b:expr ; [$($acc:expr),*] { $e:expr } $(, $($rest:tt)*)?) => {
        $crate::node!(@children $b ; [$($acc,)* $crate::node!(@node $b ; { $e })] $($($rest)*)?)
    };
    (@children $b:expr ; [$($acc:expr),*] $kind:ident ( $text:expr ) $(, $($rest:tt)*)?) => {
        $crate::node!(@children $b ; [$($acc,)* $crate::node!(@node $b ; $kind ( $text ))] $($($rest)*)?)
    };
    (@children $b:expr ; [$($acc:expr),*] $kind:ident [ $($inner:tt)* ] $(, $($rest:tt)*)?) => {
        $crate::node!(@children $b ; [$($acc,)* $crate::node!(@node $b ; $kind [ $($inner)* ])] $($($rest)*)?)
    };
    (@children $b:expr ; [$($acc:expr),*] $kind:ident $(, $($rest:tt)*)?) => {
        $crate::node!(@children $b ; [$($acc,)* $crate::node!(@node $b ; $kind)] $($($rest)*)?)
    };

    // === Entry point ===

    ($b:expr, $($rest:tt)+) => {{
        let __b = &$b;
        $crate::node!(@node __b ; $($rest)+)
    }};
}
