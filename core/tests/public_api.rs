//! Integration tests for the public API.
//!
//! These drive the tree builder through its collaborator traits with a
//! hand-written descriptor store and a small mangled-name decoder, the way a
//! host runtime would plug in.

use bumpalo::Bump;
use expect_test::expect;
use indoc::indoc;
use pretty_assertions::assert_eq;
use tyname_core::descriptor::{
    Descriptor, DescriptorId, DescriptorStore, ExistentialMetadata, FunctionArgument,
    FunctionConvention, FunctionMetadata, FunctionTypeFlags, NominalMetadata, ProtocolDescriptor,
    ProtocolId, TupleMetadata,
};
use tyname_core::{
    BuildError, BuildOptions, BuildOptionsOverride, ForeignClassTable, NameDecoder, TreeBuilder,
    build_tree,
};
use tyname_nodes::{ArenaBuilder, BoxBuilder, Node, NodeBuilder, NodeKind};

// ============================================================================
// Host collaborators
// ============================================================================

/// Descriptors as a runtime image would publish them: a flat list, indexed by
/// raw id.
#[derive(Default)]
struct Image {
    descriptors: Vec<Descriptor>,
    protocols: Vec<ProtocolDescriptor>,
}

impl Image {
    fn push(&mut self, descriptor: Descriptor) -> DescriptorId {
        self.descriptors.push(descriptor);
        DescriptorId::from_raw(self.descriptors.len() as u32 - 1)
    }

    fn protocol(&mut self, name: &str) -> ProtocolId {
        self.protocols.push(ProtocolDescriptor { name: name.into() });
        ProtocolId::from_raw(self.protocols.len() as u32 - 1)
    }
}

impl DescriptorStore for Image {
    fn descriptor(&self, id: DescriptorId) -> Option<&Descriptor> {
        self.descriptors.get(id.to_raw() as usize)
    }

    fn protocol(&self, id: ProtocolId) -> Option<&ProtocolDescriptor> {
        self.protocols.get(id.to_raw() as usize)
    }
}

/// Decodes a toy mangling: a kind letter (`C`, `V` or `O`) followed by a
/// length-prefixed module and name, e.g. `V5Swift3Int`. Protocol symbols are
/// `_TtP<module><name>_`.
struct ToyDecoder;

fn identifier(input: &str) -> Option<(&str, &str)> {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    let len: usize = input[..digits].parse().ok()?;
    let rest = &input[digits..];
    (rest.len() >= len).then(|| rest.split_at(len))
}

fn qualified<B: NodeBuilder>(b: &B, kind: NodeKind, input: &str) -> Option<Node<B>> {
    let (module, rest) = identifier(input)?;
    let (name, rest) = identifier(rest)?;
    if !rest.is_empty() {
        return None;
    }
    let module = Node::with_text(b, NodeKind::Module, module);
    let ident = Node::with_text(b, NodeKind::Identifier, name);
    Some(Node::with_children(b, kind, [module, ident]))
}

impl<B: NodeBuilder> NameDecoder<B> for ToyDecoder {
    fn decode_type_name(&self, b: &B, name: &str) -> Option<Node<B>> {
        let kind = match name.as_bytes().first()? {
            b'C' => NodeKind::Class,
            b'V' => NodeKind::Struct,
            b'O' => NodeKind::Enum,
            _ => return None,
        };
        let node = qualified(b, kind, &name[1..])?;
        Some(Node::wrap(b, NodeKind::Type, node))
    }

    fn decode_symbol(&self, b: &B, symbol: &str) -> Option<Node<B>> {
        let body = symbol.strip_prefix("_TtP")?.strip_suffix('_')?;
        let protocol = qualified(b, NodeKind::Protocol, body)?;
        let tree = [
            NodeKind::Type,
            NodeKind::TypeList,
            NodeKind::ProtocolList,
            NodeKind::Type,
            NodeKind::TypeMangling,
            NodeKind::Global,
        ]
        .into_iter()
        .fold(protocol, |inner, kind| Node::wrap(b, kind, inner));
        Some(tree)
    }
}

/// A sample image exercising every nameable descriptor kind.
struct Sample {
    image: Image,
    classes: ForeignClassTable,
    callback: DescriptorId,
}

fn sample() -> Sample {
    let mut image = Image::default();
    let mut classes = ForeignClassTable::new();

    let int = image.push(Descriptor::Struct(NominalMetadata::new("V5Swift3Int")));
    let string = image.push(Descriptor::Struct(NominalMetadata::new("V5Swift6String")));
    let dict = image.push(Descriptor::Struct(
        NominalMetadata::new("V5Swift10Dictionary").with_generic_arguments(2, [string, int]),
    ));
    let view = image.push(Descriptor::Class(NominalMetadata::new("C2UI4View")));
    let style = image.push(Descriptor::Enum(
        NominalMetadata::new("O2UI5Style").with_parent(view),
    ));
    let nsobject = classes.add("NSObject");
    let object = image.push(Descriptor::ObjCClassWrapper { class: nsobject });

    let hashable = Image::protocol(&mut image, "_TtP5Swift8Hashable_");
    let copying = Image::protocol(&mut image, "NSCopying");
    let any = image.push(Descriptor::Existential(ExistentialMetadata {
        protocols: vec![hashable, copying],
    }));
    let any_type = image.push(Descriptor::ExistentialMetatype { instance: any });
    let style_type = image.push(Descriptor::Metatype { instance: style });

    let pair = image.push(Descriptor::Tuple(TupleMetadata {
        elements: vec![style_type, object],
        labels: Some("style  ".into()),
    }));
    let flags = FunctionTypeFlags::new(FunctionConvention::Block, 3, true);
    let function = FunctionMetadata::from_raw(
        flags,
        [
            FunctionArgument::new(dict),
            FunctionArgument::inout(pair),
            FunctionArgument::new(any_type),
        ],
        int,
    )
    .expect("valid function flags");
    let callback = image.push(Descriptor::Function(function));

    Sample {
        image,
        classes,
        callback,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_full_tree_snapshot() {
    let sample = sample();
    let b = BoxBuilder::new();
    let tree = TreeBuilder::new(b, &sample.image, &ToyDecoder)
        .with_bridge(&sample.classes)
        .build(sample.callback)
        .expect("callback is nameable");

    expect![[r#"
        ObjCBlockType
          ThrowsAnnotation
          ArgumentTuple
            NonVariadicTuple
              BoundGenericStructure
                Type
                  Struct
                    Module("Swift")
                    Identifier("Dictionary")
                TypeList
                  Type
                    Struct
                      Module("Swift")
                      Identifier("String")
                  Type
                    Struct
                      Module("Swift")
                      Identifier("Int")
              InOut
                NonVariadicTuple
                  TupleElement
                    TupleElementName("style")
                    Metatype
                      Type
                        Type
                          Enum
                            Class
                              Module("UI")
                              Identifier("View")
                            Identifier("Style")
                  TupleElement
                    Class
                      Module("__ObjC")
                      Identifier("NSObject")
              ExistentialMetatype
                ProtocolList
                  TypeList
                    Type
                      Protocol
                        Module("__ObjC")
                        Identifier("NSCopying")
                    Type
                      Protocol
                        Module("Swift")
                        Identifier("Hashable")
          ReturnType
            Type
              Struct
                Module("Swift")
                Identifier("Int")
    "#]]
    .assert_eq(&tree.dump().to_string());
}

#[test]
fn test_builders_agree() {
    let sample = sample();
    let arena = Bump::new();
    let arena_tree = TreeBuilder::new(ArenaBuilder::new(&arena), &sample.image, &ToyDecoder)
        .with_bridge(&sample.classes)
        .build(sample.callback)
        .expect("callback is nameable");
    let box_tree = TreeBuilder::new(BoxBuilder::new(), &sample.image, &ToyDecoder)
        .with_bridge(&sample.classes)
        .build(sample.callback)
        .expect("callback is nameable");

    assert_eq!(arena_tree.dump().to_string(), box_tree.dump().to_string());
    assert_eq!(arena_tree.node_count(), box_tree.node_count());
}

#[test]
fn test_repeated_builds_are_equal() {
    let sample = sample();
    let b = BoxBuilder::new();
    let builder = TreeBuilder::new(b, &sample.image, &ToyDecoder).with_bridge(&sample.classes);

    let first = builder.build(sample.callback);
    let second = builder.build(sample.callback);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_existential_order_survives_reregistration() {
    // Ordered by mangled name, so Hashable (8) precedes Equatable (9).
    // Two runs registering the same protocols in different orders.
    let names = ["_TtP5Swift8Hashable_", "NSCopying", "_TtP5Swift9Equatable_"];
    let dumps: Vec<String> = [[0, 1, 2], [2, 0, 1]]
        .into_iter()
        .map(|order| {
            let mut image = Image::default();
            let protocols = order.map(|i| Image::protocol(&mut image, names[i])).to_vec();
            let any = image.push(Descriptor::Existential(ExistentialMetadata { protocols }));
            build_tree(BoxBuilder::new(), &image, &ToyDecoder, any)
                .expect("composition is nameable")
                .dump()
                .to_string()
        })
        .collect();

    assert_eq!(dumps[0], dumps[1]);
    assert_eq!(
        dumps[0],
        indoc! {r#"
            ProtocolList
              TypeList
                Type
                  Protocol
                    Module("__ObjC")
                    Identifier("NSCopying")
                Type
                  Protocol
                    Module("Swift")
                    Identifier("Hashable")
                Type
                  Protocol
                    Module("Swift")
                    Identifier("Equatable")
        "#}
    );
}

#[test]
fn test_unnameable_component_spoils_the_whole() {
    let mut image = Image::default();
    let int = image.push(Descriptor::Struct(NominalMetadata::new("V5Swift3Int")));
    let local = image.push(Descriptor::HeapGenericLocalVariable);
    let tuple = image.push(Descriptor::Tuple(TupleMetadata {
        elements: vec![int, local],
        labels: None,
    }));
    let meta = image.push(Descriptor::Metatype { instance: tuple });

    let b = BoxBuilder::new();
    assert_eq!(build_tree(b, &image, &ToyDecoder, meta), None);
    assert_eq!(build_tree(b, &image, &ToyDecoder, int).map(|n| n.kind()), Some(NodeKind::Type));
}

#[test]
fn test_malformed_name_is_reported() {
    let mut image = Image::default();
    let bad = image.push(Descriptor::Class(NominalMetadata::new("C5Swift")));

    let result = TreeBuilder::new(BoxBuilder::new(), &image, &ToyDecoder).try_build(bad);
    assert_eq!(result, Err(BuildError::UndecodableName("C5Swift".into())));
    assert_eq!(
        result.unwrap_err().to_string(),
        "cannot decode type name \"C5Swift\""
    );
}

#[test]
fn test_options_override() {
    let mut image = Image::default();
    let mut id = image.push(Descriptor::Struct(NominalMetadata::new("V5Swift3Int")));
    for _ in 0..4 {
        id = image.push(Descriptor::Metatype { instance: id });
    }

    let mut options = BuildOptions::default();
    options.override_with(&BuildOptionsOverride { max_depth: Some(3) });

    let builder = TreeBuilder::new(BoxBuilder::new(), &image, &ToyDecoder).with_options(options);
    assert_eq!(builder.options().max_depth, 3);
    assert_eq!(builder.try_build(id), Err(BuildError::DepthExceeded(3)));
}

#[test]
fn test_shared_store_across_threads() {
    let sample = sample();
    let image = &sample.image;
    let classes = &sample.classes;
    let callback = sample.callback;

    let dumps: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let arena = Bump::new();
                    TreeBuilder::new(ArenaBuilder::new(&arena), image, &ToyDecoder)
                        .with_bridge(classes)
                        .build(callback)
                        .map(|tree| tree.dump().to_string())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect()
    });

    assert!(dumps.windows(2).all(|pair| pair[0] == pair[1]));
}
