use smallvec::SmallVec;
use tyname_nodes::{Node, NodeBuilder, NodeKind};

use super::TreeBuilder;
use crate::decoder::NameDecoder;
use crate::descriptor::{DescriptorStore, TupleMetadata};
use crate::error::BuildError;

impl<'a, B, S, D> TreeBuilder<'a, B, S, D>
where
    B: NodeBuilder,
    S: DescriptorStore + ?Sized,
    D: NameDecoder<B> + ?Sized,
{
    pub(super) fn build_tuple(
        &self,
        tuple: &TupleMetadata,
        depth: usize,
    ) -> Result<Node<B>, BuildError> {
        let b = &self.builder;
        let mut labels = Labels::new(tuple.labels.as_deref());

        let mut elements: SmallVec<[Node<B>; 4]> = SmallVec::with_capacity(tuple.elements.len());
        for &element in &tuple.elements {
            let mut children: SmallVec<[Node<B>; 2]> = SmallVec::new();
            if let Some(label) = labels.next_label() {
                children.push(Node::with_text(b, NodeKind::TupleElementName, label));
            }
            children.push(self.build_at(element, depth + 1)?);
            elements.push(Node::with_children(b, NodeKind::TupleElement, children));
        }

        Ok(Node::with_children(b, NodeKind::NonVariadicTuple, elements))
    }
}

/// Cursor over a packed tuple label string.
///
/// Each element consumes the segment up to and including the next space. An
/// empty segment leaves that element unlabeled. Once no space remains, the
/// remaining elements are unlabeled and the cursor stays put.
#[derive(Clone, Debug)]
pub(crate) struct Labels<'s> {
    rest: Option<&'s str>,
}

impl<'s> Labels<'s> {
    pub(crate) fn new(labels: Option<&'s str>) -> Self {
        Self { rest: labels }
    }

    /// Label of the next element, or `None` if it is unlabeled.
    pub(crate) fn next_label(&mut self) -> Option<&'s str> {
        let (label, rest) = self.rest?.split_once(' ')?;
        self.rest = Some(rest);
        (!label.is_empty()).then_some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::Labels;
    use crate::Vec;

    fn labels_of(packed: Option<&str>, elements: usize) -> Vec<Option<&str>> {
        let mut labels = Labels::new(packed);
        (0..elements).map(|_| labels.next_label()).collect()
    }

    #[test]
    fn test_empty_segment_is_unlabeled() {
        assert_eq!(
            labels_of(Some("x  z "), 3),
            [Some("x"), None, Some("z")]
        );
    }

    #[test]
    fn test_absent_labels() {
        assert_eq!(labels_of(None, 2), [None, None]);
    }

    #[test]
    fn test_missing_trailing_space_leaves_element_unlabeled() {
        assert_eq!(labels_of(Some("a b"), 2), [Some("a"), None]);
    }

    #[test]
    fn test_more_elements_than_segments() {
        assert_eq!(labels_of(Some("a "), 3), [Some("a"), None, None]);
    }

    #[test]
    fn test_all_unlabeled() {
        assert_eq!(labels_of(Some("  "), 2), [None, None]);
    }
}
