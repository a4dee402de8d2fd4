use crate::dom_tree::Node;
use crate::matcher::Matcher;
use crate::Document;
use std::vec::IntoIter;

impl Document {
    /// Selects all nodes matching the given CSS selector.
    ///
    /// Panics when the selector fails to parse; use [`Document::try_select`]
    /// for caller-supplied selectors.
    pub fn select(&self, sel: &str) -> Selection {
        let matcher = Matcher::new(sel).unwrap();
        self.find_with_matcher(&matcher)
    }

    /// Like [`Document::select`], returning `None` on an invalid selector.
    pub fn try_select(&self, sel: &str) -> Option<Selection> {
        Matcher::new(sel).ok().map(|matcher| self.find_with_matcher(&matcher))
    }

    pub(crate) fn find_with_matcher(&self, matcher: &Matcher) -> Selection {
        let nodes = self
            .root()
            .descendants()
            .into_iter()
            .filter(|node| node.is_element() && matcher.match_element(node))
            .collect();

        Selection { nodes }
    }
}

/// A set of matched nodes, in document order.
#[derive(Debug)]
pub struct Selection<'a> {
    pub(crate) nodes: Vec<Node<'a>>,
}

impl<'a> Selection<'a> {
    /// Selects nodes matching the given CSS selector among the descendants
    /// of each node in the selection.
    pub fn select(&self, sel: &str) -> Selection<'a> {
        let matcher = Matcher::new(sel).unwrap();
        let nodes = self
            .nodes
            .iter()
            .flat_map(|node| node.descendants())
            .filter(|node| node.is_element() && matcher.match_element(node))
            .collect();

        Selection { nodes }
    }

    /// Iterates over the matched nodes as single-node selections.
    pub fn iter(&self) -> Selections<Node<'a>> {
        Selections::new(self.nodes.clone().into_iter())
    }

    pub fn nodes(&self) -> &[Node<'a>] {
        &self.nodes
    }
}

pub struct Selections<I> {
    iter: IntoIter<I>,
}

impl<I> Selections<I> {
    fn new(iter: IntoIter<I>) -> Self {
        Self { iter }
    }
}

impl<'a> Iterator for Selections<Node<'a>> {
    type Item = Selection<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|node| Selection { nodes: vec![node] })
    }
}
