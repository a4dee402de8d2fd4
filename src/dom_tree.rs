use markup5ever::{namespace_url, ns, Attribute, LocalName, QualName};
use std::cell::RefCell;
use std::fmt;
use tendril::StrTendril;

/// An implicit reference to a node inside a [`Tree`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    fn index(self) -> usize {
        self.0
    }
}

/// A document tree kept in a flat arena.
///
/// Nodes are linked by ids rather than pointers, so handles stay `Copy`
/// and the tree can be mutated behind a shared reference.
pub struct Tree<T> {
    nodes: RefCell<Vec<InnerNode<T>>>,
}

/// The stored form of a node: its links plus its payload.
pub struct InnerNode<T> {
    pub parent: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub data: T,
}

impl<T> InnerNode<T> {
    fn new(data: T) -> Self {
        InnerNode {
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
            data,
        }
    }
}

/// A borrowed handle to one node of a [`Tree`].
pub struct NodeRef<'a, T> {
    pub id: NodeId,
    pub(crate) tree: &'a Tree<T>,
}

pub type Node<'a> = NodeRef<'a, NodeData>;

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> PartialEq for NodeRef<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<'a, T> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.id).finish()
    }
}

// Unlink `id` from its parent and siblings. The caller already holds the
// arena borrow.
fn unlink<T>(nodes: &mut [InnerNode<T>], id: NodeId) {
    let (parent, prev, next) = {
        let node = &nodes[id.index()];
        (node.parent, node.prev_sibling, node.next_sibling)
    };

    if let Some(prev) = prev {
        nodes[prev.index()].next_sibling = next;
    }
    if let Some(next) = next {
        nodes[next.index()].prev_sibling = prev;
    }
    if let Some(parent) = parent {
        if nodes[parent.index()].first_child == Some(id) {
            nodes[parent.index()].first_child = next;
        }
        if nodes[parent.index()].last_child == Some(id) {
            nodes[parent.index()].last_child = prev;
        }
    }

    let node = &mut nodes[id.index()];
    node.parent = None;
    node.prev_sibling = None;
    node.next_sibling = None;
}

impl<T> Tree<T> {
    /// Creates a tree holding only a root node with the given payload.
    pub fn new(root_data: T) -> Self {
        Tree {
            nodes: RefCell::new(vec![InnerNode::new(root_data)]),
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> NodeRef<T> {
        self.get(self.root_id())
    }

    pub fn get(&self, id: NodeId) -> NodeRef<T> {
        NodeRef { id, tree: self }
    }

    /// Allocates a detached node and returns its id.
    pub fn create_node(&self, data: T) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(InnerNode::new(data));
        id
    }

    pub fn query_node<F, R>(&self, id: &NodeId, f: F) -> R
    where
        F: FnOnce(&InnerNode<T>) -> R,
    {
        let nodes = self.nodes.borrow();
        f(&nodes[id.index()])
    }

    pub fn update_node<F, R>(&self, id: &NodeId, f: F) -> R
    where
        F: FnOnce(&mut InnerNode<T>) -> R,
    {
        let mut nodes = self.nodes.borrow_mut();
        f(&mut nodes[id.index()])
    }

    /// Runs `f` over two nodes under a single arena borrow.
    pub fn compare_node<F, R>(&self, a: &NodeId, b: &NodeId, f: F) -> R
    where
        F: FnOnce(&InnerNode<T>, &InnerNode<T>) -> R,
    {
        let nodes = self.nodes.borrow();
        f(&nodes[a.index()], &nodes[b.index()])
    }

    pub fn parent_of(&self, id: &NodeId) -> Option<NodeRef<T>> {
        self.query_node(id, |node| node.parent).map(|id| self.get(id))
    }

    pub fn prev_sibling_of(&self, id: &NodeId) -> Option<NodeRef<T>> {
        self.query_node(id, |node| node.prev_sibling)
            .map(|id| self.get(id))
    }

    pub fn next_sibling_of(&self, id: &NodeId) -> Option<NodeRef<T>> {
        self.query_node(id, |node| node.next_sibling)
            .map(|id| self.get(id))
    }

    pub fn last_child_of(&self, id: &NodeId) -> Option<NodeRef<T>> {
        self.query_node(id, |node| node.last_child)
            .map(|id| self.get(id))
    }

    pub fn children_of(&self, id: &NodeId) -> Vec<NodeRef<T>> {
        let ids = {
            let nodes = self.nodes.borrow();
            child_ids(&nodes, *id)
        };
        ids.into_iter().map(|id| self.get(id)).collect()
    }

    /// Ids of every descendant of `id`, depth first, in document order.
    pub fn descendant_ids_of(&self, id: &NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack = child_ids(&nodes, *id);
        stack.reverse();

        while let Some(id) = stack.pop() {
            out.push(id);
            let mut children = child_ids(&nodes, id);
            children.reverse();
            stack.extend(children);
        }

        out
    }

    /// Detaches `child` from wherever it is and appends it under `parent`.
    pub fn append_child_of(&self, parent: &NodeId, child: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        unlink(&mut nodes, *child);

        let last = nodes[parent.index()].last_child;
        nodes[child.index()].parent = Some(*parent);
        nodes[child.index()].prev_sibling = last;
        match last {
            Some(last) => nodes[last.index()].next_sibling = Some(*child),
            None => nodes[parent.index()].first_child = Some(*child),
        }
        nodes[parent.index()].last_child = Some(*child);
    }

    pub fn append_child_data_of(&self, parent: &NodeId, data: T) {
        let id = self.create_node(data);
        self.append_child_of(parent, &id);
    }

    /// Inserts `new` as the sibling immediately before `sibling`.
    pub fn append_prev_sibling_of(&self, sibling: &NodeId, new: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        unlink(&mut nodes, *new);

        let parent = nodes[sibling.index()].parent;
        let prev = nodes[sibling.index()].prev_sibling;

        nodes[new.index()].parent = parent;
        nodes[new.index()].prev_sibling = prev;
        nodes[new.index()].next_sibling = Some(*sibling);
        nodes[sibling.index()].prev_sibling = Some(*new);

        match prev {
            Some(prev) => nodes[prev.index()].next_sibling = Some(*new),
            None => {
                if let Some(parent) = parent {
                    nodes[parent.index()].first_child = Some(*new);
                }
            }
        }
    }

    pub fn remove_from_parent(&self, id: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        unlink(&mut nodes, *id);
    }

    /// Moves all children of `id` to the end of `new_parent`'s child list,
    /// preserving their order. With `None` the children are detached.
    pub fn reparent_children_of(&self, id: &NodeId, new_parent: Option<NodeId>) {
        let mut nodes = self.nodes.borrow_mut();
        let children = child_ids(&nodes, *id);

        nodes[id.index()].first_child = None;
        nodes[id.index()].last_child = None;

        for child in children {
            match new_parent {
                Some(parent) => {
                    let last = nodes[parent.index()].last_child;
                    nodes[child.index()].parent = Some(parent);
                    nodes[child.index()].prev_sibling = last;
                    nodes[child.index()].next_sibling = None;
                    match last {
                        Some(last) => nodes[last.index()].next_sibling = Some(child),
                        None => nodes[parent.index()].first_child = Some(child),
                    }
                    nodes[parent.index()].last_child = Some(child);
                }
                None => {
                    nodes[child.index()].parent = None;
                    nodes[child.index()].prev_sibling = None;
                    nodes[child.index()].next_sibling = None;
                }
            }
        }
    }
}

fn child_ids<T>(nodes: &[InnerNode<T>], id: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut next = nodes[id.index()].first_child;
    while let Some(child) = next {
        out.push(child);
        next = nodes[child.index()].next_sibling;
    }
    out
}

impl<'a, T> NodeRef<'a, T> {
    pub fn query<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InnerNode<T>) -> R,
    {
        self.tree.query_node(&self.id, f)
    }

    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InnerNode<T>) -> R,
    {
        self.tree.update_node(&self.id, f)
    }

    pub fn parent(&self) -> Option<Self> {
        self.tree.parent_of(&self.id)
    }

    pub fn prev_sibling(&self) -> Option<Self> {
        self.tree.prev_sibling_of(&self.id)
    }

    pub fn next_sibling(&self) -> Option<Self> {
        self.tree.next_sibling_of(&self.id)
    }

    pub fn children(&self) -> Vec<Self> {
        self.tree.children_of(&self.id)
    }

    /// Every descendant of this node, in document order.
    pub fn descendants(&self) -> Vec<Self> {
        self.tree
            .descendant_ids_of(&self.id)
            .into_iter()
            .map(|id| self.tree.get(id))
            .collect()
    }
}

/// The payload of a document tree node.
pub enum NodeData {
    Document,
    Doctype {
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    },
    Text {
        contents: StrTendril,
    },
    Comment {
        contents: StrTendril,
    },
    Element(Element),
    ProcessingInstruction {
        target: StrTendril,
        contents: StrTendril,
    },
}

/// An element node: qualified name plus attributes.
pub struct Element {
    pub name: QualName,
    pub attrs: Vec<Attribute>,
    pub template_contents: Option<NodeId>,
    pub mathml_annotation_xml_integration_point: bool,
}

impl Element {
    pub fn new(
        name: QualName,
        attrs: Vec<Attribute>,
        template_contents: Option<NodeId>,
        mathml_annotation_xml_integration_point: bool,
    ) -> Element {
        Element {
            name,
            attrs,
            template_contents,
            mathml_annotation_xml_integration_point,
        }
    }
}

/// Extends a text node in place. Returns false when the node holds
/// anything but text.
pub(crate) fn append_to_existing_text(node: &mut InnerNode<NodeData>, text: &str) -> bool {
    match node.data {
        NodeData::Text { ref mut contents } => {
            contents.push_slice(text);
            true
        }
        _ => false,
    }
}

impl<'a> NodeRef<'a, NodeData> {
    pub fn is_document(&self) -> bool {
        self.query(|node| matches!(node.data, NodeData::Document))
    }

    pub fn is_element(&self) -> bool {
        self.query(|node| matches!(node.data, NodeData::Element(_)))
    }

    pub fn is_text(&self) -> bool {
        self.query(|node| matches!(node.data, NodeData::Text { .. }))
    }

    /// The value of the named attribute, if this is an element carrying it.
    pub fn attr(&self, name: &str) -> Option<StrTendril> {
        self.query(|node| match node.data {
            NodeData::Element(ref e) => e
                .attrs
                .iter()
                .find(|attr| &*attr.name.local == name)
                .map(|attr| attr.value.clone()),
            _ => None,
        })
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Sets the named attribute, replacing any existing value.
    pub fn set_attr(&self, name: &str, val: &str) {
        self.update(|node| {
            if let NodeData::Element(ref mut e) = node.data {
                match e.attrs.iter_mut().find(|attr| &*attr.name.local == name) {
                    Some(attr) => attr.value = StrTendril::from(val),
                    None => e.attrs.push(Attribute {
                        name: QualName::new(None, ns!(), LocalName::from(name)),
                        value: StrTendril::from(val),
                    }),
                }
            }
        })
    }

    pub fn remove_attr(&self, name: &str) {
        self.update(|node| {
            if let NodeData::Element(ref mut e) = node.data {
                e.attrs.retain(|attr| &*attr.name.local != name);
            }
        })
    }

    /// The concatenated contents of every text node in this subtree.
    pub fn text(&self) -> StrTendril {
        let mut out = StrTendril::new();
        for descendant in self.descendants() {
            descendant.query(|node| {
                if let NodeData::Text { ref contents } = node.data {
                    out.push_tendril(contents);
                }
            });
        }
        out
    }
}
