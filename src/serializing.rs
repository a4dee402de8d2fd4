use crate::dom_tree::{Node, NodeData, NodeId, NodeRef};
use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::QualName;
use markup5ever::Attribute;
use std::io;
use tendril::StrTendril;

/// A node wrapper implementing the html5ever serialization protocol.
pub struct SerializableNodeRef<'a>(Node<'a>);

impl<'a> From<Node<'a>> for SerializableNodeRef<'a> {
    fn from(node: Node<'a>) -> Self {
        SerializableNodeRef(node)
    }
}

enum SerializeOp {
    Open(NodeId),
    Close(QualName),
}

// Owned snapshot of one node, so the serializer callbacks can borrow from
// it without holding the arena open.
enum Step {
    Element(QualName, Vec<Attribute>),
    Text(StrTendril),
    Comment(StrTendril),
    Doctype(StrTendril),
    ProcessingInstruction(StrTendril, StrTendril),
    Container,
}

impl<'a> Serialize for SerializableNodeRef<'a> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let tree = self.0.tree;
        let mut ops = match traversal_scope {
            TraversalScope::IncludeNode => vec![SerializeOp::Open(self.0.id)],
            TraversalScope::ChildrenOnly(_) => tree
                .children_of(&self.0.id)
                .into_iter()
                .rev()
                .map(|node| SerializeOp::Open(node.id))
                .collect(),
        };

        while let Some(op) = ops.pop() {
            match op {
                SerializeOp::Open(id) => {
                    let step = tree.query_node(&id, |node| match node.data {
                        NodeData::Element(ref e) => Step::Element(e.name.clone(), e.attrs.clone()),
                        NodeData::Text { ref contents } => Step::Text(contents.clone()),
                        NodeData::Comment { ref contents } => Step::Comment(contents.clone()),
                        NodeData::Doctype { ref name, .. } => Step::Doctype(name.clone()),
                        NodeData::ProcessingInstruction {
                            ref target,
                            ref contents,
                        } => Step::ProcessingInstruction(target.clone(), contents.clone()),
                        NodeData::Document => Step::Container,
                    });

                    match step {
                        Step::Element(name, attrs) => {
                            serializer.start_elem(
                                name.clone(),
                                attrs.iter().map(|attr| (&attr.name, &attr.value[..])),
                            )?;
                            ops.push(SerializeOp::Close(name));
                            for child in tree.children_of(&id).into_iter().rev() {
                                ops.push(SerializeOp::Open(child.id));
                            }
                        }
                        Step::Text(contents) => serializer.write_text(&contents)?,
                        Step::Comment(contents) => serializer.write_comment(&contents)?,
                        Step::Doctype(name) => serializer.write_doctype(&name)?,
                        Step::ProcessingInstruction(target, contents) => {
                            serializer.write_processing_instruction(&target, &contents)?
                        }
                        Step::Container => {
                            for child in tree.children_of(&id).into_iter().rev() {
                                ops.push(SerializeOp::Open(child.id));
                            }
                        }
                    }
                }
                SerializeOp::Close(name) => serializer.end_elem(name)?,
            }
        }

        Ok(())
    }
}

impl<'a> NodeRef<'a, NodeData> {
    /// Serializes the subtree rooted at this node back to HTML text.
    pub fn html(&self) -> StrTendril {
        let mut buf = Vec::new();
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::IncludeNode,
            ..Default::default()
        };

        serialize(&mut buf, &SerializableNodeRef::from(*self), opts).unwrap();
        StrTendril::try_from_byte_slice(&buf).unwrap()
    }
}
