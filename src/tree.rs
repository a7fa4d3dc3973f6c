//! The slice of the host's stylesheet tree the linter needs.
//!
//! The host owns parsing. It hands over rule-like nodes whose direct children
//! are declarations (with source lines) and nested rule-like nodes.

use serde::{Deserialize, Serialize};

/// Opaque reference to a host node, returned with every violation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

/// A single `property: value` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    /// 1-based source line.
    pub line: usize,
    #[serde(default)]
    pub node: NodeId,
    /// Nested property blocks (`font: { family: x; size: y }`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<Node>,
}

impl Declaration {
    pub fn new(property: impl Into<String>, line: usize, node: NodeId) -> Self {
        Declaration {
            property: property.into(),
            line,
            node,
            nested: Vec::new(),
        }
    }
}

/// The closed set of rule-like node kinds the linter visits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A rule set, `@media` block or mixin body.
    Block,
    /// An `@if` branch, optionally followed by `@else`.
    Conditional {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        else_branch: Option<Box<Node>>,
    },
    /// Declarations without an enclosing block.
    DeclarationList,
}

/// A direct child of a rule-like node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Child {
    Declaration(Declaration),
    Node(Node),
}

/// A rule-like node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(default)]
    pub id: NodeId,
    #[serde(default)]
    pub children: Vec<Child>,
}

impl Node {
    pub fn new(kind: NodeKind, id: NodeId, children: Vec<Child>) -> Self {
        Node { kind, id, children }
    }

    pub fn block(id: NodeId, children: Vec<Child>) -> Self {
        Node::new(NodeKind::Block, id, children)
    }

    /// Direct declaration children, in source order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.children.iter().filter_map(|c| match c {
            Child::Declaration(d) => Some(d),
            Child::Node(_) => None,
        })
    }
}

/// Visitor over the rule-like nodes of a tree.
///
/// [`walk`] calls `visit` for `node` itself and then for every nested node in
/// source order: nested rules, nested property blocks and, last, a
/// conditional's else branch.
pub trait Visitor {
    fn visit(&mut self, node: &Node);
}

/// Pre-order traversal driving a [`Visitor`].
pub fn walk(node: &Node, visitor: &mut dyn Visitor) {
    visitor.visit(node);
    for child in &node.children {
        match child {
            Child::Node(nested) => walk(nested, visitor),
            Child::Declaration(decl) => {
                for nested in &decl.nested {
                    walk(nested, visitor);
                }
            }
        }
    }
    if let NodeKind::Conditional {
        else_branch: Some(alternate),
    } = &node.kind
    {
        walk(alternate, visitor);
    }
}
