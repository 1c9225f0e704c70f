//! Node tree types
//!
//! Nodes come from the host document as JSON. The kind tag is modeled as an
//! enum with a catch-all variant so unknown node types stay traversable
//! without dynamic property probing.

use serde::{Deserialize, Serialize};

/// Type tag of a document node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    /// A placed usage of a shared component
    Instance,
    Frame,
    Component,
    ComponentSet,
    /// Any other node type - opaque, traversed only for children
    #[serde(untagged)]
    Other(String),
}

impl NodeKind {
    /// Whether this kind is accepted as a scan root
    pub fn is_scan_root(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame | NodeKind::Component | NodeKind::ComponentSet
        )
    }

    /// Display form of the type tag
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Instance => "INSTANCE",
            NodeKind::Frame => "FRAME",
            NodeKind::Component => "COMPONENT",
            NodeKind::ComponentSet => "COMPONENT_SET",
            NodeKind::Other(tag) => tag,
        }
    }
}

/// A node in the host document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Stable identifier assigned by the host
    pub id: String,
    /// Display name
    pub name: String,
    /// Type tag
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Main-component reference (instances only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    /// Ordered children, if this node type has any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    pub fn is_instance(&self) -> bool {
        self.kind == NodeKind::Instance
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Children in document order (empty slice for leaves)
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Depth-first lookup by node id
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_id(id))
    }
}
