//! Host document container
//!
//! A document bundles the node tree with the flat component index the host
//! keeps alongside it. The index is what link resolution consults: instance
//! nodes carry a `componentId`, the index says whether that component lives
//! in a remote library.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Node;

/// Metadata for one entry in the document's component index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    /// Display name of the main component
    pub name: String,
    /// True when the main component lives in an external shared library
    #[serde(default)]
    pub remote: bool,
}

/// A host design document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document display name
    pub name: String,
    /// Flat index of known main components, keyed by component id
    #[serde(default)]
    pub components: HashMap<String, ComponentMeta>,
    /// Root of the node tree
    pub root: Node,
}

impl Document {
    /// Load a document from a JSON file
    pub fn load(path: &Path) -> Result<Document> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse document: {}", path.display()))
    }

    /// Parse a document from a JSON string
    pub fn from_json(contents: &str) -> Result<Document> {
        serde_json::from_str(contents).context("Invalid document JSON")
    }

    /// Look up a node anywhere in the tree by id
    pub fn find_node_by_id(&self, id: &str) -> Option<&Node> {
        self.root.find_by_id(id)
    }
}
