//! Main-component resolution
//!
//! The host owns the truth about which main component an instance derives
//! from and whether that component lives in a remote library. The resolver
//! trait is the seam the host plugs into; `DocumentResolver` answers from a
//! document's flat component index.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{ComponentMeta, Document, Node};

/// The shared component definition an instance is derived from
#[derive(Debug, Clone, PartialEq)]
pub struct MainComponent {
    pub id: String,
    pub name: String,
    /// True when the component originates from an external shared library
    pub remote: bool,
}

/// Resolves an instance node to its main component
///
/// Resolution is asynchronous and may fail; callers treat failure the same
/// as an absent main component.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComponentResolver: Send + Sync {
    /// Resolve the main component for an instance node, if it has one
    async fn resolve_main_component(&self, node: &Node) -> Result<Option<MainComponent>>;
}

/// Resolver backed by a document's component index
pub struct DocumentResolver {
    components: HashMap<String, ComponentMeta>,
}

impl DocumentResolver {
    pub fn new(document: &Document) -> Self {
        Self {
            components: document.components.clone(),
        }
    }
}

#[async_trait]
impl ComponentResolver for DocumentResolver {
    async fn resolve_main_component(&self, node: &Node) -> Result<Option<MainComponent>> {
        let Some(component_id) = node.component_id.as_deref() else {
            return Ok(None);
        };
        Ok(self.components.get(component_id).map(|meta| MainComponent {
            id: component_id.to_string(),
            name: meta.name.clone(),
            remote: meta.remote,
        }))
    }
}
