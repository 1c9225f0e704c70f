//! Data model for host design documents
//!
//! Rust types for the node tree a host document exposes: a tagged node kind,
//! nodes with capability queries (children, identity, display name), and the
//! document container with its flat component index.

mod document;
mod node;

pub use document::{ComponentMeta, Document};
pub use node::{Node, NodeKind};
