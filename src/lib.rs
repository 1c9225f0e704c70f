//! linklint library
//!
//! Scans a design document's node tree for component instances that are not
//! linked to a shared library and reports them with hierarchical context.
//! The core is split into an instance locator (pure traversal) and a link
//! auditor (async classification plus parent-issue reconnection); the host
//! document, resolver, and presentation layer plug in at trait seams.

pub mod config;
pub mod models;
pub mod report;
pub mod scan;
pub mod services;
pub mod surface;

// Re-export commonly used types for convenience
pub use models::{ComponentMeta, Document, Node, NodeKind};
pub use scan::{audit, locate, AuditOptions, InstanceRecord, Issue, ScanError, ScanResult};
pub use services::{ComponentResolver, DocumentResolver, MainComponent};
pub use surface::{DocumentSurface, HostSurface, SurfaceBridge, SurfaceRequest};
