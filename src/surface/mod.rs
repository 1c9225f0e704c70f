//! Host-surface bridge
//!
//! One request handler serves every host surface through a single
//! abstraction: the surface supplies node lookup by id (answering
//! immediately or asynchronously, the trait covers both), and requests
//! arrive on a channel with fire-and-forget replies. A dropped reply
//! receiver cancels delivery only; the scan it belongs to still runs to
//! completion.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::models::Node;
use crate::scan::{self, AuditOptions, ScanError, ScanResult};
use crate::services::ComponentResolver;

/// The current host surface
///
/// A synchronous surface implements this by answering immediately.
#[async_trait]
pub trait HostSurface: Send + Sync {
    /// Look up a node anywhere in the host document by id
    async fn node_by_id(&self, id: &str) -> Option<Node>;
}

/// Surface backed by an in-memory document (immediate lookups)
pub struct DocumentSurface {
    document: crate::models::Document,
}

impl DocumentSurface {
    pub fn new(document: crate::models::Document) -> Self {
        Self { document }
    }
}

#[async_trait]
impl HostSurface for DocumentSurface {
    async fn node_by_id(&self, id: &str) -> Option<Node> {
        self.document.find_node_by_id(id).cloned()
    }
}

/// Request sent from the presentation layer to the scan handler
pub enum SurfaceRequest {
    /// Scan the subtree under the chosen root
    Scan {
        root_id: Option<String>,
        reply: oneshot::Sender<Result<ScanResult, ScanError>>,
    },
    /// Resolve a previously reported node id (selection glue)
    Select {
        node_id: String,
        reply: oneshot::Sender<Result<Node, ScanError>>,
    },
}

/// Handle for sending requests to a running surface loop
///
/// The loop processes requests one at a time, which serializes any second
/// scan requested while one is outstanding.
pub struct SurfaceBridge {
    tx: mpsc::UnboundedSender<SurfaceRequest>,
}

impl SurfaceBridge {
    /// Spawn the handler loop for a surface/resolver pair
    pub fn spawn<S, R>(surface: S, resolver: R, options: AuditOptions) -> Self
    where
        S: HostSurface + 'static,
        R: ComponentResolver + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_loop(surface, resolver, options, rx));
        Self { tx }
    }

    /// Request a scan and wait for its result
    pub async fn scan(&self, root_id: Option<String>) -> Result<ScanResult> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(SurfaceRequest::Scan { root_id, reply })
            .ok()
            .context("Surface handler is gone")?;
        Ok(rx.await.context("Surface handler dropped the scan")??)
    }

    /// Raw request channel, for collaborators that manage their own replies
    pub fn sender(&self) -> mpsc::UnboundedSender<SurfaceRequest> {
        self.tx.clone()
    }

    /// Resolve a reported node id back to a node
    pub async fn select(&self, node_id: &str) -> Result<Node> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(SurfaceRequest::Select {
                node_id: node_id.to_string(),
                reply,
            })
            .ok()
            .context("Surface handler is gone")?;
        Ok(rx.await.context("Surface handler dropped the request")??)
    }
}

async fn run_loop<S, R>(
    surface: S,
    resolver: R,
    options: AuditOptions,
    mut rx: mpsc::UnboundedReceiver<SurfaceRequest>,
) where
    S: HostSurface,
    R: ComponentResolver,
{
    while let Some(request) = rx.recv().await {
        match request {
            SurfaceRequest::Scan { root_id, reply } => {
                let result = handle_scan(&surface, &resolver, &options, root_id).await;
                // Fire and forget: a dropped receiver only cancels delivery
                let _ = reply.send(result);
            }
            SurfaceRequest::Select { node_id, reply } => {
                let result = surface
                    .node_by_id(&node_id)
                    .await
                    .ok_or(ScanError::NotFound(node_id));
                let _ = reply.send(result);
            }
        }
    }
}

/// Validate the root and run one scan
async fn handle_scan<S, R>(
    surface: &S,
    resolver: &R,
    options: &AuditOptions,
    root_id: Option<String>,
) -> Result<ScanResult, ScanError>
where
    S: HostSurface,
    R: ComponentResolver,
{
    let Some(root_id) = root_id else {
        return Err(ScanError::NoRoot);
    };
    let Some(root) = surface.node_by_id(&root_id).await else {
        return Err(ScanError::NoRoot);
    };
    scan::scan(resolver, &root, options).await
}
