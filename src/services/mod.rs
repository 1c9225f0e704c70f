//! Service layer
//!
//! Abstracts the host capabilities the scan depends on, so the core never
//! talks to a concrete host directly.

mod resolver;

pub use resolver::{ComponentResolver, DocumentResolver, MainComponent};

#[cfg(test)]
pub use resolver::MockComponentResolver;
