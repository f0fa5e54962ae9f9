//! relvisitor - dispatch over relational-algebra plan nodes
//!
//! The node hierarchy in `rel` exposes no `accept` entry point, so visitors
//! are invoked from the caller side: `visitor.reverse_accept(node)` classifies
//! the node by its runtime type and calls exactly one `visit_*` method. Every
//! per-kind method defaults to the mandatory `visit_other`, so each node is
//! always handled and results or errors come back unchanged.

pub mod config;
pub mod core;
pub mod rel;
pub mod utils;
pub mod visitor;

pub use crate::core::error::{RelError, RelResult, RelVisitError};
pub use crate::rel::{RelNode, RelNodeRef};
pub use crate::visitor::{RelKind, RelKindTag, RelNodeVisitor, ReverseAccept, TracingVisitor};
