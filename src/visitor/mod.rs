//! RelNode 访问者
//!
//! 节点层次无法添加分派入口，这里用调用方的运行时类型判定代替双重分派：
//! - `rel_kind`：节点种类目录
//! - `rel_node_visitor`：访问者 trait，每个种类一个可覆盖的方法，外加必须实现的 `visit_other`
//! - `reverse_accept`：判定节点种类并调用对应方法
//! - `tracing_visitor`：可选的分派追踪包装

pub mod rel_kind;
pub mod rel_node_visitor;
pub mod reverse_accept;
pub mod tracing_visitor;

pub use rel_kind::{RelKind, RelKindTag};
pub use rel_node_visitor::RelNodeVisitor;
pub use reverse_accept::ReverseAccept;
pub use tracing_visitor::TracingVisitor;
