//! 反向分派
//!
//! 节点层次不提供 `accept` 入口，因此由调用方判定节点种类并调用访问者的对应方法。
//! 每次调用恰好触发一个访问者方法，其结果或错误原样返回。

use super::rel_kind::RelKind;
use super::rel_node_visitor::RelNodeVisitor;
use crate::rel::RelNode;

impl<'a> RelKind<'a> {
    /// 调用与种类对应的访问者方法
    pub fn accept<V>(self, visitor: &mut V) -> Result<V::Output, V::Error>
    where
        V: RelNodeVisitor + ?Sized,
    {
        match self {
            RelKind::TableScan(node) => visitor.visit_table_scan(node),
            RelKind::TableFunctionScan(node) => visitor.visit_table_function_scan(node),
            RelKind::Values(node) => visitor.visit_values(node),
            RelKind::Filter(node) => visitor.visit_filter(node),
            RelKind::Calc(node) => visitor.visit_calc(node),
            RelKind::Project(node) => visitor.visit_project(node),
            RelKind::Join(node) => visitor.visit_join(node),
            RelKind::Correlate(node) => visitor.visit_correlate(node),
            RelKind::Union(node) => visitor.visit_union(node),
            RelKind::Intersect(node) => visitor.visit_intersect(node),
            RelKind::Minus(node) => visitor.visit_minus(node),
            RelKind::Aggregate(node) => visitor.visit_aggregate(node),
            RelKind::Match(node) => visitor.visit_match(node),
            RelKind::Sort(node) => visitor.visit_sort(node),
            RelKind::Exchange(node) => visitor.visit_exchange(node),
            RelKind::TableModify(node) => visitor.visit_table_modify(node),
            RelKind::Other(node) => visitor.visit_other(node),
        }
    }
}

/// 访问者入口
///
/// 在原本会调用 `node.accept(visitor)` 的地方改为调用
/// `visitor.reverse_accept(node)`。对所有 `RelNodeVisitor` 统一实现，
/// 实现者不能改写分派逻辑。
pub trait ReverseAccept: RelNodeVisitor {
    fn reverse_accept(&mut self, node: &dyn RelNode) -> Result<Self::Output, Self::Error>;
}

impl<V: RelNodeVisitor + ?Sized> ReverseAccept for V {
    fn reverse_accept(&mut self, node: &dyn RelNode) -> Result<Self::Output, Self::Error> {
        RelKind::classify(node).accept(self)
    }
}
