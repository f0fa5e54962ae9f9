//! 分派追踪访问者
//!
//! 包装任意访问者，在每次分派时记录一条 trace 日志，再转交给被包装访问者的同名方法。
//! 结果与错误原样返回，路由不变。

use log::trace;

use super::rel_kind::RelKindTag;
use super::rel_node_visitor::RelNodeVisitor;
use crate::config::DispatchConfig;
use crate::rel::{
    Aggregate, Calc, Correlate, Exchange, Filter, Intersect, Join, Match, Minus, Project,
    RelNode, Sort, TableFunctionScan, TableModify, TableScan, Union, Values,
};

/// 分派追踪访问者
#[derive(Debug)]
pub struct TracingVisitor<V> {
    inner: V,
    enabled: bool,
    dispatched: u64,
}

impl<V: RelNodeVisitor> TracingVisitor<V> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            enabled: true,
            dispatched: 0,
        }
    }

    /// 根据配置决定是否输出追踪日志
    pub fn from_config(inner: V, config: &DispatchConfig) -> Self {
        Self {
            inner,
            enabled: config.trace,
            dispatched: 0,
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }

    /// 已分派的节点数
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn record(&mut self, kind: RelKindTag, node: &dyn RelNode) {
        self.dispatched += 1;
        if self.enabled {
            trace!(
                "dispatch #{}: {} -> visit_{} (node {})",
                self.dispatched,
                node.type_name(),
                kind,
                node.id()
            );
        }
    }
}

impl<V: RelNodeVisitor> RelNodeVisitor for TracingVisitor<V> {
    type Output = V::Output;
    type Error = V::Error;

    fn visit_table_scan(&mut self, scan: &TableScan) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::TableScan, scan);
        self.inner.visit_table_scan(scan)
    }

    fn visit_table_function_scan(
        &mut self,
        scan: &TableFunctionScan,
    ) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::TableFunctionScan, scan);
        self.inner.visit_table_function_scan(scan)
    }

    fn visit_values(&mut self, values: &Values) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Values, values);
        self.inner.visit_values(values)
    }

    fn visit_filter(&mut self, filter: &Filter) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Filter, filter);
        self.inner.visit_filter(filter)
    }

    fn visit_calc(&mut self, calc: &Calc) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Calc, calc);
        self.inner.visit_calc(calc)
    }

    fn visit_project(&mut self, project: &Project) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Project, project);
        self.inner.visit_project(project)
    }

    fn visit_join(&mut self, join: &Join) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Join, join);
        self.inner.visit_join(join)
    }

    fn visit_correlate(&mut self, correlate: &Correlate) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Correlate, correlate);
        self.inner.visit_correlate(correlate)
    }

    fn visit_union(&mut self, union: &Union) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Union, union);
        self.inner.visit_union(union)
    }

    fn visit_intersect(&mut self, intersect: &Intersect) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Intersect, intersect);
        self.inner.visit_intersect(intersect)
    }

    fn visit_minus(&mut self, minus: &Minus) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Minus, minus);
        self.inner.visit_minus(minus)
    }

    fn visit_aggregate(&mut self, aggregate: &Aggregate) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Aggregate, aggregate);
        self.inner.visit_aggregate(aggregate)
    }

    fn visit_match(&mut self, matched: &Match) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Match, matched);
        self.inner.visit_match(matched)
    }

    fn visit_sort(&mut self, sort: &Sort) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Sort, sort);
        self.inner.visit_sort(sort)
    }

    fn visit_exchange(&mut self, exchange: &Exchange) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Exchange, exchange);
        self.inner.visit_exchange(exchange)
    }

    fn visit_table_modify(&mut self, modify: &TableModify) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::TableModify, modify);
        self.inner.visit_table_modify(modify)
    }

    fn visit_other(&mut self, other: &dyn RelNode) -> Result<Self::Output, Self::Error> {
        self.record(RelKindTag::Other, other);
        self.inner.visit_other(other)
    }
}
