//! RelNode 访问者 trait
//!
//! 比 `accept` 式访问者更通用：可指定任意输出类型与错误类型。
//! 每个节点种类对应一个 `visit_*` 方法，默认实现都转交给 `visit_other`；
//! `visit_other` 没有默认实现，实现者必须提供，
//! 因此任何节点都一定有处理路径。
//!
//! 新增节点种类时只需再加一个默认转交的方法，已有的访问者无需改动。

use crate::rel::{
    Aggregate, Calc, Correlate, Exchange, Filter, Intersect, Join, Match, Minus, Project,
    RelNode, Sort, TableFunctionScan, TableModify, TableScan, Union, Values,
};

/// RelNode 访问者 trait
///
/// 通过 `ReverseAccept::reverse_accept` 调用，而不是由节点调用。
pub trait RelNodeVisitor {
    /// 访问结果的类型
    type Output;
    /// 访问失败时的错误类型
    type Error;

    /// 访问表扫描节点
    fn visit_table_scan(&mut self, scan: &TableScan) -> Result<Self::Output, Self::Error> {
        self.visit_other(scan)
    }

    /// 访问表函数扫描节点
    fn visit_table_function_scan(
        &mut self,
        scan: &TableFunctionScan,
    ) -> Result<Self::Output, Self::Error> {
        self.visit_other(scan)
    }

    /// 访问常量值节点
    fn visit_values(&mut self, values: &Values) -> Result<Self::Output, Self::Error> {
        self.visit_other(values)
    }

    /// 访问过滤节点
    fn visit_filter(&mut self, filter: &Filter) -> Result<Self::Output, Self::Error> {
        self.visit_other(filter)
    }

    /// 访问计算节点
    fn visit_calc(&mut self, calc: &Calc) -> Result<Self::Output, Self::Error> {
        self.visit_other(calc)
    }

    /// 访问投影节点
    fn visit_project(&mut self, project: &Project) -> Result<Self::Output, Self::Error> {
        self.visit_other(project)
    }

    /// 访问连接节点
    fn visit_join(&mut self, join: &Join) -> Result<Self::Output, Self::Error> {
        self.visit_other(join)
    }

    /// 访问关联连接节点
    fn visit_correlate(&mut self, correlate: &Correlate) -> Result<Self::Output, Self::Error> {
        self.visit_other(correlate)
    }

    /// 访问并集节点
    fn visit_union(&mut self, union: &Union) -> Result<Self::Output, Self::Error> {
        self.visit_other(union)
    }

    /// 访问交集节点
    fn visit_intersect(&mut self, intersect: &Intersect) -> Result<Self::Output, Self::Error> {
        self.visit_other(intersect)
    }

    /// 访问差集节点
    fn visit_minus(&mut self, minus: &Minus) -> Result<Self::Output, Self::Error> {
        self.visit_other(minus)
    }

    /// 访问聚合节点
    fn visit_aggregate(&mut self, aggregate: &Aggregate) -> Result<Self::Output, Self::Error> {
        self.visit_other(aggregate)
    }

    /// 访问模式匹配节点
    fn visit_match(&mut self, matched: &Match) -> Result<Self::Output, Self::Error> {
        self.visit_other(matched)
    }

    /// 访问排序节点
    fn visit_sort(&mut self, sort: &Sort) -> Result<Self::Output, Self::Error> {
        self.visit_other(sort)
    }

    /// 访问数据交换节点
    fn visit_exchange(&mut self, exchange: &Exchange) -> Result<Self::Output, Self::Error> {
        self.visit_other(exchange)
    }

    /// 访问表修改节点
    fn visit_table_modify(&mut self, modify: &TableModify) -> Result<Self::Output, Self::Error> {
        self.visit_other(modify)
    }

    /// 访问其他节点
    ///
    /// 处理目录之外的节点，以及所有未被覆盖的 `visit_*` 方法。
    fn visit_other(&mut self, other: &dyn RelNode) -> Result<Self::Output, Self::Error>;
}

/// 转发到被引用的访问者，便于把 `&mut V` 交给接受访问者的函数
impl<V: RelNodeVisitor + ?Sized> RelNodeVisitor for &mut V {
    type Output = V::Output;
    type Error = V::Error;

    fn visit_table_scan(&mut self, scan: &TableScan) -> Result<Self::Output, Self::Error> {
        (**self).visit_table_scan(scan)
    }

    fn visit_table_function_scan(
        &mut self,
        scan: &TableFunctionScan,
    ) -> Result<Self::Output, Self::Error> {
        (**self).visit_table_function_scan(scan)
    }

    fn visit_values(&mut self, values: &Values) -> Result<Self::Output, Self::Error> {
        (**self).visit_values(values)
    }

    fn visit_filter(&mut self, filter: &Filter) -> Result<Self::Output, Self::Error> {
        (**self).visit_filter(filter)
    }

    fn visit_calc(&mut self, calc: &Calc) -> Result<Self::Output, Self::Error> {
        (**self).visit_calc(calc)
    }

    fn visit_project(&mut self, project: &Project) -> Result<Self::Output, Self::Error> {
        (**self).visit_project(project)
    }

    fn visit_join(&mut self, join: &Join) -> Result<Self::Output, Self::Error> {
        (**self).visit_join(join)
    }

    fn visit_correlate(&mut self, correlate: &Correlate) -> Result<Self::Output, Self::Error> {
        (**self).visit_correlate(correlate)
    }

    fn visit_union(&mut self, union: &Union) -> Result<Self::Output, Self::Error> {
        (**self).visit_union(union)
    }

    fn visit_intersect(&mut self, intersect: &Intersect) -> Result<Self::Output, Self::Error> {
        (**self).visit_intersect(intersect)
    }

    fn visit_minus(&mut self, minus: &Minus) -> Result<Self::Output, Self::Error> {
        (**self).visit_minus(minus)
    }

    fn visit_aggregate(&mut self, aggregate: &Aggregate) -> Result<Self::Output, Self::Error> {
        (**self).visit_aggregate(aggregate)
    }

    fn visit_match(&mut self, matched: &Match) -> Result<Self::Output, Self::Error> {
        (**self).visit_match(matched)
    }

    fn visit_sort(&mut self, sort: &Sort) -> Result<Self::Output, Self::Error> {
        (**self).visit_sort(sort)
    }

    fn visit_exchange(&mut self, exchange: &Exchange) -> Result<Self::Output, Self::Error> {
        (**self).visit_exchange(exchange)
    }

    fn visit_table_modify(&mut self, modify: &TableModify) -> Result<Self::Output, Self::Error> {
        (**self).visit_table_modify(modify)
    }

    fn visit_other(&mut self, other: &dyn RelNode) -> Result<Self::Output, Self::Error> {
        (**self).visit_other(other)
    }
}
