//! 关系节点分类目录
//!
//! 定义访问者能够识别的封闭节点种类集合。种类判定只依赖节点的运行时类型，
//! 不读取节点内容；不属于任何已知种类的节点归为 `Other`。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rel::{
    Aggregate, Calc, Correlate, Exchange, Filter, Intersect, Join, Match, Minus, Project,
    RelNode, Sort, TableFunctionScan, TableModify, TableScan, Union, Values,
};

/// 节点种类标签（不携带节点）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelKindTag {
    TableScan,
    TableFunctionScan,
    Values,
    Filter,
    Calc,
    Project,
    Join,
    Correlate,
    Union,
    Intersect,
    Minus,
    Aggregate,
    Match,
    Sort,
    Exchange,
    TableModify,
    /// 目录之外的节点
    Other,
}

impl RelKindTag {
    /// 已识别的种类，按分派时的判定顺序排列
    pub const CATALOG: [RelKindTag; 16] = [
        RelKindTag::TableScan,
        RelKindTag::TableFunctionScan,
        RelKindTag::Values,
        RelKindTag::Filter,
        RelKindTag::Calc,
        RelKindTag::Project,
        RelKindTag::Join,
        RelKindTag::Correlate,
        RelKindTag::Union,
        RelKindTag::Intersect,
        RelKindTag::Minus,
        RelKindTag::Match,
        RelKindTag::Sort,
        RelKindTag::Exchange,
        RelKindTag::Aggregate,
        RelKindTag::TableModify,
    ];

    /// 获取种类名称
    pub fn name(&self) -> &'static str {
        match self {
            RelKindTag::TableScan => "table_scan",
            RelKindTag::TableFunctionScan => "table_function_scan",
            RelKindTag::Values => "values",
            RelKindTag::Filter => "filter",
            RelKindTag::Calc => "calc",
            RelKindTag::Project => "project",
            RelKindTag::Join => "join",
            RelKindTag::Correlate => "correlate",
            RelKindTag::Union => "union",
            RelKindTag::Intersect => "intersect",
            RelKindTag::Minus => "minus",
            RelKindTag::Aggregate => "aggregate",
            RelKindTag::Match => "match",
            RelKindTag::Sort => "sort",
            RelKindTag::Exchange => "exchange",
            RelKindTag::TableModify => "table_modify",
            RelKindTag::Other => "other",
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, RelKindTag::Other)
    }

    /// 判定节点所属种类
    pub fn of(node: &dyn RelNode) -> RelKindTag {
        RelKind::classify(node).tag()
    }
}

impl fmt::Display for RelKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 携带具体节点引用的种类
///
/// 在边界处把 `&dyn RelNode` 包装成本地枚举，之后对其做穷尽匹配，
/// 无需再次检查运行时类型。
#[derive(Debug, Clone, Copy)]
pub enum RelKind<'a> {
    TableScan(&'a TableScan),
    TableFunctionScan(&'a TableFunctionScan),
    Values(&'a Values),
    Filter(&'a Filter),
    Calc(&'a Calc),
    Project(&'a Project),
    Join(&'a Join),
    Correlate(&'a Correlate),
    Union(&'a Union),
    Intersect(&'a Intersect),
    Minus(&'a Minus),
    Aggregate(&'a Aggregate),
    Match(&'a Match),
    Sort(&'a Sort),
    Exchange(&'a Exchange),
    TableModify(&'a TableModify),
    Other(&'a dyn RelNode),
}

impl<'a> RelKind<'a> {
    /// 按固定顺序逐一判定节点类型，命中第一个即返回
    ///
    /// 各种类互斥，因此判定顺序不影响结果。
    pub fn classify(node: &'a dyn RelNode) -> Self {
        let any = node.as_any();
        if let Some(scan) = any.downcast_ref::<TableScan>() {
            RelKind::TableScan(scan)
        } else if let Some(scan) = any.downcast_ref::<TableFunctionScan>() {
            RelKind::TableFunctionScan(scan)
        } else if let Some(values) = any.downcast_ref::<Values>() {
            RelKind::Values(values)
        } else if let Some(filter) = any.downcast_ref::<Filter>() {
            RelKind::Filter(filter)
        } else if let Some(calc) = any.downcast_ref::<Calc>() {
            RelKind::Calc(calc)
        } else if let Some(project) = any.downcast_ref::<Project>() {
            RelKind::Project(project)
        } else if let Some(join) = any.downcast_ref::<Join>() {
            RelKind::Join(join)
        } else if let Some(correlate) = any.downcast_ref::<Correlate>() {
            RelKind::Correlate(correlate)
        } else if let Some(union) = any.downcast_ref::<Union>() {
            RelKind::Union(union)
        } else if let Some(intersect) = any.downcast_ref::<Intersect>() {
            RelKind::Intersect(intersect)
        } else if let Some(minus) = any.downcast_ref::<Minus>() {
            RelKind::Minus(minus)
        } else if let Some(matched) = any.downcast_ref::<Match>() {
            RelKind::Match(matched)
        } else if let Some(sort) = any.downcast_ref::<Sort>() {
            RelKind::Sort(sort)
        } else if let Some(exchange) = any.downcast_ref::<Exchange>() {
            RelKind::Exchange(exchange)
        } else if let Some(aggregate) = any.downcast_ref::<Aggregate>() {
            RelKind::Aggregate(aggregate)
        } else if let Some(modify) = any.downcast_ref::<TableModify>() {
            RelKind::TableModify(modify)
        } else {
            RelKind::Other(node)
        }
    }

    pub fn tag(&self) -> RelKindTag {
        match self {
            RelKind::TableScan(_) => RelKindTag::TableScan,
            RelKind::TableFunctionScan(_) => RelKindTag::TableFunctionScan,
            RelKind::Values(_) => RelKindTag::Values,
            RelKind::Filter(_) => RelKindTag::Filter,
            RelKind::Calc(_) => RelKindTag::Calc,
            RelKind::Project(_) => RelKindTag::Project,
            RelKind::Join(_) => RelKindTag::Join,
            RelKind::Correlate(_) => RelKindTag::Correlate,
            RelKind::Union(_) => RelKindTag::Union,
            RelKind::Intersect(_) => RelKindTag::Intersect,
            RelKind::Minus(_) => RelKindTag::Minus,
            RelKind::Aggregate(_) => RelKindTag::Aggregate,
            RelKind::Match(_) => RelKindTag::Match,
            RelKind::Sort(_) => RelKindTag::Sort,
            RelKind::Exchange(_) => RelKindTag::Exchange,
            RelKind::TableModify(_) => RelKindTag::TableModify,
            RelKind::Other(_) => RelKindTag::Other,
        }
    }

    /// 取回被包装的节点
    pub fn node(&self) -> &'a dyn RelNode {
        match *self {
            RelKind::TableScan(node) => node,
            RelKind::TableFunctionScan(node) => node,
            RelKind::Values(node) => node,
            RelKind::Filter(node) => node,
            RelKind::Calc(node) => node,
            RelKind::Project(node) => node,
            RelKind::Join(node) => node,
            RelKind::Correlate(node) => node,
            RelKind::Union(node) => node,
            RelKind::Intersect(node) => node,
            RelKind::Minus(node) => node,
            RelKind::Aggregate(node) => node,
            RelKind::Match(node) => node,
            RelKind::Sort(node) => node,
            RelKind::Exchange(node) => node,
            RelKind::TableModify(node) => node,
            RelKind::Other(node) => node,
        }
    }
}
