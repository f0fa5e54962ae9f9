//! 集成测试共享工具模块
//!
//! 提供覆盖全部节点种类的节点构造函数和记录调用的访问者

#![allow(dead_code)]

use std::sync::Arc;

use relvisitor::rel::{
    Aggregate, Calc, Correlate, Distribution, Exchange, Filter, Intersect, Join, JoinType,
    Match, Minus, ModifyOperation, Project, RelNode, RelNodeRef, Sort, SortKey,
    TableFunctionScan, TableModify, TableScan, Union, Values,
};
use relvisitor::{RelKindTag, RelNodeVisitor};

/// 目录之外的节点，模拟节点库后续新增的运算符
#[derive(Debug)]
pub struct Window {
    input: RelNodeRef,
}

impl Window {
    pub fn new(input: RelNodeRef) -> Self {
        Self { input }
    }
}

impl RelNode for Window {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn id(&self) -> i64 {
        -1
    }

    fn type_name(&self) -> &'static str {
        "Window"
    }

    fn col_names(&self) -> &[String] {
        self.input.col_names()
    }

    fn inputs(&self) -> Vec<&dyn RelNode> {
        vec![self.input.as_ref()]
    }
}

fn names(cols: &[&str]) -> Vec<String> {
    cols.iter().map(|c| c.to_string()).collect()
}

pub fn table_scan() -> RelNodeRef {
    Arc::new(TableScan::new(
        names(&["hr", "emps"]),
        names(&["empid", "deptno", "salary"]),
    ))
}

/// 为指定种类构造一个节点；`Other` 构造目录之外的节点
pub fn node_of(kind: RelKindTag) -> RelNodeRef {
    let scan = table_scan();
    match kind {
        RelKindTag::TableScan => scan,
        RelKindTag::TableFunctionScan => Arc::new(TableFunctionScan::new(
            "ramp(3)",
            vec![],
            names(&["i"]),
        )),
        RelKindTag::Values => Arc::new(Values::new(
            names(&["a"]),
            vec![names(&["1"]), names(&["2"])],
        )),
        RelKindTag::Filter => Arc::new(Filter::new(scan, "salary > 1000")),
        RelKindTag::Calc => Arc::new(Calc::new(
            scan,
            names(&["empid"]),
            Some("deptno = 10".to_string()),
            names(&["empid"]),
        )),
        RelKindTag::Project => Arc::new(Project::new(
            scan,
            names(&["empid", "salary * 2"]),
            names(&["empid", "double_salary"]),
        )),
        RelKindTag::Join => Arc::new(Join::new(
            scan,
            table_scan(),
            "$1 = $4",
            JoinType::Inner,
        )),
        RelKindTag::Correlate => Arc::new(Correlate::new(
            scan,
            table_scan(),
            "$cor0",
            JoinType::Left,
        )),
        RelKindTag::Union => Arc::new(Union::new(vec![scan, table_scan()], true)),
        RelKindTag::Intersect => Arc::new(Intersect::new(vec![scan, table_scan()], false)),
        RelKindTag::Minus => Arc::new(Minus::new(vec![scan, table_scan()], false)),
        RelKindTag::Aggregate => Arc::new(Aggregate::new(
            scan,
            vec![1],
            names(&["SUM(salary)"]),
        )),
        RelKindTag::Match => Arc::new(Match::new(scan, "A B+", names(&["empid"]))),
        RelKindTag::Sort => Arc::new(
            Sort::new(scan, vec![SortKey::desc(2)]).with_limit(None, Some(10)),
        ),
        RelKindTag::Exchange => Arc::new(Exchange::new(scan, Distribution::Hash(vec![1]))),
        RelKindTag::TableModify => Arc::new(TableModify::new(
            scan,
            names(&["hr", "emps"]),
            ModifyOperation::Insert,
        )),
        RelKindTag::Other => Arc::new(Window::new(scan)),
    }
}

/// 访问者记录的一次调用：被调用的方法与节点ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub method: RelKindTag,
    pub node_id: i64,
}

/// 只覆盖一个种类的访问者，记录所有被调用的方法
pub struct OverrideOne {
    pub target: RelKindTag,
    pub calls: Vec<Call>,
}

impl OverrideOne {
    pub fn new(target: RelKindTag) -> Self {
        Self {
            target,
            calls: Vec::new(),
        }
    }

    fn hit(&mut self, method: RelKindTag, node: &dyn RelNode) -> Result<RelKindTag, String> {
        self.calls.push(Call {
            method,
            node_id: node.id(),
        });
        Ok(method)
    }
}

/// 每个 `visit_*` 只在目标种类时作为覆盖生效，否则与默认实现一样转交给 `visit_other`
impl RelNodeVisitor for OverrideOne {
    type Output = RelKindTag;
    type Error = String;

    fn visit_table_scan(&mut self, node: &TableScan) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::TableScan {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::TableScan, node)
    }

    fn visit_table_function_scan(&mut self, node: &TableFunctionScan) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::TableFunctionScan {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::TableFunctionScan, node)
    }

    fn visit_values(&mut self, node: &Values) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Values {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Values, node)
    }

    fn visit_filter(&mut self, node: &Filter) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Filter {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Filter, node)
    }

    fn visit_calc(&mut self, node: &Calc) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Calc {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Calc, node)
    }

    fn visit_project(&mut self, node: &Project) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Project {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Project, node)
    }

    fn visit_join(&mut self, node: &Join) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Join {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Join, node)
    }

    fn visit_correlate(&mut self, node: &Correlate) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Correlate {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Correlate, node)
    }

    fn visit_union(&mut self, node: &Union) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Union {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Union, node)
    }

    fn visit_intersect(&mut self, node: &Intersect) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Intersect {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Intersect, node)
    }

    fn visit_minus(&mut self, node: &Minus) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Minus {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Minus, node)
    }

    fn visit_aggregate(&mut self, node: &Aggregate) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Aggregate {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Aggregate, node)
    }

    fn visit_match(&mut self, node: &Match) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Match {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Match, node)
    }

    fn visit_sort(&mut self, node: &Sort) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Sort {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Sort, node)
    }

    fn visit_exchange(&mut self, node: &Exchange) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::Exchange {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::Exchange, node)
    }

    fn visit_table_modify(&mut self, node: &TableModify) -> Result<RelKindTag, String> {
        if self.target != RelKindTag::TableModify {
            return self.visit_other(node);
        }
        self.hit(RelKindTag::TableModify, node)
    }

    fn visit_other(&mut self, other: &dyn RelNode) -> Result<RelKindTag, String> {
        self.calls.push(Call {
            method: RelKindTag::Other,
            node_id: other.id(),
        });
        Ok(RelKindTag::Other)
    }
}
