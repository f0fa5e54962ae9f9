//! 单输入节点实现
//!
//! 过滤、计算、投影、聚合、模式匹配、排序、交换和表修改节点

use super::types::{Distribution, ModifyOperation, SortKey};
use super::{next_rel_id, RelNode, RelNodeRef};
use crate::define_rel_node;

define_rel_node! {
    /// 过滤节点
    pub struct Filter {
        input: RelNodeRef,
        condition: String,
    }
    inputs: single
}

impl Filter {
    /// 创建新的过滤节点，输出列与输入相同
    pub fn new(input: RelNodeRef, condition: impl Into<String>) -> Self {
        let col_names = input.col_names().to_vec();
        Self {
            id: next_rel_id(),
            input,
            condition: condition.into(),
            col_names,
        }
    }

    pub fn input(&self) -> &RelNodeRef {
        &self.input
    }

    /// 获取过滤条件
    pub fn condition(&self) -> &str {
        &self.condition
    }
}

define_rel_node! {
    /// 计算节点：投影与过滤合并后的程序
    pub struct Calc {
        input: RelNodeRef,
        exprs: Vec<String>,
        condition: Option<String>,
    }
    inputs: single
}

impl Calc {
    pub fn new(
        input: RelNodeRef,
        exprs: Vec<String>,
        condition: Option<String>,
        col_names: Vec<String>,
    ) -> Self {
        Self {
            id: next_rel_id(),
            input,
            exprs,
            condition,
            col_names,
        }
    }

    pub fn input(&self) -> &RelNodeRef {
        &self.input
    }

    pub fn exprs(&self) -> &[String] {
        &self.exprs
    }

    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }
}

define_rel_node! {
    /// 投影节点
    pub struct Project {
        input: RelNodeRef,
        exprs: Vec<String>,
    }
    inputs: single
}

impl Project {
    pub fn new(input: RelNodeRef, exprs: Vec<String>, col_names: Vec<String>) -> Self {
        Self {
            id: next_rel_id(),
            input,
            exprs,
            col_names,
        }
    }

    pub fn input(&self) -> &RelNodeRef {
        &self.input
    }

    /// 获取投影表达式
    pub fn exprs(&self) -> &[String] {
        &self.exprs
    }
}

define_rel_node! {
    /// 聚合节点
    pub struct Aggregate {
        input: RelNodeRef,
        group_keys: Vec<usize>,
        agg_calls: Vec<String>,
    }
    inputs: single
}

impl Aggregate {
    /// 创建新的聚合节点，输出列为分组列加聚合调用
    pub fn new(input: RelNodeRef, group_keys: Vec<usize>, agg_calls: Vec<String>) -> Self {
        let mut col_names: Vec<String> = group_keys
            .iter()
            .filter_map(|key| input.col_names().get(*key).cloned())
            .collect();
        col_names.extend(agg_calls.iter().cloned());
        Self {
            id: next_rel_id(),
            input,
            group_keys,
            agg_calls,
            col_names,
        }
    }

    pub fn input(&self) -> &RelNodeRef {
        &self.input
    }

    pub fn group_keys(&self) -> &[usize] {
        &self.group_keys
    }

    pub fn agg_calls(&self) -> &[String] {
        &self.agg_calls
    }
}

define_rel_node! {
    /// 行模式匹配节点
    pub struct Match {
        input: RelNodeRef,
        pattern: String,
    }
    inputs: single
}

impl Match {
    pub fn new(input: RelNodeRef, pattern: impl Into<String>, col_names: Vec<String>) -> Self {
        Self {
            id: next_rel_id(),
            input,
            pattern: pattern.into(),
            col_names,
        }
    }

    pub fn input(&self) -> &RelNodeRef {
        &self.input
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

define_rel_node! {
    /// 排序节点，可附带偏移与限制
    pub struct Sort {
        input: RelNodeRef,
        collation: Vec<SortKey>,
        offset: Option<u64>,
        fetch: Option<u64>,
    }
    inputs: single
}

impl Sort {
    pub fn new(input: RelNodeRef, collation: Vec<SortKey>) -> Self {
        let col_names = input.col_names().to_vec();
        Self {
            id: next_rel_id(),
            input,
            collation,
            offset: None,
            fetch: None,
            col_names,
        }
    }

    /// 设置偏移与限制
    pub fn with_limit(mut self, offset: Option<u64>, fetch: Option<u64>) -> Self {
        self.offset = offset;
        self.fetch = fetch;
        self
    }

    pub fn input(&self) -> &RelNodeRef {
        &self.input
    }

    pub fn collation(&self) -> &[SortKey] {
        &self.collation
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub fn fetch(&self) -> Option<u64> {
        self.fetch
    }
}

define_rel_node! {
    /// 数据交换节点
    pub struct Exchange {
        input: RelNodeRef,
        distribution: Distribution,
    }
    inputs: single
}

impl Exchange {
    pub fn new(input: RelNodeRef, distribution: Distribution) -> Self {
        let col_names = input.col_names().to_vec();
        Self {
            id: next_rel_id(),
            input,
            distribution,
            col_names,
        }
    }

    pub fn input(&self) -> &RelNodeRef {
        &self.input
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }
}

define_rel_node! {
    /// 表修改节点
    pub struct TableModify {
        input: RelNodeRef,
        table: Vec<String>,
        operation: ModifyOperation,
    }
    inputs: single
}

impl TableModify {
    /// 创建表修改节点，输出单列受影响行数
    pub fn new(input: RelNodeRef, table: Vec<String>, operation: ModifyOperation) -> Self {
        Self {
            id: next_rel_id(),
            input,
            table,
            operation,
            col_names: vec!["ROWCOUNT".to_string()],
        }
    }

    pub fn input(&self) -> &RelNodeRef {
        &self.input
    }

    pub fn table(&self) -> &[String] {
        &self.table
    }

    pub fn operation(&self) -> ModifyOperation {
        self.operation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rel::TableScan;
    use std::sync::Arc;

    fn scan() -> RelNodeRef {
        Arc::new(TableScan::new(
            vec!["emp".to_string()],
            vec!["deptno".to_string(), "sal".to_string()],
        ))
    }

    #[test]
    fn test_aggregate_output_columns() {
        let agg = Aggregate::new(scan(), vec![0], vec!["SUM(sal)".to_string()]);
        assert_eq!(agg.col_names(), &["deptno".to_string(), "SUM(sal)".to_string()]);
        assert_eq!(agg.group_keys(), &[0]);
    }

    #[test]
    fn test_sort_with_limit() {
        let sort = Sort::new(scan(), vec![SortKey::desc(1)]).with_limit(Some(5), Some(10));
        assert_eq!(sort.offset(), Some(5));
        assert_eq!(sort.fetch(), Some(10));
        assert_eq!(sort.collation().len(), 1);
        assert_eq!(sort.inputs().len(), 1);
    }

    #[test]
    fn test_table_modify_rowcount() {
        let modify = TableModify::new(scan(), vec!["emp".to_string()], ModifyOperation::Delete);
        assert_eq!(modify.col_names(), &["ROWCOUNT".to_string()]);
        assert_eq!(modify.operation(), ModifyOperation::Delete);
    }
}
