//! 扫描类节点实现
//!
//! 提供表扫描、表函数扫描和常量值节点

use super::{next_rel_id, RelNodeRef};
use crate::define_rel_node;

define_rel_node! {
    /// 表扫描节点
    pub struct TableScan {
        table: Vec<String>,
    }
    inputs: leaf
}

impl TableScan {
    /// 创建新的表扫描节点，`table` 为限定表名
    pub fn new(table: Vec<String>, col_names: Vec<String>) -> Self {
        Self {
            id: next_rel_id(),
            table,
            col_names,
        }
    }

    /// 获取限定表名
    pub fn table(&self) -> &[String] {
        &self.table
    }

    /// 获取以点号连接的表名
    pub fn qualified_name(&self) -> String {
        self.table.join(".")
    }
}

define_rel_node! {
    /// 表函数扫描节点
    pub struct TableFunctionScan {
        inputs: Vec<RelNodeRef>,
        call: String,
    }
    inputs: multi
}

impl TableFunctionScan {
    pub fn new(call: impl Into<String>, inputs: Vec<RelNodeRef>, col_names: Vec<String>) -> Self {
        Self {
            id: next_rel_id(),
            inputs,
            call: call.into(),
            col_names,
        }
    }

    /// 获取函数调用表达式
    pub fn call(&self) -> &str {
        &self.call
    }
}

define_rel_node! {
    /// 常量值节点
    pub struct Values {
        tuples: Vec<Vec<String>>,
    }
    inputs: leaf
}

impl Values {
    pub fn new(col_names: Vec<String>, tuples: Vec<Vec<String>>) -> Self {
        Self {
            id: next_rel_id(),
            tuples,
            col_names,
        }
    }

    pub fn tuples(&self) -> &[Vec<String>] {
        &self.tuples
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }
}
