//! 连接节点实现
//!
//! 提供普通连接与关联连接（Correlate）

use super::types::JoinType;
use super::{next_rel_id, RelNode, RelNodeRef};
use crate::define_rel_node;

/// 计算连接的输出列：左侧列，加上（若连接类型投影右侧）右侧列
fn join_col_names(left: &dyn RelNode, right: &dyn RelNode, join_type: JoinType) -> Vec<String> {
    let mut col_names = left.col_names().to_vec();
    if join_type.projects_right() {
        col_names.extend(right.col_names().iter().cloned());
    }
    col_names
}

define_rel_node! {
    /// 连接节点
    pub struct Join {
        left: RelNodeRef,
        right: RelNodeRef,
        condition: String,
        join_type: JoinType,
    }
    inputs: binary
}

impl Join {
    pub fn new(
        left: RelNodeRef,
        right: RelNodeRef,
        condition: impl Into<String>,
        join_type: JoinType,
    ) -> Self {
        let col_names = join_col_names(left.as_ref(), right.as_ref(), join_type);
        Self {
            id: next_rel_id(),
            left,
            right,
            condition: condition.into(),
            join_type,
            col_names,
        }
    }

    pub fn left(&self) -> &RelNodeRef {
        &self.left
    }

    pub fn right(&self) -> &RelNodeRef {
        &self.right
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }
}

define_rel_node! {
    /// 关联连接节点：右侧针对左侧每一行求值
    pub struct Correlate {
        left: RelNodeRef,
        right: RelNodeRef,
        correlation_id: String,
        join_type: JoinType,
    }
    inputs: binary
}

impl Correlate {
    pub fn new(
        left: RelNodeRef,
        right: RelNodeRef,
        correlation_id: impl Into<String>,
        join_type: JoinType,
    ) -> Self {
        let col_names = join_col_names(left.as_ref(), right.as_ref(), join_type);
        Self {
            id: next_rel_id(),
            left,
            right,
            correlation_id: correlation_id.into(),
            join_type,
            col_names,
        }
    }

    pub fn left(&self) -> &RelNodeRef {
        &self.left
    }

    pub fn right(&self) -> &RelNodeRef {
        &self.right
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }
}
