//! 关系节点的辅助值类型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 连接类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Semi,
    Anti,
}

impl JoinType {
    pub fn name(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::Full => "FULL",
            JoinType::Semi => "SEMI",
            JoinType::Anti => "ANTI",
        }
    }

    /// 右侧的列是否出现在输出中
    pub fn projects_right(&self) -> bool {
        !matches!(self, JoinType::Semi | JoinType::Anti)
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// 排序键：按输入列序号排序
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    pub field: usize,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(field: usize) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: usize) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// 数据分布方式
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    Singleton,
    Hash(Vec<usize>),
    RoundRobin,
    Broadcast,
    Any,
}

/// 表修改操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifyOperation {
    Insert,
    Update,
    Delete,
    Merge,
}

impl fmt::Display for ModifyOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModifyOperation::Insert => "INSERT",
            ModifyOperation::Update => "UPDATE",
            ModifyOperation::Delete => "DELETE",
            ModifyOperation::Merge => "MERGE",
        };
        write!(f, "{}", name)
    }
}
