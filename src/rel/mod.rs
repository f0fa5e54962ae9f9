//! 关系代数节点
//!
//! 计划树中每个节点代表一个关系运算符。节点层次对访问者而言是封闭的：
//! 节点自身不提供 `accept` 入口，分派由调用方根据运行时类型完成
//! （见 `crate::visitor::ReverseAccept`）。
//!
//! 节点构造后不可变，通过 `RelNodeRef` 共享。

pub mod macros;

pub mod join_nodes;
pub mod node_id_generator;
pub mod scan_nodes;
pub mod set_operations_node;
pub mod single_input_nodes;
pub mod types;

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

pub use join_nodes::{Correlate, Join};
pub use node_id_generator::next_rel_id;
pub use scan_nodes::{TableFunctionScan, TableScan, Values};
pub use set_operations_node::{Intersect, Minus, Union};
pub use single_input_nodes::{
    Aggregate, Calc, Exchange, Filter, Match, Project, Sort, TableModify,
};
pub use types::{Distribution, JoinType, ModifyOperation, SortDirection, SortKey};

/// 共享的关系节点引用
pub type RelNodeRef = Arc<dyn RelNode>;

/// 关系节点基础特征
///
/// 下游可以为自定义运算符实现该特征，这类节点在分派时归为 "other"。
pub trait RelNode: Any + Debug + Send + Sync {
    /// 用于运行时类型判定
    fn as_any(&self) -> &dyn Any;

    /// 获取节点的唯一ID
    fn id(&self) -> i64;

    /// 获取节点类型的名称
    fn type_name(&self) -> &'static str;

    /// 获取输出列名
    fn col_names(&self) -> &[String];

    /// 获取输入节点
    fn inputs(&self) -> Vec<&dyn RelNode>;
}

impl dyn RelNode {
    /// 判断节点是否为类型 `T`
    pub fn is<T: RelNode>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// 尝试将节点转换为具体类型 `T`
    pub fn downcast_ref<T: RelNode>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
