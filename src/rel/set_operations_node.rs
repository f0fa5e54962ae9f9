//! 集合操作节点实现
//!
//! 提供 UNION、INTERSECT 与 MINUS 节点，`all` 表示保留重复行

use super::{next_rel_id, RelNode, RelNodeRef};
use crate::define_rel_node;

/// 集合操作的输出列取第一个输入的列名
fn first_input_col_names(inputs: &[RelNodeRef]) -> Vec<String> {
    inputs
        .first()
        .map(|input| input.col_names().to_vec())
        .unwrap_or_default()
}

define_rel_node! {
    /// 并集节点
    pub struct Union {
        inputs: Vec<RelNodeRef>,
        all: bool,
    }
    inputs: multi
}

impl Union {
    pub fn new(inputs: Vec<RelNodeRef>, all: bool) -> Self {
        let col_names = first_input_col_names(&inputs);
        Self {
            id: next_rel_id(),
            inputs,
            all,
            col_names,
        }
    }

    pub fn all(&self) -> bool {
        self.all
    }
}

define_rel_node! {
    /// 交集节点
    pub struct Intersect {
        inputs: Vec<RelNodeRef>,
        all: bool,
    }
    inputs: multi
}

impl Intersect {
    pub fn new(inputs: Vec<RelNodeRef>, all: bool) -> Self {
        let col_names = first_input_col_names(&inputs);
        Self {
            id: next_rel_id(),
            inputs,
            all,
            col_names,
        }
    }

    pub fn all(&self) -> bool {
        self.all
    }
}

define_rel_node! {
    /// 差集节点
    pub struct Minus {
        inputs: Vec<RelNodeRef>,
        all: bool,
    }
    inputs: multi
}

impl Minus {
    pub fn new(inputs: Vec<RelNodeRef>, all: bool) -> Self {
        let col_names = first_input_col_names(&inputs);
        Self {
            id: next_rel_id(),
            inputs,
            all,
            col_names,
        }
    }

    pub fn all(&self) -> bool {
        self.all
    }
}
