//! 关系节点宏定义
//!
//! 提供宏来简化关系节点的定义，减少样板代码

/// 定义关系节点的宏
///
/// 生成节点结构体、公共访问方法以及 `RelNode` 实现。
/// `inputs` 指定输入形态：
/// - `leaf`：无输入
/// - `single`：字段 `input: RelNodeRef`
/// - `binary`：字段 `left: RelNodeRef` 与 `right: RelNodeRef`
/// - `multi`：字段 `inputs: Vec<RelNodeRef>`
///
/// # 示例
/// ```ignore
/// define_rel_node! {
///     pub struct Filter {
///         input: RelNodeRef,
///         condition: String,
///     }
///     inputs: single
/// }
/// ```
#[macro_export]
macro_rules! define_rel_node {
    (@inputs $node:ident, leaf) => {
        Vec::new()
    };
    (@inputs $node:ident, single) => {
        vec![&*$node.input]
    };
    (@inputs $node:ident, binary) => {
        vec![&*$node.left, &*$node.right]
    };
    (@inputs $node:ident, multi) => {
        $node.inputs.iter().map(|input| &**input).collect()
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $type:ty),* $(,)?
        }
        inputs: $arity:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            id: i64,
            $($field: $type,)*
            col_names: Vec<String>,
        }

        impl $name {
            pub fn id(&self) -> i64 {
                self.id
            }

            pub fn type_name(&self) -> &'static str {
                stringify!($name)
            }

            pub fn col_names(&self) -> &[String] {
                &self.col_names
            }
        }

        impl $crate::rel::RelNode for $name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn id(&self) -> i64 {
                self.id
            }

            fn type_name(&self) -> &'static str {
                stringify!($name)
            }

            fn col_names(&self) -> &[String] {
                &self.col_names
            }

            fn inputs(&self) -> Vec<&dyn $crate::rel::RelNode> {
                #[allow(unused_variables)]
                let node = self;
                $crate::define_rel_node!(@inputs node, $arity)
            }
        }
    };
}
